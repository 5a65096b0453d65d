pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::host::HostEnvironment;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let host = HostEnvironment::detect();
    log::debug!("order placed page starting: {:?}", host);

    leptos::mount::mount_to_body(move || view! { <App host=host /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
