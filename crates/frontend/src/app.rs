use crate::domain::a001_order_placed::ui::OrderPlacedPage;
use crate::shared::host::HostEnvironment;
use crate::shared::i18n::provide_locale;
use leptos::prelude::*;

#[component]
pub fn App(host: HostEnvironment) -> impl IntoView {
    // Locale is app-wide; the currency is scoped to the content view only.
    provide_locale(host.locale);

    view! {
        <OrderPlacedPage in_store=host.in_store />
    }
}
