//! PageFrame — root wrapper of the confirmation page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`          — `"{page}--{state}"`, e.g. `"order-placed--content"`
//!   - `data-state`  — the view variant currently rendered
//!
//! Usage:
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="order-placed--loading" state="loading">
//!         <OrderPlacedSkeleton />
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{page}--{state}`.
    page_id: &'static str,
    /// View variant name, mirrored into `data-state` and the BEM modifier.
    state: &'static str,
    children: Children,
) -> impl IntoView {
    let class = format!("page page--{state}");

    view! {
        <div id=page_id class=class data-state=state>
            {children()}
        </div>
    }
}
