//! Order confirmation page: picks one view per fetch result.

use super::analytics::AnalyticsDispatcher;
use super::content::OrderPlacedContent;
use super::skeleton::OrderPlacedSkeleton;
use crate::domain::a001_order_placed::model::{
    OrderPlacedView, ERROR_INVALID, ERROR_NOT_LOGGED_IN,
};
use crate::domain::a001_order_placed::view_model::OrderPlacedVm;
use crate::shared::error_message::ErrorMessage;
use crate::shared::page_frame::PageFrame;
use crate::shared::query_params::current_order_group;
use leptos::prelude::*;

#[component]
pub fn OrderPlacedPage(
    /// Forwarded to the header untouched.
    in_store: bool,
) -> impl IntoView {
    let vm = OrderPlacedVm::new(current_order_group());
    vm.load();
    let view_state = vm.view();

    move || {
        let state = view_state.get();
        // non-content views dispatch nothing
        let events = state.analytics_events();
        match state {
            OrderPlacedView::Loading => view! {
                <PageFrame page_id="order-placed--loading" state="loading">
                    <OrderPlacedSkeleton />
                </PageFrame>
            }
            .into_any(),
            OrderPlacedView::Unauthorized => view! {
                <PageFrame page_id="order-placed--unauthorized" state="unauthorized">
                    <ErrorMessage error_id=ERROR_NOT_LOGGED_IN />
                </PageFrame>
            }
            .into_any(),
            OrderPlacedView::Invalid => view! {
                <PageFrame page_id="order-placed--invalid" state="invalid">
                    <ErrorMessage error_id=ERROR_INVALID />
                </PageFrame>
            }
            .into_any(),
            OrderPlacedView::Content(group) => view! {
                <PageFrame page_id="order-placed--content" state="content">
                    <AnalyticsDispatcher events=events />
                    <OrderPlacedContent group=group in_store=in_store />
                </PageFrame>
            }
            .into_any(),
        }
    }
}
