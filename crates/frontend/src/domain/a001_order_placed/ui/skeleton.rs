use crate::shared::i18n::{message, use_locale};
use leptos::prelude::*;
use thaw::*;

/// Placeholder shown while the order group is being fetched.
#[component]
pub fn OrderPlacedSkeleton() -> impl IntoView {
    let loading_text = message(use_locale(), "order.loading");

    view! {
        <div class="order-placed__skeleton" aria-busy="true">
            <div class="skeleton skeleton--circle"></div>
            <div class="skeleton skeleton--title"></div>
            <div class="skeleton skeleton--line"></div>
            {(0..2)
                .map(|_| view! {
                    <div class="skeleton skeleton--card">
                        <div class="skeleton skeleton--line"></div>
                        <div class="skeleton skeleton--line skeleton--short"></div>
                    </div>
                })
                .collect_view()}
            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center;">
                <Spinner />
                <span>{loading_text}</span>
            </Flex>
        </div>
    }
}
