use crate::shared::i18n::{message, use_locale};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Fixed error banner. `error_id` is the message key shown to the user and is
/// also exposed as `data-error-id`.
#[component]
pub fn ErrorMessage(error_id: &'static str) -> impl IntoView {
    let text = message(use_locale(), error_id);

    view! {
        <div class="order-placed__error" data-error-id=error_id>
            <MessageBar intent=MessageBarIntent::Error>
                <span class="order-placed__error-icon">{icon("alert-circle")}</span>
                <span>{text}</span>
            </MessageBar>
        </div>
    }
}
