use crate::shared::analytics::dispatch_events;
use leptos::prelude::*;

/// Sends the order group's analytics events once, after the content mounts.
#[component]
pub fn AnalyticsDispatcher(events: Vec<serde_json::Value>) -> impl IntoView {
    Effect::new(move |_| dispatch_events(events.clone()));
}
