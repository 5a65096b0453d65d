//! Forwarding of order analytics events to the page's `window.dataLayer`.
//!
//! Dispatch is fire-and-forget: it runs one tick after the call so the page
//! renders first, and any failure is logged and dropped.

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Reflect};
use leptos::task::spawn_local;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

const DATA_LAYER: &str = "dataLayer";

/// Queues `events` for the analytics sink.
pub fn dispatch_events(events: Vec<serde_json::Value>) {
    if events.is_empty() {
        log::debug!("analytics: no events to dispatch");
        return;
    }
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        match push_to_data_layer(&events) {
            Ok(count) => log::debug!("analytics: pushed {} event(s)", count),
            Err(e) => log::warn!("analytics: dispatch failed: {}", e),
        }
    });
}

fn push_to_data_layer(events: &[serde_json::Value]) -> Result<usize, String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let data_layer = data_layer(&window)?;
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();

    for event in events {
        let value = event
            .serialize(&serializer)
            .map_err(|e| format!("Failed to serialize event: {}", e))?;
        data_layer.push(&value);
    }
    Ok(events.len())
}

fn data_layer(window: &web_sys::Window) -> Result<Array, String> {
    let key = JsValue::from_str(DATA_LAYER);
    let existing = Reflect::get(window, &key).map_err(|e| format!("{:?}", e))?;
    if let Ok(array) = existing.dyn_into::<Array>() {
        return Ok(array);
    }

    let array = Array::new();
    Reflect::set(window, &key, &array).map_err(|e| format!("{:?}", e))?;
    Ok(array)
}
