//! Browser timers as futures.
//!
//! `setTimeout` is wrapped in a `js_sys::Promise` and awaited through
//! `wasm_bindgen_futures::JsFuture`, so Dioxus tasks can simply `.await` a delay.

use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Resolve after `ms` milliseconds. Resolves immediately when there is no
/// window to schedule on.
pub async fn sleep_ms(ms: u32) {
    let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
    let promise = Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    if let Err(e) = JsFuture::from(promise).await {
        log::warn!("timer promise rejected: {:?}", e);
    }
}
