//! Timers and wall-clock formatting that work on both wasm32 and native.

use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Current date and time in the `fa-IR` locale, full date and long time.
#[cfg(target_arch = "wasm32")]
pub fn now_description() -> String {
    use wasm_bindgen::JsValue;

    let options = js_sys::Object::new();
    for (key, value) in [("dateStyle", "full"), ("timeStyle", "long")] {
        // On failure the date still renders, in the locale's short form.
        if js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value)).is_err() {
            tracing::warn!(key, value, "could not set date format option");
        }
    }
    js_sys::Date::new_0()
        .to_locale_string("fa-IR", &options)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_description() -> String {
    chrono::Local::now()
        .format("%A %-d %B %Y %H:%M:%S %:z")
        .to_string()
}
