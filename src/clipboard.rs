use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Clipboard;

use crate::app_config;
use crate::persisted_store::js_err;
use crate::toast::ToastHandle;
use portfolio_core::copy_toast_message;

// A missing clipboard API is an error, not a throw.
pub(crate) async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("window unavailable")?;
    let navigator = window.navigator();
    let value = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_err)?;
    if value.is_undefined() || value.is_null() {
        return Err("clipboard unavailable".to_string());
    }
    let clipboard = value
        .dyn_into::<Clipboard>()
        .map_err(|_| "clipboard unavailable".to_string())?;
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(js_err)?;
    Ok(())
}

pub(crate) fn copy_with_toast(text: String, label: &'static str, toast: ToastHandle) {
    spawn_local(async move {
        let outcome = write_text(&text).await;
        if let Err(err) = &outcome {
            if app_config::debug_enabled() {
                gloo::console::warn!("clipboard write failed", err.clone());
            }
        }
        toast.show(copy_toast_message(label, &outcome));
    });
}
