use async_trait::async_trait;
use flavorshare_core::auth::Delay;
use js_sys::{Function, Promise};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// `setTimeout` wrapped in a promise.
pub struct TimeoutDelay;

#[async_trait(?Send)]
impl Delay for TimeoutDelay {
    async fn sleep(&self, millis: u32) {
        let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
            let scheduled = web_sys::window().map(|window| {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis as i32)
            });
            if !matches!(scheduled, Some(Ok(_))) {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("Timer rejected: {:?}", e);
        }
    }
}
