use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys;
use web_sys::window;

pub const SHARE_TITLE: &str = "Medical Image Analysis Results";
pub const SHARE_TEXT: &str = "Check out my medical image analysis results!";

#[derive(Clone, Debug, PartialEq)]
pub struct SharePayload {
    pub title: &'static str,
    pub text: &'static str,
    pub url: String,
}

impl SharePayload {
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            title: SHARE_TITLE,
            text: SHARE_TEXT,
            url: url.into(),
        }
    }

    fn to_js(&self) -> Result<JsValue, JsValue> {
        let data = js_sys::Object::new();
        js_sys::Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(self.title))?;
        js_sys::Reflect::set(&data, &JsValue::from_str("text"), &JsValue::from_str(self.text))?;
        js_sys::Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(&self.url))?;
        Ok(data.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share sheet was opened.
    Started,
    /// No native share capability; the caller shows a notice instead.
    Unsupported,
}

/// Opens the platform share sheet for the current page, if there is one.
pub fn share_current_page() -> ShareOutcome {
    let Some(window) = window() else {
        return ShareOutcome::Unsupported;
    };
    let url = window.location().href().unwrap_or_default();
    let navigator = window.navigator();

    // navigator.share is looked up dynamically; most desktop browsers lack it.
    let share = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("share"))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok());
    let Some(share) = share else {
        return ShareOutcome::Unsupported;
    };

    let payload = match SharePayload::for_url(url).to_js() {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Failed to build share payload: {:?}", e);
            return ShareOutcome::Unsupported;
        }
    };

    match share.call1(navigator.as_ref(), &payload) {
        Ok(promise) => {
            if let Ok(promise) = promise.dyn_into::<js_sys::Promise>() {
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::info!("Share dismissed: {:?}", e);
                    }
                });
            }
            ShareOutcome::Started
        }
        Err(e) => {
            log::warn!("navigator.share threw: {:?}", e);
            ShareOutcome::Unsupported
        }
    }
}
