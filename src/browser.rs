/// Chrome extension implementation of [`PopupHost`]
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::TranscriptError;
use crate::host::PopupHost;
use crate::page_data::{PageSnapshot, TabInfo};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn probeTranscriptSources(tab_id: i32) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Default)]
pub struct BrowserHost;

impl PopupHost for BrowserHost {
    async fn active_tab(&self) -> Result<TabInfo, TranscriptError> {
        let tab_js = getActiveTab()
            .await
            .map_err(|e| TranscriptError::Host(format!("Failed to get tab: {}", describe(&e))))?;

        serde_wasm_bindgen::from_value(tab_js)
            .map_err(|e| TranscriptError::Host(format!("Failed to parse tab: {}", e)))
    }

    async fn probe_page(&self, tab_id: i32) -> Result<PageSnapshot, TranscriptError> {
        let snapshot_js = probeTranscriptSources(tab_id)
            .await
            .map_err(|e| TranscriptError::Host(format!("Failed to read page: {}", describe(&e))))?;

        if snapshot_js.is_null() || snapshot_js.is_undefined() {
            return Err(TranscriptError::Host("Page probe returned nothing".to_string()));
        }

        serde_wasm_bindgen::from_value(snapshot_js)
            .map_err(|e| TranscriptError::Host(format!("Failed to parse page data: {}", e)))
    }

    async fn fetch_text(&self, url: &str) -> Result<String, TranscriptError> {
        let window = web_sys::window()
            .ok_or_else(|| TranscriptError::Host("No window available".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(network_error)?;
        let response: web_sys::Response = response.dyn_into().map_err(network_error)?;

        let body = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;

        body.as_string()
            .ok_or_else(|| TranscriptError::Network("Response body is not text".to_string()))
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), TranscriptError> {
        let window = web_sys::window()
            .ok_or_else(|| TranscriptError::Clipboard("No window available".to_string()))?;

        JsFuture::from(window.navigator().clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| TranscriptError::Clipboard(describe(&e)))
    }
}

fn network_error(value: JsValue) -> TranscriptError {
    TranscriptError::Network(describe(&value))
}

/// Best-effort human readable form of a thrown JS value.
fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
