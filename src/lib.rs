/// Transcript Grabber - Chrome Extension for copying YouTube transcripts
/// Built with Rust + WASM + Yew

pub mod browser;
pub mod controller;
pub mod error;
pub mod heuristics;
pub mod host;
pub mod icons;
pub mod page_data;
pub mod timed_text;
pub mod ui;
pub mod video_id;

use wasm_bindgen::prelude::*;

pub use error::TranscriptError;
pub use page_data::{ExtractionOutcome, PageSnapshot};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export core functions for JavaScript access
#[wasm_bindgen]
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id::extract_video_id(url)
}

/// Run the heuristic chain over a probe payload and return the tagged outcome.
#[wasm_bindgen]
pub fn classify_page(snapshot: JsValue) -> Result<JsValue, JsValue> {
    let snapshot: PageSnapshot = serde_wasm_bindgen::from_value(snapshot)?;
    let outcome = heuristics::extract(&snapshot);
    Ok(serde_wasm_bindgen::to_value(&outcome)?)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
