/// Data structures that cross the popup / page boundary
use serde::{Deserialize, Serialize};

/// Schema version of the payload returned by the in-page probe.
pub const PROBE_VERSION: u32 = 1;

/// The active browser tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabInfo {
    pub id: i32,
    #[serde(default)]
    pub url: String,
}

/// Plain facts collected inside the video page by the probe in `popup.js`.
///
/// Everything here is owned data: no live DOM or window references cross over.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub version: u32,
    /// `window.ytInitialPlayerResponse.captions`, if the page defined it.
    #[serde(default)]
    pub captions: Option<serde_json::Value>,
    /// Text content of each rendered transcript segment, document order.
    #[serde(default)]
    pub panel_segments: Vec<String>,
    /// `aria-label` of each player control button that has one, document order.
    #[serde(default)]
    pub button_labels: Vec<String>,
    /// Inline script bodies, document order.
    #[serde(default)]
    pub scripts: Vec<String>,
}

impl PageSnapshot {
    pub fn new() -> PageSnapshot {
        PageSnapshot {
            version: PROBE_VERSION,
            ..PageSnapshot::default()
        }
    }
}

/// Result of running the extraction heuristics against one page.
///
/// Serialized as `{"type": ..., "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    /// Timed-text document URL that still has to be fetched.
    Url(String),
    /// Transcript text read straight from the page.
    Text(String),
    /// A transcript toggle exists but no text was read.
    ButtonFound,
    NotFound,
}

impl ExtractionOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractionOutcome::Url(_) => "url",
            ExtractionOutcome::Text(_) => "text",
            ExtractionOutcome::ButtonFound => "button_found",
            ExtractionOutcome::NotFound => "not_found",
        }
    }
}
