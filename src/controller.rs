/// Popup state machine and the async flows that feed it
use uuid::Uuid;

use crate::error::TranscriptError;
use crate::heuristics;
use crate::host::PopupHost;
use crate::page_data::{ExtractionOutcome, PROBE_VERSION};
use crate::timed_text::parse_timed_text;
use crate::video_id::extract_video_id;

pub const COPY_LABEL: &str = "Copy to Clipboard";
pub const COPIED_LABEL: &str = "Copied!";
/// How long the copy button reads "Copied!".
pub const COPY_FEEDBACK_MS: u32 = 2000;

pub const STATUS_FETCHING: &str = "Fetching transcript...";
pub const STATUS_LOADED: &str = "Transcript loaded successfully!";
pub const STATUS_COPIED: &str = "Transcript copied to clipboard!";
pub const STATUS_NOTHING_TO_COPY: &str = "No transcript to copy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked "Get Transcript".
    FetchClicked,
    /// Active tab holds a video; extraction is under way.
    VideoDetected(String),
    FetchFinished(Result<String, TranscriptError>),
    /// User clicked "Copy to Clipboard".
    CopyClicked,
    CopyFinished(Result<(), TranscriptError>),
    CopyFeedbackExpired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchTranscript,
    WriteClipboard(String),
    ResetCopyLabel { after_ms: u32 },
}

/// Everything the popup displays, for the lifetime of the popup document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupState {
    transcript: String,
    status: String,
    /// Video the current or last successful attempt is about.
    video_id: Option<String>,
    transcript_visible: bool,
    fetching: bool,
    copied: bool,
}

impl PopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref()
    }

    pub fn transcript_visible(&self) -> bool {
        self.transcript_visible
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn copy_enabled(&self) -> bool {
        !self.transcript.is_empty()
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copied { COPIED_LABEL } else { COPY_LABEL }
    }

    /// Apply a message and return the effects the caller must run.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::FetchClicked => {
                // One attempt at a time
                if self.fetching {
                    return Vec::new();
                }
                self.fetching = true;
                vec![Effect::FetchTranscript]
            }
            Msg::VideoDetected(video_id) => {
                self.video_id = Some(video_id);
                self.status = STATUS_FETCHING.to_string();
                Vec::new()
            }
            Msg::FetchFinished(Ok(transcript)) => {
                self.fetching = false;
                self.transcript = transcript;
                self.transcript_visible = true;
                self.status = STATUS_LOADED.to_string();
                Vec::new()
            }
            Msg::FetchFinished(Err(err)) => {
                self.fetching = false;
                self.transcript.clear();
                self.video_id = None;
                self.transcript_visible = false;
                self.copied = false;
                self.status = err.status_message();
                Vec::new()
            }
            Msg::CopyClicked => {
                if !self.copy_enabled() {
                    self.status = STATUS_NOTHING_TO_COPY.to_string();
                    return Vec::new();
                }
                vec![Effect::WriteClipboard(self.transcript.clone())]
            }
            Msg::CopyFinished(Ok(())) => {
                self.status = STATUS_COPIED.to_string();
                self.copied = true;
                vec![Effect::ResetCopyLabel {
                    after_ms: COPY_FEEDBACK_MS,
                }]
            }
            Msg::CopyFinished(Err(err)) => {
                self.status = err.status_message();
                Vec::new()
            }
            Msg::CopyFeedbackExpired => {
                self.copied = false;
                Vec::new()
            }
        }
    }
}

/// Drive one fetch attempt to completion, reporting progress through `dispatch`.
///
/// Always ends with exactly one [`Msg::FetchFinished`].
pub async fn run_fetch<H: PopupHost>(host: &H, dispatch: impl Fn(Msg)) {
    let attempt = Uuid::new_v4();
    let result = fetch_transcript(host, attempt, &dispatch).await;
    match &result {
        Ok(text) => log::info!("attempt {}: transcript loaded ({} chars)", attempt, text.len()),
        Err(err) => log::warn!("attempt {}: {}", attempt, err),
    }
    dispatch(Msg::FetchFinished(result));
}

async fn fetch_transcript<H: PopupHost>(
    host: &H,
    attempt: Uuid,
    dispatch: &impl Fn(Msg),
) -> Result<String, TranscriptError> {
    let tab = host.active_tab().await?;
    let video_id = extract_video_id(&tab.url).ok_or(TranscriptError::InvalidUrl)?;
    log::debug!("attempt {}: video {} in tab {}", attempt, video_id, tab.id);
    dispatch(Msg::VideoDetected(video_id));

    let snapshot = host.probe_page(tab.id).await?;
    if snapshot.version != PROBE_VERSION {
        return Err(TranscriptError::UnsupportedProbe(snapshot.version));
    }

    match heuristics::extract(&snapshot) {
        ExtractionOutcome::Url(url) => resolve_transcript(host, &url).await,
        ExtractionOutcome::Text(text) => Ok(text),
        ExtractionOutcome::ButtonFound | ExtractionOutcome::NotFound => {
            Err(TranscriptError::Unavailable)
        }
    }
}

/// Fetch a timed-text document and flatten it to plain text.
pub async fn resolve_transcript<H: PopupHost>(host: &H, url: &str) -> Result<String, TranscriptError> {
    let xml = host.fetch_text(url).await?;
    parse_timed_text(&xml)
}

/// Write the loaded transcript to the clipboard.
pub async fn run_copy<H: PopupHost>(host: &H, text: &str, dispatch: impl Fn(Msg)) {
    let result = host.write_clipboard(text).await;
    if let Err(err) = &result {
        log::warn!("{}", err);
    }
    dispatch(Msg::CopyFinished(result));
}
