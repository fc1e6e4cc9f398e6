/// Ordered transcript-location heuristics
///
/// Each heuristic looks at one aspect of a [`PageSnapshot`] and either produces an
/// [`ExtractionOutcome`] or passes. The chain stops at the first one that answers.
use std::sync::LazyLock;

use regex::Regex;

use crate::page_data::{ExtractionOutcome, PageSnapshot};

/// Literal that marks a script block carrying a captions manifest.
pub const CAPTION_TRACKS_MARKER: &str = "\"captionTracks\"";

static CAPTION_TRACKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""captionTracks":\[(.+?)\]"#).unwrap());

static BASE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""baseUrl":"([^"]+)""#).unwrap());

pub trait Heuristic {
    fn name(&self) -> &'static str;
    fn try_extract(&self, page: &PageSnapshot) -> Option<ExtractionOutcome>;
}

/// First caption track of `ytInitialPlayerResponse`.
#[derive(Debug, Default)]
pub struct PlayerResponseCaptions;

impl Heuristic for PlayerResponseCaptions {
    fn name(&self) -> &'static str {
        "player-response"
    }

    fn try_extract(&self, page: &PageSnapshot) -> Option<ExtractionOutcome> {
        // No language negotiation: the first listed track always wins, and later
        // entries are never inspected
        page.captions
            .as_ref()?
            .pointer("/playerCaptionsTracklistRenderer/captionTracks/0/baseUrl")?
            .as_str()
            .map(|url| ExtractionOutcome::Url(url.to_string()))
    }
}

/// Transcript panel already rendered on the page.
#[derive(Debug, Default)]
pub struct RenderedPanel;

impl Heuristic for RenderedPanel {
    fn name(&self) -> &'static str {
        "rendered-panel"
    }

    fn try_extract(&self, page: &PageSnapshot) -> Option<ExtractionOutcome> {
        if page.panel_segments.is_empty() {
            return None;
        }

        let text = page
            .panel_segments
            .iter()
            .map(|segment| segment.trim())
            .collect::<Vec<_>>()
            .join(" ");

        Some(ExtractionOutcome::Text(text))
    }
}

/// A player button whose label mentions the transcript.
///
/// Reports the button only; opening the panel and waiting for it is not attempted.
#[derive(Debug, Default)]
pub struct TranscriptButton;

impl Heuristic for TranscriptButton {
    fn name(&self) -> &'static str {
        "transcript-button"
    }

    fn try_extract(&self, page: &PageSnapshot) -> Option<ExtractionOutcome> {
        page.button_labels
            .iter()
            .any(|label| label.contains("transcript"))
            .then_some(ExtractionOutcome::ButtonFound)
    }
}

/// Raw `"captionTracks"` JSON embedded in an inline script.
#[derive(Debug, Default)]
pub struct ScriptTagCaptions;

impl Heuristic for ScriptTagCaptions {
    fn name(&self) -> &'static str {
        "script-tag"
    }

    fn try_extract(&self, page: &PageSnapshot) -> Option<ExtractionOutcome> {
        page.scripts
            .iter()
            .filter(|content| content.contains(CAPTION_TRACKS_MARKER))
            .find_map(|content| caption_url_from_script(content))
            .map(ExtractionOutcome::Url)
    }
}

fn caption_url_from_script(content: &str) -> Option<String> {
    let tracks = CAPTION_TRACKS_RE.captures(content)?.get(1)?.as_str();
    let url = BASE_URL_RE.captures(tracks)?.get(1)?.as_str();
    Some(url.replace("\\u0026", "&"))
}

/// The heuristics in the order they are tried.
pub fn default_heuristics() -> Vec<Box<dyn Heuristic>> {
    vec![
        Box::new(PlayerResponseCaptions),
        Box::new(RenderedPanel),
        Box::new(TranscriptButton),
        Box::new(ScriptTagCaptions),
    ]
}

/// Run `heuristics` in order; the first answer wins.
pub fn run_heuristics(page: &PageSnapshot, heuristics: &[Box<dyn Heuristic>]) -> ExtractionOutcome {
    for heuristic in heuristics {
        if let Some(outcome) = heuristic.try_extract(page) {
            log::debug!("heuristic {} matched: {}", heuristic.name(), outcome.kind());
            return outcome;
        }
        log::trace!("heuristic {} found nothing", heuristic.name());
    }
    ExtractionOutcome::NotFound
}

/// Run the default heuristic chain.
pub fn extract(page: &PageSnapshot) -> ExtractionOutcome {
    run_heuristics(page, &default_heuristics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page() -> PageSnapshot {
        PageSnapshot::new()
    }

    fn captions(urls: &[(&str, &str)]) -> serde_json::Value {
        let tracks: Vec<_> = urls
            .iter()
            .map(|(url, lang)| json!({ "baseUrl": url, "languageCode": lang }))
            .collect();
        json!({ "playerCaptionsTracklistRenderer": { "captionTracks": tracks } })
    }

    #[test]
    fn test_empty_page_is_not_found() {
        assert_eq!(extract(&page()), ExtractionOutcome::NotFound);
    }

    #[test]
    fn test_player_response_picks_first_track() {
        let mut page = page();
        page.captions = Some(captions(&[
            ("https://example.com/api/timedtext?lang=fr", "fr"),
            ("https://example.com/api/timedtext?lang=en", "en"),
        ]));

        assert_eq!(
            extract(&page),
            ExtractionOutcome::Url("https://example.com/api/timedtext?lang=fr".to_string())
        );
    }

    #[test]
    fn test_player_response_empty_tracks_falls_through() {
        let mut page = page();
        page.captions = Some(captions(&[]));
        page.panel_segments = vec!["hi".to_string()];

        assert_eq!(extract(&page), ExtractionOutcome::Text("hi".to_string()));
    }

    #[test]
    fn test_player_response_without_renderer_falls_through() {
        let mut page = page();
        page.captions = Some(json!({ "somethingElse": true }));

        assert_eq!(PlayerResponseCaptions.try_extract(&page), None);
    }

    #[test]
    fn test_player_response_first_track_without_url() {
        let mut page = page();
        page.captions = Some(json!({
            "playerCaptionsTracklistRenderer": {
                "captionTracks": [{ "languageCode": "en" }, { "baseUrl": "https://later" }]
            }
        }));

        // Never falls back to a later track
        assert_eq!(PlayerResponseCaptions.try_extract(&page), None);
    }

    #[test]
    fn test_player_response_ignores_malformed_later_tracks() {
        let mut page = page();
        page.captions = Some(json!({
            "playerCaptionsTracklistRenderer": {
                "captionTracks": [
                    { "baseUrl": "https://first", "languageCode": "en" },
                    { "baseUrl": "https://second", "languageCode": { "unexpected": true } },
                    "not even an object"
                ]
            }
        }));

        assert_eq!(extract(&page), ExtractionOutcome::Url("https://first".to_string()));
    }

    #[test]
    fn test_player_response_tracks_not_a_list() {
        let mut page = page();
        page.captions = Some(json!({
            "playerCaptionsTracklistRenderer": { "captionTracks": { "baseUrl": "https://x" } }
        }));

        assert_eq!(PlayerResponseCaptions.try_extract(&page), None);
    }

    #[test]
    fn test_player_response_wins_over_panel() {
        let mut page = page();
        page.captions = Some(captions(&[("https://first", "en")]));
        page.panel_segments = vec!["text".to_string()];

        assert_eq!(extract(&page), ExtractionOutcome::Url("https://first".to_string()));
    }

    #[test]
    fn test_rendered_panel_joins_trimmed_segments() {
        let mut page = page();
        page.panel_segments = vec![
            "  Hello there ".to_string(),
            "\ngeneral\n".to_string(),
            "Kenobi".to_string(),
        ];

        assert_eq!(
            extract(&page),
            ExtractionOutcome::Text("Hello there general Kenobi".to_string())
        );
    }

    #[test]
    fn test_rendered_panel_single_segment() {
        let mut page = page();
        page.panel_segments = vec![" only ".to_string()];

        assert_eq!(
            RenderedPanel.try_extract(&page),
            Some(ExtractionOutcome::Text("only".to_string()))
        );
    }

    #[test]
    fn test_rendered_panel_no_segments() {
        assert_eq!(RenderedPanel.try_extract(&page()), None);
    }

    #[test]
    fn test_transcript_button() {
        let mut page = page();
        page.button_labels = vec![
            "Settings".to_string(),
            "Show transcript".to_string(),
        ];

        assert_eq!(extract(&page), ExtractionOutcome::ButtonFound);
    }

    #[test]
    fn test_transcript_button_label_is_case_sensitive() {
        let mut page = page();
        page.button_labels = vec!["Transcript".to_string()];

        assert_eq!(TranscriptButton.try_extract(&page), None);
    }

    #[test]
    fn test_button_wins_over_script_tag() {
        let mut page = page();
        page.button_labels = vec!["Open transcript".to_string()];
        page.scripts = vec![r#"{"captionTracks":[{"baseUrl":"https://x"}]}"#.to_string()];

        assert_eq!(extract(&page), ExtractionOutcome::ButtonFound);
    }

    #[test]
    fn test_script_tag_unescapes_ampersands() {
        let mut page = page();
        page.scripts = vec![
            "var unrelated = 1;".to_string(),
            r#"var ytInitialPlayerResponse = {"captions":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc\u0026lang=en\u0026fmt=srv1","name":{"simpleText":"English"}},{"baseUrl":"https://second"}]}};"#.to_string(),
        ];

        assert_eq!(
            extract(&page),
            ExtractionOutcome::Url(
                "https://www.youtube.com/api/timedtext?v=abc&lang=en&fmt=srv1".to_string()
            )
        );
    }

    #[test]
    fn test_script_tag_marker_without_url() {
        let mut page = page();
        page.scripts = vec![
            r#"{"captionTracks":[{"languageCode":"en"}]}"#.to_string(),
            r#"{"captionTracks":[{"baseUrl":"https://next-script"}]}"#.to_string(),
        ];

        assert_eq!(
            ScriptTagCaptions.try_extract(&page),
            Some(ExtractionOutcome::Url("https://next-script".to_string()))
        );
    }

    #[test]
    fn test_script_tag_requires_marker() {
        let mut page = page();
        page.scripts = vec![r#"{"baseUrl":"https://x"}"#.to_string()];

        assert_eq!(extract(&page), ExtractionOutcome::NotFound);
    }

    #[test]
    fn test_custom_chain_order() {
        let mut page = page();
        page.captions = Some(captions(&[("https://first", "en")]));
        page.panel_segments = vec!["text".to_string()];

        let chain: Vec<Box<dyn Heuristic>> = vec![Box::new(RenderedPanel), Box::new(PlayerResponseCaptions)];

        assert_eq!(run_heuristics(&page, &chain), ExtractionOutcome::Text("text".to_string()));
        assert_eq!(run_heuristics(&page, &[]), ExtractionOutcome::NotFound);
    }
}
