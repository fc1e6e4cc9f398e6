/// Video identifier extraction for YouTube links
use url::Url;

/// Extract the video ID from a YouTube URL
///
/// Algorithm:
/// 1. Parse URL to get the hostname
/// 2. Hostname contains "youtube.com" → value of the `v` query parameter
/// 3. Hostname contains "youtu.be" → path with a single leading "/" stripped
/// 4. Anything else → None
///
/// An empty identifier counts as no identifier.
///
/// Examples:
/// - https://www.youtube.com/watch?v=abc123 → abc123
/// - https://youtu.be/xyz789 → xyz789
/// - https://example.com/video → None
pub fn extract_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let hostname = parsed.host_str()?;

    let id = if hostname.contains("youtube.com") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())?
    } else if hostname.contains("youtu.be") {
        let path = parsed.path();
        path.strip_prefix('/').unwrap_or(path).to_string()
    } else {
        return None;
    };

    if id.is_empty() { None } else { Some(id) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            extract_video_id("https://m.youtube.com/watch?v=abc123&t=42s"),
            Some("abc123".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtube.com/watch?list=PL1&v=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_short_link() {
        assert_eq!(
            extract_video_id("https://youtu.be/xyz789"),
            Some("xyz789".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/xyz789?t=30"),
            Some("xyz789".to_string())
        );
    }

    #[test]
    fn test_short_link_keeps_path_remainder() {
        // Only one leading slash is stripped
        assert_eq!(
            extract_video_id("https://youtu.be/xyz789/extra"),
            Some("xyz789/extra".to_string())
        );
    }

    #[test]
    fn test_unsupported_hosts() {
        assert_eq!(extract_video_id("https://example.com/video"), None);
        assert_eq!(extract_video_id("https://vimeo.com/123456789"), None);
        assert_eq!(extract_video_id("chrome://extensions"), None);
    }

    #[test]
    fn test_missing_identifier() {
        assert_eq!(extract_video_id("https://www.youtube.com/"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), None);
        assert_eq!(extract_video_id("https://youtu.be/"), None);
    }

    #[test]
    fn test_unparseable_url() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("not-a-url"), None);
    }
}
