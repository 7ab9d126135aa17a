//! Video URL and id helpers.

/// Extract a video id from a YouTube watch URL.
///
/// Best-effort string parsing matching the behavior users expect from
/// `url.split("v=")[-1].split("&")[0]`: the text after the last `v=`,
/// truncated at the next `&`. A string without `v=` comes back unchanged;
/// nothing here validates against a URL grammar or checks id length.
pub fn extract_video_id(url: &str) -> String {
    let after_v = url.rsplit("v=").next().unwrap_or(url);
    after_v.split('&').next().unwrap_or(after_v).to_string()
}

/// Build a canonical watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_extract_video_id_strips_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123&t=5"),
            "abc123"
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=XYZ&list=PL1&index=2"),
            "XYZ"
        );
    }

    #[test]
    fn test_extract_video_id_without_v_param_returns_input() {
        // Degenerate case: splitting on a marker that isn't there yields the
        // whole string. Documented behavior, not an accident.
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            "https://youtu.be/dQw4w9WgXcQ"
        );
        assert_eq!(extract_video_id("plain text"), "plain text");
    }

    #[test]
    fn test_extract_video_id_empty_value() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), "");
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
