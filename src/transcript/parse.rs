//! Parsing helpers for YouTube caption data.
//!
//! Two formats are involved: the `"captionTracks"` JSON fragment embedded in
//! the watch page's player response, and the timedtext XML that the track's
//! base URL serves.

use super::TranscriptSegment;
use crate::error::{Result, TldwError};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// A caption track advertised by the watch page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    /// "asr" marks auto-generated tracks; manually authored tracks omit it.
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    /// Whether this track was auto-generated by speech recognition.
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

const TRACKS_MARKER: &str = "\"captionTracks\":";

/// Extract the caption track list from a watch page's HTML.
///
/// The player response is a large JSON blob inlined into a script tag; rather
/// than parse the whole document, locate the `"captionTracks"` key and let a
/// streaming deserializer consume exactly one JSON array from that point.
pub fn extract_caption_tracks(html: &str) -> Result<Vec<CaptionTrack>> {
    let start = html
        .find(TRACKS_MARKER)
        .ok_or_else(|| TldwError::Transcript("No caption tracks in watch page".to_string()))?;

    let json_start = &html[start + TRACKS_MARKER.len()..];
    let mut stream = serde_json::Deserializer::from_str(json_start).into_iter::<Vec<CaptionTrack>>();

    match stream.next() {
        Some(Ok(tracks)) if !tracks.is_empty() => Ok(tracks),
        Some(Ok(_)) => Err(TldwError::Transcript(
            "Caption track list is empty".to_string(),
        )),
        Some(Err(e)) => Err(TldwError::Transcript(format!(
            "Failed to parse caption tracks: {}",
            e
        ))),
        None => Err(TldwError::Transcript(
            "Truncated caption track data".to_string(),
        )),
    }
}

/// Pick the best track for a language preference list.
///
/// First language with any track wins; within a language, manually authored
/// tracks beat auto-generated ones. With no preference match, falls back to
/// the first track in page order.
pub fn select_track<'a>(tracks: &'a [CaptionTrack], languages: &[String]) -> Option<&'a CaptionTrack> {
    for lang in languages {
        let mut candidates = tracks
            .iter()
            .filter(|t| t.language_code == *lang || t.language_code.starts_with(&format!("{}-", lang)));
        if let Some(track) = candidates.clone().find(|t| !t.is_generated()) {
            return Some(track);
        }
        if let Some(track) = candidates.next() {
            return Some(track);
        }
    }
    tracks.first()
}

fn timedtext_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)<text start="([\d.]+)" dur="([\d.]+)"[^>]*>(.*?)</text>"#)
            .expect("Invalid regex")
    })
}

/// Parse timedtext XML into caption segments, in document order.
pub fn parse_timedtext(xml: &str) -> Vec<TranscriptSegment> {
    timedtext_regex()
        .captures_iter(xml)
        .filter_map(|caps| {
            let start: f64 = caps.get(1)?.as_str().parse().ok()?;
            let duration: f64 = caps.get(2)?.as_str().parse().ok()?;
            let text = unescape_entities(caps.get(3)?.as_str());
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment {
                text,
                start,
                duration,
            })
        })
        .collect()
}

/// Decode the XML/HTML entities YouTube emits in caption text.
///
/// Timedtext bodies are double-escaped in practice (`&amp;#39;`), so `&amp;`
/// is decoded last.
fn unescape_entities(text: &str) -> String {
    let mut out = text.replace('\n', " ");
    for (entity, replacement) in [
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&apos;", "'"),
        ("&nbsp;", " "),
    ] {
        out = out.replace(entity, replacement);
    }
    out = out.replace("&amp;", "&");
    // Second pass for the double-escaped forms now exposed.
    for (entity, replacement) in [("&#39;", "'"), ("&quot;", "\""), ("&lt;", "<"), ("&gt;", ">")] {
        out = out.replace(entity, replacement);
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACKS_FRAGMENT: &str = r#"...,"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc123&lang=en","name":{"simpleText":"English"},"languageCode":"en","kind":"asr"},{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc123&lang=de","name":{"simpleText":"German"},"languageCode":"de"}],"audioTracks":[]}},..."#;

    #[test]
    fn test_extract_caption_tracks() {
        let tracks = extract_caption_tracks(TRACKS_FRAGMENT).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].language_code, "en");
        assert!(tracks[0].is_generated());
        assert!(tracks[0].base_url.contains("lang=en"));
        assert!(!tracks[1].is_generated());
    }

    #[test]
    fn test_extract_caption_tracks_unescapes_url() {
        // serde decodes & into a literal ampersand
        let tracks = extract_caption_tracks(TRACKS_FRAGMENT).unwrap();
        assert!(tracks[0].base_url.contains("?v=abc123&lang=en"));
    }

    #[test]
    fn test_extract_caption_tracks_missing() {
        let err = extract_caption_tracks("<html><body>no captions here</body></html>");
        assert!(err.is_err());
    }

    #[test]
    fn test_select_track_prefers_manual_over_asr() {
        let tracks = extract_caption_tracks(TRACKS_FRAGMENT).unwrap();
        let picked = select_track(&tracks, &["de".to_string()]).unwrap();
        assert_eq!(picked.language_code, "de");

        // "en" only has an ASR track, so it is still picked for "en"
        let picked = select_track(&tracks, &["en".to_string()]).unwrap();
        assert_eq!(picked.language_code, "en");
    }

    #[test]
    fn test_select_track_falls_back_to_first() {
        let tracks = extract_caption_tracks(TRACKS_FRAGMENT).unwrap();
        let picked = select_track(&tracks, &["fr".to_string()]).unwrap();
        assert_eq!(picked.language_code, "en");
    }

    #[test]
    fn test_parse_timedtext() {
        let xml = r#"<?xml version="1.0" encoding="utf-8" ?><transcript><text start="0.0" dur="1.54">Hello</text><text start="1.54" dur="2.1">world</text></transcript>"#;
        let segments = parse_timedtext(xml);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Hello");
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].duration, 1.54);
        assert_eq!(segments[1].text, "world");
        assert_eq!(segments[1].start, 1.54);
    }

    #[test]
    fn test_parse_timedtext_unescapes_entities() {
        let xml = r#"<text start="0" dur="1">it&amp;#39;s &amp;quot;fine&amp;quot; &amp; done</text>"#;
        let segments = parse_timedtext(xml);
        assert_eq!(segments[0].text, "it's \"fine\" & done");
    }

    #[test]
    fn test_parse_timedtext_skips_empty_segments() {
        let xml = r#"<text start="0" dur="1"></text><text start="1" dur="1">kept</text>"#;
        let segments = parse_timedtext(xml);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "kept");
    }
}
