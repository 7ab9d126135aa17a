//! Caption retrieval for tldw.
//!
//! Fetches timestamped caption segments for a video. The only implementation
//! talks to YouTube's timedtext endpoint; the trait exists so the
//! orchestrator (and its tests) never depend on the network directly.

mod parse;
mod youtube;

pub use parse::{extract_caption_tracks, parse_timedtext, CaptionTrack};
pub use youtube::YoutubeTranscriptClient;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single timestamped caption segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Transcribed text.
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// Segment duration in seconds.
    pub duration: f64,
}

/// Trait for caption retrieval services.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the ordered caption segments for a video id.
    async fn get_transcript(&self, video_id: &str) -> Result<Vec<TranscriptSegment>>;
}

/// Concatenate segment texts in sequence order with single-space separators.
pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str, start: f64) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            start,
            duration: 1.0,
        }
    }

    #[test]
    fn test_join_segments() {
        let segments = vec![seg("Hello", 0.0), seg("world", 1.0)];
        assert_eq!(join_segments(&segments), "Hello world");
    }

    #[test]
    fn test_join_segments_empty() {
        assert_eq!(join_segments(&[]), "");
    }

    #[test]
    fn test_join_segments_single() {
        assert_eq!(join_segments(&[seg("only", 0.0)]), "only");
    }
}
