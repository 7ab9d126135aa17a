//! YouTube caption retrieval.
//!
//! Mirrors the flow of the well-known transcript API clients: fetch the watch
//! page, pull the caption track list out of the inlined player response, pick
//! a track by language preference, then fetch and parse its timedtext XML.

use super::parse::{extract_caption_tracks, parse_timedtext, select_track};
use super::{TranscriptSegment, TranscriptSource};
use crate::error::{Result, TldwError};
use crate::video::watch_url;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Reasonable desktop UA; YouTube serves a reduced page to unknown clients.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0.0.0 Safari/537.36";

/// Caption client for YouTube's timedtext endpoint.
pub struct YoutubeTranscriptClient {
    http: reqwest::Client,
    languages: Vec<String>,
}

impl YoutubeTranscriptClient {
    /// Create a client with the given language preference order.
    pub fn new(languages: &[String]) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TldwError::Transcript(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            languages: languages.to_vec(),
        })
    }

    /// Fetch the watch page HTML for a video.
    async fn fetch_watch_page(&self, video_id: &str) -> Result<String> {
        let response = self
            .http
            .get(watch_url(video_id))
            // Skips the EU consent interstitial, which has no player response
            .header("Cookie", "CONSENT=YES+cb")
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                TldwError::Transcript(format!("Watch page request for {} failed: {}", video_id, e))
            })?;

        Ok(response.text().await?)
    }

    /// Fetch and parse the timedtext XML behind a caption track URL.
    async fn fetch_timedtext(&self, base_url: &str) -> Result<Vec<TranscriptSegment>> {
        let url = url::Url::parse(base_url)
            .map_err(|e| TldwError::Transcript(format!("Bad caption track URL: {}", e)))?;

        let response = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| TldwError::Transcript(format!("Timedtext request failed: {}", e)))?;

        let xml = response.text().await?;
        Ok(parse_timedtext(&xml))
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptClient {
    #[instrument(skip(self))]
    async fn get_transcript(&self, video_id: &str) -> Result<Vec<TranscriptSegment>> {
        let html = self.fetch_watch_page(video_id).await?;

        let tracks = extract_caption_tracks(&html)
            .map_err(|_| TldwError::NoCaptions(video_id.to_string()))?;
        debug!("Found {} caption tracks for {}", tracks.len(), video_id);

        let track = select_track(&tracks, &self.languages)
            .ok_or_else(|| TldwError::NoCaptions(video_id.to_string()))?;
        debug!(
            "Using {} track ({})",
            track.language_code,
            if track.is_generated() { "auto-generated" } else { "manual" }
        );

        let segments = self.fetch_timedtext(&track.base_url).await?;
        if segments.is_empty() {
            return Err(TldwError::Transcript(format!(
                "Caption track for {} contained no text",
                video_id
            )));
        }

        Ok(segments)
    }
}
