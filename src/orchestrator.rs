//! Two-stage summarization orchestrator.
//!
//! Primary attempt: hand the raw video URL to the agent backend and let it
//! resolve captions itself. If that answer is empty or carries the caption
//! failure phrasing, fall back to fetching the transcript directly and
//! re-summarizing from the raw text. Fallback failures never abort the
//! request; a primary-stage failure does.

use crate::agent::{GroqAgent, ToolContext};
use crate::backend::SummaryBackend;
use crate::config::{Prompts, Settings};
use crate::error::Result;
use crate::transcript::{join_segments, TranscriptSource, YoutubeTranscriptClient};
use crate::video::extract_video_id;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Failure phrasing the agent embeds in an otherwise-successful reply when it
/// could not get captions. Matching the reply text against this marker is
/// what triggers the fallback; the phrase is deliberately kept in one place.
const CAPTION_FAILURE_MARKER: &str = "couldn't retrieve";

/// The final result of a summarization request.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    /// A non-empty summary text.
    Summary(String),
    /// No summary could be produced; the video may not have captions.
    Unavailable,
}

/// The main summarization orchestrator.
pub struct Summarizer {
    backend: Arc<dyn SummaryBackend>,
    transcripts: Arc<dyn TranscriptSource>,
    prompts: Prompts,
}

impl Summarizer {
    /// Create an orchestrator wired to the Groq agent and YouTube captions.
    pub fn new(settings: &Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let transcripts: Arc<dyn TranscriptSource> =
            Arc::new(YoutubeTranscriptClient::new(&settings.transcript.languages)?);

        let backend: Arc<dyn SummaryBackend> = Arc::new(GroqAgent::new(
            &settings.model,
            &prompts,
            ToolContext::new(transcripts.clone()),
        )?);

        Ok(Self {
            backend,
            transcripts,
            prompts,
        })
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        backend: Arc<dyn SummaryBackend>,
        transcripts: Arc<dyn TranscriptSource>,
        prompts: Prompts,
    ) -> Self {
        Self {
            backend,
            transcripts,
            prompts,
        }
    }

    /// Summarize a video by URL.
    ///
    /// Errors from the primary attempt propagate to the caller; errors from
    /// the fallback are logged and swallowed, and whatever text the primary
    /// attempt produced (possibly none) decides the outcome.
    #[instrument(skip(self), fields(url = %video_url))]
    pub async fn summarize(&self, video_url: &str) -> Result<SummaryOutcome> {
        info!("Running primary summarization");
        let reply = self
            .backend
            .run(&self.prompts.primary_prompt(video_url))
            .await?;
        let mut summary = reply.into_text();

        if needs_fallback(&summary) {
            info!("Primary result unusable, trying direct transcript");
            match self.summarize_from_transcript(video_url).await {
                Ok(text) => summary = text,
                Err(e) => warn!("Could not fetch transcript: {}", e),
            }
        }

        if summary.is_empty() {
            Ok(SummaryOutcome::Unavailable)
        } else {
            Ok(SummaryOutcome::Summary(summary))
        }
    }

    /// Fallback path: fetch captions directly and summarize the raw text.
    async fn summarize_from_transcript(&self, video_url: &str) -> Result<String> {
        let video_id = extract_video_id(video_url);
        let segments = self.transcripts.get_transcript(&video_id).await?;
        let transcript_text = join_segments(&segments);

        let reply = self
            .backend
            .run(&self.prompts.fallback_prompt(&transcript_text))
            .await?;
        Ok(reply.into_text())
    }
}

/// Whether a primary result is unusable and the fallback should run.
///
/// Content-based check: the agent reports caption failures inside the reply
/// text rather than as a structured error.
fn needs_fallback(summary: &str) -> bool {
    summary.is_empty() || summary.to_lowercase().contains(CAPTION_FAILURE_MARKER)
}
