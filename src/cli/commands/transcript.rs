//! Transcript command implementation.

use crate::cli::{format_timestamp, Output};
use crate::config::Settings;
use crate::transcript::{join_segments, TranscriptSource, YoutubeTranscriptClient};
use crate::video::extract_video_id;
use anyhow::Result;

/// Run the transcript command: fetch captions and print them.
pub async fn run_transcript(
    url: &str,
    format: &str,
    timestamps: bool,
    settings: Settings,
) -> Result<()> {
    let video_id = extract_video_id(url);
    let client = YoutubeTranscriptClient::new(&settings.transcript.languages)?;

    let spinner = Output::spinner("Fetching captions...");
    let segments = match client.get_transcript(&video_id).await {
        Ok(segments) => {
            spinner.finish_and_clear();
            segments
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Could not fetch transcript: {}", e));
            return Err(e.into());
        }
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&segments)?);
        }
        _ => {
            if timestamps {
                for segment in &segments {
                    println!("[{}] {}", format_timestamp(segment.start), segment.text);
                }
            } else {
                println!("{}", join_segments(&segments));
            }
        }
    }

    Ok(())
}
