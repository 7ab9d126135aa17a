//! Summarize command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::{Summarizer, SummaryOutcome};
use anyhow::Result;

/// Run the summarize command.
pub async fn run_summarize(url: &str, model: Option<String>, mut settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Summarize) {
        Output::error(&format!("{}", e));
        Output::info("Run 'tldw doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    if let Some(model) = model {
        settings.model.id = model;
    }

    let summarizer = Summarizer::new(&settings)?;

    let spinner = Output::spinner("Generating summary...");

    match summarizer.summarize(url).await {
        Ok(SummaryOutcome::Summary(text)) => {
            spinner.finish_and_clear();
            Output::header("Summary");
            println!("\n{}\n", text);
        }
        Ok(SummaryOutcome::Unavailable) => {
            spinner.finish_and_clear();
            Output::warning("No summary found. The video may not have captions.");
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Something went wrong: {}", e));
            Output::info("Please check your API key or internet connection.");
            return Err(e.into());
        }
    }

    Ok(())
}
