//! tldw - "too long; didn't watch"
//!
//! Summarize YouTube videos with an LLM agent, with a direct-transcript fallback.
//!
//! # Overview
//!
//! tldw takes a YouTube URL and produces a natural-language summary:
//! - A Groq-backed agent resolves captions itself and writes the summary
//! - If the agent's answer is unusable, captions are fetched directly and
//!   re-summarized from the raw transcript
//! - Results are rendered on the CLI or in a small web form
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration and prompt templates
//! - `backend` - Summarization backend abstraction
//! - `agent` - Tool-calling agent backend (Groq chat completions)
//! - `transcript` - Caption retrieval from YouTube
//! - `video` - Video URL/id helpers
//! - `orchestrator` - Two-stage summarization fallback
//!
//! # Example
//!
//! ```rust,no_run
//! use tldw::config::Settings;
//! use tldw::orchestrator::{Summarizer, SummaryOutcome};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let summarizer = Summarizer::new(&settings)?;
//!
//!     match summarizer.summarize("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await? {
//!         SummaryOutcome::Summary(text) => println!("{}", text),
//!         SummaryOutcome::Unavailable => eprintln!("No summary found."),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod groq;
pub mod orchestrator;
pub mod transcript;
pub mod video;

pub use error::{Result, TldwError};
