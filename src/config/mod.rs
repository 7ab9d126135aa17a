//! Configuration module for tldw.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{AgentPrompts, Prompts, SummaryPrompts};
pub use settings::{
    GeneralSettings, ModelSettings, PromptSettings, ServerSettings, Settings, TranscriptSettings,
};
