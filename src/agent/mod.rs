//! Tool-calling summarization agent.
//!
//! The agent resolves a video URL on its own: the model is given tools to
//! fetch captions and metadata, and iterates until it produces a summary.

mod runner;
mod tools;

pub use runner::GroqAgent;
pub use tools::{parse_tool_call, tool_definitions, ToolCall, ToolContext, CAPTION_FAILURE_PREFIX};
