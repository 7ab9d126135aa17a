//! Summarization backend abstraction.
//!
//! The orchestrator treats the summarizer as an opaque capability: hand it a
//! natural-language prompt, get text back. The concrete implementation is the
//! tool-calling agent in `crate::agent`, but tests substitute their own.

use crate::error::Result;
use async_trait::async_trait;

/// Trait for summarization backends.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Run a single natural-language instruction and return the reply.
    async fn run(&self, prompt: &str) -> Result<BackendReply>;
}

/// A backend reply, either structured (a dedicated content field) or a bare
/// string. Both normalize to plain text via [`BackendReply::into_text`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendReply {
    /// Reply with a structured content field.
    Structured { content: String },
    /// Reply that is just a string.
    Plain(String),
}

impl BackendReply {
    /// Normalize the reply into plain text.
    pub fn into_text(self) -> String {
        match self {
            BackendReply::Structured { content } => content,
            BackendReply::Plain(text) => text,
        }
    }

    /// Borrow the reply text.
    pub fn text(&self) -> &str {
        match self {
            BackendReply::Structured { content } => content,
            BackendReply::Plain(text) => text,
        }
    }
}

impl std::fmt::Display for BackendReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_reply_normalizes_to_content() {
        let reply = BackendReply::Structured {
            content: "A summary.".to_string(),
        };
        assert_eq!(reply.text(), "A summary.");
        assert_eq!(reply.into_text(), "A summary.");
    }

    #[test]
    fn test_plain_reply_normalizes_to_itself() {
        let reply = BackendReply::Plain("raw text".to_string());
        assert_eq!(reply.into_text(), "raw text");
    }
}
