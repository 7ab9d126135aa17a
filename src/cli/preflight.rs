//! Pre-flight checks before network operations.
//!
//! Validates that required configuration is available before starting
//! operations that would otherwise fail midway.

use crate::error::{Result, TldwError};
use crate::groq;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Summarization requires the Groq API key.
    Summarize,
    /// Serving requires the Groq API key (requests summarize).
    Serve,
    /// Transcript dumping needs nothing beyond network access.
    Transcript,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation) -> Result<()> {
    match operation {
        Operation::Summarize | Operation::Serve => check_api_key()?,
        Operation::Transcript => {}
    }
    Ok(())
}

/// Check that the Groq API key is configured.
fn check_api_key() -> Result<()> {
    groq::api_key().map(|_| ()).map_err(|_| {
        TldwError::Config(format!(
            "{} is missing. Set it with: export {}='gsk_...'",
            groq::API_KEY_ENV,
            groq::API_KEY_ENV
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_has_no_requirements() {
        assert!(check(Operation::Transcript).is_ok());
    }
}
