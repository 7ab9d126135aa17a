//! Prompt templates for tldw.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Prompts {
    pub agent: AgentPrompts,
    pub summary: SummaryPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: std::collections::HashMap<String, String>,
}

/// System prompt for the summarization agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentPrompts {
    pub system: String,
}

impl Default for AgentPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are a YouTube content analyst.
Given a YouTube URL:
1. Fetch video captions and metadata using your tools.
2. Provide a structured summary with key points.
3. Optionally include timestamps for important sections.

Write the summary in Markdown. If captions cannot be retrieved, say so
plainly instead of inventing content."#
                .to_string(),
        }
    }
}

/// User-facing prompt templates for the two summarization stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompts {
    /// Primary attempt: the agent resolves the URL itself.
    pub primary: String,
    /// Fallback attempt: summarize a raw transcript.
    pub fallback: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            primary: "Summarize this video: {{url}}".to_string(),
            fallback: "Summarize the following transcript:\n\n{{transcript}}".to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&std::collections::HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let agent_path = custom_path.join("agent.toml");
            if agent_path.exists() {
                let content = std::fs::read_to_string(&agent_path)?;
                prompts.agent = toml::from_str(&content)?;
            }

            let summary_path = custom_path.join("summary.toml");
            if summary_path.exists() {
                let content = std::fs::read_to_string(&summary_path)?;
                prompts.summary = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(
        &self,
        template: &str,
        vars: &std::collections::HashMap<String, String>,
    ) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }

    /// Render the primary summarization prompt for a video URL.
    pub fn primary_prompt(&self, url: &str) -> String {
        let mut vars = std::collections::HashMap::new();
        vars.insert("url".to_string(), url.to_string());
        self.render_with_custom(&self.summary.primary, &vars)
    }

    /// Render the fallback summarization prompt for a raw transcript.
    pub fn fallback_prompt(&self, transcript: &str) -> String {
        let mut vars = std::collections::HashMap::new();
        vars.insert("transcript".to_string(), transcript.to_string());
        self.render_with_custom(&self.summary.fallback, &vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(!prompts.agent.system.is_empty());
        assert!(prompts.summary.primary.contains("{{url}}"));
    }

    #[test]
    fn test_primary_prompt() {
        let prompts = Prompts::default();
        assert_eq!(
            prompts.primary_prompt("https://www.youtube.com/watch?v=abc123"),
            "Summarize this video: https://www.youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn test_fallback_prompt() {
        let prompts = Prompts::default();
        assert_eq!(
            prompts.fallback_prompt("Hello world"),
            "Summarize the following transcript:\n\nHello world"
        );
    }

    #[test]
    fn test_render_template() {
        let template = "Hello {{name}}, you have {{count}} messages.";
        let mut vars = std::collections::HashMap::new();
        vars.insert("name".to_string(), "Alice".to_string());
        vars.insert("count".to_string(), "5".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Hello Alice, you have 5 messages.");
    }
}
