//! CLI module for tldw.

pub mod commands;
mod output;
pub mod preflight;

pub use output::{format_timestamp, Output};

use clap::{Parser, Subcommand};

/// tldw - "too long; didn't watch"
///
/// Summarize YouTube videos with an LLM agent, falling back to direct
/// caption retrieval when the agent can't get at the video.
#[derive(Parser, Debug)]
#[command(name = "tldw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a YouTube video
    Summarize {
        /// YouTube video URL
        url: String,

        /// LLM model to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Fetch and print the raw captions for a video
    Transcript {
        /// YouTube video URL
        url: String,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Include timestamps in text output
        #[arg(short, long)]
        timestamps: bool,
    },

    /// Start the web form server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration and credentials
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "model.id")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Show configuration file path
    Path,
}
