//! Doctor command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::groq;
use anyhow::Result;

/// Run the doctor command: report configuration and credential status.
pub fn run_doctor(settings: &Settings) -> Result<()> {
    Output::header("tldw doctor");
    println!();

    if groq::is_api_key_configured() {
        Output::success(&format!("{} is set", groq::API_KEY_ENV));
    } else {
        Output::error(&format!(
            "{} is missing. Set it with: export {}='gsk_...'",
            groq::API_KEY_ENV,
            groq::API_KEY_ENV
        ));
    }

    println!();
    Output::kv("Model", &settings.model.id);
    Output::kv("Caption languages", &settings.transcript.languages.join(", "));
    Output::kv(
        "Server",
        &format!("{}:{}", settings.server.host, settings.server.port),
    );
    Output::kv(
        "Config file",
        &Settings::default_config_path().display().to_string(),
    );

    Ok(())
}
