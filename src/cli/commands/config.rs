//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use crate::error::TldwError;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, mut settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&settings)
                .map_err(|e| TldwError::Config(e.to_string()))?;
            println!("{}", content);
        }

        ConfigAction::Path => {
            println!("{}", Settings::default_config_path().display());
        }

        ConfigAction::Set { key, value } => {
            set_value(&mut settings, key, value)?;
            settings.save()?;
            Output::success(&format!("Set {} = {}", key, value));
        }
    }

    Ok(())
}

/// Apply a dotted-key assignment to the settings.
fn set_value(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "general.log_level" => settings.general.log_level = value.to_string(),
        "model.id" => settings.model.id = value.to_string(),
        "model.temperature" => {
            settings.model.temperature = value
                .parse()
                .map_err(|_| TldwError::InvalidInput(format!("Not a number: {}", value)))?;
        }
        "model.max_iterations" => {
            settings.model.max_iterations = value
                .parse()
                .map_err(|_| TldwError::InvalidInput(format!("Not a number: {}", value)))?;
        }
        "transcript.languages" => {
            settings.transcript.languages =
                value.split(',').map(|s| s.trim().to_string()).collect();
        }
        "server.host" => settings.server.host = value.to_string(),
        "server.port" => {
            settings.server.port = value
                .parse()
                .map_err(|_| TldwError::InvalidInput(format!("Not a port number: {}", value)))?;
        }
        "prompts.custom_dir" => settings.prompts.custom_dir = Some(value.to_string()),
        _ => {
            return Err(TldwError::InvalidInput(format!("Unknown config key: {}", key)).into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_model_id() {
        let mut settings = Settings::default();
        set_value(&mut settings, "model.id", "llama-3.3-70b-versatile").unwrap();
        assert_eq!(settings.model.id, "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_set_languages_splits_on_comma() {
        let mut settings = Settings::default();
        set_value(&mut settings, "transcript.languages", "en, de,fr").unwrap();
        assert_eq!(settings.transcript.languages, vec!["en", "de", "fr"]);
    }

    #[test]
    fn test_set_unknown_key_fails() {
        let mut settings = Settings::default();
        assert!(set_value(&mut settings, "nope.nothing", "x").is_err());
    }

    #[test]
    fn test_set_bad_port_fails() {
        let mut settings = Settings::default();
        assert!(set_value(&mut settings, "server.port", "not-a-port").is_err());
    }
}
