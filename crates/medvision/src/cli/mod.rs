//! Command handlers and the shared startup gate.

pub mod analyze;
pub mod config;
pub mod interactive;
pub mod report;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use medvision_core::{Assistant, Config, ConfigError};
use std::time::Duration;

/// Build the assistant, reporting a failure on stderr and in the log.
///
/// Runs before any upload is accepted. The caller exits on `Err` without
/// printing it again.
pub fn startup(config: &Config) -> Result<Assistant, ConfigError> {
    Assistant::from_config(config).inspect_err(|e| {
        tracing::error!("Startup failed: {e}");
        let err = Style::new().for_stderr().red().bold();
        eprintln!("  {} MedVision cannot start: {e}", err.apply_to("✗"));
    })
}

/// Spinner shown on stderr while a model call is in flight.
pub(crate) fn request_spinner(model: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Analyzing with {model}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_fails_without_credential() {
        let mut config = Config::default();
        config.gemini.api_key = "${MEDVISION_CLI_TEST_UNSET_KEY}".to_string();

        match startup(&config).err().unwrap() {
            ConfigError::MissingCredential { var } => {
                assert_eq!(var, "MEDVISION_CLI_TEST_UNSET_KEY");
            }
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn startup_succeeds_with_key() {
        let mut config = Config::default();
        config.gemini.api_key = "test-key".to_string();
        assert!(startup(&config).is_ok());
    }
}
