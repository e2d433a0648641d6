//! The `medvision analyze` command: one image, one request, one report.

use clap::{Args, ValueEnum};
use medvision_core::{Assistant, ClickOutcome, Config, Session, UploadedImage};
use std::path::PathBuf;

use super::report::{no_response_text, report_text, ReportRecord};

/// Output formats for the report.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Heading plus the model's text (default)
    #[default]
    Text,
    /// Single JSON object with text and call metadata
    Json,
}

/// Arguments for the `analyze` command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image to analyze (png, jpg, jpeg)
    #[arg(required = true)]
    pub image: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Execute the analyze command.
pub async fn execute(
    args: AnalyzeArgs,
    config: &Config,
    assistant: &Assistant,
) -> anyhow::Result<()> {
    let path = PathBuf::from(shellexpand::tilde(&args.image.to_string_lossy()).into_owned());
    let image = UploadedImage::from_path(&path, config.max_upload_bytes())?;
    let file_name = image.file_name().to_string();

    let mut session = Session::new();
    session.upload(image);

    let spinner = super::request_spinner(assistant.model());
    let outcome = session.generate(assistant).await;
    spinner.finish_and_clear();

    match outcome {
        ClickOutcome::Report(reply) => {
            match args.format {
                OutputFormat::Text => println!("{}", report_text(&reply)),
                OutputFormat::Json => {
                    let record = ReportRecord::new(&file_name, &reply);
                    println!("{}", serde_json::to_string_pretty(&record)?);
                }
            }
            Ok(())
        }
        ClickOutcome::NoResponse { reason } => anyhow::bail!(no_response_text(reason.as_deref())),
        ClickOutcome::Failed { message } => anyhow::bail!(message),
        ClickOutcome::NoImage => anyhow::bail!(medvision_core::session::NO_IMAGE_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_default_is_text() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Text));
    }

    #[tokio::test]
    async fn execute_rejects_unsupported_upload_before_any_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.bmp");
        std::fs::write(&path, b"BM").unwrap();

        let mut config = Config::default();
        config.gemini.api_key = "test-key".to_string();
        let assistant = Assistant::from_config(&config).unwrap();

        let args = AnalyzeArgs {
            image: path,
            format: OutputFormat::Text,
        };
        let err = execute(args, &config, &assistant).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported format"));
    }
}
