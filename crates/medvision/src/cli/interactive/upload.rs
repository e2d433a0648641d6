//! Guided upload: path prompt, allow-list check, preview card.

use console::Style;
use dialoguer::Input;
use medvision_core::{Assistant, ImageMime, ImagePreview, Session, UploadedImage};
use std::path::PathBuf;

use super::theme::medvision_theme;
use crate::cli::report::preview_rows;

/// Prompt for an image until one loads or the user backs out.
///
/// A successful upload replaces whatever the session held before.
pub fn guided_upload(session: &mut Session, assistant: &Assistant) -> anyhow::Result<()> {
    let theme = medvision_theme();
    let warn = Style::new().for_stderr().yellow();

    let image = loop {
        let Some(raw_path) = super::handle_interrupt(
            Input::<String>::with_theme(&theme)
                .with_prompt(format!(
                    "Image to analyze ({})",
                    ImageMime::EXTENSIONS.join(", ")
                ))
                .allow_empty(true)
                .interact_text(),
        )?
        else {
            return Ok(());
        };

        if raw_path.trim().is_empty() {
            return Ok(());
        }

        let path = expand_path(&raw_path);
        match UploadedImage::from_path(&path, assistant.max_upload_bytes()) {
            Ok(image) => break image,
            Err(e) => {
                tracing::debug!("Upload rejected: {e}");
                eprintln!("  {}", warn.apply_to(e.to_string()));
            }
        }
    };

    let preview = session.upload(image);
    print_preview(&preview);
    Ok(())
}

/// Trim surrounding whitespace and quotes (drag-and-drop adds them), expand `~`.
fn expand_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'');
    PathBuf::from(shellexpand::tilde(trimmed).into_owned())
}

fn print_preview(preview: &ImagePreview) {
    let ok = Style::new().for_stderr().green();
    let label = Style::new().for_stderr().bold();

    eprintln!();
    eprintln!("  {} {}", ok.apply_to("✓"), ok.apply_to("Uploaded image"));
    for (name, value) in preview_rows(preview) {
        eprintln!("    {:<14} {}", label.apply_to(name), value);
    }
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_path_strips_quotes_and_whitespace() {
        assert_eq!(
            expand_path("  '/tmp/scan one.png'  "),
            PathBuf::from("/tmp/scan one.png")
        );
        assert_eq!(expand_path("\"/tmp/x.jpg\""), PathBuf::from("/tmp/x.jpg"));
    }

    #[test]
    fn expand_path_expands_home() {
        let expanded = expand_path("~/xray.jpg");
        assert!(!expanded.to_string_lossy().starts_with('~') || std::env::var("HOME").is_err());
        assert!(expanded.to_string_lossy().ends_with("xray.jpg"));
    }
}
