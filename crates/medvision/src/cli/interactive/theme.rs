//! Custom dialoguer theme and banner for MedVision interactive mode.

use console::{style, Style};
use dialoguer::theme::ColorfulTheme;

/// Returns a `ColorfulTheme` configured with MedVision's visual identity.
///
/// - Prompt prefix: cyan `?`
/// - Active item indicator: cyan `▸`
/// - Success prefix: green `✓`
/// - Error prefix: red `✗`
pub fn medvision_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("?".to_string()).for_stderr().cyan(),
        prompt_style: Style::new().for_stderr().bold(),
        prompt_suffix: style("›".to_string()).for_stderr().bright().black(),
        active_item_prefix: style("▸".to_string()).for_stderr().cyan(),
        active_item_style: Style::new().for_stderr().cyan(),
        success_prefix: style("✓".to_string()).for_stderr().green(),
        success_suffix: style("·".to_string()).for_stderr().bright().black(),
        error_prefix: style("✗".to_string()).for_stderr().red(),
        error_style: Style::new().for_stderr().red(),
        values_style: Style::new().for_stderr().green(),
        ..ColorfulTheme::default()
    }
}

/// Banner lines, without styling.
fn banner_lines() -> [String; 4] {
    let title = format!("Visual Medical Assistant v{}", medvision_core::VERSION);
    let tagline = "Medical image analysis and report generation";

    let inner_width = title.chars().count().max(tagline.len()) + 4;

    [
        format!("  ╔{:═<width$}╗", "", width = inner_width),
        format!("  ║{:^width$}║", title, width = inner_width),
        format!("  ║{:^width$}║", tagline, width = inner_width),
        format!("  ╚{:═<width$}╝", "", width = inner_width),
    ]
}

/// Prints the MedVision banner to stderr.
///
/// All output goes to stderr so stdout remains clean for report text.
pub fn print_banner() {
    let cyan = Style::new().for_stderr().cyan();

    eprintln!();
    for line in banner_lines() {
        eprintln!("{}", cyan.apply_to(&line));
    }
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_lines_share_width() {
        let lines = banner_lines();
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(lines[1].contains(medvision_core::VERSION));
    }
}
