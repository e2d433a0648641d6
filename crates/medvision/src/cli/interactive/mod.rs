//! Interactive CLI mode: the upload, preview and generate form.
//!
//! Entered when `medvision` is invoked with no subcommand on a TTY, after
//! the startup gate has produced an [`Assistant`]. Each menu action is
//! independent; every outcome returns to the menu.

pub mod theme;
pub mod upload;

use console::{Style, Term};
use dialoguer::Select;
use medvision_core::session::NO_IMAGE_MESSAGE;
use medvision_core::{Assistant, ClickOutcome, Config, Session};

use super::report::{no_response_text, report_text};

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Main menu options presented to the user.
const MENU_ITEMS: &[&str] = &[
    "Upload image",
    "Generate analysis",
    "Show configuration",
    "Exit",
];

/// Entry point for interactive mode.
pub async fn run(config: &Config, assistant: &Assistant) -> anyhow::Result<()> {
    if !Term::stderr().is_term() {
        anyhow::bail!(
            "Interactive mode needs a terminal. Use `medvision analyze <IMAGE>` instead."
        );
    }

    theme::print_banner();

    let theme = theme::medvision_theme();
    let mut session = Session::new();

    loop {
        let default = if session.has_image() { 1 } else { 0 };
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(default)
            .interact_opt()?;

        match selection {
            Some(0) => upload::guided_upload(&mut session, assistant)?,
            Some(1) => generate(&mut session, assistant).await,
            Some(2) => show_config(config, assistant),
            Some(3) | None => break, // Exit or Ctrl+C / Esc
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// One press of "Generate analysis".
///
/// Ctrl+C while the request is in flight abandons it and returns to the menu.
async fn generate(session: &mut Session, assistant: &Assistant) {
    if !session.has_image() {
        print_error(NO_IMAGE_MESSAGE);
        return;
    }

    let spinner = super::request_spinner(assistant.model());
    let outcome = tokio::select! {
        outcome = session.generate(assistant) => Some(outcome),
        _ = tokio::signal::ctrl_c() => None,
    };
    spinner.finish_and_clear();

    match outcome {
        Some(ClickOutcome::Report(reply)) => {
            let heading = Style::new().bold().cyan();
            let text = report_text(&reply);
            let (title, body) = text.split_once('\n').unwrap_or((text.as_str(), ""));
            println!();
            println!("{}", heading.apply_to(title));
            println!("{body}");
            println!();
        }
        Some(ClickOutcome::NoResponse { reason }) => {
            print_warning(&no_response_text(reason.as_deref()))
        }
        Some(ClickOutcome::Failed { message }) => print_error(&message),
        Some(ClickOutcome::NoImage) => print_error(NO_IMAGE_MESSAGE),
        None => {
            tracing::info!("Analysis request cancelled by user");
            print_warning("Request cancelled.");
        }
    }
}

fn print_error(message: &str) {
    let err = Style::new().for_stderr().red();
    eprintln!("  {} {}", err.apply_to("✗"), err.apply_to(message));
    eprintln!();
}

fn print_warning(message: &str) {
    let warn = Style::new().for_stderr().yellow();
    eprintln!("  {}", warn.apply_to(message));
    eprintln!();
}

/// Read-only summary of the settings fixed at startup.
fn show_config(config: &Config, assistant: &Assistant) {
    let dim = Style::new().for_stderr().dim();
    let cyan = Style::new().for_stderr().cyan();
    let label = Style::new().for_stderr().bold();

    let config_path = Config::default_path();
    let path_note = if config_path.exists() {
        "(exists)"
    } else {
        "(using defaults)"
    };
    let generation = assistant.generation();
    let threshold = assistant
        .safety()
        .settings()
        .first()
        .map(|s| s.threshold.to_string())
        .unwrap_or_else(|| "none".to_string());

    eprintln!();
    eprintln!("  {}", cyan.apply_to("Current configuration:"));
    eprintln!();
    eprintln!(
        "    {:<20} {} {}",
        label.apply_to("Config file:"),
        config_path.display(),
        dim.apply_to(path_note)
    );
    eprintln!(
        "    {:<20} {} ({})",
        label.apply_to("Model:"),
        assistant.model(),
        assistant.provider_name()
    );
    eprintln!(
        "    {:<20} {}s",
        label.apply_to("Request timeout:"),
        assistant.timeout().as_secs()
    );
    eprintln!(
        "    {:<20} temperature {} | top_p {} | top_k {} | max tokens {}",
        label.apply_to("Generation:"),
        generation.temperature,
        generation.top_p,
        generation.top_k,
        generation.max_output_tokens
    );
    eprintln!(
        "    {:<20} {} ({} categories)",
        label.apply_to("Safety:"),
        threshold,
        assistant.safety().settings().len()
    );
    eprintln!(
        "    {:<20} {} MB",
        label.apply_to("Upload limit:"),
        config.limits.max_upload_mb
    );
    eprintln!(
        "    {:<20} {}",
        label.apply_to("Log level:"),
        config.logging.level
    );
    eprintln!();
}
