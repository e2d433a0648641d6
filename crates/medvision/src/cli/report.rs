//! Text shown to the user for previews and generate outcomes.
//!
//! Kept free of terminal styling so the same strings serve the interactive
//! session, the one-shot command and the tests.

use medvision_core::session::NO_RESPONSE_MESSAGE;
use medvision_core::{ImagePreview, ModelReply, RESULT_HEADING};
use serde::Serialize;

/// Heading, underline, then the model's text exactly as received.
pub fn report_text(reply: &ModelReply) -> String {
    format!(
        "{RESULT_HEADING}\n{}\n\n{}",
        "=".repeat(RESULT_HEADING.chars().count()),
        reply.text
    )
}

/// Warning for a reply without text.
pub fn no_response_text(reason: Option<&str>) -> String {
    match reason {
        Some(reason) => format!("{NO_RESPONSE_MESSAGE} (reason: {reason})"),
        None => NO_RESPONSE_MESSAGE.to_string(),
    }
}

/// Label/value rows describing an upload.
pub fn preview_rows(preview: &ImagePreview) -> Vec<(&'static str, String)> {
    let dimensions = match preview.dimensions {
        Some((w, h)) => format!("{w} x {h} px"),
        None => "unknown".to_string(),
    };
    vec![
        ("File:", preview.file_name.clone()),
        ("Type:", preview.mime.to_string()),
        ("Size:", format_size(preview.size_bytes)),
        ("Dimensions:", dimensions),
    ]
}

/// Human-readable byte count.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Machine-readable form of a report for `analyze --format json`.
#[derive(Debug, Serialize)]
pub struct ReportRecord<'a> {
    pub file: &'a str,
    pub model: &'a str,
    pub text: &'a str,
    pub finish_reason: Option<&'a str>,
    pub tokens_used: Option<u32>,
    pub latency_ms: u64,
}

impl<'a> ReportRecord<'a> {
    pub fn new(file: &'a str, reply: &'a ModelReply) -> Self {
        Self {
            file,
            model: &reply.model,
            text: &reply.text,
            finish_reason: reply.finish_reason.as_deref(),
            tokens_used: reply.tokens_used,
            latency_ms: reply.latency_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medvision_core::ImageMime;

    #[test]
    fn report_text_shows_heading_then_verbatim_text() {
        let reply = ModelReply {
            text: "**Detailed Analysis**\n  keep   spacing\n".to_string(),
            ..ModelReply::default()
        };
        let out = report_text(&reply);
        assert!(out.starts_with(RESULT_HEADING));
        assert!(out.ends_with("**Detailed Analysis**\n  keep   spacing\n"));
    }

    #[test]
    fn no_response_text_with_and_without_reason() {
        assert_eq!(no_response_text(None), NO_RESPONSE_MESSAGE);
        assert!(no_response_text(Some("SAFETY")).contains("reason: SAFETY"));
    }

    #[test]
    fn preview_rows_unknown_dimensions() {
        let preview = ImagePreview {
            file_name: "scan.jpg".to_string(),
            mime: ImageMime::Jpeg,
            size_bytes: 2048,
            dimensions: None,
        };
        let rows = preview_rows(&preview);
        assert_eq!(rows[0].1, "scan.jpg");
        assert_eq!(rows[1].1, "image/jpeg");
        assert_eq!(rows[2].1, "2.0 KB");
        assert_eq!(rows[3].1, "unknown");
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn report_record_serializes() {
        let reply = ModelReply {
            text: "ok".to_string(),
            model: "gemini-1.5-pro-002".to_string(),
            tokens_used: Some(10),
            latency_ms: 42,
            ..ModelReply::default()
        };
        let json = serde_json::to_value(ReportRecord::new("a.png", &reply)).unwrap();
        assert_eq!(json["file"], "a.png");
        assert_eq!(json["text"], "ok");
        assert_eq!(json["tokens_used"], 10);
        assert!(json["finish_reason"].is_null());
    }
}
