//! Uploaded images and their preview metadata.
//!
//! An upload is held in memory only for the interaction that uses it. The
//! declared MIME type comes from the file extension; the bytes themselves are
//! never inspected beyond a best-effort header probe for the preview.

use crate::error::AnalysisError;
use std::io::Cursor;
use std::path::Path;

/// Accepted raster image types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Png,
    Jpeg,
}

impl ImageMime {
    /// File extensions accepted by the upload control.
    pub const EXTENSIONS: [&'static str; 3] = ["png", "jpg", "jpeg"];

    /// Map a file extension (case-insensitive) to a MIME type.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageMime::Png),
            "jpg" | "jpeg" => Some(ImageMime::Jpeg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Png => "image/png",
            ImageMime::Jpeg => "image/jpeg",
        }
    }
}

impl std::fmt::Display for ImageMime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw image bytes plus their declared MIME type.
#[derive(Clone)]
pub struct UploadedImage {
    file_name: String,
    bytes: Vec<u8>,
    mime: ImageMime,
}

impl UploadedImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, mime: ImageMime) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime,
        }
    }

    /// Read an image from disk.
    ///
    /// Checks:
    /// - File exists
    /// - Extension is on the allow-list
    /// - File size is within `max_bytes`
    pub fn from_path(path: &Path, max_bytes: u64) -> Result<Self, AnalysisError> {
        if !path.exists() {
            return Err(AnalysisError::FileNotFound(path.to_path_buf()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let mime = ImageMime::from_extension(ext).ok_or_else(|| {
            AnalysisError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: if ext.is_empty() {
                    "no extension".to_string()
                } else {
                    ext.to_string()
                },
            }
        })?;

        let metadata = std::fs::metadata(path).map_err(|e| AnalysisError::Read {
            path: path.to_path_buf(),
            message: format!("Cannot read metadata: {e}"),
        })?;
        if metadata.len() > max_bytes {
            return Err(AnalysisError::FileTooLarge {
                path: path.to_path_buf(),
                size_bytes: metadata.len(),
                max_bytes,
            });
        }

        let bytes = std::fs::read(path).map_err(|e| AnalysisError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::debug!(file = %file_name, bytes = bytes.len(), mime = %mime, "Image uploaded");
        Ok(Self::new(file_name, bytes, mime))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> ImageMime {
        self.mime
    }

    /// Summary shown to the user after upload.
    pub fn preview(&self) -> ImagePreview {
        let dimensions = image::ImageReader::new(Cursor::new(&self.bytes))
            .with_guessed_format()
            .ok()
            .and_then(|reader| reader.into_dimensions().ok());

        ImagePreview {
            file_name: self.file_name.clone(),
            mime: self.mime,
            size_bytes: self.bytes.len() as u64,
            dimensions,
        }
    }
}

impl std::fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedImage")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Upload summary for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub file_name: String,
    pub mime: ImageMime,
    pub size_bytes: u64,
    /// Pixel dimensions, if the header could be read
    pub dimensions: Option<(u32, u32)>,
}
