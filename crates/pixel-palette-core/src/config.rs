//! Session configuration.
//!
//! The editor has no files or environment to read settings from; the host
//! passes a [`SessionConfig`] (usually deserialized from a JS object) when
//! creating the session. Every field has a default, so `{}` is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::decode::MimeType;

/// Top-level configuration for an [`crate::EditSession`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Upload validation limits.
    pub ingest: IngestLimits,
    /// Download encoding options.
    pub export: ExportOptions,
}

/// Limits checked before an upload is decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngestLimits {
    /// Largest accepted file, in bytes.
    pub max_bytes: u64,
    /// Declared MIME types that may be decoded.
    pub accepted_types: Vec<MimeType>,
}

impl IngestLimits {
    /// 10 MiB.
    pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

    pub fn accepts(&self, mime: MimeType) -> bool {
        self.accepted_types.contains(&mime)
    }
}

impl Default for IngestLimits {
    fn default() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
            accepted_types: MimeType::ALL.to_vec(),
        }
    }
}

/// Container format for downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless RGBA PNG.
    #[default]
    Png,
    /// Lossy JPEG; transparency is flattened onto black.
    Jpeg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Download encoding options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// JPEG quality (1-100). Ignored for PNG.
    pub quality: u8,
    /// Download filename without extension.
    pub file_stem: String,
}

impl ExportOptions {
    pub const DEFAULT_QUALITY: u8 = 90;

    /// Download filename, e.g. `edited-image.png`.
    pub fn filename(&self) -> String {
        format!("{}.{}", self.file_stem, self.format.extension())
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            quality: Self::DEFAULT_QUALITY,
            file_stem: "edited-image".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.ingest.max_bytes, 10 * 1024 * 1024);
        assert!(config.ingest.accepts(MimeType::Jpeg));
        assert!(config.ingest.accepts(MimeType::Png));
        assert!(config.ingest.accepts(MimeType::Webp));
        assert_eq!(config.export.format, ExportFormat::Png);
        assert_eq!(config.export.filename(), "edited-image.png");
    }

    #[test]
    fn test_jpeg_filename() {
        let options = ExportOptions {
            format: ExportFormat::Jpeg,
            ..Default::default()
        };
        assert_eq!(options.filename(), "edited-image.jpg");
        assert_eq!(options.format.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config: SessionConfig = serde_json::from_str(
            r#"{
                "ingest": { "maxBytes": 1024, "acceptedTypes": ["image/png"] },
                "export": { "format": "jpeg", "quality": 75 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.ingest.max_bytes, 1024);
        assert!(config.ingest.accepts(MimeType::Png));
        assert!(!config.ingest.accepts(MimeType::Jpeg));
        assert_eq!(config.export.format, ExportFormat::Jpeg);
        assert_eq!(config.export.quality, 75);
        assert_eq!(config.export.file_stem, "edited-image");
    }
}
