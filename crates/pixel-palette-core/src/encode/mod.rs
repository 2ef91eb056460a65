//! Image encoding for the Download action.
//!
//! This module provides functionality for:
//! - Encoding the rendered RGBA buffer to PNG (default, lossless)
//! - Encoding to JPEG with configurable quality
//! - Packaging the bytes with a filename and MIME type for the host
//!
//! # Examples
//!
//! ```ignore
//! use pixel_palette_core::{export, ExportOptions};
//!
//! let exported = export(&rendered, &ExportOptions::default())?;
//! assert_eq!(exported.filename, "edited-image.png");
//! ```

mod jpeg;
mod png;

use thiserror::Error;

use crate::config::{ExportFormat, ExportOptions};
use crate::render::PixelBuffer;

pub use jpeg::encode_jpeg;
pub use png::{encode_png, PNG_SIGNATURE};

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero, or the buffer size would overflow
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Image encoding failed: {0}")]
    EncodingFailed(String),
}

/// An encoded download, ready to hand to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Encode a rendered buffer according to the export options.
pub fn export(buffer: &PixelBuffer, options: &ExportOptions) -> Result<ExportedImage, EncodeError> {
    let (width, height) = (buffer.width(), buffer.height());
    let bytes = match options.format {
        ExportFormat::Png => encode_png(buffer.pixels(), width, height)?,
        ExportFormat::Jpeg => encode_jpeg(buffer.pixels(), width, height, options.quality)?,
    };

    tracing::debug!(
        format = options.format.extension(),
        width,
        height,
        size = bytes.len(),
        "exported image"
    );

    Ok(ExportedImage {
        filename: options.filename(),
        mime_type: options.format.mime_type(),
        bytes,
    })
}

fn validate_rgba(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    let Some(expected) = crate::rgba_len(width, height) else {
        return Err(EncodeError::InvalidDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let pixels = (0..width * height)
            .flat_map(|i| [(i % 256) as u8, (i / 3 % 256) as u8, 77, 255])
            .collect();
        PixelBuffer::from_parts(width, height, pixels)
    }

    #[test]
    fn test_export_default_is_png() {
        let buffer = gradient(10, 4);
        let exported = export(&buffer, &ExportOptions::default()).unwrap();
        assert_eq!(exported.filename, "edited-image.png");
        assert_eq!(exported.mime_type, "image/png");
        assert_eq!(&exported.bytes[0..8], &PNG_SIGNATURE);

        let decoded = image::load_from_memory(&exported.bytes).unwrap().into_rgba8();
        assert_eq!(decoded.as_raw().as_slice(), buffer.pixels());
    }

    #[test]
    fn test_export_jpeg() {
        let options = ExportOptions {
            format: ExportFormat::Jpeg,
            quality: 80,
            file_stem: "holiday".to_string(),
        };
        let exported = export(&gradient(8, 8), &options).unwrap();
        assert_eq!(exported.filename, "holiday.jpg");
        assert_eq!(exported.mime_type, "image/jpeg");
        assert_eq!(&exported.bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_validate_rgba() {
        assert!(validate_rgba(&[0u8; 8], 2, 1).is_ok());
        assert!(matches!(
            validate_rgba(&[0u8; 8], 0, 1),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            validate_rgba(&[0u8; 7], 2, 1),
            Err(EncodeError::InvalidPixelData {
                expected: 8,
                actual: 7
            })
        ));
        assert!(matches!(
            validate_rgba(&[], u32::MAX, u32::MAX),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::InvalidPixelData {
            expected: 400,
            actual: 100,
        };
        assert!(err.to_string().contains("expected 400 bytes"));
    }
}
