//! Upload validation and decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader};

use super::{DecodeError, MimeType, Orientation, SourceImage};
use crate::config::IngestLimits;

/// Check a declared MIME type and byte size against the ingest limits.
///
/// Runs before any decoding so that oversized or foreign files are rejected
/// without touching their contents.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedType` if the declared type is unknown or
/// not in `limits.accepted_types`, and `DecodeError::FileTooLarge` if
/// `byte_size` exceeds `limits.max_bytes`.
pub fn validate_upload(
    declared_mime: &str,
    byte_size: u64,
    limits: &IngestLimits,
) -> Result<MimeType, DecodeError> {
    let mime = MimeType::from_declared(declared_mime)
        .filter(|mime| limits.accepts(*mime))
        .ok_or_else(|| DecodeError::UnsupportedType(declared_mime.to_string()))?;

    if byte_size > limits.max_bytes {
        return Err(DecodeError::FileTooLarge {
            size: byte_size,
            limit: limits.max_bytes,
        });
    }

    Ok(mime)
}

/// Validate and decode an uploaded file into an RGBA source image.
///
/// The container format is sniffed from the bytes; the declared type is only
/// used when sniffing fails. EXIF orientation is applied so the source
/// appears upright.
///
/// # Errors
///
/// Any error from [`validate_upload`]. `DecodeError::UnsupportedType` when
/// the bytes turn out to be a format this crate does not decode (e.g. a GIF
/// declared as `image/png`), and `DecodeError::CorruptedFile` when they
/// cannot be decoded at all.
pub fn decode_upload(
    bytes: &[u8],
    declared_mime: &str,
    limits: &IngestLimits,
) -> Result<SourceImage, DecodeError> {
    let mime = validate_upload(declared_mime, bytes.len() as u64, limits)?;

    let orientation = extract_orientation(bytes);

    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    if reader.format().is_none() {
        reader.set_format(mime.image_format());
    }

    let sniffed = reader.format();

    let img = reader.decode().map_err(|e| {
        tracing::warn!(mime = mime.as_str(), ?sniffed, error = %e, "upload failed to decode");
        match e {
            ImageError::Unsupported(_) => DecodeError::UnsupportedType(
                sniffed.map_or(mime.as_str(), |format| format.to_mime_type()).to_string(),
            ),
            other => DecodeError::CorruptedFile(other.to_string()),
        }
    })?;

    let oriented = apply_orientation(img, orientation);
    let source = SourceImage::from_rgba_image(oriented.into_rgba8())?;

    tracing::debug!(
        mime = mime.as_str(),
        width = source.width(),
        height = source.height(),
        ?orientation,
        "decoded upload"
    );
    Ok(source)
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
