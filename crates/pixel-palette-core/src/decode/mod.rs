//! Upload ingestion for Pixel Palette.
//!
//! This module provides functionality for:
//! - Validating a declared MIME type and file size before decoding
//! - Decoding PNG, JPEG and WebP uploads into RGBA pixels
//! - Applying EXIF orientation so the source appears upright
//!
//! # Architecture
//!
//! Decoding is synchronous and single-threaded, called from the WASM
//! bindings when the user picks a file. A failed upload never produces a
//! partial [`SourceImage`]; the caller keeps whatever image it had before.

mod ingest;
mod types;

pub use ingest::{decode_upload, extract_orientation, validate_upload};
pub use types::{DecodeError, MimeType, Orientation, SourceImage};
