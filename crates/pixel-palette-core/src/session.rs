//! Edit session: the single owner of the source image and edit state.
//!
//! All edits arrive as [`Command`]s (or the equivalent methods) and bump a
//! revision counter. Rendering is lazy: [`EditSession::render`] reuses the
//! last committed frame when it is current and renders otherwise.
//!
//! Embeddings that render off the main thread take a [`RenderJob`], run it
//! wherever they like, and hand the result back through
//! [`EditSession::commit_render`]. A result older than the latest committed
//! frame, or taken against a previous image, is refused.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SessionConfig;
use crate::decode::{decode_upload, DecodeError, SourceImage};
use crate::encode::{export, EncodeError, ExportedImage};
use crate::filter::FilterId;
use crate::render::{render, PixelBuffer, RenderSnapshot};
use crate::transform::TransformState;
use crate::{AdjustmentKind, Adjustments};

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A render was requested before any image was loaded.
    #[error("No image loaded")]
    MissingImage,

    /// Download was requested before anything was rendered.
    #[error("Nothing to export: load an image first")]
    NothingRendered,

    /// An adjustment name outside the five known sliders.
    #[error("Unknown adjustment: {0}")]
    UnknownAdjustment(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// The user-editable part of a session.
///
/// Serializable so a host can persist or restore it; deserialized values
/// are normalized (adjustments clamped, rotation snapped) on the way in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditState {
    pub filter: FilterId,
    pub adjustments: Adjustments,
    pub transform: TransformState,
}

impl EditState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A user action, as dispatched by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    SelectFilter { filter: FilterId },
    SetAdjustment { adjustment: AdjustmentKind, value: f32 },
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    FlipVertical,
    Download,
}

/// A self-contained render request.
///
/// Owns a reference-counted handle to the source, so it can outlive further
/// edits to the session that produced it.
#[derive(Debug, Clone)]
pub struct RenderJob {
    revision: u64,
    source: Arc<SourceImage>,
    state: EditState,
}

impl RenderJob {
    /// Session revision this job was taken at.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            source: &self.source,
            filter: self.state.filter,
            adjustments: self.state.adjustments,
            transform: self.state.transform,
        }
    }

    pub fn run(&self) -> PixelBuffer {
        render(&self.snapshot())
    }
}

#[derive(Debug, Clone)]
struct Frame {
    revision: u64,
    buffer: PixelBuffer,
}

/// The editor's session object.
#[derive(Debug, Default)]
pub struct EditSession {
    config: SessionConfig,
    source: Option<Arc<SourceImage>>,
    state: EditState,
    /// Bumped on every mutation.
    revision: u64,
    /// Revision at which the current source was installed.
    image_revision: u64,
    frame: Option<Frame>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_deref()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ===== Image Loading =====

    /// Decode an upload and make it the session's source image.
    ///
    /// On failure nothing changes: the previous image, edit state and
    /// rendered frame all stay as they were.
    pub fn load_image(&mut self, bytes: &[u8], declared_mime: &str) -> Result<(), SessionError> {
        let image = decode_upload(bytes, declared_mime, &self.config.ingest)?;
        self.replace_image(image);
        Ok(())
    }

    /// Install an already decoded image, resetting all edits.
    pub fn replace_image(&mut self, image: SourceImage) {
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            "installing source image"
        );
        self.source = Some(Arc::new(image));
        self.state = EditState::default();
        self.frame = None;
        self.bump();
        self.image_revision = self.revision;
    }

    /// Replace the whole edit state, e.g. when restoring a saved session.
    pub fn restore_state(&mut self, state: EditState) {
        self.state = state;
        self.bump();
    }

    // ===== Commands =====

    /// Apply a command.
    ///
    /// Only [`Command::Download`] produces output; every other command
    /// returns `Ok(None)`.
    pub fn dispatch(&mut self, command: Command) -> Result<Option<ExportedImage>, SessionError> {
        tracing::trace!(?command, "dispatch");
        match command {
            Command::SelectFilter { filter } => self.select_filter(filter),
            Command::SetAdjustment { adjustment, value } => {
                self.set_adjustment(adjustment, value);
            }
            Command::RotateLeft => self.rotate_left(),
            Command::RotateRight => self.rotate_right(),
            Command::FlipHorizontal => self.flip_horizontal(),
            Command::FlipVertical => self.flip_vertical(),
            Command::Download => return self.export().map(Some),
        }
        Ok(None)
    }

    pub fn select_filter(&mut self, filter: FilterId) {
        self.state.filter = filter;
        self.bump();
    }

    /// Set one adjustment. Returns the value actually stored after clamping.
    pub fn set_adjustment(&mut self, kind: AdjustmentKind, value: f32) -> f32 {
        let stored = self.state.adjustments.set(kind, value);
        if value.is_nan() {
            tracing::warn!(adjustment = kind.name(), "ignoring NaN adjustment value");
        } else if stored != value {
            tracing::debug!(adjustment = kind.name(), value, stored, "adjustment clamped");
        }
        self.bump();
        stored
    }

    /// Set an adjustment by its slider name (`"brightness"`, `"shadows"`, ...).
    pub fn set_adjustment_by_name(&mut self, name: &str, value: f32) -> Result<f32, SessionError> {
        let kind = AdjustmentKind::from_name(name)
            .ok_or_else(|| SessionError::UnknownAdjustment(name.to_string()))?;
        Ok(self.set_adjustment(kind, value))
    }

    pub fn rotate_left(&mut self) {
        self.state.transform.rotate_left();
        self.bump();
    }

    pub fn rotate_right(&mut self) {
        self.state.transform.rotate_right();
        self.bump();
    }

    pub fn flip_horizontal(&mut self) {
        self.state.transform.toggle_flip_horizontal();
        self.bump();
    }

    pub fn flip_vertical(&mut self) {
        self.state.transform.toggle_flip_vertical();
        self.bump();
    }

    // ===== Rendering =====

    /// Snapshot the current state for rendering elsewhere.
    pub fn render_job(&self) -> Result<RenderJob, SessionError> {
        let source = self.source.clone().ok_or(SessionError::MissingImage)?;
        Ok(RenderJob {
            revision: self.revision,
            source,
            state: self.state,
        })
    }

    /// Offer a rendered buffer for the given revision.
    ///
    /// Returns `false` (and keeps the current frame) if the buffer belongs to
    /// a previous image, to a revision this session never issued, or is older
    /// than the frame already committed.
    pub fn commit_render(&mut self, revision: u64, buffer: PixelBuffer) -> bool {
        let newer_than_frame = match &self.frame {
            Some(frame) => revision >= frame.revision,
            None => true,
        };
        let fresh = self.source.is_some()
            && revision >= self.image_revision
            && revision <= self.revision
            && newer_than_frame;

        if !fresh {
            tracing::debug!(
                revision,
                current = self.revision,
                "discarding stale render"
            );
            return false;
        }
        self.frame = Some(Frame { revision, buffer });
        true
    }

    /// Render the current state, reusing the last frame when it is current.
    pub fn render(&mut self) -> Result<&PixelBuffer, SessionError> {
        if !self.is_frame_current() {
            let job = self.render_job()?;
            let buffer = job.run();
            self.commit_render(job.revision(), buffer);
        }
        self.frame
            .as_ref()
            .map(|f| &f.buffer)
            .ok_or(SessionError::MissingImage)
    }

    /// The most recently committed frame, which may lag behind the state.
    pub fn current_frame(&self) -> Option<&PixelBuffer> {
        self.frame.as_ref().map(|f| &f.buffer)
    }

    /// Whether the committed frame reflects the latest revision.
    pub fn is_frame_current(&self) -> bool {
        self.frame
            .as_ref()
            .is_some_and(|f| f.revision == self.revision)
    }

    // ===== Export =====

    /// Encode the most recent render with the configured export options.
    ///
    /// Renders first if the committed frame is out of date. Without an image
    /// this fails with [`SessionError::NothingRendered`]; the session stays
    /// usable and export can be retried.
    pub fn export(&mut self) -> Result<ExportedImage, SessionError> {
        if !self.has_image() {
            tracing::warn!("download requested with no image loaded");
            return Err(SessionError::NothingRendered);
        }
        let options = self.config.export.clone();
        let buffer = self.render()?;
        Ok(export(buffer, &options)?)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
