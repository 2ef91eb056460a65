//! Geometric transform: quarter-turn rotation and flips.
//!
//! The transform is applied in the render pipeline before any color
//! processing.
//!
//! # Transform Order
//!
//! 1. Mirror (horizontal, vertical) in the source image's own frame
//! 2. Rotation clockwise by 0, 90, 180 or 270 degrees
//! 3. Filter preset and tonal adjustments (see [`crate::render`])
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise
//! - Origin is top-left corner

mod geometry;
mod state;

pub use geometry::apply_transform;
pub use state::{Rotation, TransformState};
