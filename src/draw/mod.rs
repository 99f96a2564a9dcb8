//! Drawing primitives and stroke tessellation.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Sample`] and [`Stroke`]: captured pointer input
//! - [`stroke_geometry`]: triangle-strip tessellation of a stroke
//! - [`Frame`]: committed strokes with undo/redo history
//! - [`DrawList`] and [`RenderBackend`]: the seam to the graphics backend

pub mod color;
pub mod dirty;
pub mod frame;
pub mod geometry;
pub mod render;
pub mod sample;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use frame::Frame;
pub use geometry::{VERTEX_STRIDE, Vertex, WidthSource, flatten, stroke_geometry};
pub use render::{
    DrawCall, DrawList, Primitive, Projection, RecordingBackend, RenderBackend, RenderError,
};
pub use sample::{Sample, Stroke};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
