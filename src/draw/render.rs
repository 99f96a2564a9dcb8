//! Backend seam: draw lists, the backend trait, and the canvas projection.
//!
//! The core never talks to a graphics API. Each frame it builds a [`DrawList`]
//! of triangle-strip vertex buffers and hands them to a [`RenderBackend`],
//! which owns buffer upload, shaders and the draw calls themselves.

use super::geometry::{VERTEX_STRIDE, Vertex, flatten};
use thiserror::Error;

/// Primitive topology for uploaded vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Each vertex forms a triangle with the previous two.
    TriangleStrip,
}

/// Faults raised by a rendering backend.
///
/// The core does not retry or recover; these propagate to the caller as-is.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Graphics context lost")]
    ContextLost,

    #[error("Rendering backend error: {0}")]
    Backend(String),
}

/// Consumer of generated geometry.
///
/// `vertices` holds `stride` floats per vertex: position (2) then RGBA color (4).
/// The slice is only valid for the duration of the call; backends must copy
/// whatever they need to keep.
pub trait RenderBackend {
    fn upload_and_draw(
        &mut self,
        vertices: &[f32],
        stride: usize,
        primitive: Primitive,
    ) -> Result<(), RenderError>;
}

/// One stroke's worth of geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub vertices: Vec<Vertex>,
}

impl DrawCall {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The vertices as a flat float buffer.
    pub fn as_floats(&self) -> &[f32] {
        flatten(&self.vertices)
    }
}

/// Everything needed to paint one frame, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends geometry, skipping empty buffers (strokes with fewer than two samples).
    pub fn push(&mut self, vertices: Vec<Vertex>) {
        if !vertices.is_empty() {
            self.calls.push(DrawCall { vertices });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Total number of vertices across all calls.
    pub fn vertex_count(&self) -> usize {
        self.calls.iter().map(DrawCall::vertex_count).sum()
    }

    /// Issues every call to the backend in order, stopping at the first fault.
    pub fn submit<B: RenderBackend + ?Sized>(&self, backend: &mut B) -> Result<(), RenderError> {
        for call in &self.calls {
            backend.upload_and_draw(call.as_floats(), VERTEX_STRIDE, Primitive::TriangleStrip)?;
        }
        Ok(())
    }
}

/// Backend that keeps a copy of every upload instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    /// Flat vertex buffers in submission order
    pub uploads: Vec<Vec<f32>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets everything recorded so far.
    pub fn reset(&mut self) {
        self.uploads.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn upload_and_draw(
        &mut self,
        vertices: &[f32],
        stride: usize,
        primitive: Primitive,
    ) -> Result<(), RenderError> {
        debug_assert_eq!(stride, VERTEX_STRIDE);
        debug_assert_eq!(primitive, Primitive::TriangleStrip);
        self.uploads.push(vertices.to_vec());
        Ok(())
    }
}

/// Orthographic projection from canvas pixels to clip space.
///
/// Canvas origin is the top-left corner with Y growing downward; clip space
/// spans -1..1 with Y up. Stored column-major, ready for a shader uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub matrix: [[f32; 4]; 4],
}

impl Projection {
    /// Builds `ortho(0, width, height, 0, -1, 1)`.
    ///
    /// Zero dimensions are treated as one pixel.
    pub fn ortho(width: u32, height: u32) -> Self {
        let (left, right) = (0.0_f32, width.max(1) as f32);
        let (bottom, top) = (height.max(1) as f32, 0.0_f32);
        let (near, far) = (-1.0_f32, 1.0_f32);

        let mut matrix = [[0.0; 4]; 4];
        matrix[0][0] = 2.0 / (right - left);
        matrix[1][1] = 2.0 / (top - bottom);
        matrix[2][2] = -2.0 / (far - near);
        matrix[3][0] = -(right + left) / (right - left);
        matrix[3][1] = -(top + bottom) / (top - bottom);
        matrix[3][2] = -(far + near) / (far - near);
        matrix[3][3] = 1.0;

        Self { matrix }
    }

    /// Maps a canvas position to clip space.
    pub fn apply(&self, [x, y]: [f32; 2]) -> [f32; 2] {
        let m = &self.matrix;
        [
            m[0][0] * x + m[1][0] * y + m[3][0],
            m[0][1] * x + m[1][1] * y + m[3][1],
        ]
    }
}
