//! Stroke tessellation into variable-width triangle-strip ribbons.
//!
//! Each consecutive pair of samples becomes one quad whose width follows the
//! pressure at its two endpoints. Vertices are emitted near endpoint first,
//! left before right, so every quad is a valid four-vertex triangle strip.

use super::sample::Sample;

/// Number of floats per vertex in the flat buffer: x, y, r, g, b, a.
pub const VERTEX_STRIDE: usize = 6;

/// A single ribbon vertex as uploaded to the rendering backend.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Canvas position in pixels
    pub position: [f32; 2],
    /// RGBA color of the source sample
    pub color: [f32; 4],
}

/// Where the brush-size scalar for each sample comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WidthSource {
    /// Use the size captured on each sample
    Captured,
    /// Use one size for the whole stroke, ignoring captured sizes
    Override(f32),
}

/// Tessellates a stroke into triangle-strip vertices.
///
/// Strokes with fewer than two samples produce no geometry; a lone dot is not
/// rendered. Otherwise exactly `4 * (samples.len() - 1)` vertices are returned.
///
/// Each vertex takes the color of its own sample, so a color change in the
/// middle of a stroke shows as a hard edge rather than a gradient.
///
/// A zero-length segment reuses the direction of the segment before it. Leading
/// zero-length segments borrow the first real direction found later in the
/// path, and a stroke made only of coincident samples gets a zero normal, which
/// collapses its vertices onto the samples.
pub fn stroke_geometry(samples: &[Sample], width: WidthSource) -> Vec<Vertex> {
    if samples.len() < 2 {
        return Vec::new();
    }

    let normals = segment_normals(samples);
    let mut vertices = Vec::with_capacity(4 * (samples.len() - 1));

    for (pair, normal) in samples.windows(2).zip(normals) {
        push_cross_section(&mut vertices, &pair[0], normal, width);
        push_cross_section(&mut vertices, &pair[1], normal, width);
    }

    vertices
}

/// Reinterprets vertices as the flat float buffer the backend consumes.
pub fn flatten(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

/// Emits the left and right vertex of the ribbon at `sample`.
fn push_cross_section(
    out: &mut Vec<Vertex>,
    sample: &Sample,
    normal: [f32; 2],
    width: WidthSource,
) {
    let half = sample.half_width(width);
    let color = sample.color.to_array();
    let offset = [normal[0] * half, normal[1] * half];

    out.push(Vertex {
        position: [sample.x + offset[0], sample.y + offset[1]],
        color,
    });
    out.push(Vertex {
        position: [sample.x - offset[0], sample.y - offset[1]],
        color,
    });
}

/// Computes one unit normal per segment, filling zero-length segments from
/// their neighbours.
fn segment_normals(samples: &[Sample]) -> Vec<[f32; 2]> {
    let directions: Vec<Option<[f32; 2]>> = samples
        .windows(2)
        .map(|pair| unit_direction(&pair[0], &pair[1]))
        .collect();

    let mut previous = directions
        .iter()
        .flatten()
        .next()
        .copied()
        .unwrap_or([0.0, 0.0]);

    directions
        .into_iter()
        .map(|direction| {
            let direction = direction.unwrap_or(previous);
            previous = direction;
            [-direction[1], direction[0]]
        })
        .collect()
}

/// Unit vector from `from` to `to`, or `None` when the segment has no usable length.
fn unit_direction(from: &Sample, to: &Sample) -> Option<[f32; 2]> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = (dx * dx + dy * dy).sqrt();

    if !length.is_finite() || length < f32::EPSILON {
        return None;
    }

    Some([dx / length, dy / length])
}
