//! Captured input samples and the strokes built from them.

use super::color::Color;
use super::geometry::WidthSource;
use crate::util::Rect;

/// One captured pointer event.
///
/// Samples are immutable once created; color and brush size are captured from
/// the pen at the moment the event arrives, so later pen changes never alter
/// what was already drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Canvas X coordinate in pixels (origin top-left)
    pub x: f32,
    /// Canvas Y coordinate in pixels (Y grows downward)
    pub y: f32,
    /// Color of the pen when the sample was captured
    pub color: Color,
    /// Pointer pressure, nominally 0.0 - 1.0 but not clamped
    pub pressure: f32,
    /// Brush size of the pen when the sample was captured
    pub size: f32,
}

impl Sample {
    pub fn new(x: f32, y: f32, color: Color, pressure: f32, size: f32) -> Self {
        Self {
            x,
            y,
            color,
            pressure,
            size,
        }
    }

    /// Half of the ribbon width at this sample for the given width source.
    ///
    /// Zero, negative and non-finite results collapse to zero, so such samples
    /// produce a ribbon with no width.
    pub fn half_width(&self, width: WidthSource) -> f32 {
        let size = match width {
            WidthSource::Captured => self.size,
            WidthSource::Override(size) => size,
        };
        let half = size * self.pressure;
        if half.is_finite() && half > 0.0 {
            half
        } else {
            0.0
        }
    }
}

/// An ordered sequence of samples forming one continuous drawn path.
///
/// Insertion order is temporal order and spatial order along the path. The only
/// mutation offered is appending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    samples: Vec<Sample>,
}

impl Stroke {
    /// Creates an empty stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample to the end of the path.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Returns the samples in path order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the pixel bounds of the rendered ribbon, expanded by the widest
    /// half-width along the path.
    ///
    /// Returns `None` for an empty stroke or one whose positions are not finite.
    pub fn bounding_box(&self, width: WidthSource) -> Option<Rect> {
        let first = self.samples.first()?;
        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;
        let mut reach = 0.0_f32;

        for sample in &self.samples {
            min_x = min_x.min(sample.x);
            max_x = max_x.max(sample.x);
            min_y = min_y.min(sample.y);
            max_y = max_y.max(sample.y);
            reach = reach.max(sample.half_width(width));
        }

        Rect::covering(min_x - reach, min_y - reach, max_x + reach, max_y + reach)
    }
}

impl FromIterator<Sample> for Stroke {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;

    #[test]
    fn half_width_scales_with_pressure() {
        let sample = Sample::new(0.0, 0.0, RED, 0.5, 4.0);
        assert_eq!(sample.half_width(WidthSource::Captured), 2.0);
        assert_eq!(sample.half_width(WidthSource::Override(10.0)), 5.0);
    }

    #[test]
    fn half_width_discards_non_finite() {
        let sample = Sample::new(0.0, 0.0, RED, f32::NAN, 4.0);
        assert_eq!(sample.half_width(WidthSource::Captured), 0.0);
        let sample = Sample::new(0.0, 0.0, RED, 1.0, f32::INFINITY);
        assert_eq!(sample.half_width(WidthSource::Captured), 0.0);
    }

    #[test]
    fn half_width_is_never_negative() {
        let sample = Sample::new(0.0, 0.0, RED, 1.0, -3.0);
        assert_eq!(sample.half_width(WidthSource::Captured), 0.0);
        let sample = Sample::new(0.0, 0.0, RED, -0.5, 4.0);
        assert_eq!(sample.half_width(WidthSource::Captured), 0.0);
        let sample = Sample::new(0.0, 0.0, RED, 1.0, 4.0);
        assert_eq!(sample.half_width(WidthSource::Override(-2.0)), 0.0);
    }

    #[test]
    fn bounding_box_includes_brush_reach() {
        let stroke: Stroke = [
            Sample::new(10.0, 10.0, RED, 1.0, 2.0),
            Sample::new(20.0, 10.0, RED, 1.0, 2.0),
        ]
        .into_iter()
        .collect();

        let rect = stroke.bounding_box(WidthSource::Captured).unwrap();
        assert_eq!(rect, Rect::new(8, 8, 15, 5).unwrap());
    }

    #[test]
    fn empty_stroke_has_no_bounds() {
        assert!(Stroke::new().bounding_box(WidthSource::Captured).is_none());
    }
}
