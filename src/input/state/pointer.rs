use crate::draw::{Sample, Stroke};
use log::{debug, trace};

use super::{DrawingState, Whiteboard};

impl Whiteboard {
    /// Starts a new stroke at the given position.
    ///
    /// Always accepted. An unfinished stroke from an earlier `begin_stroke` is
    /// discarded without being committed.
    pub fn begin_stroke(&mut self, x: f32, y: f32, pressure: f32) {
        let sample = self.capture(x, y, pressure);

        let mut stroke = Stroke::new();
        stroke.push(sample);

        if let DrawingState::Drawing { stroke: previous } =
            std::mem::replace(&mut self.state, DrawingState::Drawing { stroke })
        {
            debug!(
                "Discarding unfinished stroke with {} samples",
                previous.len()
            );
            if previous.len() >= 2 {
                self.mark_stroke_dirty(&previous);
            }
        }

        trace!("Stroke begun at ({x:.1}, {y:.1}) pressure {pressure:.2}");
    }

    /// Appends a sample to the stroke being drawn.
    ///
    /// No-op while idle.
    pub fn add_point(&mut self, x: f32, y: f32, pressure: f32) {
        if !self.is_drawing() {
            trace!("Ignoring point ({x:.1}, {y:.1}) while idle");
            return;
        }

        let sample = self.capture(x, y, pressure);

        let DrawingState::Drawing { stroke } = &mut self.state else {
            return;
        };
        let previous = stroke.samples().last().copied();
        stroke.push(sample);

        // Only the newest segment changed on screen.
        let segment: Stroke = previous.into_iter().chain([sample]).collect();
        self.mark_stroke_dirty(&segment);

        trace!("Point added at ({x:.1}, {y:.1}) pressure {pressure:.2}");
    }

    /// Commits the stroke being drawn and returns to idle.
    ///
    /// No-op while idle. Committing clears the redo history.
    pub fn end_stroke(&mut self) {
        let DrawingState::Drawing { stroke } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            trace!("Ignoring end of stroke while idle");
            return;
        };

        if stroke.is_empty() {
            return;
        }

        let dropped_redo = self.frame.redo_depth();
        debug!(
            "Committing stroke with {} samples (dropping {} redo entries)",
            stroke.len(),
            dropped_redo
        );
        self.frame.commit(stroke);
    }

    /// Builds a sample from the current pen.
    fn capture(&self, x: f32, y: f32, pressure: f32) -> Sample {
        Sample::new(x, y, self.current_color, pressure, self.current_brush_size)
    }
}
