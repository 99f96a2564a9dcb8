use crate::draw::{DrawList, RenderBackend, RenderError, stroke_geometry};

use super::{DrawingState, Whiteboard};

impl Whiteboard {
    /// Builds the geometry for the current frame.
    ///
    /// Committed strokes come first in commit order, followed by the stroke in
    /// progress. Geometry is regenerated on every call and never cached, so
    /// repeated calls without a mutation in between return identical lists.
    pub fn draw_list(&self) -> DrawList {
        let width = self.width_source();
        let mut list = DrawList::new();

        for stroke in self.frame.committed() {
            list.push(stroke_geometry(stroke.samples(), width));
        }

        if let DrawingState::Drawing { stroke } = &self.state {
            list.push(stroke_geometry(stroke.samples(), width));
        }

        list
    }

    /// Regenerates the frame and submits it to the backend.
    ///
    /// Clears the redraw flag and any pending dirty regions once every call has
    /// been accepted. Callers that repaint partially should take the regions
    /// with [`Whiteboard::take_dirty_regions`] before rendering.
    pub fn render<B: RenderBackend + ?Sized>(
        &mut self,
        backend: &mut B,
    ) -> Result<(), RenderError> {
        let list = self.draw_list();
        log::trace!(
            "Rendering {} draw calls ({} vertices)",
            list.calls.len(),
            list.vertex_count()
        );
        list.submit(backend)?;
        self.dirty_tracker.reset();
        self.needs_redraw = false;
        Ok(())
    }

    /// Renders only when something visible changed since the last render.
    ///
    /// Returns whether a frame was submitted.
    pub fn render_if_needed<B: RenderBackend + ?Sized>(
        &mut self,
        backend: &mut B,
    ) -> Result<bool, RenderError> {
        if !self.needs_redraw {
            return Ok(false);
        }
        self.render(backend)?;
        Ok(true)
    }
}
