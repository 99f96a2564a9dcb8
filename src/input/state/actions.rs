use crate::draw::{RenderBackend, RenderError};
use crate::input::command::Command;
use log::debug;

use super::{DrawingState, Whiteboard};

impl Whiteboard {
    /// Moves the most recent committed stroke onto the redo stack.
    ///
    /// No-op when nothing is committed. A stroke still being drawn is not
    /// committed and is left untouched.
    pub fn undo(&mut self) {
        let width = self.width_source();
        let Some(stroke) = self.frame.undo() else {
            debug!("Nothing to undo");
            return;
        };

        self.dirty_tracker.mark_stroke(stroke, width);
        self.needs_redraw = true;
        debug!(
            "Undo: {} committed, {} redoable",
            self.frame.undo_depth(),
            self.frame.redo_depth()
        );
    }

    /// Recommits the most recently undone stroke.
    ///
    /// No-op when the redo stack is empty.
    pub fn redo(&mut self) {
        let width = self.width_source();
        let Some(stroke) = self.frame.redo() else {
            debug!("Nothing to redo");
            return;
        };

        self.dirty_tracker.mark_stroke(stroke, width);
        self.needs_redraw = true;
        debug!(
            "Redo: {} committed, {} redoable",
            self.frame.undo_depth(),
            self.frame.redo_depth()
        );
    }

    /// Drops every stroke, the stroke in progress and all undo/redo history.
    ///
    /// Irreversible: nothing is pushed onto the undo or redo stacks.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.state = DrawingState::Idle;
        self.mark_full_redraw();
        debug!("Canvas cleared");
    }

    /// Dispatches a single command.
    ///
    /// Only [`Command::Render`] touches the backend; backend faults are
    /// returned unchanged.
    pub fn apply<B: RenderBackend + ?Sized>(
        &mut self,
        command: Command,
        backend: &mut B,
    ) -> Result<(), RenderError> {
        match command {
            Command::BeginStroke { x, y, pressure } => self.begin_stroke(x, y, pressure),
            Command::AddPoint { x, y, pressure } => self.add_point(x, y, pressure),
            Command::EndStroke => self.end_stroke(),
            Command::SetColor(color) => self.set_color(color.r, color.g, color.b, color.a),
            Command::SetBrushSize(size) => self.set_brush_size(size),
            Command::Clear => self.clear(),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Render => self.render(backend)?,
        }
        Ok(())
    }
}
