//! Committed stroke history with undo/redo.

use super::sample::Stroke;

/// Container for every committed stroke plus the strokes available to redo.
///
/// Both stacks share one arena: `strokes[..cursor]` is the committed history in
/// draw order (its last element is the top of the undo stack) and
/// `strokes[cursor..]` holds undone strokes, with the most recently undone one
/// at `cursor`. Undo and redo only move the cursor, so no stroke is copied.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    strokes: Vec<Stroke>,
    cursor: usize,
}

impl Frame {
    /// Creates a new empty frame with no strokes.
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
            cursor: 0,
        }
    }

    /// Commits a stroke on top of the history, discarding any redo entries.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.truncate(self.cursor);
        self.strokes.push(stroke);
        self.cursor = self.strokes.len();
    }

    /// Moves the most recent committed stroke onto the redo stack.
    ///
    /// Returns the undone stroke, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&Stroke> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.strokes.get(self.cursor)
    }

    /// Recommits the most recently undone stroke.
    ///
    /// Returns the restored stroke, or `None` when the redo stack is empty.
    pub fn redo(&mut self) -> Option<&Stroke> {
        if self.cursor >= self.strokes.len() {
            return None;
        }
        self.cursor += 1;
        self.strokes.get(self.cursor - 1)
    }

    /// Removes every stroke, including undo and redo history.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.cursor = 0;
    }

    /// Committed strokes in draw order (first = bottom layer).
    pub fn committed(&self) -> &[Stroke] {
        &self.strokes[..self.cursor]
    }

    /// Undone strokes, most recently undone last.
    pub fn redo_stack(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes[self.cursor..].iter().rev()
    }

    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    pub fn redo_depth(&self) -> usize {
        self.strokes.len() - self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, Sample};

    fn stroke(x: f32) -> Stroke {
        [
            Sample::new(x, 0.0, RED, 1.0, 1.0),
            Sample::new(x, 5.0, RED, 1.0, 1.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn undo_then_redo_restores_order() {
        let mut frame = Frame::new();
        frame.commit(stroke(1.0));
        frame.commit(stroke(2.0));
        frame.commit(stroke(3.0));

        for _ in 0..3 {
            assert!(frame.undo().is_some());
        }
        assert!(frame.committed().is_empty());
        assert_eq!(frame.redo_depth(), 3);

        for _ in 0..3 {
            assert!(frame.redo().is_some());
        }
        assert_eq!(frame.committed(), &[stroke(1.0), stroke(2.0), stroke(3.0)]);
        assert_eq!(frame.redo_depth(), 0);
    }

    #[test]
    fn redo_stack_top_is_last_undone() {
        let mut frame = Frame::new();
        frame.commit(stroke(1.0));
        frame.commit(stroke(2.0));
        frame.undo();
        frame.undo();

        let order: Vec<&Stroke> = frame.redo_stack().collect();
        assert_eq!(order, vec![&stroke(2.0), &stroke(1.0)]);
        assert_eq!(frame.redo(), Some(&stroke(1.0)));
    }

    #[test]
    fn commit_discards_redo_entries() {
        let mut frame = Frame::new();
        frame.commit(stroke(1.0));
        frame.commit(stroke(2.0));
        frame.undo();

        frame.commit(stroke(4.0));
        assert!(frame.redo().is_none());
        assert_eq!(frame.committed(), &[stroke(1.0), stroke(4.0)]);
        assert_eq!(frame.undo_depth(), 2);
    }

    #[test]
    fn empty_frame_ignores_undo_and_redo() {
        let mut frame = Frame::new();
        assert!(frame.undo().is_none());
        assert!(frame.redo().is_none());
        assert_eq!(frame.undo_depth(), 0);
    }

    #[test]
    fn clear_drops_all_history() {
        let mut frame = Frame::new();
        frame.commit(stroke(1.0));
        frame.commit(stroke(2.0));
        frame.undo();
        frame.clear();

        assert!(frame.undo().is_none());
        assert!(frame.redo().is_none());
        assert!(frame.committed().is_empty());
    }
}
