//! Input handling and the stroke history state machine.
//!
//! This module turns caller operations (pointer samples, pen changes, undo,
//! redo, clear) into changes of the drawing surface, and produces the draw
//! list for each frame on demand.

pub mod command;
pub mod state;

// Re-export commonly used types at module level
pub use command::{Command, CommandParseError, ScriptError, parse_script};
pub use state::{DrawingState, Whiteboard};
