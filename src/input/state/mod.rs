mod actions;
mod board;
mod pointer;
mod render;

pub use board::{DEFAULT_BRUSH_SIZE, DrawingState, Whiteboard};
