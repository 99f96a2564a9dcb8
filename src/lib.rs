//! Freehand stroke capture, tessellation and undo/redo history.
//!
//! A [`Whiteboard`](input::Whiteboard) records pressure-weighted pointer
//! samples into strokes, keeps committed strokes with undo/redo history, and
//! turns them into triangle-strip vertex buffers for any
//! [`RenderBackend`](draw::RenderBackend) on demand.

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::Whiteboard;
