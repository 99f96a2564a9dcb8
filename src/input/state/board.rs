//! Drawing state machine and per-canvas session state.

use crate::config::{BrushSizeMode, Config};
use crate::draw::{Color, DirtyTracker, Frame, Projection, RED, Stroke, WidthSource};
use crate::util::{self, Rect};

/// Brush size used when no configuration is supplied.
pub const DEFAULT_BRUSH_SIZE: f32 = 5.0;

/// Current drawing mode state machine.
///
/// The stroke being drawn lives inside [`DrawingState::Drawing`], so there is
/// never an in-progress stroke while idle.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not drawing - waiting for a stroke to begin
    Idle,
    /// Accumulating samples between stroke begin and stroke end
    Drawing {
        /// Samples captured so far, in arrival order
        stroke: Stroke,
    },
}

/// State of one drawing surface.
///
/// Owns the committed strokes with their undo/redo history, the stroke in
/// progress and the pen. Every operation is total: calls that make no sense in
/// the current state are ignored. Callers must deliver input strictly in
/// arrival order and never mutate one board from two threads at once.
///
/// Rendering is pull-based. Mutations only record damage; the caller decides
/// when to produce a frame with [`Whiteboard::draw_list`] or
/// [`Whiteboard::render`].
#[derive(Debug)]
pub struct Whiteboard {
    /// Committed strokes and undo/redo history
    pub(super) frame: Frame,
    /// Current drawing mode
    pub(super) state: DrawingState,
    /// Color applied to new samples
    pub(super) current_color: Color,
    /// Brush size applied to new samples
    pub(super) current_brush_size: f32,
    /// Which brush size strokes render with
    pub(super) brush_size_mode: BrushSizeMode,
    /// Canvas width in pixels
    pub(super) width: u32,
    /// Canvas height in pixels
    pub(super) height: u32,
    /// Whether visible pixels changed since the last render
    pub(super) needs_redraw: bool,
    /// Tracks dirty regions between renders
    pub(super) dirty_tracker: DirtyTracker,
}

impl Whiteboard {
    /// Creates an empty board with a red pen of size 5.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_defaults(
            RED,
            DEFAULT_BRUSH_SIZE,
            BrushSizeMode::default(),
            width,
            height,
        )
    }

    /// Creates an empty board with the pen and canvas from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.default_color.to_color(),
            config.drawing.default_brush_size,
            config.drawing.brush_size_mode,
            config.canvas.width,
            config.canvas.height,
        )
    }

    /// Creates an empty board with specified defaults.
    pub fn with_defaults(
        color: Color,
        brush_size: f32,
        brush_size_mode: BrushSizeMode,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            frame: Frame::new(),
            state: DrawingState::Idle,
            current_color: color,
            current_brush_size: brush_size,
            brush_size_mode,
            width,
            height,
            needs_redraw: true,
            dirty_tracker: DirtyTracker::new(),
        }
    }

    /// Changes the color of subsequently captured samples.
    ///
    /// Components are not validated. Existing samples keep their color.
    pub fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.current_color = Color::new(r, g, b, a);
        log::debug!(
            "Pen color set to {} ({r:.2}, {g:.2}, {b:.2}, {a:.2})",
            util::color_to_name(&self.current_color)
        );
    }

    /// Changes the brush size of subsequently captured samples.
    ///
    /// Not validated; zero or negative sizes give zero-width ribbons. In
    /// [`BrushSizeMode::Live`] every visible stroke changes width, so the whole
    /// surface is marked dirty.
    pub fn set_brush_size(&mut self, size: f32) {
        self.current_brush_size = size;
        log::debug!("Brush size set to {size:.1}");

        if self.brush_size_mode == BrushSizeMode::Live && self.has_visible_strokes() {
            self.mark_full_redraw();
        }
    }

    /// Switches between captured and live brush sizes.
    pub fn set_brush_size_mode(&mut self, mode: BrushSizeMode) {
        if self.brush_size_mode != mode {
            self.brush_size_mode = mode;
            self.mark_full_redraw();
        }
    }

    /// Updates the canvas dimensions used for the projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.mark_full_redraw();
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn current_brush_size(&self) -> f32 {
        self.current_brush_size
    }

    pub fn brush_size_mode(&self) -> BrushSizeMode {
        self.brush_size_mode
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel-to-clip projection for the current canvas size.
    pub fn projection(&self) -> Projection {
        Projection::ortho(self.width, self.height)
    }

    /// Returns the current drawing mode.
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// The stroke being drawn, if any.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            DrawingState::Drawing { stroke } => Some(stroke),
            DrawingState::Idle => None,
        }
    }

    /// Committed strokes in draw order.
    pub fn committed_strokes(&self) -> &[Stroke] {
        self.frame.committed()
    }

    /// Undone strokes, most recently undone first.
    pub fn redo_stack(&self) -> impl Iterator<Item = &Stroke> {
        self.frame.redo_stack()
    }

    pub fn undo_depth(&self) -> usize {
        self.frame.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.frame.redo_depth()
    }

    /// Whether visible pixels changed since the last successful render.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Drains pending dirty rectangles for the current surface size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.width.min(i32::MAX as u32) as i32;
        let height = self.height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }

    /// Width source for tessellating strokes right now.
    pub(crate) fn width_source(&self) -> WidthSource {
        self.brush_size_mode.width_source(self.current_brush_size)
    }

    /// Records damage for a stroke that is not owned by the frame history.
    pub(crate) fn mark_stroke_dirty(&mut self, stroke: &Stroke) {
        let width = self.width_source();
        self.dirty_tracker.mark_stroke(stroke, width);
        self.needs_redraw = true;
    }

    pub(crate) fn mark_full_redraw(&mut self) {
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    fn has_visible_strokes(&self) -> bool {
        !self.frame.committed().is_empty() || self.is_drawing()
    }
}
