//! RGBA color type and predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// Components are nominally in the range 0.0 to 1.0. The drawing core stores
/// whatever the caller passes; clamping is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use strokeboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(red.to_array(), [1.0, 0.0, 0.0, 1.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f32,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f32,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f32,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f32,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the components in vertex attribute order.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        RED
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color, also the initial pen color
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Predefined blue color
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined orange color
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);

/// Predefined pink/magenta color
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Predefined white color
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Fully transparent color
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
