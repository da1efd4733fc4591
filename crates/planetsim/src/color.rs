use serde::{Deserialize, Serialize};

/// RGB color with channels in `0.0..=255.0`.
///
/// Channels are kept as floats so repeated merges can average colors
/// without truncating. Renderers convert with [`Color::to_rgb8`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255.0, 255.0, 255.0);
    pub const YELLOW: Color = Color::rgb(255.0, 255.0, 0.0);
    pub const ORANGE: Color = Color::rgb(255.0, 100.0, 0.0);
    pub const BLUE: Color = Color::rgb(100.0, 149.0, 237.0);
    pub const RED: Color = Color::rgb(188.0, 39.0, 50.0);
    pub const DARK_GREY: Color = Color::rgb(80.0, 78.0, 81.0);
    pub const DARK_BLUE: Color = Color::rgb(0.0, 0.0, 255.0);
    pub const GREEN: Color = Color::rgb(0.0, 255.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Per-channel average of two colors.
    ///
    /// # Examples
    ///
    /// ```
    /// use planetsim::Color;
    ///
    /// let mixed = Color::YELLOW.blend(&Color::DARK_BLUE);
    /// assert_eq!(mixed, Color::rgb(127.5, 127.5, 127.5));
    /// ```
    pub fn blend(&self, other: &Color) -> Color {
        Color {
            r: (self.r + other.r) / 2.0,
            g: (self.g + other.g) / 2.0,
            b: (self.b + other.b) / 2.0,
        }
    }

    /// Rounds and clamps each channel into a byte.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let channel = |c: f64| c.round().clamp(0.0, 255.0) as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=255.0).contains(c))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Color { r, g, b }
    }
}

impl From<Color> for [f64; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}
