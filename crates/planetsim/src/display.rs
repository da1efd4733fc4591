//! Mapping between physical coordinates and display space
//!
//! Collision testing happens in display space: two bodies touch when the
//! circles a renderer would draw for them overlap. The transform is a
//! uniform scale followed by a translation, `display = position * scale + offset`.

use nalgebra::{Point2, Vector2};
use units::Length;

/// Default viewport the scene presets are laid out for.
pub const DEFAULT_WIDTH: f64 = 1500.0;
pub const DEFAULT_HEIGHT: f64 = 800.0;
/// Display units per AU in the default view.
pub const DEFAULT_PIXELS_PER_AU: f64 = 250.0;

/// Scale + offset transform from meters to display units.
///
/// # Examples
///
/// ```
/// use nalgebra::Point2;
/// use planetsim::DisplayTransform;
///
/// let view = DisplayTransform::from_viewport(1500.0, 800.0, 250.0 / 1.496e11);
/// let origin = view.to_display(&Point2::new(0.0, 0.0));
/// assert_eq!(origin, Point2::new(750.0, 400.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    /// Display units per meter.
    pub scale: f64,
    pub offset: Vector2<f64>,
}

impl DisplayTransform {
    pub fn new(scale: f64, offset: Vector2<f64>) -> Self {
        Self { scale, offset }
    }

    /// Display space equals physical space.
    pub fn identity() -> Self {
        Self::new(1.0, Vector2::zeros())
    }

    /// Physical origin drawn at the centre of a `width` x `height` viewport.
    pub fn from_viewport(width: f64, height: f64, scale: f64) -> Self {
        Self::new(scale, Vector2::new(width / 2.0, height / 2.0))
    }

    pub fn to_display(&self, position: &Point2<f64>) -> Point2<f64> {
        Point2::from(position.coords * self.scale + self.offset)
    }

    pub fn to_physical(&self, display: &Point2<f64>) -> Point2<f64> {
        Point2::from((display.coords - self.offset) / self.scale)
    }

    /// Distance between two physical positions, measured in display units.
    pub fn display_distance(&self, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
        (self.to_display(a) - self.to_display(b)).magnitude()
    }
}

impl Default for DisplayTransform {
    fn default() -> Self {
        Self::from_viewport(
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            DEFAULT_PIXELS_PER_AU / Length::from_au(1.0).to_m(),
        )
    }
}
