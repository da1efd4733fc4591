//! Direct N-body gravity (O(N²) implementation)

use crate::body::Body;
use crate::forces::{ForceModel, G};
use nalgebra::Vector2;

/// Direct O(N²) Newtonian gravity between every pair of bodies
///
/// Each pair contributes `F = G m₁ m₂ / d²` along the line joining them.
/// Separations below `min_distance` are floored to it, and coincident bodies
/// contribute nothing since the direction between them is undefined.
///
/// # Examples
///
/// ```
/// use planetsim::forces::{DirectGravity, ForceModel};
/// use planetsim::{Body, BodyId, BodySpec, Color};
/// use units::Mass;
///
/// let sun = BodySpec::at_au(0.0, 0.0, 15.0, Color::YELLOW, Mass::from_solar_masses(1.0));
/// let earth = BodySpec::at_au(1.0, 0.0, 8.0, Color::BLUE, Mass::from_earth_masses(1.0));
/// let bodies = vec![
///     Body::new(BodyId(0), sun, None).unwrap(),
///     Body::new(BodyId(1), earth, None).unwrap(),
/// ];
///
/// let gravity = DirectGravity::default();
/// // Earth is pulled toward the Sun (negative x)
/// assert!(gravity.force_on(1, &bodies).x < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct DirectGravity {
    /// Gravitational constant (SI)
    pub g: f64,
    /// Separation floor in meters
    pub min_distance: f64,
}

impl DirectGravity {
    pub fn new(g: f64, min_distance: f64) -> Self {
        Self { g, min_distance }
    }

    /// Force exerted by `source` on `target`.
    pub fn attraction(&self, target: &Body, source: &Body) -> Vector2<f64> {
        let d = target.distance_to(source);
        if d == 0.0 {
            return Vector2::zeros();
        }
        let d = d.max(self.min_distance);
        let magnitude = self.g * target.mass * source.mass / (d * d);
        let theta = target.angle_to(source);

        Vector2::new(magnitude * theta.cos(), magnitude * theta.sin())
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new(G, 1.0)
    }
}

impl ForceModel for DirectGravity {
    fn force_on(&self, idx: usize, bodies: &[Body]) -> Vector2<f64> {
        let body = &bodies[idx];
        bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| self.attraction(body, other))
            .fold(Vector2::zeros(), |acc, f| acc + f)
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        // Each pair counted once
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().map(move |b| {
                    let d = a.distance_to(b).max(self.min_distance);
                    -self.g * a.mass * b.mass / d
                })
            })
            .sum()
    }
}
