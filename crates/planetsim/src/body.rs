use nalgebra::{Point2, Vector2};
use std::num::NonZeroUsize;
use serde::{Deserialize, Serialize};
use units::{Length, Mass, Velocity};

use crate::color::Color;
use crate::display::DisplayTransform;
use crate::error::{Error, Result};
use crate::forces::DirectGravity;
use crate::trail::Trail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Initial conditions for one body, supplied at scene setup.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub position: Point2<f64>,  // meters
    pub velocity: Vector2<f64>, // m/s
    pub mass: f64,              // kg
    pub radius: f64,            // display units
    pub color: Color,
    pub is_star: bool,
}

impl BodySpec {
    /// A body at rest at `(x, y)` AU.
    ///
    /// # Examples
    ///
    /// ```
    /// use planetsim::{BodySpec, Color};
    /// use units::{Mass, Velocity};
    ///
    /// let earth = BodySpec::at_au(1.0, 0.0, 8.0, Color::BLUE, Mass::from_earth_masses(1.0))
    ///     .with_velocity(Velocity::from_km_per_sec(0.0), Velocity::from_km_per_sec(29.8));
    ///
    /// assert_eq!(earth.position.x, 1.496e11);
    /// assert!((earth.velocity.y - 29_800.0).abs() < 1e-9);
    /// ```
    pub fn at_au(x: f64, y: f64, radius: f64, color: Color, mass: Mass) -> Self {
        Self {
            position: Point2::new(Length::from_au(x).to_m(), Length::from_au(y).to_m()),
            velocity: Vector2::zeros(),
            mass: mass.to_kg(),
            radius,
            color,
            is_star: false,
        }
    }

    pub fn with_velocity(mut self, vx: Velocity, vy: Velocity) -> Self {
        self.velocity = Vector2::new(vx.to_meters_per_sec(), vy.to_meters_per_sec());
        self
    }

    pub fn star(mut self) -> Self {
        self.is_star = true;
        self
    }

    /// Rejects values that would break the force law or the merge rules.
    pub fn validate(&self) -> Result<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "mass must be finite and > 0, got {}",
                self.mass
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        if !self.position.coords.iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidParameter("position must be finite".into()));
        }
        if !self.velocity.iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidParameter("velocity must be finite".into()));
        }
        if !self.color.is_valid() {
            return Err(Error::InvalidParameter(
                "color channels must be within 0..=255".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub position: Point2<f64>,  // meters
    pub velocity: Vector2<f64>, // m/s
    pub mass: f64,              // kg
    pub radius: f64,            // display units, collisions and drawing only
    pub color: Color,
    pub is_star: bool,
    /// Display-only cache refreshed by the force pass.
    pub distance_to_nearest_star: Option<f64>,
    /// Valid between a force pass and the next one.
    pub net_force: Vector2<f64>,
    pub trail: Trail,
}

impl Body {
    /// Builds a body from a validated spec.
    ///
    /// `trail_capacity` of `None` keeps the full position history. A
    /// capacity of zero is rejected since the trail could never grow.
    pub fn new(id: BodyId, spec: BodySpec, trail_capacity: Option<usize>) -> Result<Self> {
        spec.validate()?;
        let trail = match trail_capacity {
            None => Trail::unbounded(),
            Some(cap) => NonZeroUsize::new(cap)
                .map(Trail::with_capacity)
                .ok_or_else(|| {
                    Error::InvalidParameter("trail_capacity must be > 0 when set".into())
                })?,
        };
        Ok(Body {
            id,
            position: spec.position,
            velocity: spec.velocity,
            mass: spec.mass,
            radius: spec.radius,
            color: spec.color,
            is_star: spec.is_star,
            distance_to_nearest_star: None,
            net_force: Vector2::zeros(),
            trail,
        })
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).magnitude()
    }

    /// Direction from this body toward `other`, in `(-π, π]`.
    pub fn angle_to(&self, other: &Body) -> f64 {
        let d = other.position - self.position;
        d.y.atan2(d.x)
    }

    /// Gravitational pull of `other` on this body.
    ///
    /// When `other` is a star, `distance_to_nearest_star` is set to the
    /// current distance to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use planetsim::{Body, BodyId, BodySpec, Color};
    /// use planetsim::forces::DirectGravity;
    /// use units::Mass;
    ///
    /// let spec = BodySpec::at_au(1.0, 0.0, 8.0, Color::BLUE, Mass::from_earth_masses(1.0));
    /// let mut earth = Body::new(BodyId(0), spec, None).unwrap();
    /// let sun_spec = BodySpec::at_au(0.0, 0.0, 15.0, Color::YELLOW, Mass::from_solar_masses(1.0)).star();
    /// let sun = Body::new(BodyId(1), sun_spec, None).unwrap();
    ///
    /// let force = earth.attraction_from(&sun, &DirectGravity::default());
    /// assert!(force.x < 0.0);
    /// assert_eq!(earth.distance_to_nearest_star, Some(1.496e11));
    /// ```
    pub fn attraction_from(&mut self, other: &Body, gravity: &DirectGravity) -> Vector2<f64> {
        if other.is_star {
            self.distance_to_nearest_star = Some(self.distance_to(other));
        }
        gravity.attraction(self, other)
    }

    /// Recomputes `net_force` as the sum of attractions from `others`.
    ///
    /// `distance_to_nearest_star` ends up as the closest star among `others`,
    /// or `None` when none of them is a star. `others` must not include this
    /// body.
    pub fn accumulate_force<'a, I>(&mut self, others: I, gravity: &DirectGravity)
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let mut force = Vector2::zeros();
        let mut nearest: Option<f64> = None;
        self.distance_to_nearest_star = None;

        for other in others {
            force += self.attraction_from(other, gravity);
            if other.is_star {
                nearest = match (nearest, self.distance_to_nearest_star) {
                    (Some(best), Some(d)) => Some(best.min(d)),
                    (best, d) => best.or(d),
                };
            }
        }

        self.net_force = force;
        self.distance_to_nearest_star = nearest;
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn display_position(&self, transform: &DisplayTransform) -> Point2<f64> {
        transform.to_display(&self.position)
    }

    /// Trail positions mapped into display space, oldest first.
    pub fn display_trail<'a>(
        &'a self,
        transform: &'a DisplayTransform,
    ) -> impl Iterator<Item = Point2<f64>> + 'a {
        self.trail.iter().map(move |p| transform.to_display(p))
    }

    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
            && self.velocity.iter().all(|c| c.is_finite())
    }
}
