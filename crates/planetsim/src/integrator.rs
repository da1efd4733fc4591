//! Time integration for the simulation
//!
//! Integrators consume the net force already stored on each body and move
//! the body forward by one fixed timestep. Forces for every body must be
//! computed before `advance` is called, so no body sees a neighbour's
//! updated position within the same step.

use crate::body::Body;
use serde::{Deserialize, Serialize};

/// A fixed-step time integrator
pub trait Integrator: Send + Sync {
    /// Advance every body by `dt` seconds using its current `net_force`,
    /// appending the new position to its trail.
    fn advance(&self, bodies: &mut [Body], dt: f64);
}

/// Semi-implicit (symplectic) Euler
///
/// Velocity is kicked by the start-of-step force, then the position drifts
/// with the *new* velocity:
///
/// 1. v(t + dt) = v(t) + F(t)/m * dt
/// 2. x(t + dt) = x(t) + v(t + dt) * dt
///
/// This keeps orbits bounded over long runs where explicit Euler spirals out.
///
/// # Examples
///
/// ```
/// use nalgebra::Vector2;
/// use planetsim::integrator::{Integrator, SemiImplicitEuler};
/// use planetsim::{Body, BodyId, BodySpec, Color};
/// use units::Mass;
///
/// let spec = BodySpec::at_au(0.0, 0.0, 4.0, Color::WHITE, Mass::from_kg(2.0));
/// let mut bodies = vec![Body::new(BodyId(0), spec, None).unwrap()];
/// bodies[0].net_force = Vector2::new(4.0, 0.0);
///
/// SemiImplicitEuler.advance(&mut bodies, 1.0);
///
/// assert_eq!(bodies[0].velocity.x, 2.0);
/// assert_eq!(bodies[0].position.x, 2.0);
/// assert_eq!(bodies[0].trail.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn advance(&self, bodies: &mut [Body], dt: f64) {
        bodies.iter_mut().for_each(|body| {
            body.velocity += body.net_force / body.mass * dt;
            body.position += body.velocity * dt;
            body.trail.push(body.position);
        });
    }
}

/// Explicit Euler (1st order, for comparison only)
///
/// Moves the position with the old velocity before updating the velocity.
/// Energy grows every step on a circular orbit; use `SemiImplicitEuler`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn advance(&self, bodies: &mut [Body], dt: f64) {
        bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt;
            body.velocity += body.net_force / body.mass * dt;
            body.trail.push(body.position);
        });
    }
}

/// Integrator selection for configs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorKind {
    #[default]
    SemiImplicitEuler,
    Euler,
}

impl IntegratorKind {
    pub fn integrator(&self) -> &'static dyn Integrator {
        match self {
            IntegratorKind::SemiImplicitEuler => &SemiImplicitEuler,
            IntegratorKind::Euler => &Euler,
        }
    }
}
