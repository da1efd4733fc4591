//! Force models for the simulation
//!
//! A `ForceModel` turns the current positions of every body into the net
//! force on one of them. The simulation evaluates it for all bodies before
//! any of them moves.

use crate::body::Body;
use nalgebra::Vector2;

pub mod gravity;


pub use gravity::DirectGravity;

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.67428e-11;

/// A source of force on bodies in the simulation
pub trait ForceModel: Send + Sync {
    /// Net force in newtons on the body at `idx`, from every other body in `bodies`.
    fn force_on(&self, idx: usize, bodies: &[Body]) -> Vector2<f64>;

    /// Potential energy of the configuration in joules.
    ///
    /// Default implementation returns 0.0 for non-conservative or
    /// untracked models.
    fn potential_energy(&self, _bodies: &[Body]) -> f64 {
        0.0
    }
}
