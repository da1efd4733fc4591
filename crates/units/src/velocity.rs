use crate::length::{Length, KM_TO_M};
use crate::mass::Mass;
use serde::{Deserialize, Serialize};

/// Circular orbital speed `sqrt(G * M / r)` around a central mass.
///
/// `g` is the gravitational constant in SI units, passed in so callers can
/// use whatever value their simulation is configured with.
///
/// # Examples
/// ```
/// use units::{circular_orbital_velocity, Length, Mass};
///
/// // Earth around the Sun: roughly 29.8 km/s
/// let v = circular_orbital_velocity(6.67428e-11, Mass::from_solar_masses(1.0), Length::from_au(1.0));
/// assert!((v.to_km_per_sec() - 29.8).abs() < 0.1);
/// ```
pub fn circular_orbital_velocity(g: f64, central_mass: Mass, radius: Length) -> Velocity {
    Velocity((g * central_mass.to_kg() / radius.to_m()).sqrt())
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64);

impl Velocity {
    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / KM_TO_M
    }
}
