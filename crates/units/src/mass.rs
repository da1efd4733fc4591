use serde::{Deserialize, Serialize};

pub const SOLAR_MASS_KG: f64 = 1.98892e30;
pub const EARTH_MASS_KG: f64 = 5.9742e24;

/// A mass, stored in kilograms so it feeds the force law unscaled.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let sun = Mass::from_solar_masses(1.0);
/// let earth = Mass::from_earth_masses(1.0);
///
/// assert!(sun > earth);
/// assert!((earth.to_solar_masses() - 3.0037e-6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64);

impl Mass {
    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    pub fn from_solar_masses(value: f64) -> Self {
        Self(value * SOLAR_MASS_KG)
    }

    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG)
    }

    pub fn to_kg(&self) -> f64 {
        self.0
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0 / SOLAR_MASS_KG
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 / EARTH_MASS_KG
    }
}
