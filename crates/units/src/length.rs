use serde::{Deserialize, Serialize};

/// Meters per astronomical unit, at the precision the scenes are laid out in.
pub const AU_TO_M: f64 = 1.496e11;
pub const KM_TO_M: f64 = 1_000.0;

/// A distance, stored in meters.
///
/// Scenes lay bodies out in AU; the force law wants meters.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// assert_eq!(orbit.to_m(), 1.496e11);
/// assert_eq!(Length::from_km(2.5).to_m(), 2_500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64);

impl Length {
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_M)
    }

    pub fn to_m(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_M
    }

    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_M
    }
}
