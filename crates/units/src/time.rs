use serde::{Deserialize, Serialize};

pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub(crate) const DAYS_PER_YEAR: f64 = 365.25;

/// A duration in seconds. One simulation step is usually a day.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let step = Time::from_days(1.0);
/// assert_eq!(step.to_seconds(), 86_400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64);

impl Time {
    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    pub fn from_hours(value: f64) -> Self {
        Self(value * SECONDS_PER_HOUR)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value * SECONDS_PER_DAY)
    }

    /// Julian years (365.25 days).
    pub fn from_years(value: f64) -> Self {
        Self(value * DAYS_PER_YEAR * SECONDS_PER_DAY)
    }

    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    pub fn to_hours(&self) -> f64 {
        self.0 / SECONDS_PER_HOUR
    }

    pub fn to_days(&self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }

    pub fn to_years(&self) -> f64 {
        self.to_days() / DAYS_PER_YEAR
    }
}
