//! Configuration types for building simulations, loadable from YAML.
//!
//! A scenario is a [`SimulationConfig`] plus the initial bodies. Every config
//! field has a default, so a scenario file only needs to list its bodies:
//!
//! ```yaml
//! config:
//!   timestep: 86400.0          # seconds per step (one day)
//!   min_distance: 1.0          # force-law separation floor, meters
//!   trail_capacity: 2000       # omit for unbounded trails
//!   integrator: semi_implicit_euler
//!   display:
//!     width: 1500.0
//!     height: 800.0
//!     pixels_per_au: 250.0
//!
//! bodies:
//!   - position_au: [0.0, 0.0]
//!     mass_kg: 1.98892e30
//!     radius: 15.0
//!     color: [255.0, 255.0, 0.0]
//!     star: true
//!   - position_au: [1.0, 0.0]
//!     velocity_km_s: [0.0, 29.8]
//!     mass_kg: 5.9742e24
//!     radius: 8.0
//!     color: [100.0, 149.0, 237.0]
//! ```

use serde::{Deserialize, Serialize};
use std::io::Read;
use units::{Length, Mass, Time, Velocity};

use crate::body::BodySpec;
use crate::color::Color;
use crate::display::{
    DisplayTransform, DEFAULT_HEIGHT, DEFAULT_PIXELS_PER_AU, DEFAULT_WIDTH,
};
use crate::error::{Error, Result};
use crate::forces::G;
use crate::integrator::IntegratorKind;

/// Viewport the collision test is evaluated in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f64,
    pub height: f64,
    /// Display units per astronomical unit
    pub pixels_per_au: f64,
}

impl DisplayConfig {
    pub fn transform(&self) -> DisplayTransform {
        DisplayTransform::from_viewport(
            self.width,
            self.height,
            self.pixels_per_au / Length::from_au(1.0).to_m(),
        )
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pixels_per_au: DEFAULT_PIXELS_PER_AU,
        }
    }
}

/// Numerical and physical parameters for a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seconds advanced per step
    pub timestep: f64,
    pub gravitational_constant: f64,
    /// Separation floor for the force law, meters
    pub min_distance: f64,
    /// Ring-buffer size for trails, `None` keeps everything
    pub trail_capacity: Option<usize>,
    pub integrator: IntegratorKind,
    pub display: DisplayConfig,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidParameter(format!(
                    "{name} must be finite and > 0, got {value}"
                )))
            }
        };
        positive("timestep", self.timestep)?;
        positive("gravitational_constant", self.gravitational_constant)?;
        positive("min_distance", self.min_distance)?;
        positive("display.pixels_per_au", self.display.pixels_per_au)?;
        if self.trail_capacity == Some(0) {
            return Err(Error::InvalidParameter(
                "trail_capacity must be > 0 when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: Time::from_days(1.0).to_seconds(),
            gravitational_constant: G,
            min_distance: 1.0,
            trail_capacity: None,
            integrator: IntegratorKind::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Initial state of one body, in scene units (AU, km/s, kg)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBody {
    pub position_au: [f64; 2],
    #[serde(default)]
    pub velocity_km_s: [f64; 2],
    pub mass_kg: f64,
    pub radius: f64,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub star: bool,
}

impl ScenarioBody {
    pub fn to_spec(&self) -> BodySpec {
        let [x, y] = self.position_au;
        let [vx, vy] = self.velocity_km_s;
        let spec = BodySpec::at_au(x, y, self.radius, self.color, Mass::from_kg(self.mass_kg))
            .with_velocity(Velocity::from_km_per_sec(vx), Velocity::from_km_per_sec(vy));
        if self.star {
            spec.star()
        } else {
            spec
        }
    }
}

/// Top-level scenario: config plus the ordered list of initial bodies
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: SimulationConfig,
    pub bodies: Vec<ScenarioBody>,
}

impl Scenario {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn specs(&self) -> impl Iterator<Item = BodySpec> + '_ {
        self.bodies.iter().map(ScenarioBody::to_spec)
    }
}
