//! Newtonian gravity for a handful of stars and planets.
//!
//! A [`Simulation`] owns its bodies and advances them one fixed timestep per
//! [`Simulation::step`]: forces from every pair, semi-implicit Euler
//! integration, then display-space collision checks that merge overlapping
//! bodies. Drawing, input and frame pacing are left to the caller, which
//! reads positions, radii, colors and trails back after each step.
//!
//! # Examples
//!
//! ```
//! use planetsim::{scenes, Simulation};
//!
//! let mut sim = Simulation::from_scenario(&scenes::sun_and_earth()).unwrap();
//! sim.step();
//!
//! let view = *sim.display_transform();
//! for body in sim.bodies() {
//!     let _pixel = body.display_position(&view);
//!     assert_eq!(body.trail.len(), 1);
//! }
//! ```

pub mod body;
pub mod collisions;
pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod scenes;
pub mod simulation;
pub mod trail;


pub use body::{Body, BodyId, BodySpec};
pub use color::Color;
pub use config::{DisplayConfig, Scenario, ScenarioBody, SimulationConfig};
pub use display::DisplayTransform;
pub use error::{Error, Result};
pub use simulation::Simulation;
