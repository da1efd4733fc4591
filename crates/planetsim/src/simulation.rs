use nalgebra::{Point2, Vector2};
use tracing::{trace, warn};

use crate::body::{Body, BodyId, BodySpec};
use crate::collisions::{resolve_collisions, CollisionDetector, DirectDetector, MergeEvent};
use crate::config::{Scenario, SimulationConfig};
use crate::display::DisplayTransform;
use crate::error::{Error, Result};
use crate::forces::{DirectGravity, ForceModel};

/// Complete state of a running simulation
///
/// Owns every body. Bodies are added during scene setup and only ever
/// removed afterwards, when a merge absorbs them.
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    config: SimulationConfig,
    gravity: DirectGravity,
    display: DisplayTransform,
    /// Simulated seconds elapsed
    time: f64,
    steps: u64,
    next_id: u32,
}

impl Simulation {
    /// Creates an empty simulation
    ///
    /// # Examples
    ///
    /// ```
    /// use planetsim::{Simulation, SimulationConfig};
    ///
    /// let sim = Simulation::new(SimulationConfig::default()).unwrap();
    /// assert!(sim.is_empty());
    /// assert_eq!(sim.time(), 0.0);
    /// ```
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bodies: Vec::new(),
            gravity: DirectGravity::new(config.gravitational_constant, config.min_distance),
            display: config.display.transform(),
            config,
            time: 0.0,
            steps: 0,
            next_id: 0,
        })
    }

    /// Builds a simulation with every scenario body added in order
    pub fn from_scenario(scenario: &Scenario) -> Result<Self> {
        let mut sim = Self::new(scenario.config.clone())?;
        for spec in scenario.specs() {
            sim.add_body(spec)?;
        }
        Ok(sim)
    }

    /// Overrides the display transform derived from the config
    pub fn with_display_transform(mut self, display: DisplayTransform) -> Self {
        self.display = display;
        self
    }

    /// Adds a body and returns its ID
    ///
    /// IDs follow insertion order and are never reused, so a lower ID
    /// always means an earlier position in the collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use planetsim::{BodySpec, Color, Simulation, SimulationConfig};
    /// use units::Mass;
    ///
    /// let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
    /// let sun = BodySpec::at_au(0.0, 0.0, 15.0, Color::YELLOW, Mass::from_solar_masses(1.0)).star();
    /// let id = sim.add_body(sun).unwrap();
    ///
    /// assert_eq!(id.0, 0);
    /// assert_eq!(sim.body_count(), 1);
    /// ```
    pub fn add_body(&mut self, spec: BodySpec) -> Result<BodyId> {
        let id = BodyId(self.next_id);
        let body = Body::new(id, spec, self.config.trail_capacity)?;
        self.next_id += 1;
        self.bodies.push(body);
        Ok(id)
    }

    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.bodies
            .iter()
            .position(|b| b.id == id)
            .map(|idx| self.bodies.remove(idx))
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Like [`Simulation::body`], for callers that hold an ID they expect to be live
    pub fn expect_body(&self, id: BodyId) -> Result<&Body> {
        self.body(id).ok_or(Error::UnknownBody(id))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn display_transform(&self) -> &DisplayTransform {
        &self.display
    }

    /// Simulated seconds since the start
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advances the simulation by one fixed timestep
    ///
    /// Forces for every body are computed from the start-of-step positions,
    /// then every body is integrated, then overlapping bodies are merged.
    /// Collisions are checked only after the move, so bodies that overlap at
    /// the start can fly apart within one step and never merge.
    pub fn step(&mut self) {
        self.advance();
    }

    /// Steps once and fails if any body ended up with NaN or infinite state
    ///
    /// On success returns the merges the step performed.
    pub fn try_step(&mut self) -> Result<Vec<MergeEvent>> {
        let merges = self.advance();
        if let Err(err) = self.check_finite() {
            warn!(step = self.steps, %err, "simulation state is no longer finite");
            return Err(err);
        }
        Ok(merges)
    }

    fn advance(&mut self) -> Vec<MergeEvent> {
        self.accumulate_forces();
        self.integrate();
        let merges = self.resolve_collisions();

        self.time += self.config.timestep;
        self.steps += 1;
        trace!(
            step = self.steps,
            time = self.time,
            bodies = self.bodies.len(),
            "step complete"
        );
        merges
    }

    pub fn run(&mut self, n_steps: usize) {
        for _ in 0..n_steps {
            self.step();
        }
    }

    /// Recomputes every body's net force and nearest-star distance
    ///
    /// Positions are not touched, so every body sees the others where they
    /// started the step.
    pub fn accumulate_forces(&mut self) {
        for i in 0..self.bodies.len() {
            let (before, rest) = self.bodies.split_at_mut(i);
            if let Some((body, after)) = rest.split_first_mut() {
                body.accumulate_force(before.iter().chain(after.iter()), &self.gravity);
            }
        }
    }

    /// Moves every body using the net forces from the last force pass
    pub fn integrate(&mut self) {
        self.config
            .integrator
            .integrator()
            .advance(&mut self.bodies, self.config.timestep);
    }

    /// Merges overlapping bodies and removes the absorbed ones
    pub fn resolve_collisions(&mut self) -> Vec<MergeEvent> {
        let events = DirectDetector.detect(&self.bodies, &self.display);
        if events.is_empty() {
            return Vec::new();
        }
        resolve_collisions(&mut self.bodies, events)
    }

    pub fn check_finite(&self) -> Result<()> {
        match self.bodies.iter().find(|b| !b.is_finite()) {
            Some(body) => {
                let what = if body.position.coords.iter().all(|c| c.is_finite()) {
                    "velocity"
                } else {
                    "position"
                };
                Err(Error::NonFinite { id: body.id, what })
            }
            None => Ok(()),
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        self.gravity.potential_energy(&self.bodies)
    }

    /// Mass-weighted mean position, `None` for an empty simulation
    pub fn center_of_mass(&self) -> Option<Point2<f64>> {
        let total = self.total_mass();
        if self.bodies.is_empty() || total <= 0.0 {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position.coords * b.mass)
            .fold(Vector2::zeros(), |acc, p| acc + p);
        Some(Point2::from(weighted / total))
    }
}
