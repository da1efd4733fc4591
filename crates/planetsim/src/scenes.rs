//! Built-in scenarios
//!
//! Positions are in AU, velocities in km/s, masses in kg. All presets use
//! the default config: one-day steps and a 1500x800 view at 250 px per AU.

use units::{circular_orbital_velocity, Length, Mass, EARTH_MASS_KG, SOLAR_MASS_KG};

use crate::color::Color;
use crate::config::{Scenario, ScenarioBody, SimulationConfig};
use crate::forces::G;

const MERCURY_MASS_KG: f64 = 3.30e23;

fn body(position_au: [f64; 2], radius: f64, color: Color, mass_kg: f64) -> ScenarioBody {
    ScenarioBody {
        position_au,
        velocity_km_s: [0.0, 0.0],
        mass_kg,
        radius,
        color,
        star: false,
    }
}

fn moving(mut body: ScenarioBody, velocity_km_s: [f64; 2]) -> ScenarioBody {
    body.velocity_km_s = velocity_km_s;
    body
}

fn star(mut body: ScenarioBody) -> ScenarioBody {
    body.star = true;
    body
}

/// Two resting suns with four Mercury-sized and two (light) Earth-sized
/// planets thrown between them.
///
/// # Examples
///
/// ```
/// use planetsim::{scenes, Simulation};
///
/// let mut sim = Simulation::from_scenario(&scenes::twin_suns()).unwrap();
/// assert_eq!(sim.body_count(), 8);
///
/// sim.run(10);
/// assert!(sim.body_count() <= 8);
/// ```
pub fn twin_suns() -> Scenario {
    let light_earth = EARTH_MASS_KG / 10.0;

    Scenario {
        config: SimulationConfig::default(),
        bodies: vec![
            star(body([-1.5, 0.0], 15.0, Color::YELLOW, SOLAR_MASS_KG)),
            star(body([0.0, 0.0], 15.0, Color::ORANGE, SOLAR_MASS_KG)),
            moving(
                body([0.387, 0.0], 4.0, Color::DARK_GREY, MERCURY_MASS_KG),
                [0.0, -60.0],
            ),
            moving(
                body([-1.2, 0.0], 4.0, Color::WHITE, MERCURY_MASS_KG),
                [0.0, 40.0],
            ),
            moving(
                body([1.0, 1.0], 4.0, Color::DARK_BLUE, MERCURY_MASS_KG),
                [0.0, -10.0],
            ),
            moving(
                body([0.0, 1.5], 4.0, Color::GREEN, MERCURY_MASS_KG),
                [30.0, 0.0],
            ),
            moving(
                body([1.7, 0.0], 8.0, Color::DARK_BLUE, light_earth),
                [0.0, -16.0],
            ),
            moving(
                body([1.5, 0.0], 8.0, Color::GREEN, light_earth),
                [0.0, -16.0],
            ),
        ],
    }
}

/// A central star of 100 solar masses with five suns streaming past it.
pub fn black_hole_cluster() -> Scenario {
    let mut bodies = vec![star(body(
        [0.0, 0.0],
        4.0,
        Color::WHITE,
        Mass::from_solar_masses(100.0).to_kg(),
    ))];
    bodies.extend([0.0, 0.2, 0.4, 0.5, 0.6].iter().map(|&y| {
        moving(
            star(body([-1.5, y], 2.0, Color::WHITE, SOLAR_MASS_KG)),
            [16.0, 0.0],
        )
    }));

    Scenario {
        config: SimulationConfig::default(),
        bodies,
    }
}

/// One sun and one Earth on a circular orbit at 1 AU.
pub fn sun_and_earth() -> Scenario {
    let v = circular_orbital_velocity(G, Mass::from_kg(SOLAR_MASS_KG), Length::from_au(1.0));

    Scenario {
        config: SimulationConfig::default(),
        bodies: vec![
            star(body([0.0, 0.0], 15.0, Color::YELLOW, SOLAR_MASS_KG)),
            moving(
                body([1.0, 0.0], 8.0, Color::BLUE, EARTH_MASS_KG),
                [0.0, v.to_km_per_sec()],
            ),
        ],
    }
}
