//! Headless simulation driver
//!
//! Steps a scenario without drawing anything and logs mergers and a short
//! summary. Pass a YAML scenario path or one of the preset names.
//!
//! Run with: cargo run --package planetsim --example headless_run -- [scenario] [steps]

use std::fs::File;

use planetsim::{scenes, Scenario, Simulation};
use tracing::{error, info, Level};
use units::{Length, Time};

const DEFAULT_STEPS: usize = 3650;

fn load_scenario(arg: Option<&str>) -> planetsim::Result<Scenario> {
    match arg {
        None | Some("twin_suns") => Ok(scenes::twin_suns()),
        Some("black_hole_cluster") => Ok(scenes::black_hole_cluster()),
        Some("sun_and_earth") => Ok(scenes::sun_and_earth()),
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| planetsim::Error::Config(format!("{path}: {e}")))?;
            Scenario::from_yaml_reader(file)
        }
    }
}

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let steps = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_STEPS);

    let scenario = match load_scenario(args.first().map(String::as_str)) {
        Ok(scenario) => scenario,
        Err(err) => {
            error!(%err, "could not load scenario");
            std::process::exit(1);
        }
    };
    let mut sim = match Simulation::from_scenario(&scenario) {
        Ok(sim) => sim,
        Err(err) => {
            error!(%err, "invalid scenario");
            std::process::exit(1);
        }
    };

    info!(bodies = sim.body_count(), steps, "starting simulation");
    let initial_mass = sim.total_mass();

    for _ in 0..steps {
        let merges = match sim.try_step() {
            Ok(merges) => merges,
            Err(err) => {
                error!(%err, "simulation diverged");
                std::process::exit(1);
            }
        };
        for merge in merges {
            info!(
                day = Time::from_seconds(sim.time()).to_days(),
                survivor = merge.survivor.0,
                absorbed = merge.absorbed.0,
                "merger"
            );
        }
    }

    info!(
        years = Time::from_seconds(sim.time()).to_years(),
        bodies = sim.body_count(),
        mass_drift = (sim.total_mass() - initial_mass) / initial_mass,
        "finished"
    );
    for body in sim.bodies() {
        let nearest_star = body
            .distance_to_nearest_star
            .map(|d| format!("{:.3} AU", Length::from_meters(d).to_au()))
            .unwrap_or_else(|| "-".into());
        info!(
            id = body.id.0,
            x_au = Length::from_meters(body.position.x).to_au(),
            y_au = Length::from_meters(body.position.y).to_au(),
            speed_km_s = body.speed() / 1000.0,
            radius = body.radius,
            star = body.is_star,
            %nearest_star,
            "body"
        );
    }
}
