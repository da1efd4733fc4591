//! Collision resolution through inelastic mergers
//!
//! The surviving body keeps its position, trail and star flag, and takes on:
//! - Total mass
//! - Total momentum (mass-weighted velocity)
//! - A blended color and a radius of 0.7 times the two radii combined

use crate::body::{Body, BodyId};
use crate::collisions::CollisionEvent;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// Radius of a merger relative to the sum of the two radii
pub const MERGED_RADIUS_FACTOR: f64 = 0.7;

/// One merge performed during collision resolution
#[derive(Debug, Clone, PartialEq)]
pub struct MergeEvent {
    pub survivor: BodyId,
    pub absorbed: BodyId,
    /// Survivor's mass after the merge (kg)
    pub combined_mass: f64,
}

/// Fold `absorbed` into `absorber`, conserving mass and momentum
///
/// # Examples
///
/// ```
/// use nalgebra::Vector2;
/// use planetsim::collisions::merge_bodies;
/// use planetsim::{Body, BodyId, BodySpec, Color};
/// use units::Mass;
///
/// let spec = BodySpec::at_au(1.0, 0.0, 10.0, Color::WHITE, Mass::from_kg(1.0));
/// let mut a = Body::new(BodyId(0), spec.clone(), None).unwrap();
/// let mut b = Body::new(BodyId(1), spec, None).unwrap();
/// a.velocity = Vector2::new(0.0, 5.0);
/// b.velocity = Vector2::new(0.0, 3.0);
///
/// let p_initial = a.momentum() + b.momentum();
/// merge_bodies(&mut a, &b);
///
/// assert_eq!(a.mass, 2.0);
/// assert_eq!(a.momentum(), p_initial);
/// assert!((a.radius - 14.0).abs() < 1e-12);
/// ```
pub fn merge_bodies(absorber: &mut Body, absorbed: &Body) {
    let total_mass = absorber.mass + absorbed.mass;

    absorber.radius = (absorber.radius + absorbed.radius) * MERGED_RADIUS_FACTOR;
    absorber.color = absorber.color.blend(&absorbed.color);
    absorber.velocity = (absorber.momentum() + absorbed.momentum()) / total_mass;
    absorber.mass = total_mass;
}

/// Apply collision events to `bodies` and drop every absorbed body
///
/// Events are handled in the order given. Any event whose absorber or
/// absorbed body was already absorbed earlier in the pass is skipped, and
/// removals are deferred until all events are processed, so no body is
/// merged twice or skipped because the collection shifted underneath it.
///
/// # Returns
///
/// The merges that actually happened, in order.
pub fn resolve_collisions(bodies: &mut Vec<Body>, events: Vec<CollisionEvent>) -> Vec<MergeEvent> {
    let mut consumed: HashSet<BodyId> = HashSet::new();
    let mut merges = Vec::new();

    for event in events {
        if consumed.contains(&event.absorber) || consumed.contains(&event.absorbed) {
            continue;
        }

        let absorber_idx = bodies.iter().position(|b| b.id == event.absorber);
        let absorbed_idx = bodies.iter().position(|b| b.id == event.absorbed);

        if let (Some(i), Some(j)) = (absorber_idx, absorbed_idx) {
            let Some((absorber, absorbed)) = pair_mut(bodies, i, j) else {
                continue;
            };
            merge_bodies(absorber, absorbed);

            debug!(
                survivor = absorber.id.0,
                absorbed = absorbed.id.0,
                combined_mass = absorber.mass,
                "bodies merged"
            );
            merges.push(MergeEvent {
                survivor: absorber.id,
                absorbed: absorbed.id,
                combined_mass: absorber.mass,
            });
            consumed.insert(event.absorbed);
        }
    }

    if !consumed.is_empty() {
        bodies.retain(|b| !consumed.contains(&b.id));
    }
    merges
}

/// Mutable borrow of `bodies[i]` alongside a shared borrow of `bodies[j]`.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> Option<(&mut Body, &Body)> {
    match i.cmp(&j) {
        Ordering::Less => {
            let (left, right) = bodies.split_at_mut(j);
            Some((&mut left[i], &right[0]))
        }
        Ordering::Greater => {
            let (left, right) = bodies.split_at_mut(i);
            Some((&mut right[0], &left[j]))
        }
        Ordering::Equal => None,
    }
}
