//! Collision detection and resolution
//!
//! Bodies collide when their drawn circles overlap in display space.
//! Colliding bodies merge inelastically, conserving mass and momentum.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod detection_test;
#[cfg(test)]
mod resolution_test;

pub use detection::{collides, CollisionDetector, CollisionEvent, DirectDetector};
pub use resolution::{merge_bodies, resolve_collisions, MergeEvent, MERGED_RADIUS_FACTOR};
