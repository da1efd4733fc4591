//! Display-space collision detection

use crate::body::{Body, BodyId};
use crate::display::DisplayTransform;

/// A detected overlap between two bodies
///
/// `absorber` always refers to the body that comes first in the
/// simulation's collection, so merges have a deterministic survivor.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    pub absorber: BodyId,
    pub absorbed: BodyId,
    /// Display-space distance between the two centres
    pub separation: f64,
    /// Sum of the two radii
    pub threshold: f64,
}

/// Whether two bodies overlap once drawn with `transform`.
///
/// The comparison is strict: circles that exactly touch do not collide.
///
/// # Examples
///
/// ```
/// use nalgebra::Point2;
/// use planetsim::collisions::collides;
/// use planetsim::{Body, BodyId, BodySpec, Color, DisplayTransform};
/// use units::Mass;
///
/// let a = BodySpec::at_au(0.0, 0.0, 500.0, Color::WHITE, Mass::from_kg(1.0));
/// let mut b = a.clone();
/// b.radius = 501.0;
/// b.position = Point2::new(1001.0, 0.0);
///
/// let view = DisplayTransform::identity();
/// let a = Body::new(BodyId(0), a, None).unwrap();
/// let b = Body::new(BodyId(1), b, None).unwrap();
/// assert!(!collides(&a, &b, &view));
/// ```
pub fn collides(a: &Body, b: &Body, transform: &DisplayTransform) -> bool {
    check_pair(a, b, transform).is_some()
}

fn check_pair(a: &Body, b: &Body, transform: &DisplayTransform) -> Option<CollisionEvent> {
    let separation = transform.display_distance(&a.position, &b.position);
    let threshold = a.radius + b.radius;

    (separation < threshold).then(|| CollisionEvent {
        absorber: a.id,
        absorbed: b.id,
        separation,
        threshold,
    })
}

/// Collision detector trait
pub trait CollisionDetector: Send + Sync {
    /// All overlapping pairs in `bodies`, in resolution order.
    fn detect(&self, bodies: &[Body], transform: &DisplayTransform) -> Vec<CollisionEvent>;
}

/// Direct O(N²) collision detector
///
/// Checks every unordered pair `(i, j)` with `i < j` against one snapshot of
/// the collection. Events come out ordered by `(i, j)`, so lower-index
/// bodies absorb first.
pub struct DirectDetector;

impl CollisionDetector for DirectDetector {
    fn detect(&self, bodies: &[Body], transform: &DisplayTransform) -> Vec<CollisionEvent> {
        let n = bodies.len();

        (0..n)
            .flat_map(|i| {
                ((i + 1)..n).filter_map(move |j| check_pair(&bodies[i], &bodies[j], transform))
            })
            .collect()
    }
}
