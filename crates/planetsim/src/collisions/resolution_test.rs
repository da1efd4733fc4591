use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::body::{Body, BodyId, BodySpec};
use crate::collisions::resolution::*;
use crate::collisions::{CollisionDetector, CollisionEvent, DirectDetector};
use crate::color::Color;
use crate::display::DisplayTransform;

fn make_body(id: u32, x: f64, mass: f64, velocity: Vector2<f64>, radius: f64) -> Body {
    let spec = BodySpec {
        position: Point2::new(x, 0.0),
        velocity,
        mass,
        radius,
        color: Color::WHITE,
        is_star: false,
    };
    Body::new(BodyId(id), spec, None).unwrap()
}

fn event(absorber: u32, absorbed: u32) -> CollisionEvent {
    CollisionEvent {
        absorber: BodyId(absorber),
        absorbed: BodyId(absorbed),
        separation: 0.0,
        threshold: 1.0,
    }
}

#[test]
fn test_merge_bodies_mass_conservation() {
    let mut a = make_body(0, 0.0, 1.0, Vector2::new(0.0, 5.0), 1.0);
    let b = make_body(1, 1.0, 2.0, Vector2::new(0.0, 3.0), 1.0);

    merge_bodies(&mut a, &b);

    assert_eq!(a.mass, 3.0);
}

#[test]
fn test_merge_bodies_momentum_conservation() {
    let mut a = make_body(0, 0.0, 1.0, Vector2::new(2.0, 5.0), 1.0);
    let b = make_body(1, 1.0, 3.0, Vector2::new(-1.0, 3.0), 1.0);

    let p_initial = a.momentum() + b.momentum();
    merge_bodies(&mut a, &b);

    assert_relative_eq!(a.momentum(), p_initial, epsilon = 1e-12);
    // Mass-weighted average velocity
    assert_relative_eq!(a.velocity.x, (2.0 - 3.0) / 4.0);
    assert_relative_eq!(a.velocity.y, (5.0 + 9.0) / 4.0);
}

#[test]
fn test_merge_bodies_radius_and_color() {
    let mut a = make_body(0, 0.0, 1.0, Vector2::zeros(), 15.0);
    let mut b = make_body(1, 1.0, 1.0, Vector2::zeros(), 8.0);
    a.color = Color::YELLOW;
    b.color = Color::DARK_BLUE;

    merge_bodies(&mut a, &b);

    assert_relative_eq!(a.radius, 23.0 * MERGED_RADIUS_FACTOR);
    assert_eq!(a.color, Color::rgb(127.5, 127.5, 127.5));
}

#[test]
fn test_merge_keeps_absorber_position_and_trail() {
    let mut a = make_body(0, 0.0, 1.0, Vector2::zeros(), 1.0);
    let b = make_body(1, 10.0, 1.0e6, Vector2::zeros(), 1.0);
    a.trail.push(Point2::new(-1.0, 0.0));
    a.is_star = true;

    merge_bodies(&mut a, &b);

    assert_eq!(a.position, Point2::new(0.0, 0.0));
    assert_eq!(a.trail.len(), 1);
    assert!(a.is_star);
    assert_eq!(a.id, BodyId(0));
}

#[test]
fn test_resolve_single_collision() {
    let mut bodies = vec![
        make_body(0, 0.0, 1.0e24, Vector2::zeros(), 500.0),
        make_body(1, 1000.0, 1.0e24, Vector2::zeros(), 501.0),
    ];
    let events = DirectDetector.detect(&bodies, &DisplayTransform::identity());

    let merges = resolve_collisions(&mut bodies, events);

    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].id, BodyId(0));
    assert_eq!(bodies[0].mass, 2.0e24);
    assert_eq!(bodies[0].velocity, Vector2::zeros());
    assert_eq!(
        merges,
        vec![MergeEvent {
            survivor: BodyId(0),
            absorbed: BodyId(1),
            combined_mass: 2.0e24,
        }]
    );
}

#[test]
fn test_resolve_no_events_leaves_bodies() {
    let mut bodies = vec![
        make_body(0, 0.0, 1.0, Vector2::zeros(), 1.0),
        make_body(1, 100.0, 1.0, Vector2::zeros(), 1.0),
    ];

    let merges = resolve_collisions(&mut bodies, Vec::new());

    assert!(merges.is_empty());
    assert_eq!(bodies.len(), 2);
}

#[test]
fn test_absorbed_body_is_excluded_from_later_events() {
    let mut bodies = vec![
        make_body(0, 0.0, 1.0, Vector2::zeros(), 1.0),
        make_body(1, 0.0, 2.0, Vector2::zeros(), 1.0),
        make_body(2, 0.0, 4.0, Vector2::zeros(), 1.0),
    ];

    // 1 is absorbed by 0, so 1 can no longer absorb 2
    let merges = resolve_collisions(&mut bodies, vec![event(0, 1), event(1, 2)]);

    assert_eq!(merges.len(), 1);
    let ids: Vec<_> = bodies.iter().map(|b| b.id.0).collect();
    assert_eq!(ids, vec![0, 2]);
    assert_eq!(bodies[0].mass, 3.0);
    assert_eq!(bodies[1].mass, 4.0);
}

#[test]
fn test_absorber_can_absorb_several_bodies() {
    let mut bodies = vec![
        make_body(0, 0.0, 1.0, Vector2::new(3.0, 0.0), 1.0),
        make_body(1, 0.0, 1.0, Vector2::new(-1.0, 0.0), 1.0),
        make_body(2, 0.0, 2.0, Vector2::new(0.0, 4.0), 1.0),
    ];
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
    let total_momentum = bodies
        .iter()
        .fold(Vector2::zeros(), |acc, b| acc + b.momentum());

    let merges = resolve_collisions(&mut bodies, vec![event(0, 1), event(0, 2), event(1, 2)]);

    assert_eq!(merges.len(), 2);
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].mass, total_mass);
    assert_relative_eq!(bodies[0].momentum(), total_momentum, epsilon = 1e-12);
}

#[test]
fn test_events_for_missing_bodies_are_ignored() {
    let mut bodies = vec![make_body(0, 0.0, 1.0, Vector2::zeros(), 1.0)];

    let merges = resolve_collisions(&mut bodies, vec![event(0, 9), event(0, 0)]);

    assert!(merges.is_empty());
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].mass, 1.0);
}

#[test]
fn test_total_mass_preserved_under_cascade() {
    let mut bodies: Vec<Body> = (0..6)
        .map(|i| make_body(i, i as f64 * 1.5, 1.0 + i as f64, Vector2::zeros(), 1.0))
        .collect();
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();

    let events = DirectDetector.detect(&bodies, &DisplayTransform::identity());
    let merges = resolve_collisions(&mut bodies, events);

    assert!(!merges.is_empty());
    assert_eq!(bodies.iter().map(|b| b.mass).sum::<f64>(), total_mass);
    assert_eq!(merges.len() + bodies.len(), 6);
}
