use nalgebra::{Point2, Vector2};

use crate::body::{Body, BodyId, BodySpec};
use crate::collisions::detection::*;
use crate::color::Color;
use crate::display::DisplayTransform;

fn make_body(id: u32, x: f64, y: f64, radius: f64) -> Body {
    let spec = BodySpec {
        position: Point2::new(x, y),
        velocity: Vector2::zeros(),
        mass: 1.0e24,
        radius,
        color: Color::WHITE,
        is_star: false,
    };
    Body::new(BodyId(id), spec, None).unwrap()
}

#[test]
fn test_touching_is_not_colliding() {
    let view = DisplayTransform::identity();
    let a = make_body(0, 0.0, 0.0, 500.0);
    let b = make_body(1, 1001.0, 0.0, 501.0);

    assert!(!collides(&a, &b, &view));
    assert!(!collides(&b, &a, &view));
}

#[test]
fn test_one_unit_closer_collides() {
    let view = DisplayTransform::identity();
    let a = make_body(0, 0.0, 0.0, 500.0);
    let b = make_body(1, 1000.0, 0.0, 501.0);

    assert!(collides(&a, &b, &view));
}

#[test]
fn test_collision_uses_display_space() {
    // 1 AU apart is 250 px in the default view, far more than the radii
    let view = DisplayTransform::default();
    let a = make_body(0, 0.0, 0.0, 15.0);
    let b = make_body(1, 1.496e11, 0.0, 8.0);
    assert!(!collides(&a, &b, &view));

    // 0.05 AU is 12.5 px, inside 15 + 8
    let c = make_body(2, 0.05 * 1.496e11, 0.0, 8.0);
    assert!(collides(&a, &c, &view));

    // The same pair is far apart in physical units
    assert!(!collides(&a, &c, &DisplayTransform::identity()));
}

#[test]
fn test_offset_does_not_change_result() {
    let a = make_body(0, 0.0, 0.0, 5.0);
    let b = make_body(1, 8.0, 0.0, 5.0);
    let shifted = DisplayTransform::new(1.0, Vector2::new(750.0, 400.0));

    assert!(collides(&a, &b, &DisplayTransform::identity()));
    assert!(collides(&a, &b, &shifted));
}

#[test]
fn test_direct_detector_no_bodies() {
    let events = DirectDetector.detect(&[], &DisplayTransform::identity());
    assert!(events.is_empty());
}

#[test]
fn test_direct_detector_reports_pair_once() {
    let bodies = vec![make_body(0, 0.0, 0.0, 10.0), make_body(1, 5.0, 0.0, 10.0)];
    let events = DirectDetector.detect(&bodies, &DisplayTransform::identity());

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].absorber, BodyId(0));
    assert_eq!(events[0].absorbed, BodyId(1));
    assert_eq!(events[0].separation, 5.0);
    assert_eq!(events[0].threshold, 20.0);
}

#[test]
fn test_direct_detector_orders_by_index() {
    // 0 touches 2, 1 touches 3, 2 touches 3
    let bodies = vec![
        make_body(0, 0.0, 0.0, 3.0),
        make_body(1, 100.0, 0.0, 3.0),
        make_body(2, 4.0, 0.0, 3.0),
        make_body(3, 8.0, 0.0, 3.0),
    ];
    let events = DirectDetector.detect(&bodies, &DisplayTransform::identity());
    let pairs: Vec<_> = events.iter().map(|e| (e.absorber.0, e.absorbed.0)).collect();

    assert_eq!(pairs, vec![(0, 2), (2, 3)]);
}

#[test]
fn test_lower_index_is_absorber_even_with_higher_id() {
    let bodies = vec![make_body(7, 0.0, 0.0, 10.0), make_body(2, 1.0, 0.0, 10.0)];
    let events = DirectDetector.detect(&bodies, &DisplayTransform::identity());

    assert_eq!(events[0].absorber, BodyId(7));
    assert_eq!(events[0].absorbed, BodyId(2));
}
