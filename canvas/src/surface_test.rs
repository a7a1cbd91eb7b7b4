#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn surface() -> Surface {
    Surface::new(600.0, 600.0)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Surface basics ---

#[test]
fn surface_new_has_zero_origin() {
    let s = surface();
    assert_eq!(s.origin, Point::new(0.0, 0.0));
}

#[test]
fn surface_center_is_half_extent() {
    let s = Surface::new(600.0, 400.0);
    assert_eq!(s.center(), Point::new(300.0, 200.0));
}

#[test]
fn client_to_local_subtracts_origin() {
    let mut s = surface();
    s.origin = Point::new(120.0, 45.5);
    let local = s.client_to_local(Point::new(220.0, 145.5));
    assert!(point_approx_eq(local, Point::new(100.0, 100.0)));
}

#[test]
fn client_to_local_with_zero_origin_is_identity() {
    let s = surface();
    assert_eq!(s.client_to_local(Point::new(100.0, 100.0)), Point::new(100.0, 100.0));
}

// --- Rotation mapping ---

#[test]
fn rotate_about_zero_angle_is_identity() {
    let p = Point::new(10.0, -4.0);
    assert!(point_approx_eq(rotate_about(p, Point::new(3.0, 3.0), 0.0), p));
}

#[test]
fn rotate_about_quarter_turn() {
    // Screen-space y points down, so +π/2 maps +x onto +y.
    let r = rotate_about(Point::new(1.0, 0.0), Point::new(0.0, 0.0), FRAC_PI_2);
    assert!(point_approx_eq(r, Point::new(0.0, 1.0)));
}

#[test]
fn derotate_center_is_fixed() {
    let s = surface();
    for angle in [0.0, 0.3, PI, 5.9] {
        assert!(point_approx_eq(s.derotate(s.center(), angle), s.center()));
    }
}

#[test]
fn derotate_half_turn_mirrors_through_center() {
    let s = surface();
    let r = s.derotate(Point::new(100.0, 200.0), PI);
    assert!(point_approx_eq(r, Point::new(500.0, 400.0)));
}

#[test]
fn derotate_matches_explicit_formula() {
    let s = surface();
    let theta = 1.234_f64;
    let (x, y) = (420.0, 77.0);
    let (cx, cy) = (300.0, 300.0);
    let expected = Point::new(
        (-theta).cos() * (x - cx) - (-theta).sin() * (y - cy) + cx,
        (-theta).sin() * (x - cx) + (-theta).cos() * (y - cy) + cy,
    );
    assert!(point_approx_eq(s.derotate(Point::new(x, y), theta), expected));
}

#[test]
fn derotate_inverts_forward_rotation_for_many_angles() {
    let s = surface();
    let samples = [Point::new(0.0, 0.0), Point::new(100.0, 100.0), Point::new(599.0, 12.5), Point::new(-40.0, 700.0)];
    for step in 0..64 {
        let theta = f64::from(step) * TAU / 64.0;
        for p in samples {
            let forward = rotate_about(p, s.center(), theta);
            assert!(point_approx_eq(s.derotate(forward, theta), p), "theta={theta} p={p:?}");
        }
    }
}

#[test]
fn derotate_preserves_distance_from_center() {
    let s = surface();
    let p = Point::new(450.0, 120.0);
    let c = s.center();
    let before = (p.x - c.x).hypot(p.y - c.y);
    let r = s.derotate(p, 2.2);
    let after = (r.x - c.x).hypot(r.y - c.y);
    assert!(approx_eq(before, after));
}
