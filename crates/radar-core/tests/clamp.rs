// File: crates/radar-core/tests/clamp.rs
// Purpose: Marker clamp policy: fixed points inside, boundary placement and bearing outside.

use radar_core::geometry::bearing;
use radar_core::{clamp, point_on_circle, ClampMode, Point, Size};

const R: f64 = 100.0;
const EPS: f64 = 1e-9;

fn center() -> Point {
    Point::new(R, R)
}

fn angle_diff(a: f64, b: f64) -> f64 {
    ((a - b + 540.0).rem_euclid(360.0) - 180.0).abs()
}

#[test]
fn points_inside_are_fixed_in_both_modes() {
    let size = Size::square(10.0);
    for mode in [ClampMode::TopLeft, ClampMode::Centered] {
        for deg in (0..360).step_by(15) {
            let p = point_on_circle(center(), R * 0.6, deg as f64) - size.half();
            assert_eq!(clamp(p, size, R, mode), p);
            let once = clamp(p, size, R, mode);
            assert_eq!(clamp(once, size, R, mode), once);
        }
    }
}

#[test]
fn centered_clamp_lands_on_the_circle_at_the_same_bearing() {
    for size in [Size::square(0.0), Size::square(10.0), Size::new(24.0, 6.0)] {
        for deg in (0..360).step_by(10) {
            for d in [R, 1.5 * R, 40.0 * R] {
                let target = point_on_circle(center(), d, deg as f64);
                let clamped = clamp(target - size.half(), size, R, ClampMode::Centered);
                let c = clamped + size.half();
                assert!((c.distance_to(center()) - R).abs() < EPS, "deg={deg} d={d}");
                assert!(angle_diff(bearing(c - center()), deg as f64) < 1e-7, "deg={deg} d={d}");
            }
        }
    }
}

#[test]
fn centered_clamp_is_idempotent() {
    let size = Size::square(10.0);
    for deg in (0..360).step_by(7) {
        let p = point_on_circle(center(), 3.0 * R, deg as f64);
        let once = clamp(p, size, R, ClampMode::Centered);
        let twice = clamp(once, size, R, ClampMode::Centered);
        assert!(once.distance_to(twice) < EPS, "deg={deg}");
    }
}

#[test]
fn top_left_clamp_tilts_bearing_by_reference_vector() {
    let tilt = 1.0f64.atan2(R).to_degrees();
    let size = Size::square(10.0);
    for deg in (0..360).step_by(20) {
        let corner = point_on_circle(center(), 2.0 * R, deg as f64);
        let clamped = clamp(corner, size, R, ClampMode::TopLeft);
        let edge = clamped + size.half();
        assert!((edge.distance_to(center()) - R).abs() < EPS);
        assert!(angle_diff(bearing(edge - center()), deg as f64 + tilt) < 1e-7, "deg={deg}");
    }
}

#[test]
fn end_to_end_marker_right_of_a_100_radius_chart() {
    let size = Size::square(10.0);
    let tilt = 1.0f64.atan2(R);
    let top_left = clamp(Point::new(250.0, 100.0), size, R, ClampMode::TopLeft);
    assert!((top_left.x - (R + R * tilt.cos() - 5.0)).abs() < EPS);
    assert!((top_left.y - (R - R * tilt.sin() - 5.0)).abs() < EPS);
    // within one unit of the nominal (200 - w/2, 100 - h/2)
    assert!((top_left.x - 195.0).abs() < 1.0 && (top_left.y - 95.0).abs() < 1.0);

    let centered = clamp(Point::new(245.0, 95.0), size, R, ClampMode::Centered);
    assert!((centered.x - 195.0).abs() < EPS && (centered.y - 95.0).abs() < EPS);
}

#[test]
fn boundary_distance_counts_as_outside() {
    // exactly on the circle, bearing 0 in centered mode maps onto itself
    let size = Size::square(10.0);
    let p = Point::new(2.0 * R, R) - size.half();
    let clamped = clamp(p, size, R, ClampMode::Centered);
    assert!(clamped.distance_to(p) < EPS);
}
