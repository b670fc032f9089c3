// File: crates/radar-core/tests/chart.rs
// Purpose: RadarChart end-to-end behaviour: relayout on change, manual markers, custom rings.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use radar_core::{ClampMode, Marker, RadarChart, RadarConfig, Rgba, Ring, ScanSettings, Size};

fn laid_out(config: RadarConfig) -> RadarChart {
    let mut chart = RadarChart::new(config);
    assert!(chart.resize(Size::square(300.0)));
    chart
}

#[test]
fn resize_produces_rings_spokes_and_radius() {
    let chart = laid_out(RadarConfig::default());
    assert!((chart.fill_width() - 200.0).abs() < 1e-9);
    assert!((chart.radius() - 100.0).abs() < 1e-9);
    assert_eq!(chart.rings().len(), 5);
    assert_eq!(chart.spokes().len(), 4);
    assert!(chart.spokes().iter().all(|s| (s.length() - 200.0).abs() < 1e-9));
}

#[test]
fn setters_trigger_a_relayout() {
    let mut chart = laid_out(RadarConfig::default());
    chart.set_ring_count(7);
    assert_eq!(chart.rings().len(), 7);
    chart.set_ring_count(0);
    assert_eq!(chart.rings().len(), 7, "zero ring count is ignored");

    chart.set_uniform_color(false);
    chart.set_palette(vec![Rgba::RED, Rgba::WHITE]);
    assert_eq!(chart.rings()[1].color, Rgba::WHITE);
    assert_eq!(chart.rings()[2].color, Rgba::ACCENT);

    chart.set_spoke_color(Rgba::RED);
    assert!(chart.spokes().iter().all(|s| s.color == Rgba::RED));
}

#[test]
fn custom_rings_replace_synthesized_ones() {
    let mut chart = laid_out(RadarConfig::default());
    chart.set_rings(vec![Ring::new(40.0, Rgba::RED), Ring::new(80.0, Rgba::RED).with_dash(vec![3.0])]);
    assert_eq!(chart.rings().len(), 5, "synthesized rings still shown");
    chart.set_use_synthesized_rings(false);
    let radii: Vec<f64> = chart.rings().iter().map(|r| r.radius).collect();
    assert_eq!(radii, vec![40.0, 80.0]);
    chart.resize(Size::square(900.0));
    assert_eq!(chart.rings().len(), 2, "resizing leaves caller rings alone");
}

#[test]
fn added_marker_outside_the_circle_is_clamped() {
    let mut chart = laid_out(RadarConfig::default());
    let idx = chart.add_marker(Marker::new(250.0, 100.0, 10.0, 10.0));
    let m = &chart.manual_markers()[idx];
    let tilt = 1.0f64.atan2(100.0);
    assert!((m.left - (200.0 + 100.0 * tilt.cos() - 105.0)).abs() < 1e-9);
    assert!((m.top - (95.0 - 100.0 * tilt.sin())).abs() < 1e-9);
    assert_eq!(chart.markers(), chart.manual_markers().to_vec());
}

#[test]
fn markers_added_before_layout_are_clamped_by_prepare() {
    let config = RadarConfig { clamp_mode: ClampMode::Centered, ..RadarConfig::default() };
    let mut chart = RadarChart::new(config);
    chart.add_marker(Marker::new(500.0, 95.0, 10.0, 10.0));
    chart.add_marker(Marker::new(95.0, 95.0, 10.0, 10.0));
    assert_eq!(chart.prepare_markers(), 0, "no layout yet");
    chart.resize(Size::square(300.0));
    assert_eq!(chart.prepare_markers(), 1);
    let moved = &chart.manual_markers()[0];
    assert!((moved.left - 195.0).abs() < 1e-9 && (moved.top - 95.0).abs() < 1e-9);
    assert_eq!(chart.prepare_markers(), 0, "centered clamp is stable");
}

#[test]
fn random_markers_end_up_inside_or_on_the_circle() {
    let config = RadarConfig { clamp_mode: ClampMode::Centered, ..RadarConfig::default() };
    let mut chart = laid_out(config);
    let mut rng = StdRng::seed_from_u64(11);
    let center = radar_core::Point::new(100.0, 100.0);
    for _ in 0..50 {
        let m = chart.add_random_marker(&mut rng, 15.0, Rgba::RED);
        assert_eq!(m.color, Rgba::RED);
        assert!(m.center().distance_to(center) <= 100.0 + 1e-9);
    }
    assert_eq!(chart.manual_markers().len(), 50);
    chart.clear_markers();
    assert!(chart.markers().is_empty());
}

#[test]
fn set_config_applies_auto_scan_flag() {
    let mut chart = laid_out(RadarConfig::default());
    let t0 = Instant::now();
    chart.set_config(RadarConfig { auto_scan: true, ring_count: 3, ..RadarConfig::default() }, t0);
    assert!(chart.is_scanning());
    assert_eq!(chart.rings().len(), 3);
    chart.set_config(RadarConfig::default(), t0);
    assert!(!chart.is_scanning());
}

#[test]
fn set_config_applies_new_scan_settings() {
    let mut chart = laid_out(RadarConfig::default());
    let t0 = Instant::now();
    let scan = ScanSettings { capacity: 2, interval_ms: 100, ..ScanSettings::default() }.with_seed(5);
    chart.set_config(RadarConfig { auto_scan: true, scan, ..RadarConfig::default() }, t0);
    assert_eq!(chart.config().scan.capacity, 2);
    assert_eq!(chart.next_scan_due(), Some(t0 + Duration::from_millis(100)));
    assert_eq!(chart.advance(t0 + Duration::from_millis(500)), 2, "burst capped at the new capacity");
    assert_eq!(chart.markers().len(), 2);
}

#[test]
fn set_config_restarts_a_running_scan_with_the_new_interval() {
    let config = RadarConfig { auto_scan: true, ..RadarConfig::default() };
    let mut chart = laid_out(config.clone());
    let t0 = Instant::now();
    chart.set_auto_scan(true, t0);

    let faster = ScanSettings { interval_ms: 100, ..ScanSettings::default() };
    chart.set_config(RadarConfig { scan: faster, ..config.clone() }, t0);
    assert!(chart.is_scanning());
    assert_eq!(chart.advance(t0 + Duration::from_millis(100)), 1);

    // scan settings unchanged: the running simulator and its markers stay
    chart.set_config(RadarConfig { spoke_color: Rgba::RED, ..chart.config().clone() }, t0);
    assert_eq!(chart.markers().len(), 1);
}

#[test]
fn degenerate_resize_keeps_size_and_random_extent() {
    let config = RadarConfig { clamp_mode: ClampMode::Centered, ..RadarConfig::default() };
    let mut chart = laid_out(config);
    assert!(!chart.resize(Size::new(0.0, 300.0)));
    assert_eq!(chart.size(), Size::square(300.0));

    let mut rng = StdRng::seed_from_u64(3);
    let spread = (0..20)
        .map(|_| chart.add_random_marker(&mut rng, 10.0, Rgba::RED).position())
        .filter(|p| p.x != 0.0 || p.y != 0.0)
        .count();
    assert_eq!(spread, 20, "markers are drawn from the last usable size");
}
