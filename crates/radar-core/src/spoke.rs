// File: crates/radar-core/src/spoke.rs
// Summary: Spoke layout engine: four diameters through the chart center, 45 degrees apart.

use crate::color::Rgba;
use crate::geometry::{bearing, point_on_circle, Point};

pub const SPOKE_COUNT: usize = 4;
pub const SPOKE_STEP_DEGREES: f64 = 180.0 / SPOKE_COUNT as f64;

/// One dividing line, in chart-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spoke {
    pub start: Point,
    pub end: Point,
    pub color: Rgba,
}

impl Spoke {
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Screen bearing of `start` seen from the spoke's midpoint, in `[0, 360)`.
    pub fn direction_degrees(&self) -> f64 {
        bearing(self.start - self.start.midpoint(self.end))
    }
}

/// Spokes for a chart of radius `chart_radius`, centered at `(chart_radius, chart_radius)`.
pub fn compute_spokes(chart_radius: f64, color: Rgba) -> [Spoke; SPOKE_COUNT] {
    let center = Point::new(chart_radius, chart_radius);
    std::array::from_fn(|i| {
        let base = SPOKE_STEP_DEGREES * i as f64;
        Spoke {
            start: point_on_circle(center, chart_radius, base),
            end: point_on_circle(center, chart_radius, base + 180.0),
            color,
        }
    })
}
