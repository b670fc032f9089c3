// File: crates/radar-core/src/layout.rs
// Summary: One layout pass: (config, available size) -> rings, spokes, chart radius and fill width.

use crate::config::RadarConfig;
use crate::geometry::Size;
use crate::ring::{compute_rings, Ring};
use crate::spoke::{compute_spokes, Spoke, SPOKE_COUNT};

/// The scanned square is the smaller canvas side divided by this factor.
pub const FILL_SCALE: f64 = 1.5;

/// Geometry produced by one layout pass. Replaced wholesale on every pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Synthesized rings; empty when the config asks for caller-supplied rings.
    pub rings: Vec<Ring>,
    pub spokes: [Spoke; SPOKE_COUNT],
    pub radius: f64,
    pub fill_width: f64,
}

pub fn fill_width_for(size: Size) -> f64 {
    size.min_side() / FILL_SCALE
}

/// Run a full layout pass, or `None` when `size` is degenerate.
pub fn layout(config: &RadarConfig, size: Size) -> Option<Layout> {
    if size.is_degenerate() {
        log::warn!("skipping radar layout for degenerate size {}x{}", size.width, size.height);
        return None;
    }
    let rings = if config.use_synthesized_rings { compute_rings(size, config) } else { Vec::new() };
    let fill_width = fill_width_for(size);
    let radius = fill_width / 2.0;
    let spokes = compute_spokes(radius, config.spoke_color);
    log::debug!(
        "radar layout {}x{}: {} rings, radius {:.2}, fill {:.2}",
        size.width,
        size.height,
        rings.len(),
        radius,
        fill_width
    );
    Some(Layout { rings, spokes, radius, fill_width })
}
