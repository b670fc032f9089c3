// File: crates/radar-core/src/marker.rs
// Summary: Marker model and the clamp policy that pulls markers back inside the chart circle.
// Notes:
// - A marker's position is its top-left corner, not its visual center. The default
//   `ClampMode::TopLeft` measures distance and bearing from that corner against the
//   reference vector `(r, 1)`, which tilts the bearing by `atan(1 / r)`; re-clamping a
//   marker that sits on the boundary may therefore nudge it again.
// - `ClampMode::Centered` measures from the visual center against `(1, 0)` and is a true
//   projection: idempotent and bearing-preserving.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::geometry::{point_on_circle, vector_angle, Point, Size, Vector};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClampMode {
    /// Top-left-relative clamp against the `(r, 1)` reference vector.
    #[default]
    TopLeft,
    /// Center-relative clamp against the `(1, 0)` reference vector.
    Centered,
}

/// One plotted dot. `left`/`top` locate the top-left corner in chart-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgba,
}

impl Marker {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height, color: Rgba::ACCENT }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        self.position() + self.size().half()
    }

    pub fn set_position(&mut self, p: Point) {
        self.left = p.x;
        self.top = p.y;
    }

    /// Clamp this marker in place; returns true when it moved.
    pub fn clamp_to(&mut self, chart_radius: f64, mode: ClampMode) -> bool {
        let before = self.position();
        let after = clamp(before, self.size(), chart_radius, mode);
        if after == before {
            return false;
        }
        self.set_position(after);
        true
    }
}

/// Clamp a marker position into the circle of `chart_radius` centered at `(r, r)`.
///
/// Markers already inside (distance `< r`) are returned unchanged. Outside or on the boundary,
/// the marker is moved so its visual center lands on the boundary along the computed bearing.
/// A non-positive or non-finite radius, or a non-finite position, leaves the position untouched.
pub fn clamp(position: Point, size: Size, chart_radius: f64, mode: ClampMode) -> Point {
    if !(chart_radius.is_finite() && chart_radius > 0.0) || !position.is_finite() {
        return position;
    }
    let center = Point::new(chart_radius, chart_radius);
    let half = size.half();
    let (anchor, reference) = match mode {
        ClampMode::TopLeft => (Vector::ZERO, Vector::new(chart_radius, 1.0)),
        ClampMode::Centered => (half, Vector::new(1.0, 0.0)),
    };
    let sub = (position + anchor) - center;
    if sub.length() < chart_radius {
        return position;
    }
    let angle = vector_angle(sub, reference);
    point_on_circle(center, chart_radius, angle) - half
}
