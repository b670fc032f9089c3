// File: crates/radar-core/src/geometry.rs
// Summary: Geometry kernel: points, vectors, degree/radian conversion and circle math in screen space.

use std::ops::{Add, Sub};

/// Point in chart-local screen coordinates (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (*self - other).length()
    }

    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

/// Displacement between two points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 2D cross product.
    pub fn cross(&self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl Sub for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width/height pair used for available canvas sizes and marker extents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// True when either side is non-positive or not finite; layout is skipped for such sizes.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }

    pub fn half(&self) -> Vector {
        Vector::new(self.width * 0.5, self.height * 0.5)
    }
}

#[inline]
pub fn radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Point at `angle_degrees` on a circle, measured counter-clockwise on screen (y inverted).
#[inline]
pub fn point_on_circle(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let rad = radians(angle_degrees);
    Point::new(center.x + radius * rad.cos(), center.y - radius * rad.sin())
}

/// Signed angle from `a` to `b` in degrees, normalized into `[0, 360)`.
pub fn vector_angle(a: Vector, b: Vector) -> f64 {
    let raw = a.cross(b).atan2(a.dot(b)).to_degrees();
    let angle = if raw < 0.0 { raw + 360.0 } else { raw };
    // -1e-15 + 360 rounds to 360.0
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Screen bearing of `v` in degrees: 0 points right, 90 points up.
pub fn bearing(v: Vector) -> f64 {
    vector_angle(v, Vector::new(1.0, 0.0))
}
