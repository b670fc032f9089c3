// File: crates/radar-core/src/lib.rs
// Summary: Core library entry point; radar layout engine, marker clamp policy and auto-scan simulator.

pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod marker;
pub mod ring;
pub mod scan;
pub mod shared;
pub mod spoke;

pub use chart::{ChartId, RadarChart};
pub use color::Rgba;
pub use config::{RadarConfig, ScanBinding, ScanSettings};
pub use error::{RadarError, Result};
pub use geometry::{point_on_circle, radians, vector_angle, Point, Size, Vector};
pub use layout::{layout, Layout};
pub use marker::{clamp, ClampMode, Marker};
pub use ring::{compute_rings, Ring};
pub use scan::{AutoScan, ScanBounds, ScanState, Ticker};
pub use shared::SharedScan;
pub use spoke::{compute_spokes, Spoke};
