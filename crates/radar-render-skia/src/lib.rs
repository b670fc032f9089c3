// File: crates/radar-render-skia/src/lib.rs
// Summary: Skia renderer crate; CPU raster surfaces for radar charts.

pub mod render;
pub mod theme;

pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use theme::Theme;
