// File: crates/radar-render-skia/src/render.rs
// Summary: Headless radar rendering on Skia CPU raster surfaces (PNG file, PNG bytes, RGBA8 buffer).
// Notes:
// - Ring radii are bounding-box sides, so each ring is drawn with half its radius around
//   the canvas center. Spokes and markers are chart-local and are shifted onto the centered
//   fill square.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use radar_core::{Marker, RadarChart, Ring, Spoke};
use skia_safe as skia;

use crate::theme::{to_skia, Theme};

pub struct RenderOptions {
    pub theme: Theme,
    /// Draw the sweep wedge while the chart is scanning.
    pub draw_sweep: bool,
    /// Leading edge of the sweep, counter-clockwise from 3 o'clock.
    pub sweep_degrees: f64,
    pub sweep_span_degrees: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_sweep: true, sweep_degrees: 0.0, sweep_span_degrees: 30.0 }
    }
}

/// Render `chart` to a PNG at `output_png_path`, creating parent directories as needed.
pub fn render_to_png(chart: &RadarChart, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn render_to_png_bytes(chart: &RadarChart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = rasterize(chart, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, stride)`.
pub fn render_to_rgba8(chart: &RadarChart, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = rasterize(chart, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        bail!("reading back {w}x{h} pixels failed");
    }
    Ok((pixels, w as u32, h as u32, stride))
}

fn rasterize(chart: &RadarChart, opts: &RenderOptions) -> Result<skia::Surface> {
    let layout = chart
        .layout()
        .ok_or_else(|| anyhow!("chart {} has no layout; resize it to a non-empty size first", chart.id()))?;
    let size = chart.size();
    let (w, h) = (size.width.round().max(1.0) as i32, size.height.round().max(1.0) as i32);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);

    let center = ((size.width / 2.0) as f32, (size.height / 2.0) as f32);
    let origin = (
        ((size.width - layout.fill_width) / 2.0) as f32,
        ((size.height - layout.fill_width) / 2.0) as f32,
    );

    for ring in chart.rings() {
        draw_ring(canvas, center, ring);
    }
    if opts.draw_sweep && chart.is_scanning() {
        let color = chart.config().radar_color.map(to_skia).unwrap_or(opts.theme.sweep);
        draw_sweep(canvas, center, chart.radius() as f32, opts, color);
    }
    for spoke in chart.spokes() {
        draw_spoke(canvas, origin, spoke);
    }
    let markers = chart.markers();
    for marker in &markers {
        draw_marker(canvas, origin, marker, opts.theme.marker_outline);
    }
    log::debug!(
        "rendered chart {} at {w}x{h}: {} rings, {} markers",
        chart.id(),
        chart.rings().len(),
        markers.len()
    );
    Ok(surface)
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

/// Dash lengths are in stroke widths; an odd-length pattern repeats to pair on/off segments.
fn dash_intervals(dash: &[f64], stroke_width: f32) -> Vec<f32> {
    let width = stroke_width.max(1.0);
    let mut intervals: Vec<f32> = dash.iter().map(|d| (*d as f32 * width).max(0.5)).collect();
    if intervals.len() % 2 == 1 {
        intervals.extend_from_within(..);
    }
    intervals
}

fn draw_ring(canvas: &skia::Canvas, center: (f32, f32), ring: &Ring) {
    let width = ring.stroke_thickness as f32;
    let mut paint = stroke_paint(to_skia(ring.color), width);
    if !ring.is_solid() {
        paint.set_path_effect(skia::PathEffect::dash(&dash_intervals(&ring.dash, width), 0.0));
    }
    canvas.draw_circle(center, (ring.radius / 2.0) as f32, &paint);
}

fn draw_sweep(canvas: &skia::Canvas, center: (f32, f32), radius: f32, opts: &RenderOptions, color: skia::Color) {
    if radius <= 0.0 {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    let oval = skia::Rect::from_ltrb(center.0 - radius, center.1 - radius, center.0 + radius, center.1 + radius);
    // Skia angles run clockwise on screen; the trailing wedge sits clockwise of the leading edge.
    let start = -(opts.sweep_degrees as f32);
    canvas.draw_arc(oval, start, opts.sweep_span_degrees as f32, true, &paint);
}

fn draw_spoke(canvas: &skia::Canvas, origin: (f32, f32), spoke: &Spoke) {
    let paint = stroke_paint(to_skia(spoke.color), 1.0);
    let a = (origin.0 + spoke.start.x as f32, origin.1 + spoke.start.y as f32);
    let b = (origin.0 + spoke.end.x as f32, origin.1 + spoke.end.y as f32);
    canvas.draw_line(a, b, &paint);
}

fn draw_marker(canvas: &skia::Canvas, origin: (f32, f32), marker: &Marker, outline: skia::Color) {
    let left = origin.0 + marker.left as f32;
    let top = origin.1 + marker.top as f32;
    let rect = skia::Rect::from_xywh(left, top, marker.width as f32, marker.height as f32);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(to_skia(marker.color));
    canvas.draw_oval(rect, &fill);
    canvas.draw_oval(rect, &stroke_paint(outline.with_a(160), 1.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_dash_patterns_repeat() {
        assert_eq!(dash_intervals(&[7.0], 1.0), vec![7.0, 7.0]);
        assert_eq!(dash_intervals(&[4.0, 2.0], 2.0), vec![8.0, 4.0]);
    }

    #[test]
    fn unlaid_chart_is_an_error() {
        let chart = RadarChart::new(radar_core::RadarConfig::default());
        assert!(render_to_png_bytes(&chart, &RenderOptions::default()).is_err());
    }
}
