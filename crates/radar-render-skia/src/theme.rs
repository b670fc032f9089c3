// File: crates/radar-render-skia/src/theme.rs
// Summary: Canvas themes for radar rendering and the Rgba -> Skia color bridge.

use radar_core::Rgba;
use skia_safe as skia;

/// Colors the chart model does not carry itself. Rings, spokes and markers keep their own colors.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Sweep wedge color when the chart has no `radar_color`.
    pub sweep: skia::Color,
    pub marker_outline: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            sweep: skia::Color::from_argb(96, 64, 200, 120),
            marker_outline: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            sweep: skia::Color::from_argb(80, 32, 120, 200),
            marker_outline: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn phosphor() -> Self {
        // classic green scope
        Self {
            name: "phosphor",
            background: skia::Color::from_argb(255, 0x02, 0x14, 0x08),
            sweep: skia::Color::from_argb(110, 0x39, 0xff, 0x14),
            marker_outline: skia::Color::from_argb(255, 0xb8, 0xff, 0xa8),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            sweep: skia::Color::from_argb(140, 0x00, 0xff, 0xff),
            marker_outline: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::phosphor(), Theme::high_contrast_dark()]
}

/// Find a theme by `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    match presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)) {
        Some(theme) => theme,
        None => {
            log::warn!("unknown theme {name:?}, using light");
            Theme::light()
        }
    }
}

pub fn to_skia(color: Rgba) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}
