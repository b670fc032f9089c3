// File: crates/radar-window-demo/src/main.rs
// Summary: Live radar window: renders radar-core through Skia into a winit window via softbuffer RGBA blit.
// Controls: left click drops a marker at the cursor, R adds a random red marker, Space toggles
//           auto-scan, C clears manual markers, Esc quits.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use radar_core::logging::{init_logging, LoggingConfig};
use radar_core::{Marker, RadarChart, RadarConfig, Rgba, Size};
use radar_render_skia::{render_to_rgba8, theme, RenderOptions};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const RANDOM_MARKER_SIDE: f64 = 15.0;

#[derive(Parser)]
#[command(author, version, about = "Interactive radar chart window")]
struct Args {
    /// Chart config (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "dark")]
    theme: String,
    /// Seed for the R key's random markers
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

struct App {
    chart: RadarChart,
    opts: RenderOptions,
    rng: StdRng,
    cursor: Option<(f64, f64)>,
    started: Instant,
}

impl App {
    /// Chart-local position of a window point.
    fn to_chart(&self, x: f64, y: f64) -> (f64, f64) {
        let size = self.chart.size();
        let fill = self.chart.fill_width();
        (x - (size.width - fill) / 2.0, y - (size.height - fill) / 2.0)
    }

    fn on_click(&mut self) {
        let Some((x, y)) = self.cursor else { return };
        let (cx, cy) = self.to_chart(x, y);
        let side = RANDOM_MARKER_SIDE;
        self.chart.add_marker(Marker::new(cx - side / 2.0, cy - side / 2.0, side, side).with_color(Rgba::RED));
    }

    fn on_key(&mut self, key: VirtualKeyCode, now: Instant) -> bool {
        match key {
            VirtualKeyCode::Escape => return false,
            VirtualKeyCode::Space => {
                let enable = !self.chart.is_scanning();
                self.chart.set_auto_scan(enable, now);
            }
            VirtualKeyCode::R => {
                let m = self.chart.add_random_marker(&mut self.rng, RANDOM_MARKER_SIDE, Rgba::RED);
                log::info!("random marker at ({:.1}, {:.1})", m.left, m.top);
            }
            VirtualKeyCode::C => self.chart.clear_markers(),
            _ => {}
        }
        true
    }

    fn frame(&mut self, now: Instant) -> Result<(Vec<u32>, u32, u32)> {
        // one revolution per full marker lifetime
        let period = self.chart.config().scan.interval().as_secs_f64() * self.chart.config().scan.capacity as f64;
        let elapsed = now.duration_since(self.started).as_secs_f64();
        self.opts.sweep_degrees = (elapsed / period.max(1e-3) * 360.0) % 360.0;

        let (rgba, w, h, _) = render_to_rgba8(&self.chart, &self.opts)?;
        let pixels = rgba
            .chunks_exact(4)
            .map(|px| (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]))
            .collect();
        Ok((pixels, w, h))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => RadarConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => RadarConfig::default(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Radar Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(640.0, 640.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut app = App {
        chart: RadarChart::new(config),
        opts: RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() },
        rng: StdRng::seed_from_u64(args.seed),
        cursor: None,
        started: Instant::now(),
    };
    let size = window.inner_size();
    app.chart.resize(Size::new(f64::from(size.width), f64::from(size.height)));

    event_loop.run(move |event, _, control_flow| {
        let now = Instant::now();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => control_flow.set_exit(),
                WindowEvent::Resized(new_size) => {
                    app.chart.resize(Size::new(f64::from(new_size.width), f64::from(new_size.height)));
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => app.cursor = Some((position.x, position.y)),
                WindowEvent::CursorLeft { .. } => app.cursor = None,
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    app.on_click();
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    if !app.on_key(key, now) {
                        control_flow.set_exit();
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if app.chart.advance(now) > 0 {
                    window.request_redraw();
                }
                if app.chart.is_scanning() {
                    // keep the sweep moving between ticks
                    window.request_redraw();
                    *control_flow = ControlFlow::Poll;
                } else {
                    *control_flow = ControlFlow::Wait;
                }
            }
            Event::RedrawRequested(_) => {
                let (pixels, w, h) = match app.frame(now) {
                    Ok(frame) => frame,
                    Err(e) => {
                        log::warn!("skipping frame: {e:#}");
                        return;
                    }
                };
                let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return };
                if let Err(e) = surface.resize(nw, nh) {
                    log::error!("surface resize: {e}");
                    return;
                }
                match surface.buffer_mut() {
                    Ok(mut buffer) => {
                        let n = buffer.len().min(pixels.len());
                        buffer[..n].copy_from_slice(&pixels[..n]);
                        if let Err(e) = buffer.present() {
                            log::error!("present error: {e}");
                        }
                    }
                    Err(e) => log::error!("frame buffer: {e}"),
                }
            }
            _ => {}
        }
    });
}
