// File: crates/radar-demo/src/main.rs
// Summary: Demo lays out a radar, places CSV markers, then runs simulated auto-scan ticks and renders
//          each frame to PNG.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use radar_core::logging::{init_logging, LoggingConfig};
use radar_core::{RadarChart, RadarConfig, Size};
use radar_render_skia::{render_to_png, theme, RenderOptions};

mod markers;

#[derive(Parser)]
#[command(author, version, about = "Render radar charts and auto-scan frames to PNG")]
struct Args {
    /// Chart config (YAML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// CSV of markers: left,top,width,height[,color]
    #[arg(long)]
    markers: Option<PathBuf>,
    #[arg(long, default_value_t = 480.0)]
    width: f64,
    #[arg(long, default_value_t = 480.0)]
    height: f64,
    /// Simulated scan ticks; one frame is written per tick
    #[arg(long, default_value_t = 8)]
    ticks: u32,
    /// Overrides the scan seed from the config
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "target/radar_demo")]
    out_dir: PathBuf,
    #[arg(long, default_value = "light")]
    theme: String,
    /// env_logger filter, e.g. "debug" or "radar_core=trace"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let mut config = match &args.config {
        Some(path) => RadarConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => RadarConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.scan.seed = Some(seed);
    }
    // scanning starts on the simulated clock below
    config.auto_scan = false;
    let interval = config.scan.interval();

    let mut chart = RadarChart::new(config);
    if !chart.resize(Size::new(args.width, args.height)) {
        anyhow::bail!("canvas {}x{} is too small to lay out", args.width, args.height);
    }
    println!("Chart {}: radius {:.1}, {} rings", chart.id(), chart.radius(), chart.rings().len());

    if let Some(path) = &args.markers {
        let loaded = markers::load_markers_csv(path)
            .with_context(|| format!("failed to load markers '{}'", path.display()))?;
        let count = loaded.len();
        for marker in loaded {
            chart.add_marker(marker);
        }
        println!("Placed {count} markers from {}", path.display());
    }

    let mut opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    let out = args.out_dir.join("radar.png");
    render_to_png(&chart, &opts, &out)?;
    println!("Wrote {}", out.display());

    if args.ticks == 0 {
        return Ok(());
    }

    let t0 = Instant::now();
    chart.set_auto_scan(true, t0);
    let step = 360.0 / f64::from(args.ticks);
    for k in 1..=args.ticks {
        let now = t0 + interval * k;
        let fired = chart.advance(now);
        log::debug!("tick {k}: {fired} fired, {} live", chart.markers().len());
        opts.sweep_degrees = (step * f64::from(k)) % 360.0;
        let frame = args.out_dir.join(format!("scan_{k:03}.png"));
        render_to_png(&chart, &opts, &frame)?;
        println!("Wrote {} ({} markers)", frame.display(), chart.markers().len());
    }
    chart.set_auto_scan(false, t0 + interval * (args.ticks + 1));
    Ok(())
}
