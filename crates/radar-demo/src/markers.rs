// File: crates/radar-demo/src/markers.rs
// Summary: CSV marker loader. Columns: left, top, width, height and an optional #AARRGGBB color.

use std::path::Path;

use anyhow::{Context, Result};
use radar_core::{Marker, Rgba};

pub fn load_markers_csv(path: &Path) -> Result<Vec<Marker>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // header is line 1
        let line = row + 2;
        let num = |i: usize, name: &str| -> Result<f64> {
            let raw = rec.get(i).with_context(|| format!("line {line}: missing {name}"))?;
            raw.parse::<f64>().with_context(|| format!("line {line}: bad {name} {raw:?}"))
        };
        let mut marker = Marker::new(num(0, "left")?, num(1, "top")?, num(2, "width")?, num(3, "height")?);
        if let Some(raw) = rec.get(4).filter(|s| !s.is_empty()) {
            let color: Rgba = raw.parse().with_context(|| format!("line {line}: bad color"))?;
            marker = marker.with_color(color);
        }
        out.push(marker);
    }
    log::debug!("loaded {} markers from {}", out.len(), path.display());
    Ok(out)
}
