// File: crates/radar-core/src/chart.rs
// Summary: RadarChart surface: owns config, size and markers; reruns layout on every change and
//          drives the auto-scan simulator.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use rand::Rng;

use crate::color::Rgba;
use crate::config::{RadarConfig, ScanBinding, ScanSettings};
use crate::geometry::Size;
use crate::layout::{layout, Layout};
use crate::marker::Marker;
use crate::ring::Ring;
use crate::scan::{AutoScan, ScanBounds};
use crate::shared::SharedScan;
use crate::spoke::Spoke;

static NEXT_CHART_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChartId(u64);

impl ChartId {
    fn next() -> Self {
        ChartId(NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

enum ScanDriver {
    Local(AutoScan),
    Shared(SharedScan),
}

pub struct RadarChart {
    id: ChartId,
    config: RadarConfig,
    size: Size,
    layout: Option<Layout>,
    custom_rings: Vec<Ring>,
    markers: Vec<Marker>,
    scan: ScanDriver,
}

impl RadarChart {
    /// Chart with its own simulator. A config asking for `ScanBinding::Shared` falls back to a
    /// per-chart simulator here; use [`RadarChart::with_scan_hub`] to share one.
    pub fn new(config: RadarConfig) -> Self {
        if config.scan.binding == ScanBinding::Shared {
            log::warn!("shared scan binding requested without a hub; using a per-chart simulator");
        }
        let scan = ScanDriver::Local(AutoScan::new(config.scan.clone()));
        Self::with_driver(config, scan)
    }

    /// Chart that joins `hub` when the config asks for `ScanBinding::Shared`.
    pub fn with_scan_hub(config: RadarConfig, hub: &SharedScan) -> Self {
        let scan = match config.scan.binding {
            ScanBinding::Shared => ScanDriver::Shared(hub.clone()),
            ScanBinding::PerChart => ScanDriver::Local(AutoScan::new(config.scan.clone())),
        };
        Self::with_driver(config, scan)
    }

    fn with_driver(config: RadarConfig, scan: ScanDriver) -> Self {
        let auto_scan = config.auto_scan;
        let mut chart = Self {
            id: ChartId::next(),
            config,
            size: Size::default(),
            layout: None,
            custom_rings: Vec::new(),
            markers: Vec::new(),
            scan,
        };
        if auto_scan {
            chart.set_auto_scan(true, Instant::now());
        }
        chart
    }

    pub fn id(&self) -> ChartId {
        self.id
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Latest successful layout; `None` until the chart has had a usable size.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    // ---- configuration ------------------------------------------------------

    /// Replace the whole configuration, relayout, and apply any auto-scan change at `now`.
    ///
    /// A change to the scan settings rebuilds a per-chart simulator (dropping its markers) and
    /// restarts it when auto-scan stays on. A shared hub keeps its own settings. Only a change of
    /// the `auto_scan` flag itself toggles scanning, so a chart displaced from a shared hub does
    /// not take it back on an unrelated update.
    pub fn set_config(&mut self, config: RadarConfig, now: Instant) {
        let was_enabled = self.config.auto_scan;
        let rebuilt = config.scan != self.config.scan && self.rebuild_scan(&config.scan);
        let enabled = config.auto_scan;
        self.config = config;
        self.relayout();
        if (rebuilt && enabled) || enabled != was_enabled {
            self.set_auto_scan(enabled, now);
        }
    }

    /// Swap the scan driver for `settings`. Returns false when the current driver stays.
    fn rebuild_scan(&mut self, settings: &ScanSettings) -> bool {
        match &self.scan {
            ScanDriver::Shared(_) if settings.binding == ScanBinding::Shared => {
                log::debug!("chart {} keeps the shared scan hub's own settings", self.id);
                return false;
            }
            ScanDriver::Shared(hub) => {
                hub.release(self.id);
            }
            ScanDriver::Local(_) if settings.binding == ScanBinding::Shared => {
                log::warn!("chart {} has no shared scan hub; using a per-chart simulator", self.id);
            }
            ScanDriver::Local(_) => {}
        }
        // the old simulator and its markers go with it
        self.scan = ScanDriver::Local(AutoScan::new(settings.clone()));
        log::debug!("chart {} scan rebuilt, interval {:?}", self.id, settings.interval());
        true
    }

    /// Ignored (with a warning) for zero; a chart always has at least one ring.
    pub fn set_ring_count(&mut self, ring_count: usize) {
        if ring_count == 0 {
            log::warn!("ignoring ring count 0 on chart {}", self.id);
            return;
        }
        self.config.ring_count = ring_count;
        self.relayout();
    }

    pub fn set_palette(&mut self, palette: Vec<Rgba>) {
        self.config.palette = palette;
        self.relayout();
    }

    pub fn set_uniform_color(&mut self, uniform: bool) {
        self.config.uniform_color = uniform;
        self.relayout();
    }

    pub fn set_spoke_color(&mut self, color: Rgba) {
        self.config.spoke_color = color;
        self.relayout();
    }

    pub fn set_use_synthesized_rings(&mut self, synthesized: bool) {
        self.config.use_synthesized_rings = synthesized;
        self.relayout();
    }

    /// Rings shown while `use_synthesized_rings` is off.
    pub fn set_rings(&mut self, rings: Vec<Ring>) {
        self.custom_rings = rings;
    }

    // ---- layout -------------------------------------------------------------

    /// Relayout for a new available size. A degenerate size is rejected: the previous size and
    /// geometry both stay, and false is returned.
    pub fn resize(&mut self, size: Size) -> bool {
        match layout(&self.config, size) {
            Some(next) => {
                self.size = size;
                self.layout = Some(next);
                true
            }
            None => false,
        }
    }

    pub fn relayout(&mut self) -> bool {
        match layout(&self.config, self.size) {
            Some(next) => {
                self.layout = Some(next);
                true
            }
            None => false,
        }
    }

    pub fn rings(&self) -> &[Ring] {
        if !self.config.use_synthesized_rings {
            return &self.custom_rings;
        }
        self.layout.as_ref().map(|l| l.rings.as_slice()).unwrap_or(&[])
    }

    pub fn spokes(&self) -> &[Spoke] {
        self.layout.as_ref().map(|l| l.spokes.as_slice()).unwrap_or(&[])
    }

    /// Current chart radius, 0 before the first layout.
    pub fn radius(&self) -> f64 {
        self.layout.as_ref().map_or(0.0, |l| l.radius)
    }

    pub fn fill_width(&self) -> f64 {
        self.layout.as_ref().map_or(0.0, |l| l.fill_width)
    }

    // ---- manual markers -----------------------------------------------------

    /// Add a caller-owned marker, clamping it when the chart has been laid out.
    /// Returns its index.
    pub fn add_marker(&mut self, mut marker: Marker) -> usize {
        if self.layout.is_some() {
            marker.clamp_to(self.radius(), self.config.clamp_mode);
        }
        self.markers.push(marker);
        self.markers.len() - 1
    }

    /// Add a marker at a random spot of the chart's bounding box, then clamp it.
    pub fn add_random_marker<R: Rng>(&mut self, rng: &mut R, side: f64, color: Rgba) -> &Marker {
        let left = random_offset(rng, self.size.width);
        let top = random_offset(rng, self.size.height);
        let index = self.add_marker(Marker::new(left, top, side, side).with_color(color));
        &self.markers[index]
    }

    pub fn remove_marker(&mut self, index: usize) -> Option<Marker> {
        (index < self.markers.len()).then(|| self.markers.remove(index))
    }

    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    pub fn manual_markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Re-clamp every manual marker against the current radius; returns how many moved.
    /// Skipped while the chart has no layout.
    pub fn prepare_markers(&mut self) -> usize {
        if self.layout.is_none() {
            return 0;
        }
        let (radius, mode) = (self.radius(), self.config.clamp_mode);
        self.markers.iter_mut().map(|m| m.clamp_to(radius, mode)).filter(|moved| *moved).count()
    }

    /// The marker source currently attached to the chart: the scan buffer while scanning,
    /// the manual markers otherwise.
    pub fn markers(&self) -> Vec<Marker> {
        match &self.scan {
            ScanDriver::Local(scan) if scan.is_running() => scan.markers().cloned().collect(),
            ScanDriver::Shared(hub) if self.config.auto_scan => hub.markers_for(self.id),
            _ => self.markers.clone(),
        }
    }

    // ---- auto-scan ----------------------------------------------------------

    pub fn set_auto_scan(&mut self, enabled: bool, now: Instant) {
        self.config.auto_scan = enabled;
        match &mut self.scan {
            ScanDriver::Local(scan) => {
                if enabled {
                    scan.start(now);
                } else {
                    scan.stop();
                }
            }
            ScanDriver::Shared(hub) => {
                if enabled {
                    hub.bind(self.id, now);
                } else {
                    hub.release(self.id);
                }
            }
        }
        log::info!("chart {} auto-scan {}", self.id, if enabled { "enabled" } else { "disabled" });
    }

    /// Whether this chart's scan is live (the sweep animation should play).
    pub fn is_scanning(&self) -> bool {
        match &self.scan {
            ScanDriver::Local(scan) => scan.is_running(),
            ScanDriver::Shared(hub) => self.config.auto_scan && hub.is_bound_to(self.id),
        }
    }

    pub fn is_shared_scan(&self) -> bool {
        matches!(self.scan, ScanDriver::Shared(_))
    }

    /// Fire scan ticks due at `now`; returns how many fired.
    pub fn advance(&mut self, now: Instant) -> usize {
        let bounds = self.scan_bounds();
        match &mut self.scan {
            ScanDriver::Local(scan) => scan.advance(now, bounds),
            ScanDriver::Shared(hub) => hub.advance(self.id, now, bounds),
        }
    }

    pub fn next_scan_due(&self) -> Option<Instant> {
        match &self.scan {
            ScanDriver::Local(scan) => scan.next_due(),
            ScanDriver::Shared(hub) => hub.next_due(self.id),
        }
    }

    fn scan_bounds(&self) -> ScanBounds {
        ScanBounds { fill_width: self.fill_width(), radius: self.radius(), clamp_mode: self.config.clamp_mode }
    }
}

fn random_offset<R: Rng>(rng: &mut R, extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 { rng.gen_range(0.0..extent) } else { 0.0 }
}

impl Drop for RadarChart {
    fn drop(&mut self) {
        if let ScanDriver::Shared(hub) = &self.scan {
            hub.release(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_ids_are_unique() {
        let a = RadarChart::new(RadarConfig::default());
        let b = RadarChart::new(RadarConfig::default());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn no_layout_before_first_resize() {
        let chart = RadarChart::new(RadarConfig::default());
        assert!(chart.layout().is_none());
        assert!(chart.rings().is_empty());
        assert!(chart.spokes().is_empty());
        assert_eq!(chart.radius(), 0.0);
    }

    #[test]
    fn degenerate_resize_keeps_previous_geometry() {
        let mut chart = RadarChart::new(RadarConfig::default());
        assert!(chart.resize(Size::square(300.0)));
        assert!(!chart.resize(Size::new(0.0, 300.0)));
        assert_eq!(chart.size(), Size::square(300.0));
        assert!((chart.radius() - 100.0).abs() < 1e-9);
        assert_eq!(chart.rings().len(), 5);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut chart = RadarChart::new(RadarConfig::default());
        chart.add_marker(Marker::new(1.0, 1.0, 2.0, 2.0));
        assert!(chart.remove_marker(3).is_none());
        assert!(chart.remove_marker(0).is_some());
        assert!(chart.manual_markers().is_empty());
    }
}
