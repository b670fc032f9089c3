// File: crates/radar-core/src/config.rs
// Summary: Chart configuration (ring count, palette, colors, scan settings) with YAML loading and validation.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{RadarError, Result};
use crate::marker::ClampMode;

pub const DEFAULT_RING_COUNT: usize = 5;
pub const DEFAULT_SCAN_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_SCAN_CAPACITY: usize = 5;
pub const DEFAULT_SCAN_MARKER_SIZE: f64 = 10.0;

/// How charts share the auto-scan simulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanBinding {
    /// Every chart owns its own timer and marker buffer.
    #[default]
    PerChart,
    /// One simulator for all charts that opt in; enabling a chart rebinds it away from the previous one.
    Shared,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    pub interval_ms: u64,
    /// Population cap; the oldest marker is evicted once it is exceeded.
    pub capacity: usize,
    pub marker_size: f64,
    pub marker_color: Rgba,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
    pub binding: ScanBinding,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_SCAN_INTERVAL_MS,
            capacity: DEFAULT_SCAN_CAPACITY,
            marker_size: DEFAULT_SCAN_MARKER_SIZE,
            marker_color: Rgba::ACCENT,
            seed: None,
            binding: ScanBinding::PerChart,
        }
    }
}

impl ScanSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub ring_count: usize,
    /// When false the caller supplies rings directly and ring layout is skipped.
    pub use_synthesized_rings: bool,
    pub uniform_color: bool,
    pub palette: Vec<Rgba>,
    pub spoke_color: Rgba,
    /// Sweep color drawn by renderers while scanning.
    pub radar_color: Option<Rgba>,
    pub auto_scan: bool,
    pub clamp_mode: ClampMode,
    pub scan: ScanSettings,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            ring_count: DEFAULT_RING_COUNT,
            use_synthesized_rings: true,
            uniform_color: true,
            palette: Vec::new(),
            spoke_color: Rgba::BLACK,
            radar_color: None,
            auto_scan: false,
            clamp_mode: ClampMode::TopLeft,
            scan: ScanSettings::default(),
        }
    }
}

impl RadarConfig {
    /// Load and validate a YAML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| RadarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&contents)?;
        log::debug!("loaded radar config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: RadarConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ring_count == 0 {
            return Err(RadarError::InvalidConfig("ring_count must be at least 1".into()));
        }
        if self.scan.interval_ms == 0 {
            return Err(RadarError::InvalidConfig("scan.interval_ms must be positive".into()));
        }
        if self.scan.capacity == 0 {
            return Err(RadarError::InvalidConfig("scan.capacity must be at least 1".into()));
        }
        if !(self.scan.marker_size.is_finite() && self.scan.marker_size > 0.0) {
            return Err(RadarError::InvalidConfig(format!(
                "scan.marker_size must be positive, got {}",
                self.scan.marker_size
            )));
        }
        Ok(())
    }
}
