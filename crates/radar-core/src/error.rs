// File: crates/radar-core/src/error.rs
// Summary: Error type for the configuration edge of the crate. Layout and geometry never fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("reading config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid color {0:?}: expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RadarError>;
