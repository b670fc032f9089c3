// File: crates/radar-core/src/color.rs
// Summary: 8-bit ARGB color used by rings, spokes and markers; parses and prints `#AARRGGBB`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RadarError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::from_argb(255, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::from_argb(255, 255, 255, 255);
    pub const RED: Rgba = Rgba::from_argb(255, 255, 0, 0);
    /// `#FF4166D7`, the fallback for rings and the default marker fill.
    pub const ACCENT: Rgba = Rgba::from_argb(255, 0x41, 0x66, 0xD7);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn to_argb_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::ACCENT
    }
}

impl FromStr for Rgba {
    type Err = RadarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || RadarError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
        let [hi, r, g, b] = value.to_be_bytes();
        match hex.len() {
            6 => Ok(Rgba::from_rgb(r, g, b)),
            8 => Ok(Rgba::from_argb(hi, r, g, b)),
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgba {
    type Error = RadarError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> String {
        c.to_string()
    }
}
