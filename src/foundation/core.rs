use std::{fmt, str::FromStr};

use crate::foundation::error::{PathlapseError, PathlapseResult};

/// Absolute 0-based index of an output frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb8(pub [u8; 3]);

impl Rgb8 {
    pub const BLACK: Self = Self([0, 0, 0]);
    pub const WHITE: Self = Self([255, 255, 255]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }

    /// Opaque RGBA8 form of this color.
    pub fn to_rgba(self, alpha: u8) -> [u8; 4] {
        [self.0[0], self.0[1], self.0[2], alpha]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Parses `r,g,b` with each channel in `0..=255`.
impl FromStr for Rgb8 {
    type Err = PathlapseError;

    fn from_str(s: &str) -> PathlapseResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(PathlapseError::validation(format!(
                "color '{s}' must have exactly three comma-separated channels"
            )));
        }
        let mut out = [0u8; 3];
        for (slot, part) in out.iter_mut().zip(&parts) {
            *slot = part.parse::<u8>().map_err(|_| {
                PathlapseError::validation(format!(
                    "color channel '{part}' in '{s}' must be an integer in 0..=255"
                ))
            })?;
        }
        Ok(Self(out))
    }
}

/// Integer output frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps(u32);

impl Fps {
    pub fn new(fps: u32) -> PathlapseResult<Self> {
        if fps == 0 {
            return Err(PathlapseError::validation("fps must be >= 1"));
        }
        Ok(Self(fps))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
