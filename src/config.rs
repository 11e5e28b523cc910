use std::path::Path;

use crate::color::aggregate::Aggregation;
use crate::color::interp::ColorScheme;
use crate::foundation::core::Fps;
use crate::foundation::error::{PathlapseError, PathlapseResult};
use crate::render::overlay::OverlayStyle;
use crate::timeline::clock::{FrameClock, TimeMapping};

/// Everything that shapes a render besides the inputs themselves.
///
/// Built once before rendering and never mutated afterwards. Loadable from JSON; missing fields
/// take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub aggregation: Aggregation,
    pub colors: ColorScheme,
    pub blur_radius: u32,
    pub transparency: u8,
    pub scale: f64,
    pub fps: u32,
    /// Output length in seconds; defaults to the number of time points.
    pub duration_secs: Option<u32>,
    pub time_mapping: TimeMapping,
    /// Seed for `random` aggregation. Unseeded runs are not reproducible.
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            aggregation: Aggregation::default(),
            colors: ColorScheme::default(),
            blur_radius: 0,
            transparency: 0,
            scale: 1.0,
            fps: 10,
            duration_secs: None,
            time_mapping: TimeMapping::default(),
            seed: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> PathlapseResult<()> {
        if !self.scale.is_finite() || self.scale < 1.0 {
            return Err(PathlapseError::validation(format!(
                "scale must be >= 1.0, got {}",
                self.scale
            )));
        }
        Fps::new(self.fps)?;
        if self.duration_secs == Some(0) {
            return Err(PathlapseError::validation("duration must be >= 1 second"));
        }
        Ok(())
    }

    /// Read a JSON config file.
    pub fn from_path(path: &Path) -> PathlapseResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PathlapseError::resource(format!("read config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_str(&text).map_err(|e| {
            PathlapseError::validation(format!("parse config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            blur_radius: self.blur_radius,
            transparency: self.transparency,
            scale: self.scale,
        }
    }

    /// Output clock for a run with `timepoints` measured time points.
    pub fn frame_clock(&self, timepoints: usize) -> PathlapseResult<FrameClock> {
        let duration = match self.duration_secs {
            Some(d) => d,
            None => u32::try_from(timepoints)
                .map_err(|_| PathlapseError::validation("too many time points"))?,
        };
        FrameClock::new(Fps::new(self.fps)?, duration)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
