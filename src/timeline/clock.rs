use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{PathlapseError, PathlapseResult};
use crate::levels::series::TimePoints;

/// How measured time labels are placed on the output clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeMapping {
    /// Labels are seconds on the output clock.
    #[default]
    Labels,
    /// First label plays at 0, last label at the end of the animation.
    Stretch,
}

impl TimeMapping {
    /// Playback time, in seconds, of every label.
    pub fn playback_times(self, time_points: &TimePoints, duration_secs: u32) -> Vec<f64> {
        match self {
            Self::Labels => time_points.labels().to_vec(),
            Self::Stretch => {
                let (first, last) = (time_points.first(), time_points.last());
                let span = last - first;
                time_points
                    .labels()
                    .iter()
                    .map(|&l| {
                        if span > 0.0 {
                            (l - first) / span * f64::from(duration_secs)
                        } else {
                            0.0
                        }
                    })
                    .collect()
            }
        }
    }
}

/// Uniform output frame clock covering `[0, duration]` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    fps: Fps,
    duration_secs: u32,
}

impl FrameClock {
    pub fn new(fps: Fps, duration_secs: u32) -> PathlapseResult<Self> {
        if duration_secs == 0 {
            return Err(PathlapseError::validation("duration must be >= 1 second"));
        }
        Ok(Self { fps, duration_secs })
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// `floor(duration / tick) + 1`: one frame per tick including both ends.
    pub fn frame_count(&self) -> u64 {
        u64::from(self.duration_secs) * u64::from(self.fps.get()) + 1
    }

    /// Output time of `frame`, derived from the index so it never accumulates drift.
    pub fn time_of(&self, frame: FrameIndex) -> f64 {
        frame.0 as f64 / f64::from(self.fps.get())
    }

    /// Every frame index with its output time, in order.
    pub fn ticks(&self) -> impl Iterator<Item = (FrameIndex, f64)> + '_ {
        (0..self.frame_count()).map(move |i| (FrameIndex(i), self.time_of(FrameIndex(i))))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/clock.rs"]
mod tests;
