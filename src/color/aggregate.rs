use std::{fmt, str::FromStr};

use rand::{RngCore, seq::SliceRandom};

use crate::foundation::error::{PathlapseError, PathlapseResult};

/// Reduction applied to the levels of every entity drawn on one element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    #[default]
    Mean,
    Median,
    Lowest,
    Highest,
    /// Uniformly chosen level. Only reproducible with a seeded random source.
    Random,
}

impl Aggregation {
    pub const ALL: [Self; 5] = [
        Self::Mean,
        Self::Median,
        Self::Lowest,
        Self::Highest,
        Self::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Lowest => "lowest",
            Self::Highest => "highest",
            Self::Random => "random",
        }
    }

    /// Reduce `levels` to one value. Returns `None` when `levels` is empty.
    pub fn apply(self, levels: &[f64], rng: &mut dyn RngCore) -> Option<f64> {
        if levels.is_empty() {
            return None;
        }
        let v = match self {
            Self::Mean => levels.iter().sum::<f64>() / levels.len() as f64,
            Self::Median => {
                let mut sorted = levels.to_vec();
                sorted.sort_by(f64::total_cmp);
                let mid = sorted.len() / 2;
                if sorted.len().is_multiple_of(2) {
                    (sorted[mid - 1] + sorted[mid]) / 2.0
                } else {
                    sorted[mid]
                }
            }
            Self::Lowest => levels.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Highest => levels.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Random => *levels.choose(rng)?,
        };
        Some(v)
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Aggregation {
    type Err = PathlapseError;

    fn from_str(s: &str) -> PathlapseResult<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| {
                PathlapseError::validation(format!(
                    "unknown aggregation '{s}' (expected mean, median, lowest, highest or random)"
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/aggregate.rs"]
mod tests;
