use std::collections::HashMap;

use crate::foundation::error::{PathlapseError, PathlapseResult};
use crate::pathway::model::Entity;

/// Ordered original time labels shared by every level series of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct TimePoints(Vec<f64>);

impl TimePoints {
    /// Labels must be finite, strictly increasing and non-empty.
    pub fn new(labels: Vec<f64>) -> PathlapseResult<Self> {
        if labels.is_empty() {
            return Err(PathlapseError::inconsistency(
                "at least one time point is required",
            ));
        }
        if labels.iter().any(|v| !v.is_finite()) {
            return Err(PathlapseError::inconsistency(
                "time point labels must be finite numbers",
            ));
        }
        if labels.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PathlapseError::inconsistency(
                "time point labels must be strictly increasing",
            ));
        }
        Ok(Self(labels))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> &[f64] {
        &self.0
    }

    pub fn first(&self) -> f64 {
        self.0[0]
    }

    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }
}

/// Normalized level series per entity.
///
/// An entity can own several series when it was measured more than once (repeated rows or several
/// files); each one contributes a level at every time point.
#[derive(Clone, Debug)]
pub struct LevelTable {
    time_points: TimePoints,
    series: HashMap<Entity, Vec<Vec<f64>>>,
}

impl LevelTable {
    pub fn new(time_points: TimePoints) -> Self {
        Self {
            time_points,
            series: HashMap::new(),
        }
    }

    /// Add one series for `entity`. It must have one level in `[0, 1]` per time point.
    pub fn insert(&mut self, entity: Entity, levels: Vec<f64>) -> PathlapseResult<()> {
        if levels.len() != self.time_points.len() {
            return Err(PathlapseError::inconsistency(format!(
                "series for '{}' has {} levels, expected {}",
                entity.id,
                levels.len(),
                self.time_points.len()
            )));
        }
        if let Some(v) = levels.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(PathlapseError::inconsistency(format!(
                "series for '{}' has level {v} outside [0, 1]",
                entity.id
            )));
        }
        self.series.entry(entity).or_default().push(levels);
        Ok(())
    }

    pub fn time_points(&self) -> &TimePoints {
        &self.time_points
    }

    /// Every series recorded for `entity`; empty when the entity was never measured.
    pub fn series(&self, entity: &Entity) -> &[Vec<f64>] {
        self.series.get(entity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Levels of every series of `entity` at time point `t`.
    pub fn levels_at<'a>(&'a self, entity: &Entity, t: usize) -> impl Iterator<Item = f64> + 'a {
        self.series(entity)
            .iter()
            .filter_map(move |s| s.get(t).copied())
    }

    /// Number of distinct entities with data.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/levels/series.rs"]
mod tests;
