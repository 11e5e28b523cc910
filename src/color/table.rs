use rand::RngCore;

use crate::color::aggregate::Aggregation;
use crate::color::interp::ColorScheme;
use crate::foundation::core::Rgb8;
use crate::levels::series::LevelTable;
use crate::pathway::model::{AssociationTable, ElementId};

/// Color of one element at one measured time point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyframe {
    /// Global time-point index this color was measured at.
    pub timepoint: usize,
    pub color: Rgb8,
}

/// Measured colors per element, in increasing time-point order.
///
/// Time points where none of an element's entities had data are absent from its keyframes, and
/// elements with no data at all have no entry. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<Option<Vec<Keyframe>>>,
}

impl ColorTable {
    /// Aggregate the levels of every element's entities at each time point and map them to colors.
    pub fn build(
        associations: &AssociationTable,
        levels: &LevelTable,
        aggregation: Aggregation,
        scheme: &ColorScheme,
        rng: &mut dyn RngCore,
    ) -> Self {
        let timepoints = levels.time_points().len();
        let mut entries = Vec::with_capacity(associations.len());
        let mut scratch = Vec::new();

        for (_, _, entities) in associations.iter() {
            let mut keys = Vec::new();
            for t in 0..timepoints {
                scratch.clear();
                for entity in entities {
                    scratch.extend(levels.levels_at(entity, t));
                }
                if let Some(level) = aggregation.apply(&scratch, rng) {
                    keys.push(Keyframe {
                        timepoint: t,
                        color: scheme.color_for(level),
                    });
                }
            }
            entries.push((!keys.is_empty()).then_some(keys));
        }

        let table = Self { entries };
        tracing::debug!(
            elements = associations.len(),
            colored = table.len(),
            timepoints,
            aggregation = %aggregation,
            "built color table"
        );
        table
    }

    /// Keyframes of `id`, or `None` when the element has no data.
    pub fn get(&self, id: ElementId) -> Option<&[Keyframe]> {
        self.entries.get(id.0)?.as_deref()
    }

    /// Elements with at least one keyframe, in element order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &[Keyframe])> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_deref().map(|keys| (ElementId(i), keys)))
    }

    /// Number of elements with data.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/table.rs"]
mod tests;
