use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{PathlapseError, PathlapseResult};
use crate::levels::series::{LevelTable, TimePoints};
use crate::pathway::model::{Entity, EntityKind};

/// Raw (not yet normalized) contents of one level CSV file.
#[derive(Clone, Debug)]
pub struct LevelFile {
    /// Where the file came from, for messages.
    pub source: String,
    pub kind: EntityKind,
    pub labels: Vec<f64>,
    pub rows: Vec<LevelRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelRow {
    pub id: String,
    pub values: Vec<f64>,
}

/// Read and parse a level CSV file.
pub fn load_level_csv(path: &Path, kind: EntityKind) -> PathlapseResult<LevelFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read level file '{}'", path.display()))
        .map_err(|e| PathlapseError::resource(format!("{e:#}")))?;
    parse_level_csv(&text, kind, &path.display().to_string())
}

/// Parse level CSV text.
///
/// The first non-empty, non-`#` line is the header: its first cell is ignored and the rest are
/// time labels. Every following line is an identifier and one value per label.
pub fn parse_level_csv(text: &str, kind: EntityKind, source: &str) -> PathlapseResult<LevelFile> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| PathlapseError::inconsistency(format!("{source}: file is empty")))?;
    let labels = split_cells(header)
        .skip(1)
        .map(|cell| parse_number(cell, source, header_no))
        .collect::<PathlapseResult<Vec<f64>>>()?;
    if labels.is_empty() {
        return Err(PathlapseError::inconsistency(format!(
            "{source}: header declares no time points"
        )));
    }

    let mut rows = Vec::new();
    for (line_no, line) in lines {
        let mut cells = split_cells(line);
        let id = cells.next().unwrap_or_default().to_string();
        if id.is_empty() {
            return Err(PathlapseError::validation(format!(
                "{source}:{line_no}: missing identifier"
            )));
        }
        let values = cells
            .map(|cell| parse_number(cell, source, line_no))
            .collect::<PathlapseResult<Vec<f64>>>()?;
        if values.len() != labels.len() {
            return Err(PathlapseError::inconsistency(format!(
                "{source}:{line_no}: '{id}' has {} values, header has {} time points",
                values.len(),
                labels.len()
            )));
        }
        rows.push(LevelRow { id, values });
    }

    Ok(LevelFile {
        source: source.to_string(),
        kind,
        labels,
        rows,
    })
}

impl LevelFile {
    /// Min-max scale every value of the file into `[0, 1]` using the file-wide range.
    pub fn normalized_rows(&self) -> PathlapseResult<Vec<LevelRow>> {
        let (min, max) = self
            .rows
            .iter()
            .flat_map(|r| r.values.iter().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if self.rows.is_empty() {
            return Ok(Vec::new());
        }
        if max <= min {
            return Err(PathlapseError::inconsistency(format!(
                "{}: cannot normalize, every level equals {min}",
                self.source
            )));
        }

        let span = max - min;
        Ok(self
            .rows
            .iter()
            .map(|r| LevelRow {
                id: r.id.clone(),
                values: r.values.iter().map(|v| (v - min) / span).collect(),
            })
            .collect())
    }
}

/// Turn a bare identifier into the KGML form (`hsa:1234`, `cpd:C00031`).
///
/// Identifiers that already carry a `prefix:` are kept as written.
pub fn resolve_id(raw: &str, kind: EntityKind, organism: &str) -> String {
    if raw.contains(':') {
        return raw.to_string();
    }
    match kind {
        EntityKind::Gene => format!("{organism}:{raw}"),
        EntityKind::Compound => format!("cpd:{raw}"),
    }
}

/// Normalize each file and merge them into one [`LevelTable`].
///
/// Files must agree on the number of time points. When they agree on the count but not on the
/// labels, the first file's labels are used.
pub fn build_level_table(files: &[LevelFile], organism: &str) -> PathlapseResult<LevelTable> {
    let first = files
        .first()
        .ok_or_else(|| PathlapseError::inconsistency("no level files were provided"))?;

    for f in &files[1..] {
        if f.labels.len() != first.labels.len() {
            return Err(PathlapseError::inconsistency(format!(
                "'{}' has {} time points but '{}' has {}",
                f.source,
                f.labels.len(),
                first.source,
                first.labels.len()
            )));
        }
        if f.labels != first.labels {
            tracing::warn!(
                file = %f.source,
                reference = %first.source,
                "time labels differ between level files; using the reference labels"
            );
        }
    }

    let mut table = LevelTable::new(TimePoints::new(first.labels.clone())?);
    for f in files {
        let rows = f.normalized_rows()?;
        tracing::debug!(file = %f.source, rows = rows.len(), "loaded level file");
        for row in rows {
            let entity = Entity::new(resolve_id(&row.id, f.kind, organism), f.kind);
            table.insert(entity, row.values)?;
        }
    }

    if table.is_empty() {
        return Err(PathlapseError::inconsistency(
            "level files contain no measurements",
        ));
    }
    Ok(table)
}

fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(|c| c.trim().trim_matches('"'))
}

fn parse_number(cell: &str, source: &str, line_no: usize) -> PathlapseResult<f64> {
    cell.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            PathlapseError::validation(format!("{source}:{line_no}: '{cell}' is not a number"))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/levels/csv.rs"]
mod tests;
