//! Measured activity levels: the time axis, per-entity level series and CSV loading.

/// CSV level files, normalization and merging into a [`series::LevelTable`].
pub mod csv;
/// Time points and per-entity level series.
pub mod series;
