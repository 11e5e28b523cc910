//! Level → color mapping: colormaps, level aggregation and the per-timepoint color table.

/// Level aggregation over entities sharing one element.
pub mod aggregate;
/// Linear and sigmoidal color interpolation.
pub mod interp;
/// Per-element, per-timepoint color table.
pub mod table;
