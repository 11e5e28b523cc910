//! Output frame clock and per-element color sampling between measured time points.

/// Output frame times and label → playback-time mapping.
pub mod clock;
/// Sigmoidal sampling of an element's keyframes at an arbitrary time.
pub mod sampler;
