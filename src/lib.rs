//! Pathlapse renders time-lapse animations of pathway diagrams.
//!
//! Every gene or compound box on the diagram is tinted by its measured activity level, and the
//! tint moves smoothly between irregularly spaced measurements:
//!
//! - Load a [`Pathway`] (KGML) and a [`LevelTable`] (CSV level files)
//! - Build an [`Animation`] from them, a background image and a [`RenderConfig`]
//! - Stream its frames into a [`FrameSink`] (MP4 via `ffmpeg`, PNG sequence, or memory)
#![forbid(unsafe_code)]

mod foundation;

/// Level aggregation, colormaps and the per-timepoint color table.
pub mod color;
/// Render configuration.
pub mod config;
/// Frame sinks.
pub mod encode;
/// Level series and CSV loading.
pub mod levels;
/// Pathway model and KGML loading.
pub mod pathway;
/// Animation driver.
pub mod pipeline;
/// Overlay construction and compositing.
pub mod render;
/// Output clock and frame sampling.
pub mod timeline;

pub use crate::foundation::core::{Fps, FrameIndex, Rgb8};
pub use crate::foundation::error::{PathlapseError, PathlapseResult};

pub use crate::color::aggregate::Aggregation;
pub use crate::color::interp::{ColorScheme, linear_interpolate, sigmoidal_interpolate};
pub use crate::color::table::{ColorTable, Keyframe};
pub use crate::config::RenderConfig;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::levels::csv::{LevelFile, build_level_table, load_level_csv, parse_level_csv};
pub use crate::levels::series::{LevelTable, TimePoints};
pub use crate::pathway::kgml::{load_kgml, parse_kgml};
pub use crate::pathway::model::{
    AssociationTable, ElementId, Entity, EntityKind, Pathway, ShapeKind, VisualElement,
};
pub use crate::pipeline::{Animation, RenderInputs, RenderStats, make_rng, render};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::overlay::{Overlay, OverlayMask, OverlayStyle, build_mask, build_overlay};
pub use crate::timeline::clock::{FrameClock, TimeMapping};
pub use crate::timeline::sampler::sample_color;
