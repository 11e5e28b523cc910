use rand::{RngCore, SeedableRng, rngs::StdRng};

use crate::color::table::ColorTable;
use crate::config::RenderConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Rgb8};
use crate::foundation::error::{PathlapseError, PathlapseResult};
use crate::levels::series::LevelTable;
use crate::pathway::model::{ElementId, Pathway};
use crate::render::composite::composite_overlay;
use crate::render::frame::FrameRGBA;
use crate::render::overlay::{OverlayMask, build_mask};
use crate::timeline::clock::FrameClock;
use crate::timeline::sampler::sample_color;

/// Already-loaded inputs of a render.
#[derive(Clone, Copy, Debug)]
pub struct RenderInputs<'a> {
    pub pathway: &'a Pathway,
    pub levels: &'a LevelTable,
    /// Background diagram in the pathway's pixel space.
    pub background: &'a image::RgbImage,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    /// Elements with at least one measured color.
    pub elements_colored: usize,
    /// Elements skipped because none of their entities were measured.
    pub elements_skipped: usize,
}

/// Immutable render state: the color table, playback times of the measured time points, one
/// overlay mask per colored element and the pristine background. Frames are produced from it
/// without mutating it.
#[derive(Debug)]
pub struct Animation<'a> {
    pathway: &'a Pathway,
    colors: ColorTable,
    playback: Vec<f64>,
    clock: FrameClock,
    /// Indexed by `ElementId`; `None` for elements without colors.
    masks: Vec<Option<OverlayMask>>,
    background: FrameRGBA,
}

impl<'a> Animation<'a> {
    /// Validate `config`, build the color table and fix the output clock.
    ///
    /// `rng` is only consumed by `random` aggregation.
    pub fn prepare(
        inputs: RenderInputs<'a>,
        config: &RenderConfig,
        rng: &mut dyn RngCore,
    ) -> PathlapseResult<Self> {
        config.validate()?;

        let (width, height) = inputs.background.dimensions();
        if width == 0 || height == 0 {
            return Err(PathlapseError::validation("background image is empty"));
        }
        if inputs.levels.is_empty() {
            return Err(PathlapseError::inconsistency("no level data was loaded"));
        }

        let associations = &inputs.pathway.associations;
        let colors = ColorTable::build(
            associations,
            inputs.levels,
            config.aggregation,
            &config.colors,
            rng,
        );
        if colors.is_empty() {
            return Err(PathlapseError::inconsistency(format!(
                "none of the {} measured entities appear on pathway '{}'",
                inputs.levels.len(),
                inputs.pathway.name
            )));
        }

        let time_points = inputs.levels.time_points();
        let clock = config.frame_clock(time_points.len())?;
        let playback = config
            .time_mapping
            .playback_times(time_points, clock.duration_secs());

        let style = config.overlay_style();
        let mut masks = vec![None; associations.len()];
        for (id, _) in colors.iter() {
            let element = associations.element(id).ok_or_else(|| {
                PathlapseError::render(format!("color table references unknown element {}", id.0))
            })?;
            masks[id.0] = Some(build_mask(element, &style, (width, height))?);
        }
        tracing::debug!(masks = colors.len(), "built overlay masks");

        Ok(Self {
            pathway: inputs.pathway,
            colors,
            playback,
            clock,
            masks,
            background: FrameRGBA::from_rgb(inputs.background),
        })
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn color_table(&self) -> &ColorTable {
        &self.colors
    }

    /// Output-clock time of every measured time point.
    pub fn playback_times(&self) -> &[f64] {
        &self.playback
    }

    pub fn stats(&self) -> RenderStats {
        let colored = self.colors.len();
        RenderStats {
            frames_total: self.clock.frame_count(),
            elements_colored: colored,
            elements_skipped: self.pathway.associations.len() - colored,
        }
    }

    /// Sampled color of every colored element at `time`, in element order.
    pub fn colors_at(&self, time: f64) -> Vec<(ElementId, Rgb8)> {
        self.colors
            .iter()
            .filter_map(|(id, keys)| sample_color(time, &self.playback, keys).map(|c| (id, c)))
            .collect()
    }

    /// Render the frame shown at output time `time`.
    pub fn frame_at(&self, time: f64) -> PathlapseResult<FrameRGBA> {
        let mut frame = self.background.clone();
        for (id, color) in self.colors_at(time) {
            let mask = self.masks.get(id.0).and_then(Option::as_ref).ok_or_else(|| {
                PathlapseError::render(format!("no overlay mask for element {}", id.0))
            })?;
            composite_overlay(&mut frame, &mask.tint(color));
        }
        Ok(frame)
    }

    /// Render every tick of the clock into `sink`, in order.
    ///
    /// The sink is only finalized when every frame was rendered and accepted.
    pub fn render_to(&self, sink: &mut dyn FrameSink) -> PathlapseResult<RenderStats> {
        sink.begin(SinkConfig {
            width: self.background.width,
            height: self.background.height,
            fps: self.clock.fps(),
            frame_count: self.clock.frame_count(),
        })?;

        for (idx, time) in self.clock.ticks() {
            let frame = self.frame_at(time)?;
            sink.push_frame(idx, &frame)?;
            if idx.0.is_multiple_of(100) {
                tracing::debug!(frame = idx.0, time, "rendered frame");
            }
        }

        sink.end()?;
        Ok(self.stats())
    }

    /// Render only frame `idx` of the clock.
    pub fn frame(&self, idx: FrameIndex) -> PathlapseResult<FrameRGBA> {
        if idx.0 >= self.clock.frame_count() {
            return Err(PathlapseError::validation(format!(
                "frame {} is past the last frame {}",
                idx.0,
                self.clock.frame_count() - 1
            )));
        }
        self.frame_at(self.clock.time_of(idx))
    }
}

/// Build the random source for a run: seeded when `seed` is set, from OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Render the whole animation into `sink`.
#[tracing::instrument(
    skip_all,
    fields(pathway = %inputs.pathway.name, aggregation = %config.aggregation, fps = config.fps)
)]
pub fn render(
    inputs: RenderInputs<'_>,
    config: &RenderConfig,
    sink: &mut dyn FrameSink,
) -> PathlapseResult<RenderStats> {
    let mut rng = make_rng(config.seed);
    let animation = Animation::prepare(inputs, config, &mut rng)?;
    let stats = animation.render_to(sink)?;
    tracing::info!(
        frames = stats.frames_total,
        colored = stats.elements_colored,
        skipped = stats.elements_skipped,
        "render finished"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
