use crate::color::interp::sigmoidal_interpolate;
use crate::color::table::Keyframe;
use crate::foundation::core::Rgb8;

/// Targets closer than this to a measured time return the measured color unchanged.
pub const SNAP_EPSILON: f64 = 1e-3;

/// Color of one element at output time `time`.
///
/// `playback` holds the output-clock time of every global time point; each keyframe is placed at
/// `playback[keyframe.timepoint]`. The nearest keyframe is found first (earliest wins ties), then
/// the color is interpolated sigmoidally inside the bracketing pair. Times before the first or
/// after the last keyframe hold the edge color. Returns `None` for an empty keyframe list.
///
/// With `δ = playback[nearest] - time`, the position inside the bracket is `-δ` when the target
/// lies after the nearest keyframe and `span - δ` when it lies before it, both divided by the
/// bracket span. For labels one second apart the second case is the usual `1 - δ`; for uneven
/// spacing it keeps the curve continuous where the nearest keyframe switches.
pub fn sample_color(time: f64, playback: &[f64], keys: &[Keyframe]) -> Option<Rgb8> {
    if keys.is_empty() {
        return None;
    }
    let at = |i: usize| playback.get(keys[i].timepoint).copied().unwrap_or(f64::NAN);

    let mut nearest = 0usize;
    let mut best = f64::INFINITY;
    for i in 0..keys.len() {
        let d = (at(i) - time).abs();
        if d < best {
            best = d;
            nearest = i;
        }
    }

    let delta = at(nearest) - time;
    if delta.abs() < SNAP_EPSILON {
        return Some(keys[nearest].color);
    }

    let last = keys.len() - 1;
    let (start, end) = if delta < 0.0 {
        (nearest, (nearest + 1).min(last))
    } else {
        (nearest.saturating_sub(1), nearest)
    };
    if start == end {
        return Some(keys[start].color);
    }

    let span = at(end) - at(start);
    if span.is_nan() || span <= 0.0 {
        return Some(keys[end].color);
    }
    let local = if delta < 0.0 { -delta } else { span - delta };
    Some(sigmoidal_interpolate(
        keys[start].color,
        keys[end].color,
        local / span,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sampler.rs"]
mod tests;
