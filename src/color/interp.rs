use crate::foundation::core::Rgb8;
use crate::foundation::math::trunc_channel;

/// Steepness of the logistic curve used between two measured time points.
pub const SIGMOID_STEEPNESS: f64 = 10.0;

/// Two-segment piecewise-linear colormap through `start` (0), `mid` (0.5) and `end` (1).
///
/// Channels are truncated toward zero.
pub fn linear_interpolate(start: Rgb8, mid: Rgb8, end: Rgb8, position: f64) -> Rgb8 {
    let (lower, higher, local) = if position <= 0.5 {
        (start, mid, position * 2.0)
    } else {
        (mid, end, (position - 0.5) * 2.0)
    };
    blend(lower, higher, local)
}

/// Logistic blend from `start` to `end`, centred at `position = 0.5`.
///
/// `position` is not clamped; far outside `[0, 1]` the result saturates to `start` or `end`.
pub fn sigmoidal_interpolate(start: Rgb8, end: Rgb8, position: f64) -> Rgb8 {
    let s = 1.0 / (1.0 + (-SIGMOID_STEEPNESS * (position - 0.5)).exp());
    blend(start, end, s)
}

fn blend(lower: Rgb8, higher: Rgb8, t: f64) -> Rgb8 {
    let mut out = [0u8; 3];
    for (i, c) in out.iter_mut().enumerate() {
        let lo = f64::from(lower.0[i]);
        let hi = f64::from(higher.0[i]);
        *c = trunc_channel(lo + (hi - lo) * t);
    }
    Rgb8(out)
}

/// The three control colors of the level colormap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorScheme {
    pub start: Rgb8,
    pub mid: Rgb8,
    pub end: Rgb8,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            start: Rgb8::new(0, 0, 255),
            mid: Rgb8::WHITE,
            end: Rgb8::new(255, 0, 0),
        }
    }
}

impl ColorScheme {
    /// Color of a normalized level.
    pub fn color_for(&self, level: f64) -> Rgb8 {
        linear_interpolate(self.start, self.mid, self.end, level)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/interp.rs"]
mod tests;
