use super::*;

const START: Rgb8 = Rgb8::new(10, 200, 0);
const MID: Rgb8 = Rgb8::new(128, 100, 50);
const END: Rgb8 = Rgb8::new(255, 0, 250);

#[test]
fn linear_hits_control_points() {
    assert_eq!(linear_interpolate(START, MID, END, 0.0), START);
    assert_eq!(linear_interpolate(START, MID, END, 0.5), MID);
    assert_eq!(linear_interpolate(START, MID, END, 1.0), END);
}

#[test]
fn linear_truncates_channels() {
    // 0 + 255 * 0.5 = 127.5 in the first half-segment.
    let c = linear_interpolate(Rgb8::BLACK, Rgb8::WHITE, Rgb8::WHITE, 0.25);
    assert_eq!(c, Rgb8::new(127, 127, 127));
    // Descending channel: 255 - 255 * 0.3 = 178.5.
    let c = linear_interpolate(Rgb8::WHITE, Rgb8::BLACK, Rgb8::BLACK, 0.15);
    assert_eq!(c, Rgb8::new(178, 178, 178));
}

#[test]
fn linear_is_monotonic_within_each_half() {
    let lo = Rgb8::new(0, 10, 20);
    let mid = Rgb8::new(100, 110, 120);
    let hi = Rgb8::new(200, 210, 220);
    let mut prev = linear_interpolate(lo, mid, hi, 0.0);
    for i in 1..=100 {
        let c = linear_interpolate(lo, mid, hi, f64::from(i) / 100.0);
        for ch in 0..3 {
            assert!(c.0[ch] >= prev.0[ch], "channel {ch} decreased at {i}");
        }
        prev = c;
    }
}

#[test]
fn sigmoid_midpoint_is_exact_half() {
    let c = sigmoidal_interpolate(Rgb8::new(0, 100, 200), Rgb8::new(200, 100, 0), 0.5);
    assert_eq!(c, Rgb8::new(100, 100, 100));
    assert_eq!(
        sigmoidal_interpolate(Rgb8::BLACK, Rgb8::WHITE, 0.5),
        Rgb8::new(127, 127, 127)
    );
}

#[test]
fn sigmoid_saturates_far_from_centre() {
    assert_eq!(sigmoidal_interpolate(START, END, 50.0), END);
    assert_eq!(sigmoidal_interpolate(START, END, -50.0), START);
}

#[test]
fn sigmoid_is_flat_near_anchors() {
    let near_start = sigmoidal_interpolate(Rgb8::BLACK, Rgb8::WHITE, 0.05);
    let near_end = sigmoidal_interpolate(Rgb8::BLACK, Rgb8::WHITE, 0.95);
    assert!(near_start.r() < 5);
    assert!(near_end.r() > 250);
}

#[test]
fn scheme_maps_levels_through_linear_colormap() {
    let scheme = ColorScheme {
        start: START,
        mid: MID,
        end: END,
    };
    assert_eq!(scheme.color_for(0.0), START);
    assert_eq!(scheme.color_for(0.5), MID);
    assert_eq!(scheme.color_for(1.0), END);
}
