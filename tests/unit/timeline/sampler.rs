use super::*;

fn keys(colors: &[Rgb8]) -> Vec<Keyframe> {
    colors
        .iter()
        .enumerate()
        .map(|(timepoint, &color)| Keyframe { timepoint, color })
        .collect()
}

const A: Rgb8 = Rgb8::new(0, 0, 0);
const B: Rgb8 = Rgb8::new(200, 100, 0);
const C: Rgb8 = Rgb8::new(50, 250, 10);

#[test]
fn exact_labels_snap_to_table_entries() {
    let playback = [0.0, 1.0, 3.0];
    let k = keys(&[A, B, C]);
    assert_eq!(sample_color(0.0, &playback, &k), Some(A));
    assert_eq!(sample_color(1.0, &playback, &k), Some(B));
    assert_eq!(sample_color(3.0, &playback, &k), Some(C));
    assert_eq!(sample_color(1.0005, &playback, &k), Some(B));
}

#[test]
fn outside_the_range_clamps_to_edges() {
    let playback = [1.0, 2.0];
    let k = keys(&[A, B]);
    assert_eq!(sample_color(0.0, &playback, &k), Some(A));
    assert_eq!(sample_color(0.5, &playback, &k), Some(A));
    assert_eq!(sample_color(2.5, &playback, &k), Some(B));
    assert_eq!(sample_color(100.0, &playback, &k), Some(B));
}

#[test]
fn midpoint_between_unit_spaced_points_is_half_way() {
    let playback = [0.0, 1.0];
    let k = keys(&[Rgb8::BLACK, Rgb8::WHITE]);
    // Tie between both labels resolves to the first one, bracket [0, 1], position 0.5.
    assert_eq!(
        sample_color(0.5, &playback, &k),
        Some(Rgb8::new(127, 127, 127))
    );
}

#[test]
fn before_nearest_point_uses_the_previous_bracket() {
    let playback = [0.0, 1.0];
    let k = keys(&[Rgb8::BLACK, Rgb8::WHITE]);
    // Nearest is index 1 (delta = 0.25), bracket [0, 1], position 0.75.
    let expected = sigmoidal_interpolate(Rgb8::BLACK, Rgb8::WHITE, 0.75);
    assert_eq!(sample_color(0.75, &playback, &k), Some(expected));
    assert!(expected.r() > 200);
}

#[test]
fn non_uniform_spacing_normalizes_by_the_bracket_span() {
    let playback = [0.0, 10.0, 12.0];
    let k = keys(&[A, B, C]);
    // After index 0: nearest 0, position 3/10.
    assert_eq!(
        sample_color(3.0, &playback, &k),
        Some(sigmoidal_interpolate(A, B, 0.3))
    );
    // Before index 1: nearest 1 (delta 2), position (10 - 2)/10.
    assert_eq!(
        sample_color(8.0, &playback, &k),
        Some(sigmoidal_interpolate(A, B, 0.8))
    );
    // Equidistant from 1 and 2: the earlier index wins, bracket [1, 2], position 0.5.
    assert_eq!(
        sample_color(11.0, &playback, &k),
        Some(sigmoidal_interpolate(B, C, 0.5))
    );
}

#[test]
fn curve_is_continuous_across_the_nearest_point_switch() {
    let playback = [0.0, 4.0];
    let k = keys(&[Rgb8::BLACK, Rgb8::WHITE]);
    let below = sample_color(1.999, &playback, &k).unwrap();
    let above = sample_color(2.001, &playback, &k).unwrap();
    assert!((i16::from(below.r()) - i16::from(above.r())).abs() <= 1);
}

#[test]
fn gaps_use_the_stored_global_timepoint() {
    // Element measured only at time points 0 and 2.
    let playback = [0.0, 1.0, 2.0];
    let k = vec![
        Keyframe {
            timepoint: 0,
            color: A,
        },
        Keyframe {
            timepoint: 2,
            color: C,
        },
    ];
    assert_eq!(sample_color(2.0, &playback, &k), Some(C));
    assert_eq!(
        sample_color(0.5, &playback, &k),
        Some(sigmoidal_interpolate(A, C, 0.25))
    );
}

#[test]
fn single_keyframe_is_constant_and_empty_is_none() {
    let playback = [0.0, 1.0];
    let k = keys(&[B]);
    assert_eq!(sample_color(0.7, &playback, &k), Some(B));
    assert_eq!(sample_color(0.7, &playback, &[]), None);
}
