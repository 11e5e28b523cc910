use super::*;
use crate::levels::series::TimePoints;
use crate::pathway::model::{AssociationTable, Entity, ShapeKind, VisualElement};

fn pathway() -> Pathway {
    let mut associations = AssociationTable::new();
    associations.link(
        VisualElement::new(ShapeKind::Rectangle, 1, 1, 3, 3),
        Entity::gene("hsa:1"),
    );
    associations.link(
        VisualElement::new(ShapeKind::Rectangle, 5, 5, 7, 7),
        Entity::gene("hsa:404"),
    );
    Pathway {
        name: "path:test".to_string(),
        organism: "hsa".to_string(),
        title: None,
        associations,
    }
}

fn levels() -> LevelTable {
    let mut table = LevelTable::new(TimePoints::new(vec![0.0, 1.0]).unwrap());
    table.insert(Entity::gene("hsa:1"), vec![0.0, 1.0]).unwrap();
    table
}

fn background() -> image::RgbImage {
    image::RgbImage::from_pixel(8, 8, image::Rgb([0, 200, 0]))
}

#[test]
fn prepare_counts_colored_and_skipped_elements() {
    let (p, l, bg) = (pathway(), levels(), background());
    let inputs = RenderInputs {
        pathway: &p,
        levels: &l,
        background: &bg,
    };
    let anim = Animation::prepare(inputs, &RenderConfig::default(), &mut make_rng(Some(1))).unwrap();

    let stats = anim.stats();
    assert_eq!(stats.elements_colored, 1);
    assert_eq!(stats.elements_skipped, 1);
    // Two time points, default 10 fps: 2 s -> 21 frames.
    assert_eq!(stats.frames_total, 21);
    assert_eq!(anim.playback_times(), &[0.0, 1.0]);
}

#[test]
fn unmatched_levels_are_an_inconsistency() {
    let (p, bg) = (pathway(), background());
    let mut l = LevelTable::new(TimePoints::new(vec![0.0]).unwrap());
    l.insert(Entity::gene("hsa:elsewhere"), vec![0.5]).unwrap();
    let inputs = RenderInputs {
        pathway: &p,
        levels: &l,
        background: &bg,
    };
    let err = Animation::prepare(inputs, &RenderConfig::default(), &mut make_rng(Some(1)))
        .unwrap_err();
    assert!(matches!(err, PathlapseError::InputInconsistency(_)));
}

#[test]
fn empty_levels_and_bad_config_fail_before_rendering() {
    let (p, bg) = (pathway(), background());
    let empty = LevelTable::new(TimePoints::new(vec![0.0]).unwrap());
    let inputs = RenderInputs {
        pathway: &p,
        levels: &empty,
        background: &bg,
    };
    let mut sink = crate::encode::sink::InMemorySink::new();
    assert!(render(inputs, &RenderConfig::default(), &mut sink).is_err());
    assert!(sink.config().is_none());

    let l = levels();
    let inputs = RenderInputs {
        pathway: &p,
        levels: &l,
        background: &bg,
    };
    let bad = RenderConfig {
        fps: 0,
        ..RenderConfig::default()
    };
    assert!(render(inputs, &bad, &mut sink).is_err());
    assert!(sink.frames().is_empty());
}

#[test]
fn frame_paints_only_colored_elements() {
    let (p, l, bg) = (pathway(), levels(), background());
    let inputs = RenderInputs {
        pathway: &p,
        levels: &l,
        background: &bg,
    };
    let anim = Animation::prepare(inputs, &RenderConfig::default(), &mut make_rng(Some(1))).unwrap();

    let f0 = anim.frame(FrameIndex(0)).unwrap();
    // Level 0 maps to the default start color.
    assert_eq!(f0.pixel(1, 1), Some([0, 0, 255, 255]));
    assert_eq!(f0.pixel(5, 5), Some([0, 200, 0, 255]));
    assert_eq!(f0.pixel(0, 0), Some([0, 200, 0, 255]));

    assert!(anim.frame(FrameIndex(21)).is_err());
}

#[test]
fn overlay_larger_than_the_frame_fails_in_prepare() {
    let (p, l, bg) = (pathway(), levels(), background());
    let inputs = RenderInputs {
        pathway: &p,
        levels: &l,
        background: &bg,
    };
    let huge = RenderConfig {
        scale: 1e30,
        ..RenderConfig::default()
    };
    let mut sink = crate::encode::sink::InMemorySink::new();
    let err = render(inputs, &huge, &mut sink).unwrap_err();
    assert!(matches!(err, PathlapseError::Render(_)), "{err}");
    assert!(sink.config().is_none());
}

#[test]
fn frames_reuse_masks_across_colors() {
    let (p, l, bg) = (pathway(), levels(), background());
    let inputs = RenderInputs {
        pathway: &p,
        levels: &l,
        background: &bg,
    };
    let anim = Animation::prepare(inputs, &RenderConfig::default(), &mut make_rng(Some(1))).unwrap();

    let first = anim.frame(FrameIndex(0)).unwrap();
    let last = anim.frame(FrameIndex(20)).unwrap();
    assert_eq!(first.pixel(2, 2), Some([0, 0, 255, 255]));
    assert_eq!(last.pixel(2, 2), Some([255, 0, 0, 255]));
    // Same footprint at both times.
    for (x, y) in [(0, 0), (3, 3), (1, 3), (3, 1)] {
        assert_eq!(first.pixel(x, y), Some([0, 200, 0, 255]));
        assert_eq!(last.pixel(x, y), Some([0, 200, 0, 255]));
    }
}
