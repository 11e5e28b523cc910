use super::*;

fn rect(x0: i64, y0: i64, x1: i64, y1: i64) -> VisualElement {
    VisualElement::new(ShapeKind::Rectangle, x0, y0, x1, y1)
}

const RED: Rgb8 = Rgb8::new(255, 0, 0);
const FRAME: (u32, u32) = (200, 100);

#[test]
fn hard_edged_rectangle_fills_its_box() {
    let ov =
        build_overlay(&rect(10, 20, 14, 23), RED, &OverlayStyle::default(), FRAME).unwrap();
    assert_eq!((ov.x, ov.y), (10, 20));
    assert_eq!(ov.image.dimensions(), (4, 3));
    assert!(ov.image.pixels().all(|p| p.0 == [255, 0, 0, 255]));
}

#[test]
fn padding_reserves_room_for_blur() {
    let style = OverlayStyle {
        blur_radius: 2,
        ..OverlayStyle::default()
    };
    let ov = build_overlay(&rect(10, 10, 20, 20), RED, &style, FRAME).unwrap();
    assert_eq!((ov.x, ov.y), (6, 6));
    assert_eq!(ov.image.dimensions(), (18, 18));

    // Corners are far outside the blurred shape, the centre is fully inside.
    assert_eq!(ov.image.get_pixel(0, 0).0[3], 0);
    assert_eq!(ov.image.get_pixel(9, 9).0[3], 255);
    // The edge is soft.
    let edge = ov.image.get_pixel(4, 9).0[3];
    assert!(edge > 0 && edge < 255, "edge alpha {edge}");
}

#[test]
fn transparency_scales_alpha() {
    let half = OverlayStyle {
        transparency: 128,
        ..OverlayStyle::default()
    };
    let ov = build_overlay(&rect(0, 0, 2, 2), RED, &half, FRAME).unwrap();
    assert!(ov.image.pixels().all(|p| p.0[3] == 127));

    let invisible = OverlayStyle {
        transparency: 255,
        ..OverlayStyle::default()
    };
    let ov = build_overlay(&rect(0, 0, 2, 2), RED, &invisible, FRAME).unwrap();
    assert!(ov.image.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn scale_grows_around_the_centre() {
    let style = OverlayStyle {
        scale: 2.0,
        ..OverlayStyle::default()
    };
    let ov = build_overlay(&rect(10, 10, 14, 16), RED, &style, FRAME).unwrap();
    assert_eq!(ov.image.dimensions(), (8, 12));
    assert_eq!((ov.x, ov.y), (8, 7));
}

#[test]
fn circles_leave_the_corners_transparent() {
    let circle = VisualElement::new(ShapeKind::Circle, 0, 0, 10, 10);
    let ov = build_overlay(&circle, RED, &OverlayStyle::default(), FRAME).unwrap();
    assert_eq!(ov.image.get_pixel(0, 0).0[3], 0);
    assert_eq!(ov.image.get_pixel(9, 9).0[3], 0);
    assert_eq!(ov.image.get_pixel(5, 5).0[3], 255);
    assert_eq!(ov.image.get_pixel(5, 0).0[3], 255);
}

#[test]
fn rejects_shrinking_scale() {
    let style = OverlayStyle {
        scale: 0.5,
        ..OverlayStyle::default()
    };
    assert!(build_overlay(&rect(0, 0, 4, 4), RED, &style, FRAME).is_err());
}

#[test]
fn mask_is_shared_by_every_tint() {
    let style = OverlayStyle {
        blur_radius: 1,
        transparency: 51,
        ..OverlayStyle::default()
    };
    let element = rect(10, 10, 20, 16);
    let mask = build_mask(&element, &style, FRAME).unwrap();
    let blue = mask.tint(Rgb8::new(0, 0, 255));
    assert_eq!(blue, build_overlay(&element, Rgb8::new(0, 0, 255), &style, FRAME).unwrap());
    assert_eq!((blue.x, blue.y), (mask.x, mask.y));
    assert!(
        blue.image
            .pixels()
            .zip(mask.alpha.pixels())
            .all(|(c, a)| c.0 == [0, 0, 255, a.0[0]])
    );
    assert_eq!(mask.alpha.get_pixel(7, 5).0[0], 204);
}

#[test]
fn oversized_scale_is_an_error_not_a_panic() {
    let element = rect(460, 398, 506, 415);
    for scale in [1e6, 1e30, f64::MAX] {
        let style = OverlayStyle {
            blur_radius: 1,
            scale,
            ..OverlayStyle::default()
        };
        let err = build_mask(&element, &style, (800, 600)).unwrap_err();
        assert!(matches!(err, PathlapseError::Render(_)), "{err}");
    }
}

#[test]
fn scale_up_to_the_frame_size_is_accepted() {
    let style = OverlayStyle {
        scale: 10.0,
        ..OverlayStyle::default()
    };
    let mask = build_mask(&rect(0, 0, 20, 10), &style, FRAME).unwrap();
    assert_eq!(mask.alpha.dimensions(), (200, 100));
    assert_eq!((mask.x, mask.y), (-90, -45));
}

#[test]
fn blur_longer_than_the_frame_is_rejected() {
    let style = OverlayStyle {
        blur_radius: u32::MAX,
        ..OverlayStyle::default()
    };
    assert!(build_mask(&rect(0, 0, 4, 4), &style, FRAME).is_err());
}
