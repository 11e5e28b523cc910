use super::*;

fn overlay(x: i64, y: i64, w: u32, h: u32, rgba: [u8; 4]) -> Overlay {
    Overlay {
        x,
        y,
        image: image::RgbaImage::from_pixel(w, h, image::Rgba(rgba)),
    }
}

#[test]
fn over_alpha_0_is_noop() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [200, 200, 200, 0]), dst);
}

#[test]
fn over_opaque_replaces_dst() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn over_half_alpha_mixes() {
    let out = over([0, 0, 0, 255], [255, 255, 255, 128]);
    assert_eq!(out, [128, 128, 128, 255]);
}

#[test]
fn composite_writes_only_inside_the_overlay() {
    let mut frame = FrameRGBA::solid(6, 6, [0, 0, 255, 255]);
    composite_overlay(&mut frame, &overlay(2, 3, 2, 2, [255, 0, 0, 255]));

    assert_eq!(frame.pixel(2, 3), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(3, 4), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(1, 3), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(4, 4), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(2, 5), Some([0, 0, 255, 255]));
}

#[test]
fn composite_clips_at_frame_edges() {
    let mut frame = FrameRGBA::solid(4, 4, [0, 0, 0, 255]);
    composite_overlay(&mut frame, &overlay(-2, -2, 3, 3, [9, 9, 9, 255]));
    assert_eq!(frame.pixel(0, 0), Some([9, 9, 9, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));

    let before = frame.clone();
    composite_overlay(&mut frame, &overlay(10, 10, 3, 3, [9, 9, 9, 255]));
    composite_overlay(&mut frame, &overlay(-5, 0, 3, 3, [9, 9, 9, 255]));
    assert_eq!(frame, before);
}
