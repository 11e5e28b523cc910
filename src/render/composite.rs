use crate::foundation::math::mul_div255_u16;
use crate::render::frame::FrameRGBA;
use crate::render::overlay::Overlay;

/// Straight-alpha source-over of one pixel onto an opaque destination.
pub fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let a = u16::from(src[3]);
    if a == 0 {
        return dst;
    }
    if a == 255 {
        return [src[0], src[1], src[2], 255];
    }

    let inv = 255 - a;
    let mut out = [0u8; 4];
    for i in 0..3 {
        let v = mul_div255_u16(u16::from(src[i]), a) + mul_div255_u16(u16::from(dst[i]), inv);
        out[i] = v.min(255) as u8;
    }
    out[3] = 255;
    out
}

/// Blend `overlay` into `frame` at its offset. Parts falling outside the frame are clipped.
pub fn composite_overlay(frame: &mut FrameRGBA, overlay: &Overlay) {
    let (ow, oh) = overlay.image.dimensions();
    let fw = i64::from(frame.width);
    let fh = i64::from(frame.height);

    let x_start = overlay.x.max(0);
    let y_start = overlay.y.max(0);
    let x_end = (overlay.x + i64::from(ow)).min(fw);
    let y_end = (overlay.y + i64::from(oh)).min(fh);
    if x_start >= x_end || y_start >= y_end {
        return;
    }

    for fy in y_start..y_end {
        let sy = (fy - overlay.y) as u32;
        let row = (fy * fw) as usize * 4;
        for fx in x_start..x_end {
            let sx = (fx - overlay.x) as u32;
            let src = overlay.image.get_pixel(sx, sy).0;
            let i = row + fx as usize * 4;
            let dst = [
                frame.data[i],
                frame.data[i + 1],
                frame.data[i + 2],
                frame.data[i + 3],
            ];
            frame.data[i..i + 4].copy_from_slice(&over(dst, src));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
