use kurbo::{Ellipse, Point, Rect, Shape as _};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{PathlapseError, PathlapseResult};
use crate::foundation::math::mul_div255_u8;
use crate::pathway::model::{ShapeKind, VisualElement};
use crate::render::blur::blur_mask;

/// How element overlays are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Gaussian mask blur; 0 keeps hard edges.
    pub blur_radius: u32,
    /// 0 is fully opaque, 255 invisible.
    pub transparency: u8,
    /// Size multiplier applied around the element's centre, `>= 1.0`.
    pub scale: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            blur_radius: 0,
            transparency: 0,
            scale: 1.0,
        }
    }
}

/// A straight-alpha RGBA patch and where its top-left corner lands on the frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub x: i64,
    pub y: i64,
    pub image: image::RgbaImage,
}

/// Final per-pixel alpha of one element's overlay, independent of its color.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayMask {
    pub x: i64,
    pub y: i64,
    pub alpha: image::GrayImage,
}

impl OverlayMask {
    /// Fill the mask with `color`.
    pub fn tint(&self, color: Rgb8) -> Overlay {
        let (w, h) = self.alpha.dimensions();
        let image = image::RgbaImage::from_fn(w, h, |x, y| {
            image::Rgba(color.to_rgba(self.alpha.get_pixel(x, y).0[0]))
        });
        Overlay {
            x: self.x,
            y: self.y,
            image,
        }
    }
}

/// Build the blurred, transparency-scaled alpha mask of one element.
///
/// The mask covers the scaled element box padded by `2 * blur_radius` on each side and is placed
/// so the scaled shape stays centred on the original element. `frame` is the `(width, height)` of
/// the target frame: a scaled box larger than the frame, or a blur reach longer than the frame's
/// longest side, is rejected before anything is allocated.
pub fn build_mask(
    element: &VisualElement,
    style: &OverlayStyle,
    frame: (u32, u32),
) -> PathlapseResult<OverlayMask> {
    if !style.scale.is_finite() || style.scale < 1.0 {
        return Err(PathlapseError::validation("overlay scale must be >= 1.0"));
    }

    let (w, h) = (element.width(), element.height());
    let sw = scaled_side(w, style.scale, frame.0, "width")?;
    let sh = scaled_side(h, style.scale, frame.1, "height")?;
    let pad = i64::from(style.blur_radius) * 2;
    if pad > i64::from(frame.0.max(frame.1)) {
        return Err(PathlapseError::render(format!(
            "blur radius {} reaches past the {}x{} frame",
            style.blur_radius, frame.0, frame.1
        )));
    }

    // Both sides are bounded by the frame, so the padded canvas fits in u32.
    let canvas_w = u32::try_from(sw + 2 * pad)
        .map_err(|_| PathlapseError::render("overlay width does not fit in u32"))?;
    let canvas_h = u32::try_from(sh + 2 * pad)
        .map_err(|_| PathlapseError::render("overlay height does not fit in u32"))?;

    let mut alpha = blur_mask(
        &shape_mask(element.shape, canvas_w, canvas_h, pad, sw, sh),
        style.blur_radius,
    )?;
    let opacity = 255 - u16::from(style.transparency);
    for px in alpha.pixels_mut() {
        px.0[0] = mul_div255_u8(u16::from(px.0[0]), opacity);
    }

    Ok(OverlayMask {
        x: element.x0 - (sw - w) / 2 - pad,
        y: element.y0 - (sh - h) / 2 - pad,
        alpha,
    })
}

/// Build the colored, soft-edged overlay for one element.
///
/// Its alpha is the element shape, blurred, then scaled by `1 - transparency / 255`; see
/// [`build_mask`] for placement and size limits.
pub fn build_overlay(
    element: &VisualElement,
    color: Rgb8,
    style: &OverlayStyle,
    frame: (u32, u32),
) -> PathlapseResult<Overlay> {
    Ok(build_mask(element, style, frame)?.tint(color))
}

fn scaled_side(side: i64, scale: f64, limit: u32, what: &str) -> PathlapseResult<i64> {
    let scaled = (side as f64 * scale).round();
    if scaled > f64::from(limit) {
        return Err(PathlapseError::render(format!(
            "overlay {what} {side} scaled by {scale} exceeds the frame {what} {limit}"
        )));
    }
    Ok(scaled as i64)
}

/// 255 inside the shape, 0 elsewhere. Pixels are tested at their centres.
fn shape_mask(
    shape: ShapeKind,
    width: u32,
    height: u32,
    pad: i64,
    sw: i64,
    sh: i64,
) -> image::GrayImage {
    let bounds = Rect::new(pad as f64, pad as f64, (pad + sw) as f64, (pad + sh) as f64);
    let ellipse = Ellipse::from_rect(bounds);
    image::GrayImage::from_fn(width, height, |x, y| {
        let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        let inside = match shape {
            ShapeKind::Rectangle => bounds.contains(p),
            ShapeKind::Circle => ellipse.contains(p),
        };
        image::Luma([if inside { 255 } else { 0 }])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
