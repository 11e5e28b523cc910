//! CPU raster work: frames, mask blur, element overlays and alpha compositing.

/// Single-channel Gaussian blur for overlay masks.
pub mod blur;
/// Straight-alpha compositing of overlays into frames.
pub mod composite;
/// Output frame raster.
pub mod frame;
/// Soft-edged colored overlay construction.
pub mod overlay;
