//! Output-to-source coordinate mapping.
//!
//! Nearest uses a plain floor mapping; bilinear and bicubic use
//! center-of-pixel sampling. The mismatch is intentional: the nearest
//! convention is kept for output compatibility, and unifying it would
//! change every nearest-neighbor result.

use raster_types::ScaleFactors;

/// Nearest-neighbor source index along one axis: `floor(out * scale)`
/// clamped into `[0, src_dim - 1]`. No half-pixel offset.
#[inline]
pub fn nearest_source(out: u32, scale: f64, src_dim: u32) -> u32 {
    let src = (out as f64 * scale).floor();
    clamp_index(src as i64, src_dim)
}

/// Center-of-pixel source coordinate for the interpolating methods:
/// `(out + 0.5) * scale - 0.5`, split into integer base and fraction.
/// The base may be -1 at the top/left edge; callers clamp each tap.
#[inline]
pub fn centered_source(out: u32, scale: f64) -> (i64, f64) {
    let src = (out as f64 + 0.5) * scale - 0.5;
    let base = src.floor();
    (base as i64, src - base)
}

/// Clamps a source-space index into `[0, dim - 1]`. Edge pixels repeat
/// rather than wrap or error, so every tap stays in bounds.
#[inline]
pub fn clamp_index(i: i64, dim: u32) -> u32 {
    i.clamp(0, dim as i64 - 1) as u32
}

/// Per-axis scale factors for a resize request.
#[inline]
pub fn scale_factors(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> ScaleFactors {
    ScaleFactors::from_dims(src_w, src_h, dst_w, dst_h)
}
