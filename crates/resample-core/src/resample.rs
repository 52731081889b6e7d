//! The per-pixel, per-channel resampling loops.

use raster_types::{Method, PixelBuffer, ResampleError, ResizeRequest, ScaleFactors, CHANNELS};
use tracing::{info, span, Level};

use crate::coord::{centered_source, clamp_index, nearest_source};
use crate::kernel::{bilinear_weights, cubic_weight};
use crate::validate::{validate, ResampleLimits};

/// Resamples a request under the default limits.
///
/// Pure and stateless: each call reads its own source and writes its own
/// freshly allocated output, so any number of calls may run on separate
/// threads without coordination.
pub fn resample(request: &ResizeRequest) -> Result<PixelBuffer, ResampleError> {
    resample_with_limits(request, &ResampleLimits::default())
}

/// Resamples a request under explicit limits. Validation runs before the
/// output buffer is allocated; past that point the loop runs to
/// completion and the returned buffer is always fully populated.
pub fn resample_with_limits(
    request: &ResizeRequest,
    limits: &ResampleLimits,
) -> Result<PixelBuffer, ResampleError> {
    let span = span!(
        Level::INFO,
        "resample",
        method = request.method.as_str(),
        src_w = request.source.width(),
        src_h = request.source.height(),
        dst_w = request.target_width,
        dst_h = request.target_height,
    );
    let _guard = span.enter();

    validate(request, limits)?;

    let start = std::time::Instant::now();
    let scale = ScaleFactors::from_dims(
        request.source.width(),
        request.source.height(),
        request.target_width,
        request.target_height,
    );

    let mut output = PixelBuffer::blank(request.target_width, request.target_height)?;

    match request.method {
        Method::Nearest => resample_nearest(&request.source, &mut output, scale)?,
        Method::Bilinear => resample_bilinear(&request.source, &mut output, scale)?,
        Method::Bicubic => resample_bicubic(&request.source, &mut output, scale)?,
    }

    info!(
        method = request.method.as_str(),
        duration_ms = start.elapsed().as_millis() as u64,
        output_pixels = request.target_width as u64 * request.target_height as u64,
        "Resample completed"
    );

    Ok(output)
}

/// Direct pixel copy from the floor-mapped, clamped source coordinate.
/// Every output pixel is byte-identical to some source pixel.
fn resample_nearest(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    scale: ScaleFactors,
) -> Result<(), ResampleError> {
    for y in 0..dst.height() {
        // one source row per output row
        let src_y = nearest_source(y, scale.y, src.height());
        for x in 0..dst.width() {
            let src_x = nearest_source(x, scale.x, src.width());
            let pixel = src.get(src_x, src_y)?;
            dst.set(x, y, pixel)?;
        }
    }
    Ok(())
}

/// Convex blend of the 2x2 neighborhood around the centered source
/// coordinate. Output channels stay within the neighborhood's range.
fn resample_bilinear(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    scale: ScaleFactors,
) -> Result<(), ResampleError> {
    for y in 0..dst.height() {
        let (by, fy) = centered_source(y, scale.y);
        let y0 = clamp_index(by, src.height());
        let y1 = clamp_index(by + 1, src.height());

        for x in 0..dst.width() {
            let (bx, fx) = centered_source(x, scale.x);
            let x0 = clamp_index(bx, src.width());
            let x1 = clamp_index(bx + 1, src.width());

            let [w00, w10, w01, w11] = bilinear_weights(fx, fy);
            let p00 = src.get(x0, y0)?;
            let p10 = src.get(x1, y0)?;
            let p01 = src.get(x0, y1)?;
            let p11 = src.get(x1, y1)?;

            let mut pixel = [0u8; CHANNELS];
            for c in 0..CHANNELS {
                let value = w00 * p00[c] as f64
                    + w10 * p10[c] as f64
                    + w01 * p01[c] as f64
                    + w11 * p11[c] as f64;
                pixel[c] = quantize(value);
            }
            dst.set(x, y, pixel)?;
        }
    }
    Ok(())
}

/// Cubic convolution over the 4x4 neighborhood. Each channel divides by
/// the sum of the 16 weights actually applied rather than trusting the
/// kernel's unity-sum property: edge clamping duplicates taps, and the
/// renormalization keeps clamped borders artifact-free
/// (WeightNormalizationPolicy = RenormalizeByActualSum).
fn resample_bicubic(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    scale: ScaleFactors,
) -> Result<(), ResampleError> {
    for y in 0..dst.height() {
        let (by, fy) = centered_source(y, scale.y);
        for x in 0..dst.width() {
            let (bx, fx) = centered_source(x, scale.x);

            let mut acc = [0.0f64; CHANNELS];
            let mut weight_sum = 0.0f64;

            for j in -1i64..=2 {
                let wy = cubic_weight(j as f64 - fy);
                let sy = clamp_index(by + j, src.height());
                for i in -1i64..=2 {
                    let w = cubic_weight(i as f64 - fx) * wy;
                    let sx = clamp_index(bx + i, src.width());
                    let tap = src.get(sx, sy)?;
                    for c in 0..CHANNELS {
                        acc[c] += w * tap[c] as f64;
                    }
                    weight_sum += w;
                }
            }

            let mut pixel = [0u8; CHANNELS];
            for c in 0..CHANNELS {
                pixel[c] = quantize(acc[c] / weight_sum);
            }
            dst.set(x, y, pixel)?;
        }
    }
    Ok(())
}

/// Round half away from zero, then clamp into the byte range. Bicubic
/// can overshoot on both sides; clamping happens after rounding.
#[inline]
fn quantize(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::quantize;

    #[test]
    fn quantize_rounds_then_clamps() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(127.5), 128);
        assert_eq!(quantize(254.4), 254);
        assert_eq!(quantize(255.6), 255);
        assert_eq!(quantize(300.0), 255);
        assert_eq!(quantize(-4.2), 0);
    }
}
