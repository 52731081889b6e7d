//! Up-front request validation. Everything that can fail does so here,
//! before the output buffer is allocated; the pixel loop itself cannot
//! fail mid-flight.

use raster_types::{ResampleError, ResizeRequest};
use serde::{Deserialize, Serialize};

/// Default output bound: 256 megapixels (1 GiB of RGBA).
pub const DEFAULT_MAX_OUTPUT_PIXELS: u64 = 268_435_456;

/// Integrator-tunable validation limits. The source raster validated its
/// own dimensions at construction; this bounds what a request may ask
/// for, so untrusted target dimensions cannot drive unbounded
/// allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResampleLimits {
    pub max_output_pixels: u64,
}

impl Default for ResampleLimits {
    fn default() -> Self {
        Self {
            max_output_pixels: DEFAULT_MAX_OUTPUT_PIXELS,
        }
    }
}

/// Rejects malformed requests. `InvalidDimensions` for a zero target
/// dimension, `DimensionsTooLarge` for an output over the configured
/// pixel bound.
pub fn validate(request: &ResizeRequest, limits: &ResampleLimits) -> Result<(), ResampleError> {
    if request.target_width == 0 || request.target_height == 0 {
        return Err(ResampleError::InvalidDimensions {
            message: format!(
                "target dimensions must be positive, got {}x{}",
                request.target_width, request.target_height
            ),
        });
    }

    let requested_pixels = request.target_width as u64 * request.target_height as u64;
    if requested_pixels > limits.max_output_pixels {
        return Err(ResampleError::DimensionsTooLarge {
            requested_pixels,
            max_pixels: limits.max_output_pixels,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_types::{Method, PixelBuffer};

    fn request(w: u32, h: u32) -> ResizeRequest {
        ResizeRequest {
            source: PixelBuffer::blank(2, 2).unwrap(),
            target_width: w,
            target_height: h,
            method: Method::Nearest,
        }
    }

    #[test]
    fn accepts_in_bounds_target() {
        assert!(validate(&request(100, 100), &ResampleLimits::default()).is_ok());
    }

    #[test]
    fn rejects_zero_target() {
        let err = validate(&request(0, 10), &ResampleLimits::default()).unwrap_err();
        assert_eq!(err.code(), "E_RESIZE_DIMS");
        let err = validate(&request(10, 0), &ResampleLimits::default()).unwrap_err();
        assert_eq!(err.code(), "E_RESIZE_DIMS");
    }

    #[test]
    fn rejects_output_over_limit() {
        let limits = ResampleLimits {
            max_output_pixels: 1_000_000,
        };
        let err = validate(&request(1001, 1000), &limits).unwrap_err();
        match err {
            ResampleError::DimensionsTooLarge {
                requested_pixels,
                max_pixels,
            } => {
                assert_eq!(requested_pixels, 1_001_000);
                assert_eq!(max_pixels, 1_000_000);
            }
            other => panic!("expected DimensionsTooLarge, got {other:?}"),
        }
        // exactly at the limit is allowed
        assert!(validate(&request(1000, 1000), &limits).is_ok());
    }

    #[test]
    fn limit_product_does_not_overflow() {
        let limits = ResampleLimits::default();
        let err = validate(&request(u32::MAX, u32::MAX), &limits).unwrap_err();
        assert_eq!(err.code(), "E_RESIZE_LIMIT");
    }

    #[test]
    fn limits_serde_roundtrip() {
        let limits = ResampleLimits {
            max_output_pixels: 42,
        };
        let json = serde_json::to_string(&limits).unwrap();
        let back: ResampleLimits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, limits);
    }
}
