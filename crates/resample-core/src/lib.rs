//! RGBA raster resampling: nearest-neighbor, bilinear and bicubic.
//!
//! The engine consumes and produces decoded [`PixelBuffer`] rasters only;
//! codec work (PNG/JPEG decode and encode) belongs to the caller. A
//! resize is a single pure call:
//!
//! ```
//! use raster_types::{Method, PixelBuffer, ResizeRequest};
//! use resample_core::resample;
//!
//! let source = PixelBuffer::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
//! let request = ResizeRequest {
//!     source,
//!     target_width: 4,
//!     target_height: 2,
//!     method: Method::Bilinear,
//! };
//! let output = resample(&request).unwrap();
//! assert_eq!(output.as_bytes().len(), 4 * 2 * 4);
//! ```

pub mod coord;
pub mod kernel;
mod resample;
mod validate;

pub use raster_types::{
    Method, PixelBuffer, ResampleError, ResizeRequest, ScaleFactors, CHANNELS,
};
pub use resample::{resample, resample_with_limits};
pub use validate::{validate, ResampleLimits, DEFAULT_MAX_OUTPUT_PIXELS};
