use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Channels per pixel. The engine only handles RGBA rasters.
pub const CHANNELS: usize = 4;

/// A decoded RGBA raster: row-major, R,G,B,A contiguous per pixel.
///
/// Invariant: `data.len() == width * height * 4`. Constructors enforce it;
/// nothing else mutates the dimensions afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps an externally decoded raster. Fails with `InvalidDimensions`
    /// on a zero dimension or a byte count that does not match.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ResampleError> {
        let expected = checked_byte_len(width, height)?;
        if data.len() != expected {
            return Err(ResampleError::InvalidDimensions {
                message: format!(
                    "expected {} bytes for {}x{} RGBA, got {}",
                    expected,
                    width,
                    height,
                    data.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocates a zero-initialized raster, used for resample output.
    pub fn blank(width: u32, height: u32) -> Result<Self, ResampleError> {
        let len = checked_byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte index of pixel `(x, y)`. Caller guarantees in-bounds.
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Reads the RGBA quad at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<[u8; CHANNELS], ResampleError> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }
        let i = self.offset(x, y);
        Ok([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Writes the RGBA quad at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: [u8; CHANNELS]) -> Result<(), ResampleError> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&pixel);
        Ok(())
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> ResampleError {
        ResampleError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Raw bytes for the encode collaborator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

fn checked_byte_len(width: u32, height: u32) -> Result<usize, ResampleError> {
    if width == 0 || height == 0 {
        return Err(ResampleError::InvalidDimensions {
            message: format!("dimensions must be positive, got {}x{}", width, height),
        });
    }
    // u32 * u32 * 4 fits in u64; the usize conversion can still overflow on
    // 32-bit targets.
    let len = width as u64 * height as u64 * CHANNELS as u64;
    usize::try_from(len).map_err(|_| ResampleError::InvalidDimensions {
        message: format!("{}x{} RGBA does not fit in memory", width, height),
    })
}

/// Interpolation method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Nearest,
    Bilinear,
    Bicubic,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Nearest => "nearest",
            Method::Bilinear => "bilinear",
            Method::Bicubic => "bicubic",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(Method::Nearest),
            "bilinear" => Ok(Method::Bilinear),
            "bicubic" => Ok(Method::Bicubic),
            other => Err(ResampleError::UnsupportedMethod {
                requested: other.to_string(),
            }),
        }
    }
}

/// One resize invocation: source raster, target dimensions, method.
/// Constructed per call and not retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResizeRequest {
    pub source: PixelBuffer,
    pub target_width: u32,
    pub target_height: u32,
    pub method: Method,
}

/// Per-axis source/target dimension ratios. Derived per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    pub fn from_dims(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> Self {
        Self {
            x: src_w as f64 / dst_w as f64,
            y: src_h as f64 / dst_h as f64,
        }
    }
}

/// Structured error taxonomy with stable codes.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ResampleError {
    #[error("E_RESIZE_DIMS: invalid dimensions: {message}")]
    InvalidDimensions { message: String },

    #[error("E_RESIZE_LIMIT: output of {requested_pixels} pixels exceeds limit of {max_pixels}")]
    DimensionsTooLarge {
        requested_pixels: u64,
        max_pixels: u64,
    },

    #[error("E_RESIZE_METHOD: unsupported method '{requested}' (expected nearest, bilinear or bicubic)")]
    UnsupportedMethod { requested: String },

    // Internal invariant violation. The coordinate mapper clamps every
    // source index before access, so this never reaches a caller.
    #[error("E_RASTER_BOUNDS: access at ({x}, {y}) outside {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("E_IO_DECODE: image decode failed: {message}")]
    DecodeFailed { message: String },

    #[error("E_IO_ENCODE: image encode failed: {message}")]
    EncodeFailed { message: String },
}

impl ResampleError {
    /// Stable error code for logging and monitoring.
    pub fn code(&self) -> &'static str {
        match self {
            ResampleError::InvalidDimensions { .. } => "E_RESIZE_DIMS",
            ResampleError::DimensionsTooLarge { .. } => "E_RESIZE_LIMIT",
            ResampleError::UnsupportedMethod { .. } => "E_RESIZE_METHOD",
            ResampleError::OutOfBounds { .. } => "E_RASTER_BOUNDS",
            ResampleError::DecodeFailed { .. } => "E_IO_DECODE",
            ResampleError::EncodeFailed { .. } => "E_IO_ENCODE",
        }
    }
}
