use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use raster_types::{Method, PixelBuffer, ResampleError, ResizeRequest};
use resample_core::{resample_with_limits, ResampleLimits, DEFAULT_MAX_OUTPUT_PIXELS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resample-cli")]
#[command(about = "Image resize pipeline: decode → resample (nearest/bilinear/bicubic) → PNG encode")]
struct Args {
    /// Input image file (PNG or JPEG)
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Output PNG file path
    #[arg(long, value_name = "FILE")]
    output: PathBuf,

    /// Target width in pixels
    #[arg(long)]
    width: u32,

    /// Target height in pixels
    #[arg(long)]
    height: u32,

    /// Interpolation method: nearest, bilinear or bicubic
    #[arg(long, default_value = "bilinear")]
    method: String,

    /// Maximum output size in pixels
    #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_PIXELS)]
    max_pixels: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Method string is untrusted input; reject it before touching the file
    let method: Method = args.method.parse()?;

    info!("Resample CLI: {:?} -> {:?}", args.input, args.output);

    // Step 1: Decode to a raw RGBA raster
    let source = decode_rgba(&args.input)?;
    info!("Decoded {}x{} RGBA", source.width(), source.height());

    // Step 2: Resample
    let request = ResizeRequest {
        source,
        target_width: args.width,
        target_height: args.height,
        method,
    };
    let limits = ResampleLimits {
        max_output_pixels: args.max_pixels,
    };
    let output = resample_with_limits(&request, &limits)?;
    info!("Resampled to {}x{} via {}", output.width(), output.height(), method);

    // Step 3: Encode as PNG
    encode_png(&args.output, output)?;
    info!("Encoded PNG: {:?}", args.output);

    Ok(())
}

fn decode_rgba(path: &PathBuf) -> Result<PixelBuffer> {
    let decoded = image::open(path)
        .map_err(|e| ResampleError::DecodeFailed {
            message: e.to_string(),
        })
        .with_context(|| format!("failed to decode {:?}", path))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::new(width, height, rgba.into_raw())
        .context("decoded raster has inconsistent dimensions")
}

fn encode_png(path: &PathBuf, buffer: PixelBuffer) -> Result<()> {
    let (width, height) = (buffer.width(), buffer.height());
    let img = image::RgbaImage::from_raw(width, height, buffer.into_bytes())
        .ok_or_else(|| ResampleError::EncodeFailed {
            message: format!("raster bytes do not form a {}x{} image", width, height),
        })?;
    img.save(path)
        .map_err(|e| ResampleError::EncodeFailed {
            message: e.to_string(),
        })
        .with_context(|| format!("failed to encode {:?}", path))?;
    Ok(())
}
