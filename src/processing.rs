use crate::constants::{
    MAX_QUALITY, MIN_QUALITY, MIN_RESIZE_SCALE, QUALITY_STEPS, RESIZE_QUALITY, RESIZE_SCALE_STEP,
    SMALLEST_RESIZE_SCALE, TARGET_SIZE_KB,
};
use crate::error::{AgentError, Result};
use crate::utils::{bytes_to_kb, round2};
use crate::verbose;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct CompressionOptions {
    pub target_size_kb: u64,
    pub quality_steps: Vec<u8>,
    pub resize_quality: u8,
    pub resize_scale_step: f64,
    pub min_resize_scale: f64,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            target_size_kb: TARGET_SIZE_KB,
            quality_steps: QUALITY_STEPS.to_vec(),
            resize_quality: RESIZE_QUALITY,
            resize_scale_step: RESIZE_SCALE_STEP,
            min_resize_scale: MIN_RESIZE_SCALE,
        }
    }
}

impl CompressionOptions {
    /// Default search parameters with an optional target override.
    pub fn new(target_size_kb: Option<u64>) -> Result<Self> {
        let options = Self {
            target_size_kb: target_size_kb.unwrap_or(TARGET_SIZE_KB),
            ..Self::default()
        };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_size_kb == 0 {
            return Err(AgentError::InvalidTargetSize(self.target_size_kb));
        }
        if self.quality_steps.is_empty() {
            return Err(AgentError::EmptyQualitySteps);
        }
        for &quality in self.quality_steps.iter().chain([&self.resize_quality]) {
            if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
                return Err(AgentError::InvalidQuality(quality));
            }
        }
        if !(self.resize_scale_step > 0.0 && self.resize_scale_step < 1.0) {
            return Err(AgentError::InvalidResizeScaleStep(self.resize_scale_step));
        }
        // Scales are kept at two decimals, so 0.01 is the smallest one that exists.
        if !(SMALLEST_RESIZE_SCALE..=1.0).contains(&self.min_resize_scale) {
            return Err(AgentError::InvalidMinResizeScale(self.min_resize_scale));
        }
        Ok(())
    }

    fn meets_target(&self, buffer: &[u8]) -> bool {
        bytes_to_kb(buffer.len() as u64) <= self.target_size_kb as f64
    }
}

/// Outcome of the size-targeting search for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressResult {
    pub buffer: Vec<u8>,
    pub quality: u8,
    /// 1.0 = no resize, 0.64 = 64% of the original dimensions.
    pub resize_scale: f64,
    pub target_met: bool,
    pub output_size_kb: f64,
}

/// A decoded source image that can be re-encoded as JPEG.
pub trait JpegCodec {
    /// Pixel dimensions of the original image.
    fn dimensions(&self) -> (u32, u32);

    /// Encode the original pixels at `quality`. When `bounds` is given the
    /// image is first shrunk to fit inside the box, keeping its aspect ratio.
    fn encode(&self, quality: u8, bounds: Option<(u32, u32)>) -> Result<Vec<u8>>;
}

/// JPEG source decoded with the `image` crate.
pub struct SourceImage {
    image: DynamicImage,
}

impl SourceImage {
    pub fn open(path: &Path) -> Result<Self> {
        let image = ImageReader::open(path)?.decode()?;
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        // The JPEG encoder only accepts 8-bit luma and RGB.
        let image = match image {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => image,
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        };
        Self { image }
    }
}

impl JpegCodec for SourceImage {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn encode(&self, quality: u8, bounds: Option<(u32, u32)>) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

        match bounds.filter(|&(w, h)| w < self.image.width() || h < self.image.height()) {
            Some((w, h)) => {
                let resized = self.image.resize(w, h, FilterType::Lanczos3);
                resized.write_with_encoder(encoder)?;
            }
            None => self.image.write_with_encoder(encoder)?,
        }

        Ok(buffer)
    }
}

/// Bounding box for `scale`, never larger than the original and never empty.
pub fn scaled_bounds(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let scale_dim = |dim: u32| ((dim as f64 * scale).round() as u32).clamp(1, dim.max(1));
    (scale_dim(width), scale_dim(height))
}

/// Search state. Each phase owns its loop position.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Quality { step: usize },
    Resize { scale: f64 },
    Done,
}

/// Re-encodes `codec` until the output fits `options.target_size_kb`.
///
/// Quality steps are tried first, highest to lowest, on the original pixels.
/// If even the lowest quality is too large, the image is shrunk step by step
/// at `resize_quality` until it fits or the scale drops below
/// `min_resize_scale`. The last buffer produced is always returned;
/// `target_met` tells whether it fits.
pub fn compress_to_target<C: JpegCodec + ?Sized>(
    codec: &C,
    options: &CompressionOptions,
) -> Result<CompressResult> {
    options.validate()?;

    let mut buffer = Vec::new();
    let mut quality = options.resize_quality;
    let mut resize_scale = 1.0;
    let mut target_met = false;
    let mut original_dimensions = None;
    let mut phase = Phase::Quality { step: 0 };

    while phase != Phase::Done {
        phase = match phase {
            Phase::Quality { step } => match options.quality_steps.get(step) {
                Some(&step_quality) => {
                    buffer = codec.encode(step_quality, None)?;
                    quality = step_quality;
                    verbose!(
                        "quality {} -> {:.2}KB",
                        step_quality,
                        bytes_to_kb(buffer.len() as u64)
                    );

                    if options.meets_target(&buffer) {
                        target_met = true;
                        Phase::Done
                    } else {
                        Phase::Quality { step: step + 1 }
                    }
                }
                None => Phase::Resize {
                    scale: options.resize_scale_step,
                },
            },
            Phase::Resize { scale } if scale < options.min_resize_scale => Phase::Done,
            Phase::Resize { scale } => {
                let (width, height) = *original_dimensions.get_or_insert_with(|| codec.dimensions());
                let bounds = scaled_bounds(width, height, scale);

                buffer = codec.encode(options.resize_quality, Some(bounds))?;
                quality = options.resize_quality;
                resize_scale = scale;
                verbose!(
                    "resize {:.0}% ({}x{}) at quality {} -> {:.2}KB",
                    scale * 100.0,
                    bounds.0,
                    bounds.1,
                    quality,
                    bytes_to_kb(buffer.len() as u64)
                );

                let next_scale = round2(scale * options.resize_scale_step);
                if options.meets_target(&buffer) {
                    target_met = true;
                    Phase::Done
                } else if next_scale >= scale {
                    // Rounding stalled, e.g. round2(0.01 * 0.8) == 0.01.
                    Phase::Done
                } else {
                    Phase::Resize { scale: next_scale }
                }
            }
            Phase::Done => Phase::Done,
        };
    }

    let output_size_kb = bytes_to_kb(buffer.len() as u64);
    Ok(CompressResult {
        buffer,
        quality,
        resize_scale,
        target_met,
        output_size_kb,
    })
}

/// Decodes the JPEG at `path` and runs [`compress_to_target`] on it.
pub fn compress_file(path: &Path, options: &CompressionOptions) -> Result<CompressResult> {
    let source = SourceImage::open(path)?;
    compress_to_target(&source, options)
}
