//! Single-file conversion: decode, color normalization, JPEG encode.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::error::{ConvertError, Result};

/// JPEG encoder fidelity on the 0-100 scale.
pub const JPEG_QUALITY: u8 = 90;

/// Conversion options.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// JPEG quality (0-100).
    pub quality: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            quality: JPEG_QUALITY,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }
}

/// How a single file fared.
#[derive(Debug)]
pub enum ConvertStatus {
    /// Re-encoded to `output`.
    Converted { output: PathBuf },
    /// Not recognizable as a decodable image, or corrupt image data.
    Unsupported,
    /// Any other failure (open, read, encode, write).
    Failed { message: String },
}

/// Outcome of one conversion attempt.
#[derive(Debug)]
pub struct ConvertResult {
    /// The input file.
    pub path: PathBuf,
    /// Outcome category, mapped 1:1 to the console report.
    pub status: ConvertStatus,
    /// Input size in bytes.
    pub bytes_read: u64,
    /// Output size in bytes (0 unless converted).
    pub bytes_written: u64,
}

/// Derives the sibling output path: the input with its final extension
/// replaced by `.jpg`, or `.jpg` appended when there is none. A `.jpg`
/// input maps onto itself and is overwritten in place.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use rejpeg::converter::output_path;
///
/// assert_eq!(output_path(Path::new("photo.png")), PathBuf::from("photo.jpg"));
/// assert_eq!(output_path(Path::new("scan.webp")), PathBuf::from("scan.jpg"));
/// assert_eq!(output_path(Path::new("README")), PathBuf::from("README.jpg"));
/// ```
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("jpg")
}

/// Converts one file, never propagating: every failure is folded into
/// the returned [`ConvertResult`] so the batch always continues.
pub fn convert_file(path: PathBuf, options: &ConvertOptions) -> ConvertResult {
    let bytes_read = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    match convert_file_internal(&path, options) {
        Ok(output) => {
            let bytes_written = std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
            ConvertResult {
                path,
                status: ConvertStatus::Converted { output },
                bytes_read,
                bytes_written,
            }
        }
        Err(err) if err.is_unrecognized() => ConvertResult {
            path,
            status: ConvertStatus::Unsupported,
            bytes_read,
            bytes_written: 0,
        },
        Err(err) => ConvertResult {
            path,
            status: ConvertStatus::Failed {
                message: err.to_string(),
            },
            bytes_read,
            bytes_written: 0,
        },
    }
}

fn convert_file_internal(path: &Path, options: &ConvertOptions) -> Result<PathBuf> {
    let out_path = output_path(path);

    // Decode completes before the output is created, so re-encoding a
    // .jpg onto itself never reads a half-truncated input.
    let img = decode_image(path)?;
    let img = normalize_color(img);

    let file = File::create(&out_path).map_err(|e| ConvertError::Write {
        file: out_path.clone(),
        reason: e.to_string(),
    })?;
    let mut writer = BufWriter::new(file);

    let encoder = JpegEncoder::new_with_quality(&mut writer, options.quality);
    img.write_with_encoder(encoder)
        .map_err(|e| ConvertError::Encode {
            file: out_path.clone(),
            reason: e.to_string(),
        })?;

    writer.flush().map_err(|e| ConvertError::Write {
        file: out_path.clone(),
        reason: e.to_string(),
    })?;

    Ok(out_path)
}

/// Opens and decodes an image by content sniffing, ignoring the file
/// extension entirely.
fn decode_image(path: &Path) -> Result<DynamicImage> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| ConvertError::Read {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .with_guessed_format()
        .map_err(|e| ConvertError::Read {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if reader.format().is_none() {
        return Err(ConvertError::UnrecognizedImage {
            file: path.to_path_buf(),
        });
    }

    reader
        .decode()
        .map_err(|e| ConvertError::from_decode(path, e))
}

/// Keeps full RGB and single-channel grayscale untouched; everything
/// else (alpha, 16-bit, float) is flattened to RGB8. Alpha is dropped,
/// not composited.
fn normalize_color(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => img,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}
