//! Error types for per-file conversion failures.

use std::path::{Path, PathBuf};

use image::ImageError;
use thiserror::Error;

/// Everything that can go wrong while converting a single file.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input is not recognizable as any decodable image, or its
    /// image data is corrupt.
    #[error("unrecognized or corrupt image data: {}", .file.display())]
    UnrecognizedImage { file: PathBuf },

    /// The input could not be opened or read.
    #[error("cannot read {}: {reason}", .file.display())]
    Read { file: PathBuf, reason: String },

    /// JPEG encoding failed.
    #[error("cannot encode {}: {reason}", .file.display())]
    Encode { file: PathBuf, reason: String },

    /// The output file could not be created or written.
    #[error("cannot write {}: {reason}", .file.display())]
    Write { file: PathBuf, reason: String },
}

impl ConvertError {
    /// Maps a decode failure onto the two categories the tool reports:
    /// decode-specific failures (unknown format, corrupt stream) become
    /// `UnrecognizedImage`; anything else (I/O mid-decode, resource
    /// limits) stays a plain read error.
    pub fn from_decode(file: &Path, err: ImageError) -> Self {
        match err {
            ImageError::Unsupported(_) | ImageError::Decoding(_) => Self::UnrecognizedImage {
                file: file.to_path_buf(),
            },
            other => Self::Read {
                file: file.to_path_buf(),
                reason: other.to_string(),
            },
        }
    }

    /// True when the failure should be reported as UNSUPPORTED/CORRUPT
    /// rather than ERROR.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::UnrecognizedImage { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
