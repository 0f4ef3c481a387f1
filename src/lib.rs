//! rejpeg - batch image to JPEG converter
//!
//! Re-encodes every image file in the working directory as a baseline
//! JPEG (quality 90) written alongside the original, skipping backup
//! files and anything that does not decode as an image.
//!
//! # Behavior
//!
//! - Non-recursive scan of the current working directory
//! - Files named `_backup*` (case-insensitive) are never touched
//! - Output is `<base>.jpg` next to the input, overwriting silently
//! - Color modes other than full RGB or single-channel grayscale are
//!   flattened to RGB (alpha is dropped, not composited)
//! - Per-file failures are reported and skipped; the batch never aborts
//!
//! # Example
//!
//! ```bash
//! cd ~/Pictures/incoming
//! rejpeg
//! ```

pub mod cli;
pub mod converter;
pub mod error;
pub mod scanner;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use converter::{convert_file, output_path, ConvertOptions, ConvertResult, ConvertStatus};
pub use error::{ConvertError, Result};
pub use scanner::{collect_candidates, is_backup_name};
pub use stats::{format_bytes, format_duration, Statistics};
