//! Command-line surface.
//!
//! The tool is deliberately flag-free: it always operates on the
//! process working directory with fixed settings. clap still supplies
//! `--help`/`--version` and turns any stray argument into a usage
//! error.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rejpeg",
    version,
    about = "Batch-convert every image in the current directory to baseline JPEG",
    long_about = r#"
rejpeg
======

Re-encodes every image file in the current working directory as a
baseline JPEG (quality 90), written next to the original with the
extension replaced by .jpg. Existing .jpg outputs are overwritten;
originals are never deleted or renamed.

Skipped:
  • files whose name starts with "_backup" (case-insensitive)
  • directories and anything that is not a regular file
  • files that do not decode as an image (reported, then skipped)

One line is printed per attempted file:
  OK: <input> -> <output>
  UNSUPPORTED/CORRUPT: <input>
  ERROR: <input> -> <message>
"#
)]
pub struct Args {}
