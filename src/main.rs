//! rejpeg - batch image to JPEG converter
//!
//! Entry point.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use rejpeg::{
    cli::Args,
    converter::{convert_file, ConvertOptions, ConvertStatus},
    scanner::collect_candidates,
    stats::Statistics,
};

fn main() -> Result<()> {
    let _args = Args::parse();

    let cwd = std::env::current_dir().context("cannot resolve the working directory")?;

    print_header(&cwd);

    let candidates = collect_candidates(&cwd)?;

    if candidates.is_empty() {
        println!("{}", "Nothing to convert.".yellow());
        return Ok(());
    }

    println!(
        "Found {} file(s)\n",
        candidates.len().to_string().bright_green()
    );

    let mut stats = Statistics::new(candidates.len());
    let pb = create_progress_bar(candidates.len());
    let options = ConvertOptions::new();

    // One file at a time; a failure never stops the batch.
    for path in candidates {
        let result = convert_file(path, &options);
        pb.inc(1);

        match &result.status {
            ConvertStatus::Converted { output } => {
                stats.record_converted(result.bytes_read, result.bytes_written);
                println!(
                    "{} {} -> {}",
                    "OK:".green().bold(),
                    result.path.display(),
                    output.display()
                );
            }
            ConvertStatus::Unsupported => {
                stats.record_unsupported();
                println!(
                    "{} {}",
                    "UNSUPPORTED/CORRUPT:".yellow().bold(),
                    result.path.display()
                );
            }
            ConvertStatus::Failed { message } => {
                stats.record_failed();
                println!(
                    "{} {} -> {}",
                    "ERROR:".red().bold(),
                    result.path.display(),
                    message
                );
            }
        }
    }

    pb.finish_and_clear();
    stats.print_summary();

    // Per-file outcomes never change the exit code.
    Ok(())
}

fn print_header(cwd: &Path) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 📸 rejpeg - image to JPEG batch converter".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  Directory: {}\n", cwd.display());
}

fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb
}
