//! Run statistics and console formatting helpers.

use colored::Colorize;
use std::time::{Duration, Instant};

/// Counters for one batch run. The run is strictly sequential, so
/// plain fields behind `&mut self` are all that is needed.
#[derive(Debug, Default)]
pub struct Statistics {
    /// Files picked up by the scan.
    pub total_files: usize,
    /// Successfully re-encoded.
    pub converted: usize,
    /// Not decodable as an image.
    pub unsupported: usize,
    /// Failed for any other reason.
    pub failed: usize,
    /// Bytes read from inputs.
    pub bytes_read: u64,
    /// Bytes written to outputs.
    pub bytes_written: u64,
    start_time: Option<Instant>,
}

impl Statistics {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    pub fn record_converted(&mut self, bytes_read: u64, bytes_written: u64) {
        self.converted += 1;
        self.bytes_read += bytes_read;
        self.bytes_written += bytes_written;
    }

    pub fn record_unsupported(&mut self) {
        self.unsupported += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// End-of-run summary block.
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 Conversion summary".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!("  Files scanned:   {}", self.total_files);
        println!(
            "  Converted:       {}",
            self.converted.to_string().green()
        );

        if self.unsupported > 0 {
            println!(
                "  Unsupported:     {}",
                self.unsupported.to_string().yellow()
            );
        }
        if self.failed > 0 {
            println!("  Errors:          {}", self.failed.to_string().red());
        }

        println!("  Bytes in:        {}", format_bytes(self.bytes_read));
        println!("  Bytes out:       {}", format_bytes(self.bytes_written));

        if self.total_files > 0 {
            let rate = (self.converted as f64 / self.total_files as f64) * 100.0;
            println!("  Success rate:    {:.1}%", rate);
        }

        println!("  Elapsed:         {}", format_duration(self.elapsed()));
        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// Formats a byte count for humans.
///
/// # Examples
/// ```
/// use rejpeg::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Formats an elapsed duration for humans.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}s", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
        assert_eq!(format_bytes(1073741824), "1.00 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5.000s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
    }

    #[test]
    fn test_statistics_counters() {
        let mut stats = Statistics::new(4);

        stats.record_converted(1024, 512);
        stats.record_converted(2048, 256);
        stats.record_unsupported();
        stats.record_failed();

        assert_eq!(stats.converted, 2);
        assert_eq!(stats.unsupported, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.bytes_read, 3072);
        assert_eq!(stats.bytes_written, 768);
    }
}
