//! End-of-scan reporting
//!
//! Prints a header before the walk and a summary block after it. There is
//! no live progress display; this is one-shot output around a blocking
//! scan.

use crate::config::ScanConfig;
use crate::walker::ScanStats;
use console::style;
use humansize::{format_size, BINARY};

/// Print a header at the start of the scan
pub fn print_header(config: &ScanConfig) {
    println!();
    println!(
        "{} {}",
        style("dirscan").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Source:").bold(), config.source.display());
    println!(
        "  {} {}",
        style("Database:").bold(),
        config.database.display()
    );
    println!(
        "  {} {:?}/{:?}, {} cache pages",
        style("Profile:").bold(),
        config.profile.durability,
        config.profile.journal,
        format_number(config.profile.cache_pages as u64),
    );
    println!();
}

/// Print a summary of the scan results
pub fn print_summary(stats: &ScanStats, db_path: &str) {
    let duration_secs = stats.duration.as_secs_f64();

    println!();
    println!("{}", style("Scan Complete").green().bold());
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Files:").bold(), format_number(stats.files));
    println!(
        "  {} {}",
        style("Total Size:").bold(),
        format_size(stats.bytes, BINARY)
    );
    println!(
        "  {} {:.1}s ({:.0} files/sec)",
        style("Duration:").bold(),
        duration_secs,
        stats.files_per_second()
    );
    if stats.skipped > 0 {
        println!(
            "  {} {}",
            style("Skipped:").yellow().bold(),
            format_number(stats.skipped)
        );
    }
    println!("  {} {}", style("Database:").bold(), db_path);
    println!();
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}
