//! Main entry point for the runshield CLI application.
//!
//! This binary lists or extracts the files of an InstallShield 3.0 `.Z`
//! archive, following split archives across their part files.

use anyhow::{Context, Result};
use clap::Parser;
use glob::Pattern;
use std::path::Path;

use runshield::{ArchiveContainer, Cli, FileEntry};

/// Application entry point.
///
/// Parses command-line arguments and dispatches to listing or extraction.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    runshield::logging::init(cli.verbose);

    let patterns = compile_patterns(&cli.patterns)?;
    let archive = ArchiveContainer::open(Path::new(&cli.archive), &cli.encoding)
        .await
        .with_context(|| format!("cannot open archive {}", cli.archive))?;

    if cli.list {
        list_files(&archive, &patterns, &cli)
    } else {
        extract_files(&archive, &patterns, &cli).await
    }
}

/// Compile glob patterns, lowercased because archive paths are Windows
/// paths and compare case-insensitively.
fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(&p.to_lowercase()).with_context(|| format!("invalid pattern {p:?}"))
        })
        .collect()
}

/// With no patterns everything matches.
fn matches(patterns: &[Pattern], path: &str) -> bool {
    if patterns.is_empty() {
        return true;
    }
    let path = path.to_lowercase();
    patterns.iter().any(|p| p.matches(&path))
}

/// List the entries of the loaded part.
fn list_files(archive: &ArchiveContainer, patterns: &[Pattern], cli: &Cli) -> Result<()> {
    let mut totals = Totals::default();

    print_table_header();
    for entry in archive.select(archive.files(), cli.all) {
        let path = archive.entry_path(entry);
        if !matches(patterns, &path) {
            continue;
        }
        println!("{}", format_entry(entry, &path));
        totals.add(entry);
    }
    print_table_footer(&totals);

    Ok(())
}

/// Extract the selected entries, reading the file table from part 1.
async fn extract_files(archive: &ArchiveContainer, patterns: &[Pattern], cli: &Cli) -> Result<()> {
    // Only part 1 has correct offsets for files that begin in an earlier part
    let main = archive
        .get_part(1)
        .await
        .context("cannot open the first part of the archive")?;
    let destination = Path::new(&cli.directory);
    let mut totals = Totals::default();

    if !cli.is_quiet() {
        print_table_header();
    }
    for entry in archive.select(main.files(), cli.all) {
        let path = main.entry_path(entry);
        if !matches(patterns, &path) {
            continue;
        }
        if !cli.is_quiet() {
            println!("{}", format_entry(entry, &path));
        }
        main.extract(entry, destination)
            .await
            .with_context(|| format!("cannot extract {path}"))?;
        totals.add(entry);
    }
    if !cli.is_quiet() {
        print_table_footer(&totals);
    }

    Ok(())
}

/// Running sums for the table footer.
#[derive(Default)]
struct Totals {
    original: u64,
    compacted: u64,
    files: usize,
}

impl Totals {
    fn add(&mut self, entry: &FileEntry) {
        self.original += entry.original_size as u64;
        self.compacted += entry.compacted_size as u64;
        self.files += 1;
    }
}

fn print_table_header() {
    println!(
        " {:<8} {:<5} {:<8} {:<4} {:<8} Name",
        "Date", "Time", "OrigSize", "Attr", "CompSize"
    );
    println!(
        " {} {} {} {} {} {}",
        "=".repeat(8),
        "=".repeat(5),
        "=".repeat(8),
        "=".repeat(4),
        "=".repeat(8),
        "=".repeat(4)
    );
}

fn print_table_footer(totals: &Totals) {
    let rule = format!(" {:8} {:5} {} {:4} {} {}", "", "", "=".repeat(8), "", "-".repeat(8), "-".repeat(4));
    println!("{rule}");
    println!(
        " {:8} {:5} {:<8} {:4} {:<8} FileCount",
        "", "", "OrigSize", "", "CompSize"
    );
    println!("{rule}");
    println!(
        " {:8} {:5} {:>8} {:4} {:>8} {:>9}",
        "", "", totals.original, "", totals.compacted, totals.files
    );
}

/// One listing row: date, time, sizes, attributes and path.
fn format_entry(entry: &FileEntry, path: &str) -> String {
    let stamp = entry
        .date
        .to_naive()
        .map(|dt| dt.format("%y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| format!("{:<14}", "??-??-?? ??:??"));
    format!(
        " {} {:>8} {} {:>8} {}",
        stamp,
        entry.original_size,
        entry.attributes(),
        entry.compacted_size,
        path
    )
}
