//! Console output and reports.
//!
//! Answers and reports go to stdout; per-day failures go to stderr so the
//! answers can be piped on their own.

use crate::error::Result;
use crate::models::puzzle::PuzzleEntry;
use crate::models::report::SolveRecord;
use clap::ValueEnum;
use std::{
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

/// Shape of the `solve` report.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Two lines per day: part one, then part two
    #[default]
    Text,
    /// Pretty printed JSON array
    Json,
    /// One CSV row per day
    Csv,
}

/// Prints the `solve` report on stdout, and failures on stderr.
pub fn print_report(records: &[SolveRecord], format: ReportFormat) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    write_report(&mut stdout.lock(), &mut stderr.lock(), records, format)
}

pub fn write_report(
    out: &mut impl Write,
    errors: &mut impl Write,
    records: &[SolveRecord],
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(out, errors, records)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text(
    out: &mut impl Write,
    errors: &mut impl Write,
    records: &[SolveRecord],
) -> Result<()> {
    let with_headers = records.len() > 1;

    for record in records {
        if with_headers {
            writeln!(out, "--- Day {}: {} ---", record.day, record.title)?;
        }
        match (&record.part_one, &record.part_two, &record.error) {
            (Some(part_one), Some(part_two), None) => {
                writeln!(out, "{}", part_one)?;
                writeln!(out, "{}", part_two)?;
            }
            (_, _, error) => {
                out.flush()?;
                writeln!(
                    errors,
                    "error: day {}: {}",
                    record.day,
                    error.as_deref().unwrap_or("no answer")
                )?;
            }
        }
    }

    Ok(())
}

/// Prints the puzzle index, as a plain list or as the README's Markdown list.
pub fn print_index(entries: &[PuzzleEntry], markdown: bool) -> Result<()> {
    write_index(&mut io::stdout().lock(), entries, markdown)
}

pub fn write_index(out: &mut impl Write, entries: &[PuzzleEntry], markdown: bool) -> Result<()> {
    for entry in entries {
        if markdown {
            writeln!(out, "- [Day {}: {}]({})", entry.day, entry.title, entry.link)?;
        } else {
            writeln!(out, "{}. {}", entry.day, entry.title)?;
        }
    }
    Ok(())
}

/// Reports where a downloaded input was stored.
pub fn print_fetch_summary(day: u8, path: &Path, bytes: usize) {
    println!(
        "⏬ Input of day {} downloaded!\n\t📂 Saved {} bytes to '{}'",
        day,
        bytes,
        path.display()
    );
}

fn all_solved(records: &[SolveRecord]) -> bool {
    records.iter().all(SolveRecord::is_ok)
}

/// Exit status of a `solve` run: failure if any day failed.
pub fn exit_code(records: &[SolveRecord]) -> ExitCode {
    if all_solved(records) {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
