use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::cli::Options;
use crate::compare::{compare, ComparisonResult};
use crate::report::{about_line, write_elapsed, write_header, write_result, FileInfo};
use crate::source::LineSource;

/// Opens both files, compares them and writes the full report to `out`.
///
/// Fails only when a file cannot be opened or read; differing files are a
/// normal result.
pub fn run_eolcmp<W: Write>(opts: &Options, out: &mut W) -> Result<ComparisonResult> {
    let mut file_a = LineSource::open(&opts.file_a).context("File a cannot be compared")?;
    let mut file_b = LineSource::open(&opts.file_b).context("File b cannot be compared")?;

    writeln!(out, "{}", about_line())?;
    let started = Instant::now();

    let info_a = FileInfo::from(&file_a);
    let info_b = FileInfo::from(&file_b);
    write_header(out, &info_a, &info_b, opts.compare.ignore_line_endings)?;

    let result = compare(&mut file_a, &mut file_b, &opts.compare)
        .context("Comparison aborted while reading lines")?;
    info!(
        "{:?} (match: {}) after {} lines ({} vs {})",
        result.outcome,
        result.is_match(),
        result.lines_compared,
        info_a.line_count,
        info_b.line_count
    );

    write_result(out, &result, opts.compare.quiet)?;
    write_elapsed(out, started.elapsed())?;
    Ok(result)
}
