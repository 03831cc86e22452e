use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::compare::{ComparisonResult, Outcome};
use crate::line_ending::LineEnding;
use crate::source::LineSource;
use crate::utils::{decode_best_effort, format_elapsed, lines_noun};

/// What the report shows about each input file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub name: PathBuf,
    pub ending: LineEnding,
    pub line_count: usize,
}

impl<R> From<&LineSource<R>> for FileInfo {
    fn from(src: &LineSource<R>) -> Self {
        Self {
            name: src.name().to_path_buf(),
            ending: src.line_ending(),
            line_count: src.line_count(),
        }
    }
}

pub fn about_line() -> String {
    format!(
        "{} v{} ({} {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}

pub fn write_header<W: Write>(
    w: &mut W,
    a: &FileInfo,
    b: &FileInfo,
    ignore_line_endings: bool,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "File a [{}]: {}", a.ending, a.name.display())?;
    writeln!(w, "File b [{}]: {}", b.ending, b.name.display())?;
    if a.ending != b.ending {
        writeln!(w, "The files use different line endings.")?;
    }
    if ignore_line_endings {
        writeln!(w, "Ignoring line ending differences.")?;
    }
    Ok(())
}

pub fn write_result<W: Write>(w: &mut W, result: &ComparisonResult, quiet: bool) -> io::Result<()> {
    let compared = result.lines_compared;
    match result.outcome {
        Outcome::LineCountMismatch { a, b } => {
            writeln!(w)?;
            writeln!(
                w,
                "The files are not the same because the line counts do not match."
            )?;
            writeln!(w, "File a: {a} {}.", lines_noun(a))?;
            writeln!(w, "File b: {b} {}.", lines_noun(b))?;
            return Ok(());
        }
        _ => write_differences(w, result, quiet)?,
    }

    match result.outcome {
        Outcome::IdenticalContent if result.naive => {
            writeln!(w, "The files match up to line {compared}.")?;
        }
        Outcome::IdenticalContent => {
            writeln!(w, "The files match and have the same line count.")?;
        }
        Outcome::IdenticalContentDifferentEndings if result.naive => {
            writeln!(
                w,
                "The file contents match up to line {compared}, but they have different line endings."
            )?;
        }
        Outcome::IdenticalContentDifferentEndings => {
            writeln!(
                w,
                "The file contents match, but they have different line endings."
            )?;
        }
        Outcome::ContentDiffers { count } => {
            writeln!(w, "The files don't match.")?;
            if result.naive {
                writeln!(w, "Compared up to line {compared}.")?;
            }
            return writeln!(w, "{count} of {compared} {} were different.", lines_noun(compared));
        }
        Outcome::LineCountMismatch { .. } => return Ok(()),
    }
    writeln!(w, "{compared} {} compared.", was_were(compared))
}

fn write_differences<W: Write>(w: &mut W, result: &ComparisonResult, quiet: bool) -> io::Result<()> {
    writeln!(w)?;
    if quiet {
        if result.differences.is_empty() {
            writeln!(w)?;
        }
        return Ok(());
    }
    for (n, diff) in result.differences.iter().enumerate() {
        writeln!(w, "@@ {}, line {}", n + 1, diff.line)?;
        writeln!(w, "File a: {}", decode_best_effort(&diff.a))?;
        writeln!(w, "File b: {}", decode_best_effort(&diff.b))?;
        writeln!(w)?;
    }
    Ok(())
}

pub fn write_elapsed<W: Write>(w: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(w, "Total time taken: {}", format_elapsed(elapsed))
}

fn was_were(count: usize) -> &'static str {
    if count == 1 {
        "line was"
    } else {
        "lines were"
    }
}
