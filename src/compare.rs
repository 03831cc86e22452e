use std::io::{self, BufRead, Seek};

use log::{debug, trace};

use crate::source::LineSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct CompareOptions {
    pub ignore_line_endings: bool,
    pub naive: bool,
    pub quiet: bool,
}

/// One differing line. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff {
    pub line: usize,
    pub a: Vec<u8>,
    pub b: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    IdenticalContent,
    IdenticalContentDifferentEndings,
    ContentDiffers { count: usize },
    LineCountMismatch { a: usize, b: usize },
}

#[derive(Debug)]
pub struct ComparisonResult {
    pub outcome: Outcome,
    pub lines_compared: usize,
    pub differences: Vec<LineDiff>,
    pub line_counts_match: bool,
    pub different_endings: bool,
    pub naive: bool,
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::IdenticalContent | Outcome::IdenticalContentDifferentEndings
        )
    }
}

/// Compares two sources position by position.
///
/// Outside naive mode, differing line counts short-circuit to
/// [`Outcome::LineCountMismatch`] without reading any line. Otherwise every
/// line up to the shorter count is compared and all differences are kept.
pub fn compare<A, B>(
    a: &mut LineSource<A>,
    b: &mut LineSource<B>,
    opts: &CompareOptions,
) -> io::Result<ComparisonResult>
where
    A: BufRead + Seek,
    B: BufRead + Seek,
{
    let different_endings = a.line_ending() != b.line_ending();
    let line_counts_match = a.line_count() == b.line_count();
    let annotate = different_endings && !opts.ignore_line_endings;

    let mut result = ComparisonResult {
        outcome: Outcome::IdenticalContent,
        lines_compared: 0,
        differences: Vec::new(),
        line_counts_match,
        different_endings,
        naive: opts.naive,
    };

    if !opts.naive && !line_counts_match {
        debug!(
            "line counts differ ({} vs {}), skipping line comparison",
            a.line_count(),
            b.line_count()
        );
        result.outcome = Outcome::LineCountMismatch {
            a: a.line_count(),
            b: b.line_count(),
        };
        return Ok(result);
    }

    let shortest = a.line_count().min(b.line_count());
    for i in 0..shortest {
        let line_a = read_expected(a, annotate)?;
        let line_b = read_expected(b, annotate)?;
        result.lines_compared += 1;

        if line_a != line_b {
            trace!("line {} differs", i + 1);
            result.differences.push(LineDiff {
                line: i + 1,
                a: line_a,
                b: line_b,
            });
        }
    }

    result.outcome = if !result.differences.is_empty() {
        Outcome::ContentDiffers {
            count: result.differences.len(),
        }
    } else if different_endings {
        Outcome::IdenticalContentDifferentEndings
    } else {
        Outcome::IdenticalContent
    };
    Ok(result)
}

fn read_expected<R: BufRead + Seek>(src: &mut LineSource<R>, annotate: bool) -> io::Result<Vec<u8>> {
    src.read_line(annotate)?.ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{} ended before its counted lines", src.name().display()),
        )
    })
}
