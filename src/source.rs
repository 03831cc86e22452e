use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::OpenError;
use crate::line_ending::{self, skip_crlf, LineEnding};

/// A sniffed stream whose lines have not been counted yet.
#[derive(Debug)]
pub struct Unread<R> {
    name: PathBuf,
    reader: R,
    ending: LineEnding,
}

impl<R: BufRead + Seek> Unread<R> {
    pub fn sniff(name: impl Into<PathBuf>, mut reader: R) -> Result<Self, OpenError> {
        let name = name.into();
        let ending = match line_ending::sniff(&mut reader) {
            Ok(ending) => ending,
            Err(source) => return Err(OpenError::Io { path: name, source }),
        };
        if !ending.is_known() {
            return Err(OpenError::UnknownLineEnding { path: name });
        }
        Ok(Self {
            name,
            reader,
            ending,
        })
    }

    pub fn line_ending(&self) -> LineEnding {
        self.ending
    }

    /// Counting pass: splits the whole stream, then rewinds it for reading.
    pub fn count(mut self) -> io::Result<LineSource<R>> {
        let mut line_count = 0;
        let mut scratch = Vec::new();
        while next_line(&mut self.reader, self.ending, &mut scratch)? {
            line_count += 1;
        }
        self.reader.seek(SeekFrom::Start(0))?;
        debug!(
            "{}: {} lines split on {}",
            self.name.display(),
            line_count,
            self.line_ending().escaped()
        );

        Ok(LineSource {
            name: self.name,
            reader: self.reader,
            ending: self.ending,
            line_count,
        })
    }
}

/// Counted stream, read forward one line at a time during comparison.
#[derive(Debug)]
pub struct LineSource<R = BufReader<File>> {
    name: PathBuf,
    reader: R,
    ending: LineEnding,
    line_count: usize,
}

impl LineSource {
    pub fn open(path: &Path) -> Result<Self, OpenError> {
        let file = File::open(path).map_err(|source| OpenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(path, BufReader::new(file))
    }
}

impl<R: BufRead + Seek> LineSource<R> {
    pub fn from_reader(name: impl Into<PathBuf>, reader: R) -> Result<Self, OpenError> {
        let unread = Unread::sniff(name, reader)?;
        let path = unread.name.clone();
        unread
            .count()
            .map_err(|source| OpenError::Io { path, source })
    }

    /// Next line without its terminator, or `None` once the stream is exhausted.
    ///
    /// With `annotate` the escaped ending (`\n`, `\r\n`) is appended as text.
    pub fn read_line(&mut self, annotate: bool) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if !next_line(&mut self.reader, self.ending, &mut line)? {
            return Ok(None);
        }
        if annotate {
            line.extend_from_slice(self.ending.escaped().as_bytes());
        }
        Ok(Some(line))
    }
}

impl<R> LineSource<R> {
    pub fn name(&self) -> &Path {
        &self.name
    }

    pub fn line_ending(&self) -> LineEnding {
        self.ending
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }
}

/// Fills `buf` with the next line. Returns false at end of stream.
fn next_line<R: BufRead>(reader: &mut R, ending: LineEnding, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    let Some(delim) = ending.delimiter() else {
        return Ok(false);
    };
    if reader.read_until(delim, buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&delim) {
        buf.pop();
    }
    skip_crlf(reader, ending)?;
    Ok(true)
}
