use std::fmt;
use std::io::{self, BufRead, Read, Seek, SeekFrom};

use log::debug;

/// Line terminator convention of a file, decided once from its first terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
    Unknown,
}

impl LineEnding {
    pub fn terminator(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::Crlf => b"\r\n",
            LineEnding::Unknown => b"",
        }
    }

    /// Byte the stream is split on. CRLF splits on `\r` and drops the `\n` after it.
    pub(crate) fn delimiter(self) -> Option<u8> {
        self.terminator().first().copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            LineEnding::Lf => "unix|  lf",
            LineEnding::Crlf => "dos |crlf",
            LineEnding::Unknown => "unknown",
        }
    }

    /// Escaped text appended to annotated lines.
    pub fn escaped(self) -> &'static str {
        match self {
            LineEnding::Lf => "\\n",
            LineEnding::Crlf => "\\r\\n",
            LineEnding::Unknown => "\\0",
        }
    }

    pub fn is_known(self) -> bool {
        self != LineEnding::Unknown
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scans forward for the first `\n` and classifies the stream by it.
///
/// On a match the cursor is rewound to offset 0. When the stream holds no
/// `\n` at all the result is [`LineEnding::Unknown`] and the cursor is left
/// at the end.
pub fn sniff<R: Read + Seek>(reader: &mut R) -> io::Result<LineEnding> {
    let mut window = [0u8; 2];
    let mut byte = [0u8; 1];

    loop {
        if reader.read(&mut byte)? == 0 {
            debug!("no line terminator found");
            return Ok(LineEnding::Unknown);
        }
        window = [window[1], byte[0]];

        let ending = if window == *b"\r\n" {
            LineEnding::Crlf
        } else if window[1] == b'\n' {
            LineEnding::Lf
        } else {
            continue;
        };

        reader.seek(SeekFrom::Start(0))?;
        debug!("detected {} line endings", ending.escaped());
        return Ok(ending);
    }
}

/// Drops a `\n` left behind after splitting a CRLF stream on `\r`.
pub(crate) fn skip_crlf<R: BufRead>(reader: &mut R, ending: LineEnding) -> io::Result<()> {
    if ending != LineEnding::Crlf {
        return Ok(());
    }
    let next = reader.fill_buf()?.first().copied();
    if next == Some(b'\n') {
        reader.consume(1);
    }
    Ok(())
}
