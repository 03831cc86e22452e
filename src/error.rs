use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reasons an input file cannot take part in a comparison.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Opening file: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Opening file: {}: no line ending found", path.display())]
    UnknownLineEnding { path: PathBuf },
}

impl OpenError {
    pub fn path(&self) -> &Path {
        match self {
            OpenError::Io { path, .. } | OpenError::UnknownLineEnding { path } => path,
        }
    }
}
