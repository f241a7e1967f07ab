use std::{
    io,
    path::{Path, PathBuf},
};

use crate::exit_codes;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source directory not found at {}", .0.display())]
    SourceDirNotFound(PathBuf),

    #[error("input file not found at {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("file name is not valid UTF-8: {}", .0.display())]
    NonUtf8Name(PathBuf),

    /// Marker name that would escape the output directory.
    #[error("refusing to unpack entry {name:?}: {reason}")]
    UnsafeName { name: String, reason: &'static str },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn read(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Error::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Error::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Error::SourceDirNotFound(_)
            | Error::InputNotFound(_)
            | Error::NonUtf8Name(_)
            | Error::UnsafeName { .. } => exit_codes::INVALID_INPUT,
            Error::Read { .. } | Error::Write { .. } => exit_codes::IO_FAILURE,
        }
    }
}
