use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input file not found at {}", .0.display())]
    MissingInput(PathBuf),

    #[error("error reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("error writing to {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("malformed json in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

impl Error {
    /// Classify an error from opening or reading `path`, so that a missing
    /// file is reported as such rather than as a generic read failure.
    pub fn reading(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::MissingInput(path.to_path_buf())
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn writing(path: &Path, source: io::Error) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::MissingInput(_))
    }
}
