//! Runtime error types

use hivek_spec::{DecodeError, ImageError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A fault raised while executing. All of these terminate the run loop;
/// the resumable HALT pause is reported through [`crate::Step`] instead.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("memory fault: {len}-byte access at {address:#018x} is outside the program and stack images")]
    MemoryFault { address: u64, len: usize },

    #[error("memory fault: {len}-byte store at {address:#018x} targets the read-only program image")]
    ReadOnlyImage { address: u64, len: usize },

    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failure while loading a program image from a file. Recoverable by the
/// caller (retry with another path); the engine keeps its previous image.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read program image {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("rejected program image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}
