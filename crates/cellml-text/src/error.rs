//! CLI-local error type.
//!
//! Parsing itself never fails with a `Result` (see [`crate::process`]); the
//! only fallible operation this workspace has is the CLI binary reading its
//! input, so that's the only place a typed error earns its keep, the same
//! way `faxc-util::error` scopes each error enum to the operation it
//! belongs to rather than sharing one catch-all type.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reading the CLI's input source.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given path could not be read.
    #[error("failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdin could not be read (e.g. it isn't valid UTF-8).
    #[error("failed to read stdin: {source}")]
    Stdin {
        #[source]
        source: std::io::Error,
    },
}
