use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can abort a scan of an mbox archive
#[derive(Error, Debug)]
pub enum ScanError {
    /// The archive could not be opened
    #[error("open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Message framing in the archive is broken (detail in the message)
    #[error("invalid mbox format: {0}")]
    ArchiveFormat(String),

    /// Reading the archive failed part way through
    #[error("failed to read mbox: {0}")]
    ArchiveRead(#[source] io::Error),

    /// A payment notice has nothing that looks like money in its body
    #[error("could not find money in body")]
    AmountNotFound,

    /// The Date header of a payment notice is missing or malformed
    #[error("invalid Date header: {0}")]
    DateParse(String),

    /// Writing the report or the diagnostic dump failed
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    /// The builder was used without content or a path
    #[error("Content or path is required")]
    MissingContentAndPath,
}

/// Convenience alias for results carrying a [`ScanError`]
pub type ScanResult<T> = Result<T, ScanError>;
