use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    errors::{ScanError, ScanResult},
    mbox::MboxReader,
    pipeline::scan_archive,
    types::Payment,
};

/// Configures where an archive comes from and runs the scan.
///
/// Content given with [`ScanBuilder::content`] wins over a path.
#[derive(Default)]
pub struct ScanBuilder {
    content: Option<Vec<u8>>,
    path: Option<PathBuf>,
}

impl ScanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Scans the archive, dumping the body of a payment notice without an
    /// amount to standard output.
    pub fn scan(self) -> ScanResult<Vec<Payment>> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.scan_with_diagnostics(&mut out)
    }

    pub fn scan_with_diagnostics<W: Write>(self, diagnostics: &mut W) -> ScanResult<Vec<Payment>> {
        match (self.content, self.path) {
            (Some(content), _) => scan_archive(MboxReader::new(content.as_slice()), diagnostics),
            (None, Some(path)) => scan_archive(MboxReader::open(path)?, diagnostics),
            (None, None) => Err(ScanError::MissingContentAndPath),
        }
    }
}
