use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use tracing::debug;

use crate::errors::{ScanError, ScanResult};

const SEPARATOR: &[u8] = b"From ";

/// One message block cut out of an mbox archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    from_line: String,
    contents: Vec<u8>,
}

impl RawMessage {
    /// Text following `From ` on the separator line (envelope sender and date).
    pub fn from_line(&self) -> &str {
        &self.from_line
    }

    /// Message bytes, headers and body, with mboxrd quoting undone.
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn into_contents(self) -> Vec<u8> {
        self.contents
    }
}

/// Lazily splits an mbox stream into messages.
///
/// Each message starts at a line beginning with `From `. Lines quoted as
/// `>From `, `>>From ` and so on lose one leading `>`. Iteration stops after
/// the first error.
pub struct MboxReader<R: Read> {
    reader: BufReader<R>,
    pending_from: Option<String>,
    line_number: usize,
    finished: bool,
}

impl MboxReader<File> {
    pub fn open(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScanError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened mbox archive");
        Ok(Self::new(file))
    }
}

impl<R: Read> MboxReader<R> {
    pub fn new(reader: R) -> Self {
        MboxReader {
            reader: BufReader::new(reader),
            pending_from: None,
            line_number: 0,
            finished: false,
        }
    }

    fn read_line(&mut self, line: &mut Vec<u8>) -> ScanResult<usize> {
        line.clear();
        let read = self
            .reader
            .read_until(b'\n', line)
            .map_err(ScanError::ArchiveRead)?;
        if read > 0 {
            self.line_number += 1;
        }
        Ok(read)
    }

    fn first_separator(&mut self) -> ScanResult<Option<String>> {
        let mut line = Vec::with_capacity(80);
        loop {
            if self.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(from_line) = separator(&line) {
                return Ok(Some(from_line));
            }
            if !line.iter().all(u8::is_ascii_whitespace) {
                return Err(ScanError::ArchiveFormat(format!(
                    "line {}: expected a `From ` separator before message content",
                    self.line_number
                )));
            }
        }
    }

    fn read_message(&mut self) -> ScanResult<Option<RawMessage>> {
        let from_line = match self.pending_from.take() {
            Some(from_line) => from_line,
            None => match self.first_separator()? {
                Some(from_line) => from_line,
                None => return Ok(None),
            },
        };

        let mut contents = Vec::with_capacity(1024);
        let mut line = Vec::with_capacity(80);
        loop {
            if self.read_line(&mut line)? == 0 {
                self.finished = true;
                break;
            }
            if let Some(next) = separator(&line) {
                self.pending_from = Some(next);
                break;
            }
            contents.extend_from_slice(unquote(&line));
        }

        Ok(Some(RawMessage {
            from_line,
            contents,
        }))
    }
}

impl<R: Read> Iterator for MboxReader<R> {
    type Item = ScanResult<RawMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished && self.pending_from.is_none() {
            return None;
        }

        match self.read_message() {
            Ok(Some(message)) => Some(Ok(message)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                self.pending_from = None;
                Some(Err(err))
            }
        }
    }
}

fn separator(line: &[u8]) -> Option<String> {
    let rest = line.strip_prefix(SEPARATOR)?;
    Some(String::from_utf8_lossy(rest).trim_end().to_string())
}

fn unquote(line: &[u8]) -> &[u8] {
    let quotes = line.iter().take_while(|&&ch| ch == b'>').count();
    if quotes > 0 && line[quotes..].starts_with(SEPARATOR) {
        &line[1..]
    } else {
        line
    }
}
