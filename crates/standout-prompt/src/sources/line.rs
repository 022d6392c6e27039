//! Buffered line reader.

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::sync::{Arc, Mutex, PoisonError};

use super::ReadOutcome;

type SharedReader = Arc<Mutex<BufReader<Box<dyn Read + Send>>>>;

/// Reads one line at a time from a shared byte stream.
///
/// Clones read from the same buffered stream, so a clone can be moved to a
/// reader thread while the prompter keeps its own handle. The stream cursor
/// only ever advances; bytes buffered by one read are seen by the next.
#[derive(Clone)]
pub struct LineSource {
    reader: SharedReader,
}

impl LineSource {
    /// Wrap a byte stream in a buffered line source.
    pub fn new<R: Read + Send + 'static>(reader: R) -> Self {
        let reader: Box<dyn Read + Send> = Box::new(reader);
        Self {
            reader: Arc::new(Mutex::new(BufReader::new(reader))),
        }
    }

    /// Read the next line with trailing `\r`/`\n` removed.
    ///
    /// The stream ending before a `\n` is [`ReadOutcome::EndOfInput`], even
    /// when some bytes were read. Those bytes are consumed and dropped.
    pub fn read_line(&self) -> ReadOutcome {
        // A reader that panicked mid-read leaves the buffer usable.
        let mut reader = self.reader.lock().unwrap_or_else(PoisonError::into_inner);

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(_) if !line.ends_with('\n') => ReadOutcome::EndOfInput,
            Ok(_) => {
                let trimmed = line.trim_end_matches(&['\r', '\n'][..]);
                ReadOutcome::Value(trimmed.to_string())
            }
            Err(e) => ReadOutcome::Error(e),
        }
    }
}

impl fmt::Debug for LineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSource").finish_non_exhaustive()
    }
}
