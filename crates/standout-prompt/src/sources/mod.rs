//! Line sources that feed a question.
//!
//! - [`LineSource`] - Read one line from a buffered byte stream
//! - [`SecretSource`] - Read a password, echo-suppressed when on a terminal
//!
//! Both produce a [`ReadOutcome`] per request.

mod line;
mod secret;

use std::io;

pub use line::LineSource;
pub use secret::SecretSource;

/// The result of a single read attempt.
#[derive(Debug)]
pub enum ReadOutcome {
    /// A line was read, terminator removed.
    Value(String),
    /// The stream had nothing left to give.
    EndOfInput,
    /// The underlying stream failed.
    Error(io::Error),
}
