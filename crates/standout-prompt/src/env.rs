//! Terminal abstractions for testability.
//!
//! Password questions need two things from the environment: whether the
//! input is an interactive terminal, and a way to read a line with echo
//! turned off. [`TerminalInput`] captures both so tests can exercise the
//! terminal path without a real TTY.

use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Abstraction over the interactive terminal behind a prompter's input.
pub trait TerminalInput: Send + Sync {
    /// Check if the input is an interactive terminal.
    ///
    /// Returns `false` for piped or redirected input.
    fn is_terminal(&self) -> bool;

    /// Read one line without echoing it, terminator removed.
    ///
    /// Only called when [`is_terminal`](Self::is_terminal) returns `true`.
    fn read_password(&self) -> io::Result<String>;
}

/// Real terminal backed by stdin and `rpassword`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalInput for RealTerminal {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_password(&self) -> io::Result<String> {
        rpassword::read_password()
    }
}

/// Mock terminal for testing password prompts.
#[derive(Debug)]
pub struct MockTerminal {
    is_terminal: bool,
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: AtomicUsize,
}

impl MockTerminal {
    /// Create a mock that simulates piped input.
    pub fn non_terminal() -> Self {
        Self {
            is_terminal: false,
            responses: vec![],
            response_index: AtomicUsize::new(0),
        }
    }

    /// Create a mock terminal that returns the given password.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses([response])
    }

    /// Create a mock terminal that returns multiple passwords in sequence.
    ///
    /// Once the responses are used up, reads fail with `UnexpectedEof`.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            is_terminal: true,
            responses: responses.into_iter().map(Into::into).collect(),
            response_index: AtomicUsize::new(0),
        }
    }
}

impl TerminalInput for MockTerminal {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_password(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        self.responses.get(idx).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no more mock passwords")
        })
    }
}
