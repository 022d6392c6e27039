//! Password reader.

use std::fmt;
use std::sync::Arc;

use super::{LineSource, ReadOutcome};
use crate::env::TerminalInput;

/// Reads a secret, echo-suppressed when the input is a terminal.
///
/// Without a terminal (no [`TerminalInput`] attached, or one that reports a
/// non-interactive stream) this behaves exactly like [`LineSource`], which
/// lets tests pipe passwords in as plain text.
#[derive(Clone)]
pub struct SecretSource {
    terminal: Option<Arc<dyn TerminalInput>>,
    fallback: LineSource,
}

impl SecretSource {
    /// Create a secret source over `fallback`, using `terminal` when it is
    /// interactive.
    pub fn new(terminal: Option<Arc<dyn TerminalInput>>, fallback: LineSource) -> Self {
        Self { terminal, fallback }
    }

    /// Read the next secret.
    pub fn read_secret(&self) -> ReadOutcome {
        match &self.terminal {
            Some(terminal) if terminal.is_terminal() => match terminal.read_password() {
                Ok(secret) => ReadOutcome::Value(secret),
                Err(e) => ReadOutcome::Error(e),
            },
            _ => self.fallback.read_line(),
        }
    }
}

impl fmt::Debug for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretSource")
            .field("terminal", &self.terminal.is_some())
            .field("fallback", &self.fallback)
            .finish()
    }
}
