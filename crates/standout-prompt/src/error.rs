//! Error types for prompting.

use std::io;

/// Errors that end a question without an answer.
///
/// Validation failures are not errors: they are printed and the question is
/// asked again.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Input ran out with no default and the question is not optional.
    #[error("Input is required.")]
    Required,

    /// The cancel token fired before or during a read.
    ///
    /// Carries no cause: a [`CancelToken`](crate::CancelToken) is a flag.
    #[error("Prompt cancelled.")]
    Cancelled,

    /// Reading the answer or writing the prompt failed.
    #[error("Prompt I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The Ctrl+C handler could not be installed.
    #[cfg(feature = "interrupt")]
    #[error("Failed to install interrupt handler: {0}")]
    Interrupt(#[from] ctrlc::Error),
}

impl PromptError {
    /// True for [`PromptError::Required`].
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }

    /// True for [`PromptError::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_kind() {
        assert!(PromptError::Required.is_required());
        assert!(!PromptError::Required.is_cancelled());
        assert!(PromptError::Cancelled.is_cancelled());
        let io = PromptError::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(!io.is_required());
        assert!(!io.is_cancelled());
    }

    #[test]
    fn display_messages() {
        assert_eq!(PromptError::Required.to_string(), "Input is required.");
        assert_eq!(PromptError::Cancelled.to_string(), "Prompt cancelled.");
        let io = PromptError::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(io.to_string(), "Prompt I/O failed: gone");
    }
}
