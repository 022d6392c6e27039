//! The prompting session.

use std::fmt::Display;
use std::io::{self, Read, Write};
use std::sync::Arc;

use crate::cancel::CancelToken;
use crate::env::{RealTerminal, TerminalInput};
use crate::question::{Question, Validator};
use crate::sources::{LineSource, SecretSource};
use crate::PromptError;

/// Shared input and output for a series of questions.
///
/// A prompter owns its output sink and its buffered input. Questions borrow
/// it mutably, so only one question can be in flight at a time.
///
/// # Example
///
/// ```
/// use standout_prompt::{CancelToken, Prompter};
///
/// let cancel = CancelToken::new();
/// let mut prompter = Prompter::new(Vec::new(), "Mark\n27\n".as_bytes());
///
/// assert_eq!(prompter.ask(&cancel, "What is your name?").unwrap(), "Mark");
/// assert_eq!(prompter.ask(&cancel, "What is your age?").unwrap(), "27");
/// assert!(prompter.ask(&cancel, "What is your height?").unwrap_err().is_required());
/// ```
pub struct Prompter<W: Write = io::Stdout> {
    writer: W,
    input: LineSource,
    terminal: Option<Arc<dyn TerminalInput>>,
}

impl Prompter<io::Stdout> {
    /// Prompt on stdout and read from stdin.
    ///
    /// Passwords are read with echo turned off when stdin is a terminal.
    pub fn stdio() -> Self {
        Self::with_terminal(io::stdout(), io::stdin(), RealTerminal)
    }
}

impl<W: Write> Prompter<W> {
    /// Create a prompter over an arbitrary writer and reader.
    ///
    /// No terminal is attached, so passwords are read as plain lines.
    pub fn new<R: Read + Send + 'static>(writer: W, reader: R) -> Self {
        Self {
            writer,
            input: LineSource::new(reader),
            terminal: None,
        }
    }

    /// Create a prompter that reads passwords through `terminal` whenever it
    /// reports an interactive session.
    pub fn with_terminal<R, T>(writer: W, reader: R, terminal: T) -> Self
    where
        R: Read + Send + 'static,
        T: TerminalInput + 'static,
    {
        Self {
            writer,
            input: LineSource::new(reader),
            terminal: Some(Arc::new(terminal)),
        }
    }

    /// Start a question with a default answer.
    pub fn with_default(&mut self, value: impl Into<String>) -> Question<'_, W> {
        Question::new(self).with_default(value)
    }

    /// Start a question that may be left empty.
    pub fn optional(&mut self, optional: bool) -> Question<'_, W> {
        Question::new(self).optional(optional)
    }

    /// Start a question with a validation rule.
    pub fn validate<F>(&mut self, f: F, message: impl Into<String>) -> Question<'_, W>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Question::new(self).validate(f, message)
    }

    /// Start a question with a validation rule that explains its rejections.
    pub fn validate_with<F, E>(&mut self, f: F) -> Question<'_, W>
    where
        F: Fn(&str) -> Result<(), E> + Send + Sync + 'static,
        E: Display,
    {
        Question::new(self).validate_with(f)
    }

    /// Start a question with a list of validators.
    pub fn validators(
        &mut self,
        validators: impl IntoIterator<Item = Validator>,
    ) -> Question<'_, W> {
        Question::new(self).validators(validators)
    }

    /// Ask a required question with no validation.
    ///
    /// # Errors
    ///
    /// See [`Question::ask`].
    pub fn ask(&mut self, cancel: &CancelToken, prompt: &str) -> Result<String, PromptError> {
        Question::new(self).ask(cancel, prompt)
    }

    /// Ask for a required password.
    ///
    /// # Errors
    ///
    /// See [`Question::password`].
    pub fn password(
        &mut self,
        cancel: &CancelToken,
        prompt: &str,
    ) -> Result<String, PromptError> {
        Question::new(self).password(cancel, prompt)
    }

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// See [`Question::confirm`].
    pub fn confirm(&mut self, cancel: &CancelToken, prompt: &str) -> Result<bool, PromptError> {
        Question::new(self).confirm(cancel, prompt)
    }

    /// The output sink.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the prompter and return the output sink.
    pub fn into_writer(self) -> W {
        self.writer
    }

    pub(crate) fn line_source(&self) -> LineSource {
        self.input.clone()
    }

    pub(crate) fn secret_source(&self) -> SecretSource {
        SecretSource::new(self.terminal.clone(), self.input.clone())
    }

    /// Write the prompt and a separating space, leaving the cursor on the
    /// same line.
    pub(crate) fn write_prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.writer, "{} ", prompt)?;
        self.writer.flush()
    }

    pub(crate) fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockTerminal;

    fn output<W: Write + AsRef<[u8]>>(prompter: &Prompter<W>) -> String {
        String::from_utf8_lossy(prompter.writer().as_ref()).into_owned()
    }

    #[test]
    fn prompt_is_followed_by_a_space() {
        let mut prompter = Prompter::new(Vec::new(), "Mark\n".as_bytes());
        prompter.ask(&CancelToken::new(), "Name?").unwrap();
        assert_eq!(output(&prompter), "Name? ");
    }

    #[test]
    fn secret_source_uses_attached_terminal() {
        let prompter = Prompter::with_terminal(
            Vec::new(),
            "piped\n".as_bytes(),
            MockTerminal::with_response("typed"),
        );
        let outcome = prompter.secret_source().read_secret();
        assert!(matches!(outcome, crate::ReadOutcome::Value(s) if s == "typed"));
    }

    #[test]
    fn into_writer_returns_output() {
        let mut prompter = Prompter::new(Vec::new(), "yes\n".as_bytes());
        assert!(prompter.confirm(&CancelToken::new(), "Sure?").unwrap());
        assert_eq!(prompter.into_writer(), b"Sure? ".to_vec());
    }
}
