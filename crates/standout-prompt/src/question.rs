//! Questions and the answer resolution loop.
//!
//! A [`Question`] carries the per-prompt configuration (default, optional
//! flag, validators) and borrows its [`Prompter`] for the duration of one
//! `ask`, `password` or `confirm` call.
//!
//! # Resolution
//!
//! Each attempt writes `prompt + " "`, reads one line through the cancel
//! bridge, then:
//!
//! 1. Read errors and cancellation end the call immediately.
//! 2. Empty input (including end of input) resolves to the default if one is
//!    set, else to `""` if the question is optional. Otherwise the question
//!    is asked again, or fails with [`PromptError::Required`] when the input
//!    is exhausted.
//! 3. Non-empty input runs through the validators in order. The first
//!    rejection is printed on its own line and the question is asked again.
//!
//! Defaults are never validated.

use std::fmt::Display;
use std::io::Write;

use crate::cancel::CancelToken;
use crate::prompter::Prompter;
use crate::race::read_with_cancel;
use crate::sources::ReadOutcome;
use crate::PromptError;

/// Validator function type.
///
/// Returns `Err(message)` to reject an answer; the message is shown to the
/// user before the question is repeated.
pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Frozen configuration of a question.
#[derive(Default)]
struct QuestionConfig {
    default: Option<String>,
    optional: bool,
    validators: Vec<Validator>,
}

impl QuestionConfig {
    /// The accepted answer for empty input, if any.
    fn empty_answer(&self) -> Option<String> {
        match &self.default {
            Some(default) => Some(default.clone()),
            None if self.optional => Some(String::new()),
            None => None,
        }
    }

    fn check(&self, input: &str) -> Result<(), String> {
        self.validators
            .iter()
            .try_for_each(|validator| validator(input))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Line,
    Secret,
}

/// A configured question, ready to be asked.
///
/// Created from a [`Prompter`] through one of its builder methods and
/// refined by chaining more of them.
///
/// # Example
///
/// ```
/// use standout_prompt::{CancelToken, Prompter};
///
/// let mut prompter = Prompter::new(Vec::new(), "\n".as_bytes());
/// let age = prompter
///     .with_default("21")
///     .validate(|s| s.parse::<u32>().is_ok(), "age must be a number")
///     .ask(&CancelToken::new(), "What is your age?")
///     .unwrap();
/// assert_eq!(age, "21");
/// ```
pub struct Question<'p, W: Write> {
    prompter: &'p mut Prompter<W>,
    config: QuestionConfig,
}

impl<'p, W: Write> Question<'p, W> {
    pub(crate) fn new(prompter: &'p mut Prompter<W>) -> Self {
        Self {
            prompter,
            config: QuestionConfig::default(),
        }
    }

    /// Answer used when the input is empty or exhausted.
    ///
    /// An empty string clears the default.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.config.default = if value.is_empty() { None } else { Some(value) };
        self
    }

    /// Accept an empty answer instead of asking again.
    pub fn optional(mut self, optional: bool) -> Self {
        self.config.optional = optional;
        self
    }

    /// Add a validation rule with a fixed rejection message.
    pub fn validate<F>(self, f: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.validate_with(move |input: &str| {
            if f(input) {
                Ok(())
            } else {
                Err(message.clone())
            }
        })
    }

    /// Add a validation rule that explains its own rejections.
    ///
    /// Validators run in the order they are added; the first failure wins.
    pub fn validate_with<F, E>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<(), E> + Send + Sync + 'static,
        E: Display,
    {
        self.config
            .validators
            .push(Box::new(move |input: &str| f(input).map_err(|e| e.to_string())));
        self
    }

    /// Add several validators at once, keeping their order.
    pub fn validators(mut self, validators: impl IntoIterator<Item = Validator>) -> Self {
        self.config.validators.extend(validators);
        self
    }

    /// Ask the question and return the accepted answer.
    ///
    /// # Errors
    ///
    /// [`PromptError::Cancelled`] if `cancel` fires, [`PromptError::Required`]
    /// if the input runs out with nothing to fall back on, and
    /// [`PromptError::Io`] if reading or writing fails.
    pub fn ask(self, cancel: &CancelToken, prompt: &str) -> Result<String, PromptError> {
        self.resolve(cancel, prompt, Mode::Line)
    }

    /// Ask for a password.
    ///
    /// Input is read with echo turned off when the prompter has an
    /// interactive terminal, and as a plain line otherwise. A newline is
    /// written after every read that yields an answer, since the terminal
    /// did not echo one. A call failing with [`PromptError::Required`] writes
    /// none.
    ///
    /// # Errors
    ///
    /// Same as [`ask`](Self::ask).
    pub fn password(self, cancel: &CancelToken, prompt: &str) -> Result<String, PromptError> {
        self.resolve(cancel, prompt, Mode::Secret)
    }

    /// Ask a yes/no question.
    ///
    /// Accepts `y`, `yes`, `n` and `no` in any case and asks again for
    /// anything else.
    ///
    /// # Errors
    ///
    /// Same as [`ask`](Self::ask).
    pub fn confirm(self, cancel: &CancelToken, prompt: &str) -> Result<bool, PromptError> {
        let answer = self.validate_with(yes_or_no).ask(cancel, prompt)?;
        Ok(is_yes(&answer))
    }

    fn resolve(
        self,
        cancel: &CancelToken,
        prompt: &str,
        mode: Mode,
    ) -> Result<String, PromptError> {
        let Question { prompter, config } = self;
        tracing::debug!(prompt, ?mode, "asking question");

        loop {
            prompter.write_prompt(prompt)?;

            let outcome = match mode {
                Mode::Line => {
                    let source = prompter.line_source();
                    read_with_cancel(cancel, move || source.read_line())?
                }
                Mode::Secret => {
                    let source = prompter.secret_source();
                    read_with_cancel(cancel, move || source.read_secret())?
                }
            };

            let (input, exhausted) = match outcome {
                ReadOutcome::Value(input) => (input, false),
                ReadOutcome::EndOfInput => (String::new(), true),
                ReadOutcome::Error(e) => return Err(PromptError::Io(e)),
            };

            let fallback = config.empty_answer();
            if exhausted && fallback.is_none() {
                tracing::debug!(prompt, "input exhausted before a required answer");
                return Err(PromptError::Required);
            }

            if mode == Mode::Secret {
                prompter.write_line("")?;
            }

            if input.is_empty() {
                if let Some(answer) = fallback {
                    tracing::debug!(prompt, "empty answer resolved from configuration");
                    return Ok(answer);
                }
                continue;
            }

            if let Err(message) = config.check(&input) {
                tracing::debug!(prompt, "answer rejected by validator");
                prompter.write_line(&message)?;
                continue;
            }

            tracing::debug!(prompt, "answer accepted");
            return Ok(input);
        }
    }
}

fn yes_or_no(input: &str) -> Result<(), String> {
    match input.to_lowercase().as_str() {
        "y" | "yes" | "n" | "no" => Ok(()),
        _ => Err(format!("invalid value {:?}, must enter yes or no", input)),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes" | "true")
}
