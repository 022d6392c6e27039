//! Line-oriented terminal questions.
//!
//! `standout-prompt` asks a question, reads a line (or a password with echo
//! turned off), applies defaults, optionality and validation, and keeps asking
//! until it gets an acceptable answer. Every question takes a [`CancelToken`]
//! so a caller can abandon a prompt that is blocked waiting for input.
//!
//! # Quick Start
//!
//! ```no_run
//! use standout_prompt::{CancelToken, Prompter};
//!
//! let cancel = CancelToken::new();
//! let mut prompter = Prompter::stdio();
//!
//! let name = prompter
//!     .validate(|s| s.len() >= 3, "name is too short")
//!     .ask(&cancel, "What is your name?")?;
//! let port = prompter.with_default("8080").ask(&cancel, "Port?")?;
//! let secret = prompter.password(&cancel, "Password?")?;
//! let proceed = prompter.confirm(&cancel, "Create user? (yes/no)")?;
//! # Ok::<(), standout_prompt::PromptError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! Prompter (writer, shared LineSource, optional TerminalInput)
//! └── Question (default, optional, validators)
//!     └── per attempt: write prompt → race read vs. cancel → resolve
//!         ├── LineSource    → ask, confirm
//!         └── SecretSource  → password
//! ```
//!
//! Reads run on a background thread so cancellation returns immediately. A
//! read abandoned this way keeps running until the stream yields or closes.
//!
//! # Features
//!
//! - **`interrupt`** (default) - [`CancelToken::cancel_on_interrupt`] cancels
//!   on Ctrl+C via the `ctrlc` crate
//!
//! # Testing
//!
//! Any `Read` works as input and any `Write` as output, so tests can pipe
//! answers in and inspect the prompts written:
//!
//! ```
//! use standout_prompt::{CancelToken, Prompter};
//!
//! let mut prompter = Prompter::new(Vec::new(), "Am\nAmy\n".as_bytes());
//! let name = prompter
//!     .validate_with(|s: &str| {
//!         if s.len() < 3 {
//!             Err(format!("'{}' is too short", s))
//!         } else {
//!             Ok(())
//!         }
//!     })
//!     .ask(&CancelToken::new(), "What is your name?")
//!     .unwrap();
//!
//! assert_eq!(name, "Amy");
//! assert_eq!(
//!     String::from_utf8(prompter.into_writer()).unwrap(),
//!     "What is your name? 'Am' is too short\nWhat is your name? "
//! );
//! ```

mod cancel;
pub mod env;
mod error;
mod prompter;
mod question;
mod race;
pub mod sources;

pub use cancel::{CancelGuard, CancelToken};
pub use error::PromptError;
pub use prompter::Prompter;
pub use question::{Question, Validator};

pub use env::{MockTerminal, RealTerminal, TerminalInput};
pub use sources::{LineSource, ReadOutcome, SecretSource};
