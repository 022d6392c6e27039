//! Racing a blocking read against a cancel token.
//!
//! Blocking reads on an arbitrary stream cannot be interrupted, so the read
//! runs on its own thread and the caller waits on a channel fed by both the
//! reader and the token. Whichever sends first wins.
//!
//! When the token wins, the reader thread is left behind. It finishes (or
//! stays blocked) on its own and its result is dropped with the channel.
//! Closing the underlying stream, or process exit, reclaims it. Until then a
//! leaked reader still holds the shared input, so the next read on the same
//! prompter queues behind it.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;

use crate::cancel::CancelToken;
use crate::sources::ReadOutcome;
use crate::PromptError;

enum Event {
    Read(ReadOutcome),
    Cancelled,
}

/// Run `read` on a background thread and return its outcome, or
/// [`PromptError::Cancelled`] as soon as `cancel` fires.
///
/// Returns immediately, without starting a read, if `cancel` is already set.
pub(crate) fn read_with_cancel<F>(
    cancel: &CancelToken,
    read: F,
) -> Result<ReadOutcome, PromptError>
where
    F: FnOnce() -> ReadOutcome + Send + 'static,
{
    if cancel.is_cancelled() {
        return Err(PromptError::Cancelled);
    }

    let (tx, rx) = mpsc::channel();
    let cancel_tx = tx.clone();
    let _guard = cancel.on_cancel(move || {
        let _ = cancel_tx.send(Event::Cancelled);
    });
    if cancel.is_cancelled() {
        return Err(PromptError::Cancelled);
    }

    thread::Builder::new()
        .name("prompt-reader".to_string())
        .spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(read)).unwrap_or_else(|_| {
                ReadOutcome::Error(io::Error::other("input reader panicked"))
            });
            let _ = tx.send(Event::Read(outcome));
        })?;

    match rx.recv() {
        Ok(Event::Read(outcome)) => {
            tracing::trace!(outcome = outcome_kind(&outcome), "read finished");
            Ok(outcome)
        }
        Ok(Event::Cancelled) => {
            tracing::debug!("read abandoned on cancellation");
            Err(PromptError::Cancelled)
        }
        Err(_) => Err(PromptError::Io(io::Error::other(
            "input reader exited without a result",
        ))),
    }
}

fn outcome_kind(outcome: &ReadOutcome) -> &'static str {
    match outcome {
        ReadOutcome::Value(_) => "value",
        ReadOutcome::EndOfInput => "end-of-input",
        ReadOutcome::Error(_) => "error",
    }
}
