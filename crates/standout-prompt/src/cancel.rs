//! Cooperative cancellation for in-flight prompts.
//!
//! A [`CancelToken`] is a shared flag plus a set of one-shot listeners. Clones
//! share state, so one clone can be handed to a signal handler or another
//! thread while the prompting thread passes its own clone to
//! [`Question::ask`](crate::Question::ask).

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Listener = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

#[derive(Default)]
struct Inner {
    cancelled: AtomicBool,
    listeners: Mutex<Listeners>,
}

impl Inner {
    fn listeners(&self) -> MutexGuard<'_, Listeners> {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Caller-controlled signal that abandons a pending prompt.
///
/// The token is a plain flag and records no cause or deadline. Whoever
/// cancels it, a caller or the Ctrl+C handler, the pending prompt fails with
/// [`PromptError::Cancelled`](crate::PromptError::Cancelled), which carries no
/// payload. Callers that need the reason keep track of it themselves.
///
/// # Example
///
/// ```
/// use standout_prompt::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

impl CancelToken {
    /// Create a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token and wake every registered listener.
    ///
    /// Calling this more than once has no further effect.
    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::debug!("cancel token fired");

        // Listeners run outside the lock so they may touch the token.
        let fired = std::mem::take(&mut self.inner.listeners().entries);
        for (_, listener) in fired {
            listener();
        }
    }

    /// Check whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Run `listener` once when the token is cancelled.
    ///
    /// If the token is already cancelled the listener runs immediately on
    /// the calling thread. Dropping the returned guard unregisters a listener
    /// that has not fired yet.
    pub fn on_cancel<F>(&self, listener: F) -> CancelGuard
    where
        F: FnOnce() + Send + 'static,
    {
        let mut listeners = self.inner.listeners();
        if self.is_cancelled() {
            drop(listeners);
            listener();
            return CancelGuard {
                inner: Weak::new(),
                id: 0,
            };
        }

        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));
        CancelGuard {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Cancel this token when the process receives Ctrl+C.
    ///
    /// Only one handler can be installed per process; a second call fails
    /// with [`PromptError::Interrupt`](crate::PromptError::Interrupt).
    #[cfg(feature = "interrupt")]
    pub fn cancel_on_interrupt(&self) -> Result<(), crate::PromptError> {
        let token = self.clone();
        ctrlc::set_handler(move || token.cancel())?;
        Ok(())
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Registration handle returned by [`CancelToken::on_cancel`].
#[must_use = "dropping the guard unregisters the listener"]
pub struct CancelGuard {
    inner: Weak<Inner>,
    id: u64,
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.listeners().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for CancelGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelGuard").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let bump = Arc::clone(&count);
        (count, move || {
            bump.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn new_token_is_not_cancelled() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn clones_share_state() {
        let token = CancelToken::new();
        let other = token.clone();
        other.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn listener_fires_once_on_cancel() {
        let token = CancelToken::new();
        let (count, listener) = counter();
        let _guard = token.on_cancel(listener);

        token.cancel();
        token.cancel();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_runs_immediately_when_already_cancelled() {
        let token = CancelToken::new();
        token.cancel();
        let (count, listener) = counter();
        let _guard = token.on_cancel(listener);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropped_guard_unregisters_listener() {
        let token = CancelToken::new();
        let (count, listener) = counter();
        drop(token.on_cancel(listener));

        token.cancel();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn cancel_from_another_thread() {
        let token = CancelToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel())
            .join()
            .unwrap();
        assert!(token.is_cancelled());
    }

    #[test]
    fn debug_shows_state() {
        let token = CancelToken::new();
        assert_eq!(format!("{:?}", token), "CancelToken { cancelled: false }");
    }
}
