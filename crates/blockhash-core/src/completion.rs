//! One-shot completion handles.
//!
//! A [`CompletionHandle`] is resolved exactly once, either with a value or with
//! a [`Rejected`] outcome. The producing side is a [`Completer`], which is
//! consumed by whichever outcome it delivers, so a second resolution cannot be
//! written.
//!
//! The handle can be observed by awaiting it, polling it with
//! [`CompletionHandle::try_take`], blocking on it with
//! [`CompletionHandle::wait`], or registering a pair of callbacks with
//! [`CompletionHandle::settle`]. There is no cancellation and no timeout.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::CoreError;

/// The failure outcome of a completion.
///
/// Carries the value that was handed to the operation, untouched, so the
/// caller gets ownership back. `value` is `None` only if the producer went
/// away without resolving.
pub struct Rejected<T> {
    /// What went wrong.
    pub error: CoreError,
    /// The input, returned unmodified.
    pub value: Option<T>,
}

impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .field("returned", &self.value.is_some())
            .finish()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T> std::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// The settled result of a completion.
pub type Outcome<T> = std::result::Result<T, Rejected<T>>;

/// Create a linked completer/handle pair.
pub fn completion<T>() -> (Completer<T>, CompletionHandle<T>) {
    let (tx, rx) = oneshot::channel();
    (Completer { tx }, CompletionHandle { rx })
}

/// Producing side of a completion. Resolves its handle exactly once.
pub struct Completer<T> {
    tx: oneshot::Sender<Outcome<T>>,
}

impl<T> Completer<T> {
    /// Resolve with a value.
    pub fn resolve(self, value: T) {
        // A dropped handle means nobody is listening; the outcome is discarded.
        let _ = self.tx.send(Ok(value));
    }

    /// Reject, handing the input back to the caller.
    pub fn reject(self, error: CoreError, value: T) {
        let _ = self.tx.send(Err(Rejected {
            error,
            value: Some(value),
        }));
    }
}

impl<T> fmt::Debug for Completer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completer").finish_non_exhaustive()
    }
}

/// Consuming side of a completion.
#[must_use = "a completion handle does nothing unless observed"]
pub struct CompletionHandle<T> {
    rx: oneshot::Receiver<Outcome<T>>,
}

impl<T> CompletionHandle<T> {
    /// Take the outcome if it is already available.
    ///
    /// Returns the handle back when the completion is still pending.
    pub fn try_take(mut self) -> std::result::Result<Outcome<T>, Self> {
        match self.rx.try_recv() {
            Ok(outcome) => Ok(outcome),
            Err(oneshot::error::TryRecvError::Empty) => Err(self),
            Err(oneshot::error::TryRecvError::Closed) => Ok(Err(abandoned())),
        }
    }

    /// Block the current thread until the completion settles.
    ///
    /// Must not be called from within an async context.
    pub fn wait(self) -> Outcome<T> {
        self.rx.blocking_recv().unwrap_or_else(|_| Err(abandoned()))
    }

    /// Await the completion and invoke exactly one of the two callbacks.
    pub async fn settle<S, F>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(T),
        F: FnOnce(Rejected<T>),
    {
        match self.await {
            Ok(value) => on_success(value),
            Err(rejected) => on_failure(rejected),
        }
    }
}

impl<T> Future for CompletionHandle<T> {
    type Output = Outcome<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.unwrap_or_else(|_| Err(abandoned())))
    }
}

impl<T> fmt::Debug for CompletionHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionHandle").finish_non_exhaustive()
    }
}

fn abandoned<T>() -> Rejected<T> {
    Rejected {
        error: CoreError::HashFailure("completion dropped before resolving".into()),
        value: None,
    }
}
