//! OS permission facility traits
//!
//! The check facility is synchronous and side-effect free; the request
//! facility is the one asynchronous boundary in the permission subsystem.
//! Both are injected into the store and handler so tests can substitute
//! fakes for the real OS bindings.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::oneshot;

/// Errors from the OS permission-check facility.
///
/// Callers fold every variant to "not granted" rather than surfacing it:
/// a missing or unknown permission must never be reported as granted.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The check facility could not be reached at all.
    #[error("permission facility unavailable: {0}")]
    Unavailable(String),

    /// The identifier is not known to this platform version.
    #[error("permission identifier not known to this platform: {0}")]
    UnknownIdentifier(String),
}

/// Synchronous OS permission check.
pub trait PermissionChecker: Send + Sync {
    /// Whether the OS currently grants the given platform identifier.
    fn check_granted(&self, identifier: &str) -> Result<bool, CheckError>;
}

/// The result of a permission request: one entry per requested
/// identifier, denied ones included.
pub type RequestResult = HashMap<String, bool>;

/// Asynchronous OS permission request.
///
/// Launches the system's user-interactive grant dialog and resolves
/// exactly once with the grant outcome for every requested identifier.
/// A dialog abandoned by the user is indistinguishable from all-denied.
#[async_trait]
pub trait PermissionRequester: Send + Sync {
    async fn request(&self, identifiers: BTreeSet<String>) -> RequestResult;
}

/// Shared requesters forward to the inner implementation, so an
/// `Arc`-held facility can be injected wherever a requester is needed.
#[async_trait]
impl<T: PermissionRequester + ?Sized> PermissionRequester for Arc<T> {
    async fn request(&self, identifiers: BTreeSet<String>) -> RequestResult {
        (**self).request(identifiers).await
    }
}

/// Single-shot fulfillment side of [`response_channel`].
///
/// Consumed on use, so a request callback can be fulfilled at most once.
pub struct ResponseSlot {
    tx: oneshot::Sender<RequestResult>,
}

impl ResponseSlot {
    /// Deliver the request outcome to the waiting side.
    pub fn fulfill(self, results: RequestResult) {
        // The waiter may have been dropped; nothing to do then.
        let _ = self.tx.send(results);
    }
}

/// Awaitable side of [`response_channel`].
pub struct PendingResponse {
    rx: oneshot::Receiver<RequestResult>,
    identifiers: BTreeSet<String>,
}

impl PendingResponse {
    /// Wait for the slot to be fulfilled.
    ///
    /// If the slot is dropped without being fulfilled (e.g. the host
    /// tears down the dialog), resolves with every requested identifier
    /// denied.
    pub async fn wait(self) -> RequestResult {
        match self.rx.await {
            Ok(results) => results,
            Err(_) => self
                .identifiers
                .into_iter()
                .map(|identifier| (identifier, false))
                .collect(),
        }
    }
}

/// Create a single-shot channel for one permission request.
///
/// Bridges callback-style host request APIs to [`PermissionRequester`]:
/// hand the [`ResponseSlot`] to the host callback and await the
/// [`PendingResponse`] in the requester implementation.
pub fn response_channel(identifiers: BTreeSet<String>) -> (ResponseSlot, PendingResponse) {
    let (tx, rx) = oneshot::channel();
    (ResponseSlot { tx }, PendingResponse { rx, identifiers })
}
