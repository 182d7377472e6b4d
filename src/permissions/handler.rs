//! Permission request handling
//!
//! The store never launches request dialogs itself. Toggle intents from
//! the UI arrive here; the handler runs the asynchronous OS request flow
//! and folds the outcome back into the store by re-querying the affected
//! kinds. The result map tells us *which* identifiers resolved, but the
//! OS check remains the source of truth for the grant status itself.

use std::collections::BTreeSet;

use super::{required_platform_identifiers, PermissionKind, PermissionStore};
use crate::platform::PermissionRequester;

/// Drives OS permission requests and syncs the outcome into the store.
pub struct PermissionRequestHandler<R: PermissionRequester> {
    requester: R,
}

impl<R: PermissionRequester> PermissionRequestHandler<R> {
    pub fn new(requester: R) -> Self {
        Self { requester }
    }

    /// Request every identifier the catalog requires, then refresh the
    /// kinds covered by the result.
    pub async fn request_all(&self, store: &mut PermissionStore) {
        let identifiers: BTreeSet<String> = required_platform_identifiers(store.api_level())
            .into_iter()
            .map(String::from)
            .collect();
        tracing::info!("Requesting permissions: {:?}", identifiers);

        let results = self.requester.request(identifiers).await;
        self.fold_results(store, results.keys().map(String::as_str));
    }

    /// Request the identifier gating one kind, then refresh every kind
    /// sharing that identifier.
    pub async fn request_one(&self, kind: PermissionKind, store: &mut PermissionStore) {
        let identifier = kind.platform_identifier(store.api_level());
        tracing::info!("Requesting permission {} for {}", identifier, kind);

        let results = self
            .requester
            .request(BTreeSet::from([identifier.to_string()]))
            .await;
        self.fold_results(store, results.keys().map(String::as_str));
    }

    /// The consuming UI regained focus; re-observe the whole catalog.
    /// The user may have changed grants in the OS settings meanwhile.
    pub fn on_resume(&self, store: &mut PermissionStore) {
        store.refresh_all();
    }

    fn fold_results<'a>(
        &self,
        store: &mut PermissionStore,
        identifiers: impl Iterator<Item = &'a str>,
    ) {
        for identifier in identifiers {
            for kind in PermissionKind::matching_identifier(identifier, store.api_level()) {
                store.refresh_one(kind);
            }
        }
    }
}
