//! Permission state store
//!
//! Owns the current [`PermissionSnapshot`] and keeps it consistent with
//! the OS's actual grant state. All mutation happens on one logical
//! thread (the UI event thread); refreshes are synchronous in-process
//! queries and never suspend.
//!
//! Failure policy is fail-closed: if the check facility errors, the
//! permission is reported as not granted and a warning is logged. No
//! error from this store ever reaches the UI.

use std::sync::Arc;

use crate::platform::{ApiLevel, PermissionChecker};

use super::{PermissionKind, PermissionSnapshot};

/// Handle for removing a subscriber from the store.
pub type SubscriptionId = u64;

type Subscriber = Box<dyn Fn(&PermissionSnapshot) + Send>;

/// Holds the last-observed grant status of every catalog kind and
/// republishes it to subscribers whenever it changes.
///
/// The checker is constructor-injected so tests can substitute a fake
/// OS facility; there is no ambient singleton.
pub struct PermissionStore {
    checker: Arc<dyn PermissionChecker>,
    api_level: ApiLevel,
    snapshot: PermissionSnapshot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
}

impl PermissionStore {
    /// Create a store with every kind initially denied. Call
    /// [`refresh_all`](Self::refresh_all) to observe the real OS state.
    pub fn new(checker: Arc<dyn PermissionChecker>, api_level: ApiLevel) -> Self {
        Self {
            checker,
            api_level,
            snapshot: PermissionSnapshot::denied(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The API level this store resolves platform identifiers against.
    pub fn api_level(&self) -> ApiLevel {
        self.api_level
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> &PermissionSnapshot {
        &self.snapshot
    }

    /// Query the OS directly for one kind's grant status.
    ///
    /// Does not touch the published snapshot. Fail-closed on checker
    /// errors.
    pub fn is_granted(&self, kind: PermissionKind) -> bool {
        self.query(kind)
    }

    /// Whether the OS currently grants every kind in the catalog.
    ///
    /// Queries live rather than reading the snapshot; used to gate
    /// navigation into the main flow.
    pub fn all_granted(&self) -> bool {
        PermissionKind::all().into_iter().all(|kind| self.query(kind))
    }

    /// Re-query one kind and publish a snapshot with only that entry
    /// changed.
    pub fn refresh_one(&mut self, kind: PermissionKind) {
        let granted = self.query(kind);
        let next = self.snapshot.with_entry(kind, granted);
        self.publish(next);
    }

    /// Re-query every kind and publish a wholly new snapshot.
    ///
    /// Invoked when the consuming UI regains focus, since the user may
    /// have changed grants in the OS settings screen meanwhile.
    pub fn refresh_all(&mut self) {
        let next = PermissionSnapshot::capture(|kind| self.query(kind));
        self.publish(next);
    }

    /// Register a subscriber for snapshot updates.
    ///
    /// The callback is invoked immediately with the current snapshot,
    /// then synchronously with the full new snapshot on every change.
    /// Value-equal republishes are suppressed.
    pub fn subscribe(
        &mut self,
        callback: impl Fn(&PermissionSnapshot) + Send + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        callback(&self.snapshot);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() < before
    }

    fn query(&self, kind: PermissionKind) -> bool {
        let identifier = kind.platform_identifier(self.api_level);
        match self.checker.check_granted(identifier) {
            Ok(granted) => granted,
            Err(err) => {
                tracing::warn!(
                    "Permission check failed for {} ({}), treating as not granted: {}",
                    kind,
                    identifier,
                    err
                );
                false
            }
        }
    }

    fn publish(&mut self, next: PermissionSnapshot) {
        if next == self.snapshot {
            return;
        }
        tracing::info!("Publishing permission snapshot: {:?}", next);
        self.snapshot = next;
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::CheckError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Fake OS check facility backed by an identifier map.
    struct FakeChecker {
        granted: Mutex<HashMap<String, bool>>,
        failing: Mutex<Vec<String>>,
    }

    impl FakeChecker {
        fn new() -> Self {
            Self {
                granted: Mutex::new(HashMap::new()),
                failing: Mutex::new(Vec::new()),
            }
        }

        fn grant(&self, identifier: &str) {
            self.granted
                .lock()
                .unwrap()
                .insert(identifier.to_string(), true);
        }

        fn fail(&self, identifier: &str) {
            self.failing.lock().unwrap().push(identifier.to_string());
        }
    }

    impl PermissionChecker for FakeChecker {
        fn check_granted(&self, identifier: &str) -> Result<bool, CheckError> {
            if self.failing.lock().unwrap().iter().any(|f| f == identifier) {
                return Err(CheckError::Unavailable(identifier.to_string()));
            }
            Ok(self
                .granted
                .lock()
                .unwrap()
                .get(identifier)
                .copied()
                .unwrap_or(false))
        }
    }

    fn store_with(checker: Arc<FakeChecker>, api: u32) -> PermissionStore {
        PermissionStore::new(checker, ApiLevel::new(api))
    }

    #[test]
    fn test_starts_all_denied() {
        let store = store_with(Arc::new(FakeChecker::new()), 33);
        assert!(!store.snapshot().all_granted());
        assert_eq!(store.snapshot().iter().count(), PermissionKind::all().len());
    }

    #[test]
    fn test_refresh_all_reflects_os_state() {
        let checker = Arc::new(FakeChecker::new());
        checker.grant("android.permission.ACCESS_FINE_LOCATION");
        let mut store = store_with(checker, 33);

        store.refresh_all();

        // Fine location gates both Location and Wifi on this API level.
        assert!(store.snapshot().is_granted(PermissionKind::Location));
        assert!(store.snapshot().is_granted(PermissionKind::Wifi));
        assert!(!store.snapshot().is_granted(PermissionKind::Bluetooth));
        assert!(!store.all_granted());
    }

    #[test]
    fn test_refresh_one_changes_only_that_kind() {
        let checker = Arc::new(FakeChecker::new());
        let mut store = store_with(checker.clone(), 33);
        store.refresh_all();
        let before = store.snapshot().clone();

        checker.grant("android.permission.BLUETOOTH_SCAN");
        store.refresh_one(PermissionKind::Bluetooth);

        assert!(store.snapshot().is_granted(PermissionKind::Bluetooth));
        for (kind, granted) in store.snapshot().iter() {
            if kind != PermissionKind::Bluetooth {
                assert_eq!(granted, before.is_granted(kind));
            }
        }
    }

    #[test]
    fn test_refresh_all_idempotent_without_os_change() {
        let checker = Arc::new(FakeChecker::new());
        checker.grant("android.permission.ACCESS_FINE_LOCATION");
        let mut store = store_with(checker, 33);

        store.refresh_all();
        let first = store.snapshot().clone();
        store.refresh_all();

        assert_eq!(&first, store.snapshot());
    }

    #[test]
    fn test_all_granted_queries_live() {
        let checker = Arc::new(FakeChecker::new());
        let mut store = store_with(checker.clone(), 33);
        store.refresh_all();

        // Grant everything after the refresh; the live query must see it.
        checker.grant("android.permission.ACCESS_FINE_LOCATION");
        checker.grant("android.permission.BLUETOOTH_SCAN");
        checker.grant("android.permission.ACCESS_BACKGROUND_LOCATION");

        assert!(store.all_granted());
        assert!(!store.snapshot().all_granted());
    }

    #[test]
    fn test_checker_failure_is_fail_closed() {
        let checker = Arc::new(FakeChecker::new());
        checker.fail("android.permission.BLUETOOTH_SCAN");
        let mut store = store_with(checker, 33);

        assert!(!store.is_granted(PermissionKind::Bluetooth));
        store.refresh_all();
        assert!(!store.snapshot().is_granted(PermissionKind::Bluetooth));
    }

    #[test]
    fn test_subscribers_receive_full_snapshots() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let checker = Arc::new(FakeChecker::new());
        let mut store = store_with(checker.clone(), 33);

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let id = store.subscribe(move |snapshot| {
            assert_eq!(snapshot.iter().count(), PermissionKind::all().len());
            seen.fetch_add(1, Ordering::SeqCst);
        });

        // Immediate replay of the current snapshot.
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        checker.grant("android.permission.ACCESS_FINE_LOCATION");
        store.refresh_one(PermissionKind::Location);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // Value-equal republish is suppressed.
        store.refresh_one(PermissionKind::Location);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        assert!(store.unsubscribe(id));
        store.refresh_one(PermissionKind::Bluetooth);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!store.unsubscribe(id));
    }
}
