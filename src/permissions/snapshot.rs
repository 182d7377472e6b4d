//! Grant-status snapshots
//!
//! A snapshot is the complete mapping of every catalog kind to its
//! observed grant status at one instant. Snapshots are immutable and
//! total: constructors iterate the catalog, so there is exactly one
//! entry per kind and updates always replace the snapshot as a whole.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::PermissionKind;

/// The complete, immutable grant state of the permission catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    entries: BTreeMap<PermissionKind, bool>,
}

impl PermissionSnapshot {
    /// Snapshot with every kind denied. The store starts here until the
    /// first refresh observes the real OS state.
    pub fn denied() -> Self {
        Self::capture(|_| false)
    }

    /// Build a snapshot by querying every catalog kind through `query`.
    pub fn capture(mut query: impl FnMut(PermissionKind) -> bool) -> Self {
        let entries = PermissionKind::all()
            .into_iter()
            .map(|kind| (kind, query(kind)))
            .collect();
        Self { entries }
    }

    /// Whether the given kind was granted when this snapshot was taken.
    pub fn is_granted(&self, kind: PermissionKind) -> bool {
        self.entries.get(&kind).copied().unwrap_or(false)
    }

    /// Whether every kind was granted when this snapshot was taken.
    pub fn all_granted(&self) -> bool {
        self.entries.values().all(|granted| *granted)
    }

    /// A new snapshot with one entry replaced and all others carried
    /// over unchanged.
    pub fn with_entry(&self, kind: PermissionKind, granted: bool) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(kind, granted);
        Self { entries }
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (PermissionKind, bool)> + '_ {
        self.entries.iter().map(|(kind, granted)| (*kind, *granted))
    }
}

impl Default for PermissionSnapshot {
    fn default() -> Self {
        Self::denied()
    }
}
