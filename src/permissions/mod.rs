//! Permission state synchronization
//!
//! This module keeps the UI-visible grant state in sync with the OS:
//! - A fixed catalog of the permission kinds the app needs
//! - An immutable snapshot mapping every kind to its grant status
//! - A store that owns the snapshot and republishes it on refresh
//! - A handler that folds OS request results back into the store
//!
//! The store never requests permissions itself; toggle intents from the
//! UI travel through the handler, and the OS stays the source of truth.

mod handler;
mod kind;
mod snapshot;
mod store;

pub use handler::PermissionRequestHandler;
pub use kind::{required_platform_identifiers, PermissionKind};
pub use snapshot::PermissionSnapshot;
pub use store::{PermissionStore, SubscriptionId};
