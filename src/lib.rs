//! ShadowPulse core
//!
//! Platform-agnostic core of the ShadowPulse field-tracking app:
//! - `platform` - the seam to the host OS permission facilities
//! - `permissions` - catalog, snapshot, store, and request handling
//! - `flows` - login and trip-setup view-model state machines
//! - `logging` - file-based tracing setup for the host shell
//!
//! The host shell owns rendering and navigation; it injects its OS
//! bindings into [`permissions::PermissionStore`] and
//! [`permissions::PermissionRequestHandler`], subscribes to snapshot
//! updates, and forwards UI events into the flows.

pub mod flows;
pub mod logging;
pub mod permissions;
pub mod platform;

pub use permissions::{PermissionKind, PermissionSnapshot, PermissionStore};
pub use platform::{ApiLevel, PermissionChecker, PermissionRequester};
