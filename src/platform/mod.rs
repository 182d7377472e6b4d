//! Platform seam for OS permission facilities
//!
//! This module defines the boundary between the core and the host
//! operating system:
//! - API-level model for version-dependent permission identifiers
//! - The synchronous permission-check facility
//! - The asynchronous permission-request facility
//! - A single-shot channel for adapting callback-style host APIs

mod api_level;
mod facility;

pub use api_level::ApiLevel;
pub use facility::{
    response_channel, CheckError, PendingResponse, PermissionChecker, PermissionRequester,
    RequestResult, ResponseSlot,
};
