//! Host OS API level
//!
//! Permission identifiers vary by platform version. The catalog branches
//! on the thresholds defined here, so identifier resolution stays a pure
//! function of the kind and the API level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The API level of the host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApiLevel(u32);

impl ApiLevel {
    /// API level 29: WiFi scan results become location-gated and fine
    /// location replaces coarse for tracking.
    pub const Q: ApiLevel = ApiLevel(29);

    /// API level 31: dedicated Bluetooth scan permission replaces the
    /// legacy Bluetooth permission.
    pub const S: ApiLevel = ApiLevel(31);

    /// Create an API level from a raw platform version number.
    pub fn new(level: u32) -> Self {
        ApiLevel(level)
    }

    /// Whether this level is at or above the given threshold.
    pub fn at_least(self, threshold: ApiLevel) -> bool {
        self >= threshold
    }

    /// The raw platform version number.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
