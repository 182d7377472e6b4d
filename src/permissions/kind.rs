//! The permission catalog
//!
//! A closed set of permission kinds, fixed at compile time. Each kind
//! carries a display label, a justification string, and a platform
//! identifier that depends on the host API level. Pure data; no side
//! effects and no failure modes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::platform::ApiLevel;

const ACCESS_FINE_LOCATION: &str = "android.permission.ACCESS_FINE_LOCATION";
const ACCESS_COARSE_LOCATION: &str = "android.permission.ACCESS_COARSE_LOCATION";
const ACCESS_WIFI_STATE: &str = "android.permission.ACCESS_WIFI_STATE";
const BLUETOOTH_SCAN: &str = "android.permission.BLUETOOTH_SCAN";
const BLUETOOTH: &str = "android.permission.BLUETOOTH";
const ACCESS_BACKGROUND_LOCATION: &str = "android.permission.ACCESS_BACKGROUND_LOCATION";

/// One category of OS-gated capability the app needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PermissionKind {
    Location,
    Wifi,
    Bluetooth,
    BackgroundLocation,
}

impl PermissionKind {
    /// Every kind in the catalog, in stable declaration order.
    pub const fn all() -> [PermissionKind; 4] {
        [
            PermissionKind::Location,
            PermissionKind::Wifi,
            PermissionKind::Bluetooth,
            PermissionKind::BackgroundLocation,
        ]
    }

    /// Human-readable label for permission toggles.
    pub fn label(&self) -> &'static str {
        match self {
            PermissionKind::Location => "Location",
            PermissionKind::Wifi => "WiFi",
            PermissionKind::Bluetooth => "Bluetooth",
            PermissionKind::BackgroundLocation => "Background Location",
        }
    }

    /// Why the app needs this permission, for the grant rationale UI.
    pub fn description(&self) -> &'static str {
        match self {
            PermissionKind::Location => "Required for navigation and device tracking",
            PermissionKind::Wifi => "Required for detecting nearby WiFi devices",
            PermissionKind::Bluetooth => "Required for detecting nearby Bluetooth devices",
            PermissionKind::BackgroundLocation => "Required for continuous device tracking",
        }
    }

    /// The platform identifier gating this kind at the given API level.
    ///
    /// WiFi maps to fine location from API level Q: scan results are
    /// location-gated there, and `ACCESS_WIFI_STATE` is granted at
    /// install time so it never needs a runtime request.
    pub fn platform_identifier(&self, api_level: ApiLevel) -> &'static str {
        match self {
            PermissionKind::Location => {
                if api_level.at_least(ApiLevel::Q) {
                    ACCESS_FINE_LOCATION
                } else {
                    ACCESS_COARSE_LOCATION
                }
            }
            PermissionKind::Wifi => {
                if api_level.at_least(ApiLevel::Q) {
                    ACCESS_FINE_LOCATION
                } else {
                    ACCESS_WIFI_STATE
                }
            }
            PermissionKind::Bluetooth => {
                if api_level.at_least(ApiLevel::S) {
                    BLUETOOTH_SCAN
                } else {
                    BLUETOOTH
                }
            }
            PermissionKind::BackgroundLocation => ACCESS_BACKGROUND_LOCATION,
        }
    }

    /// Every kind gated by the given identifier at the given API level.
    ///
    /// Two kinds may share one identifier (Location and WiFi both map to
    /// fine location on Q+), so a single grant can affect several kinds.
    pub fn matching_identifier(identifier: &str, api_level: ApiLevel) -> Vec<PermissionKind> {
        PermissionKind::all()
            .into_iter()
            .filter(|kind| kind.platform_identifier(api_level) == identifier)
            .collect()
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The deduplicated set of platform identifiers the catalog requires at
/// the given API level.
pub fn required_platform_identifiers(api_level: ApiLevel) -> BTreeSet<&'static str> {
    PermissionKind::all()
        .into_iter()
        .map(|kind| kind.platform_identifier(api_level))
        .collect()
}
