//! Trip-setup flow
//!
//! Collects the trip endpoints and travel mode, mirrors the permission
//! snapshot published by the store, and gates the start button on
//! non-blank endpoints plus an all-granted snapshot. Permission toggles
//! are forwarded upward as [`TripSetupAction::RequestPermission`]; the
//! flow never requests anything itself.

use serde::{Deserialize, Serialize};

use crate::permissions::{PermissionKind, PermissionSnapshot};

/// How the user intends to travel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelMode {
    #[default]
    Car,
    PublicTransport,
    Walking,
}

/// Observable state of the trip-setup screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSetupState {
    pub from_location: String,
    pub to_location: String,
    pub travel_mode: TravelMode,
    pub permissions: PermissionSnapshot,
    pub can_start: bool,
}

/// UI events the trip-setup flow consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripSetupEvent {
    FromLocationChanged(String),
    ToLocationChanged(String),
    TravelModeChanged(TravelMode),
    PermissionToggled(PermissionKind),
    StartClicked,
    StopClicked,
}

/// Actions the flow asks the owning shell to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripSetupAction {
    /// Launch the OS request flow for this kind.
    RequestPermission(PermissionKind),
    StartNavigation,
    StopNavigation,
}

/// State machine behind the trip-setup screen.
#[derive(Debug, Default)]
pub struct TripSetupFlow {
    state: TripSetupState,
}

impl TripSetupFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TripSetupState {
        &self.state
    }

    /// Fold a snapshot published by the store into the screen state.
    /// The owning shell wires the store subscription to this call.
    pub fn apply_snapshot(&mut self, snapshot: &PermissionSnapshot) {
        self.state.permissions = snapshot.clone();
        self.recompute_can_start();
    }

    pub fn on_event(&mut self, event: TripSetupEvent) -> Option<TripSetupAction> {
        let action = match event {
            TripSetupEvent::FromLocationChanged(location) => {
                self.state.from_location = location;
                None
            }
            TripSetupEvent::ToLocationChanged(location) => {
                self.state.to_location = location;
                None
            }
            TripSetupEvent::TravelModeChanged(mode) => {
                self.state.travel_mode = mode;
                None
            }
            TripSetupEvent::PermissionToggled(kind) => {
                // Already-granted kinds have no revoke path; only a
                // denied kind produces a request.
                if self.state.permissions.is_granted(kind) {
                    None
                } else {
                    Some(TripSetupAction::RequestPermission(kind))
                }
            }
            TripSetupEvent::StartClicked => {
                if self.state.can_start {
                    Some(TripSetupAction::StartNavigation)
                } else {
                    tracing::info!("Start rejected: trip setup incomplete");
                    None
                }
            }
            TripSetupEvent::StopClicked => Some(TripSetupAction::StopNavigation),
        };
        self.recompute_can_start();
        action
    }

    fn recompute_can_start(&mut self) {
        self.state.can_start = !self.state.from_location.trim().is_empty()
            && !self.state.to_location.trim().is_empty()
            && self.state.permissions.all_granted();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_flow() -> TripSetupFlow {
        let mut flow = TripSetupFlow::new();
        flow.on_event(TripSetupEvent::FromLocationChanged("Depot".to_string()));
        flow.on_event(TripSetupEvent::ToLocationChanged("Site 7".to_string()));
        flow
    }

    #[test]
    fn test_can_start_requires_fields_and_permissions() {
        let mut flow = filled_flow();
        assert!(!flow.state().can_start);

        flow.apply_snapshot(&PermissionSnapshot::capture(|_| true));
        assert!(flow.state().can_start);

        flow.on_event(TripSetupEvent::FromLocationChanged(String::new()));
        assert!(!flow.state().can_start);
    }

    #[test]
    fn test_toggle_denied_kind_requests_permission() {
        let mut flow = filled_flow();

        let action = flow.on_event(TripSetupEvent::PermissionToggled(PermissionKind::Wifi));
        assert_eq!(
            action,
            Some(TripSetupAction::RequestPermission(PermissionKind::Wifi))
        );
    }

    #[test]
    fn test_toggle_granted_kind_is_noop() {
        let mut flow = filled_flow();
        flow.apply_snapshot(&PermissionSnapshot::capture(|_| true));

        let action = flow.on_event(TripSetupEvent::PermissionToggled(PermissionKind::Wifi));
        assert_eq!(action, None);
    }

    #[test]
    fn test_start_gated_on_can_start() {
        let mut flow = filled_flow();
        assert_eq!(flow.on_event(TripSetupEvent::StartClicked), None);

        flow.apply_snapshot(&PermissionSnapshot::capture(|_| true));
        assert_eq!(
            flow.on_event(TripSetupEvent::StartClicked),
            Some(TripSetupAction::StartNavigation)
        );
    }

    #[test]
    fn test_travel_mode_defaults_to_car() {
        let flow = TripSetupFlow::new();
        assert_eq!(flow.state().travel_mode, TravelMode::Car);

        let mut flow = flow;
        flow.on_event(TripSetupEvent::TravelModeChanged(TravelMode::Walking));
        assert_eq!(flow.state().travel_mode, TravelMode::Walking);
    }

    #[test]
    fn test_stop_always_emits() {
        let mut flow = TripSetupFlow::new();
        assert_eq!(
            flow.on_event(TripSetupEvent::StopClicked),
            Some(TripSetupAction::StopNavigation)
        );
    }
}
