//! View-model state machines for the app shell
//!
//! Each flow owns a state value, consumes UI events, and emits actions
//! for the owning shell to perform. Flows carry no rendering concerns
//! and never talk to the OS directly; permission requests travel upward
//! as actions.

mod login;
mod trip_setup;

pub use login::{LoginEvent, LoginFlow, LoginState};
pub use trip_setup::{TravelMode, TripSetupAction, TripSetupEvent, TripSetupFlow, TripSetupState};
