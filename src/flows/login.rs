//! Login flow
//!
//! Gates entry into the app on non-blank credentials, with a biometric
//! path driven by the host shell's prompt. Credential verification
//! itself is a placeholder: a non-blank submission marks the session
//! authenticated.

use serde::{Deserialize, Serialize};

/// Observable state of the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub is_authenticated: bool,
    /// Whether the shell should be showing the OS biometric prompt.
    pub show_biometric_prompt: bool,
}

/// UI events the login flow consumes.
///
/// The biometric prompt itself belongs to the shell; the flow only asks
/// for it via `show_biometric_prompt` and consumes the outcome events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginEvent {
    UsernameChanged(String),
    PasswordChanged(String),
    SubmitClicked,
    BiometricLoginClicked,
    BiometricAuthenticationSucceeded,
    BiometricAuthenticationFailed,
}

/// State machine behind the login screen.
#[derive(Debug, Default)]
pub struct LoginFlow {
    state: LoginState,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn on_event(&mut self, event: LoginEvent) {
        match event {
            LoginEvent::UsernameChanged(username) => {
                self.state.username = username;
                self.state.error = None;
            }
            LoginEvent::PasswordChanged(password) => {
                self.state.password = password;
                self.state.error = None;
            }
            LoginEvent::SubmitClicked => self.attempt_login(),
            LoginEvent::BiometricLoginClicked => {
                self.state.show_biometric_prompt = true;
            }
            LoginEvent::BiometricAuthenticationSucceeded => {
                tracing::info!("Biometric authentication succeeded");
                self.state.is_authenticated = true;
                self.state.show_biometric_prompt = false;
            }
            LoginEvent::BiometricAuthenticationFailed => {
                self.state.error = Some("Biometric authentication failed".to_string());
                self.state.show_biometric_prompt = false;
            }
        }
    }

    fn attempt_login(&mut self) {
        if self.state.username.trim().is_empty() || self.state.password.trim().is_empty() {
            self.state.error = Some("Username and password are required".to_string());
            return;
        }

        tracing::info!("Login submitted for user: {}", self.state.username);
        self.state.is_authenticated = true;
        self.state.error = None;
    }
}
