//! Login page mock
//!
//! There is no account backend; a well-formed submission waits briefly and
//! then reports that login is not available yet.

use std::time::Duration;

use ammaar_common::{Error, Result};

/// Notice shown after every submission
pub const LOGIN_UNAVAILABLE: &str = "Login functionality will be connected to backend.";

/// Simulated round trip before the notice appears
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    show_password: bool,
    loading: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_password_visibility(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    pub fn shows_password(&self) -> bool {
        self.show_password
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Submit the form. Both fields are required.
    pub async fn submit(&mut self) -> Result<&'static str> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(Error::Validation(
                "Email and password are required".to_string(),
            ));
        }

        self.loading = true;
        tokio::time::sleep(LOGIN_DELAY).await;
        self.loading = false;

        tracing::info!("Login attempted; no backend configured");
        Ok(LOGIN_UNAVAILABLE)
    }
}
