//! Admin credential gate.
//!
//! A single admin identity is configured at startup. Every privileged request
//! carries the email and password again; there are no sessions.

use std::fmt;

use subtle::ConstantTimeEq;

use crate::error::CoreError;

/// The configured admin email and password.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check a submitted pair against the configured values.
    ///
    /// Both fields must match exactly (case-sensitive, no trimming). Both
    /// comparisons always run and each runs in constant time for inputs of
    /// equal length.
    pub fn verify(&self, email: &str, password: &str) -> Result<(), CoreError> {
        let email_ok = email.as_bytes().ct_eq(self.email.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        if bool::from(email_ok & password_ok) {
            Ok(())
        } else {
            Err(CoreError::Unauthorized)
        }
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
