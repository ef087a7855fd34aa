//! Admin gate for privileged endpoints.
//!
//! There are no sessions: every admin request carries the credentials again,
//! in the JSON body for POSTs and in headers for GETs.

use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::AppError;
use crate::extract::JsonOrForm;
use crate::state::AppState;

/// Header carrying the admin email on body-less admin requests.
pub const ADMIN_EMAIL_HEADER: &str = "x-admin-email";

/// Header carrying the admin password on body-less admin requests.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Proof that the request passed the admin gate via headers.
///
/// ```ignore
/// async fn list(_admin: AdminAuth, State(state): State<AppState>) -> AppResult<...>
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
        };

        let result = state
            .config
            .admin
            .verify(header(ADMIN_EMAIL_HEADER), header(ADMIN_PASSWORD_HEADER));
        if result.is_err() {
            tracing::warn!(path = %parts.uri.path(), "Rejected admin request");
        }
        result?;
        Ok(AdminAuth)
    }
}

/// Admin credentials embedded in a request body.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBodyCredentials {
    #[serde(default)]
    pub admin_email: String,
    #[serde(default)]
    pub admin_password: String,
}

impl fmt::Debug for AdminBodyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminBodyCredentials")
            .field("admin_email", &self.admin_email)
            .field("admin_password", &REDACTED)
            .finish()
    }
}

/// Placeholder printed instead of a password in `Debug` output.
pub(crate) const REDACTED: &str = "<redacted>";

/// Take the body of an admin POST, or blank credentials when the body is
/// empty or unreadable.
///
/// The admin gate runs before anything else looks at the body, so a request
/// without usable credentials is answered with `401` rather than a parse
/// error.
pub fn body_or_blank<T: Default>(body: Result<JsonOrForm<T>, AppError>) -> T {
    match body {
        Ok(JsonOrForm(value)) => value,
        Err(err) => {
            tracing::debug!(error = %err, "Unreadable admin request body");
            T::default()
        }
    }
}

/// Run the admin gate against credentials taken from a request body.
pub fn verify_admin(state: &AppState, email: &str, password: &str) -> Result<(), AppError> {
    state.config.admin.verify(email, password).map_err(|err| {
        tracing::warn!("Rejected admin request");
        AppError::Core(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_credentials_debug_redacts_password() {
        let creds = AdminBodyCredentials {
            admin_email: "admin@example.com".into(),
            admin_password: "hunter2-secret".into(),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("admin@example.com"));
        assert!(!rendered.contains("hunter2-secret"));
    }

    #[test]
    fn unreadable_body_falls_back_to_blank_credentials() {
        let creds: AdminBodyCredentials =
            body_or_blank(Err(AppError::BadRequest("Invalid JSON body".into())));
        assert!(creds.admin_email.is_empty());
        assert!(creds.admin_password.is_empty());
    }
}
