use std::fmt;

use serde::{Deserialize, Serialize};

/// An error the auth back-end reports on purpose.
///
/// Every field is optional because callers must cope with a bare failure and
/// fall back to their own wording.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthFailure {
    pub code: Option<String>,
    pub message: Option<String>,
    pub status: Option<u16>,
}

/// Outcome of an auth call as seen by the client: data or a declared failure.
pub type AuthResult<T> = Result<T, AuthFailure>;

impl AuthFailure {
    fn new(code: &str, message: &str, status: u16) -> Self {
        Self {
            code: Some(code.to_string()),
            message: Some(message.to_string()),
            status: Some(status),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::new("INVALID_EMAIL_OR_PASSWORD", "Invalid email or password", 401)
    }

    pub fn user_already_exists() -> Self {
        Self::new("USER_ALREADY_EXISTS", "User already exists", 422)
    }

    pub fn invalid_email() -> Self {
        Self::new("INVALID_EMAIL", "Invalid email", 400)
    }

    pub fn password_too_short() -> Self {
        Self::new("PASSWORD_TOO_SHORT", "Password too short", 400)
    }

    pub fn password_too_long() -> Self {
        Self::new("PASSWORD_TOO_LONG", "Password too long", 400)
    }

    pub fn name_required() -> Self {
        Self::new("NAME_REQUIRED", "Name is required", 400)
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "{code}: {message}"),
            (None, Some(message)) => f.write_str(message),
            (Some(code), None) => f.write_str(code),
            (None, None) => f.write_str("auth request rejected"),
        }
    }
}

impl std::error::Error for AuthFailure {}
