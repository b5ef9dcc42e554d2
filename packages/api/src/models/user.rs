//! # Account model
//!
//! [`User`] is the full `users` row and only exists in server builds. It carries
//! the Argon2 `password_hash`, which never leaves the server.
//!
//! [`UserInfo`] is the projection that crosses the server/client boundary
//! through server functions: no hash, no timestamps, and the `Uuid` rendered as
//! a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UserInfo;

    fn info(name: &str) -> UserInfo {
        UserInfo {
            id: "0b6f3c52-3f7e-4d8a-9a53-5b0d0c0f7a11".to_string(),
            email: "sina@example.com".to_string(),
            name: name.to_string(),
            image: None,
        }
    }

    #[test]
    fn display_name_prefers_name() {
        assert_eq!(info("سینا").display_name(), "سینا");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(info("  ").display_name(), "sina@example.com");
    }
}
