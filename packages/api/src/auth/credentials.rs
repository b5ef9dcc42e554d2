//! Input shapes accepted by the sign-in and sign-up endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AuthFailure;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Body of `sign_in_email`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInEmail {
    pub email: String,
    pub password: String,
    /// `false` ends the session when the browser closes.
    pub remember_me: bool,
}

/// Body of `sign_up_email`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpEmail {
    pub name: String,
    pub email: String,
    pub password: String,
    pub image: Option<String>,
}

impl fmt::Debug for SignInEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInEmail")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

impl fmt::Debug for SignUpEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpEmail")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("image", &self.image)
            .finish()
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn check_password(password: &str) -> Result<(), AuthFailure> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(AuthFailure::password_too_short());
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(AuthFailure::password_too_long());
    }
    Ok(())
}

impl SignUpEmail {
    /// Server-side acceptance rules; returns the request with email and name
    /// normalized.
    pub fn checked(self) -> Result<Self, AuthFailure> {
        let email = normalize_email(&self.email);
        let name = self.name.trim().to_string();

        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => return Err(AuthFailure::invalid_email()),
        }
        check_password(&self.password)?;
        if name.is_empty() {
            return Err(AuthFailure::name_required());
        }

        Ok(Self {
            name,
            email,
            password: self.password,
            image: self.image.filter(|image| !image.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str, name: &str) -> SignUpEmail {
        SignUpEmail {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            image: Some(String::new()),
        }
    }

    #[test]
    fn checked_normalizes_email_and_name() {
        let checked = request("  Sina@Example.COM ", "Password123!", " سینا ")
            .checked()
            .unwrap();
        assert_eq!(checked.email, "sina@example.com");
        assert_eq!(checked.name, "سینا");
        assert_eq!(checked.image, None);
    }

    #[test]
    fn checked_rejects_bad_input_with_codes() {
        let code = |r: SignUpEmail| r.checked().unwrap_err().code.unwrap();
        assert_eq!(code(request("nope", "Password123!", "a")), "INVALID_EMAIL");
        assert_eq!(code(request("a@b.io", "short", "a")), "PASSWORD_TOO_SHORT");
        assert_eq!(code(request("a@b.io", &"x".repeat(129), "a")), "PASSWORD_TOO_LONG");
        assert_eq!(code(request("a@b.io", "Password123!", "  ")), "NAME_REQUIRED");
    }

    #[test]
    fn password_length_counts_characters() {
        // eight Persian letters are sixteen bytes
        assert!(check_password("رمزعبورر").is_ok());
        assert!(check_password("رمزعبور").is_err());
    }

    #[test]
    fn debug_output_hides_passwords() {
        let sign_in = SignInEmail {
            email: "a@b.io".to_string(),
            password: "hunter22".to_string(),
            remember_me: true,
        };
        assert!(!format!("{sign_in:?}").contains("hunter22"));
        assert!(!format!("{:?}", request("a@b.io", "hunter22", "a")).contains("hunter22"));
    }
}
