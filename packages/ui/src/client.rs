//! Typed façade over the auth server functions.
//!
//! Views and the refresher talk to [`AuthClient`] instead of calling `api::*`
//! directly, so the submit flow can be driven by a mock in tests.

use std::fmt::Display;

use api::{AuthFailure, AuthResult, SignInEmail, SignUpEmail, UserInfo};

/// Why an auth call produced no data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// The back-end answered with a declared failure.
    #[error("{0}")]
    Rejected(AuthFailure),
    /// The request never produced an answer.
    #[error("auth request failed: {0}")]
    Transport(String),
}

impl AuthError {
    /// Server-supplied message, if any. Callers fall back to their own copy.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected(failure) => failure.message.as_deref(),
            Self::Transport(_) => None,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn sign_in_email(&self, request: SignInEmail) -> Result<UserInfo, AuthError>;
    async fn sign_up_email(&self, request: SignUpEmail) -> Result<UserInfo, AuthError>;
    async fn get_session(&self) -> Result<Option<UserInfo>, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;
}

impl<T: AuthClient + ?Sized> AuthClient for &T {
    async fn sign_in_email(&self, request: SignInEmail) -> Result<UserInfo, AuthError> {
        (**self).sign_in_email(request).await
    }

    async fn sign_up_email(&self, request: SignUpEmail) -> Result<UserInfo, AuthError> {
        (**self).sign_up_email(request).await
    }

    async fn get_session(&self) -> Result<Option<UserInfo>, AuthError> {
        (**self).get_session().await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        (**self).sign_out().await
    }
}

/// Production client backed by the `api` server functions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ServerAuth;

fn flatten<T, E: Display>(response: Result<AuthResult<T>, E>) -> Result<T, AuthError> {
    match response {
        Ok(Ok(data)) => Ok(data),
        Ok(Err(failure)) => Err(AuthError::Rejected(failure)),
        Err(e) => Err(AuthError::Transport(e.to_string())),
    }
}

impl AuthClient for ServerAuth {
    async fn sign_in_email(&self, request: SignInEmail) -> Result<UserInfo, AuthError> {
        let SignInEmail {
            email,
            password,
            remember_me,
        } = request;
        flatten(api::sign_in_email(email, password, remember_me).await)
    }

    async fn sign_up_email(&self, request: SignUpEmail) -> Result<UserInfo, AuthError> {
        let SignUpEmail {
            name,
            email,
            password,
            image,
        } = request;
        flatten(api::sign_up_email(name, email, password, image).await)
    }

    async fn get_session(&self) -> Result<Option<UserInfo>, AuthError> {
        flatten(api::get_session().await)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        flatten(api::sign_out().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_separates_declared_and_transport_errors() {
        let ok: Result<AuthResult<u8>, String> = Ok(Ok(7));
        assert_eq!(flatten(ok), Ok(7));

        let declared: Result<AuthResult<u8>, String> = Ok(Err(AuthFailure::invalid_credentials()));
        let err = flatten(declared).unwrap_err();
        assert_eq!(err.message(), Some("Invalid email or password"));

        let thrown: Result<AuthResult<u8>, String> = Err("connection reset".into());
        let err = flatten(thrown).unwrap_err();
        assert_eq!(err, AuthError::Transport("connection reset".into()));
        assert_eq!(err.message(), None);
    }

    #[test]
    fn bare_failure_has_no_message() {
        let err = AuthError::Rejected(AuthFailure::default());
        assert_eq!(err.message(), None);
    }
}
