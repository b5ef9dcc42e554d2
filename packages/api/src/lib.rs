//! # API crate: auth back-end server functions
//!
//! Everything the browser needs from the server goes through the Dioxus server
//! functions in this file. Each one is declared twice: the real body behind
//! `#[cfg(feature = "server")]`, and a client stub that the macro turns into an
//! HTTP call.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | partly `server` | Request/failure types, Argon2 hashing, account queries, session keys |
//! | [`db`] | `server` | PostgreSQL pool (lazy `OnceCell` singleton) and migrations |
//! | [`env`] | none | Startup validation of server and public environment variables |
//! | [`models`] | partly `server` | `users` / `messages` rows and the client-safe `UserInfo` |
//!
//! ## Return shape
//!
//! Auth endpoints return `Result<AuthResult<T>, ServerFnError>`. The outer error
//! means the call itself failed (network, session store, database); the inner
//! [`AuthFailure`] is a declared rejection such as wrong credentials.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod env;
pub mod models;

pub use auth::{AuthFailure, AuthResult, SignInEmail, SignUpEmail};
pub use models::UserInfo;

/// Create an account and sign it in.
#[cfg(feature = "server")]
#[post("/api/auth/sign-up/email", session: tower_sessions::Session)]
pub async fn sign_up_email(
    name: String,
    email: String,
    password: String,
    image: Option<String>,
) -> Result<AuthResult<UserInfo>, ServerFnError> {
    let pool = db::get_pool().map_err(|e| ServerFnError::new(e.to_string()))?;

    let request = SignUpEmail {
        name,
        email,
        password,
        image,
    };
    let user = match auth::create_account(pool, request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    {
        Ok(user) => user,
        Err(failure) => {
            tracing::info!(code = ?failure.code, "sign-up rejected");
            return Ok(Err(failure));
        }
    };

    auth::start_session(&session, user.id, true)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %user.id, "account created");
    Ok(Ok(user.to_info()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-up/email")]
pub async fn sign_up_email(
    name: String,
    email: String,
    password: String,
    image: Option<String>,
) -> Result<AuthResult<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/sign-in/email", session: tower_sessions::Session)]
pub async fn sign_in_email(
    email: String,
    password: String,
    remember_me: bool,
) -> Result<AuthResult<UserInfo>, ServerFnError> {
    let pool = db::get_pool().map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = match auth::authenticate(pool, &email, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    {
        Ok(user) => user,
        Err(failure) => {
            tracing::info!("sign-in rejected");
            return Ok(Err(failure));
        }
    };

    auth::start_session(&session, user.id, remember_me)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %user.id, remember_me, "signed in");
    Ok(Ok(user.to_info()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-in/email")]
pub async fn sign_in_email(
    email: String,
    password: String,
    remember_me: bool,
) -> Result<AuthResult<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Return the signed-in user, renewing the session's inactivity window.
#[cfg(feature = "server")]
#[get("/api/auth/get-session", session: tower_sessions::Session)]
pub async fn get_session() -> Result<AuthResult<Option<UserInfo>>, ServerFnError> {
    let user_id = auth::current_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(Ok(None));
    };

    let pool = db::get_pool().map_err(|e| ServerFnError::new(e.to_string()))?;
    let user = auth::find_user(pool, user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        tracing::warn!(%user_id, "session points at a missing user");
        session
            .flush()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        return Ok(Ok(None));
    };

    auth::touch_session(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(Ok(Some(user.to_info())))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/get-session")]
pub async fn get_session() -> Result<AuthResult<Option<UserInfo>>, ServerFnError> {
    Ok(Ok(None))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/sign-out", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<AuthResult<()>, ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(Ok(()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-out")]
pub async fn sign_out() -> Result<AuthResult<()>, ServerFnError> {
    Ok(Ok(()))
}
