//! Account rows in the `users` table.

use sqlx::PgPool;
use uuid::Uuid;

use super::{hash_password, normalize_email, verify_password, AuthFailure, AuthResult, PasswordError, SignUpEmail};
use crate::models::User;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Insert a new account. An existing email is a declared failure, including
/// when a concurrent sign-up wins the race.
pub async fn create_account(pool: &PgPool, request: SignUpEmail) -> Result<AuthResult<User>, AccountError> {
    let request = match request.checked() {
        Ok(request) => request,
        Err(failure) => return Ok(Err(failure)),
    };

    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(&request.email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Ok(Err(AuthFailure::user_already_exists()));
    }

    let password_hash = hash_password(&request.password)?;

    let user: Option<User> = sqlx::query_as(
        r#"
        INSERT INTO users (id, email, name, image, password_hash)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.email)
    .bind(&request.name)
    .bind(&request.image)
    .bind(&password_hash)
    .fetch_optional(pool)
    .await?;

    Ok(user.ok_or_else(AuthFailure::user_already_exists))
}

/// Check an email/password pair. Unknown email and wrong password produce the
/// same failure.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> Result<AuthResult<User>, AccountError> {
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(normalize_email(email))
        .fetch_optional(pool)
        .await?;

    let Some(user) = user else {
        return Ok(Err(AuthFailure::invalid_credentials()));
    };

    if verify_password(password, &user.password_hash)? {
        Ok(Ok(user))
    } else {
        Ok(Err(AuthFailure::invalid_credentials()))
    }
}

pub async fn find_user(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
