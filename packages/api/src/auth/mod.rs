//! Email + password accounts and session bookkeeping.
//!
//! The request and failure types are shared with client builds; everything that
//! touches the database, the session store or Argon2 is gated behind `server`.

mod credentials;
mod failure;

#[cfg(feature = "server")]
mod accounts;
#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

pub use credentials::{
    normalize_email, SignInEmail, SignUpEmail, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use failure::{AuthFailure, AuthResult};

#[cfg(feature = "server")]
pub use accounts::{authenticate, create_account, find_user, AccountError};
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password, PasswordError};
#[cfg(feature = "server")]
pub use session::{
    current_user_id, start_session, touch_session, SESSION_REMEMBER_ME_KEY, SESSION_TOUCHED_AT_KEY,
    SESSION_USER_ID_KEY,
};
