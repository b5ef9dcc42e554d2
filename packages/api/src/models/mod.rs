//! Data models for the application.

mod message;
mod user;

#[cfg(feature = "server")]
pub use message::Message;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
