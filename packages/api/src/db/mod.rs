//! # Database module: PostgreSQL connection pool
//!
//! The pool is a process-wide singleton in a [`tokio::sync::OnceCell`]. The
//! server calls [`init_pool`] once with the validated `DATABASE_URL`; that
//! connects and applies the migrations under `packages/api/migrations`. Server
//! functions then borrow it through [`get_pool`].

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{get_pool, init_pool, DbError};
