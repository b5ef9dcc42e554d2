//! Row model for the standalone `messages` table.
//!
//! The table is declared by the initial migration; nothing in the auth flow
//! reads or writes it.

#[cfg(feature = "server")]
use chrono::NaiveDateTime;
#[cfg(feature = "server")]
use sqlx::FromRow;

#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: i32,
    pub message: String,
    /// `timestamp` without time zone, defaulted by the database.
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    const INIT: &str = include_str!("../../migrations/20250420000000_init.sql");

    #[test]
    fn messages_table_matches_declared_schema() {
        let table = INIT
            .split("CREATE TABLE")
            .find(|stmt| stmt.contains("messages"))
            .expect("messages table in initial migration");
        assert!(table.contains("id SERIAL PRIMARY KEY"));
        assert!(table.contains("message TEXT NOT NULL"));
        assert!(table.contains("created_at TIMESTAMP DEFAULT now()"));
    }
}
