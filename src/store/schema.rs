//! Collection (table) definitions and schema initialization.

use crate::errors::{AppResult, StoreError};
use rusqlite::Connection;

/// Creates all collections if they don't exist.
///
/// Safe to call multiple times. Journal fields default to empty strings so
/// that a record written without one of the three answers still reads back as
/// a complete `JournalEntry`.
///
/// # Errors
///
/// Returns an error if table creation fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS app_users (
            uid TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS user_journals (
            uid TEXT NOT NULL,
            remember_this_day_by TEXT NOT NULL DEFAULT '',
            mood_today TEXT NOT NULL DEFAULT '',
            challenges TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS users_insights (
            uid TEXT PRIMARY KEY,
            insights TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_user_journals_uid ON user_journals(uid);
        "#,
    )
    .map_err(StoreError::Sqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
    }

    #[test]
    fn test_journal_fields_default_to_empty() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        // Insert a journal row without the three answer fields
        conn.execute("INSERT INTO user_journals (uid) VALUES ('u1')", [])
            .unwrap();

        let mood: String = conn
            .query_row(
                "SELECT mood_today FROM user_journals WHERE uid = 'u1'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(mood, "");
    }
}
