//! Record types and collection-level read/write operations.
//!
//! The record structs mirror the stored documents. `JournalEntry` serializes
//! with camelCase field names so the JSON handed to the insight client carries
//! the field names the journal prompts are known by (`rememberThisDayBy`,
//! `moodToday`, `challenges`).

use crate::errors::{AppResult, StoreError};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An application user. Read-only in this workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub uid: String,
}

/// A single journal entry: free-text answers to three fixed prompts, tagged
/// with the authoring user's uid. A user may have zero or more entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub uid: String,
    pub remember_this_day_by: String,
    pub mood_today: String,
    pub challenges: String,
}

/// A generated insight document, one per user per invocation. Keyed by uid in
/// storage, so a later invocation replaces the previous record in full.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    pub uid: String,
    /// Raw text reply from the insight client, stored unparsed.
    pub insight: String,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

/// Fetches every user record, in insertion order.
///
/// # Errors
///
/// Returns an error if the read fails; no partial result is produced.
pub fn list_users(conn: &Connection) -> AppResult<Vec<User>> {
    debug!("Listing all users");

    let mut stmt = conn
        .prepare("SELECT uid FROM app_users ORDER BY rowid")
        .map_err(StoreError::Sqlite)?;

    let users = stmt
        .query_map([], |row| Ok(User { uid: row.get(0)? }))
        .map_err(StoreError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::Sqlite)?;

    debug!("Fetched {} users", users.len());
    Ok(users)
}

/// Fetches every journal entry, in insertion order.
///
/// # Errors
///
/// Returns an error if the read fails; no partial result is produced.
pub fn list_journals(conn: &Connection) -> AppResult<Vec<JournalEntry>> {
    debug!("Listing all journal entries");

    let mut stmt = conn
        .prepare(
            r#"
            SELECT uid, remember_this_day_by, mood_today, challenges
            FROM user_journals
            ORDER BY rowid
            "#,
        )
        .map_err(StoreError::Sqlite)?;

    let journals = stmt
        .query_map([], |row| {
            Ok(JournalEntry {
                uid: row.get(0)?,
                remember_this_day_by: row.get(1)?,
                mood_today: row.get(2)?,
                challenges: row.get(3)?,
            })
        })
        .map_err(StoreError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::Sqlite)?;

    debug!("Fetched {} journal entries", journals.len());
    Ok(journals)
}

/// Commits one atomic batch of insight documents.
///
/// Each write is a full-document replace keyed by uid: a prior insight for
/// the same user is overwritten wholesale, no history retained. The batch is
/// a single transaction, so either every insight is persisted or none are.
///
/// # Errors
///
/// Returns an error if the transaction fails; in that case no document from
/// the batch is visible in the store.
pub fn replace_insights(conn: &mut Connection, batch: &[Insight]) -> AppResult<()> {
    debug!("Committing insight batch of {} documents", batch.len());

    let tx = conn.transaction().map_err(StoreError::Sqlite)?;
    for insight in batch {
        tx.execute(
            r#"
            INSERT OR REPLACE INTO users_insights (uid, insights, created_at)
            VALUES (?1, ?2, ?3)
            "#,
            params![insight.uid, insight.insight, insight.created_at],
        )
        .map_err(StoreError::Sqlite)?;
    }
    tx.commit().map_err(StoreError::Sqlite)?;

    debug!("Insight batch committed");
    Ok(())
}

/// Retrieves the stored insight for a uid, if any.
///
/// # Errors
///
/// Returns an error if the read fails. Returns `Ok(None)` when no insight
/// document exists for the uid.
pub fn get_insight(conn: &Connection, uid: &str) -> AppResult<Option<Insight>> {
    let result = conn.query_row(
        "SELECT uid, insights, created_at FROM users_insights WHERE uid = ?1",
        params![uid],
        |row| {
            Ok(Insight {
                uid: row.get(0)?,
                insight: row.get(1)?,
                created_at: row.get(2)?,
            })
        },
    );

    match result {
        Ok(insight) => Ok(Some(insight)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StoreError::Sqlite(e).into()),
    }
}
