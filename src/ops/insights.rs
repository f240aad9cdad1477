//! The insight pipeline: aggregate journals per user, generate insights,
//! commit the batch.

use crate::ai::InsightSource;
use crate::constants::{COMMIT_FAILURE_MESSAGE, RUN_SUCCESS_MESSAGE};
use crate::errors::{AppError, AppResult};
use crate::store::{DocumentStore, Insight};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// One generated insight, paired with the user it belongs to. Not yet
/// timestamped; the commit step stamps the whole batch at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInsight {
    pub uid: String,
    /// Raw text reply from the insight client.
    pub insight: String,
}

/// Success payload of one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub message: String,
}

/// Generates insights for every user with at least one journal entry.
///
/// # Flow
///
/// 1. Fetch all users, then all journal entries (fresh, sequential reads)
/// 2. For each user in fetch order, stable-filter the entries by uid
/// 3. Serialize the subset as JSON and call the insight client
/// 4. Keep `{uid, insight}` when the reply is non-empty
///
/// Users with zero matching entries are skipped silently: no API call, no
/// placeholder in the output. Client calls are strictly sequential, bounding
/// concurrent load on the external API to one in-flight request. A client
/// error aborts the remaining users and propagates.
///
/// # Errors
///
/// Returns an error if either collection read fails or any insight request
/// fails. No partial output survives an error.
pub fn generate_insights<S, C>(store: &S, client: &C) -> AppResult<Vec<UserInsight>>
where
    S: DocumentStore,
    C: InsightSource,
{
    let users = store.list_users()?;
    let journals = store.list_journals()?;
    info!(
        "Generating insights for {} users from {} journal entries",
        users.len(),
        journals.len()
    );

    let mut insights = Vec::new();
    for user in &users {
        let user_journals: Vec<_> = journals
            .iter()
            .filter(|entry| entry.uid == user.uid)
            .collect();

        if user_journals.is_empty() {
            debug!("Skipping user {}: no journal entries", user.uid);
            continue;
        }

        let journals_json = serde_json::to_string(&user_journals)
            .map_err(|e| AppError::Internal(format!("Failed to serialize journals: {}", e)))?;

        debug!(
            "Requesting insight for user {} ({} entries)",
            user.uid,
            user_journals.len()
        );
        let insight = client.generate(&journals_json)?;

        if !insight.is_empty() {
            insights.push(UserInsight {
                uid: user.uid.clone(),
                insight,
            });
        }
    }

    info!("Generated {} insights", insights.len());
    Ok(insights)
}

/// Runs one full invocation: generate insights, stamp, and commit the batch.
///
/// Read and API errors propagate as themselves. A commit failure is logged
/// with detail but surfaces only as a generic internal error; the caller
/// never sees the underlying cause.
///
/// # Errors
///
/// Returns an error if any pipeline stage fails. On a commit failure no
/// insight document is persisted (the batch is atomic).
pub fn run<S, C>(store: &S, client: &C) -> AppResult<RunSummary>
where
    S: DocumentStore,
    C: InsightSource,
{
    let insights = generate_insights(store, client)?;

    let created_at = Utc::now().timestamp_millis();
    let batch: Vec<Insight> = insights
        .into_iter()
        .map(|entry| Insight {
            uid: entry.uid,
            insight: entry.insight,
            created_at,
        })
        .collect();

    if let Err(e) = store.write_insights(&batch) {
        error!("Insight batch commit failed: {}", e);
        return Err(AppError::Internal(COMMIT_FAILURE_MESSAGE.to_string()));
    }

    info!("Committed {} insight documents", batch.len());
    Ok(RunSummary {
        message: RUN_SUCCESS_MESSAGE.to_string(),
    })
}
