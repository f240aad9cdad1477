//! Integration tests for the insight pipeline.
//!
//! These tests drive `ops::generate_insights` and `ops::run` with stub store
//! and client implementations to verify the per-user aggregation, the
//! sequential abort-on-error behavior, and the atomicity of the batch commit.

use glean::ai::InsightSource;
use glean::errors::{AiError, AppError, AppResult, StoreError};
use glean::ops;
use glean::store::{DocumentStore, Insight, JournalEntry, User};
use std::cell::RefCell;

/// In-memory store stub that records committed batches and can be told to
/// fail the commit step.
struct StubStore {
    users: Vec<User>,
    journals: Vec<JournalEntry>,
    fail_commit: bool,
    committed: RefCell<Vec<Vec<Insight>>>,
}

impl StubStore {
    fn new(users: Vec<User>, journals: Vec<JournalEntry>) -> Self {
        Self {
            users,
            journals,
            fail_commit: false,
            committed: RefCell::new(Vec::new()),
        }
    }

    fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }
}

impl DocumentStore for StubStore {
    fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.clone())
    }

    fn list_journals(&self) -> AppResult<Vec<JournalEntry>> {
        Ok(self.journals.clone())
    }

    fn write_insights(&self, batch: &[Insight]) -> AppResult<()> {
        if self.fail_commit {
            return Err(StoreError::Custom("disk on fire".to_string()).into());
        }
        self.committed.borrow_mut().push(batch.to_vec());
        Ok(())
    }
}

/// Client stub that records the JSON it was called with and replies from a
/// canned script, one reply per call.
struct StubClient {
    replies: Vec<AppResult<String>>,
    calls: RefCell<Vec<String>>,
}

impl StubClient {
    fn new(replies: Vec<AppResult<String>>) -> Self {
        Self {
            replies,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A single-entry script answers every call with the same reply.
    fn always(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string())])
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl InsightSource for StubClient {
    fn generate(&self, journals_json: &str) -> AppResult<String> {
        let index = self.calls.borrow().len();
        self.calls.borrow_mut().push(journals_json.to_string());

        let scripted = if self.replies.len() == 1 {
            &self.replies[0]
        } else {
            &self.replies[index]
        };
        match scripted {
            Ok(text) => Ok(text.clone()),
            Err(_) => Err(AiError::Api {
                status: 500,
                message: "scripted failure".to_string(),
            }
            .into()),
        }
    }
}

fn user(uid: &str) -> User {
    User {
        uid: uid.to_string(),
    }
}

fn journal(uid: &str, mood: &str, remember: &str, challenges: &str) -> JournalEntry {
    JournalEntry {
        uid: uid.to_string(),
        mood_today: mood.to_string(),
        remember_this_day_by: remember.to_string(),
        challenges: challenges.to_string(),
    }
}

#[test]
fn test_user_without_journals_triggers_no_call_and_no_output() {
    let store = StubStore::new(vec![user("u1")], vec![]);
    let client = StubClient::always("unused");

    let insights = ops::generate_insights(&store, &client).unwrap();

    assert!(insights.is_empty());
    assert_eq!(client.call_count(), 0);
}

#[test]
fn test_single_user_single_journal() {
    let store = StubStore::new(
        vec![user("u1")],
        vec![journal("u1", "ok", "coffee", "none")],
    );
    let client = StubClient::always("['A', 'B', 'C']");

    let insights = ops::generate_insights(&store, &client).unwrap();

    // Client called exactly once, with JSON containing the single record
    assert_eq!(client.call_count(), 1);
    let sent = client.calls.borrow()[0].clone();
    assert!(sent.contains("\"uid\":\"u1\""));
    assert!(sent.contains("\"moodToday\":\"ok\""));
    assert!(sent.contains("\"rememberThisDayBy\":\"coffee\""));
    assert!(sent.contains("\"challenges\":\"none\""));

    // The pipeline yields the client's raw reply, unparsed
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].uid, "u1");
    assert_eq!(insights[0].insight, "['A', 'B', 'C']");
}

#[test]
fn test_at_most_one_insight_per_user() {
    let store = StubStore::new(
        vec![user("u1"), user("u2")],
        vec![
            journal("u1", "good", "sunrise", "traffic"),
            journal("u2", "bad", "rain", "deadlines"),
            journal("u1", "great", "dinner", "none"),
        ],
    );
    let client = StubClient::always("insight text");

    let insights = ops::generate_insights(&store, &client).unwrap();

    // One call and one output entry per user with journals, users in fetch order
    assert_eq!(client.call_count(), 2);
    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0].uid, "u1");
    assert_eq!(insights[1].uid, "u2");

    // u1's call carried both of u1's entries, in original fetch order
    let first_call = client.calls.borrow()[0].clone();
    let sunrise = first_call.find("sunrise").unwrap();
    let dinner = first_call.find("dinner").unwrap();
    assert!(sunrise < dinner);
    assert!(!first_call.contains("deadlines"));
}

#[test]
fn test_empty_client_reply_is_dropped() {
    let store = StubStore::new(
        vec![user("u1")],
        vec![journal("u1", "ok", "coffee", "none")],
    );
    let client = StubClient::always("");

    let insights = ops::generate_insights(&store, &client).unwrap();

    assert_eq!(client.call_count(), 1);
    assert!(insights.is_empty());
}

#[test]
fn test_client_failure_aborts_subsequent_users() {
    let store = StubStore::new(
        vec![user("u1"), user("u2"), user("u3")],
        vec![
            journal("u1", "ok", "a", "b"),
            journal("u2", "ok", "c", "d"),
            journal("u3", "ok", "e", "f"),
        ],
    );
    // First call succeeds, second fails
    let client = StubClient::new(vec![
        Ok("first".to_string()),
        Err(AppError::Internal("placeholder".to_string())),
        Ok("third".to_string()),
    ]);

    let result = ops::generate_insights(&store, &client);

    assert!(result.is_err());
    // u3 was never processed
    assert_eq!(client.call_count(), 2);
}

#[test]
fn test_run_commits_one_document_per_user() {
    let store = StubStore::new(
        vec![user("u1"), user("u2")],
        vec![journal("u1", "ok", "coffee", "none")],
    );
    let client = StubClient::always("reply text");

    let before = chrono::Utc::now().timestamp_millis();
    let summary = ops::run(&store, &client).unwrap();
    let after = chrono::Utc::now().timestamp_millis();

    assert!(!summary.message.is_empty());

    // Exactly one committed batch containing exactly one document, for u1
    let committed = store.committed.borrow();
    assert_eq!(committed.len(), 1);
    let batch = &committed[0];
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].uid, "u1");
    assert_eq!(batch[0].insight, "reply text");
    assert!(batch[0].created_at >= before && batch[0].created_at <= after);
}

#[test]
fn test_run_commit_failure_is_generic_internal_error() {
    let store = StubStore::new(
        vec![user("u1")],
        vec![journal("u1", "ok", "coffee", "none")],
    )
    .failing_commit();
    let client = StubClient::always("reply");

    let result = ops::run(&store, &client);

    match result {
        Err(AppError::Internal(message)) => {
            assert_eq!(message, "failed to add insights");
            // The underlying cause stays server-side
            assert!(!message.contains("disk on fire"));
        }
        other => panic!("Expected generic internal error, got {:?}", other),
    }

    // Nothing was persisted
    assert!(store.committed.borrow().is_empty());
}

#[test]
fn test_run_propagates_client_error() {
    let store = StubStore::new(
        vec![user("u1")],
        vec![journal("u1", "ok", "coffee", "none")],
    );
    let client = StubClient::new(vec![Err(AppError::Internal("placeholder".to_string()))]);

    let result = ops::run(&store, &client);

    assert!(matches!(result, Err(AppError::Ai(_))));
    // The commit step was never reached
    assert!(store.committed.borrow().is_empty());
}

#[test]
fn test_run_with_no_users_commits_empty_batch() {
    let store = StubStore::new(vec![], vec![journal("ghost", "ok", "a", "b")]);
    let client = StubClient::always("unused");

    let summary = ops::run(&store, &client).unwrap();

    assert!(!summary.message.is_empty());
    assert_eq!(client.call_count(), 0);
    let committed = store.committed.borrow();
    assert_eq!(committed.len(), 1);
    assert!(committed[0].is_empty());
}
