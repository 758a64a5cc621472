//! Tests for profile aggregation.

use super::*;
use crate::test_support::{CallLog, MockIssueClient, MockProfileStore};
use tracing_test::traced_test;

fn users(logins: &[&str]) -> Vec<User> {
    logins
        .iter()
        .enumerate()
        .map(|(i, login)| User {
            id: i as u64,
            login: login.to_string(),
        })
        .collect()
}

fn collaborators() -> (MockIssueClient, MockProfileStore) {
    let calls = CallLog::default();
    let client = MockIssueClient {
        calls: calls.clone(),
        ..Default::default()
    };
    (client, MockProfileStore::sharing(calls))
}

#[tokio::test]
async fn test_one_lookup_and_one_upsert_per_identity() {
    let (client, store) = collaborators();

    let summary = ProfileAggregator::new(&client, &store)
        .aggregate(&users(&["alice", "bob", "carol"]))
        .await
        .unwrap();

    let mut resolved = client.resolved_logins();
    resolved.sort();
    let mut persisted = store.persisted_logins();
    persisted.sort();
    assert_eq!(resolved, vec!["alice", "bob", "carol"]);
    assert_eq!(persisted, vec!["alice", "bob", "carol"]);
    assert_eq!(
        summary,
        AggregationSummary {
            resolved: 3,
            with_login: 3,
            persisted: 3,
        }
    );
}

#[tokio::test]
async fn test_persistence_starts_after_all_lookups() {
    let (client, store) = collaborators();

    ProfileAggregator::new(&client, &store)
        .aggregate(&users(&["alice", "bob", "carol", "dave"]))
        .await
        .unwrap();

    let calls = client.calls.lock().unwrap().clone();
    let last_resolve = calls.iter().rposition(|c| c.starts_with("resolve:")).unwrap();
    let first_persist = calls.iter().position(|c| c.starts_with("persist:")).unwrap();
    assert!(
        last_resolve < first_persist,
        "Every lookup must finish before any upsert: {:?}",
        calls
    );
}

#[tokio::test]
#[traced_test]
async fn test_profiles_without_login_are_persisted_but_not_logged() {
    let (mut client, store) = collaborators();
    client.missing_logins.insert("ghost".to_string());

    let summary = ProfileAggregator::new(&client, &store)
        .aggregate(&users(&["alice", "ghost", "bob"]))
        .await
        .unwrap();

    assert_eq!(summary.resolved, 3);
    assert_eq!(summary.with_login, 2);
    assert_eq!(summary.persisted, 3);
    assert_eq!(store.persisted_logins().len(), 3);
    assert!(store.persisted_logins().contains(&String::new()));
    assert!(logs_contain("Upserting users: alice,bob"));
}

#[tokio::test]
async fn test_lookup_failure_aborts_before_persistence() {
    let (mut client, store) = collaborators();
    client.failing_logins.insert("bob".to_string());

    let result = ProfileAggregator::new(&client, &store)
        .aggregate(&users(&["alice", "bob", "carol"]))
        .await;

    match result {
        Err(AnalyticsError::ProfileLookup { login, .. }) => assert_eq!(login, "bob"),
        other => panic!("Expected ProfileLookup error, got {:?}", other),
    }
    assert!(store.persisted_logins().is_empty());
}

#[tokio::test]
async fn test_persist_failure_aborts_batch() {
    let calls = CallLog::default();
    let client = MockIssueClient {
        calls: calls.clone(),
        ..Default::default()
    };
    let mut store = MockProfileStore::sharing(calls);
    store.failing_logins.insert("carol".to_string());

    let result = ProfileAggregator::new(&client, &store)
        .aggregate(&users(&["alice", "carol"]))
        .await;

    match result {
        Err(AnalyticsError::ProfilePersist { login, .. }) => assert_eq!(login, "carol"),
        other => panic!("Expected ProfilePersist error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_no_identities_makes_no_calls() {
    let (client, store) = collaborators();

    let summary = ProfileAggregator::new(&client, &store)
        .aggregate(&[])
        .await
        .unwrap();

    assert_eq!(summary, AggregationSummary::default());
    assert!(client.calls.lock().unwrap().is_empty());
}
