// Unit tests for analytics_core
// Covers collect_analytics end to end with mock collaborators

use super::*;
use crate::test_support::{bounty, plain, price_config, CallLog, MockIssueClient, MockProfileStore};
use config_manager::{GitHubSettings, ModeConfig, PaginationConfig, SupabaseSettings};
use github_client::Issue;
use tracing_test::traced_test;

fn config(disable_analytics: bool) -> BotConfig {
    BotConfig {
        github: GitHubSettings {
            owner: "ubiquity".to_string(),
            repo: "bounty-bot".to_string(),
            api_url: None,
        },
        price: price_config(),
        mode: ModeConfig { disable_analytics },
        supabase: SupabaseSettings {
            url: "https://example.supabase.co".to_string(),
            table: "users".to_string(),
        },
        pagination: PaginationConfig::default(),
    }
}

fn full_page(offset: u64, assignee: &str) -> Vec<Issue> {
    (0..30).map(|i| plain(offset + i, Some(assignee))).collect()
}

fn collaborators(pages: Vec<Vec<Issue>>) -> (MockIssueClient, MockProfileStore) {
    let calls = CallLog::default();
    let client = MockIssueClient {
        pages,
        calls: calls.clone(),
        ..Default::default()
    };
    (client, MockProfileStore::sharing(calls))
}

#[tokio::test]
#[traced_test]
async fn test_disabled_analytics_makes_no_calls() {
    let (client, store) = collaborators(vec![vec![bounty(1, Some("alice"))]]);

    let outcome = collect_analytics(&config(true), &client, &store)
        .await
        .unwrap();

    assert_eq!(outcome, CollectionOutcome::Skipped);
    assert!(client.calls.lock().unwrap().is_empty());
    assert!(logs_contain("Skipping to collect analytics, reason: mode=true"));
    assert!(!logs_contain("Collecting analytics information"));
}

#[tokio::test]
#[traced_test]
async fn test_collects_assignees_of_bounties_across_pages() {
    let mut page_one = full_page(100, "not-a-bounty-hunter");
    page_one[3] = bounty(1, Some("A"));
    page_one[7] = bounty(2, Some("B"));
    let mut page_two = full_page(200, "not-a-bounty-hunter");
    page_two[0] = bounty(3, Some("A"));
    page_two[29] = bounty(4, Some("C"));
    let page_three = vec![bounty(5, Some("B")), bounty(6, None), plain(7, Some("D"))];

    let (client, store) = collaborators(vec![page_one, page_two, page_three]);

    let outcome = collect_analytics(&config(false), &client, &store)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        CollectionOutcome::Completed(AnalyticsReport {
            bounties: 6,
            assignees: 3,
            profiles: AggregationSummary {
                resolved: 3,
                with_login: 3,
                persisted: 3,
            },
        })
    );
    assert_eq!(client.requested_pages(), vec![1, 2, 3]);
    assert_eq!(client.resolved_logins().len(), 3);
    let mut persisted = store.persisted_logins();
    persisted.sort();
    assert_eq!(persisted, vec!["A", "B", "C"]);
    assert!(logs_contain("Collecting analytics information..."));
    assert!(logs_contain("Upserting users: A,B,C"));
    assert!(logs_contain("Collecting analytics finished..."));
}

#[tokio::test]
async fn test_aggregation_happens_once_after_full_scan() {
    let mut page_one = full_page(100, "x");
    page_one[0] = bounty(1, Some("A"));
    let (client, store) = collaborators(vec![page_one, vec![bounty(2, Some("B"))]]);

    collect_analytics(&config(false), &client, &store)
        .await
        .unwrap();

    let calls = client.calls.lock().unwrap().clone();
    let last_list = calls.iter().rposition(|c| c.starts_with("list:")).unwrap();
    let first_resolve = calls.iter().position(|c| c.starts_with("resolve:")).unwrap();
    assert!(last_list < first_resolve, "Calls out of order: {:?}", calls);
}

#[tokio::test]
#[traced_test]
async fn test_fetch_failure_aborts_without_persisting() {
    let mut page_one = full_page(100, "x");
    page_one[0] = bounty(1, Some("A"));
    let (mut client, store) = collaborators(vec![page_one, full_page(200, "y")]);
    client.fail_on_page = Some(2);

    let result = collect_analytics(&config(false), &client, &store).await;

    assert!(matches!(
        result,
        Err(AnalyticsError::IssueFetch { page: 2, .. })
    ));
    assert!(client.resolved_logins().is_empty());
    assert!(store.persisted_logins().is_empty());
    assert!(!logs_contain("Collecting analytics finished"));
}

#[tokio::test]
#[traced_test]
async fn test_lookup_failure_aborts_run() {
    let (mut client, store) = collaborators(vec![vec![
        bounty(1, Some("A")),
        bounty(2, Some("B")),
    ]]);
    client.failing_logins.insert("B".to_string());

    let result = collect_analytics(&config(false), &client, &store).await;

    assert!(matches!(result, Err(AnalyticsError::ProfileLookup { .. })));
    assert!(store.persisted_logins().is_empty());
    assert!(!logs_contain("Collecting analytics finished"));
}

#[tokio::test]
async fn test_repository_without_bounties_completes() {
    let (client, store) = collaborators(vec![vec![plain(1, Some("A"))]]);

    let outcome = collect_analytics(&config(false), &client, &store)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        CollectionOutcome::Completed(AnalyticsReport::default())
    );
    assert!(client.resolved_logins().is_empty());
}
