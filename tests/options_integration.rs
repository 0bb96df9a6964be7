//! Integration tests for the option providers
//!
//! Exercises the provider-to-session-to-client path with mock
//! collaborators: filtering, sentinel records, transfer prefixing, and
//! the soft-fail policy.

mod common;

use actual_budget_node::client::BudgetState;
use actual_budget_node::host::StaticContext;
use actual_budget_node::options::{
    OptionRecord, account_options, budget_options, category_options, payee_options,
};
use actual_budget_node::session::Session;
use common::{
    MockClient, MockConnector, account, budget, category, init_logging, payee, test_credentials,
};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::Ordering;

fn session_with(client: MockClient) -> Session {
    Session::new(Arc::new(MockConnector::new(client)))
}

fn ctx() -> StaticContext {
    StaticContext::new(test_credentials()).with_parameter("budgetId", json!("group-1"))
}

#[tokio::test]
async fn budget_options_keep_only_remote_budgets() {
    init_logging();
    let session = session_with(MockClient::with_budgets(vec![
        budget("A", "1", BudgetState::Remote),
        budget("B", "2", BudgetState::Local),
        budget("C", "3", BudgetState::Unknown),
    ]));

    let records = budget_options(&session, &ctx()).await;
    assert_eq!(records, vec![OptionRecord::new("A", "1")]);
}

#[tokio::test]
async fn account_options_end_with_none_sentinel() {
    init_logging();
    let session = session_with(MockClient {
        accounts: vec![account("acct-1", "Checking"), account("acct-2", "Savings")],
        ..MockClient::default()
    });

    let records = account_options(&session, &ctx()).await;
    assert_eq!(
        records,
        vec![
            OptionRecord::new("Checking", "acct-1"),
            OptionRecord::new("Savings", "acct-2"),
            OptionRecord::new("No account", ""),
        ]
    );
}

#[tokio::test]
async fn category_options_end_with_none_sentinel() {
    init_logging();
    let session = session_with(MockClient {
        categories: vec![category("cat-1", "Groceries")],
        ..MockClient::default()
    });

    let records = category_options(&session, &ctx()).await;
    assert_eq!(
        records,
        vec![
            OptionRecord::new("Groceries", "cat-1"),
            OptionRecord::new("No category", ""),
        ]
    );
}

#[tokio::test]
async fn payee_options_prefix_transfers_and_end_with_sentinel() {
    init_logging();
    let session = session_with(MockClient {
        payees: vec![
            payee("p-1", "Coffee Shop", None),
            payee("p-2", "Savings", Some("acct-2")),
        ],
        ..MockClient::default()
    });

    let records = payee_options(&session, &ctx()).await;
    assert_eq!(
        records,
        vec![
            OptionRecord::new("Coffee Shop", "p-1"),
            OptionRecord::new("Transfer: Savings", "p-2"),
            OptionRecord::new("No payee", ""),
        ]
    );
}

#[tokio::test]
async fn provider_errors_become_empty_dropdowns() {
    init_logging();
    let session = session_with(MockClient::failing_reads());
    assert!(budget_options(&session, &ctx()).await.is_empty());
    assert!(account_options(&session, &ctx()).await.is_empty());
    assert!(category_options(&session, &ctx()).await.is_empty());
    assert!(payee_options(&session, &ctx()).await.is_empty());
}

#[tokio::test]
async fn session_failure_is_soft_failed_too() {
    init_logging();
    let connector = Arc::new(MockConnector::failing());
    let session = Session::new(connector.clone());

    assert!(budget_options(&session, &ctx()).await.is_empty());
    assert!(payee_options(&session, &ctx()).await.is_empty());

    // Both providers replayed the one settled failure
    assert_eq!(connector.connects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn parallel_providers_share_one_session_init() {
    init_logging();
    let connector = Arc::new(MockConnector::new(MockClient {
        budgets: vec![budget("A", "1", BudgetState::Remote)],
        accounts: vec![account("acct-1", "Checking")],
        categories: vec![category("cat-1", "Groceries")],
        payees: vec![payee("p-1", "Coffee Shop", None)],
        ..MockClient::default()
    }));
    let session = Session::new(connector.clone());
    let ctx = ctx();

    // The host fires all four dropdown lookups at once
    let (budgets, accounts, categories, payees) = tokio::join!(
        budget_options(&session, &ctx),
        account_options(&session, &ctx),
        category_options(&session, &ctx),
        payee_options(&session, &ctx),
    );
    assert_eq!(budgets.len(), 1);
    assert_eq!(accounts.len(), 2);
    assert_eq!(categories.len(), 2);
    assert_eq!(payees.len(), 2);

    assert_eq!(connector.connects.load(Ordering::SeqCst), 1);
    assert_eq!(connector.client.downloads.load(Ordering::SeqCst), 1);
}
