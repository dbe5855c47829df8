use serde_json::json;
use shared::{LoginRequest, NewTransaction, PriceSnapshot, RegisterRequest};

use super::*;
use crate::app::{notify, AppState};

/// Every data operation against a canned response, returning whether it
/// produced a value.
async fn run_all(h: &Harness) -> Vec<bool> {
    vec![
        h.app.fetch_transactions().await.is_some(),
        h.app.fetch_user().await.is_some(),
        h.app.fetch_wallets().await.is_some(),
        h.app.fetch_categories().await.is_some(),
        h.app.fetch_crypto_prices().await.is_some(),
        h.app.convert_currency("EUR", "GBP", 1.0).await.is_some(),
    ]
}

fn route_all(h: &Harness, status: u16, body: &str) {
    for path in ["/transactions", "/users", "/wallets", "/categories", "/information/crypto"] {
        h.transport.respond(HttpMethod::Get, backend(path), status, body);
    }
    h.transport.respond(HttpMethod::Get, CURRENCY_API, status, body);
}

fn seed_state(h: &Harness) -> AppState {
    let mut state = h.app.state.write();
    state.wallets = vec![serde_json::from_value(json!({"id": "w1"})).unwrap()];
    state.conversion_result = 3.0;
    state.cmc_response = PriceSnapshot {
        payload: json!({"data": []}),
    };
    (*state).clone()
}

#[tokio::test]
async fn test_absent_body_leaves_state_and_reports_once_per_call() {
    for body in ["", "   \n", "null"] {
        let h = Harness::logged_in("T");
        let before = seed_state(&h);
        route_all(&h, 200, body);

        let produced = run_all(&h).await;

        assert!(produced.iter().all(|p| !p), "body {:?} produced a value", body);
        assert_eq!(h.app.snapshot(), before);
        assert_eq!(h.notifier.errors().len(), produced.len());
        assert!(h.notifier.successes().is_empty());
        for error in h.notifier.errors() {
            assert_eq!(error.title, notify::ERROR_TITLE);
        }
    }
}

#[tokio::test]
async fn test_absent_body_fails_register_and_login() {
    for body in ["", "   \n", "null"] {
        let h = Harness::new();
        h.transport
            .respond(HttpMethod::Post, backend("/users/register"), 201, body);
        h.transport
            .respond(HttpMethod::Post, backend("/users/login"), 200, body);

        let registration = RegisterRequest {
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
            profile: Default::default(),
        };
        assert!(h.app.register(registration).await.is_none(), "body {:?}", body);
        assert_eq!(h.notifier.errors().len(), 1);

        let credentials = LoginRequest {
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(h.app.login(credentials).await.is_none(), "body {:?}", body);
        h.app.settle().await;

        assert_eq!(h.notifier.errors().len(), 2);
        assert!(h.notifier.successes().is_empty());
        assert!(h.tokens.is_empty());
        assert!(!h.app.is_logged_in());
        assert!(h.navigator.all().is_empty());

        let urls: Vec<String> = h.transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec![backend("/users/register"), backend("/users/login")]);
    }
}

#[tokio::test]
async fn test_schema_mismatch_is_reported() {
    let h = Harness::logged_in("T");
    h.transport
        .respond(HttpMethod::Get, backend("/transactions"), 200, r#"{"rows":[]}"#);

    assert!(h.app.fetch_transactions().await.is_none());

    let errors = h.notifier.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]
        .detail
        .as_deref()
        .is_some_and(|d| d.starts_with("Malformed response")));
}

#[tokio::test]
async fn test_server_message_is_surfaced() {
    let h = Harness::logged_in("T");
    route_all(&h, 403, r#"{"message":"Session expired"}"#);

    run_all(&h).await;

    let errors = h.notifier.errors();
    assert_eq!(errors.len(), 6);
    assert!(errors
        .iter()
        .all(|e| e.detail.as_deref() == Some("Session expired")));
}

#[tokio::test]
async fn test_status_text_without_server_message() {
    let h = Harness::logged_in("T");
    h.transport
        .respond(HttpMethod::Get, backend("/wallets"), 502, "<html>Bad Gateway</html>");

    assert!(h.app.fetch_wallets().await.is_none());

    let errors = h.notifier.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].detail.as_deref(),
        Some("Request failed with status code 502")
    );
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let h = Harness::new();
    h.transport
        .fail(HttpMethod::Get, backend("/categories"), "connection refused");

    assert!(h.app.fetch_categories().await.is_none());

    let errors = h.notifier.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].detail.as_deref(),
        Some("Network error: connection refused")
    );
    assert!(h.app.snapshot().categories.is_empty());
}

#[tokio::test]
async fn test_create_transaction_failure_does_not_navigate() {
    let h = Harness::logged_in("T");
    h.transport
        .respond(HttpMethod::Post, backend("/transactions"), 201, "");

    let created = h
        .app
        .create_transaction(NewTransaction::default())
        .await;

    assert!(created.is_none());
    assert!(h.navigator.all().is_empty());
    assert_eq!(h.notifier.errors().len(), 1);
}
