//! Startup seeding against real local endpoints.
//!
//! A throwaway axum server stands in for the users API; the unreachable case
//! binds and drops a listener so the port refuses connections.

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use headcount_core::Status;
use headcount_server::retry::{RetryError, RetryPolicy};
use headcount_server::seed::{fetch_contacts, FetchError, SeedError};

/// Serves `router` on an ephemeral port and returns its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/users")
}

#[tokio::test]
async fn fetches_and_converts_users() {
    let router = Router::new().route(
        "/users",
        get(|| async {
            Json(json!([
                {"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz", "phone": "1-770"},
                {"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "phone": "010-692"}
            ]))
        }),
    );
    let base = spawn_server(router).await;

    let contacts = fetch_contacts(&format!("{base}/users"), &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name, "Leanne Graham");
    assert!(contacts.iter().all(|c| c.status == Status::Inactive));
}

#[tokio::test]
async fn unexpected_status_aborts_without_retrying() {
    let router = Router::new().route("/users", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let base = spawn_server(router).await;

    let start = Instant::now();
    let err = fetch_contacts(&format!("{base}/users"), &RetryPolicy::default())
        .await
        .unwrap_err();

    assert!(start.elapsed() < Duration::from_secs(1));
    match err {
        SeedError::Fetch {
            error:
                RetryError::Aborted {
                    attempt: 1,
                    error: FetchError::Status(status),
                },
            ..
        } => assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE),
        other => panic!("expected an aborted fetch, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_aborts() {
    let router = Router::new().route("/users", get(|| async { "not json" }));
    let base = spawn_server(router).await;

    let err = fetch_contacts(&format!("{base}/users"), &RetryPolicy::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SeedError::Fetch {
            error: RetryError::Aborted {
                error: FetchError::Decode(_),
                ..
            },
            ..
        }
    ));
}

#[tokio::test]
async fn unreachable_endpoint_backs_off_then_fails() {
    let url = closed_port_url().await;
    let policy = RetryPolicy::default();

    let start = Instant::now();
    let err = fetch_contacts(&url, &policy).await.unwrap_err();
    let elapsed = start.elapsed();

    // 1s + 2s of backoff between three attempts, bounded by the deadline.
    assert!(elapsed >= Duration::from_secs(3), "took {elapsed:?}");
    assert!(elapsed <= policy.deadline + Duration::from_millis(500), "took {elapsed:?}");
    assert!(
        matches!(
            err,
            SeedError::Fetch {
                error: RetryError::Exhausted { attempts: 3, .. },
                ..
            }
        ),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn deadline_cuts_off_retries() {
    let url = closed_port_url().await;
    let policy = RetryPolicy {
        max_attempts: 10,
        base_delay: Duration::from_millis(200),
        deadline: Duration::from_secs(1),
    };

    let start = Instant::now();
    let err = fetch_contacts(&url, &policy).await.unwrap_err();

    assert!(start.elapsed() < Duration::from_secs(2));
    assert!(matches!(
        err,
        SeedError::Fetch {
            error: RetryError::DeadlineExceeded { .. },
            ..
        }
    ));
}
