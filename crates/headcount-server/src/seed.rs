//! Startup seeding of the contact store from a remote users API.
//!
//! The endpoint is expected to return a JSON array of
//! `{ "name", "email", "phone", ... }` objects (the jsonplaceholder users
//! shape). Each user becomes an inactive contact with a fresh identifier.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use headcount_core::{Contact, ContactId, Status};

use crate::retry::{retry, Attempt, RetryError, RetryPolicy};

/// Per-request timeout, independent of the overall retry deadline.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A user record as served by the remote API.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Failure of a single fetch attempt.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status code: {0}")]
    Status(StatusCode),

    #[error("error decoding fetched user data: {0}")]
    Decode(reqwest::Error),
}

/// Seeding failed; the caller decides whether to start empty.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to build http client: {0}")]
    Client(reqwest::Error),

    #[error("failed to fetch users from {url}: {error}")]
    Fetch {
        url: String,
        error: RetryError<FetchError>,
    },
}

/// Converts remote users into inactive contacts, preserving order.
pub fn contacts_from_users(users: Vec<RemoteUser>) -> Vec<Contact> {
    users
        .into_iter()
        .map(|user| Contact {
            id: ContactId::new(),
            name: user.name,
            email: user.email,
            phone: user.phone,
            status: Status::Inactive,
        })
        .collect()
}

/// Fetches users from `url` under `policy` and converts them to contacts.
///
/// Transport errors (connect, timeout) are retried; an unexpected status
/// code or an undecodable body aborts at once.
pub async fn fetch_contacts(url: &str, policy: &RetryPolicy) -> Result<Vec<Contact>, SeedError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(SeedError::Client)?;

    let users = retry(policy, |attempt| {
        let client = client.clone();
        async move {
            tracing::debug!(attempt, url, "fetching seed users");
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|err| Attempt::Retry(FetchError::Request(err)))?;

            if response.status() != StatusCode::OK {
                return Err(Attempt::Abort(FetchError::Status(response.status())));
            }

            response
                .json::<Vec<RemoteUser>>()
                .await
                .map_err(|err| Attempt::Abort(FetchError::Decode(err)))
        }
    })
    .await
    .map_err(|error| SeedError::Fetch {
        url: url.to_string(),
        error,
    })?;

    tracing::info!(count = users.len(), url, "fetched seed users");
    Ok(contacts_from_users(users))
}
