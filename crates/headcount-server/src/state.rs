//! Application state shared by all handlers.
//!
//! [`AppState`] holds the contact service behind an `Arc<dyn ContactService>`.
//! The store synchronizes internally with a reader-writer lock whose critical
//! sections never await, so handlers call it directly without an async mutex.

use std::sync::Arc;

use headcount_core::{Contact, ContactService, ContactStore};

use crate::config::ServerConfig;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The contact service every handler dispatches through.
    pub contacts: Arc<dyn ContactService>,
    /// Configuration the server was started with.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>, config: ServerConfig) -> Self {
        AppState {
            contacts,
            config: Arc::new(config),
        }
    }

    /// State backed by a store seeded with `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>, config: ServerConfig) -> Self {
        Self::new(Arc::new(ContactStore::with_contacts(contacts)), config)
    }

    /// Creates an `AppState` with an empty store and default configuration
    /// (for testing).
    pub fn in_memory() -> Self {
        Self::with_contacts(Vec::new(), ServerConfig::default())
    }
}
