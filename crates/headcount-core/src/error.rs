//! Core error types for headcount-core.
//!
//! Uses `thiserror` for structured, matchable variants. The dispatcher
//! reports every failure through [`CoreError`]; the legacy sentinel mode in
//! [`crate::service::ContactService::dispatch_or_sentinel`] collapses them.

use thiserror::Error;

use crate::id::ContactId;
use crate::validation::EmailError;

/// Errors produced by the contact store and its boundary parsers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No stored contact carries the given identifier.
    #[error("contact not found: {id}")]
    ContactNotFound { id: ContactId },

    /// A create was attempted with an identifier that is already stored.
    #[error("contact already exists: {id}")]
    DuplicateContact { id: ContactId },

    /// An update left name, phone or email blank, so the record was removed.
    #[error("contact {id} was removed because a required field was blank")]
    ContactRemoved { id: ContactId },

    /// The email address failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// A status form value other than "on" or "".
    #[error("unexpected form value for 'status': '{value}'")]
    InvalidStatus { value: String },

    /// A contact identifier could not be parsed.
    #[error("invalid contact id '{value}': {reason}")]
    InvalidId { value: String, reason: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
