//! Contact identity.
//!
//! [`ContactId`] wraps a v4 UUID so that identifiers cannot be confused with
//! arbitrary strings. The nil UUID is reserved for the sentinel contact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Globally unique contact identifier, assigned by the caller on creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub Uuid);

impl ContactId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        ContactId(Uuid::new_v4())
    }

    /// The all-zero identifier carried by the sentinel contact.
    pub const fn nil() -> Self {
        ContactId(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Parses the hyphenated (or simple) textual form of a UUID.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Uuid::parse_str(raw.trim())
            .map(ContactId)
            .map_err(|err| CoreError::InvalidId {
                value: raw.to_string(),
                reason: err.to_string(),
            })
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactId::parse(s)
    }
}

impl From<Uuid> for ContactId {
    fn from(value: Uuid) -> Self {
        ContactId(value)
    }
}
