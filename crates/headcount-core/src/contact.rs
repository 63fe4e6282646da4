//! Contact records and their two-valued status.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::ContactId;

/// Whether a contact is currently marked active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    #[default]
    Inactive,
}

impl Status {
    /// Interprets a checkbox-style form value.
    ///
    /// Browsers submit `"on"` for a checked box and omit the field when it is
    /// unchecked, which the form layer turns into `""`. Anything else is
    /// rejected.
    pub fn from_form_value(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "on" => Ok(Status::Active),
            "" => Ok(Status::Inactive),
            other => Err(CoreError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Status::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in the contact list.
///
/// The `Default` value doubles as the sentinel contact: nil id, empty
/// fields, inactive. Legacy callers compare against it to detect failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: Status,
}

impl Contact {
    pub fn new(
        id: ContactId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        status: Status,
    ) -> Self {
        Contact {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            status,
        }
    }

    /// A contact carrying only an identifier, used for id-keyed actions
    /// (edit lookup, delete).
    pub fn with_id(id: ContactId) -> Self {
        Contact {
            id,
            ..Contact::default()
        }
    }

    /// The zero-valued contact returned by the legacy dispatch mode on failure.
    pub fn sentinel() -> Self {
        Contact::default()
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Contact::default()
    }
}
