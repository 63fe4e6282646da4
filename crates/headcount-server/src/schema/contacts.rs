//! Contact form and query types.
//!
//! Boundary validation happens here, before anything reaches the store: the
//! email must be valid and the status must be a checkbox value.

use serde::Deserialize;

use headcount_core::{validate_email, Contact, ContactId, CoreError, Status};

/// Fields submitted by the create and edit forms.
///
/// An unchecked checkbox is omitted by the browser, so every field defaults
/// to the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: String,
}

impl ContactForm {
    /// Trims every field and builds a contact.
    ///
    /// A blank `id` yields a freshly generated identifier.
    pub fn into_contact(self) -> Result<Contact, CoreError> {
        let id = match self.id.trim() {
            "" => ContactId::new(),
            raw => ContactId::parse(raw)?,
        };

        let email = self.email.trim();
        validate_email(email)?;

        let status = Status::from_form_value(self.status.trim())?;

        Ok(Contact::new(
            id,
            self.name.trim(),
            email,
            self.phone.trim(),
            status,
        ))
    }

    /// Whether the form carried an explicit identifier.
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// Body of the status toggle request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusForm {
    #[serde(default)]
    pub status: String,
}

impl StatusForm {
    pub fn status(&self) -> Result<Status, CoreError> {
        Status::from_form_value(self.status.trim())
    }
}

/// `GET /contacts/count` filter flags.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CountQuery {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub inactive: bool,
}

impl CountQuery {
    /// The status to filter by, `None` for all contacts.
    ///
    /// Both flags at once is a client error.
    pub fn filter(&self) -> Result<Option<Status>, &'static str> {
        match (self.active, self.inactive) {
            (true, true) => Err("active and inactive cannot both be set"),
            (true, false) => Ok(Some(Status::Active)),
            (false, true) => Ok(Some(Status::Inactive)),
            (false, false) => Ok(None),
        }
    }
}
