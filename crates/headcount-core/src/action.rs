//! The five store actions understood by the dispatcher.

use std::fmt;

/// Identifies which store operation a dispatch performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Append a new contact.
    Create,
    /// Overwrite the status of an existing contact.
    Toggle,
    /// Look up a contact by id without mutating anything.
    Edit,
    /// Overwrite name/email/phone/status, or remove the record when any of
    /// name/email/phone is blank after trimming.
    Update,
    /// Remove a contact, preserving the order of the rest.
    Delete,
}

impl Action {
    /// Whether the action can change the store.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Action::Edit)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Create => "create",
            Action::Toggle => "toggle",
            Action::Edit => "edit",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        f.write_str(name)
    }
}
