//! The [`ContactService`] trait consumed by the transport layer.
//!
//! Handlers only see this trait, so any backend that honours the dispatch
//! table can stand in for [`crate::ContactStore`].

use crate::action::Action;
use crate::contact::{Contact, Status};
use crate::error::CoreResult;
use crate::id::ContactId;

/// Contact CRUD operations over a shared, internally synchronized store.
pub trait ContactService: Send + Sync {
    /// Returns a snapshot of all contacts in display order.
    fn get(&self) -> Vec<Contact>;

    /// Empties the store and zeroes the per-session counters.
    fn reset(&self);

    /// Executes one action and reports the outcome explicitly.
    ///
    /// | Action | Ok | Err |
    /// |---|---|---|
    /// | Create | the appended contact | `DuplicateContact` |
    /// | Toggle | the contact as passed | `ContactNotFound` |
    /// | Edit | the stored contact | `ContactNotFound` |
    /// | Update | the contact as passed (untrimmed) | `ContactNotFound`, `InvalidEmail`, `ContactRemoved` |
    /// | Delete | the removed contact | `ContactNotFound` |
    fn dispatch(&self, action: Action, contact: Contact) -> CoreResult<Contact>;

    fn count(&self) -> usize;

    fn count_by_status(&self, status: Status) -> usize;

    /// Legacy dispatch mode: every failure, and every delete, yields
    /// [`Contact::sentinel`]. Callers detect failure with
    /// [`Contact::is_sentinel`], which cannot tell "not found" apart from
    /// "removed by a blank update" or "bad email".
    fn dispatch_or_sentinel(&self, action: Action, contact: Contact) -> Contact {
        match (action, self.dispatch(action, contact)) {
            (Action::Delete, _) | (_, Err(_)) => Contact::sentinel(),
            (_, Ok(contact)) => contact,
        }
    }

    /// Edit lookup by id.
    fn find(&self, id: ContactId) -> CoreResult<Contact> {
        self.dispatch(Action::Edit, Contact::with_id(id))
    }

    fn remove(&self, id: ContactId) -> CoreResult<Contact> {
        self.dispatch(Action::Delete, Contact::with_id(id))
    }
}
