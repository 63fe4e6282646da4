//! In-memory contact store guarded by a single reader-writer lock.
//!
//! Every mutation (create, toggle, update, delete, reset) holds the write
//! lock for its whole duration. Listing and counting take the read lock, and
//! [`ContactStore::get`] hands back a cloned snapshot, so callers never
//! iterate live state while another request mutates it.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::action::Action;
use crate::contact::{Contact, Status};
use crate::error::{CoreError, CoreResult};
use crate::id::ContactId;
use crate::service::ContactService;
use crate::validation::validate_email;

/// Counters exposed for display and debugging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of stored contacts.
    pub len: usize,
    /// Contacts created since the process started, starting from 1.
    pub seq: u64,
    /// Contacts created since the last session reset.
    pub created: u64,
    /// Number of session resets performed.
    pub resets: u64,
}

#[derive(Debug)]
struct StoreState {
    contacts: Vec<Contact>,
    seq: u64,
    created: u64,
    resets: u64,
}

impl StoreState {
    fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }

    fn require(&self, id: ContactId) -> CoreResult<usize> {
        self.position(id).ok_or(CoreError::ContactNotFound { id })
    }

    fn lookup(&self, id: ContactId) -> CoreResult<Contact> {
        let index = self.require(id)?;
        Ok(self.contacts[index].clone())
    }

    fn apply(&mut self, action: Action, contact: Contact) -> CoreResult<Contact> {
        match action {
            Action::Create => {
                if self.position(contact.id).is_some() {
                    return Err(CoreError::DuplicateContact { id: contact.id });
                }
                self.contacts.push(contact.clone());
                self.created += 1;
                self.seq += 1;
                Ok(contact)
            }
            Action::Toggle => {
                let index = self.require(contact.id)?;
                self.contacts[index].status = contact.status;
                Ok(contact)
            }
            Action::Edit => self.lookup(contact.id),
            Action::Update => {
                let index = self.require(contact.id)?;
                let name = contact.name.trim();
                let phone = contact.phone.trim();
                let email = contact.email.trim();

                // A bad email leaves the record untouched.
                validate_email(email)?;

                if name.is_empty() || phone.is_empty() || email.is_empty() {
                    self.contacts.remove(index);
                    return Err(CoreError::ContactRemoved { id: contact.id });
                }

                let stored = &mut self.contacts[index];
                stored.name = name.to_string();
                stored.phone = phone.to_string();
                stored.email = email.to_string();
                stored.status = contact.status;
                Ok(contact)
            }
            Action::Delete => {
                let index = self.require(contact.id)?;
                Ok(self.contacts.remove(index))
            }
        }
    }
}

/// The authoritative, ordered contact list plus its counters.
#[derive(Debug)]
pub struct ContactStore {
    state: RwLock<StoreState>,
}

impl ContactStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    /// Creates a store pre-populated with `contacts`, in order.
    ///
    /// Later entries whose id already appeared are dropped.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let mut unique: Vec<Contact> = Vec::with_capacity(contacts.len());
        for contact in contacts {
            if !unique.iter().any(|c| c.id == contact.id) {
                unique.push(contact);
            }
        }
        ContactStore {
            state: RwLock::new(StoreState {
                contacts: unique,
                seq: 1,
                created: 0,
                resets: 0,
            }),
        }
    }

    pub fn stats(&self) -> StoreStats {
        let state = self.read();
        StoreStats {
            len: state.contacts.len(),
            seq: state.seq,
            created: state.created,
            resets: state.resets,
        }
    }

    // Poisoning only means another thread panicked mid-request; each action
    // completes its mutation in a single step, so the list is still usable.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactService for ContactStore {
    fn get(&self) -> Vec<Contact> {
        self.read().contacts.clone()
    }

    fn reset(&self) {
        let mut state = self.write();
        state.contacts.clear();
        state.created = 0;
        state.resets += 1;
    }

    fn dispatch(&self, action: Action, contact: Contact) -> CoreResult<Contact> {
        if action.is_mutation() {
            self.write().apply(action, contact)
        } else {
            self.read().lookup(contact.id)
        }
    }

    fn count(&self) -> usize {
        self.read().contacts.len()
    }

    fn count_by_status(&self, status: Status) -> usize {
        self.read()
            .contacts
            .iter()
            .filter(|c| c.status == status)
            .count()
    }
}
