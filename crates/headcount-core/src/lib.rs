//! Domain model for the headcount contact manager.
//!
//! Holds the contact record, the lock-owning [`ContactStore`], and the CRUD
//! dispatcher behind the [`ContactService`] trait. Nothing in this crate knows
//! about HTTP; the server crate translates requests into [`Action`]s.

pub mod action;
pub mod contact;
pub mod error;
pub mod id;
pub mod service;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use action::Action;
pub use contact::{Contact, Status};
pub use error::{CoreError, CoreResult};
pub use id::ContactId;
pub use service::ContactService;
pub use store::{ContactStore, StoreStats};
pub use validation::{validate_email, EmailError};
