//! HTTP handler modules.
//!
//! Handlers parse the request, dispatch through the shared
//! [`headcount_core::ContactService`], and render an HTML fragment. No contact
//! semantics live here.

pub mod contacts;
pub mod health;
pub mod pages;
