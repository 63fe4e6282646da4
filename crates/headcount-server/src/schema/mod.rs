//! Request types for the HTML endpoints.
//!
//! HTMX submits `application/x-www-form-urlencoded` bodies; these types are
//! deserialized with axum's `Form` and `Query` extractors.

pub mod contacts;
