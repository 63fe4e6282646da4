//! HTMX-driven web front end for the headcount contact manager.
//!
//! Serves HTML fragments for a single contacts resource. This crate holds
//! the router, handlers, rendering, session handling and the startup seed
//! fetch; all contact semantics live in `headcount_core`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod retry;
pub mod router;
pub mod schema;
pub mod seed;
pub mod session;
pub mod state;
