//! Folio domain layer.
//!
//! Pure, I/O-free building blocks shared by the HTTP server and the
//! client-side state crate: identifiers, the domain error type, catalog
//! records with their filter, owner-submitted catalog input, users and
//! roles, comment helpers, pagination clamps and the demo fixtures the
//! in-memory stores are seeded from.

pub mod authoring;
pub mod catalog;
pub mod comment;
pub mod engagement;
pub mod error;
pub mod fixtures;
pub mod pagination;
pub mod roles;
pub mod types;
pub mod user;
