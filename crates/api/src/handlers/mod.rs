//! Request handlers.
//!
//! Each submodule holds the async handler functions for one resource. They
//! delegate to the repositories in `folio_db` and map failures via
//! [`AppError`](crate::error::AppError).

pub mod achievement;
pub mod admin;
pub mod category;
pub mod engagement;
pub mod notification;
pub mod project;
pub mod stats;
