//! Request extractors that establish who is calling.

pub mod auth;
pub mod rbac;
