//! Access-token primitives.
//!
//! Tokens are issued by the authentication service in front of the portfolio;
//! this crate only needs to validate them. [`jwt::generate_access_token`] is
//! kept for tests and local tooling.

pub mod jwt;
