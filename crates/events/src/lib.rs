//! Folio event bus.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`PortfolioEvent`]: the event envelope published when visitors engage
//!   with the portfolio.

pub mod bus;

pub use bus::{EventBus, PortfolioEvent};
