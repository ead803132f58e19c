//! Owner notifications raised by visitor engagement.

pub mod router;

pub use router::NotificationRouter;
