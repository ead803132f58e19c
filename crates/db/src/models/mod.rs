pub mod notification;
pub mod stats;
