//! Role names carried in access-token claims.

/// The portfolio owner. Receives notifications and sees the dashboard.
pub const ROLE_ADMIN: &str = "admin";

/// Any signed-in visitor. May like and comment.
pub const ROLE_VISITOR: &str = "visitor";
