//! Repository for users.

use folio_core::types::DbId;
use folio_core::user::User;

use crate::DbPool;

pub struct UserRepo;

impl UserRepo {
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<User> {
        let tables = pool.tables.read().await;
        tables.users.iter().find(|u| u.id == id).cloned()
    }

    /// The portfolio owner, if one exists.
    pub async fn find_admin(pool: &DbPool) -> Option<User> {
        let tables = pool.tables.read().await;
        tables.users.iter().find(|u| u.is_admin).cloned()
    }
}
