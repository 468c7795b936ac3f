use rusqlite::Connection;

use super::StorageResult;
use crate::types::{NewUser, UserFilter, UserRecord};

/// Hands out one ready-to-use connection per repository call.
pub trait ConnectionSource {
    fn connect(&self) -> rusqlite::Result<Connection>;
}

pub trait UserStore {
    /// Insert a new row and return the id the store assigned to it.
    fn insert(&self, user: &NewUser) -> StorageResult<i64>;
    /// Rewrite every field of row `id` and return the row as stored.
    fn update(&self, id: i64, user: &NewUser) -> StorageResult<UserRecord>;
    /// Remove row `id` and return it as it was before removal.
    fn delete(&self, id: i64) -> StorageResult<UserRecord>;
    /// First row (lowest id) matching every predicate set in `filter`.
    fn search(&self, filter: &UserFilter) -> StorageResult<UserRecord>;
    fn get_by_id(&self, id: i64) -> StorageResult<UserRecord>;
}
