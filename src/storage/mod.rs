mod error;
mod query;
pub mod sqlite;
pub mod traits;

pub use error::{Lookup, StorageError, StorageResult};
pub use sqlite::{SqliteFile, SqliteUserStore};
pub use traits::{ConnectionSource, UserStore};
