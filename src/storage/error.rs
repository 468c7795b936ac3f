use std::fmt;

use thiserror::Error;

use crate::types::UserFilter;

pub type StorageResult<T> = Result<T, StorageError>;

/// What a lookup was keyed on when it matched nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    Id(i64),
    Filter(UserFilter),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "user {id}"),
            Lookup::Filter(filter) => {
                write!(f, "user matching")?;
                if filter.is_empty() {
                    return write!(f, " any filter");
                }
                if let Some(name) = &filter.name {
                    write!(f, " name~{name:?}")?;
                }
                if let Some(year) = &filter.birth_year {
                    write!(f, " birth_year~{year:?}")?;
                }
                if let Some(category) = filter.category {
                    write!(f, " category={category}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),
    #[error("{0} not found")]
    NotFound(Lookup),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}
