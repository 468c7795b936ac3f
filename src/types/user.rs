use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// User data as submitted by a caller, before the store has assigned an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub birthdate: NaiveDate,
    pub phone: String,
    pub category: i32,
    pub comment: Option<String>,
}

/// A persisted user row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub birthdate: NaiveDate,
    pub phone: String,
    pub category: i32,
    pub comment: Option<String>,
    pub last_modified: DateTime<Utc>,
}

impl UserRecord {
    /// The caller-editable part of the record.
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
            birthdate: self.birthdate,
            phone: self.phone.clone(),
            category: self.category,
            comment: self.comment.clone(),
        }
    }
}
