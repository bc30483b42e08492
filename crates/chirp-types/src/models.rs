use serde::{Deserialize, Serialize};

/// A registered account. `id` is assigned by storage and is `0` until the
/// account has been persisted.
///
/// The password is stored and echoed back as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: 0,
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A message posted by an account. Only `text` changes after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub posted_by: i64,
    pub text: String,
    pub posted_at_epoch: i64,
}

impl Message {
    pub fn new(posted_by: i64, text: impl Into<String>, posted_at_epoch: i64) -> Self {
        Self {
            id: 0,
            posted_by,
            text: text.into(),
            posted_at_epoch,
        }
    }
}
