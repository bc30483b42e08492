//! Database row types map directly to SQLite rows.
//! Distinct from chirp-types models to keep the column layout local to this crate.

use chirp_types::{Account, Message};

pub struct AccountRow {
    pub id: i64,
    pub username: String,
    pub password: String,
}

pub struct MessageRow {
    pub id: i64,
    pub posted_by: i64,
    pub text: String,
    pub posted_at_epoch: i64,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password: row.password,
        }
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            posted_by: row.posted_by,
            text: row.text,
            posted_at_epoch: row.posted_at_epoch,
        }
    }
}
