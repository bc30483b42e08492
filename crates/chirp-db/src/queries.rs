use crate::Database;
use crate::models::{AccountRow, MessageRow};
use crate::store::Store;
use anyhow::Result;
use chirp_types::{Account, Message};
use rusqlite::{Connection, Row};

const MESSAGE_COLUMNS: &str = "id, posted_by, text, posted_at_epoch";

impl Store for Database {
    // -- Accounts --

    fn insert_account(&self, username: &str, password: &str) -> Result<Account> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO account (username, password) VALUES (?1, ?2)",
                (username, password),
            )?;
            Ok(Account {
                id: conn.last_insert_rowid(),
                username: username.to_string(),
                password: password.to_string(),
            })
        })
    }

    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        self.with_conn(|conn| {
            let row = query_account(
                conn,
                "SELECT id, username, password FROM account WHERE username = ?1",
                &[&username],
            )?;
            Ok(row.map(Account::from))
        })
    }

    fn find_account_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>> {
        self.with_conn(|conn| {
            let row = query_account(
                conn,
                "SELECT id, username, password FROM account WHERE username = ?1 AND password = ?2",
                &[&username, &password],
            )?;
            Ok(row.map(Account::from))
        })
    }

    fn account_exists(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let exists = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM account WHERE id = ?1)",
                [id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }

    // -- Messages --

    fn insert_message(&self, message: &Message) -> Result<Message> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO message (posted_by, text, posted_at_epoch) VALUES (?1, ?2, ?3)",
                rusqlite::params![message.posted_by, message.text, message.posted_at_epoch],
            )?;
            Ok(Message {
                id: conn.last_insert_rowid(),
                ..message.clone()
            })
        })
    }

    fn select_message(&self, id: i64) -> Result<Option<Message>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {MESSAGE_COLUMNS} FROM message WHERE id = ?1");
            let row = conn.query_row(&sql, [id], message_row).optional()?;
            Ok(row.map(Message::from))
        })
    }

    fn select_all_messages(&self) -> Result<Vec<Message>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {MESSAGE_COLUMNS} FROM message ORDER BY id");
            query_messages(conn, &sql, &[])
        })
    }

    fn select_messages_by_account(&self, account_id: i64) -> Result<Vec<Message>> {
        self.with_conn(|conn| {
            let sql =
                format!("SELECT {MESSAGE_COLUMNS} FROM message WHERE posted_by = ?1 ORDER BY id");
            query_messages(conn, &sql, &[&account_id])
        })
    }

    fn delete_message(&self, id: i64) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM message WHERE id = ?1", [id])?))
    }

    fn update_message_text(&self, id: i64, text: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE message SET text = ?1 WHERE id = ?2",
                rusqlite::params![text, id],
            )?;
            Ok(changed)
        })
    }
}

fn query_account(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::types::ToSql],
) -> Result<Option<AccountRow>> {
    let mut stmt = conn.prepare(sql)?;

    let row = stmt
        .query_row(params, |row| {
            Ok(AccountRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_messages(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::types::ToSql],
) -> Result<Vec<Message>> {
    let mut stmt = conn.prepare(sql)?;

    let rows = stmt
        .query_map(params, message_row)?
        .map(|row| row.map(Message::from))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn message_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        id: row.get(0)?,
        posted_by: row.get(1)?,
        text: row.get(2)?,
        posted_at_epoch: row.get(3)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
