use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow, bail};
use chirp_types::{Account, Message};

use crate::store::Store;

/// In-process [`Store`] with the same observable behavior as the SQLite
/// database: ids start at 1 and are never reused, usernames are unique, and
/// listings come back in id order.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    accounts: Vec<Account>,
    messages: Vec<Message>,
    last_account_id: i64,
    last_message_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| anyhow!("Memory store lock poisoned: {}", e))
    }
}

impl Store for MemoryStore {
    fn insert_account(&self, username: &str, password: &str) -> Result<Account> {
        let mut inner = self.lock()?;
        if inner.accounts.iter().any(|a| a.username == username) {
            bail!("UNIQUE constraint failed: account.username");
        }

        inner.last_account_id += 1;
        let account = Account {
            id: inner.last_account_id,
            username: username.to_string(),
            password: password.to_string(),
        };
        inner.accounts.push(account.clone());
        Ok(account)
    }

    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        let inner = self.lock()?;
        Ok(inner.accounts.iter().find(|a| a.username == username).cloned())
    }

    fn find_account_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>> {
        let inner = self.lock()?;
        Ok(inner
            .accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .cloned())
    }

    fn account_exists(&self, id: i64) -> Result<bool> {
        Ok(self.lock()?.accounts.iter().any(|a| a.id == id))
    }

    fn insert_message(&self, message: &Message) -> Result<Message> {
        let mut inner = self.lock()?;
        inner.last_message_id += 1;
        let stored = Message {
            id: inner.last_message_id,
            ..message.clone()
        };
        inner.messages.push(stored.clone());
        Ok(stored)
    }

    fn select_message(&self, id: i64) -> Result<Option<Message>> {
        Ok(self.lock()?.messages.iter().find(|m| m.id == id).cloned())
    }

    fn select_all_messages(&self) -> Result<Vec<Message>> {
        Ok(self.lock()?.messages.clone())
    }

    fn select_messages_by_account(&self, account_id: i64) -> Result<Vec<Message>> {
        Ok(self
            .lock()?
            .messages
            .iter()
            .filter(|m| m.posted_by == account_id)
            .cloned()
            .collect())
    }

    fn delete_message(&self, id: i64) -> Result<usize> {
        let mut inner = self.lock()?;
        let before = inner.messages.len();
        inner.messages.retain(|m| m.id != id);
        Ok(before - inner.messages.len())
    }

    fn update_message_text(&self, id: i64, text: &str) -> Result<usize> {
        let mut inner = self.lock()?;
        match inner.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.text = text.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
