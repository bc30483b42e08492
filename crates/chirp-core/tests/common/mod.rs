#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, bail};
use chirp_db::{Database, MemoryStore, Store};
use chirp_types::{Account, Message};

/// Both store implementations, so every rule is checked against each.
pub fn stores() -> Vec<(&'static str, Arc<dyn Store>)> {
    vec![
        ("sqlite", Arc::new(Database::open_in_memory().unwrap())),
        ("memory", Arc::new(MemoryStore::new())),
    ]
}

/// A store whose every call fails, standing in for a lost connection.
pub struct BrokenStore;

impl Store for BrokenStore {
    fn insert_account(&self, _: &str, _: &str) -> Result<Account> {
        bail!("connection lost")
    }
    fn find_account_by_username(&self, _: &str) -> Result<Option<Account>> {
        bail!("connection lost")
    }
    fn find_account_by_credentials(&self, _: &str, _: &str) -> Result<Option<Account>> {
        bail!("connection lost")
    }
    fn account_exists(&self, _: i64) -> Result<bool> {
        bail!("connection lost")
    }
    fn insert_message(&self, _: &Message) -> Result<Message> {
        bail!("connection lost")
    }
    fn select_message(&self, _: i64) -> Result<Option<Message>> {
        bail!("connection lost")
    }
    fn select_all_messages(&self) -> Result<Vec<Message>> {
        bail!("connection lost")
    }
    fn select_messages_by_account(&self, _: i64) -> Result<Vec<Message>> {
        bail!("connection lost")
    }
    fn delete_message(&self, _: i64) -> Result<usize> {
        bail!("connection lost")
    }
    fn update_message_text(&self, _: i64, _: &str) -> Result<usize> {
        bail!("connection lost")
    }
}
