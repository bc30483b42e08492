use std::sync::Arc;

use chirp_db::Store;
use chirp_types::Message;
use tracing::{debug, info, warn};

use crate::error::{Outcome, Rejection};
use crate::validation::valid_message_text;

/// Message creation, lookup, edit and removal.
///
/// Lookups never fail: a storage error is logged and reported as "nothing
/// found", the same as a missing row.
pub struct MessageService {
    store: Arc<dyn Store>,
}

impl MessageService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Stores a message from an existing account with 1-255 characters of
    /// non-blank text. `id` on the candidate is ignored.
    pub fn create(&self, candidate: &Message) -> Outcome<Message> {
        self.try_create(candidate)
            .inspect(|msg| info!("Account {} posted message {}", msg.posted_by, msg.id))
            .inspect_err(|reason| debug!("Message creation rejected: {}", reason))
    }

    fn try_create(&self, candidate: &Message) -> Outcome<Message> {
        if !self.store.account_exists(candidate.posted_by)? {
            return Err(Rejection::UnknownPoster(candidate.posted_by));
        }
        if !valid_message_text(&candidate.text) {
            return Err(Rejection::InvalidText);
        }

        Ok(self.store.insert_message(candidate)?)
    }

    /// Every message, in storage order.
    pub fn list_all(&self) -> Vec<Message> {
        self.store.select_all_messages().unwrap_or_else(|e| {
            warn!("Listing messages failed: {:#}", e);
            Vec::new()
        })
    }

    pub fn get_by_id(&self, id: i64) -> Option<Message> {
        self.store.select_message(id).unwrap_or_else(|e| {
            warn!("Loading message {} failed: {:#}", id, e);
            None
        })
    }

    /// Removes a message and returns what it looked like beforehand. `None`
    /// unless exactly one row was deleted.
    pub fn delete_by_id(&self, id: i64) -> Option<Message> {
        let snapshot = self.get_by_id(id);

        match self.store.delete_message(id) {
            Ok(1) => {
                info!("Deleted message {}", id);
                snapshot
            }
            Ok(rows) => {
                debug!("Delete of message {} affected {} rows", id, rows);
                None
            }
            Err(e) => {
                warn!("Deleting message {} failed: {:#}", id, e);
                None
            }
        }
    }

    /// Replaces the text of an existing message. Author, timestamp and id stay
    /// as they were.
    pub fn update_by_id(&self, id: i64, text: &str) -> Outcome<Message> {
        self.try_update(id, text)
            .inspect(|_| info!("Updated text of message {}", id))
            .inspect_err(|reason| debug!("Update of message {} rejected: {}", id, reason))
    }

    fn try_update(&self, id: i64, text: &str) -> Outcome<Message> {
        let mut message = self
            .store
            .select_message(id)?
            .ok_or(Rejection::MessageNotFound(id))?;

        if !valid_message_text(text) {
            return Err(Rejection::InvalidText);
        }

        // The row may have been deleted since it was read.
        if self.store.update_message_text(id, text)? == 0 {
            return Err(Rejection::MessageNotFound(id));
        }

        message.text = text.to_string();
        Ok(message)
    }

    /// Messages posted by `account_id`. An unknown account simply has none.
    pub fn list_by_account(&self, account_id: i64) -> Vec<Message> {
        self.store
            .select_messages_by_account(account_id)
            .unwrap_or_else(|e| {
                warn!("Listing messages of account {} failed: {:#}", account_id, e);
                Vec::new()
            })
    }
}
