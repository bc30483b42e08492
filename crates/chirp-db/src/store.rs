use anyhow::Result;
use chirp_types::{Account, Message};

/// Raw persistence operations for accounts and messages.
///
/// Implementations hold no business rules: they store what they are given and
/// report what happened. An `Err` always means the operation could not be
/// completed (lost connection, constraint violation, poisoned lock).
pub trait Store: Send + Sync {
    // -- Accounts --

    /// Persists a new account and returns it with its assigned id.
    fn insert_account(&self, username: &str, password: &str) -> Result<Account>;

    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>>;

    /// Exact, case-sensitive match on both fields.
    fn find_account_by_credentials(&self, username: &str, password: &str)
    -> Result<Option<Account>>;

    fn account_exists(&self, id: i64) -> Result<bool>;

    // -- Messages --

    /// Persists a new message (its `id` is ignored) and returns it with its
    /// assigned id.
    fn insert_message(&self, message: &Message) -> Result<Message>;

    fn select_message(&self, id: i64) -> Result<Option<Message>>;

    /// All messages in storage order.
    fn select_all_messages(&self) -> Result<Vec<Message>>;

    fn select_messages_by_account(&self, account_id: i64) -> Result<Vec<Message>>;

    /// Returns the number of rows removed.
    fn delete_message(&self, id: i64) -> Result<usize>;

    /// Replaces the text of one message. Returns the number of rows changed.
    fn update_message_text(&self, id: i64, text: &str) -> Result<usize>;
}
