//! Account and message rules for the chirp backend.
//!
//! Services hold no state of their own. Every call goes straight through to
//! the injected [`Store`](chirp_db::Store).

pub mod account;
pub mod error;
pub mod message;
pub mod validation;

pub use account::AccountService;
pub use error::{Outcome, Rejection};
pub use message::MessageService;
