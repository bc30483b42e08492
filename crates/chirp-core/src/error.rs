use thiserror::Error;

use crate::validation::{MAX_MESSAGE_LEN, MIN_PASSWORD_LEN};

pub type Outcome<T> = Result<T, Rejection>;

/// Why a register, login, create or update was refused.
///
/// The variant is kept for logs. Callers are expected to treat every
/// rejection the same way, storage failures included.
#[derive(Debug, Error)]
pub enum Rejection {
    #[error("username is already taken")]
    UsernameTaken,

    #[error("username is blank")]
    BlankUsername,

    #[error("password is shorter than {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,

    #[error("no account matches the supplied credentials")]
    InvalidCredentials,

    #[error("account {0} does not exist")]
    UnknownPoster(i64),

    #[error("message text must be non-blank and at most {} characters", MAX_MESSAGE_LEN)]
    InvalidText,

    #[error("message {0} does not exist")]
    MessageNotFound(i64),

    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}
