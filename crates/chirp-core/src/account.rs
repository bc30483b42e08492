use std::sync::Arc;

use chirp_db::Store;
use chirp_types::Account;
use tracing::{debug, info};

use crate::error::{Outcome, Rejection};
use crate::validation::{is_blank, valid_password};

/// Registration and login.
pub struct AccountService {
    store: Arc<dyn Store>,
}

impl AccountService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Creates an account if the username is free and non-blank and the
    /// password is at least four characters. The returned account carries
    /// the id assigned by storage.
    ///
    /// The uniqueness check and the insert are separate storage calls. Two
    /// concurrent registrations of one name can both pass the check; the
    /// loser then fails on the storage constraint.
    pub fn register(&self, candidate: &Account) -> Outcome<Account> {
        self.try_register(candidate)
            .inspect(|account| info!("Registered account {} ({})", account.id, account.username))
            .inspect_err(|reason| {
                debug!("Registration of '{}' rejected: {}", candidate.username, reason)
            })
    }

    fn try_register(&self, candidate: &Account) -> Outcome<Account> {
        if self
            .store
            .find_account_by_username(&candidate.username)?
            .is_some()
        {
            return Err(Rejection::UsernameTaken);
        }
        if is_blank(&candidate.username) {
            return Err(Rejection::BlankUsername);
        }
        if !valid_password(&candidate.password) {
            return Err(Rejection::PasswordTooShort);
        }

        Ok(self
            .store
            .insert_account(&candidate.username, &candidate.password)?)
    }

    /// Returns the account whose username and password both match exactly.
    /// Passwords are compared as stored, in plain text.
    pub fn login(&self, credentials: &Account) -> Outcome<Account> {
        let account = self
            .store
            .find_account_by_credentials(&credentials.username, &credentials.password)?
            .ok_or(Rejection::InvalidCredentials)
            .inspect_err(|_| debug!("Login failed for '{}'", credentials.username))?;

        debug!("Account {} logged in", account.id);
        Ok(account)
    }
}
