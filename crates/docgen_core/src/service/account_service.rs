//! Account use-case service.
//!
//! # Responsibility
//! - Provide register/login/logout/restore flows over the user store.
//! - Keep the local session marker in step with the active account.
//!
//! # Invariants
//! - Emails are compared trimmed and lowercased.
//! - Registration enforces a minimum password length of 6 characters.
//! - The password never leaves this layer; callers receive `User`.

use crate::model::user::{User, UserRecord};
use crate::store::session::{SessionError, SessionFile};
use crate::store::{StoreError, UserStore};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MIN_PASSWORD_CHARS: usize = 6;

/// Service error for account use-cases.
#[derive(Debug)]
pub enum AccountError {
    /// Registration password shorter than the minimum.
    WeakPassword,
    /// Registration email already has an account.
    EmailTaken,
    /// Login email has no account.
    NoAccountFound,
    /// Login password does not match the stored credential.
    InvalidPassword,
    /// Session marker could not be written or cleared.
    Session(SessionError),
    /// Remote store failure.
    Store(StoreError),
}

impl Display for AccountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeakPassword => write!(
                f,
                "password must be at least {MIN_PASSWORD_CHARS} characters long"
            ),
            Self::EmailTaken => write!(
                f,
                "an account already exists with this email; please sign in"
            ),
            Self::NoAccountFound => write!(
                f,
                "no account found with this email; please sign up first"
            ),
            Self::InvalidPassword => write!(f, "invalid password"),
            Self::Session(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AccountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Session(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for AccountError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<SessionError> for AccountError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

/// Account service over any user-store backend.
pub struct AccountService<S: UserStore> {
    store: S,
    session: SessionFile,
}

impl<S: UserStore> AccountService<S> {
    pub fn new(store: S, session: SessionFile) -> Self {
        Self { store, session }
    }

    /// Registers a new account and marks it as the active session.
    ///
    /// A blank display name falls back to the email local part.
    pub fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<User, AccountError> {
        let email = normalize_email(email);
        let password = password.trim();
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AccountError::WeakPassword);
        }
        if self.store.find_user_by_email(&email)?.is_some() {
            return Err(AccountError::EmailTaken);
        }

        let name = display_name(name, &email);
        let record = UserRecord::new(email, name, password);
        self.store.create_user(&record)?;
        self.session.save(record.id)?;
        info!(
            "event=account_register module=service status=ok user_id={}",
            record.id
        );
        Ok(record.public())
    }

    /// Logs into an existing account and marks it as the active session.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AccountError> {
        let email = normalize_email(email);
        let record = self
            .store
            .find_user_by_email(&email)?
            .ok_or(AccountError::NoAccountFound)?;
        if record.password.is_empty() || record.password != password.trim() {
            return Err(AccountError::InvalidPassword);
        }

        self.session.save(record.id)?;
        info!(
            "event=account_login module=service status=ok user_id={}",
            record.id
        );
        Ok(record.public())
    }

    /// Clears the local session marker. The anonymous backend session, if
    /// any, stays untouched.
    pub fn logout(&self) -> Result<(), AccountError> {
        self.session.clear()?;
        info!("event=account_logout module=service status=ok");
        Ok(())
    }

    /// Restores the signed-in user from the session marker.
    ///
    /// Degrades to `None` on any failure; a store failure additionally
    /// clears the marker so the next run starts from the login screen.
    pub fn current_user(&self) -> Option<User> {
        let user_id = self.session.load()?;
        match self.store.get_user(user_id) {
            Ok(Some(record)) => Some(record.public()),
            Ok(None) => None,
            Err(err) => {
                warn!(
                    "event=account_restore module=service status=error user_id={user_id} error={err}"
                );
                if let Err(err) = self.session.clear() {
                    warn!("event=account_restore module=service status=error error={err}");
                }
                None
            }
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Falls back to the email local part when the name is blank.
fn display_name(name: &str, email: &str) -> String {
    let trimmed = name.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    email
        .split('@')
        .next()
        .unwrap_or(email)
        .to_string()
}
