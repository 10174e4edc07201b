//! Remote document-store layer.
//!
//! # Responsibility
//! - Define use-case oriented access contracts for the `users` and
//!   `projects` collections.
//! - Map backend failure codes to human-readable diagnostics.
//! - Keep HTTP/auth transport details behind the trait seam.
//!
//! # Invariants
//! - The remote store is the source of truth; callers treat in-memory
//!   copies as caches and re-sync by explicit update calls.
//! - No retry or backoff: one request per operation, last write wins.

pub mod http;
pub mod memory;
pub mod session;

use crate::model::project::{Project, ProjectId};
use crate::model::user::{UserId, UserRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Collection holding user documents.
pub const USERS_COLLECTION: &str = "users";
/// Collection holding project documents.
pub const PROJECTS_COLLECTION: &str = "projects";

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a remote store call, carrying a caller-presentable message.
#[derive(Debug)]
pub enum StoreError {
    /// Endpoint or API key missing from configuration.
    NotConfigured,
    /// Anonymous sign-in is disabled or missing on the backend.
    AuthNotEnabled,
    /// Anonymous sign-in failed for another reason.
    AuthFailed(String),
    /// Backend rejected the call against its access rules.
    PermissionDenied,
    /// Backend could not be reached.
    Unavailable,
    /// The request did not complete within the fixed deadline.
    TimedOut,
    /// Target document of an update/delete does not exist.
    MissingDocument {
        collection: &'static str,
        id: String,
    },
    /// Any other backend rejection.
    Backend { status: u16, message: String },
    /// Transport-level failure outside the mapped cases.
    Transport(reqwest::Error),
    /// A stored document could not be decoded.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => write!(
                f,
                "document store is not configured; set the store URL and API key"
            ),
            Self::AuthNotEnabled => write!(
                f,
                "anonymous authentication is not enabled on the backend; \
                 enable it in the backend console before retrying"
            ),
            Self::AuthFailed(message) => write!(f, "authentication failed: {message}"),
            Self::PermissionDenied => write!(
                f,
                "database permission denied; check the store access rules and \
                 ensure they allow authenticated users"
            ),
            Self::Unavailable => write!(
                f,
                "network error: could not connect to the document store; \
                 check your internet connection"
            ),
            Self::TimedOut => write!(f, "connection timed out; please check your network"),
            Self::MissingDocument { collection, id } => {
                write!(f, "document not found: {collection}/{id}")
            }
            Self::Backend { status, message } => {
                write!(f, "store request failed with status {status}: {message}")
            }
            Self::Transport(err) => write!(f, "store request failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid stored document: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::TimedOut
        } else if value.is_connect() {
            Self::Unavailable
        } else {
            Self::Transport(value)
        }
    }
}

/// Access contract for the `users` collection.
pub trait UserStore {
    fn create_user(&self, record: &UserRecord) -> StoreResult<()>;
    fn get_user(&self, id: UserId) -> StoreResult<Option<UserRecord>>;
    fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>>;
}

/// Access contract for the `projects` collection.
pub trait ProjectStore {
    fn create_project(&self, project: &Project) -> StoreResult<()>;
    fn get_project(&self, id: ProjectId) -> StoreResult<Option<Project>>;
    /// Lists projects owned by one user. Order is backend-defined.
    fn list_projects(&self, owner_id: UserId) -> StoreResult<Vec<Project>>;
    fn update_project(&self, project: &Project) -> StoreResult<()>;
    fn delete_project(&self, id: ProjectId) -> StoreResult<()>;
}

impl<T: UserStore + ?Sized> UserStore for &T {
    fn create_user(&self, record: &UserRecord) -> StoreResult<()> {
        (**self).create_user(record)
    }

    fn get_user(&self, id: UserId) -> StoreResult<Option<UserRecord>> {
        (**self).get_user(id)
    }

    fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        (**self).find_user_by_email(email)
    }
}

impl<T: ProjectStore + ?Sized> ProjectStore for &T {
    fn create_project(&self, project: &Project) -> StoreResult<()> {
        (**self).create_project(project)
    }

    fn get_project(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        (**self).get_project(id)
    }

    fn list_projects(&self, owner_id: UserId) -> StoreResult<Vec<Project>> {
        (**self).list_projects(owner_id)
    }

    fn update_project(&self, project: &Project) -> StoreResult<()> {
        (**self).update_project(project)
    }

    fn delete_project(&self, id: ProjectId) -> StoreResult<()> {
        (**self).delete_project(id)
    }
}
