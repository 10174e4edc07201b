//! User domain model.
//!
//! # Responsibility
//! - Define the public user shape and the stored credential record.
//!
//! # Invariants
//! - `id` is stable and never reused for another user.
//! - The stored password never leaves the store layer; callers only see
//!   the public `User` projection.

use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a registered user.
pub type UserId = Uuid;

/// Public user shape returned to callers after login/register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Full user document as persisted in the `users` collection.
///
/// Carries the credential alongside profile data, mirroring the backend
/// document shape. Use [`UserRecord::public`] before handing data out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl UserRecord {
    /// Creates a new record with a generated stable ID and current
    /// timestamps.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at_ms: now,
            updated_at_ms: now,
        }
    }

    /// Returns the credential-free projection of this record.
    pub fn public(&self) -> User {
        User {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UserRecord;

    #[test]
    fn public_projection_drops_the_password() {
        let record = UserRecord::new("a@b.test", "Ada", "secret-pw");
        let user = record.public();
        assert_eq!(user.id, record.id);
        assert_eq!(user.email, "a@b.test");
        let json = serde_json::to_string(&user).expect("user should serialize");
        assert!(!json.contains("secret-pw"));
    }
}
