//! Local session marker.
//!
//! # Responsibility
//! - Persist the single identifier of the signed-in user between runs,
//!   as a small file read/written directly by the client.
//!
//! # Invariants
//! - An unreadable or malformed marker behaves like no session at all.
//! - Clearing an absent marker is a no-op.

use crate::model::user::UserId;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Failure writing or removing the session marker file.
#[derive(Debug)]
pub struct SessionError {
    path: PathBuf,
    source: std::io::Error,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to update session marker `{}`: {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// File-backed marker for the signed-in user.
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records `user_id` as the active session.
    pub fn save(&self, user_id: UserId) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SessionError {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, user_id.to_string()).map_err(|source| SessionError {
            path: self.path.clone(),
            source,
        })
    }

    /// Returns the active session's user id, or `None` when there is no
    /// usable marker.
    pub fn load(&self) -> Option<UserId> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(
                    "event=session_load module=store status=error path={} error={err}",
                    self.path.display()
                );
                return None;
            }
        };
        match Uuid::parse_str(raw.trim()) {
            Ok(user_id) => Some(user_id),
            Err(_) => {
                warn!(
                    "event=session_load module=store status=error path={} error_code=malformed_marker",
                    self.path.display()
                );
                None
            }
        }
    }

    /// Removes the marker. Succeeds when none exists.
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SessionFile;
    use uuid::Uuid;

    #[test]
    fn save_load_clear_roundtrip() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let marker = SessionFile::new(dir.path().join("session"));
        assert!(marker.load().is_none());

        let user_id = Uuid::new_v4();
        marker.save(user_id).expect("save should succeed");
        assert_eq!(marker.load(), Some(user_id));

        marker.clear().expect("clear should succeed");
        assert!(marker.load().is_none());
        marker.clear().expect("clearing again should be a no-op");
    }

    #[test]
    fn malformed_marker_behaves_like_no_session() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let path = dir.path().join("session");
        std::fs::write(&path, "not-a-uuid").expect("fixture write should succeed");
        let marker = SessionFile::new(path);
        assert!(marker.load().is_none());
    }
}
