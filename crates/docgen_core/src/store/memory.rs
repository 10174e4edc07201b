//! In-memory store backend.
//!
//! # Responsibility
//! - Provide a process-local implementation of the store contracts for
//!   tests and offline smoke runs, mirroring the remote semantics
//!   (create-or-replace, hard delete, update-requires-existing).

use crate::model::project::{Project, ProjectId};
use crate::model::user::{UserId, UserRecord};
use crate::store::{
    ProjectStore, StoreError, StoreResult, UserStore, PROJECTS_COLLECTION,
};
use std::collections::BTreeMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Process-local document store.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<BTreeMap<Uuid, UserRecord>>,
    projects: Mutex<BTreeMap<Uuid, Project>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn users(&self) -> std::sync::MutexGuard<'_, BTreeMap<Uuid, UserRecord>> {
        self.users
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn projects(&self) -> std::sync::MutexGuard<'_, BTreeMap<Uuid, Project>> {
        self.projects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UserStore for MemoryStore {
    fn create_user(&self, record: &UserRecord) -> StoreResult<()> {
        self.users().insert(record.id, record.clone());
        Ok(())
    }

    fn get_user(&self, id: UserId) -> StoreResult<Option<UserRecord>> {
        Ok(self.users().get(&id).cloned())
    }

    fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        Ok(self
            .users()
            .values()
            .find(|record| record.email == email)
            .cloned())
    }
}

impl ProjectStore for MemoryStore {
    fn create_project(&self, project: &Project) -> StoreResult<()> {
        self.projects().insert(project.id, project.clone());
        Ok(())
    }

    fn get_project(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        Ok(self.projects().get(&id).cloned())
    }

    fn list_projects(&self, owner_id: UserId) -> StoreResult<Vec<Project>> {
        Ok(self
            .projects()
            .values()
            .filter(|project| project.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn update_project(&self, project: &Project) -> StoreResult<()> {
        let mut projects = self.projects();
        if !projects.contains_key(&project.id) {
            return Err(StoreError::MissingDocument {
                collection: PROJECTS_COLLECTION,
                id: project.id.to_string(),
            });
        }
        projects.insert(project.id, project.clone());
        Ok(())
    }

    fn delete_project(&self, id: ProjectId) -> StoreResult<()> {
        self.projects().remove(&id);
        Ok(())
    }
}
