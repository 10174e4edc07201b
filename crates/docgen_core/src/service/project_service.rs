//! Project dashboard and creation-wizard use-case service.
//!
//! # Responsibility
//! - List, open, create and delete projects for one owner.
//!
//! # Invariants
//! - Creating a project from N outline titles yields N sections, each
//!   with empty content and pending status, in outline order.
//! - Deletion is hard; the project is gone from the store afterwards.
//! - Listing degrades to an empty list when the store fails.

use crate::model::project::{DocType, Project, ProjectId};
use crate::model::user::UserId;
use crate::store::{ProjectStore, StoreError, StoreResult};
use log::{info, warn};

/// Project service over any project-store backend.
pub struct ProjectService<S: ProjectStore> {
    store: S,
}

impl<S: ProjectStore> ProjectService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates and persists a project from an accepted outline.
    pub fn create_project(
        &self,
        owner_id: UserId,
        name: &str,
        topic: &str,
        doc_type: DocType,
        outline: Vec<String>,
    ) -> StoreResult<Project> {
        let project = Project::from_outline(owner_id, name, topic, doc_type, outline);
        self.store.create_project(&project)?;
        info!(
            "event=project_create module=service status=ok project_id={} sections={}",
            project.id,
            project.sections.len()
        );
        Ok(project)
    }

    /// Lists the owner's projects, newest first.
    ///
    /// A store failure is logged and degrades to an empty list.
    pub fn list_projects(&self, owner_id: UserId) -> Vec<Project> {
        match self.store.list_projects(owner_id) {
            Ok(mut projects) => {
                projects.sort_by(|a, b| {
                    b.updated_at_ms
                        .cmp(&a.updated_at_ms)
                        .then_with(|| a.id.cmp(&b.id))
                });
                projects
            }
            Err(err) => {
                warn!(
                    "event=project_list module=service status=error owner_id={owner_id} error={err}"
                );
                Vec::new()
            }
        }
    }

    pub fn get_project(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        self.store.get_project(id)
    }

    /// Hard-deletes one project.
    pub fn delete_project(&self, id: ProjectId) -> Result<(), StoreError> {
        self.store.delete_project(id)?;
        info!("event=project_delete module=service status=ok project_id={id}");
        Ok(())
    }
}
