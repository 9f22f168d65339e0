//! In-memory project store.
//!
//! Backed by a [`parking_lot::RwLock`] over a `HashMap`, shared across
//! handlers by cloning. Records live for the lifetime of the process;
//! there is no eviction and no delete operation.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::{ProjectId, ProjectInfo};
use crate::models::Project;

/// Store lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("project '{0}' not found")]
    NotFound(ProjectId),
}

/// Shared handle to the project map. Cheap to clone.
#[derive(Clone, Default)]
pub struct ProjectStore {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any previous one under the same id.
    pub fn insert(&self, project: Project) {
        let mut projects = self.projects.write();
        projects.insert(project.id.clone(), project);
    }

    /// Fetch a snapshot of a record by id.
    pub fn get(&self, id: &ProjectId) -> Option<Project> {
        let projects = self.projects.read();
        projects.get(id).cloned()
    }

    /// Like [`get`](Self::get) but with a typed not-found error.
    pub fn fetch(&self, id: &ProjectId) -> Result<Project, StoreError> {
        self.get(id).ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Mutate a record in place under a single write lock.
    ///
    /// The closure's return value is passed through, so callers can hand
    /// back the updated snapshot without a second lookup.
    pub fn update_with<T>(
        &self,
        id: &ProjectId,
        apply: impl FnOnce(&mut Project) -> T,
    ) -> Result<T, StoreError> {
        let mut projects = self.projects.write();
        let project = projects
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        Ok(apply(project))
    }

    /// List id/title pairs for all stored projects, sorted by title.
    pub fn list(&self) -> Vec<ProjectInfo> {
        let projects = self.projects.read();
        let mut infos: Vec<ProjectInfo> = projects
            .values()
            .map(|project| ProjectInfo {
                project_id: project.id.clone(),
                title: project.title.clone(),
            })
            .collect();
        infos.sort_by(|a, b| a.title.cmp(&b.title));
        infos
    }

    pub fn len(&self) -> usize {
        self.projects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.read().is_empty()
    }
}
