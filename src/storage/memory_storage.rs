use crate::{
    domain::{Project, ProjectId},
    error::{Result, TavolaError},
    storage::ProjectStore,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory snapshot store
///
/// The store a UI session runs against. Reads hand out clones, so a snapshot
/// already published to a consumer stays valid while a newer one replaces it
/// under the lock.
#[derive(Default)]
pub struct MemoryStorage {
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl MemoryStorage {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for MemoryStorage {
    async fn get_project(&self, id: &ProjectId) -> Result<Project> {
        let projects = self.projects.read().await;
        projects
            .get(id)
            .cloned()
            .ok_or_else(|| TavolaError::ProjectNotFound(id.to_string()))
    }

    async fn set_project(&self, id: &ProjectId, project: Project) -> Result<()> {
        self.projects.write().await.insert(id.clone(), project);
        Ok(())
    }

    async fn remove_project(&self, id: &ProjectId) -> Result<()> {
        self.projects
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TavolaError::ProjectNotFound(id.to_string()))
    }

    async fn list_project_ids(&self) -> Result<Vec<ProjectId>> {
        Ok(self.projects.read().await.keys().cloned().collect())
    }
}
