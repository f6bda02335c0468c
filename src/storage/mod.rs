use crate::{
    domain::{Project, ProjectId},
    error::Result,
};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

/// Store of board snapshots, keyed by project id
///
/// Snapshots are values: `get_project` hands back an independent copy and
/// `set_project` replaces the stored snapshot wholesale. A drop handler reads
/// a snapshot, reconciles against it, and publishes the result back here.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Loads a project snapshot (a missing id is a hard error)
    async fn get_project(&self, id: &ProjectId) -> Result<Project>;

    /// Replaces the stored snapshot for a project
    async fn set_project(&self, id: &ProjectId, project: Project) -> Result<()>;

    /// Deletes a project
    async fn remove_project(&self, id: &ProjectId) -> Result<()>;

    /// Lists all project IDs
    async fn list_project_ids(&self) -> Result<Vec<ProjectId>>;
}
