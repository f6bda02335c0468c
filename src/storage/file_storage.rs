use crate::{
    domain::{Project, ProjectId},
    error::{Result, TavolaError},
    storage::ProjectStore,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based snapshot store
///
/// One pretty-printed JSON file per project under `.tavola/projects/`.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const TAVOLA_DIR: &'static str = ".tavola";
    const PROJECTS_DIR: &'static str = "projects";

    /// Creates a new FileStorage rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::TAVOLA_DIR),
        }
    }

    fn projects_dir(&self) -> PathBuf {
        self.root_path.join(Self::PROJECTS_DIR)
    }

    fn project_file(&self, id: &ProjectId) -> PathBuf {
        self.projects_dir().join(format!("{}.json", id.as_str()))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for FileStorage {
    async fn get_project(&self, id: &ProjectId) -> Result<Project> {
        let file_path = self.project_file(id);

        if !file_path.exists() {
            return Err(TavolaError::ProjectNotFound(id.to_string()));
        }

        let contents = fs::read_to_string(&file_path).await?;
        let project: Project = serde_json::from_str(&contents)?;

        Ok(project)
    }

    async fn set_project(&self, id: &ProjectId, project: Project) -> Result<()> {
        self.ensure_directory_exists(&self.projects_dir()).await?;

        let json = serde_json::to_string_pretty(&project)?;
        fs::write(self.project_file(id), json).await?;

        Ok(())
    }

    async fn remove_project(&self, id: &ProjectId) -> Result<()> {
        let file_path = self.project_file(id);

        if !file_path.exists() {
            return Err(TavolaError::ProjectNotFound(id.to_string()));
        }

        fs::remove_file(file_path).await?;
        Ok(())
    }

    async fn list_project_ids(&self) -> Result<Vec<ProjectId>> {
        let dir = self.projects_dir();

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&dir).await?;
        let mut ids: Vec<ProjectId> = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(ProjectId::from(stem));
                }
            }
        }

        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{List, ListId, Progress, Task, TaskId};
    use tempfile::TempDir;

    fn sample_project() -> Project {
        let mut project = Project::with_id(ProjectId::from("p1"), "Board".to_string());
        project.add_list(List::with_id(ListId::from("l1"), "Main".to_string()));
        let l1 = ListId::from("l1");
        project
            .add_task(&l1, Task::new(TaskId::from("t1"), "One".to_string()))
            .unwrap();
        project
            .add_task(
                &l1,
                Task::new(TaskId::from("t2"), "Two".to_string())
                    .with_progress(Progress::InProgress),
            )
            .unwrap();
        project
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStorage::new(temp_dir.path());
        let project = sample_project();

        store.set_project(&project.id.clone(), project).await.unwrap();

        let loaded = store.get_project(&ProjectId::from("p1")).await.unwrap();
        assert_eq!(loaded.name, "Board");
        assert_eq!(
            loaded.list(&ListId::from("l1")).unwrap().task_ids,
            vec![TaskId::from("t1"), TaskId::from("t2")]
        );
        assert_eq!(
            loaded.task(&TaskId::from("t2")).unwrap().progress,
            Progress::InProgress
        );
    }

    #[tokio::test]
    async fn test_load_missing_project() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStorage::new(temp_dir.path());

        let result = store.get_project(&ProjectId::from("nope")).await;
        assert!(matches!(result, Err(TavolaError::ProjectNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_project_ids_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStorage::new(temp_dir.path());

        for name in ["beta", "alpha"] {
            let id = ProjectId::from(name);
            store
                .set_project(&id, Project::with_id(id.clone(), name.to_string()))
                .await
                .unwrap();
        }

        let ids = store.list_project_ids().await.unwrap();
        assert_eq!(ids, vec![ProjectId::from("alpha"), ProjectId::from("beta")]);
    }

    #[tokio::test]
    async fn test_list_on_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStorage::new(temp_dir.path());

        let ids = store.list_project_ids().await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_remove_project() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStorage::new(temp_dir.path());
        let project = sample_project();
        let id = project.id.clone();

        store.set_project(&id, project).await.unwrap();
        store.remove_project(&id).await.unwrap();

        assert!(store.get_project(&id).await.is_err());
        let result = store.remove_project(&id).await;
        assert!(matches!(result, Err(TavolaError::ProjectNotFound(_))));
    }
}
