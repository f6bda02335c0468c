use thiserror::Error;

pub type Result<T> = std::result::Result<T, TavolaError>;

#[derive(Debug, Error)]
pub enum TavolaError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Invalid droppable id: {0}")]
    InvalidDroppableId(String),

    #[error("Invalid progress value: {0}")]
    InvalidProgress(u8),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
