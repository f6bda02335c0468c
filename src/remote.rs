use crate::{domain::MoveCommand, error::Result};
use async_trait::async_trait;

/// Collaborator that applies a completed move server-side
///
/// The dispatcher submits the command after the local snapshot has already
/// been published and never awaits the result. Implementations own transport
/// and failure policy; a rejected command should surface as a `Persistence`
/// error.
#[async_trait]
pub trait MovePersistence: Send + Sync {
    /// Applies a move remotely
    async fn submit_move(&self, command: &MoveCommand) -> Result<()>;
}
