use crate::{
    domain::{reconcile, DropEvent, MoveCommand, ProjectId},
    error::Result,
    remote::MovePersistence,
    storage::ProjectStore,
};
use std::sync::Arc;

/// Wires the reconciliation engine to its collaborators
///
/// Handles one drop event to completion at a time: read the current
/// snapshot, reconcile, publish the rewritten snapshot, then hand the
/// command to the persistence collaborator without waiting for it.
pub struct DragDispatcher {
    store: Arc<dyn ProjectStore>,
    remote: Arc<dyn MovePersistence>,
}

impl DragDispatcher {
    /// Creates a dispatcher over a store and a persistence collaborator
    pub fn new(store: Arc<dyn ProjectStore>, remote: Arc<dyn MovePersistence>) -> Self {
        Self { store, remote }
    }

    /// Handles a drop event for a project
    ///
    /// The new snapshot is published to the store before the remote call is
    /// dispatched, and the remote call is spawned, not awaited. Returns the
    /// command describing the move, or `None` when the event changed nothing.
    pub async fn handle_drop(
        &self,
        project_id: &ProjectId,
        event: &DropEvent,
    ) -> Result<Option<MoveCommand>> {
        let project = self.store.get_project(project_id).await?;

        let Some(outcome) = reconcile(&project, event)? else {
            tracing::debug!(project = %project_id, "drop event ignored");
            return Ok(None);
        };

        self.store.set_project(project_id, outcome.project).await?;
        tracing::debug!(
            project = %project_id,
            task = %outcome.command.task_id,
            list = %outcome.command.new_list_id,
            index = outcome.command.new_index,
            "drop reconciled"
        );

        let remote = Arc::clone(&self.remote);
        let command = outcome.command.clone();
        tokio::spawn(async move {
            // Local state is already ahead of the server; a rejection leaves
            // it there. No retry or rollback is attempted.
            if let Err(err) = remote.submit_move(&command).await {
                tracing::warn!(
                    task = %command.task_id,
                    error = %err,
                    "move persistence failed"
                );
            }
        });

        Ok(Some(outcome.command))
    }
}
