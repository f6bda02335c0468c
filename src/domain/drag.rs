use crate::domain::droppable::DroppableId;
use crate::domain::project::{ListId, Project, ProjectId};
use crate::domain::task::{Progress, TaskId};
use crate::error::{Result, TavolaError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One end of a drag gesture as reported by the drag UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    pub droppable_id: String,
    pub index: usize,
}

/// A completed drag gesture
///
/// `destination` is `None` when the card was dropped outside any target.
/// Indices count only the cards visible in the droppable's column, not the
/// list's full physical sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    pub source: DragLocation,
    #[serde(default)]
    pub destination: Option<DragLocation>,
    pub draggable_id: TaskId,
}

/// Persistence instruction describing a completed move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCommand {
    pub task_id: TaskId,
    pub new_index: usize,
    pub old_list_id: ListId,
    pub new_list_id: ListId,
    pub new_progress: Progress,
    pub project_id: ProjectId,
}

/// Result of a successful reconciliation
#[derive(Debug, Clone)]
pub struct DragOutcome {
    /// The rewritten board snapshot
    pub project: Project,
    /// The move to hand to the persistence collaborator
    pub command: MoveCommand,
}

/// Applies a drop event to a board snapshot
///
/// Returns `Ok(None)` when the event needs no change: the drag was cancelled
/// or the card was dropped back at its source position. The caller's snapshot
/// is never touched; a successful reconciliation returns a rewritten clone
/// plus the persistence command describing the move.
///
/// Fails before any mutation when the event references a list or task the
/// snapshot does not contain.
pub fn reconcile(project: &Project, event: &DropEvent) -> Result<Option<DragOutcome>> {
    let Some(destination) = &event.destination else {
        return Ok(None);
    };
    if event.source.droppable_id == destination.droppable_id
        && event.source.index == destination.index
    {
        return Ok(None);
    }

    let from = DroppableId::from_str(&event.source.droppable_id)?;
    let to = DroppableId::from_str(&destination.droppable_id)?;

    // Everything the computation needs is resolved against the unmodified
    // snapshot before the first write.
    let from_list = project
        .list(&from.list_id)
        .ok_or_else(|| TavolaError::ListNotFound(from.list_id.to_string()))?;
    let to_list = project
        .list(&to.list_id)
        .ok_or_else(|| TavolaError::ListNotFound(to.list_id.to_string()))?;
    let dragged = project
        .task(&event.draggable_id)
        .ok_or_else(|| TavolaError::TaskNotFound(event.draggable_id.to_string()))?;

    // The reported index counts only the cards visible in the destination
    // column. Tasks of earlier columns occupy the leading slots of the
    // physical sequence, so the sequence position shifts right by their count.
    let offset = to_list
        .task_ids
        .iter()
        .filter_map(|id| project.task(id))
        .filter(|task| task.progress < to.progress)
        .count();
    let mut actual_index = (destination.index + offset) as isize;

    // Moving to another column of the same list removes the card from the
    // sequence before reinsertion, which shifts every later position left by
    // one. Across two lists removal and insertion touch different sequences.
    if from.list_id == to.list_id && dragged.progress != to.progress {
        let old_position = from_list
            .position_of(&event.draggable_id)
            .map(|p| p as isize)
            .unwrap_or(-1);
        if actual_index > old_position {
            actual_index -= 1;
        }
    }

    let actual_index = actual_index.max(0) as usize;

    let mut next = project.clone();
    next.list_mut(&from.list_id)
        .ok_or_else(|| TavolaError::ListNotFound(from.list_id.to_string()))?
        .remove_task(&event.draggable_id);
    next.list_mut(&to.list_id)
        .ok_or_else(|| TavolaError::ListNotFound(to.list_id.to_string()))?
        .insert_task(actual_index, event.draggable_id.clone());
    next.task_mut(&event.draggable_id)
        .ok_or_else(|| TavolaError::TaskNotFound(event.draggable_id.to_string()))?
        .set_progress(to.progress);

    let command = MoveCommand {
        task_id: event.draggable_id.clone(),
        new_index: actual_index,
        old_list_id: from.list_id,
        new_list_id: to.list_id,
        new_progress: to.progress,
        project_id: project.id.clone(),
    };

    Ok(Some(DragOutcome {
        project: next,
        command,
    }))
}
