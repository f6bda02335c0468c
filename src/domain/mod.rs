pub mod drag;
pub mod droppable;
pub mod project;
pub mod task;

pub use drag::{reconcile, DragLocation, DragOutcome, DropEvent, MoveCommand};
pub use droppable::DroppableId;
pub use project::{List, ListId, Project, ProjectId};
pub use task::{Progress, Task, TaskId};
