//! # Tavola Core
//!
//! Core board logic and domain models for Tavola kanban project boards.
//!
//! A project board holds ordered lists of tasks spread over three fixed
//! progress columns (No Progress, In Progress, Complete). The heart of this
//! crate is [`reconcile`], which turns a raw drop event from the drag UI into
//! a rewritten board snapshot plus a persistence command, converting the
//! column-relative indices the UI reports into positions in a list's full
//! task sequence. Around it are seams only: a snapshot store, a remote
//! move-persistence collaborator, and a dispatcher wiring them together.
//! No UI or transport code lives here.
//!
//! ## Basic Usage
//!
//! ```rust
//! use tavola_core::{
//!     reconcile, DragLocation, DropEvent, DroppableId, List, Progress, Project, Task, TaskId,
//! };
//!
//! # fn example() -> tavola_core::Result<()> {
//! let mut project = Project::new("Launch".to_string());
//! let list = List::new("Sprint 1".to_string());
//! let list_id = list.id.clone();
//! project.add_list(list);
//!
//! let task_id = TaskId::new();
//! project.add_task(&list_id, Task::new(task_id.clone(), "Ship it".to_string()))?;
//!
//! // Drop the card into the In Progress column of the same list.
//! let event = DropEvent {
//!     source: DragLocation {
//!         droppable_id: DroppableId::new(list_id.clone(), Progress::NoProgress).to_string(),
//!         index: 0,
//!     },
//!     destination: Some(DragLocation {
//!         droppable_id: DroppableId::new(list_id, Progress::InProgress).to_string(),
//!         index: 0,
//!     }),
//!     draggable_id: task_id,
//! };
//!
//! if let Some(outcome) = reconcile(&project, &event)? {
//!     // Publish outcome.project to the store, submit outcome.command.
//!     assert_eq!(outcome.command.new_progress, Progress::InProgress);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod dispatch;
pub mod domain;
pub mod error;
pub mod remote;
pub mod storage;

// Re-export commonly used types
pub use dispatch::DragDispatcher;
pub use domain::{
    reconcile, DragLocation, DragOutcome, DropEvent, DroppableId, List, ListId, MoveCommand,
    Progress, Project, ProjectId, Task, TaskId,
};
pub use error::{Result, TavolaError};
pub use remote::MovePersistence;
pub use storage::ProjectStore;
