use crate::domain::task::{Progress, Task, TaskId};
use crate::error::{Result, TavolaError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a new random ProjectId
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(String);

impl ListId {
    /// Creates a new random ListId
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ListId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ListId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named grouping of tasks
///
/// `task_ids` is one physical sequence spanning all three progress columns.
/// Tasks of different progress values commingle in it; a column shows the
/// subsequence whose tasks match that column's progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub task_ids: Vec<TaskId>,
}

impl List {
    /// Creates a new empty list
    pub fn new(name: String) -> Self {
        Self {
            id: ListId::new(),
            name,
            task_ids: Vec::new(),
        }
    }

    /// Creates a new empty list with a fixed id
    pub fn with_id(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            task_ids: Vec::new(),
        }
    }

    /// Position of a task in the physical sequence
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    /// Removes a task id from the sequence (no-op when absent)
    pub fn remove_task(&mut self, task_id: &TaskId) {
        self.task_ids.retain(|id| id != task_id);
    }

    /// Inserts a task id at the given position, clamped to the sequence end
    pub fn insert_task(&mut self, index: usize, task_id: TaskId) {
        let index = index.min(self.task_ids.len());
        self.task_ids.insert(index, task_id);
    }
}

/// A project board: ordered lists plus the tasks they reference
///
/// Tasks belong to the project, keyed by id; lists hold ordered id
/// references only. List order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub lists: Vec<List>,
    pub tasks: HashMap<TaskId, Task>,
}

impl Project {
    /// Creates a new empty project
    pub fn new(name: String) -> Self {
        Self {
            id: ProjectId::new(),
            name,
            lists: Vec::new(),
            tasks: HashMap::new(),
        }
    }

    /// Creates a new empty project with a fixed id
    pub fn with_id(id: ProjectId, name: String) -> Self {
        Self {
            id,
            name,
            lists: Vec::new(),
            tasks: HashMap::new(),
        }
    }

    /// Appends a list to the board
    pub fn add_list(&mut self, list: List) {
        self.lists.push(list);
    }

    /// Adds a task to the project and appends its id to the given list
    pub fn add_task(&mut self, list_id: &ListId, task: Task) -> Result<()> {
        let list = self
            .list_mut(list_id)
            .ok_or_else(|| TavolaError::ListNotFound(list_id.to_string()))?;
        list.task_ids.push(task.id.clone());
        self.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    /// Looks up a list by id
    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == id)
    }

    /// Looks up a list by id, mutably
    pub fn list_mut(&mut self, id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| &l.id == id)
    }

    /// Looks up a task by id
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Looks up a task by id, mutably
    pub fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(id)
    }

    /// Tasks of one list visible in one column, in sequence order
    ///
    /// Walks the list's physical sequence and keeps the tasks whose progress
    /// matches the column. Ids without a matching task are skipped.
    pub fn column_view(&self, list_id: &ListId, progress: Progress) -> Result<Vec<&Task>> {
        let list = self
            .list(list_id)
            .ok_or_else(|| TavolaError::ListNotFound(list_id.to_string()))?;

        Ok(list
            .task_ids
            .iter()
            .filter_map(|id| self.tasks.get(id))
            .filter(|task| task.progress == progress)
            .collect())
    }
}
