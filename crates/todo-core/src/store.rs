//! Task Store
//!
//! Ordered in-memory collection of tasks. Every operation is total: unknown ids
//! and out-of-range indices leave the collection untouched and report `false`.

use chrono::{DateTime, Utc};

use crate::task::{Task, TaskId};

/// The task collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

/// Display split of a collection
///
/// `active` is ascending by priority, `completed` is most recently completed first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub active: Vec<Task>,
    pub completed: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_active()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.active_count()
    }

    /// Append a new active task at the end of the active ordering
    pub fn create(&mut self, title: String, description: String) -> &Task {
        self.create_at(title, description, Utc::now())
    }

    pub fn create_at(&mut self, title: String, description: String, now: DateTime<Utc>) -> &Task {
        let priority = self.active_count() as i64;
        let mut task = Task::new(title, description, priority, now);
        // ids stay unique within the list
        while self.get(&task.id).is_some() {
            task.id = TaskId::generate();
        }
        log::debug!("created task {} with priority {}", task.id, priority);
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Flip completion of a task; `false` if the id is unknown
    pub fn toggle_complete(&mut self, id: &TaskId) -> bool {
        self.toggle_complete_at(id, Utc::now())
    }

    pub fn toggle_complete_at(&mut self, id: &TaskId, now: DateTime<Utc>) -> bool {
        match self.tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) => {
                task.toggle_at(now);
                true
            }
            None => false,
        }
    }

    /// Remove a task permanently; `false` if the id is unknown
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        self.tasks.len() != before
    }

    /// Move the active task at display index `from` to display index `to`
    ///
    /// Priorities of the whole active subset are rewritten to 0, 1, 2, ... and
    /// the collection becomes the active subset followed by the completed one.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let mut active = self.sorted_active();
        if from >= active.len() || to >= active.len() || from == to {
            return false;
        }

        let moved = active.remove(from);
        active.insert(to, moved);
        for (priority, task) in active.iter_mut().enumerate() {
            task.priority = priority as i64;
        }

        let completed = self.tasks.iter().filter(|task| task.completed).cloned();
        active.extend(completed);
        self.tasks = active;
        log::debug!("reordered active task {} -> {}", from, to);
        true
    }

    /// Move `dragged` to the display slot currently held by `target`
    ///
    /// Both must be active tasks.
    pub fn move_active_by_id(&mut self, dragged: &TaskId, target: &TaskId) -> bool {
        if dragged == target {
            return false;
        }
        let active = self.sorted_active();
        let from = active.iter().position(|task| &task.id == dragged);
        let to = active.iter().position(|task| &task.id == target);
        match (from, to) {
            (Some(from), Some(to)) => self.reorder(from, to),
            _ => false,
        }
    }

    /// Replace the whole collection without validating it
    ///
    /// Used to hydrate from storage; order and priorities are kept as given.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn partition(&self) -> Partition {
        let active = self.sorted_active();
        let mut completed: Vec<Task> = self.tasks.iter().filter(|task| task.completed).cloned().collect();
        // None sorts before Some, so a missing completed_at lands last
        completed.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Partition { active, completed }
    }

    fn sorted_active(&self) -> Vec<Task> {
        let mut active: Vec<Task> = self.tasks.iter().filter(|task| task.is_active()).cloned().collect();
        active.sort_by_key(|task| task.priority);
        active
    }
}
