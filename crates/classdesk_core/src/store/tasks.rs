//! Task list mutators.

use super::{AppState, StoreError, StoreResult};
use crate::model::task::{Task, TaskId, TaskPriority};
use chrono::NaiveDate;
use log::debug;

impl AppState {
    /// Appends an open task.
    pub fn add_task(
        &mut self,
        text: impl Into<String>,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Task {
        let task = Task::new(text, priority, due_date);
        self.tasks.push(task.clone());
        debug!(
            "event=task_add module=store status=ok task_id={} priority={}",
            task.id,
            priority.as_str()
        );
        task
    }

    /// Appends a fully built task.
    pub(crate) fn insert_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Flips the completed flag; returns the new value.
    pub fn toggle_task(&mut self, task_id: TaskId) -> StoreResult<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn delete_task(&mut self, task_id: TaskId) -> StoreResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != task_id);
        if self.tasks.len() == before {
            return Err(StoreError::TaskNotFound(task_id));
        }
        debug!("event=task_delete module=store status=ok task_id={task_id}");
        Ok(())
    }
}
