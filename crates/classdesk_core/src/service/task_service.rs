//! Task list use-case service.

use crate::model::task::{Task, TaskId, TaskPriority};
use crate::store::{AppState, StoreError};
use chrono::NaiveDate;
use std::cmp::Reverse;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum TaskServiceError {
    /// Task text is blank after trim.
    BlankText,
    Store(StoreError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "task text must not be blank"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::BlankText => None,
        }
    }
}

impl From<StoreError> for TaskServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub struct TaskService<'s> {
    state: &'s mut AppState,
}

impl<'s> TaskService<'s> {
    pub fn new(state: &'s mut AppState) -> Self {
        Self { state }
    }

    pub fn create_task(
        &mut self,
        text: &str,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Result<Task, TaskServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskServiceError::BlankText);
        }
        Ok(self.state.add_task(text, priority, due_date))
    }

    pub fn toggle_task(&mut self, task_id: TaskId) -> Result<bool, TaskServiceError> {
        Ok(self.state.toggle_task(task_id)?)
    }

    pub fn remove_task(&mut self, task_id: TaskId) -> Result<(), TaskServiceError> {
        Ok(self.state.delete_task(task_id)?)
    }

    /// Open tasks first, then by priority high → low; insertion order otherwise.
    pub fn sorted_tasks(&self) -> Vec<Task> {
        let mut tasks = self.state.tasks().to_vec();
        tasks.sort_by_key(|task| (task.completed, Reverse(task.priority.rank())));
        tasks
    }
}
