//! In-memory entity store for one session.
//!
//! # Responsibility
//! - Own the three root collections: classes, schedule grid and tasks.
//! - Provide the only mutation paths for those collections.
//!
//! # Invariants
//! - State is reachable only through an explicitly owned `AppState`.
//! - Updates replace whole records; callers read-modify-write.
//! - A lookup miss leaves state untouched and returns a `StoreError`.
//! - Blank names are not rejected here; services validate input first.

pub mod grid;
mod roster;
mod tasks;

use crate::drafting::ledger::DraftLedger;
use crate::model::class_group::{ClassGroup, ClassId};
use crate::model::schedule::{Period, SchoolDay};
use crate::model::student::StudentId;
use crate::model::task::{Task, TaskId};
use grid::ScheduleGrid;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Lookup miss reported by store mutators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    ClassNotFound(ClassId),
    StudentNotFound {
        class_id: ClassId,
        student_id: StudentId,
    },
    TaskNotFound(TaskId),
    SlotNotFound {
        day: SchoolDay,
        period: Period,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClassNotFound(id) => write!(f, "class not found: {id}"),
            Self::StudentNotFound {
                class_id,
                student_id,
            } => write!(f, "student not found: {student_id} in class {class_id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::SlotNotFound { day, period } => {
                write!(f, "schedule slot not found: {day} period {period}")
            }
        }
    }
}

impl Error for StoreError {}

/// Owned application state for one session.
#[derive(Debug, Clone)]
pub struct AppState {
    classes: Vec<ClassGroup>,
    grid: ScheduleGrid,
    tasks: Vec<Task>,
    drafts: DraftLedger,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty session with a fresh 35-slot grid.
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            grid: ScheduleGrid::new(),
            tasks: Vec::new(),
            drafts: DraftLedger::default(),
        }
    }

    pub fn classes(&self) -> &[ClassGroup] {
        &self.classes
    }

    pub fn class(&self, class_id: ClassId) -> Option<&ClassGroup> {
        self.classes.iter().find(|class| class.id == class_id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn grid(&self) -> &ScheduleGrid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut ScheduleGrid {
        &mut self.grid
    }

    pub(crate) fn drafts_mut(&mut self) -> &mut DraftLedger {
        &mut self.drafts
    }

    pub(crate) fn drafts(&self) -> &DraftLedger {
        &self.drafts
    }
}
