//! Domain model for rosters, the weekly schedule and the task list.
//!
//! # Responsibility
//! - Define the canonical records shared by store, reports and services.
//! - Keep identity, value ranges and wire naming in one place.
//!
//! # Invariants
//! - Every entity is identified by a stable uuid v4 that is never reused.
//! - A `Student` belongs to exactly one `ClassGroup`.
//! - A `LessonPlan` belongs to exactly one `ScheduleSlot`.

pub mod class_group;
pub mod lesson_plan;
pub mod schedule;
pub mod student;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for model constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Period index outside `1..=7`.
    PeriodOutOfRange(u8),
    /// Day label does not name a school day.
    UnknownDay(String),
    /// Priority label is not `high|medium|low`.
    UnknownPriority(String),
    /// Attendance label is not `present|absent|late|excused`.
    UnknownAttendanceStatus(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PeriodOutOfRange(value) => {
                write!(f, "period must be between 1 and 7, got {value}")
            }
            Self::UnknownDay(value) => write!(f, "unknown school day: `{value}`"),
            Self::UnknownPriority(value) => {
                write!(f, "unknown priority `{value}`; expected high|medium|low")
            }
            Self::UnknownAttendanceStatus(value) => write!(
                f,
                "unknown attendance status `{value}`; expected present|absent|late|excused"
            ),
        }
    }
}

impl Error for ModelError {}
