//! Roster use-case service.
//!
//! # Responsibility
//! - Reject blank class and student names at the caller boundary.
//! - Parse newline-separated roster text and files for bulk import.
//! - Provide attendance, participation and notes edits by id.
//!
//! # Invariants
//! - Stored names are trimmed.
//! - Imports never create students from blank lines.

use crate::model::class_group::{ClassGroup, ClassId};
use crate::model::student::{AttendanceStatus, Student, StudentId};
use crate::store::{AppState, StoreError};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Errors from roster use-cases.
#[derive(Debug)]
pub enum RosterServiceError {
    /// Class name is blank after trim.
    BlankClassName,
    /// Student name is blank after trim.
    BlankStudentName,
    /// Import text contained no usable names.
    EmptyImport,
    /// Import file could not be read.
    Io(std::io::Error),
    /// Store-level lookup miss.
    Store(StoreError),
}

impl Display for RosterServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankClassName => write!(f, "class name must not be blank"),
            Self::BlankStudentName => write!(f, "student name must not be blank"),
            Self::EmptyImport => write!(f, "import contained no student names"),
            Self::Io(err) => write!(f, "roster file read failed: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RosterServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RosterServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<std::io::Error> for RosterServiceError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

pub type RosterResult<T> = Result<T, RosterServiceError>;

/// Display band for a participation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipationBand {
    Strong,
    Fair,
    Low,
}

impl ParticipationBand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Fair => "fair",
            Self::Low => "low",
        }
    }
}

/// Bands: 8 and above strong, 5 to 7 fair, below 5 low.
pub fn participation_band(score: u8) -> ParticipationBand {
    match score {
        8..=u8::MAX => ParticipationBand::Strong,
        5..=7 => ParticipationBand::Fair,
        _ => ParticipationBand::Low,
    }
}

/// Splits roster text into trimmed, non-blank names.
///
/// Accepts `\n` and `\r\n` line endings.
pub fn parse_roster_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Roster service over one borrowed session state.
pub struct RosterService<'s> {
    state: &'s mut AppState,
}

impl<'s> RosterService<'s> {
    pub fn new(state: &'s mut AppState) -> Self {
        Self { state }
    }

    /// Creates a class from a non-blank name.
    pub fn create_class(&mut self, name: &str) -> RosterResult<ClassGroup> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterServiceError::BlankClassName);
        }
        Ok(self.state.add_class(name))
    }

    pub fn remove_class(&mut self, class_id: ClassId) -> RosterResult<()> {
        Ok(self.state.delete_class(class_id)?)
    }

    /// Adds one student from a non-blank name.
    pub fn enroll_student(&mut self, class_id: ClassId, name: &str) -> RosterResult<StudentId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterServiceError::BlankStudentName);
        }
        Ok(self.state.add_student(class_id, name)?)
    }

    pub fn remove_student(&mut self, class_id: ClassId, student_id: StudentId) -> RosterResult<()> {
        Ok(self.state.delete_student(class_id, student_id)?)
    }

    /// Imports newline-separated names, skipping blank lines.
    ///
    /// # Errors
    /// - `EmptyImport` when the text holds no names; the roster is untouched.
    pub fn import_roster_text(
        &mut self,
        class_id: ClassId,
        text: &str,
    ) -> RosterResult<Vec<StudentId>> {
        let names = parse_roster_lines(text);
        if names.is_empty() {
            return Err(RosterServiceError::EmptyImport);
        }
        let added = self.state.import_students(class_id, &names)?;
        info!(
            "event=roster_import module=roster_service status=ok class_id={class_id} count={}",
            added.len()
        );
        Ok(added)
    }

    /// Reads a UTF-8 roster file and imports its names.
    pub fn import_roster_file(
        &mut self,
        class_id: ClassId,
        path: impl AsRef<Path>,
    ) -> RosterResult<Vec<StudentId>> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|err| {
            warn!("event=roster_import module=roster_service status=error reason=io");
            RosterServiceError::Io(err)
        })?;
        self.import_roster_text(class_id, &text)
    }

    pub fn record_attendance(
        &mut self,
        class_id: ClassId,
        student_id: StudentId,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> RosterResult<()> {
        Ok(self
            .state
            .set_attendance(class_id, student_id, date, status)?)
    }

    /// Returns the clamped score after the change.
    pub fn adjust_participation(
        &mut self,
        class_id: ClassId,
        student_id: StudentId,
        delta: i32,
    ) -> RosterResult<u8> {
        Ok(self
            .state
            .adjust_participation(class_id, student_id, delta)?)
    }

    /// Replaces the free-text notes of one student.
    pub fn update_notes(
        &mut self,
        class_id: ClassId,
        student_id: StudentId,
        notes: &str,
    ) -> RosterResult<()> {
        let mut student = self
            .state
            .student(class_id, student_id)
            .cloned()
            .ok_or(StoreError::StudentNotFound {
                class_id,
                student_id,
            })?;
        student.notes = notes.to_string();
        Ok(self.state.update_student(class_id, student)?)
    }

    /// Case-insensitive substring search over one roster, in roster order.
    pub fn search_students(&self, class_id: ClassId, query: &str) -> RosterResult<Vec<Student>> {
        let class = self
            .state
            .class(class_id)
            .ok_or(StoreError::ClassNotFound(class_id))?;
        let needle = query.trim().to_lowercase();
        Ok(class
            .students
            .iter()
            .filter(|student| student.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
