//! Student record and attendance log.
//!
//! # Invariants
//! - `participation_score` stays within `0..=10`.
//! - The attendance log holds at most one status per date; rewriting a date
//!   replaces the status in place and keeps its original position.

use crate::model::ModelError;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

pub type StudentId = Uuid;

/// Lowest participation score.
pub const MIN_PARTICIPATION_SCORE: u8 = 0;
/// Highest participation score, also the default for new students.
pub const MAX_PARTICIPATION_SCORE: u8 = 10;

/// Daily attendance mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Excused => "excused",
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "late" => Ok(Self::Late),
            "excused" => Ok(Self::Excused),
            _ => Err(ModelError::UnknownAttendanceStatus(value.to_string())),
        }
    }
}

/// Ordered per-date attendance map.
///
/// Iteration follows first-write order, which the absentee report relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceLog(IndexMap<NaiveDate, AttendanceStatus>);

impl AttendanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the status for `date`, overwriting any earlier mark.
    pub fn set(&mut self, date: NaiveDate, status: AttendanceStatus) {
        self.0.insert(date, status);
    }

    pub fn get(&self, date: NaiveDate) -> Option<AttendanceStatus> {
        self.0.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, AttendanceStatus)> + '_ {
        self.0.iter().map(|(date, status)| (*date, *status))
    }

    /// Number of entries carrying `status`.
    pub fn count(&self, status: AttendanceStatus) -> usize {
        self.0.values().filter(|value| **value == status).count()
    }
}

/// One student on a class roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub notes: String,
    pub attendance: AttendanceLog,
    pub participation_score: u8,
}

impl Student {
    /// Creates a student with empty notes, no attendance and full score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            notes: String::new(),
            attendance: AttendanceLog::new(),
            participation_score: MAX_PARTICIPATION_SCORE,
        }
    }

    /// Returns a copy with the attendance entry for `date` written.
    pub fn with_attendance(&self, date: NaiveDate, status: AttendanceStatus) -> Self {
        let mut next = self.clone();
        next.attendance.set(date, status);
        next
    }

    /// Returns a copy with the score moved by `delta` and clamped to `0..=10`.
    pub fn with_participation_delta(&self, delta: i32) -> Self {
        let mut next = self.clone();
        next.participation_score = clamp_score(i32::from(self.participation_score).saturating_add(delta));
        next
    }
}

/// Clamps a raw score into the valid participation range.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(
        i32::from(MIN_PARTICIPATION_SCORE),
        i32::from(MAX_PARTICIPATION_SCORE),
    ) as u8
}
