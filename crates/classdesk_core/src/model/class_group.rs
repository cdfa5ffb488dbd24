//! Class roster record.

use crate::model::student::{Student, StudentId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ClassId = Uuid;

/// A named class owning its ordered roster.
///
/// Roster order is insertion order and drives display numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGroup {
    pub id: ClassId,
    pub name: String,
    pub students: Vec<Student>,
}

impl ClassGroup {
    /// Creates a class with an empty roster and a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            students: Vec::new(),
        }
    }

    pub fn student(&self, student_id: StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id == student_id)
    }

    pub fn roster_size(&self) -> usize {
        self.students.len()
    }
}
