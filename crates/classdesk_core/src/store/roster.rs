//! Class and student mutators.

use super::{AppState, StoreError, StoreResult};
use crate::model::class_group::{ClassGroup, ClassId};
use crate::model::student::{AttendanceStatus, Student, StudentId};
use chrono::NaiveDate;
use log::debug;

impl AppState {
    /// Appends a new class with an empty roster.
    pub fn add_class(&mut self, name: impl Into<String>) -> ClassGroup {
        let class = ClassGroup::new(name);
        self.classes.push(class.clone());
        debug!(
            "event=class_add module=store status=ok class_id={}",
            class.id
        );
        class
    }

    /// Appends a fully built class, roster included.
    pub(crate) fn insert_class(&mut self, class: ClassGroup) {
        debug!(
            "event=class_insert module=store status=ok class_id={} count={}",
            class.id,
            class.roster_size()
        );
        self.classes.push(class);
    }

    /// Removes a class together with its whole roster.
    pub fn delete_class(&mut self, class_id: ClassId) -> StoreResult<()> {
        let before = self.classes.len();
        self.classes.retain(|class| class.id != class_id);
        if self.classes.len() == before {
            return Err(StoreError::ClassNotFound(class_id));
        }
        debug!("event=class_delete module=store status=ok class_id={class_id}");
        Ok(())
    }

    /// Appends one student with default notes, attendance and score.
    pub fn add_student(
        &mut self,
        class_id: ClassId,
        name: impl Into<String>,
    ) -> StoreResult<StudentId> {
        let class = self.class_mut(class_id)?;
        let student = Student::new(name);
        let student_id = student.id;
        class.students.push(student);
        debug!(
            "event=student_add module=store status=ok class_id={class_id} student_id={student_id}"
        );
        Ok(student_id)
    }

    /// Appends many students in input order.
    ///
    /// Names are trimmed and blank entries produce no student.
    pub fn import_students<I, S>(&mut self, class_id: ClassId, names: I) -> StoreResult<Vec<StudentId>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let class = self.class_mut(class_id)?;
        let added = names
            .into_iter()
            .filter_map(|name| {
                let trimmed = name.as_ref().trim();
                (!trimmed.is_empty()).then(|| Student::new(trimmed))
            })
            .map(|student| {
                let student_id = student.id;
                class.students.push(student);
                student_id
            })
            .collect::<Vec<_>>();
        debug!(
            "event=student_import module=store status=ok class_id={class_id} count={}",
            added.len()
        );
        Ok(added)
    }

    /// Removes one student from one class roster.
    pub fn delete_student(&mut self, class_id: ClassId, student_id: StudentId) -> StoreResult<()> {
        let class = self.class_mut(class_id)?;
        let before = class.students.len();
        class.students.retain(|student| student.id != student_id);
        if class.students.len() == before {
            return Err(StoreError::StudentNotFound {
                class_id,
                student_id,
            });
        }
        debug!(
            "event=student_delete module=store status=ok class_id={class_id} student_id={student_id}"
        );
        Ok(())
    }

    /// Replaces the student with the same id wholesale.
    ///
    /// This is a full replacement, not a patch: every field of `student`
    /// becomes the stored value.
    pub fn update_student(&mut self, class_id: ClassId, student: Student) -> StoreResult<()> {
        let class = self.class_mut(class_id)?;
        let student_id = student.id;
        let slot = class
            .students
            .iter_mut()
            .find(|existing| existing.id == student_id)
            .ok_or(StoreError::StudentNotFound {
                class_id,
                student_id,
            })?;
        *slot = student;
        Ok(())
    }

    /// Writes or overwrites the attendance entry for `date`.
    pub fn set_attendance(
        &mut self,
        class_id: ClassId,
        student_id: StudentId,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> StoreResult<()> {
        let updated = self.require_student(class_id, student_id)?.with_attendance(date, status);
        self.update_student(class_id, updated)?;
        debug!(
            "event=attendance_set module=store status=ok student_id={student_id} mark={}",
            status.as_str()
        );
        Ok(())
    }

    /// Moves the participation score by `delta`, clamped to `0..=10`.
    ///
    /// Returns the stored score.
    pub fn adjust_participation(
        &mut self,
        class_id: ClassId,
        student_id: StudentId,
        delta: i32,
    ) -> StoreResult<u8> {
        let updated = self
            .require_student(class_id, student_id)?
            .with_participation_delta(delta);
        let score = updated.participation_score;
        self.update_student(class_id, updated)?;
        Ok(score)
    }

    pub fn student(&self, class_id: ClassId, student_id: StudentId) -> Option<&Student> {
        self.class(class_id)
            .and_then(|class| class.student(student_id))
    }

    fn require_student(&self, class_id: ClassId, student_id: StudentId) -> StoreResult<&Student> {
        let class = self
            .class(class_id)
            .ok_or(StoreError::ClassNotFound(class_id))?;
        class.student(student_id).ok_or(StoreError::StudentNotFound {
            class_id,
            student_id,
        })
    }

    fn class_mut(&mut self, class_id: ClassId) -> StoreResult<&mut ClassGroup> {
        self.classes
            .iter_mut()
            .find(|class| class.id == class_id)
            .ok_or(StoreError::ClassNotFound(class_id))
    }
}
