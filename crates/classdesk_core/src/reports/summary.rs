//! Aggregate figures for the reports dashboard.

use super::alerts::{alerts, Alert};
use super::percent;
use crate::model::class_group::ClassGroup;
use crate::model::student::AttendanceStatus;
use crate::store::grid::{ScheduleGrid, GRID_SLOT_COUNT};
use crate::store::AppState;
use serde::Serialize;

/// Planning progress below this percentage raises an alert.
pub const PLANNING_ALERT_THRESHOLD: u8 = 50;
/// More absences than this raise an alert.
pub const ABSENTEEISM_ALERT_THRESHOLD: usize = 3;

/// One absent mark, named by student and class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Absentee {
    pub student_name: String,
    pub class_name: String,
}

pub fn total_students(classes: &[ClassGroup]) -> usize {
    classes.iter().map(ClassGroup::roster_size).sum()
}

/// Count of attendance entries across every student.
pub fn attendance_entry_count(classes: &[ClassGroup]) -> usize {
    classes
        .iter()
        .flat_map(|class| class.students.iter())
        .map(|student| student.attendance.len())
        .sum()
}

/// Share of attendance entries marked present, as a whole percentage.
pub fn attendance_rate(classes: &[ClassGroup]) -> u8 {
    let present: usize = classes
        .iter()
        .flat_map(|class| class.students.iter())
        .map(|student| student.attendance.count(AttendanceStatus::Present))
        .sum();
    percent(present, attendance_entry_count(classes))
}

/// Every absent mark in class → student → first-write order.
pub fn absentees(classes: &[ClassGroup]) -> Vec<Absentee> {
    classes
        .iter()
        .flat_map(|class| {
            class.students.iter().flat_map(move |student| {
                student
                    .attendance
                    .iter()
                    .filter(|(_, status)| *status == AttendanceStatus::Absent)
                    .map(move |_| Absentee {
                        student_name: student.name.clone(),
                        class_name: class.name.clone(),
                    })
            })
        })
        .collect()
}

/// Share of the 35 grid slots whose plan has a topic.
pub fn planning_progress(grid: &ScheduleGrid) -> u8 {
    percent(grid.planned_slot_count(), GRID_SLOT_COUNT)
}

/// Dashboard snapshot computed from one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_students: usize,
    pub class_count: usize,
    pub attendance_entries: usize,
    pub attendance_rate: u8,
    pub absentees: Vec<Absentee>,
    pub planned_slots: usize,
    pub planning_progress: u8,
    pub alerts: Vec<Alert>,
}

impl ReportSummary {
    pub fn compute(state: &AppState) -> Self {
        let classes = state.classes();
        let grid = state.grid();
        let total_students = total_students(classes);
        let absentees = absentees(classes);
        let planning_progress = planning_progress(grid);
        let alerts = alerts(planning_progress, absentees.len(), total_students);
        Self {
            total_students,
            class_count: classes.len(),
            attendance_entries: attendance_entry_count(classes),
            attendance_rate: attendance_rate(classes),
            absentees,
            planned_slots: grid.planned_slot_count(),
            planning_progress,
            alerts,
        }
    }

    /// First `limit` absentees in report order.
    pub fn recent_absentees(&self, limit: usize) -> &[Absentee] {
        &self.absentees[..self.absentees.len().min(limit)]
    }
}
