//! Demo session used by the CLI and first-run UI.

use crate::model::class_group::ClassGroup;
use crate::model::student::Student;
use crate::model::task::{Task, TaskPriority};
use crate::store::AppState;

/// Builds a session with two classes, five students and two tasks.
pub fn sample_state() -> AppState {
    let mut state = AppState::new();

    state.insert_class(seeded_class(
        "Grade 1 - A",
        &[
            ("Adam Hassan", "", 8),
            ("Khalid Ali", "Needs follow-up in reading", 6),
            ("Sara Abdullah", "Excellent", 10),
        ],
    ));
    state.insert_class(seeded_class(
        "Grade 2 - B",
        &[("Fahad Omar", "", 7), ("Noura Saeed", "", 9)],
    ));

    state.insert_task(Task::new(
        "Prepare Sunday's math lesson",
        TaskPriority::High,
        None,
    ));
    let mut graded = Task::new("Record monthly test grades", TaskPriority::Medium, None);
    graded.completed = true;
    state.insert_task(graded);

    state
}

fn seeded_class(name: &str, rows: &[(&str, &str, u8)]) -> ClassGroup {
    let mut class = ClassGroup::new(name);
    class.students = rows
        .iter()
        .map(|(student_name, notes, score)| Student {
            notes: notes.to_string(),
            participation_score: *score,
            ..Student::new(*student_name)
        })
        .collect();
    class
}

#[cfg(test)]
mod tests {
    use super::sample_state;
    use crate::reports::ReportSummary;

    #[test]
    fn sample_state_has_expected_shape() {
        let state = sample_state();
        let summary = ReportSummary::compute(&state);
        assert_eq!(summary.class_count, 2);
        assert_eq!(summary.total_students, 5);
        assert_eq!(state.tasks().len(), 2);
        assert_eq!(state.tasks().iter().filter(|task| task.completed).count(), 1);
    }

    #[test]
    fn sample_students_carry_seeded_notes_and_scores() {
        let state = sample_state();
        let scores: Vec<_> = state
            .classes()
            .iter()
            .flat_map(|class| class.students.iter())
            .map(|student| student.participation_score)
            .collect();
        assert_eq!(scores, vec![8, 6, 10, 7, 9]);

        let khalid = &state.classes()[0].students[1];
        assert_eq!(khalid.name, "Khalid Ali");
        assert_eq!(khalid.notes, "Needs follow-up in reading");
        assert!(state.tasks()[1].completed);
        assert!(!state.tasks()[0].completed);
    }
}
