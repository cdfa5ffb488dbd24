//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single in-process classroom session behind a lock.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Ids cross the boundary as hyphenated UUID strings.
//! - Dates cross the boundary as `YYYY-MM-DD` strings.
//! - The session lock is never held while a lesson-plan draft is in flight.

use chrono::{Local, NaiveDate};
use classdesk_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    participation_band, ping as ping_inner, sample_state, AppState, AttendanceStatus,
    DraftError, DraftInput, DraftedContent, DraftingConfig, GeminiDrafter, LessonPlanDrafter,
    LessonPlanForm, Period, PlannerService, ReportSummary, RosterService, ScheduleSlot,
    SchoolDay, Student, Task, TaskPriority, TaskService,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";
const REPORT_ABSENTEE_LIMIT: usize = 5;

static SESSION: OnceLock<Mutex<AppState>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for classroom commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Id of the created or affected entity, when there is one.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ClassroomActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }

    fn from_result(operation: &str, result: Result<(String, Option<String>), String>) -> Self {
        match result {
            Ok((message, id)) => Self::success(message, id),
            Err(err) => Self::failure(format!("{operation} failed: {err}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEntryView {
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentView {
    pub id: String,
    pub name: String,
    pub notes: String,
    pub participation_score: u8,
    /// `strong|fair|low`.
    pub participation_band: String,
    /// Entries in first-write order.
    pub attendance: Vec<AttendanceEntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassView {
    pub id: String,
    pub name: String,
    pub students: Vec<StudentView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// `high|medium|low`.
    pub priority: String,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPlanView {
    pub id: String,
    pub subject: String,
    pub topic: String,
    pub objectives: Vec<String>,
    pub materials: String,
    pub content: String,
    pub homework: String,
    pub is_generated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub id: String,
    /// Lower-case day name, `sunday` through `thursday`.
    pub day: String,
    pub period: u8,
    pub class_name: String,
    pub lesson_plan: Option<LessonPlanView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView {
    pub kind: String,
    /// `warning|danger|info`.
    pub severity: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsenteeView {
    pub student_name: String,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub total_students: u32,
    pub class_count: u32,
    pub attendance_rate: u8,
    pub planned_slots: u32,
    pub planning_progress: u8,
    pub absentee_count: u32,
    /// At most five entries, in report order.
    pub recent_absentees: Vec<AbsenteeView>,
    pub alerts: Vec<AlertView>,
}

/// Replaces the session with an empty state.
#[flutter_rust_bridge::frb(sync)]
pub fn session_reset() -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "session_reset",
        with_session(|state| {
            *state = AppState::new();
            Ok(("Session cleared.".to_string(), None))
        }),
    )
}

/// Replaces the session with the demo classes and tasks.
#[flutter_rust_bridge::frb(sync)]
pub fn session_load_sample() -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "session_load_sample",
        with_session(|state| {
            *state = sample_state();
            Ok(("Sample data loaded.".to_string(), None))
        }),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn class_create(name: String) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "class_create",
        with_session(|state| {
            let class = RosterService::new(state)
                .create_class(&name)
                .map_err(|err| err.to_string())?;
            Ok(("Class created.".to_string(), Some(class.id.to_string())))
        }),
    )
}

/// Deletes a class together with its students.
#[flutter_rust_bridge::frb(sync)]
pub fn class_delete(class_id: String) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "class_delete",
        with_session(|state| {
            let class_id = parse_id(&class_id)?;
            RosterService::new(state)
                .remove_class(class_id)
                .map_err(|err| err.to_string())?;
            Ok(("Class deleted.".to_string(), Some(class_id.to_string())))
        }),
    )
}

/// Lists every class with its roster, in creation order.
#[flutter_rust_bridge::frb(sync)]
pub fn classes_list() -> Vec<ClassView> {
    read_session(|state| {
        state
            .classes()
            .iter()
            .map(|class| ClassView {
                id: class.id.to_string(),
                name: class.name.clone(),
                students: class.students.iter().map(to_student_view).collect(),
            })
            .collect()
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn student_enroll(class_id: String, name: String) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "student_enroll",
        with_session(|state| {
            let class_id = parse_id(&class_id)?;
            let student_id = RosterService::new(state)
                .enroll_student(class_id, &name)
                .map_err(|err| err.to_string())?;
            Ok(("Student added.".to_string(), Some(student_id.to_string())))
        }),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn student_delete(class_id: String, student_id: String) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "student_delete",
        with_session(|state| {
            let class_id = parse_id(&class_id)?;
            let student_id = parse_id(&student_id)?;
            RosterService::new(state)
                .remove_student(class_id, student_id)
                .map_err(|err| err.to_string())?;
            Ok(("Student removed.".to_string(), Some(student_id.to_string())))
        }),
    )
}

/// Imports one student per non-blank line of `text`.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_import_text(class_id: String, text: String) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "roster_import_text",
        with_session(|state| {
            let class_id = parse_id(&class_id)?;
            let added = RosterService::new(state)
                .import_roster_text(class_id, &text)
                .map_err(|err| err.to_string())?;
            Ok((format!("Imported {} student(s).", added.len()), None))
        }),
    )
}

/// Imports one student per non-blank line of the file at `path`.
///
/// # FFI contract
/// - Sync call; reads one local file while holding the session lock.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_import_file(class_id: String, path: String) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "roster_import_file",
        with_session(|state| {
            let class_id = parse_id(&class_id)?;
            let added = RosterService::new(state)
                .import_roster_file(class_id, path.trim())
                .map_err(|err| err.to_string())?;
            Ok((format!("Imported {} student(s).", added.len()), None))
        }),
    )
}

/// Filters one class roster by case-insensitive name substring.
#[flutter_rust_bridge::frb(sync)]
pub fn students_search(class_id: String, query: String) -> Vec<StudentView> {
    with_session(|state| {
        let class_id = parse_id(&class_id)?;
        let students = RosterService::new(state)
            .search_students(class_id, &query)
            .map_err(|err| err.to_string())?;
        Ok(students.iter().map(to_student_view).collect())
    })
    .unwrap_or_default()
}

/// Records `status` (`present|absent|late|excused`) for one date.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_record(
    class_id: String,
    student_id: String,
    date: String,
    status: String,
) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "attendance_record",
        with_session(|state| {
            let class_id = parse_id(&class_id)?;
            let student_id = parse_id(&student_id)?;
            let date = parse_date(&date)?;
            let status = status
                .parse::<AttendanceStatus>()
                .map_err(|err| err.to_string())?;
            RosterService::new(state)
                .record_attendance(class_id, student_id, date, status)
                .map_err(|err| err.to_string())?;
            Ok(("Attendance saved.".to_string(), Some(student_id.to_string())))
        }),
    )
}

/// Adds `delta` to a participation score; the message carries the new score.
#[flutter_rust_bridge::frb(sync)]
pub fn participation_adjust(
    class_id: String,
    student_id: String,
    delta: i32,
) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "participation_adjust",
        with_session(|state| {
            let class_id = parse_id(&class_id)?;
            let student_id = parse_id(&student_id)?;
            let score = RosterService::new(state)
                .adjust_participation(class_id, student_id, delta)
                .map_err(|err| err.to_string())?;
            Ok((score.to_string(), Some(student_id.to_string())))
        }),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn student_update_notes(
    class_id: String,
    student_id: String,
    notes: String,
) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "student_update_notes",
        with_session(|state| {
            let class_id = parse_id(&class_id)?;
            let student_id = parse_id(&student_id)?;
            RosterService::new(state)
                .update_notes(class_id, student_id, &notes)
                .map_err(|err| err.to_string())?;
            Ok(("Notes saved.".to_string(), Some(student_id.to_string())))
        }),
    )
}

/// Creates an open task.
///
/// Input semantics:
/// - `priority`: `high|medium|low` (case-insensitive).
/// - `due_date`: optional `YYYY-MM-DD`; blank is treated as absent.
#[flutter_rust_bridge::frb(sync)]
pub fn task_create(
    text: String,
    priority: String,
    due_date: Option<String>,
) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "task_create",
        with_session(|state| {
            let priority = priority
                .parse::<TaskPriority>()
                .map_err(|err| err.to_string())?;
            let due_date = match due_date.as_deref().map(str::trim) {
                Some(raw) if !raw.is_empty() => Some(parse_date(raw)?),
                _ => None,
            };
            let task = TaskService::new(state)
                .create_task(&text, priority, due_date)
                .map_err(|err| err.to_string())?;
            Ok(("Task created.".to_string(), Some(task.id.to_string())))
        }),
    )
}

/// Flips a task's completed flag; the message is the new flag.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(task_id: String) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "task_toggle",
        with_session(|state| {
            let task_id = parse_id(&task_id)?;
            let completed = TaskService::new(state)
                .toggle_task(task_id)
                .map_err(|err| err.to_string())?;
            Ok((completed.to_string(), Some(task_id.to_string())))
        }),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(task_id: String) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        "task_delete",
        with_session(|state| {
            let task_id = parse_id(&task_id)?;
            TaskService::new(state)
                .remove_task(task_id)
                .map_err(|err| err.to_string())?;
            Ok(("Task deleted.".to_string(), Some(task_id.to_string())))
        }),
    )
}

/// Tasks in display order: open first, then priority high to low.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_list() -> Vec<TaskView> {
    with_session(|state| {
        Ok(TaskService::new(state)
            .sorted_tasks()
            .iter()
            .map(to_task_view)
            .collect())
    })
    .unwrap_or_default()
}

/// All 35 slots, Sunday period 1 through Thursday period 7.
#[flutter_rust_bridge::frb(sync)]
pub fn schedule_list() -> Vec<SlotView> {
    read_session(|state| state.grid().slots().map(to_slot_view).collect())
}

#[flutter_rust_bridge::frb(sync)]
pub fn schedule_assign_class(day: String, period: u8, class_name: String) -> ClassroomActionResponse {
    slot_action("schedule_assign_class", &day, period, |planner, day, period| {
        planner.assign_class(day, period, &class_name)
    })
}

/// Saves a hand-written plan; `objectives_text` holds one objective per line.
#[flutter_rust_bridge::frb(sync)]
#[allow(clippy::too_many_arguments)]
pub fn schedule_save_plan(
    day: String,
    period: u8,
    subject: String,
    topic: String,
    class_name: String,
    objectives_text: String,
    materials: String,
    homework: String,
) -> ClassroomActionResponse {
    let form = LessonPlanForm {
        subject,
        topic,
        class_name,
        objectives_text,
        materials,
        homework,
    };
    slot_action("schedule_save_plan", &day, period, |planner, day, period| {
        planner.save_lesson_plan(day, period, &form)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn schedule_clear_plan(day: String, period: u8) -> ClassroomActionResponse {
    slot_action("schedule_clear_plan", &day, period, |planner, day, period| {
        planner.clear_lesson_plan(day, period)
    })
}

/// Drafts a lesson plan with the configured Gemini model and stores it.
///
/// # FFI contract
/// - Blocking network call; run from a background isolate.
/// - The session stays usable while the request is in flight.
/// - A failed or superseded draft leaves the slot unchanged.
/// - Never panics.
pub fn schedule_draft_plan(
    day: String,
    period: u8,
    subject: String,
    topic: String,
    class_name: String,
    notes: String,
) -> ClassroomActionResponse {
    let input = DraftInput {
        subject,
        topic,
        class_name,
        notes,
    };
    let drafter = match DraftingConfig::from_env() {
        Ok(config) => GeminiDrafter::new(config),
        Err(err) => Err(DraftError::Other(err.to_string())),
    };
    match drafter {
        Ok(drafter) => draft_into_slot(&drafter, &day, period, &input),
        Err(err) => {
            warn!("event=draft_setup module=ffi status=error");
            ClassroomActionResponse::failure(format!("schedule_draft_plan failed: {err}"))
        }
    }
}

/// First planned lesson from the current period onward today.
#[flutter_rust_bridge::frb(sync)]
pub fn schedule_next_lesson() -> Option<SlotView> {
    let now = Local::now().naive_local();
    read_session(|state| state.next_lesson_today(now).map(to_slot_view))
}

/// Dashboard figures recomputed from the current session.
#[flutter_rust_bridge::frb(sync)]
pub fn report_summary() -> ReportView {
    read_session(|state| to_report_view(&ReportSummary::compute(state)))
}

fn draft_into_slot<D: LessonPlanDrafter>(
    drafter: &D,
    day: &str,
    period: u8,
    input: &DraftInput,
) -> ClassroomActionResponse {
    let pending = match with_session(|state| {
        let (day, period) = parse_slot(day, period)?;
        PlannerService::new(state)
            .begin_draft(day, period, input)
            .map_err(|err| err.to_string())
    }) {
        Ok(pending) => pending,
        Err(err) => {
            return ClassroomActionResponse::failure(format!("schedule_draft_plan failed: {err}"))
        }
    };

    let outcome: Result<DraftedContent, DraftError> = drafter.draft(&pending.request);

    ClassroomActionResponse::from_result(
        "schedule_draft_plan",
        with_session(|state| {
            let slot = PlannerService::new(state)
                .complete_draft(&pending, outcome)
                .map_err(|err| err.to_string())?;
            Ok(("Lesson plan drafted.".to_string(), Some(slot.id.to_string())))
        }),
    )
}

fn slot_action<E: std::fmt::Display>(
    operation: &str,
    day: &str,
    period: u8,
    f: impl FnOnce(&mut PlannerService<'_>, SchoolDay, Period) -> Result<ScheduleSlot, E>,
) -> ClassroomActionResponse {
    ClassroomActionResponse::from_result(
        operation,
        with_session(|state| {
            let (day, period) = parse_slot(day, period)?;
            let mut planner = PlannerService::new(state);
            let slot = f(&mut planner, day, period).map_err(|err| err.to_string())?;
            Ok(("Slot saved.".to_string(), Some(slot.id.to_string())))
        }),
    )
}

fn lock_session() -> MutexGuard<'static, AppState> {
    SESSION
        .get_or_init(|| Mutex::new(AppState::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn with_session<T>(f: impl FnOnce(&mut AppState) -> Result<T, String>) -> Result<T, String> {
    let mut guard = lock_session();
    f(&mut guard)
}

fn read_session<T>(f: impl FnOnce(&AppState) -> T) -> T {
    let guard = lock_session();
    f(&guard)
}

fn parse_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid id `{}`: {err}", raw.trim()))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|err| format!("invalid date `{}`: {err}", raw.trim()))
}

fn parse_slot(day: &str, period: u8) -> Result<(SchoolDay, Period), String> {
    let day = day.parse::<SchoolDay>().map_err(|err| err.to_string())?;
    let period = Period::new(period).map_err(|err| err.to_string())?;
    Ok((day, period))
}

fn to_student_view(student: &Student) -> StudentView {
    StudentView {
        id: student.id.to_string(),
        name: student.name.clone(),
        notes: student.notes.clone(),
        participation_score: student.participation_score,
        participation_band: participation_band(student.participation_score)
            .as_str()
            .to_string(),
        attendance: student
            .attendance
            .iter()
            .map(|(date, status)| AttendanceEntryView {
                date: date.format(DATE_FORMAT).to_string(),
                status: status.as_str().to_string(),
            })
            .collect(),
    }
}

fn to_task_view(task: &Task) -> TaskView {
    TaskView {
        id: task.id.to_string(),
        text: task.text.clone(),
        completed: task.completed,
        priority: task.priority.as_str().to_string(),
        due_date: task
            .due_date
            .map(|date| date.format(DATE_FORMAT).to_string()),
    }
}

fn to_slot_view(slot: &ScheduleSlot) -> SlotView {
    SlotView {
        id: slot.id.to_string(),
        day: slot.day.as_str().to_string(),
        period: slot.period.get(),
        class_name: slot.class_name.clone(),
        lesson_plan: slot.lesson_plan.as_ref().map(|plan| LessonPlanView {
            id: plan.id.to_string(),
            subject: plan.subject.clone(),
            topic: plan.topic.clone(),
            objectives: plan.objectives.clone(),
            materials: plan.materials.clone(),
            content: plan.content.clone(),
            homework: plan.homework.clone(),
            is_generated: plan.is_generated,
        }),
    }
}

fn to_report_view(summary: &ReportSummary) -> ReportView {
    ReportView {
        total_students: saturating_u32(summary.total_students),
        class_count: saturating_u32(summary.class_count),
        attendance_rate: summary.attendance_rate,
        planned_slots: saturating_u32(summary.planned_slots),
        planning_progress: summary.planning_progress,
        absentee_count: saturating_u32(summary.absentees.len()),
        recent_absentees: summary
            .recent_absentees(REPORT_ABSENTEE_LIMIT)
            .iter()
            .map(|absentee| AbsenteeView {
                student_name: absentee.student_name.clone(),
                class_name: absentee.class_name.clone(),
            })
            .collect(),
        alerts: summary
            .alerts
            .iter()
            .map(|alert| AlertView {
                kind: alert.kind.label().to_string(),
                severity: alert.severity.as_str().to_string(),
                message: alert.message.clone(),
            })
            .collect(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        attendance_record, class_create, classes_list, core_version, draft_into_slot,
        init_logging, participation_adjust, ping, roster_import_text, schedule_clear_plan,
        schedule_list, schedule_save_plan, student_enroll, task_create, task_toggle, tasks_list,
        to_report_view,
    };
    use classdesk_core::{
        sample_state, DraftError, DraftInput, DraftRequest, DraftedContent, LessonPlanDrafter,
        ReportSummary,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    struct StubDrafter(Result<DraftedContent, String>);

    impl LessonPlanDrafter for StubDrafter {
        fn draft(&self, _request: &DraftRequest) -> Result<DraftedContent, DraftError> {
            self.0.clone().map_err(DraftError::Other)
        }
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn class_and_roster_flow_round_trips_through_views() {
        let name = unique_token("class");
        let created = class_create(name.clone());
        assert!(created.ok, "{}", created.message);
        let class_id = created.id.expect("class create should return id");

        let imported = roster_import_text(class_id.clone(), "Ali\n\n Reem \n".to_string());
        assert!(imported.ok, "{}", imported.message);
        assert_eq!(imported.message, "Imported 2 student(s).");

        let enrolled = student_enroll(class_id.clone(), "Nada".to_string());
        let student_id = enrolled.id.expect("enroll should return id");
        let marked = attendance_record(
            class_id.clone(),
            student_id.clone(),
            "2026-04-05".to_string(),
            "Absent".to_string(),
        );
        assert!(marked.ok, "{}", marked.message);
        let adjusted = participation_adjust(class_id.clone(), student_id.clone(), -4);
        assert_eq!(adjusted.message, "6");

        let class = classes_list()
            .into_iter()
            .find(|class| class.id == class_id)
            .expect("created class listed");
        assert_eq!(class.name, name);
        let names: Vec<_> = class.students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ali", "Reem", "Nada"]);
        let nada = &class.students[2];
        assert_eq!(nada.participation_band, "fair");
        assert_eq!(nada.attendance[0].date, "2026-04-05");
        assert_eq!(nada.attendance[0].status, "absent");
    }

    #[test]
    fn bad_ids_and_dates_fail_without_panicking() {
        assert!(!class_create("   ".to_string()).ok);
        assert!(!student_enroll("not-a-uuid".to_string(), "Ali".to_string()).ok);

        let class_id = class_create(unique_token("dates")).id.expect("class id");
        let student_id = student_enroll(class_id.clone(), "Ali".to_string())
            .id
            .expect("student id");
        let response = attendance_record(
            class_id,
            student_id,
            "05/04/2026".to_string(),
            "present".to_string(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("invalid date"));
    }

    #[test]
    fn task_flow_reports_toggle_state() {
        let text = unique_token("task");
        let created = task_create(text.clone(), "HIGH".to_string(), Some(" ".to_string()));
        assert!(created.ok, "{}", created.message);
        let task_id = created.id.expect("task id");

        assert_eq!(task_toggle(task_id.clone()).message, "true");
        let task = tasks_list()
            .into_iter()
            .find(|task| task.id == task_id)
            .expect("task listed");
        assert!(task.completed);
        assert_eq!(task.priority, "high");
        assert_eq!(task.due_date, None);

        assert!(!task_create(text, "urgent".to_string(), None).ok);
    }

    #[test]
    fn schedule_save_and_clear_keep_thirty_five_slots() {
        let saved = schedule_save_plan(
            "thu".to_string(),
            7,
            "Math".to_string(),
            "Fractions".to_string(),
            "5A".to_string(),
            "Add\nSubtract".to_string(),
            String::new(),
            String::new(),
        );
        assert!(saved.ok, "{}", saved.message);
        assert!(!schedule_clear_plan("friday".to_string(), 1).ok);
        assert!(!schedule_clear_plan("sunday".to_string(), 8).ok);

        let slots = schedule_list();
        assert_eq!(slots.len(), 35);
        assert_eq!(slots[0].day, "sunday");
        assert_eq!(slots[34].period, 7);
    }

    #[test]
    fn failed_draft_reports_error_and_keeps_slot() {
        let input = DraftInput {
            subject: "Science".to_string(),
            topic: "Magnets".to_string(),
            class_name: String::new(),
            notes: String::new(),
        };
        let before = schedule_list()
            .into_iter()
            .find(|slot| slot.day == "wednesday" && slot.period == 6)
            .expect("slot exists");

        let response = draft_into_slot(
            &StubDrafter(Err("offline".to_string())),
            "wednesday",
            6,
            &input,
        );
        assert!(!response.ok);
        assert!(response.message.contains("offline"));

        let after = schedule_list()
            .into_iter()
            .find(|slot| slot.day == "wednesday" && slot.period == 6)
            .expect("slot exists");
        assert_eq!(before, after);
    }

    #[test]
    fn successful_draft_marks_plan_generated() {
        let input = DraftInput {
            subject: "Science".to_string(),
            topic: "Volcanoes".to_string(),
            class_name: "6B".to_string(),
            notes: String::new(),
        };
        let content = DraftedContent {
            objectives: vec!["Describe eruptions".to_string()],
            ..DraftedContent::default()
        };
        let response = draft_into_slot(&StubDrafter(Ok(content)), "tuesday", 1, &input);
        assert!(response.ok, "{}", response.message);

        let slot = schedule_list()
            .into_iter()
            .find(|slot| slot.id == response.id.clone().unwrap_or_default())
            .expect("drafted slot listed");
        let plan = slot.lesson_plan.expect("plan stored");
        assert!(plan.is_generated);
        assert_eq!(plan.topic, "Volcanoes");
        assert_eq!(slot.class_name, "6B");
    }

    #[test]
    fn report_view_caps_absentees_and_labels_alerts() {
        let view = to_report_view(&ReportSummary::compute(&sample_state()));
        assert_eq!(view.total_students, 5);
        assert_eq!(view.class_count, 2);
        assert!(view.recent_absentees.len() <= 5);
        assert!(view
            .alerts
            .iter()
            .any(|alert| alert.kind == "planning_behind" && alert.severity == "warning"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
