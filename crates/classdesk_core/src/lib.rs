//! Core domain logic for ClassDesk.
//! This crate owns the classroom session state and every rule derived from it.

pub mod config;
pub mod drafting;
pub mod logging;
pub mod model;
pub mod reports;
pub mod service;
pub mod store;

pub use config::{ConfigError, DraftingConfig};
pub use drafting::gemini::GeminiDrafter;
pub use drafting::ledger::DraftTicket;
pub use drafting::{DraftError, DraftRequest, DraftedContent, LessonPlanDrafter};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::class_group::{ClassGroup, ClassId};
pub use model::lesson_plan::{LessonPlan, LessonPlanId};
pub use model::schedule::{Period, SchoolDay, ScheduleSlot, SlotId, PERIODS_PER_DAY};
pub use model::student::{AttendanceLog, AttendanceStatus, Student, StudentId};
pub use model::task::{Task, TaskId, TaskPriority};
pub use model::ModelError;
pub use reports::{Absentee, Alert, AlertKind, AlertSeverity, ReportSummary};
pub use service::planner_service::{
    DraftInput, LessonPlanForm, PendingDraft, PlannerServiceError, PlannerService,
};
pub use service::roster_service::{
    parse_roster_lines, participation_band, ParticipationBand, RosterService, RosterServiceError,
};
pub use service::sample::sample_state;
pub use service::task_service::{TaskService, TaskServiceError};
pub use store::grid::{ScheduleGrid, GRID_SLOT_COUNT};
pub use store::{AppState, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
