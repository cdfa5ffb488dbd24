//! Weekly planner use-case service.
//!
//! # Responsibility
//! - Assign class labels and hand-written lesson plans to grid slots.
//! - Run lesson-plan drafting and merge successful drafts into one slot.
//!
//! # Invariants
//! - Every slot change goes through `AppState::update_slot`.
//! - A failed or superseded draft leaves the target slot unchanged.
//! - Saving a hand-written plan keeps the existing plan id, content and
//!   generated flag.

use crate::drafting::ledger::DraftTicket;
use crate::drafting::{DraftError, DraftRequest, DraftedContent, LessonPlanDrafter};
use crate::model::lesson_plan::LessonPlan;
use crate::model::schedule::{Period, SchoolDay, ScheduleSlot};
use crate::store::{AppState, StoreError};
use chrono::NaiveDateTime;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Grade label sent when the slot has no class label.
pub const DEFAULT_GRADE_LABEL: &str = "General";

#[derive(Debug)]
pub enum PlannerServiceError {
    Store(StoreError),
    Draft(DraftError),
    /// A newer draft request for the same slot was issued after this one.
    DraftSuperseded(DraftTicket),
}

impl Display for PlannerServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Draft(err) => write!(f, "{err}"),
            Self::DraftSuperseded(ticket) => write!(
                f,
                "draft for {} period {} was superseded by a newer request",
                ticket.day, ticket.period
            ),
        }
    }
}

impl Error for PlannerServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Draft(err) => Some(err),
            Self::DraftSuperseded(_) => None,
        }
    }
}

impl From<StoreError> for PlannerServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<DraftError> for PlannerServiceError {
    fn from(value: DraftError) -> Self {
        Self::Draft(value)
    }
}

pub type PlannerResult<T> = Result<T, PlannerServiceError>;

/// Editable lesson-plan fields as entered in the planner form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonPlanForm {
    pub subject: String,
    pub topic: String,
    pub class_name: String,
    /// One objective per line; blank lines are dropped.
    pub objectives_text: String,
    pub materials: String,
    pub homework: String,
}

/// Drafting input as entered in the planner form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftInput {
    pub subject: String,
    pub topic: String,
    pub class_name: String,
    pub notes: String,
}

/// A draft request issued against a slot but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDraft {
    pub ticket: DraftTicket,
    pub request: DraftRequest,
    pub class_name: String,
}

pub struct PlannerService<'s> {
    state: &'s mut AppState,
}

impl<'s> PlannerService<'s> {
    pub fn new(state: &'s mut AppState) -> Self {
        Self { state }
    }

    /// Sets the free-text class label of one slot.
    pub fn assign_class(
        &mut self,
        day: SchoolDay,
        period: Period,
        class_name: &str,
    ) -> PlannerResult<ScheduleSlot> {
        let mut slot = self.current_slot(day, period)?;
        slot.class_name = class_name.trim().to_string();
        self.store(slot)
    }

    /// Saves a hand-written plan and class label into one slot.
    pub fn save_lesson_plan(
        &mut self,
        day: SchoolDay,
        period: Period,
        form: &LessonPlanForm,
    ) -> PlannerResult<ScheduleSlot> {
        let mut slot = self.current_slot(day, period)?;
        let previous = slot.lesson_plan.take();
        slot.class_name = form.class_name.trim().to_string();
        slot.lesson_plan = Some(LessonPlan {
            id: previous.as_ref().map(|plan| plan.id).unwrap_or_else(Uuid::new_v4),
            subject: form.subject.trim().to_string(),
            topic: form.topic.trim().to_string(),
            objectives: split_objectives(&form.objectives_text),
            materials: form.materials.clone(),
            content: previous
                .as_ref()
                .map(|plan| plan.content.clone())
                .unwrap_or_default(),
            homework: form.homework.clone(),
            is_generated: previous.map(|plan| plan.is_generated).unwrap_or(false),
        });
        self.store(slot)
    }

    /// Removes the plan from one slot, keeping its class label.
    pub fn clear_lesson_plan(&mut self, day: SchoolDay, period: Period) -> PlannerResult<ScheduleSlot> {
        let mut slot = self.current_slot(day, period)?;
        slot.lesson_plan = None;
        self.store(slot)
    }

    /// Drafts a plan with `drafter` and merges it into the slot.
    ///
    /// On failure the slot is left exactly as it was.
    pub fn draft_lesson_plan<D: LessonPlanDrafter>(
        &mut self,
        drafter: &D,
        day: SchoolDay,
        period: Period,
        input: &DraftInput,
    ) -> PlannerResult<ScheduleSlot> {
        let pending = self.begin_draft(day, period, input)?;
        let outcome = drafter.draft(&pending.request);
        self.complete_draft(&pending, outcome)
    }

    /// Validates input and issues a ticket for an out-of-band draft call.
    ///
    /// The ticket supersedes any earlier pending draft for the same slot.
    pub fn begin_draft(
        &mut self,
        day: SchoolDay,
        period: Period,
        input: &DraftInput,
    ) -> PlannerResult<PendingDraft> {
        let subject = input.subject.trim();
        let topic = input.topic.trim();
        if subject.is_empty() || topic.is_empty() {
            return Err(DraftError::MissingSubjectOrTopic.into());
        }
        self.current_slot(day, period)?;

        let class_name = input.class_name.trim().to_string();
        let grade_label = if class_name.is_empty() {
            DEFAULT_GRADE_LABEL.to_string()
        } else {
            class_name.clone()
        };
        let ticket = self.state.drafts_mut().issue(day, period);
        info!(
            "event=draft_begin module=planner_service status=ok day={day} period={period} sequence={}",
            ticket.sequence
        );
        Ok(PendingDraft {
            ticket,
            request: DraftRequest {
                subject: subject.to_string(),
                topic: topic.to_string(),
                grade_label,
                notes: input.notes.trim().to_string(),
            },
            class_name,
        })
    }

    /// Applies the outcome of a draft call started with `begin_draft`.
    ///
    /// # Errors
    /// - `DraftSuperseded` when a newer ticket exists for the slot.
    /// - `Draft` when the collaborator failed.
    ///
    /// In both cases the slot is not touched.
    pub fn complete_draft(
        &mut self,
        pending: &PendingDraft,
        outcome: Result<DraftedContent, DraftError>,
    ) -> PlannerResult<ScheduleSlot> {
        let ticket = pending.ticket;
        if !self.state.drafts().is_current(&ticket) {
            warn!(
                "event=draft_complete module=planner_service status=superseded day={} period={} sequence={}",
                ticket.day, ticket.period, ticket.sequence
            );
            return Err(PlannerServiceError::DraftSuperseded(ticket));
        }
        let content = outcome.map_err(|err| {
            warn!(
                "event=draft_complete module=planner_service status=error day={} period={}",
                ticket.day, ticket.period
            );
            err
        })?;

        let mut slot = self.current_slot(ticket.day, ticket.period)?;
        slot.class_name = pending.class_name.clone();
        slot.lesson_plan = Some(
            content.into_lesson_plan(pending.request.subject.clone(), pending.request.topic.clone()),
        );
        info!(
            "event=draft_complete module=planner_service status=ok day={} period={}",
            ticket.day, ticket.period
        );
        self.store(slot)
    }

    /// First planned slot today at or after the current period.
    pub fn next_lesson(&self, now: NaiveDateTime) -> Option<&ScheduleSlot> {
        self.state.next_lesson_today(now)
    }

    fn current_slot(&self, day: SchoolDay, period: Period) -> PlannerResult<ScheduleSlot> {
        self.state
            .find_slot(day, period)
            .cloned()
            .ok_or(PlannerServiceError::Store(StoreError::SlotNotFound { day, period }))
    }

    fn store(&mut self, slot: ScheduleSlot) -> PlannerResult<ScheduleSlot> {
        self.state.update_slot(slot.clone())?;
        Ok(slot)
    }
}

fn split_objectives(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_objectives;

    #[test]
    fn objectives_drop_blank_lines() {
        assert_eq!(
            split_objectives("Read\n\n  \nWrite"),
            vec!["Read".to_string(), "Write".to_string()]
        );
    }
}
