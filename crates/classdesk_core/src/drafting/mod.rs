//! Lesson-plan drafting contract.
//!
//! # Responsibility
//! - Define the request/response shape of the external drafting service.
//! - Turn a drafted body into a `LessonPlan` owned by the core.
//!
//! # Invariants
//! - A failed draft never produces a `LessonPlan`.
//! - Drafted plans always carry `is_generated = true`.

pub mod gemini;
pub mod ledger;

use crate::model::lesson_plan::LessonPlan;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Input forwarded to the drafting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRequest {
    pub subject: String,
    pub topic: String,
    pub grade_label: String,
    /// Free-text extra guidance; may be empty.
    pub notes: String,
}

/// Structured body returned by the drafting service.
///
/// Fields absent from the service payload default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftedContent {
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub materials: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub homework: String,
}

impl DraftedContent {
    /// Stamps identity, subject and topic onto the drafted body.
    pub fn into_lesson_plan(self, subject: impl Into<String>, topic: impl Into<String>) -> LessonPlan {
        LessonPlan {
            id: Uuid::new_v4(),
            subject: subject.into(),
            topic: topic.into(),
            objectives: self.objectives,
            materials: self.materials,
            content: self.content,
            homework: self.homework,
            is_generated: true,
        }
    }
}

/// Drafting failure surfaced to callers.
#[derive(Debug)]
pub enum DraftError {
    /// Subject or topic blank after trim.
    MissingSubjectOrTopic,
    /// Request could not be sent or the body could not be read.
    Transport(reqwest::Error),
    /// Service answered with a non-success status.
    Status { code: u16, body: String },
    /// Service answered without any candidate text.
    EmptyResponse,
    /// Candidate text was not the expected JSON shape.
    InvalidPayload(serde_json::Error),
    /// Collaborator-specific failure (used by non-HTTP drafters).
    Other(String),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSubjectOrTopic => {
                write!(f, "subject and topic are required before drafting")
            }
            Self::Transport(err) => write!(f, "drafting request failed: {err}"),
            Self::Status { code, body } => {
                write!(f, "drafting service returned status {code}: {body}")
            }
            Self::EmptyResponse => write!(f, "drafting service returned no content"),
            Self::InvalidPayload(err) => write!(f, "drafted lesson plan is malformed: {err}"),
            Self::Other(message) => write!(f, "drafting failed: {message}"),
        }
    }
}

impl Error for DraftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::InvalidPayload(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DraftError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl From<serde_json::Error> for DraftError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidPayload(value)
    }
}

/// External lesson-plan generator.
///
/// Blocking call; callers that must stay responsive run it off their state
/// lock (see `PlannerService::begin_draft`).
pub trait LessonPlanDrafter: Send + Sync {
    fn draft(&self, request: &DraftRequest) -> Result<DraftedContent, DraftError>;
}

impl<D: LessonPlanDrafter + ?Sized> LessonPlanDrafter for &D {
    fn draft(&self, request: &DraftRequest) -> Result<DraftedContent, DraftError> {
        (**self).draft(request)
    }
}

impl<D: LessonPlanDrafter + ?Sized> LessonPlanDrafter for Box<D> {
    fn draft(&self, request: &DraftRequest) -> Result<DraftedContent, DraftError> {
        (**self).draft(request)
    }
}
