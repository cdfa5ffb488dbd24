//! Lesson plan attached to a schedule slot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type LessonPlanId = Uuid;

/// Lesson plan content for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub id: LessonPlanId,
    pub subject: String,
    pub topic: String,
    pub objectives: Vec<String>,
    pub materials: String,
    pub content: String,
    pub homework: String,
    /// Set when the plan came back from the drafting collaborator.
    pub is_generated: bool,
}

impl LessonPlan {
    /// Creates a hand-written plan with empty body fields.
    pub fn new(subject: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            topic: topic.into(),
            objectives: Vec::new(),
            materials: String::new(),
            content: String::new(),
            homework: String::new(),
            is_generated: false,
        }
    }

    /// A slot counts as planned only when its plan carries a topic.
    pub fn has_topic(&self) -> bool {
        !self.topic.is_empty()
    }
}
