//! Dashboard alert rules.

use super::summary::{ABSENTEEISM_ALERT_THRESHOLD, PLANNING_ALERT_THRESHOLD};
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Warning,
    Danger,
    Info,
}

impl AlertSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlertKind {
    PlanningBehind,
    HighAbsenteeism { count: usize },
    Onboarding,
}

impl AlertKind {
    /// Stable machine label, matching the serialized `kind` tag.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlanningBehind => "planning_behind",
            Self::HighAbsenteeism { .. } => "high_absenteeism",
            Self::Onboarding => "onboarding",
        }
    }

    pub fn severity(self) -> AlertSeverity {
        match self {
            Self::PlanningBehind => AlertSeverity::Warning,
            Self::HighAbsenteeism { .. } => AlertSeverity::Danger,
            Self::Onboarding => AlertSeverity::Info,
        }
    }
}

impl Display for AlertKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlanningBehind => write!(
                f,
                "Weekly lesson planning is below {PLANNING_ALERT_THRESHOLD}%"
            ),
            Self::HighAbsenteeism { count } => {
                write!(f, "High absenteeism ({count} recent absences)")
            }
            Self::Onboarding => write!(f, "No students yet. Start by adding your classes."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    #[serde(flatten)]
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
}

impl From<AlertKind> for Alert {
    fn from(kind: AlertKind) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message: kind.to_string(),
        }
    }
}

/// Evaluates the three independent alert rules in fixed order.
pub fn alerts(planning_progress: u8, absentee_count: usize, total_students: usize) -> Vec<Alert> {
    let mut fired = Vec::new();
    if planning_progress < PLANNING_ALERT_THRESHOLD {
        fired.push(AlertKind::PlanningBehind);
    }
    if absentee_count > ABSENTEEISM_ALERT_THRESHOLD {
        fired.push(AlertKind::HighAbsenteeism {
            count: absentee_count,
        });
    }
    if total_students == 0 {
        fired.push(AlertKind::Onboarding);
    }
    fired.into_iter().map(Alert::from).collect()
}
