//! Weekly schedule keys and slot record.
//!
//! # Invariants
//! - The school week is Sunday through Thursday.
//! - Periods run from 1 to 7 inclusive.

use crate::model::lesson_plan::LessonPlan;
use crate::model::ModelError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

pub type SlotId = Uuid;

/// Number of teaching periods per day.
pub const PERIODS_PER_DAY: u8 = 7;

/// Teaching day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl SchoolDay {
    /// All school days in grid order.
    pub const ALL: [SchoolDay; 5] = [
        SchoolDay::Sunday,
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
    ];

    /// Maps a calendar weekday; Friday and Saturday are not school days.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Sun => Some(Self::Sunday),
            Weekday::Mon => Some(Self::Monday),
            Weekday::Tue => Some(Self::Tuesday),
            Weekday::Wed => Some(Self::Wednesday),
            Weekday::Thu => Some(Self::Thursday),
            Weekday::Fri | Weekday::Sat => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
        }
    }
}

impl Display for SchoolDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchoolDay {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" => Ok(Self::Thursday),
            _ => Err(ModelError::UnknownDay(value.to_string())),
        }
    }
}

/// Validated period index in `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Period(u8);

impl Period {
    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (1..=PERIODS_PER_DAY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::PeriodOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All periods in ascending order.
    pub fn all() -> impl Iterator<Item = Period> {
        (1..=PERIODS_PER_DAY).map(Period)
    }

    /// Period in progress at `hour` (7 → 1 … 13 → 7); none outside the day.
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            7..=13 => Some(Self((hour - 6) as u8)),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Period {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Period> for u8 {
    fn from(value: Period) -> Self {
        value.0
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cell of the weekly grid.
///
/// `class_name` is a free-text label, not a reference to a `ClassGroup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub id: SlotId,
    pub day: SchoolDay,
    pub period: Period,
    pub class_name: String,
    pub lesson_plan: Option<LessonPlan>,
}

impl ScheduleSlot {
    /// Creates an unassigned slot with no plan.
    pub fn empty(day: SchoolDay, period: Period) -> Self {
        Self {
            id: Uuid::new_v4(),
            day,
            period,
            class_name: String::new(),
            lesson_plan: None,
        }
    }

    /// True when the slot carries a plan with a non-empty topic.
    pub fn is_planned(&self) -> bool {
        self.lesson_plan
            .as_ref()
            .map(LessonPlan::has_topic)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{Period, SchoolDay};
    use chrono::Weekday;

    #[test]
    fn period_rejects_out_of_range_values() {
        assert!(Period::new(0).is_err());
        assert!(Period::new(8).is_err());
        assert_eq!(Period::new(7).unwrap().get(), 7);
    }

    #[test]
    fn hour_maps_to_period_only_inside_school_day() {
        assert_eq!(Period::from_hour(6), None);
        assert_eq!(Period::from_hour(7), Some(Period::new(1).unwrap()));
        assert_eq!(Period::from_hour(13), Some(Period::new(7).unwrap()));
        assert_eq!(Period::from_hour(14), None);
    }

    #[test]
    fn weekend_is_not_a_school_day() {
        assert_eq!(SchoolDay::from_weekday(Weekday::Fri), None);
        assert_eq!(SchoolDay::from_weekday(Weekday::Sat), None);
        assert_eq!(
            SchoolDay::from_weekday(Weekday::Sun),
            Some(SchoolDay::Sunday)
        );
    }

    #[test]
    fn period_serializes_as_plain_number() {
        let json = serde_json::to_value(Period::new(3).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!(3));
        assert!(serde_json::from_value::<Period>(serde_json::json!(9)).is_err());
    }
}
