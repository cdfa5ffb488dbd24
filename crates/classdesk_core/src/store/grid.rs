//! Fixed weekly schedule grid.
//!
//! # Responsibility
//! - Hold exactly one slot per `(day, period)` pair.
//! - Provide key lookup, wholesale slot replacement and the next-lesson query.
//!
//! # Invariants
//! - The grid holds `GRID_SLOT_COUNT` slots for its whole lifetime.
//! - Slots are stored day-major, period-minor.
//! - Only `class_name` and `lesson_plan` ever change; keys never move.

use super::{AppState, StoreError, StoreResult};
use crate::model::schedule::{Period, SchoolDay, ScheduleSlot, PERIODS_PER_DAY};
use chrono::{Datelike, NaiveDateTime, Timelike};
use log::debug;

/// Total slot count: five days times seven periods.
pub const GRID_SLOT_COUNT: usize = SchoolDay::ALL.len() * PERIODS_PER_DAY as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleGrid {
    slots: Vec<ScheduleSlot>,
}

impl Default for ScheduleGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleGrid {
    /// Builds the full grid of unassigned, unplanned slots.
    pub fn new() -> Self {
        let slots = SchoolDay::ALL
            .iter()
            .flat_map(|day| Period::all().map(move |period| ScheduleSlot::empty(*day, period)))
            .collect::<Vec<_>>();
        debug_assert_eq!(slots.len(), GRID_SLOT_COUNT);
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in grid order.
    pub fn slots(&self) -> impl Iterator<Item = &ScheduleSlot> {
        self.slots.iter()
    }

    /// Slots of one day in ascending period order.
    pub fn slots_for_day(&self, day: SchoolDay) -> impl Iterator<Item = &ScheduleSlot> {
        self.slots.iter().filter(move |slot| slot.day == day)
    }

    pub fn find_slot(&self, day: SchoolDay, period: Period) -> Option<&ScheduleSlot> {
        self.slots
            .get(Self::index_of(day, period))
            .filter(|slot| slot.day == day && slot.period == period)
    }

    /// Replaces the slot sharing `slot`'s `(day, period)` key.
    ///
    /// The whole record is stored as given, so callers start from the
    /// current slot and change only what they mean to change.
    pub fn update_slot(&mut self, slot: ScheduleSlot) -> StoreResult<()> {
        let index = Self::index_of(slot.day, slot.period);
        let target = self
            .slots
            .get_mut(index)
            .filter(|existing| existing.day == slot.day && existing.period == slot.period)
            .ok_or(StoreError::SlotNotFound {
                day: slot.day,
                period: slot.period,
            })?;
        debug!(
            "event=slot_update module=grid status=ok day={} period={} planned={}",
            slot.day,
            slot.period,
            slot.is_planned()
        );
        *target = slot;
        Ok(())
    }

    /// Number of slots whose plan carries a topic.
    pub fn planned_slot_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_planned()).count()
    }

    /// First planned slot today at or after the period in progress.
    ///
    /// Returns `None` on non-school days, outside teaching hours, or when no
    /// later slot today has a topic.
    pub fn next_lesson_today(&self, now: NaiveDateTime) -> Option<&ScheduleSlot> {
        let day = SchoolDay::from_weekday(now.weekday())?;
        let current = Period::from_hour(now.hour())?;
        self.slots_for_day(day)
            .find(|slot| slot.period >= current && slot.is_planned())
    }

    fn index_of(day: SchoolDay, period: Period) -> usize {
        let day_index = SchoolDay::ALL
            .iter()
            .position(|candidate| *candidate == day)
            .unwrap_or(0);
        day_index * PERIODS_PER_DAY as usize + usize::from(period.get() - 1)
    }
}

impl AppState {
    /// Slot lookup by `(day, period)`.
    pub fn find_slot(&self, day: SchoolDay, period: Period) -> Option<&ScheduleSlot> {
        self.grid().find_slot(day, period)
    }

    /// Wholesale slot replacement; the only schedule mutation path.
    pub fn update_slot(&mut self, slot: ScheduleSlot) -> StoreResult<()> {
        self.grid_mut().update_slot(slot)
    }

    pub fn next_lesson_today(&self, now: NaiveDateTime) -> Option<&ScheduleSlot> {
        self.grid().next_lesson_today(now)
    }
}
