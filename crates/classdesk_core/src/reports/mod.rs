//! Derived reports over classes and the schedule grid.
//!
//! # Responsibility
//! - Fold roster attendance and grid planning into dashboard figures.
//! - Evaluate alert rules in a fixed order.
//!
//! # Invariants
//! - Every figure is a pure function of current state; nothing is cached.
//! - Percentages use half-up rounding and are 0 for empty denominators.

mod alerts;
mod summary;

pub use alerts::{alerts, Alert, AlertKind, AlertSeverity};
pub use summary::{
    absentees, attendance_entry_count, attendance_rate, planning_progress, total_students,
    Absentee, ReportSummary, ABSENTEEISM_ALERT_THRESHOLD, PLANNING_ALERT_THRESHOLD,
};

/// `round(100 * numerator / denominator)` with halves rounded up.
pub(crate) fn percent(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let scaled = (200 * numerator + denominator) / (2 * denominator);
    scaled.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::percent;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(17, 35), 49);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(3, 4), 75);
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(35, 35), 100);
    }
}
