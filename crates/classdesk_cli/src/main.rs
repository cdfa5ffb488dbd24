//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `classdesk_core` linkage.
//! - Print the dashboard figures of the demo session deterministically.

use classdesk_core::{sample_state, ReportSummary, TaskService};

fn main() {
    println!("classdesk_core ping={}", classdesk_core::ping());
    println!("classdesk_core version={}", classdesk_core::core_version());

    let mut state = sample_state();
    let summary = ReportSummary::compute(&state);
    println!(
        "sample classes={} students={} attendance_rate={}% planning_progress={}%",
        summary.class_count,
        summary.total_students,
        summary.attendance_rate,
        summary.planning_progress
    );
    for alert in &summary.alerts {
        println!(
            "alert kind={} severity={} message={}",
            alert.kind.label(),
            alert.severity.as_str(),
            alert.message
        );
    }
    for task in TaskService::new(&mut state).sorted_tasks() {
        println!(
            "task priority={} completed={} text={}",
            task.priority.as_str(),
            task.completed,
            task.text
        );
    }
}
