use classdesk_core::reports::planning_progress;
use classdesk_core::{
    AppState, LessonPlan, LessonPlanForm, Period, PlannerService, SchoolDay, GRID_SLOT_COUNT,
};
use std::collections::HashSet;

fn plan_slots(state: &mut AppState, count: usize) {
    let keys: Vec<_> = state
        .grid()
        .slots()
        .take(count)
        .map(|slot| (slot.day, slot.period))
        .collect();
    for (day, period) in keys {
        let mut slot = state.find_slot(day, period).unwrap().clone();
        slot.lesson_plan = Some(LessonPlan::new("History", format!("Topic {period}")));
        state.update_slot(slot).unwrap();
    }
}

#[test]
fn grid_keeps_thirty_five_unique_slots_through_updates() {
    let mut state = AppState::new();
    let original_ids: HashSet<_> = state.grid().slots().map(|slot| slot.id).collect();

    plan_slots(&mut state, 35);
    let mut planner = PlannerService::new(&mut state);
    for day in SchoolDay::ALL {
        for period in Period::all() {
            planner.assign_class(day, period, "7A").unwrap();
            planner.clear_lesson_plan(day, period).unwrap();
        }
    }

    assert_eq!(state.grid().len(), GRID_SLOT_COUNT);
    let keys: HashSet<_> = state
        .grid()
        .slots()
        .map(|slot| (slot.day, slot.period))
        .collect();
    assert_eq!(keys.len(), 35);
    let ids: HashSet<_> = state.grid().slots().map(|slot| slot.id).collect();
    assert_eq!(ids, original_ids);
}

#[test]
fn fresh_grid_slots_are_empty() {
    let state = AppState::new();
    for slot in state.grid().slots() {
        assert!(slot.class_name.is_empty());
        assert!(slot.lesson_plan.is_none());
    }
}

#[test]
fn planning_progress_covers_empty_partial_and_full() {
    let mut state = AppState::new();
    assert_eq!(planning_progress(state.grid()), 0);

    plan_slots(&mut state, 17);
    assert_eq!(planning_progress(state.grid()), 49);

    plan_slots(&mut state, 35);
    assert_eq!(planning_progress(state.grid()), 100);
}

#[test]
fn plan_without_topic_does_not_count() {
    let mut state = AppState::new();
    let day = SchoolDay::Tuesday;
    let period = Period::new(2).unwrap();
    let mut slot = state.find_slot(day, period).unwrap().clone();
    slot.lesson_plan = Some(LessonPlan::new("Art", ""));
    state.update_slot(slot).unwrap();

    assert_eq!(state.grid().planned_slot_count(), 0);
}

#[test]
fn save_lesson_plan_preserves_identity_and_generated_content() {
    let mut state = AppState::new();
    let day = SchoolDay::Wednesday;
    let period = Period::new(5).unwrap();

    let mut slot = state.find_slot(day, period).unwrap().clone();
    let mut drafted = LessonPlan::new("Biology", "Cells");
    drafted.content = "Microscope walkthrough".to_string();
    drafted.is_generated = true;
    let plan_id = drafted.id;
    slot.lesson_plan = Some(drafted);
    state.update_slot(slot).unwrap();

    let form = LessonPlanForm {
        subject: "Biology".to_string(),
        topic: "Cell structure".to_string(),
        class_name: "8B".to_string(),
        objectives_text: "Label a cell\n\nCompare plant and animal cells\n".to_string(),
        materials: "Slides".to_string(),
        homework: "Worksheet 4".to_string(),
    };
    let saved = PlannerService::new(&mut state)
        .save_lesson_plan(day, period, &form)
        .unwrap();

    let plan = saved.lesson_plan.expect("plan saved");
    assert_eq!(plan.id, plan_id);
    assert!(plan.is_generated);
    assert_eq!(plan.content, "Microscope walkthrough");
    assert_eq!(plan.topic, "Cell structure");
    assert_eq!(plan.objectives.len(), 2);
    assert_eq!(saved.class_name, "8B");
    assert_eq!(state.find_slot(day, period).unwrap().class_name, "8B");
}

#[test]
fn whitespace_only_topic_is_saved_as_unplanned() {
    let mut state = AppState::new();
    let day = SchoolDay::Sunday;
    let period = Period::new(1).unwrap();
    let form = LessonPlanForm {
        subject: "  Music ".to_string(),
        topic: "   ".to_string(),
        class_name: "3A".to_string(),
        objectives_text: "Sing\n   \nClap".to_string(),
        materials: String::new(),
        homework: String::new(),
    };

    let saved = PlannerService::new(&mut state)
        .save_lesson_plan(day, period, &form)
        .unwrap();

    let plan = saved.lesson_plan.expect("plan saved");
    assert_eq!(plan.subject, "Music");
    assert!(plan.topic.is_empty());
    assert_eq!(plan.objectives, vec!["Sing".to_string(), "Clap".to_string()]);
    assert_eq!(planning_progress(state.grid()), 0);
}
