use chrono::NaiveDate;
use classdesk_core::{AppState, StoreError, TaskPriority, TaskService, TaskServiceError};
use uuid::Uuid;

#[test]
fn sorted_tasks_put_open_high_priority_first() {
    let mut state = AppState::new();
    let mut service = TaskService::new(&mut state);
    let low = service.create_task("Tidy shelf", TaskPriority::Low, None).unwrap();
    let high = service.create_task("Grade exams", TaskPriority::High, None).unwrap();
    let medium = service
        .create_task(
            "Call parents",
            TaskPriority::Medium,
            NaiveDate::from_ymd_opt(2026, 6, 1),
        )
        .unwrap();
    let done_high = service.create_task("Print sheets", TaskPriority::High, None).unwrap();
    let second_medium = service.create_task("Order chalk", TaskPriority::Medium, None).unwrap();
    service.toggle_task(done_high.id).unwrap();

    let order: Vec<_> = service.sorted_tasks().into_iter().map(|task| task.id).collect();
    assert_eq!(
        order,
        vec![high.id, medium.id, second_medium.id, low.id, done_high.id]
    );
}

#[test]
fn sorting_does_not_reorder_stored_tasks() {
    let mut state = AppState::new();
    let mut service = TaskService::new(&mut state);
    let low = service.create_task("Low", TaskPriority::Low, None).unwrap();
    service.create_task("High", TaskPriority::High, None).unwrap();
    let _ = service.sorted_tasks();

    assert_eq!(state.tasks()[0].id, low.id);
}

#[test]
fn toggle_flips_back_and_forth() {
    let mut state = AppState::new();
    let task = state.add_task("Plan trip", TaskPriority::Medium, None);

    assert!(state.toggle_task(task.id).unwrap());
    assert!(!state.toggle_task(task.id).unwrap());
    assert!(!state.task(task.id).unwrap().completed);
}

#[test]
fn missing_task_ids_are_reported_and_state_kept() {
    let mut state = AppState::new();
    state.add_task("Keep me", TaskPriority::Low, None);
    let missing = Uuid::new_v4();

    assert!(matches!(
        state.toggle_task(missing),
        Err(StoreError::TaskNotFound(id)) if id == missing
    ));
    assert!(matches!(
        TaskService::new(&mut state).remove_task(missing),
        Err(TaskServiceError::Store(StoreError::TaskNotFound(_)))
    ));
    assert_eq!(state.tasks().len(), 1);
}

#[test]
fn blank_task_text_is_rejected() {
    let mut state = AppState::new();
    let err = TaskService::new(&mut state)
        .create_task("   ", TaskPriority::High, None)
        .unwrap_err();

    assert!(matches!(err, TaskServiceError::BlankText));
    assert!(state.tasks().is_empty());
}

#[test]
fn delete_removes_only_the_target() {
    let mut state = AppState::new();
    let first = state.add_task("First", TaskPriority::Low, None);
    let second = state.add_task("Second", TaskPriority::Low, None);

    state.delete_task(first.id).unwrap();

    assert_eq!(state.tasks().len(), 1);
    assert_eq!(state.tasks()[0].id, second.id);
}
