use classdesk_core::{
    AppState, DraftError, DraftInput, DraftRequest, DraftedContent, LessonPlanDrafter,
    LessonPlanForm, Period, PlannerService, PlannerServiceError, SchoolDay,
};
use std::sync::Mutex;

/// Returns a fixed body and records every request it sees.
struct CannedDrafter {
    seen: Mutex<Vec<DraftRequest>>,
}

impl CannedDrafter {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<DraftRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl LessonPlanDrafter for CannedDrafter {
    fn draft(&self, request: &DraftRequest) -> Result<DraftedContent, DraftError> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(canned_content())
    }
}

struct FailingDrafter;

impl LessonPlanDrafter for FailingDrafter {
    fn draft(&self, _request: &DraftRequest) -> Result<DraftedContent, DraftError> {
        Err(DraftError::Status {
            code: 503,
            body: "overloaded".to_string(),
        })
    }
}

fn canned_content() -> DraftedContent {
    DraftedContent {
        objectives: vec!["Explain photosynthesis".to_string()],
        materials: "Leaves, iodine".to_string(),
        content: "Warm-up, experiment, discussion".to_string(),
        homework: "Diagram the process".to_string(),
    }
}

fn slot_key() -> (SchoolDay, Period) {
    (SchoolDay::Monday, Period::new(3).unwrap())
}

fn input(class_name: &str) -> DraftInput {
    DraftInput {
        subject: " Science ".to_string(),
        topic: "Photosynthesis".to_string(),
        class_name: class_name.to_string(),
        notes: "Include a lab".to_string(),
    }
}

fn seeded_state() -> AppState {
    let mut state = AppState::new();
    let (day, period) = slot_key();
    PlannerService::new(&mut state)
        .save_lesson_plan(
            day,
            period,
            &LessonPlanForm {
                subject: "Science".to_string(),
                topic: "Plants".to_string(),
                class_name: "6C".to_string(),
                objectives_text: "Name plant parts".to_string(),
                materials: String::new(),
                homework: String::new(),
            },
        )
        .unwrap();
    state
}

fn slot_json(state: &AppState) -> String {
    let (day, period) = slot_key();
    serde_json::to_string(state.find_slot(day, period).unwrap()).unwrap()
}

#[test]
fn successful_draft_replaces_plan_and_class_label() {
    let mut state = seeded_state();
    let (day, period) = slot_key();
    let drafter = CannedDrafter::new();

    let slot = PlannerService::new(&mut state)
        .draft_lesson_plan(&drafter, day, period, &input("6D"))
        .unwrap();

    assert_eq!(slot.class_name, "6D");
    let plan = slot.lesson_plan.expect("drafted plan");
    assert!(plan.is_generated);
    assert_eq!(plan.subject, "Science");
    assert_eq!(plan.topic, "Photosynthesis");
    assert_eq!(plan.objectives, vec!["Explain photosynthesis".to_string()]);
    assert_eq!(
        state.find_slot(day, period).unwrap().lesson_plan.as_ref().unwrap().content,
        "Warm-up, experiment, discussion"
    );

    let requests = drafter.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].grade_label, "6D");
    assert_eq!(requests[0].notes, "Include a lab");
}

#[test]
fn blank_class_label_drafts_for_general_grade() {
    let mut state = AppState::new();
    let (day, period) = slot_key();
    let drafter = CannedDrafter::new();

    PlannerService::new(&mut state)
        .draft_lesson_plan(&drafter, day, period, &input("  "))
        .unwrap();

    assert_eq!(drafter.requests()[0].grade_label, "General");
    assert_eq!(state.find_slot(day, period).unwrap().class_name, "");
}

#[test]
fn failed_draft_leaves_slot_untouched() {
    let mut state = seeded_state();
    let (day, period) = slot_key();
    let before = slot_json(&state);

    let err = PlannerService::new(&mut state)
        .draft_lesson_plan(&FailingDrafter, day, period, &input("6D"))
        .unwrap_err();

    assert!(matches!(
        err,
        PlannerServiceError::Draft(DraftError::Status { code: 503, .. })
    ));
    assert_eq!(slot_json(&state), before);
}

#[test]
fn missing_subject_or_topic_never_calls_drafter() {
    let mut state = seeded_state();
    let (day, period) = slot_key();
    let before = slot_json(&state);
    let drafter = CannedDrafter::new();

    let mut blank_topic = input("6D");
    blank_topic.topic = "   ".to_string();
    let err = PlannerService::new(&mut state)
        .draft_lesson_plan(&drafter, day, period, &blank_topic)
        .unwrap_err();

    assert!(matches!(
        err,
        PlannerServiceError::Draft(DraftError::MissingSubjectOrTopic)
    ));
    assert!(drafter.requests().is_empty());
    assert_eq!(slot_json(&state), before);
}

#[test]
fn superseded_draft_is_discarded() {
    let mut state = seeded_state();
    let (day, period) = slot_key();

    let mut planner = PlannerService::new(&mut state);
    let stale = planner.begin_draft(day, period, &input("6D")).unwrap();
    let fresh = planner.begin_draft(day, period, &input("6E")).unwrap();

    let err = planner
        .complete_draft(&stale, Ok(canned_content()))
        .unwrap_err();
    assert!(matches!(err, PlannerServiceError::DraftSuperseded(ticket) if ticket == stale.ticket));

    let slot = planner.complete_draft(&fresh, Ok(canned_content())).unwrap();
    assert_eq!(slot.class_name, "6E");
    assert!(slot.lesson_plan.unwrap().is_generated);
}

#[test]
fn late_stale_result_cannot_overwrite_newer_draft() {
    let mut state = AppState::new();
    let (day, period) = slot_key();

    let mut planner = PlannerService::new(&mut state);
    let stale = planner.begin_draft(day, period, &input("6D")).unwrap();
    let fresh = planner.begin_draft(day, period, &input("6E")).unwrap();
    planner.complete_draft(&fresh, Ok(canned_content())).unwrap();

    let mut other = canned_content();
    other.content = "stale body".to_string();
    assert!(planner.complete_draft(&stale, Ok(other)).is_err());

    let plan = state.find_slot(day, period).unwrap().lesson_plan.clone().unwrap();
    assert_eq!(plan.content, "Warm-up, experiment, discussion");
    assert_eq!(state.find_slot(day, period).unwrap().class_name, "6E");
}

#[test]
fn drafts_on_different_slots_do_not_interfere() {
    let mut state = AppState::new();
    let (day, period) = slot_key();
    let other_period = Period::new(4).unwrap();

    let mut planner = PlannerService::new(&mut state);
    let first = planner.begin_draft(day, period, &input("6D")).unwrap();
    let second = planner.begin_draft(day, other_period, &input("6E")).unwrap();

    planner.complete_draft(&first, Ok(canned_content())).unwrap();
    planner.complete_draft(&second, Ok(canned_content())).unwrap();

    assert_eq!(state.grid().planned_slot_count(), 2);
}
