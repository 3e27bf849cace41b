use taskpad_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn new_sets_defaults_and_trims_title() {
    let task = Task::new(Uuid::new_v4(), "  Buy milk  ").unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "Buy milk");
    assert!(!task.completed);
    assert!(task.created_at_ms > 0);
}

#[test]
fn new_rejects_blank_titles() {
    let empty = Task::new(Uuid::new_v4(), "").unwrap_err();
    assert_eq!(empty, TaskValidationError::EmptyTitle);

    let blank = Task::new(Uuid::new_v4(), "   ").unwrap_err();
    assert_eq!(blank, TaskValidationError::EmptyTitle);
}

#[test]
fn new_rejects_nil_id() {
    let err = Task::new(Uuid::nil(), "valid title").unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn validate_rejects_invalid_persisted_shapes() {
    let mut task = Task::new(Uuid::new_v4(), "ok").unwrap();
    assert!(task.validate().is_ok());

    task.title = "   ".to_string();
    assert_eq!(task.validate().unwrap_err(), TaskValidationError::EmptyTitle);

    task.title = "ok again".to_string();
    task.id = Uuid::nil();
    assert_eq!(task.validate().unwrap_err(), TaskValidationError::NilId);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::new(task_id, "Pay rent").unwrap();
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["title"], "Pay rent");
    assert_eq!(json["completed"], true);
    assert_eq!(json["created_at_ms"], task.created_at_ms);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
