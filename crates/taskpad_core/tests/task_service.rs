use taskpad_core::db::open_db_in_memory;
use taskpad_core::{
    SearchQuery, SqliteTaskStorage, StoreError, TaskFilter, TaskService, TaskStorage, TaskStore,
};
use uuid::Uuid;

#[test]
fn hydrate_loads_persisted_tasks() {
    let conn = open_db_in_memory().unwrap();

    let mut seed = TaskService::new(SqliteTaskStorage::new(&conn));
    seed.create_task("persisted earlier").unwrap();

    let mut service = TaskService::new(SqliteTaskStorage::new(&conn));
    assert!(service.list_tasks().is_empty());
    service.hydrate();

    let tasks = service.list_tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "persisted earlier");
}

#[test]
fn mutations_persist_immediately() {
    let conn = open_db_in_memory().unwrap();
    let verify = SqliteTaskStorage::new(&conn);
    let mut service = TaskService::new(SqliteTaskStorage::new(&conn));

    let task = service.create_task("write me down").unwrap();
    assert_eq!(verify.load().len(), 1);

    service.toggle_task(task.id).unwrap();
    assert!(verify.load()[0].completed);

    service.rename_task(task.id, "written down").unwrap();
    assert_eq!(verify.load()[0].title, "written down");

    service.delete_task(task.id).unwrap();
    assert!(verify.load().is_empty());
}

#[test]
fn failed_operations_do_not_touch_persisted_state() {
    let conn = open_db_in_memory().unwrap();
    let verify = SqliteTaskStorage::new(&conn);
    let mut service = TaskService::new(SqliteTaskStorage::new(&conn));

    service.create_task("stable").unwrap();
    let before = verify.load();

    assert!(matches!(
        service.create_task("   "),
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        service.toggle_task(Uuid::new_v4()),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_task(Uuid::new_v4()),
        Err(StoreError::NotFound(_))
    ));

    assert_eq!(verify.load(), before);
    assert_eq!(service.list_tasks(), before);
}

#[test]
fn clear_tasks_persists_the_empty_state() {
    let conn = open_db_in_memory().unwrap();
    let verify = SqliteTaskStorage::new(&conn);
    let mut service = TaskService::new(SqliteTaskStorage::new(&conn));

    service.create_task("one").unwrap();
    service.create_task("two").unwrap();
    service.clear_tasks();

    assert!(service.list_tasks().is_empty());
    assert!(verify.load().is_empty());
}

#[test]
fn filtered_listings_and_counts_reflect_completion() {
    let conn = open_db_in_memory().unwrap();
    let mut service = TaskService::new(SqliteTaskStorage::new(&conn));

    service.create_task("Buy milk").unwrap();
    let rent = service.create_task("Pay rent").unwrap();
    service.toggle_task(rent.id).unwrap();

    let active: Vec<String> = service
        .list_filtered(TaskFilter::Active)
        .into_iter()
        .map(|task| task.title)
        .collect();
    assert_eq!(active, vec!["Buy milk"]);

    let completed: Vec<String> = service
        .list_filtered(TaskFilter::Completed)
        .into_iter()
        .map(|task| task.title)
        .collect();
    assert_eq!(completed, vec!["Pay rent"]);

    let counts = service.counts();
    assert_eq!(counts.active, 1);
    assert_eq!(counts.completed, 1);
}

#[test]
fn with_store_allows_deterministic_ids() {
    let conn = open_db_in_memory().unwrap();
    let store = TaskStore::with_id_generator(|| Uuid::from_u128(7));
    let mut service = TaskService::with_store(store, SqliteTaskStorage::new(&conn));

    let task = service.create_task("pinned id").unwrap();
    assert_eq!(task.id, Uuid::from_u128(7));
}

#[test]
fn search_goes_through_the_service() {
    let conn = open_db_in_memory().unwrap();
    let mut service = TaskService::new(SqliteTaskStorage::new(&conn));

    service.create_task("Buy milk").unwrap();
    let bread = service.create_task("Buy bread").unwrap();
    service.create_task("Pay rent").unwrap();
    service.toggle_task(bread.id).unwrap();

    let hits = service.search(&SearchQuery::new("buy"));
    assert_eq!(hits.len(), 2);

    let active_hits = service.search(&SearchQuery {
        text: "buy".to_string(),
        filter: TaskFilter::Active,
    });
    assert_eq!(active_hits.len(), 1);
    assert_eq!(active_hits[0].title, "Buy milk");
}
