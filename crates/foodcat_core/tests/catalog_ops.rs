use foodcat_core::{
    CsvFoodStore, FoodRecord, FoodService, FoodStore, FoodTable, MutationError, QueryStats,
    UpdateRequest,
};

fn service_in(dir: &tempfile::TempDir) -> FoodService<CsvFoodStore> {
    FoodService::new(CsvFoodStore::new(dir.path().join("data.csv")))
}

fn seed(service: &FoodService<CsvFoodStore>, records: Vec<FoodRecord>) {
    service
        .store()
        .save(&FoodTable::with_records(records))
        .unwrap();
}

fn update(food_name: &str) -> UpdateRequest {
    UpdateRequest {
        food_name: Some(food_name.to_string()),
        ..UpdateRequest::default()
    }
}

#[test]
fn list_on_missing_store_is_empty_with_zero_stats() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let result = service.list().unwrap();
    assert!(result.data.is_empty());
    assert_eq!(result.stats, QueryStats::default());
    assert!(dir.path().join("data.csv").exists());
}

#[test]
fn update_sets_new_name_and_keeps_deleted_flag() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);
    seed(&service, vec![FoodRecord::named("Apple")]);

    let mut request = update("Apple");
    request.new_name = Some("Red Apple".to_string());
    let updated = service.update(&request).unwrap();

    assert_eq!(updated.new_name.as_deref(), Some("Red Apple"));
    assert!(!updated.deleted);

    let persisted = service.store().load().unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted.records[0], updated);
}

#[test]
fn delete_moves_row_after_active_rows() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);
    seed(
        &service,
        vec![FoodRecord::named("Apple"), FoodRecord::named("Pear")],
    );

    let deleted = service.delete(Some("Apple")).unwrap();
    assert!(deleted.deleted);

    let listed = service.list().unwrap();
    let names: Vec<_> = listed
        .data
        .iter()
        .map(|r| r.food_name.as_deref().unwrap())
        .collect();
    assert_eq!(names, vec!["Pear", "Apple"]);
    assert_eq!(listed.stats.active, 1);
    assert_eq!(listed.stats.deleted, 1);
}

#[test]
fn mutations_only_touch_the_first_matching_row() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);
    let mut second = FoodRecord::named("Egg");
    second.kcal = Some(155.0);
    seed(&service, vec![FoodRecord::named("Egg"), second.clone()]);

    service.delete(Some("Egg")).unwrap();
    let mut request = update("Egg");
    request.new_name = Some("Boiled egg".to_string());
    service.update(&request).unwrap();

    let table = service.store().load().unwrap();
    assert!(table.records[0].deleted);
    assert_eq!(table.records[0].new_name.as_deref(), Some("Boiled egg"));
    assert_eq!(table.records[1], second);
}

#[test]
fn restore_reactivates_deleted_row() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);
    seed(&service, vec![FoodRecord::named("Apple")]);
    service.delete(Some("Apple")).unwrap();

    let mut request = update("Apple");
    request.restore = true;
    let restored = service.update(&request).unwrap();

    assert!(!restored.deleted);
    assert_eq!(service.list().unwrap().stats.active, 1);
}

#[test]
fn unknown_food_name_is_not_found_and_table_is_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);
    seed(&service, vec![FoodRecord::named("Apple")]);
    let before = service.store().load().unwrap();

    let err = service.update(&update("Banana")).unwrap_err();
    assert!(matches!(err, MutationError::NotFound(name) if name == "Banana"));
    assert_eq!(service.store().load().unwrap(), before);
}

#[test]
fn missing_food_name_is_rejected_and_table_is_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);
    seed(&service, vec![FoodRecord::named("Apple")]);
    let before = service.store().load().unwrap();

    assert!(matches!(
        service.delete(None),
        Err(MutationError::MissingFoodName)
    ));
    assert_eq!(service.store().load().unwrap(), before);
}

#[test]
fn search_matches_substring_ignoring_case() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);
    seed(
        &service,
        vec![
            FoodRecord::named("bacon"),
            FoodRecord::named("scrambled eggs"),
        ],
    );

    let result = service.search("EGG").unwrap();
    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].food_name.as_deref(), Some("scrambled eggs"));
    assert_eq!(result.stats.results, Some(1));
    assert_eq!(result.stats.total, 2);

    let blank = service.search("").unwrap();
    assert_eq!(blank, service.list().unwrap());
}
