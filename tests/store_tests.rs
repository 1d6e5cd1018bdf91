mod common;

use common::{date, json_storage, setup_json_store, worked_example};
use finance_core::{
    core::FinanceStore,
    errors::{StorageError, StoreError},
    ledger::{
        default_categories, CategoryFilter, CategoryKind, FilterUpdate, NewCategory,
        NewTransaction, TransactionType, TypeFilter,
    },
    storage::{FinanceStorage, KeyValueStore},
};

/// Reads find nothing and every write or removal fails.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("disk full".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("disk full".into()))
    }
}

fn store_with_worked_example() -> FinanceStore {
    let mut store = FinanceStore::open(FinanceStorage::in_memory());
    for txn in worked_example() {
        store.add_transaction(
            NewTransaction::new(txn.amount, txn.transaction_type, txn.category_id, txn.date)
                .with_description(txn.description),
        );
    }
    store
}

#[test]
fn deleting_a_referenced_category_is_rejected_and_changes_nothing() {
    let mut store = store_with_worked_example();
    let transactions_before = store.transactions().to_vec();
    let categories_before = store.categories().to_vec();

    let err = store.delete_category("food").unwrap_err();
    match err {
        StoreError::CategoryInUse {
            category_id,
            transactions,
        } => {
            assert_eq!(category_id, "food");
            assert_eq!(transactions, 2);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(store.transactions(), transactions_before.as_slice());
    assert_eq!(store.categories(), categories_before.as_slice());
}

#[test]
fn unreferenced_category_can_be_deleted_once() {
    let mut store = store_with_worked_example();
    assert!(store.delete_category("travel").unwrap());
    assert!(store.category("travel").is_none());
    assert!(!store.delete_category("travel").unwrap());
    assert_eq!(store.categories().len(), default_categories().len() - 1);
}

#[test]
fn category_becomes_deletable_after_its_transactions_go() {
    let mut store = store_with_worked_example();
    let food_ids: Vec<String> = store
        .transactions()
        .iter()
        .filter(|txn| txn.category_id == "food")
        .map(|txn| txn.id.clone())
        .collect();
    for id in &food_ids {
        assert!(store.delete_transaction(id));
    }
    assert!(store.delete_category("food").unwrap());
}

#[test]
fn negative_amounts_are_stored_as_given() {
    let mut store = FinanceStore::open(FinanceStorage::in_memory());
    let txn = store.add_transaction(NewTransaction::expense(-5.0, "food", date(2024, 1, 1)));
    assert_eq!(txn.amount, -5.0);
    assert_eq!(store.transaction(&txn.id).map(|t| t.amount), Some(-5.0));
}

#[test]
fn added_transactions_get_distinct_ids() {
    let store = store_with_worked_example();
    let mut ids: Vec<&str> = store.transactions().iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn update_keeps_created_at_and_replaces_the_rest() {
    let mut store = store_with_worked_example();
    let original = store.transactions()[1].clone();

    let mut edited = original.clone();
    edited.amount = 55.0;
    edited.description = "Groceries".into();
    edited.date = date(2024, 1, 11);
    assert!(store.update_transaction(edited));

    let stored = store.transaction(&original.id).expect("still present");
    assert_eq!(stored.amount, 55.0);
    assert_eq!(stored.description, "Groceries");
    assert_eq!(stored.created_at, original.created_at);
    assert_eq!(store.transactions().len(), 3);
}

#[test]
fn updating_or_deleting_missing_records_is_a_no_op() {
    let mut store = store_with_worked_example();
    let before = store.transactions().to_vec();

    let mut ghost = before[0].clone();
    ghost.id = "missing".into();
    assert!(!store.update_transaction(ghost));
    assert!(!store.delete_transaction("missing"));
    assert_eq!(store.transactions(), before.as_slice());

    let mut ghost_category = store.categories()[0].clone();
    ghost_category.id = "missing".into();
    assert!(!store.update_category(ghost_category));
}

#[test]
fn custom_categories_can_be_added_and_renamed() {
    let mut store = FinanceStore::open(FinanceStorage::in_memory());
    let pets = store.add_category(NewCategory::new(
        "Pets",
        "#22C55E",
        "Heart",
        CategoryKind::Expense,
    ));
    assert_eq!(store.category(&pets.id), Some(&pets));

    let mut renamed = pets.clone();
    renamed.name = "Pet Care".into();
    assert!(store.update_category(renamed));
    assert_eq!(
        store.category(&pets.id).map(|c| c.name.as_str()),
        Some("Pet Care")
    );
}

#[test]
fn filter_updates_merge_and_reset() {
    let mut store = store_with_worked_example();
    store.set_filter(FilterUpdate::new().transaction_type(TypeFilter::Only(TransactionType::Expense)));
    store.set_filter(FilterUpdate::new().start_date(Some(date(2024, 2, 1))));

    let filtered = store.filtered_transactions();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].date, date(2024, 2, 2));

    store.set_filter(FilterUpdate::new().category(CategoryFilter::only("salary")));
    assert!(store.filtered_transactions().is_empty());

    store.reset_filter();
    assert!(store.filter_options().is_default());
    assert_eq!(store.filtered_transactions().len(), 3);
}

#[test]
fn json_backed_store_survives_reopen() {
    let (mut store, dir) = setup_json_store();
    let salary = store.add_transaction(
        NewTransaction::income(2500.0, "salary", date(2024, 3, 1)).with_description("March pay"),
    );
    let gifts = store.add_category(NewCategory::new(
        "Gifts",
        "#F43F5E",
        "Heart",
        CategoryKind::Expense,
    ));
    assert!(store.delete_category("travel").unwrap());
    drop(store);

    let reopened = FinanceStore::open(json_storage(&dir));
    assert_eq!(reopened.transactions(), std::slice::from_ref(&salary));
    assert_eq!(reopened.category(&gifts.id), Some(&gifts));
    assert!(reopened.category("travel").is_none());
}

#[test]
fn reset_returns_to_defaults_and_clears_disk() {
    let (mut store, dir) = setup_json_store();
    store.add_transaction(NewTransaction::expense(10.0, "food", date(2024, 1, 1)));
    store.set_filter(FilterUpdate::new().category(CategoryFilter::only("food")));

    store.reset();
    assert!(store.transactions().is_empty());
    assert_eq!(store.categories(), default_categories().as_slice());
    assert!(store.filter_options().is_default());

    let reopened = FinanceStore::open(json_storage(&dir));
    assert!(reopened.transactions().is_empty());
    assert_eq!(reopened.categories(), default_categories().as_slice());
}

#[test]
fn non_finite_amounts_do_not_wipe_the_ledger_on_reopen() {
    let (mut store, dir) = setup_json_store();
    store.add_transaction(NewTransaction::income(100.0, "salary", date(2024, 1, 5)));
    store.add_transaction(NewTransaction::expense(40.0, "food", date(2024, 1, 10)));
    let huge =
        store.add_transaction(NewTransaction::expense(f64::INFINITY, "food", date(2024, 1, 11)));
    let before = store.transactions().to_vec();
    drop(store);

    let reopened = FinanceStore::open(json_storage(&dir));
    assert_eq!(reopened.transactions(), before.as_slice());
    assert_eq!(
        reopened.transaction(&huge.id).map(|t| t.amount),
        Some(f64::INFINITY)
    );
}

#[test]
fn failed_writes_leave_memory_authoritative() {
    let mut store = FinanceStore::open(FinanceStorage::new(Box::new(ReadOnlyStore)));

    let lunch = store.add_transaction(NewTransaction::expense(12.0, "food", date(2024, 4, 2)));
    let rent = store.add_transaction(NewTransaction::expense(900.0, "housing", date(2024, 4, 1)));
    assert_eq!(store.transactions().len(), 2);

    let mut edited = lunch.clone();
    edited.amount = 15.0;
    assert!(store.update_transaction(edited));
    assert_eq!(store.transaction(&lunch.id).map(|t| t.amount), Some(15.0));

    assert!(store.delete_transaction(&rent.id));
    assert!(store.transaction(&rent.id).is_none());

    let pets = store.add_category(NewCategory::new(
        "Pets",
        "#22C55E",
        "Heart",
        CategoryKind::Expense,
    ));
    let mut renamed = pets.clone();
    renamed.name = "Pet Care".into();
    assert!(store.update_category(renamed));
    assert_eq!(
        store.category(&pets.id).map(|c| c.name.as_str()),
        Some("Pet Care")
    );
    assert!(store.delete_category("travel").unwrap());
    assert!(store.category("travel").is_none());
    assert_eq!(store.categories().len(), default_categories().len());

    store.reset();
    assert!(store.transactions().is_empty());
    assert_eq!(store.categories(), default_categories().as_slice());
}
