//! Tier 3: Staleness
//!
//! The four checks, their order, and the restore-from-backup regression
//! where every timestamp moves backward.

use crate::test_utils::*;
use sift::{IndexSearchExt, Record, SearchOptions, SharedIndex, StaleReason, Timestamp};

fn future() -> Timestamp {
    Timestamp::from_micros(Timestamp::now().as_micros() + 3_600_000_000)
}

#[test]
fn tier3_fresh_build_is_current() {
    let records = sample_records();
    let index = index_of(&records);
    assert_eq!(index.staleness(&records), None);
    assert!(!index.needs_rebuild(&records));
}

#[test]
fn tier3_empty_index_and_empty_collection() {
    let index = index_of(&[]);
    assert!(!index.needs_rebuild(&[]));
    assert_eq!(index.staleness(&sample_records()), Some(StaleReason::CountDrift));
}

#[test]
fn tier3_added_record_is_count_drift() {
    let mut records = sample_records();
    let index = index_of(&records);
    records.push(Record::new("D", "New", "note"));
    assert_eq!(index.staleness(&records), Some(StaleReason::CountDrift));
}

#[test]
fn tier3_deleted_record_is_count_drift() {
    let mut records = sample_records();
    let index = index_of(&records);
    records.pop();
    assert_eq!(index.staleness(&records), Some(StaleReason::CountDrift));
}

#[test]
fn tier3_edit_after_build_is_newer_record() {
    let mut records = sample_records();
    let index = index_of(&records);
    records[1].updated_at = future();
    assert_eq!(index.staleness(&records), Some(StaleReason::NewerRecord));
}

#[test]
fn tier3_count_check_runs_before_timestamp_check() {
    let mut records = sample_records();
    let index = index_of(&records);
    records[0].updated_at = future();
    records.push(Record::new("D", "x", "y"));
    assert_eq!(index.staleness(&records), Some(StaleReason::CountDrift));
}

#[test]
fn tier3_future_dated_collection_converges() {
    // Records synced from a device whose clock runs ahead
    let mut records = sample_records();
    records[0].updated_at = future();
    records[2].updated_at = Timestamp::MAX;

    let shared = SharedIndex::new();
    assert_eq!(
        shared.write().rebuild_if_stale(&records),
        Some(StaleReason::CountDrift)
    );
    assert_eq!(shared.read().staleness(&records), None);
    assert_eq!(shared.write().rebuild_if_stale(&records), None);
    assert_eq!(shared.read().metadata().last_built_at, Timestamp::MAX);
}

#[test]
fn tier3_same_count_swap_is_id_set_changed() {
    let mut records = sample_records();
    let index = index_of(&records);
    records[2] = Record::new("Z", "Recipe", "chocolate cake");
    assert_eq!(index.staleness(&records), Some(StaleReason::IdSetChanged));
}

#[test]
fn tier3_duplicate_ids_are_id_set_changed() {
    let records = sample_records();
    let index = index_of(&records);
    let duplicated = vec![records[0].clone(), records[0].clone(), records[1].clone()];
    assert_eq!(index.staleness(&duplicated), Some(StaleReason::IdSetChanged));
}

#[test]
fn tier3_restore_from_backup_is_detected() {
    init_tracing();
    let records = vec![
        stamped("n1", "Shopping", "milk eggs bread", 2_000),
        stamped("n2", "Todo", "call the bank", 2_000),
    ];
    let shared = SharedIndex::new();
    shared.write().build_index(&records);

    // Backup: same ids, older timestamps, different text
    let backup = vec![
        stamped("n1", "Shopping", "flour sugar", 1_000),
        stamped("n2", "Todo", "call the bank", 1_000),
    ];
    assert_eq!(
        shared.read().staleness(&backup),
        Some(StaleReason::ContentChanged)
    );

    assert_eq!(
        shared.write().rebuild_if_stale(&backup),
        Some(StaleReason::ContentChanged)
    );
    let hits = shared.read().search("flour", &SearchOptions::default());
    assert_eq!(hit_ids(&hits), vec!["n1"]);
    assert!(shared
        .read()
        .search("milk", &SearchOptions::default())
        .is_empty());
}

#[test]
fn tier3_category_change_is_content_changed() {
    let records = vec![stamped("a", "t", "c", 1).with_category("work")];
    let index = index_of(&records);
    let moved = vec![stamped("a", "t", "c", 1).with_category("home")];
    assert_eq!(index.staleness(&moved), Some(StaleReason::ContentChanged));
}

#[test]
fn tier3_timestamp_only_change_is_current() {
    let records = vec![stamped("a", "t", "c", 5)];
    let index = index_of(&records);
    let touched = vec![stamped("a", "t", "c", 1)];
    assert_eq!(index.staleness(&touched), None);
}

#[test]
fn tier3_collection_order_does_not_matter() {
    let records = sample_records();
    let index = index_of(&records);
    let mut reversed = records.clone();
    reversed.reverse();
    assert!(!index.needs_rebuild(&reversed));
}

#[test]
fn tier3_rebuild_if_stale_is_noop_when_current() {
    let records = sample_records();
    let mut index = index_of(&records);
    let version = index.version();
    let built = index.metadata().last_built_at;

    assert_eq!(index.rebuild_if_stale(&records), None);
    assert_eq!(index.version(), version);
    assert_eq!(index.metadata().last_built_at, built);
}

#[test]
fn tier3_rebuild_clears_staleness() {
    let mut records = sample_records();
    let mut index = index_of(&records);
    records.push(Record::new("D", "x", "y"));

    assert_eq!(index.rebuild_if_stale(&records), Some(StaleReason::CountDrift));
    assert!(!index.needs_rebuild(&records));
    assert_index_consistent(&index);
}

#[test]
fn tier3_reset_shared_index() {
    let shared = SharedIndex::new();
    let records = sample_records();
    shared.write().build_index(&records);

    let handle = shared.clone();
    handle.reset();
    assert!(shared.read().is_empty());
    assert!(shared.read().needs_rebuild(&records));
}
