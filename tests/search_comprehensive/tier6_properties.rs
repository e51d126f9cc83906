//! Tier 6: Properties
//!
//! Randomized record sets and queries drawn from a small vocabulary so that
//! postings overlap heavily.

use crate::test_utils::*;
use proptest::prelude::*;
use sift::{IndexSearchExt, Record, SearchOptions, Timestamp};

const WORDS: &[&str] = &[
    "alpha", "alps", "beta", "bet", "gamma", "game", "delta", "the", "and", "rust", "rusty",
    "東京", "мир",
];

const CATEGORIES: &[&str] = &["", "work", "home"];

const QUERY_WORDS: &[&str] = &["al", "alpha", "be", "gam", "rust", "the", "東", "zzz"];

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..6).prop_map(|w| w.join(" "))
}

/// Past, near-future and far-future timestamps, including the maximum
fn timestamp() -> impl Strategy<Value = Timestamp> {
    let now = Timestamp::now().as_micros();
    prop_oneof![
        (0u64..1_000).prop_map(Timestamp::from_secs),
        (0..=now).prop_map(Timestamp::from_micros),
        (now..=u64::MAX).prop_map(Timestamp::from_micros),
        Just(Timestamp::MAX),
    ]
}

fn record(id: usize) -> impl Strategy<Value = Record> {
    (text(), text(), prop::sample::select(CATEGORIES), timestamp()).prop_map(
        move |(title, content, category, updated_at)| {
            Record::new(format!("r{id}"), title, content)
                .with_category(category)
                .with_updated_at(updated_at)
        },
    )
}

fn records() -> impl Strategy<Value = Vec<Record>> {
    (0usize..24).prop_flat_map(|n| (0..n).map(record).collect::<Vec<_>>())
}

fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(QUERY_WORDS), 1..4).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tier6_build_counts_records(records in records()) {
        let index = index_of(&records);
        prop_assert_eq!(index.metadata().record_count, records.len());
        assert_index_consistent(&index);
    }

    #[test]
    fn tier6_fresh_build_is_never_stale(records in records()) {
        let mut index = index_of(&records);
        prop_assert_eq!(index.staleness(&records), None);
        prop_assert_eq!(index.rebuild_if_stale(&records), None);
    }

    #[test]
    fn tier6_relevance_bounded_and_sorted(records in records(), q in query()) {
        let index = index_of(&records);
        let hits = index.search(&q, &SearchOptions::default());
        prop_assert!(hits.len() <= 50);
        for hit in &hits {
            prop_assert!((0.0..=1.0).contains(&hit.relevance));
            prop_assert!(!hit.matched_terms.is_empty());
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn tier6_removed_record_never_returned(records in records(), q in query()) {
        prop_assume!(!records.is_empty());
        let mut index = index_of(&records);
        let victim = records[0].id.clone();
        index.remove_record(&victim);

        assert_index_consistent(&index);
        let hits = index.search(&q, &SearchOptions::default());
        prop_assert!(hits.iter().all(|h| h.record.id != victim));
    }

    #[test]
    fn tier6_category_filter_holds(records in records(), q in query()) {
        let index = index_of(&records);
        let options = SearchOptions::default().with_category("work");
        for hit in index.search(&q, &options) {
            prop_assert_eq!(hit.record.category.as_str(), "work");
        }
    }
}
