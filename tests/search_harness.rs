#![allow(unused)]
//! Search integration harness.
//!
//! # What this covers
//!
//! The substring filter and `SearchSession::run_now` over a realistic
//! catalog: field coverage, case folding, the 10-result cap, index order,
//! the minimum-length gate, and determinism across repeated searches.
//!
//! # What this does NOT cover
//!
//! - Debounce timing (see `debounce_harness`)
//! - Loading the index (see `loader_harness`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;

use proptest::prelude::*;
use rstest::rstest;
use vitrine_core::{
    config::SearchConfig,
    render::{render_text, PanelContent, TextRenderer},
    search, Record, SearchIndex, SearchSession, MAX_RESULTS,
};

fn session(records: Vec<Record>) -> SearchSession {
    SearchSession::new(loaded_index(records), &SearchConfig::default())
}

// ---------------------------------------------------------------------------
// Field coverage
// ---------------------------------------------------------------------------

#[rstest]
#[case::title("jersey", &["CE-001"])]
#[case::description("major", &["CE-001"])]
#[case::team("fnatic", &["CE-001"])]
#[case::player("olof", &["CE-001"])]
#[case::steward("kettle", &["CE-002"])]
#[case::team_via_organization_alias("og", &["CE-003"])]
#[case::esport_via_game_alias("sc2", &["T-001"])]
#[case::id("p-00", &["P-001"])]
#[case::several("ce-00", &["CE-001", "CE-002", "CE-003"])]
#[case::nothing("zzz", &[])]
#[tokio::test]
async fn sample_catalog_queries(#[case] query: &str, #[case] expected: &[&str]) {
    let mut s = session(sample_records());
    let hits = s.run_now(query);
    let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
    pretty_assertions::assert_eq!(ids, expected);
}

#[tokio::test]
async fn url_is_not_searched() {
    let mut s = session(sample_records());
    // Every url contains "/record/" but no searchable field does
    assert!(s.run_now("record/").is_empty());
}

#[tokio::test]
async fn jersey_example_end_to_end() {
    let records: Vec<Record> = serde_json::from_str(JERSEY_INDEX).unwrap();
    let mut s = session(records);

    assert_ids!(s.run_now("blue"), ["R1"]);

    assert!(s.run_now("xyz").is_empty());
    assert_eq!(s.panel().content, PanelContent::NoResults);
    assert!(s.panel().visible);

    let before = s.searches_run();
    assert!(s.run_now("b").is_empty());
    assert_eq!(s.searches_run(), before, "single char must not search");
    assert!(!s.panel().visible);
}

// ---------------------------------------------------------------------------
// Cap and ordering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cap_keeps_first_ten_in_index_order() {
    let mut s = session(numbered_records(40, "Halo controller"));
    let hits = s.run_now("controller");
    assert_eq!(hits.len(), MAX_RESULTS);
    assert_ids!(
        hits,
        ["R000", "R001", "R002", "R003", "R004", "R005", "R006", "R007", "R008", "R009"]
    );
}

#[tokio::test]
async fn configured_cap_is_honoured() {
    let config = SearchConfig { max_results: 3, ..SearchConfig::default() };
    let mut s = SearchSession::new(loaded_index(numbered_records(10, "Mouse")), &config);
    assert_eq!(s.run_now("mouse").len(), 3);
}

#[tokio::test]
async fn same_search_twice_renders_identically() {
    let mut s = SearchSession::with_renderer(
        loaded_index(sample_records()),
        &SearchConfig::default(),
        TextRenderer::default(),
    );
    s.run_now("ce");
    let first = s.renderer().output.clone();
    s.run_now("ce");
    assert_eq!(s.renderer().output, first);
    assert!(first.starts_with("▣ CE-001 • CS  Signed Fnatic Jersey"));
}

#[tokio::test]
async fn unloaded_index_is_indistinguishable_from_no_matches() {
    let mut empty = SearchSession::new(SearchIndex::new(), &SearchConfig::default());
    let mut loaded = session(sample_records());
    empty.run_now("zzz");
    loaded.run_now("zzz");
    assert_eq!(empty.panel(), loaded.panel());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn results_never_exceed_cap(n in 0usize..80, q in "[a-z]{2,4}") {
        let records = numbered_records(n, "abcdefghijklmnopqrstuvwxyz");
        prop_assert!(search::filter(&records, &q).len() <= MAX_RESULTS);
    }

    #[test]
    fn query_and_field_case_are_folded(word in "[a-zA-Z]{3,12}") {
        let records = vec![RecordBuilder::new("X-1", word.to_uppercase()).build()];
        prop_assert_eq!(search::filter(&records, &word.to_lowercase()).len(), 1);
        let records = vec![RecordBuilder::new("X-1", word.to_lowercase()).build()];
        prop_assert_eq!(search::filter(&records, &word.to_uppercase()).len(), 1);
    }

    #[test]
    fn every_hit_matches_and_order_is_kept(
        titles in proptest::collection::vec("[xyz]{1,5}", 0..40),
        q in "[xyz]{2}",
    ) {
        let records: Vec<Record> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| RecordBuilder::new(format!("N{i}"), t.clone()).esport("qq").build())
            .collect();
        let hits = search::filter(&records, &q);
        let mut last = None;
        for hit in &hits {
            prop_assert!(hit.title.contains(&q));
            let pos = records.iter().position(|r| r.id == hit.id).unwrap();
            prop_assert!(last.map_or(true, |l| l < pos));
            last = Some(pos);
        }
        let expected = records.iter().filter(|r| r.title.contains(&q)).count().min(MAX_RESULTS);
        prop_assert_eq!(hits.len(), expected);
    }
}
