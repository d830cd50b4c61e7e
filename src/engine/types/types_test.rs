use super::*;
use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

fn cond(type_id: &str, pattern: &str) -> Condition {
    Condition::new(type_id).with_option("pattern", pattern)
}

#[test]
fn binding_is_set_ignores_null_and_empty_values() {
    assert!(!VariableBinding::new("a", "a", json!(null)).is_set());
    assert!(!VariableBinding::new("a", "a", json!("")).is_set());
    assert!(!VariableBinding::new("a", "a", json!([])).is_set());
    assert!(!VariableBinding::new("a", "a", json!({})).is_set());
    assert!(VariableBinding::new("a", "a", json!("x")).is_set());
    assert!(VariableBinding::new("a", "a", json!(0)).is_set());
    assert!(VariableBinding::new("a", "a", json!(false)).is_set());
}

#[test]
fn binding_named_skips_unset_bindings() {
    let window = TimeWindow::last(Duration::hours(1));
    let ctx = ExecutionContext::new(window)
        .with_variable(VariableBinding::new("1", "host", json!("")))
        .with_variable(VariableBinding::new("2", "host", json!("web-1")));

    let found = ctx.binding_named("host").expect("set binding");
    assert_eq!(found.id, "2");
    assert_eq!(ctx.set_bindings().count(), 1);
}

#[test]
fn span_is_clamped_to_zero_for_inverted_windows() {
    let from = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
    assert_eq!(TimeWindow::new(from, to).span(), Duration::zero());
    assert_eq!(TimeWindow::new(to, from).span(), Duration::hours(2));
}

#[test]
fn window_parse_keeps_raw_bounds_and_rejects_bad_ones() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let window = TimeWindow::parse("now-6h", "now", now).unwrap();
    assert_eq!(window.span(), Duration::hours(6));
    assert_eq!(window.raw.from, "now-6h");

    assert!(TimeWindow::parse("nowé", "now", now).is_err());
}

#[test]
fn strict_subset_detection_ignores_duplicates() {
    let backend = BackendRef::new("ds");
    let mut narrow = SubQuery::new("A", backend.clone());
    narrow.conditions = vec![cond("valueClick", "x"), cond("valueClick", "x")];
    let mut wide = SubQuery::new("B", backend.clone());
    wide.conditions = vec![cond("valueClick", "x"), cond("valueClick", "y")];
    let mut same = SubQuery::new("C", backend);
    same.conditions = vec![cond("valueClick", "x")];

    assert!(narrow.is_strictly_less_specific_than(&wide));
    assert!(!wide.is_strictly_less_specific_than(&narrow));
    assert!(!narrow.is_strictly_less_specific_than(&same));
    assert!(!same.is_strictly_less_specific_than(&narrow));
}

#[test]
fn overlapping_condition_sets_are_not_subsets() {
    let backend = BackendRef::new("ds");
    let mut c = SubQuery::new("C", backend.clone());
    c.conditions = vec![cond("valueClick", "x"), cond("valueClick", "y")];
    let mut d = SubQuery::new("D", backend);
    d.conditions = vec![cond("valueClick", "x"), cond("valueClick", "z")];

    assert!(!c.is_strictly_less_specific_than(&d));
    assert!(!d.is_strictly_less_specific_than(&c));
}

#[test]
fn score_display_and_definedness() {
    assert_eq!(Score::UNSCORED.to_string(), "undefined");
    assert_eq!(Score::unmet(2).to_string(), "2");
    assert!(!Score::default().is_defined());
    assert_eq!(Score::unmet(0).value(), Some(0));
}

#[test]
fn error_chunk_prefixes_backend_name() {
    let chunk = ResponseChunk::error("mixed-0-req", "Loki", "connection refused");
    assert!(chunk.is_error());
    assert!(chunk.data.is_empty());
    let error = chunk.error.expect("error payload");
    assert_eq!(error.message, "Loki: connection refused");
    assert_eq!(error.backend.as_deref(), Some("Loki"));
}

#[test]
fn sub_query_deserializes_with_defaults() {
    let query: SubQuery = serde_json::from_value(json!({
        "refId": "A",
        "backend": { "uid": "prom" },
        "conditions": [{ "typeId": "valueClick", "options": { "pattern": "host" } }]
    }))
    .expect("deserialize");

    assert_eq!(query.ref_id, "A");
    assert!(!query.hidden);
    assert_eq!(query.conditions[0].option_str("pattern"), Some("host"));
    assert_eq!(query.backend.display_name(), "prom");
}

#[test]
fn backend_chunk_state_maps_to_loading_unless_streaming() {
    let plain = BackendChunk::new(Vec::new());
    assert_eq!(plain.response_state(), LoadingState::Loading);
    let streaming = BackendChunk::keyed("A", Vec::new()).with_state(LoadingState::Streaming);
    assert_eq!(streaming.response_state(), LoadingState::Streaming);
    let done = BackendChunk::keyed("A", Vec::new()).with_state(LoadingState::Done);
    assert_eq!(done.response_state(), LoadingState::Loading);
}
