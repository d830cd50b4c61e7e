use super::context::{RouteContext, group_key};
use crate::test_helpers::factories::ContextFactory;
use crate::engine::condition::{ConditionEvaluator, ConditionRegistry};
use crate::shared::config::RouterSettings;
use std::sync::Arc;

#[test]
fn group_key_embeds_prefix_and_index() {
    assert_eq!(group_key("mixed", 3, "abc"), "mixed-3-abc");
    assert_eq!(group_key("mixed", 0, ""), "mixed-0-");
}

#[test]
fn uses_caller_request_id_when_present() {
    let exec = ContextFactory::new().with_request_id("Q42").create();
    let evaluator = ConditionEvaluator::new(Arc::new(ConditionRegistry::with_builtins()));
    let settings = RouterSettings::default();

    let ctx = RouteContext::new(&exec, &evaluator, &settings);
    assert_eq!(ctx.request_id, "Q42");
    assert_eq!(ctx.group_request_id(1), "mixed-1-Q42");
}

#[test]
fn generates_request_id_when_missing() {
    let exec = ContextFactory::new().create();
    let evaluator = ConditionEvaluator::new(Arc::new(ConditionRegistry::with_builtins()));
    let settings = RouterSettings::default();

    let first = RouteContext::new(&exec, &evaluator, &settings);
    let second = RouteContext::new(&exec, &evaluator, &settings);
    assert_eq!(first.request_id.len(), 12);
    assert_ne!(first.request_id, second.request_id);
}
