use futures::StreamExt;
use futures::stream;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::context::RouteContext;
use super::dispatch::{ConcurrentGroupDispatcher, GroupDispatch, GroupTask};
use super::merge::ResponseMerger;
use super::planner::{ConditionalPlanner, RoutePlan};
use super::stream::ResponseStream;
use crate::engine::backend::BackendResolver;
use crate::engine::condition::{ConditionEvaluator, ConditionRegistry, registry};
use crate::engine::types::{ExecutionContext, ResponseChunk, SubQuery};
use crate::shared::config::{CONFIG, RouterSettings};

/// Caller-facing router: plans which sub-queries run, fans them out per
/// backend and merges the responses.
pub struct RoutePipeline {
    resolver: Arc<dyn BackendResolver>,
    evaluator: ConditionEvaluator,
    planner: ConditionalPlanner,
    settings: RouterSettings,
}

impl RoutePipeline {
    /// Uses a snapshot of the global condition registry and the global
    /// router settings.
    pub fn new(resolver: Arc<dyn BackendResolver>) -> Self {
        Self {
            resolver,
            evaluator: ConditionEvaluator::new(registry::global()),
            planner: ConditionalPlanner::new(),
            settings: CONFIG.router.clone(),
        }
    }

    pub fn with_registry(mut self, registry: Arc<ConditionRegistry>) -> Self {
        self.evaluator = ConditionEvaluator::new(registry);
        self
    }

    pub fn with_settings(mut self, settings: RouterSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &RouterSettings {
        &self.settings
    }

    /// Runs only the synchronous stages (filter, score, select, group).
    pub fn plan(&self, queries: Vec<SubQuery>, exec: &ExecutionContext) -> RoutePlan {
        let ctx = RouteContext::new(exec, &self.evaluator, &self.settings);
        self.planner.build_plan(&ctx, queries)
    }

    pub fn route(&self, queries: Vec<SubQuery>, exec: ExecutionContext) -> ResponseStream {
        self.route_with_cancel(queries, exec, CancellationToken::new())
    }

    /// Like `route`, but cancelling `cancel` stops every in-flight group.
    /// The caller's token is never cancelled by the router itself.
    pub fn route_with_cancel(
        &self,
        queries: Vec<SubQuery>,
        exec: ExecutionContext,
        cancel: CancellationToken,
    ) -> ResponseStream {
        let ctx = RouteContext::new(&exec, &self.evaluator, &self.settings);
        let plan = self.planner.build_plan(&ctx, queries);
        if plan.is_empty() {
            debug!(
                target: "query_router::select",
                request_id = %ctx.request_id,
                "No runnable sub-queries, returning empty response"
            );
            return ResponseStream::empty();
        }

        info!(
            target: "query_router::dispatch",
            request_id = %ctx.request_id,
            groups = plan.groups.len(),
            queries = plan.query_count(),
            "Routing sub-queries"
        );

        let request_ids: Vec<String> = plan
            .groups
            .iter()
            .map(|group| ctx.group_request_id(group.index))
            .collect();

        let exec = Arc::new(exec);
        let tasks: Vec<GroupTask> = plan
            .groups
            .into_iter()
            .zip(request_ids)
            .map(|(group, request_id)| GroupTask {
                group,
                request_id,
                key_prefix: self.settings.key_prefix.clone(),
                timeout: self.settings.group_timeout(),
                resolver: Arc::clone(&self.resolver),
                exec: Arc::clone(&exec),
            })
            .collect();

        let token = cancel.child_token();
        let dispatcher = ConcurrentGroupDispatcher::new(self.settings.cancel_grace());
        let run_token = token.clone();
        let merged = async move {
            // dropping the stream before completion cancels in-flight groups
            let _guard = run_token.clone().drop_guard();
            let groups = dispatcher.dispatch(tasks, run_token.clone()).await;
            if run_token.is_cancelled() {
                debug!(target: "query_router::merge", "Routing cancelled, discarding responses");
                return Vec::new();
            }
            ResponseMerger::merge(groups)
        };

        let inner = stream::once(merged).flat_map(stream::iter).boxed();
        ResponseStream::new(inner, token)
    }

    /// Routes and waits for the full merged response.
    pub async fn collect(&self, queries: Vec<SubQuery>, exec: ExecutionContext) -> Vec<ResponseChunk> {
        self.route(queries, exec).collect_all().await
    }
}
