use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors raised by the condition registry and condition behaviors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("Unknown condition type: {0}")]
    UnknownType(String),

    #[error("Condition type already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Invalid options for condition '{type_id}': {reason}")]
    InvalidOptions { type_id: String, reason: String },
}

impl ConditionError {
    pub fn log_error(&self) {
        match self {
            ConditionError::UnknownType(type_id) => {
                error!(target: "query_router::condition", type_id, "Unknown condition type, treating as unsatisfied");
            }
            ConditionError::AlreadyRegistered(type_id) => {
                error!(target: "query_router::condition", type_id, "Condition type registered twice");
            }
            ConditionError::InvalidOptions { type_id, reason } => {
                warn!(target: "query_router::condition", type_id, "Invalid condition options, treating as unsatisfied");
                debug!(target: "query_router::condition", type_id, reason, "Invalid options details");
            }
        }
    }
}

/// Errors raised while resolving or querying a backend. Always contained
/// to the group that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("backend not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Execution(String),

    #[error("query timed out after {0} ms")]
    Timeout(u64),

    #[error("group task failed: {0}")]
    TaskFailed(String),
}

impl BackendError {
    pub fn log_error(&self, backend: &str) {
        match self {
            BackendError::NotFound(uid) => {
                error!(target: "query_router::dispatch", backend, uid, "Backend resolution failed");
            }
            BackendError::Execution(message) => {
                error!(target: "query_router::dispatch", backend, "Backend execution failed");
                debug!(target: "query_router::dispatch", backend, message, "Backend execution error details");
            }
            BackendError::Timeout(ms) => {
                error!(target: "query_router::dispatch", backend, timeout_ms = ms, "Backend query timed out");
            }
            BackendError::TaskFailed(reason) => {
                error!(target: "query_router::dispatch", backend, "Group task failed");
                debug!(target: "query_router::dispatch", backend, reason, "Group task failure details");
            }
        }
    }
}

/// Top-level error for embedder-facing setup paths (registry building,
/// configuration). Routing itself never returns an error.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Condition error: {0}")]
    Condition(#[from] ConditionError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}
