use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use super::traits::{BackendClient, BackendResolver};
use crate::engine::errors::BackendError;
use crate::engine::types::BackendRef;

/// In-memory `uid -> client` resolver.
#[derive(Default)]
pub struct StaticBackendResolver {
    clients: DashMap<String, Arc<dyn BackendClient>>,
}

impl StaticBackendResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(self, uid: impl Into<String>, client: Arc<dyn BackendClient>) -> Self {
        self.insert(uid, client);
        self
    }

    /// Registers or replaces the client for `uid`.
    pub fn insert(&self, uid: impl Into<String>, client: Arc<dyn BackendClient>) {
        self.clients.insert(uid.into(), client);
    }

    pub fn remove(&self, uid: &str) -> Option<Arc<dyn BackendClient>> {
        self.clients.remove(uid).map(|(_, client)| client)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl BackendResolver for StaticBackendResolver {
    async fn resolve(&self, backend: &BackendRef) -> Result<Arc<dyn BackendClient>, BackendError> {
        let client = self
            .clients
            .get(&backend.uid)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| BackendError::NotFound(backend.uid.clone()))?;
        debug!(target: "query_router::dispatch", uid = %backend.uid, name = client.name(), "Resolved backend");
        Ok(client)
    }
}
