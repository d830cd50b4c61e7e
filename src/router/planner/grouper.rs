use indexmap::IndexMap;

use crate::engine::types::{BackendRef, SubQuery};

/// Sub-queries sharing one backend, executed as a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchGroup {
    pub index: usize,
    pub backend: BackendRef,
    pub queries: Vec<SubQuery>,
}

/// Partitions runnable sub-queries by backend uid in first-seen order.
pub struct BatchGrouper;

impl BatchGrouper {
    pub fn group(queries: Vec<SubQuery>) -> Vec<BatchGroup> {
        let mut by_uid: IndexMap<String, (BackendRef, Vec<SubQuery>)> = IndexMap::new();
        for query in queries {
            by_uid
                .entry(query.backend.uid.clone())
                .or_insert_with(|| (query.backend.clone(), Vec::new()))
                .1
                .push(query);
        }

        by_uid
            .into_values()
            .enumerate()
            .map(|(index, (backend, queries))| BatchGroup {
                index,
                backend,
                queries,
            })
            .collect()
    }
}
