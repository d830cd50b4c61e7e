use super::grouper::BatchGroup;

/// Output of the planning stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePlan {
    pub groups: Vec<BatchGroup>,
}

impl RoutePlan {
    pub fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn query_count(&self) -> usize {
        self.groups.iter().map(|group| group.queries.len()).sum()
    }

    /// Ref ids of the selected queries in group order.
    pub fn ref_ids(&self) -> Vec<&str> {
        self.groups
            .iter()
            .flat_map(|group| group.queries.iter().map(|query| query.ref_id.as_str()))
            .collect()
    }
}
