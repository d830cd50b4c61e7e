mod assessment;
mod conditional;
mod eligibility;
mod grouper;
mod plan_outcome;
mod scorer;
mod selection;


pub use assessment::AssessedQuery;
pub use conditional::ConditionalPlanner;
pub use eligibility::EligibilityFilter;
pub use grouper::{BatchGroup, BatchGrouper};
pub use plan_outcome::RoutePlan;
pub use scorer::QueryScorer;
pub use selection::SelectionResolver;
