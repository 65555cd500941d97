//! Pure transforms that turn two performers' filmographies into chart-ready
//! series.
//!
//! Every function here borrows its inputs and allocates fresh outputs; none
//! performs I/O. [`ComparisonPipeline`] composes them into a [`ChartReport`].

pub mod compare;
pub mod credit_types;
pub mod error;
pub mod franchise;
pub mod pipeline;
pub mod revenue;
pub mod roles;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use compare::{compare_popularity_desc, same_character};
pub use credit_types::summarize_credits;
pub use error::StatsError;
pub use franchise::{franchise_rows, split_by_franchise};
pub use pipeline::{
    BuildTimeline, ClassifyFranchise, ComparisonPipeline, RankRoles, StandardTransforms,
    SummarizeCredits,
};
pub use revenue::{build_timeline, build_timeline_for, ensure_roster_coverage};
pub use roles::{rank_roles, MAX_RANKED_ROLES};
pub use types::{
    CategoryCount, ChartReport, CreditCategory, CreditSplit, FranchiseCounts, FranchiseRow,
    PerformerCategories, PerformerHeader, RevenueOutcome, RoleEntry, SplitKind,
    YearlyRevenuePoint,
};
