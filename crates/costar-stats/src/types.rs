//! Output rows handed to the chart renderer.
//!
//! Field names are the JSON contract: every type derives `Serialize` and the
//! renderer consumes the report without further reshaping.

use costar_core::{Performer, PerformerProfile};
use serde::Serialize;

/// One of a performer's most popular, deduplicated acting roles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleEntry {
    pub character: String,
    /// Movie the role comes from.
    pub title: String,
    pub popularity: f64,
    pub performer_id: i64,
    pub performer_name: String,
}

/// Credit buckets in the fixed order the credit-type chart expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCategory {
    FilmActing,
    TvActing,
    FilmCrew,
    TvCrew,
}

impl CreditCategory {
    pub const ALL: [CreditCategory; 4] = [
        CreditCategory::FilmActing,
        CreditCategory::TvActing,
        CreditCategory::FilmCrew,
        CreditCategory::TvCrew,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CreditCategory::FilmActing => "Movies",
            CreditCategory::TvActing => "TV",
            CreditCategory::FilmCrew => "Movie Crew",
            CreditCategory::TvCrew => "TV Crew",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: CreditCategory,
    pub label: &'static str,
    pub count: usize,
}

/// Franchise versus standard credit counts for one performer and one media
/// kind. `standard_count + franchise_count` always equals the number of
/// credits classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CreditSplit {
    pub standard_count: usize,
    pub franchise_count: usize,
}

impl CreditSplit {
    #[must_use]
    pub fn total(&self) -> usize {
        self.standard_count + self.franchise_count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    Standard,
    Franchise,
}

/// A labeled bar segment of the stacked franchise chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FranchiseRow {
    pub performer_id: i64,
    pub performer_name: String,
    pub kind: SplitKind,
    /// Legend label, e.g. `"Movie Roles"` or `"Marvel Series"`.
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FranchiseCounts {
    pub movies: Vec<FranchiseRow>,
    pub series: Vec<FranchiseRow>,
}

/// Total box-office revenue of one performer in one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyRevenuePoint {
    pub year: i32,
    pub performer_id: i64,
    pub performer_name: String,
    pub revenue_total: u64,
    /// Titles summed into `revenue_total`, first-seen order, no repeats.
    /// Empty for zero-filled years.
    pub contributing_titles: Vec<String>,
}

/// The revenue product: either a timeline or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RevenueOutcome {
    Ready { points: Vec<YearlyRevenuePoint> },
    InsufficientData { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformerHeader {
    pub id: i64,
    pub name: String,
    pub profile: PerformerProfile,
}

impl From<&Performer> for PerformerHeader {
    fn from(performer: &Performer) -> Self {
        Self {
            id: performer.id,
            name: performer.name.clone(),
            profile: performer.profile.clone(),
        }
    }
}

/// Everything the four comparison widgets need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub performers: Vec<PerformerHeader>,
    /// Ranked roles of the first performer followed by the second's.
    pub roles: Vec<RoleEntry>,
    pub credit_types: Vec<PerformerCategories>,
    pub franchise_counts: FranchiseCounts,
    pub revenue: RevenueOutcome,
}

/// The four-row category table of one performer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformerCategories {
    pub performer_id: i64,
    pub performer_name: String,
    pub categories: Vec<CategoryCount>,
}
