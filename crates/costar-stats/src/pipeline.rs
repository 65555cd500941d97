//! Comparison pipeline orchestration.
//!
//! [`ComparisonPipeline`] runs the four transforms over a performer pair and
//! assembles a [`ChartReport`]. Each transform is a collaborator passed in as
//! a trait object, so callers (and tests) can swap one out without touching
//! the others.

use costar_core::{FranchiseSet, Performer};

use crate::error::StatsError;
use crate::types::{
    CategoryCount, ChartReport, FranchiseCounts, PerformerCategories, PerformerHeader,
    RevenueOutcome, RoleEntry, YearlyRevenuePoint,
};

pub trait RankRoles: Send + Sync {
    fn rank_roles(&self, performer: &Performer) -> Vec<RoleEntry>;
}

pub trait SummarizeCredits: Send + Sync {
    fn summarize(&self, performer: &Performer) -> Vec<CategoryCount>;
}

pub trait ClassifyFranchise: Send + Sync {
    fn franchise_rows(
        &self,
        performers: &[&Performer],
        franchise: Option<&FranchiseSet>,
    ) -> FranchiseCounts;
}

pub trait BuildTimeline: Send + Sync {
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyRange`] when a performer has no usable
    /// revenue credits.
    fn build(&self, performers: &[&Performer]) -> Result<Vec<YearlyRevenuePoint>, StatsError>;
}

/// The transforms shipped with this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTransforms;

impl RankRoles for StandardTransforms {
    fn rank_roles(&self, performer: &Performer) -> Vec<RoleEntry> {
        crate::roles::rank_roles(performer)
    }
}

impl SummarizeCredits for StandardTransforms {
    fn summarize(&self, performer: &Performer) -> Vec<CategoryCount> {
        crate::credit_types::summarize_credits(performer)
    }
}

impl ClassifyFranchise for StandardTransforms {
    fn franchise_rows(
        &self,
        performers: &[&Performer],
        franchise: Option<&FranchiseSet>,
    ) -> FranchiseCounts {
        crate::franchise::franchise_rows(performers, franchise)
    }
}

impl BuildTimeline for StandardTransforms {
    fn build(&self, performers: &[&Performer]) -> Result<Vec<YearlyRevenuePoint>, StatsError> {
        crate::revenue::build_timeline_for(performers)
    }
}

pub struct ComparisonPipeline {
    roles: Box<dyn RankRoles>,
    credits: Box<dyn SummarizeCredits>,
    franchise: Box<dyn ClassifyFranchise>,
    timeline: Box<dyn BuildTimeline>,
}

impl Default for ComparisonPipeline {
    fn default() -> Self {
        Self::new(
            Box::new(StandardTransforms),
            Box::new(StandardTransforms),
            Box::new(StandardTransforms),
            Box::new(StandardTransforms),
        )
    }
}

impl ComparisonPipeline {
    #[must_use]
    pub fn new(
        roles: Box<dyn RankRoles>,
        credits: Box<dyn SummarizeCredits>,
        franchise: Box<dyn ClassifyFranchise>,
        timeline: Box<dyn BuildTimeline>,
    ) -> Self {
        Self {
            roles,
            credits,
            franchise,
            timeline,
        }
    }

    #[must_use]
    pub fn with_roles(mut self, roles: Box<dyn RankRoles>) -> Self {
        self.roles = roles;
        self
    }

    #[must_use]
    pub fn with_credits(mut self, credits: Box<dyn SummarizeCredits>) -> Self {
        self.credits = credits;
        self
    }

    #[must_use]
    pub fn with_franchise(mut self, franchise: Box<dyn ClassifyFranchise>) -> Self {
        self.franchise = franchise;
        self
    }

    #[must_use]
    pub fn with_timeline(mut self, timeline: Box<dyn BuildTimeline>) -> Self {
        self.timeline = timeline;
        self
    }

    /// Run every transform over the pair and assemble the report.
    ///
    /// A timeline failure does not abort the run: it is logged and reported
    /// as [`RevenueOutcome::InsufficientData`] so the other three charts still
    /// render. A missing `franchise` set classifies every credit as standard.
    #[must_use]
    pub fn run(
        &self,
        first: &Performer,
        second: &Performer,
        franchise: Option<&FranchiseSet>,
    ) -> ChartReport {
        let pair = [first, second];

        let roles = pair
            .iter()
            .flat_map(|p| self.roles.rank_roles(p))
            .collect();

        let credit_types = pair
            .iter()
            .map(|p| PerformerCategories {
                performer_id: p.id,
                performer_name: p.name.clone(),
                categories: self.credits.summarize(p),
            })
            .collect();

        let franchise_counts = self.franchise.franchise_rows(&pair, franchise);

        let revenue = match self.timeline.build(&pair) {
            Ok(points) => RevenueOutcome::Ready { points },
            Err(e) => {
                tracing::warn!(
                    first = first.id,
                    second = second.id,
                    error = %e,
                    "revenue timeline unavailable"
                );
                RevenueOutcome::InsufficientData {
                    reason: e.to_string(),
                }
            }
        };

        ChartReport {
            performers: pair.iter().map(|p| PerformerHeader::from(*p)).collect(),
            roles,
            credit_types,
            franchise_counts,
            revenue,
        }
    }
}
