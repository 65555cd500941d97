use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whether a credit belongs to a film or a television series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Tv => write!(f, "tv"),
        }
    }
}

/// Acting (`Cast`) versus behind-the-camera (`Crew`) work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditRole {
    Cast,
    Crew,
}

/// A single filmography entry for one performer.
///
/// Every optional field is optional because the upstream catalog leaves it
/// blank for a meaningful share of titles; transforms skip credits that lack
/// what they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    /// Catalog id of the movie or series (not of the credit itself).
    pub id: i64,
    pub title: String,
    pub media_kind: MediaKind,
    pub role: CreditRole,
    pub character: Option<String>,
    /// Crew job, e.g. `"Producer"`. Always `None` for cast credits.
    pub job: Option<String>,
    pub popularity: Option<f64>,
    pub release_date: Option<NaiveDate>,
    /// Worldwide box-office revenue in whole dollars.
    pub revenue: Option<u64>,
}

impl Credit {
    /// Calendar year of the release date, if known.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

/// Biographical header shown next to the charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformerProfile {
    pub birthday: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub profile_path: Option<String>,
}

/// The identity carried on every derived row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerformerRef {
    pub id: i64,
    pub name: String,
}

/// A performer together with their full, flattened filmography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub profile: PerformerProfile,
    /// Movie acting credits.
    pub movie_credits: Vec<Credit>,
    pub movie_crew: Vec<Credit>,
    /// TV acting credits.
    pub tv_credits: Vec<Credit>,
    pub tv_crew: Vec<Credit>,
}

impl Performer {
    #[must_use]
    pub fn identity(&self) -> PerformerRef {
        PerformerRef {
            id: self.id,
            name: self.name.clone(),
        }
    }

    /// Acting credits of the given media kind.
    #[must_use]
    pub fn cast_credits(&self, kind: MediaKind) -> &[Credit] {
        match kind {
            MediaKind::Movie => &self.movie_credits,
            MediaKind::Tv => &self.tv_credits,
        }
    }
}

/// Ids of every movie and series that belong to a franchise, discovered once
/// per comparison and shared read-only by all classification calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseSet {
    /// Display label used in chart rows, e.g. `"Marvel"`.
    pub label: String,
    pub movie_ids: HashSet<i64>,
    pub series_ids: HashSet<i64>,
}

impl FranchiseSet {
    /// Builds a set from possibly repeated id lists; duplicates collapse.
    pub fn new(
        label: impl Into<String>,
        movie_ids: impl IntoIterator<Item = i64>,
        series_ids: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self {
            label: label.into(),
            movie_ids: movie_ids.into_iter().collect(),
            series_ids: series_ids.into_iter().collect(),
        }
    }

    /// The id set relevant to credits of `kind`.
    #[must_use]
    pub fn ids_for(&self, kind: MediaKind) -> &HashSet<i64> {
        match kind {
            MediaKind::Movie => &self.movie_ids,
            MediaKind::Tv => &self.series_ids,
        }
    }
}
