//! TMDB API response types.
//!
//! These mirror the JSON bodies returned by the v3 REST API. Fields that TMDB
//! sends as `null`, omits, or fills with an empty string are all modelled as
//! optional here; [`crate::normalize`] decides what they mean.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// person/{id}?append_to_response=movie_credits,tv_credits
// ---------------------------------------------------------------------------

/// A person record with both credit lists appended.
#[derive(Debug, Deserialize)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub movie_credits: MovieCredits,
    #[serde(default)]
    pub tv_credits: TvCredits,
}

#[derive(Debug, Default, Deserialize)]
pub struct MovieCredits {
    #[serde(default)]
    pub cast: Vec<MovieCastCredit>,
    #[serde(default)]
    pub crew: Vec<MovieCrewCredit>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TvCredits {
    #[serde(default)]
    pub cast: Vec<TvCastCredit>,
    #[serde(default)]
    pub crew: Vec<TvCrewCredit>,
}

#[derive(Debug, Deserialize)]
pub struct MovieCastCredit {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MovieCrewCredit {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// TV credits carry the series title in `name` and its premiere in
/// `first_air_date`.
#[derive(Debug, Deserialize)]
pub struct TvCastCredit {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TvCrewCredit {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

// ---------------------------------------------------------------------------
// movie/{id}
// ---------------------------------------------------------------------------

/// The subset of a movie detail record used for revenue enrichment.
#[derive(Debug, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Box-office gross in USD. TMDB reports `0` when unknown.
    #[serde(default)]
    pub revenue: Option<u64>,
}

// ---------------------------------------------------------------------------
// discover/movie, discover/tv
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DiscoverPage {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<DiscoverResult>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Deserialize)]
pub struct DiscoverResult {
    pub id: i64,
}
