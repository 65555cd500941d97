//! Normalization of TMDB API types into the domain types in `costar-core`.

use std::collections::HashMap;

use chrono::NaiveDate;
use costar_core::{Credit, CreditRole, MediaKind, Performer, PerformerProfile};

use crate::types::{
    MovieCastCredit, MovieCrewCredit, PersonResponse, TvCastCredit, TvCrewCredit,
};

/// Parses a TMDB date.
///
/// Accepts `"YYYY-MM-DD"` and a bare `"YYYY"`, which is normalized to
/// January 1st. Anything else (including the empty string TMDB sends for
/// unknown dates) yields `None`.
#[must_use]
pub fn parse_release_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = s.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

/// TMDB reports an unknown box-office gross as `0`.
#[must_use]
pub fn normalize_revenue(revenue: Option<u64>) -> Option<u64> {
    revenue.filter(|&r| r > 0)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(parse_release_date)
}

fn title_of(id: i64, title: Option<String>, original: Option<String>) -> String {
    non_empty(title)
        .or_else(|| non_empty(original))
        .unwrap_or_else(|| format!("#{id}"))
}

/// Converts a person record with appended credits into a [`Performer`].
///
/// Revenue is left unknown here; the gateway fills it in from movie detail
/// look-ups.
#[must_use]
pub fn normalize_person(raw: PersonResponse) -> Performer {
    Performer {
        id: raw.id,
        name: raw.name,
        profile: PerformerProfile {
            birthday: date(raw.birthday.as_deref()),
            place_of_birth: non_empty(raw.place_of_birth),
            profile_path: non_empty(raw.profile_path),
        },
        movie_credits: raw.movie_credits.cast.into_iter().map(movie_cast).collect(),
        movie_crew: raw.movie_credits.crew.into_iter().map(movie_crew).collect(),
        tv_credits: raw.tv_credits.cast.into_iter().map(tv_cast).collect(),
        tv_crew: raw.tv_credits.crew.into_iter().map(tv_crew).collect(),
    }
}

fn movie_cast(raw: MovieCastCredit) -> Credit {
    Credit {
        id: raw.id,
        release_date: date(raw.release_date.as_deref()),
        title: title_of(raw.id, raw.title, raw.original_title),
        media_kind: MediaKind::Movie,
        role: CreditRole::Cast,
        character: non_empty(raw.character),
        job: None,
        popularity: raw.popularity,
        revenue: None,
    }
}

fn movie_crew(raw: MovieCrewCredit) -> Credit {
    Credit {
        id: raw.id,
        release_date: date(raw.release_date.as_deref()),
        title: title_of(raw.id, raw.title, raw.original_title),
        media_kind: MediaKind::Movie,
        role: CreditRole::Crew,
        character: None,
        job: non_empty(raw.job),
        popularity: raw.popularity,
        revenue: None,
    }
}

fn tv_cast(raw: TvCastCredit) -> Credit {
    Credit {
        id: raw.id,
        release_date: date(raw.first_air_date.as_deref()),
        title: title_of(raw.id, raw.name, raw.original_name),
        media_kind: MediaKind::Tv,
        role: CreditRole::Cast,
        character: non_empty(raw.character),
        job: None,
        popularity: raw.popularity,
        revenue: None,
    }
}

fn tv_crew(raw: TvCrewCredit) -> Credit {
    Credit {
        id: raw.id,
        release_date: date(raw.first_air_date.as_deref()),
        title: title_of(raw.id, raw.name, raw.original_name),
        media_kind: MediaKind::Tv,
        role: CreditRole::Crew,
        character: None,
        job: non_empty(raw.job),
        popularity: raw.popularity,
        revenue: None,
    }
}

/// Unique movie-cast ids in first-seen order.
#[must_use]
pub fn revenue_lookup_ids(performer: &Performer) -> Vec<i64> {
    let mut seen = std::collections::HashSet::new();
    performer
        .movie_credits
        .iter()
        .map(|c| c.id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Fills in movie-cast revenue from `revenues`, keyed by movie id.
///
/// Ids absent from the map keep an unknown revenue.
#[must_use]
pub fn with_revenue(mut performer: Performer, revenues: &HashMap<i64, u64>) -> Performer {
    for credit in &mut performer.movie_credits {
        credit.revenue = revenues.get(&credit.id).copied();
    }
    performer
}
