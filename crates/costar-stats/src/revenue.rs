//! Yearly box-office revenue timeline.
//!
//! The timeline is built in five steps:
//!
//! 1. **Extract** every movie acting credit that has both a release date and
//!    a revenue; everything else is skipped.
//! 2. **Aggregate** per performer by calendar year: revenues are summed and
//!    titles are unioned.
//! 3. **Range**: each performer's active years run from the first to the
//!    last entry of their year-sorted aggregate; the timeline covers the union
//!    of all ranges.
//! 4. **Fill** each performer's missing years inside the union with
//!    zero-revenue points.
//! 5. **Cover & sort**: [`ensure_roster_coverage`] guarantees exactly one
//!    point per roster member per year and orders the result by year, then
//!    by roster position.
//!
//! Aggregation is keyed by `(year, performer)`; revenue from two performers
//! is never pooled.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::RangeInclusive;

use costar_core::{Performer, PerformerRef};

use crate::error::StatsError;
use crate::types::YearlyRevenuePoint;

/// Builds the merged, zero-filled revenue timeline of two performers.
///
/// # Errors
///
/// Returns [`StatsError::EmptyRange`] if either performer has no credit with
/// both a release date and a revenue.
pub fn build_timeline(
    first: &Performer,
    second: &Performer,
) -> Result<Vec<YearlyRevenuePoint>, StatsError> {
    build_timeline_for(&[first, second])
}

/// Builds the merged, zero-filled revenue timeline for any roster of
/// performers. Roster order decides the order of points sharing a year; a
/// performer listed more than once contributes only once.
///
/// # Errors
///
/// - [`StatsError::EmptyRoster`] if `performers` is empty.
/// - [`StatsError::EmptyRange`] for the first performer without usable
///   revenue credits.
pub fn build_timeline_for(
    performers: &[&Performer],
) -> Result<Vec<YearlyRevenuePoint>, StatsError> {
    if performers.is_empty() {
        return Err(StatsError::EmptyRoster);
    }

    let mut aggregated = Vec::with_capacity(performers.len());
    let mut span: Option<RangeInclusive<i32>> = None;
    let mut seen = HashSet::with_capacity(performers.len());
    for performer in performers {
        // A repeated id would have its revenue summed into the same points.
        if !seen.insert(performer.id) {
            tracing::debug!(performer_id = performer.id, "ignoring repeated roster entry");
            continue;
        }
        let series = aggregate_by_year(performer);
        let range = year_range(&series, performer)?;
        span = Some(match span {
            Some(current) => {
                (*current.start()).min(*range.start())..=(*current.end()).max(*range.end())
            }
            None => range,
        });
        aggregated.push((performer.identity(), series));
    }
    let Some(span) = span else {
        return Err(StatsError::EmptyRoster);
    };

    let roster: Vec<PerformerRef> = aggregated.iter().map(|(who, _)| who.clone()).collect();
    let filled: Vec<YearlyRevenuePoint> = aggregated
        .into_iter()
        .flat_map(|(who, series)| fill_gaps(series, &who, span.clone()))
        .collect();

    tracing::debug!(
        performers = roster.len(),
        start = span.start(),
        end = span.end(),
        points = filled.len(),
        "built revenue timeline"
    );

    Ok(ensure_roster_coverage(filled, &roster, span))
}

/// Guarantees exactly one point per `(year, roster member)` for every year in
/// `years`, then sorts by year and roster position.
///
/// Missing pairs get a zero-revenue point with no titles; repeated pairs are
/// merged the same way yearly aggregation merges them. Points for identities
/// outside the roster are kept and sort after roster members of the same
/// year.
#[must_use]
pub fn ensure_roster_coverage(
    points: Vec<YearlyRevenuePoint>,
    roster: &[PerformerRef],
    years: RangeInclusive<i32>,
) -> Vec<YearlyRevenuePoint> {
    let mut merged: Vec<YearlyRevenuePoint> = Vec::with_capacity(points.len());
    let mut index: HashMap<(i32, i64), usize> = HashMap::new();

    for point in points {
        let key = (point.year, point.performer_id);
        if let Some(&at) = index.get(&key) {
            merge_into(&mut merged[at], point.revenue_total, point.contributing_titles);
        } else {
            index.insert(key, merged.len());
            merged.push(point);
        }
    }

    for year in years {
        for member in roster {
            if !index.contains_key(&(year, member.id)) {
                index.insert((year, member.id), merged.len());
                merged.push(zero_point(year, member));
            }
        }
    }

    let position = |id: i64| {
        roster
            .iter()
            .position(|m| m.id == id)
            .unwrap_or(roster.len())
    };
    merged.sort_by_key(|p| (p.year, position(p.performer_id)));
    merged
}

/// Steps 1 and 2: one point per calendar year with revenue, ascending.
fn aggregate_by_year(performer: &Performer) -> Vec<YearlyRevenuePoint> {
    let mut by_year: BTreeMap<i32, YearlyRevenuePoint> = BTreeMap::new();
    let mut skipped = 0usize;

    for credit in &performer.movie_credits {
        let (Some(year), Some(revenue)) = (credit.release_year(), credit.revenue) else {
            skipped += 1;
            continue;
        };
        let title = credit.title.clone();
        match by_year.get_mut(&year) {
            Some(point) => merge_into(point, revenue, vec![title]),
            None => {
                by_year.insert(
                    year,
                    YearlyRevenuePoint {
                        year,
                        performer_id: performer.id,
                        performer_name: performer.name.clone(),
                        revenue_total: revenue,
                        contributing_titles: vec![title],
                    },
                );
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(
            performer_id = performer.id,
            skipped,
            "skipped credits without release date or revenue"
        );
    }

    by_year.into_values().collect()
}

/// Step 3 for one performer. `series` must be sorted ascending by year.
fn year_range(
    series: &[YearlyRevenuePoint],
    performer: &Performer,
) -> Result<RangeInclusive<i32>, StatsError> {
    debug_assert!(series.windows(2).all(|w| w[0].year < w[1].year));
    match (series.first(), series.last()) {
        (Some(first), Some(last)) => Ok(first.year..=last.year),
        _ => Err(StatsError::EmptyRange {
            performer_id: performer.id,
            performer_name: performer.name.clone(),
        }),
    }
}

/// Step 4 for one performer: walk `years` and zero-fill every gap.
fn fill_gaps(
    series: Vec<YearlyRevenuePoint>,
    who: &PerformerRef,
    years: RangeInclusive<i32>,
) -> Vec<YearlyRevenuePoint> {
    let mut by_year: BTreeMap<i32, YearlyRevenuePoint> =
        series.into_iter().map(|p| (p.year, p)).collect();
    years
        .map(|year| by_year.remove(&year).unwrap_or_else(|| zero_point(year, who)))
        .collect()
}

fn zero_point(year: i32, who: &PerformerRef) -> YearlyRevenuePoint {
    YearlyRevenuePoint {
        year,
        performer_id: who.id,
        performer_name: who.name.clone(),
        revenue_total: 0,
        contributing_titles: Vec::new(),
    }
}

fn merge_into(point: &mut YearlyRevenuePoint, revenue: u64, titles: Vec<String>) {
    point.revenue_total = point.revenue_total.saturating_add(revenue);
    for title in titles {
        if !point.contributing_titles.contains(&title) {
            point.contributing_titles.push(title);
        }
    }
}
