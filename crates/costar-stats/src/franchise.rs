//! Franchise versus standard credit partitioning.

use std::collections::HashSet;

use costar_core::{Credit, FranchiseSet, MediaKind, Performer};

use crate::types::{CreditSplit, FranchiseCounts, FranchiseRow, SplitKind};

/// Label used for franchise rows when no franchise catalog entry was given.
pub const DEFAULT_FRANCHISE_LABEL: &str = "Franchise";

/// Splits `credits` into those whose title id is in `franchise_ids` and the
/// rest. Every credit lands in exactly one bucket, so the two counts always
/// add up to `credits.len()`.
#[must_use]
pub fn split_by_franchise(credits: &[Credit], franchise_ids: &HashSet<i64>) -> CreditSplit {
    let standard_count = credits
        .iter()
        .filter(|c| !franchise_ids.contains(&c.id))
        .count();
    CreditSplit {
        standard_count,
        franchise_count: credits.len() - standard_count,
    }
}

/// Builds the labeled rows for the stacked "movies" and "series" charts.
///
/// Each performer contributes a standard row followed by a franchise row per
/// group, in roster order. A missing `franchise` classifies every credit as
/// standard.
#[must_use]
pub fn franchise_rows(performers: &[&Performer], franchise: Option<&FranchiseSet>) -> FranchiseCounts {
    let empty = FranchiseSet::default();
    let (set, label) = match franchise {
        Some(set) if !set.label.trim().is_empty() => (set, set.label.as_str()),
        Some(set) => (set, DEFAULT_FRANCHISE_LABEL),
        None => {
            tracing::debug!("no franchise set supplied; classifying all credits as standard");
            (&empty, DEFAULT_FRANCHISE_LABEL)
        }
    };

    let mut counts = FranchiseCounts::default();
    for performer in performers {
        counts.movies.extend(rows_for(
            performer,
            MediaKind::Movie,
            set,
            "Movie Roles",
            &format!("{label} Movies"),
        ));
        counts.series.extend(rows_for(
            performer,
            MediaKind::Tv,
            set,
            "TV Roles",
            &format!("{label} Series"),
        ));
    }
    counts
}

fn rows_for(
    performer: &Performer,
    kind: MediaKind,
    set: &FranchiseSet,
    standard_label: &str,
    franchise_label: &str,
) -> [FranchiseRow; 2] {
    let split = split_by_franchise(performer.cast_credits(kind), set.ids_for(kind));
    let row = |kind: SplitKind, label: &str, count: usize| FranchiseRow {
        performer_id: performer.id,
        performer_name: performer.name.clone(),
        kind,
        label: label.to_owned(),
        count,
    };
    [
        row(SplitKind::Standard, standard_label, split.standard_count),
        row(SplitKind::Franchise, franchise_label, split.franchise_count),
    ]
}

#[cfg(test)]
mod tests {
    use costar_core::CreditRole;

    use super::*;
    use crate::fixtures::{credit, performer};

    fn movies(ids: &[i64]) -> Vec<Credit> {
        ids.iter()
            .map(|&id| credit(id, &format!("m{id}"), MediaKind::Movie, CreditRole::Cast))
            .collect()
    }

    #[test]
    fn counts_credits_in_and_out_of_the_set() {
        let ids: HashSet<i64> = [1, 3].into_iter().collect();
        let split = split_by_franchise(&movies(&[1, 2, 3, 4, 5]), &ids);
        assert_eq!(split.franchise_count, 2);
        assert_eq!(split.standard_count, 3);
    }

    #[test]
    fn empty_set_classifies_everything_standard() {
        let split = split_by_franchise(&movies(&[1, 2]), &HashSet::new());
        assert_eq!(split, CreditSplit { standard_count: 2, franchise_count: 0 });
    }

    #[test]
    fn foreign_ids_do_not_change_totals() {
        let credits = movies(&[1, 2, 3]);
        for ids in [vec![], vec![99], vec![1, 99, 100], vec![1, 2, 3]] {
            let set: HashSet<i64> = ids.into_iter().collect();
            let split = split_by_franchise(&credits, &set);
            assert_eq!(split.total(), credits.len());
        }
    }

    #[test]
    fn repeated_credit_ids_each_count() {
        let ids: HashSet<i64> = [1].into_iter().collect();
        let split = split_by_franchise(&movies(&[1, 1, 2]), &ids);
        assert_eq!(split.franchise_count, 2);
        assert_eq!(split.standard_count, 1);
    }

    #[test]
    fn builds_labeled_rows_per_group() {
        let mut a = performer(1, "A");
        a.movie_credits = movies(&[10, 11, 12]);
        a.tv_credits = vec![credit(50, "s", MediaKind::Tv, CreditRole::Cast)];
        let mut b = performer(2, "B");
        b.movie_credits = movies(&[10]);

        let set = FranchiseSet::new("Marvel", [10, 10, 12], [50]);
        let counts = franchise_rows(&[&a, &b], Some(&set));

        let movie_rows: Vec<(i64, &str, usize)> = counts
            .movies
            .iter()
            .map(|r| (r.performer_id, r.label.as_str(), r.count))
            .collect();
        assert_eq!(
            movie_rows,
            vec![
                (1, "Movie Roles", 1),
                (1, "Marvel Movies", 2),
                (2, "Movie Roles", 0),
                (2, "Marvel Movies", 1),
            ]
        );
        assert_eq!(counts.series.len(), 4);
        assert_eq!(counts.series[1].label, "Marvel Series");
        assert_eq!(counts.series[1].count, 1);
        assert_eq!(counts.series[1].kind, SplitKind::Franchise);
        assert_eq!(counts.series[3].count, 0);
    }

    #[test]
    fn missing_franchise_set_is_treated_as_empty() {
        let mut a = performer(1, "A");
        a.movie_credits = movies(&[1, 2]);
        let counts = franchise_rows(&[&a], None);
        assert_eq!(counts.movies[0].count, 2);
        assert_eq!(counts.movies[1].count, 0);
        assert_eq!(counts.movies[1].label, "Franchise Movies");
    }
}
