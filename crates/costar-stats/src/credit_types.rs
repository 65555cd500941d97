use costar_core::Performer;

use crate::types::{CategoryCount, CreditCategory};

/// Counts a performer's credits per category.
///
/// Always returns four rows in [`CreditCategory::ALL`] order; a category with
/// no credits reports `0`.
#[must_use]
pub fn summarize_credits(performer: &Performer) -> Vec<CategoryCount> {
    CreditCategory::ALL
        .into_iter()
        .map(|category| {
            let count = match category {
                CreditCategory::FilmActing => performer.movie_credits.len(),
                CreditCategory::TvActing => performer.tv_credits.len(),
                CreditCategory::FilmCrew => performer.movie_crew.len(),
                CreditCategory::TvCrew => performer.tv_crew.len(),
            };
            CategoryCount {
                category,
                label: category.label(),
                count,
            }
        })
        .collect()
}
