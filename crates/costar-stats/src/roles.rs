//! Most-popular-roles ranking.

use costar_core::{Credit, Performer};

use crate::compare::{compare_popularity_desc, same_character};
use crate::types::RoleEntry;

/// Upper bound on roles returned per performer.
pub const MAX_RANKED_ROLES: usize = 5;

/// Ranks a performer's movie acting roles by popularity.
///
/// Credits without a character name are skipped; a missing popularity ranks
/// as `0.0`. The sort is stable, so equally popular roles keep their input
/// order. Later roles that are [`same_character`] as an already kept role are
/// dropped, then the list is cut to [`MAX_RANKED_ROLES`].
#[must_use]
pub fn rank_roles(performer: &Performer) -> Vec<RoleEntry> {
    let mut candidates: Vec<(&Credit, &str, f64)> = performer
        .movie_credits
        .iter()
        .filter_map(|credit| {
            let character = credit.character.as_deref()?;
            Some((credit, character, credit.popularity.unwrap_or(0.0)))
        })
        .collect();

    // `sort_by` is stable.
    candidates.sort_by(|a, b| compare_popularity_desc(a.2, b.2));

    let mut kept: Vec<RoleEntry> = Vec::with_capacity(MAX_RANKED_ROLES);
    for (credit, character, popularity) in candidates {
        if kept.len() == MAX_RANKED_ROLES {
            break;
        }
        if kept
            .iter()
            .any(|entry| same_character(&entry.character, character))
        {
            continue;
        }
        kept.push(RoleEntry {
            character: character.to_owned(),
            title: credit.title.clone(),
            popularity,
            performer_id: performer.id,
            performer_name: performer.name.clone(),
        });
    }

    tracing::debug!(
        performer_id = performer.id,
        candidates = performer.movie_credits.len(),
        ranked = kept.len(),
        "ranked roles"
    );

    kept
}
