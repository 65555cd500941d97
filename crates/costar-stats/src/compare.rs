//! Comparators shared by the ranking transforms.

use std::cmp::Ordering;
use std::collections::HashSet;

/// Orders popularity scores from highest to lowest.
///
/// Uses IEEE total ordering so a stray `NaN` sorts deterministically instead
/// of poisoning the sort.
#[must_use]
pub fn compare_popularity_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Returns `true` when two character names denote the same role.
///
/// Names match when they are identical, or when their whitespace-separated
/// token sets share more than one token (`"Agent John Smith"` matches
/// `"Agent Smith John"`; `"John Smith"` does not match `"John Doe"`).
///
/// The relation is reflexive and symmetric but not transitive:
/// `"Peter Parker"` ~ `"Peter Benjamin Parker"` ~ `"Benjamin Parker Jr."`
/// while the outer two share only `"Parker"`.
#[must_use]
pub fn same_character(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let left: HashSet<&str> = a.split_whitespace().collect();
    let shared = b
        .split_whitespace()
        .collect::<HashSet<&str>>()
        .intersection(&left)
        .count();
    shared > 1
}
