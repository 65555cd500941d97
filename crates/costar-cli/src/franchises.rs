//! `costar franchises`: print the configured catalog.

use std::path::Path;

use anyhow::Context;
use costar_core::{load_franchises, FranchisesFile};

fn fmt_ids(ids: &[i64]) -> String {
    if ids.is_empty() {
        return "\u{2014}".to_owned();
    }
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per franchise: slug, chart label, movie and TV company ids.
pub(crate) fn format_catalog(catalog: &FranchisesFile) -> Vec<String> {
    catalog
        .franchises
        .iter()
        .map(|f| {
            format!(
                "{:<24} {:<20} movies: {:<16} tv: {}",
                f.slug(),
                f.display_label(),
                fmt_ids(&f.movie_companies),
                fmt_ids(&f.tv_companies)
            )
        })
        .collect()
}

/// Loads the catalog and prints it to stdout.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or fails validation.
pub(crate) fn run_franchises(path: &Path) -> anyhow::Result<()> {
    let catalog = load_franchises(path)
        .with_context(|| format!("failed to load franchise catalog from {}", path.display()))?;

    if catalog.franchises.is_empty() {
        println!("no franchises configured in {}", path.display());
        return Ok(());
    }

    for line in format_catalog(&catalog) {
        println!("{line}");
    }
    Ok(())
}
