//! `costar compare`: fetch, transform, print.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use costar_core::{load_franchises, AppConfig, ConfigError, FranchiseConfig, FranchisesFile};
use costar_stats::ComparisonPipeline;
use costar_tmdb::{ClientSettings, TmdbClient};

/// Which catalog franchise, if any, to classify credits against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FranchiseSelection {
    /// First catalog entry, or none when the catalog is empty.
    CatalogDefault,
    Slug(String),
    Disabled,
}

impl FranchiseSelection {
    pub(crate) fn from_flags(slug: Option<String>, no_franchise: bool) -> Self {
        match (slug, no_franchise) {
            (_, true) => Self::Disabled,
            (Some(slug), false) => Self::Slug(slug),
            (None, false) => Self::CatalogDefault,
        }
    }
}

/// Resolves `selection` against the catalog.
///
/// # Errors
///
/// Returns an error naming the slug when it is not in the catalog.
pub(crate) fn select_franchise<'a>(
    catalog: &'a FranchisesFile,
    selection: &FranchiseSelection,
) -> anyhow::Result<Option<&'a FranchiseConfig>> {
    match selection {
        FranchiseSelection::Disabled => Ok(None),
        FranchiseSelection::CatalogDefault => Ok(catalog.franchises.first()),
        FranchiseSelection::Slug(slug) => catalog.find(slug).map(Some).ok_or_else(|| {
            anyhow::anyhow!("unknown franchise '{slug}'; run `costar franchises` to list slugs")
        }),
    }
}

/// Loads the catalog `selection` needs.
///
/// Nothing is read when franchise classification is disabled. Without an
/// explicit slug a missing catalog file is logged and treated as empty, so
/// the comparison still runs with every credit counted as standard.
///
/// # Errors
///
/// Returns an error if a slug was requested and the catalog cannot be
/// loaded, or if an existing catalog file is unreadable or invalid.
pub(crate) fn load_catalog(
    path: &Path,
    selection: &FranchiseSelection,
) -> anyhow::Result<FranchisesFile> {
    if *selection == FranchiseSelection::Disabled {
        return Ok(FranchisesFile::default());
    }

    match load_franchises(path) {
        Ok(catalog) => Ok(catalog),
        Err(ConfigError::FranchisesFileIo { source, .. })
            if source.kind() == ErrorKind::NotFound
                && *selection == FranchiseSelection::CatalogDefault =>
        {
            tracing::warn!(
                path = %path.display(),
                "franchise catalog not found; classifying all credits as standard"
            );
            Ok(FranchisesFile::default())
        }
        Err(e) => Err(e)
            .with_context(|| format!("failed to load franchise catalog from {}", path.display())),
    }
}

/// Runs a full comparison and prints the report to stdout.
///
/// # Errors
///
/// Returns an error if a requested franchise catalog cannot be loaded, the
/// slug is unknown, or any TMDB request fails.
pub(crate) async fn run_compare(
    config: &AppConfig,
    first: i64,
    second: i64,
    selection: &FranchiseSelection,
    pretty: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(&config.franchises_path, selection)?;
    let franchise = select_franchise(&catalog, selection)?;

    let client = TmdbClient::with_base_url(
        &config.tmdb_api_key,
        ClientSettings::from_app_config(config),
        &config.tmdb_base_url,
    )
    .context("failed to build TMDB client")?;

    let slug = franchise.map_or_else(|| "none".to_owned(), FranchiseConfig::slug);
    tracing::info!(first, second, franchise = %slug, "comparing performers");

    let input = client
        .fetch_comparison(first, second, franchise)
        .await
        .with_context(|| format!("failed to fetch performers {first} and {second} from TMDB"))?;

    let report =
        ComparisonPipeline::default().run(&input.first, &input.second, input.franchise.as_ref());

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
