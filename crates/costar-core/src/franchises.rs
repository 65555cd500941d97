use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A franchise discovery query: every title produced by one of the listed
/// companies counts as a franchise credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FranchiseConfig {
    pub name: String,
    /// Chart label; falls back to `name` when absent.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub movie_companies: Vec<i64>,
    #[serde(default)]
    pub tv_companies: Vec<i64>,
}

impl FranchiseConfig {
    /// Generate a URL-safe slug from the franchise name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FranchisesFile {
    #[serde(default)]
    pub franchises: Vec<FranchiseConfig>,
}

impl FranchisesFile {
    /// Looks a franchise up by slug.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&FranchiseConfig> {
        self.franchises.iter().find(|f| f.slug() == slug)
    }
}

/// Load and validate the franchise catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_franchises(path: &Path) -> Result<FranchisesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FranchisesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_franchises(&content)
}

fn parse_franchises(content: &str) -> Result<FranchisesFile, ConfigError> {
    let file: FranchisesFile =
        serde_yaml::from_str(content).map_err(ConfigError::FranchisesFileParse)?;

    validate_franchises(&file)?;

    Ok(file)
}

fn validate_franchises(file: &FranchisesFile) -> Result<(), ConfigError> {
    let mut seen_slugs = HashSet::new();

    for franchise in &file.franchises {
        if franchise.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "franchise name must be non-empty".to_string(),
            ));
        }

        if franchise.movie_companies.is_empty() && franchise.tv_companies.is_empty() {
            return Err(ConfigError::Validation(format!(
                "franchise '{}' lists no movie or tv companies",
                franchise.name
            )));
        }

        let slug = franchise.slug();
        if slug.is_empty() {
            return Err(ConfigError::Validation(format!(
                "franchise '{}' has no ASCII characters to build a slug from",
                franchise.name
            )));
        }
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate franchise slug: '{}' (from franchise '{}')",
                slug, franchise.name
            )));
        }
    }

    Ok(())
}
