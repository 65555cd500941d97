pub mod app_config;
pub mod config;
pub mod credits;
pub mod franchises;

pub use app_config::{AppConfig, CatalogConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, load_catalog_config};
pub use credits::{
    Credit, CreditRole, FranchiseSet, MediaKind, Performer, PerformerProfile, PerformerRef,
};
pub use franchises::{load_franchises, FranchiseConfig, FranchisesFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read franchises file {path}: {source}")]
    FranchisesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse franchises file: {0}")]
    FranchisesFileParse(#[source] serde_yaml::Error),

    #[error("franchise config validation failed: {0}")]
    Validation(String),
}
