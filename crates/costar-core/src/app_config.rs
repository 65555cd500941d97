use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// The settings that work without TMDB credentials: enough to log and read
/// the franchise catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub log_level: String,
    pub franchises_path: PathBuf,
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub franchises_path: PathBuf,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub tmdb_request_timeout_secs: u64,
    pub tmdb_user_agent: String,
    pub tmdb_max_concurrent_requests: usize,
    pub tmdb_max_retries: u32,
    pub tmdb_retry_backoff_base_ms: u64,
    pub tmdb_max_discover_pages: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("franchises_path", &self.franchises_path)
            .field("tmdb_api_key", &"[redacted]")
            .field("tmdb_base_url", &self.tmdb_base_url)
            .field(
                "tmdb_request_timeout_secs",
                &self.tmdb_request_timeout_secs,
            )
            .field("tmdb_user_agent", &self.tmdb_user_agent)
            .field(
                "tmdb_max_concurrent_requests",
                &self.tmdb_max_concurrent_requests,
            )
            .field("tmdb_max_retries", &self.tmdb_max_retries)
            .field(
                "tmdb_retry_backoff_base_ms",
                &self.tmdb_retry_backoff_base_ms,
            )
            .field("tmdb_max_discover_pages", &self.tmdb_max_discover_pages)
            .finish()
    }
}
