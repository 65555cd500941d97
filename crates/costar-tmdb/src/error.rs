use thiserror::Error;

/// Errors returned by the TMDB API client.
///
/// Request URLs carry the API key, so variants identify endpoints by path
/// only.
#[derive(Debug, Error)]
pub enum TmdbError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TMDB answered with `"success": false`.
    #[error("TMDB API error {status_code} on {path}: {message}")]
    Api {
        path: String,
        status_code: i64,
        message: String,
    },

    #[error("resource not found: {path}")]
    NotFound { path: String },

    #[error("rate limited by TMDB (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("unexpected HTTP status {status} from {path}")]
    UnexpectedStatus { status: u16, path: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("discover {kind} reports {total_pages} pages; refusing more than {max_pages}")]
    PaginationLimit {
        kind: String,
        total_pages: u32,
        max_pages: u32,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
