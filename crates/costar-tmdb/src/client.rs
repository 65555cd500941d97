//! HTTP client for the TMDB v3 REST API.
//!
//! Wraps `reqwest` with TMDB-specific status mapping, API key handling,
//! retries and typed response deserialization. Failed requests come back with
//! a `{"success": false, "status_code", "status_message"}` body, which is
//! surfaced as [`TmdbError::Api`].

use std::time::Duration;

use costar_core::AppConfig;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::TmdbError;
use crate::retry::retry_with_backoff;
use crate::types::{MovieDetail, PersonResponse};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";
const DEFAULT_USER_AGENT: &str = "costar/0.1 (filmography-comparison)";

/// Transport and fan-out knobs for [`TmdbClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub backoff_base_ms: u64,
    /// Upper bound on in-flight requests during discovery and revenue look-ups.
    pub max_concurrent_requests: usize,
    pub max_discover_pages: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_retries: 3,
            backoff_base_ms: 1_000,
            max_concurrent_requests: 8,
            max_discover_pages: 500,
        }
    }
}

impl ClientSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            timeout_secs: config.tmdb_request_timeout_secs,
            user_agent: config.tmdb_user_agent.clone(),
            max_retries: config.tmdb_max_retries,
            backoff_base_ms: config.tmdb_retry_backoff_base_ms,
            max_concurrent_requests: config.tmdb_max_concurrent_requests.max(1),
            max_discover_pages: config.tmdb_max_discover_pages,
        }
    }
}

/// Client for the TMDB REST API.
///
/// Use [`TmdbClient::new`] for production or [`TmdbClient::with_base_url`]
/// to point at a mock server in tests.
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: Url,
    pub(crate) settings: ClientSettings,
}

impl TmdbClient {
    /// Creates a new client pointed at the production TMDB API.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, settings: ClientSettings) -> Result<Self, TmdbError> {
        Self::with_base_url(api_key, settings, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TmdbError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        settings: ClientSettings,
        base_url: &str,
    ) -> Result<Self, TmdbError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(settings.user_agent.as_str())
            .build()?;

        // Exactly one trailing slash, so relative endpoint paths are appended
        // to the API root instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| TmdbError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(TmdbError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
            settings,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Fetches a person together with their movie and TV credits.
    ///
    /// # Errors
    ///
    /// - [`TmdbError::NotFound`] if the person id does not exist.
    /// - [`TmdbError::Api`] if TMDB reports a failure envelope.
    /// - [`TmdbError::Http`] / [`TmdbError::UnexpectedStatus`] on transport
    ///   failure once retries are exhausted.
    /// - [`TmdbError::Deserialize`] if the body does not match the expected shape.
    pub async fn get_person(&self, person_id: i64) -> Result<PersonResponse, TmdbError> {
        self.get_json(
            &format!("person/{person_id}"),
            &[("append_to_response", "movie_credits,tv_credits")],
            &format!("person(id={person_id})"),
        )
        .await
    }

    /// Fetches movie details, used for revenue and release date.
    ///
    /// # Errors
    ///
    /// Same as [`TmdbClient::get_person`].
    pub async fn get_movie(&self, movie_id: i64) -> Result<MovieDetail, TmdbError> {
        self.get_json(
            &format!("movie/{movie_id}"),
            &[],
            &format!("movie(id={movie_id})"),
        )
        .await
    }

    /// GETs `path` with retries and deserializes the body into `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
        context: &str,
    ) -> Result<T, TmdbError> {
        let url = self.build_url(path, extra)?;
        let body = retry_with_backoff(
            self.settings.max_retries,
            self.settings.backoff_base_ms,
            || self.request_json(&url),
        )
        .await?;

        serde_json::from_value(body).map_err(|e| TmdbError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Builds the full request URL with percent-encoded query parameters.
    ///
    /// `api_key` always comes first, followed by `extra` in order.
    pub(crate) fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, TmdbError> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TmdbError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join {path}: {e}"),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a single GET and maps the HTTP status and body to a JSON value
    /// or a typed error.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, TmdbError> {
        let path = url.path().to_owned();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(1);
            return Err(TmdbError::RateLimited { retry_after_secs });
        }
        if status == StatusCode::NOT_FOUND {
            return Err(TmdbError::NotFound { path });
        }

        let text = response.text().await?;
        let parsed: Result<serde_json::Value, _> = serde_json::from_str(&text);

        if !status.is_success() {
            // 5xx stays an UnexpectedStatus so the retry loop sees it.
            if let (true, Ok(body)) = (status.is_client_error(), &parsed) {
                Self::check_api_error(body, &path)?;
            }
            return Err(TmdbError::UnexpectedStatus {
                status: status.as_u16(),
                path,
            });
        }

        let body = parsed.map_err(|e| TmdbError::Deserialize {
            context: path.clone(),
            source: e,
        })?;
        Self::check_api_error(&body, &path)?;
        Ok(body)
    }

    /// Returns [`TmdbError::Api`] when the body is a failure envelope.
    pub(crate) fn check_api_error(body: &serde_json::Value, path: &str) -> Result<(), TmdbError> {
        if body.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
            let status_code = body
                .get("status_code")
                .and_then(serde_json::Value::as_i64)
                .unwrap_or_default();
            let message = body
                .get("status_message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_owned();
            return Err(TmdbError::Api {
                path: path.to_owned(),
                status_code,
                message,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
