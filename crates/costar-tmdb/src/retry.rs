//! Retry with exponential back-off and jitter for the TMDB client.
//!
//! [`retry_with_backoff`] wraps any fallible async operation and retries on
//! transient errors (network failures, 5xx, rate limiting). Everything else is
//! returned on the first failure.

use std::future::Future;
use std::time::Duration;

use crate::error::TmdbError;

const MAX_DELAY_MS: u64 = 60_000;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - Network-level failures: timeout, connection reset.
/// - HTTP 5xx responses.
/// - [`TmdbError::RateLimited`] (HTTP 429).
///
/// **Not retriable:** API envelopes reporting failure, 404s, other 4xx,
/// malformed bodies, the pagination guard and configuration errors.
pub(crate) fn is_retriable(err: &TmdbError) -> bool {
    match err {
        TmdbError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        TmdbError::RateLimited { .. } => true,
        TmdbError::UnexpectedStatus { status, .. } => *status >= 500,
        TmdbError::Api { .. }
        | TmdbError::NotFound { .. }
        | TmdbError::Deserialize { .. }
        | TmdbError::PaginationLimit { .. }
        | TmdbError::InvalidBaseUrl { .. } => false,
    }
}

/// Delay before retry number `attempt` (1-based), before jitter.
///
/// Doubles from `backoff_base_ms`, never drops below a server-supplied
/// `Retry-After`, and is capped at 60 s.
pub(crate) fn backoff_delay_ms(attempt: u32, backoff_base_ms: u64, err: &TmdbError) -> u64 {
    let computed = backoff_base_ms.saturating_mul(1u64 << attempt.saturating_sub(1).min(10));
    let floor = match err {
        TmdbError::RateLimited { retry_after_secs } => retry_after_secs.saturating_mul(1_000),
        _ => 0,
    };
    computed.max(floor).min(MAX_DELAY_MS)
}

/// Runs `operation` with up to `max_retries` additional attempts on transient
/// errors.
///
/// Back-off schedule with `backoff_base_ms = 1_000`:
///
/// | Attempt | Sleep before next attempt        |
/// |---------|----------------------------------|
/// | 1       | 1 000 ms × 2⁰ ± 25 % jitter     |
/// | 2       | 1 000 ms × 2¹ ± 25 % jitter     |
/// | 3       | 1 000 ms × 2² ± 25 % jitter     |
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, TmdbError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TmdbError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let capped = backoff_delay_ms(attempt, backoff_base_ms, &err);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "TMDB transient error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    fn deserialize_err() -> TmdbError {
        let src = serde_json::from_str::<()>("invalid").unwrap_err();
        TmdbError::Deserialize {
            context: "test".to_owned(),
            source: src,
        }
    }

    #[test]
    fn classifies_errors() {
        assert!(is_retriable(&TmdbError::RateLimited { retry_after_secs: 1 }));
        assert!(is_retriable(&TmdbError::UnexpectedStatus {
            status: 503,
            path: "/3/movie/1".to_owned(),
        }));
        assert!(!is_retriable(&TmdbError::UnexpectedStatus {
            status: 400,
            path: "/3/movie/1".to_owned(),
        }));
        assert!(!is_retriable(&TmdbError::NotFound {
            path: "/3/person/0".to_owned(),
        }));
        assert!(!is_retriable(&TmdbError::Api {
            path: "/3/person/1".to_owned(),
            status_code: 7,
            message: "Invalid API key".to_owned(),
        }));
        assert!(!is_retriable(&deserialize_err()));
    }

    #[test]
    fn delay_doubles_and_is_capped() {
        let err = deserialize_err();
        assert_eq!(backoff_delay_ms(1, 1_000, &err), 1_000);
        assert_eq!(backoff_delay_ms(2, 1_000, &err), 2_000);
        assert_eq!(backoff_delay_ms(3, 1_000, &err), 4_000);
        assert_eq!(backoff_delay_ms(12, 1_000, &err), MAX_DELAY_MS);
    }

    #[test]
    fn delay_respects_retry_after() {
        let err = TmdbError::RateLimited { retry_after_secs: 5 };
        assert_eq!(backoff_delay_ms(1, 100, &err), 5_000);
        let err = TmdbError::RateLimited { retry_after_secs: 600 };
        assert_eq!(backoff_delay_ms(1, 100, &err), MAX_DELAY_MS);
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, TmdbError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn does_not_retry_not_found() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(TmdbError::NotFound {
                    path: "/3/person/0".to_owned(),
                })
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1, "404 must not be retried");
        assert!(matches!(result, Err(TmdbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn retries_server_errors_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                let attempt = c.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt < 3 {
                    Err::<u32, _>(TmdbError::UnexpectedStatus {
                        status: 502,
                        path: "/3/movie/1".to_owned(),
                    })
                } else {
                    Ok(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(2, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                let err = reqwest::Client::new()
                    .get("http://0.0.0.0:1")
                    .send()
                    .await
                    .unwrap_err();
                Err::<u32, _>(TmdbError::Http(err))
            }
        })
        .await;
        assert!(matches!(result, Err(TmdbError::Http(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3, "1 attempt + 2 retries");
    }
}
