//! Fetches everything one comparison needs.
//!
//! Each fetch is all-or-nothing: a failed request (after retries) fails the
//! whole call, so callers never see a partially filled performer. The one
//! exception is a 404 on a single movie during revenue enrichment, which
//! leaves that movie's revenue unknown.

use std::collections::HashMap;

use costar_core::{FranchiseConfig, FranchiseSet, MediaKind, Performer};
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::client::TmdbClient;
use crate::error::TmdbError;
use crate::normalize::{normalize_person, normalize_revenue, revenue_lookup_ids, with_revenue};

/// Both performers plus the optional franchise set, ready for the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonInput {
    pub first: Performer,
    pub second: Performer,
    pub franchise: Option<FranchiseSet>,
}

impl TmdbClient {
    /// Fetches a performer and enriches their movie-cast credits with
    /// box-office revenue.
    ///
    /// # Errors
    ///
    /// Propagates any [`TmdbError`] from the person look-up, and any
    /// non-404 error from the per-movie look-ups.
    pub async fn fetch_performer(&self, person_id: i64) -> Result<Performer, TmdbError> {
        let performer = normalize_person(self.get_person(person_id).await?);
        let ids = revenue_lookup_ids(&performer);
        let revenues = self.movie_revenues(&ids).await?;

        tracing::info!(
            person_id,
            name = %performer.name,
            movie_credits = performer.movie_credits.len(),
            tv_credits = performer.tv_credits.len(),
            with_revenue = revenues.len(),
            "fetched performer"
        );

        Ok(with_revenue(performer, &revenues))
    }

    /// Looks up revenue for each movie id, at most `max_concurrent_requests`
    /// at a time. Movies with unknown revenue are absent from the result.
    async fn movie_revenues(&self, ids: &[i64]) -> Result<HashMap<i64, u64>, TmdbError> {
        let found: Vec<(i64, Option<u64>)> = stream::iter(ids.iter().copied())
            .map(|movie_id| async move {
                match self.get_movie(movie_id).await {
                    Ok(detail) => Ok((movie_id, normalize_revenue(detail.revenue))),
                    Err(TmdbError::NotFound { path }) => {
                        tracing::warn!(movie_id, %path, "movie not found; revenue unknown");
                        Ok((movie_id, None))
                    }
                    Err(e) => Err(e),
                }
            })
            .buffer_unordered(self.settings.max_concurrent_requests.max(1))
            .try_collect()
            .await?;

        Ok(found
            .into_iter()
            .filter_map(|(id, revenue)| revenue.map(|r| (id, r)))
            .collect())
    }

    /// Resolves a catalog franchise into the set of movie and series ids its
    /// companies produced. Movie and TV discovery run concurrently.
    ///
    /// # Errors
    ///
    /// Propagates the first [`TmdbError`] from either discovery.
    pub async fn discover_franchise(
        &self,
        franchise: &FranchiseConfig,
    ) -> Result<FranchiseSet, TmdbError> {
        let (movie_ids, series_ids) = tokio::try_join!(
            self.discover_all(MediaKind::Movie, &franchise.movie_companies),
            self.discover_all(MediaKind::Tv, &franchise.tv_companies),
        )?;

        tracing::info!(
            franchise = %franchise.slug(),
            movies = movie_ids.len(),
            series = series_ids.len(),
            "resolved franchise"
        );

        Ok(FranchiseSet::new(
            franchise.display_label(),
            movie_ids,
            series_ids,
        ))
    }

    /// Fetches both performers and, when given, the franchise set, all
    /// concurrently.
    ///
    /// # Errors
    ///
    /// Fails with the first [`TmdbError`] any of the three fetches returns.
    pub async fn fetch_comparison(
        &self,
        first_id: i64,
        second_id: i64,
        franchise: Option<&FranchiseConfig>,
    ) -> Result<ComparisonInput, TmdbError> {
        let franchise_fut = async {
            match franchise {
                Some(config) => self.discover_franchise(config).await.map(Some),
                None => Ok(None),
            }
        };

        let (first, second, franchise) = tokio::try_join!(
            self.fetch_performer(first_id),
            self.fetch_performer(second_id),
            franchise_fut,
        )?;

        Ok(ComparisonInput {
            first,
            second,
            franchise,
        })
    }
}
