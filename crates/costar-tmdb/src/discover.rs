//! Company-filtered discovery, used to build franchise title sets.
//!
//! TMDB's discover endpoints are page-numbered and report `total_pages` on
//! every page, so after the first request the remaining pages are fetched
//! concurrently rather than walked one by one.

use costar_core::MediaKind;
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::client::TmdbClient;
use crate::error::TmdbError;
use crate::types::DiscoverPage;

fn discover_path(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "discover/movie",
        MediaKind::Tv => "discover/tv",
    }
}

/// Joins company ids with `|`, TMDB's "any of" separator.
pub(crate) fn companies_param(companies: &[i64]) -> String {
    companies
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

impl TmdbClient {
    /// Fetches one page of titles produced by any of `companies`.
    ///
    /// # Errors
    ///
    /// Same as [`TmdbClient::get_person`].
    pub async fn discover_page(
        &self,
        kind: MediaKind,
        companies: &[i64],
        page: u32,
    ) -> Result<DiscoverPage, TmdbError> {
        let with_companies = companies_param(companies);
        let page_param = page.to_string();
        self.get_json(
            discover_path(kind),
            &[
                ("with_companies", with_companies.as_str()),
                ("page", page_param.as_str()),
            ],
            &format!("discover/{kind}(companies={with_companies}, page={page})"),
        )
        .await
    }

    /// Fetches every page of a discovery query and returns all title ids.
    ///
    /// Page 1 is fetched first to learn `total_pages`; pages `2..=total_pages`
    /// are then fetched with at most `max_concurrent_requests` in flight. Ids
    /// come back in page order. An empty `companies` list returns no ids
    /// without calling the API.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::PaginationLimit`] if `total_pages` exceeds the
    /// configured `max_discover_pages`. Any page failure fails the whole call.
    pub async fn discover_all(
        &self,
        kind: MediaKind,
        companies: &[i64],
    ) -> Result<Vec<i64>, TmdbError> {
        if companies.is_empty() {
            return Ok(Vec::new());
        }

        let first = self.discover_page(kind, companies, 1).await?;
        let total_pages = first.total_pages.max(1);
        let max_pages = self.settings.max_discover_pages;
        if total_pages > max_pages {
            return Err(TmdbError::PaginationLimit {
                kind: kind.to_string(),
                total_pages,
                max_pages,
            });
        }

        let mut pages: Vec<DiscoverPage> = stream::iter(2..=total_pages)
            .map(|page| self.discover_page(kind, companies, page))
            .buffer_unordered(self.settings.max_concurrent_requests.max(1))
            .try_collect()
            .await?;
        pages.sort_by_key(|p| p.page);

        let ids: Vec<i64> = std::iter::once(first)
            .chain(pages)
            .flat_map(|p| p.results)
            .map(|r| r.id)
            .collect();

        tracing::debug!(
            %kind,
            companies = %companies_param(companies),
            total_pages,
            titles = ids.len(),
            "discovery complete"
        );

        Ok(ids)
    }
}
