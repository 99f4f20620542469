//! Cache-aside search orchestration.
//!
//! Control flow: normalize the raw query, probe the cache, and only on a
//! miss call the provider, then persist the fresh results under the
//! configured lifetime. Two concurrent misses for the same key may both
//! reach the provider and both upsert; the last completed write wins.

use crate::mock;
use crate::provider::SearchProvider;
use curio_core::{CacheDb, Error, SearchResult, normalize};

/// Answer a raw query through the cache-aside layer.
///
/// With `mock` set, returns the provider client's synthetic result
/// immediately, skipping cache and network entirely. Otherwise a cache hit
/// serves the stored results (the store bumps the hit counter as a side
/// effect of the lookup); a miss triggers a single provider fetch followed
/// by an upsert under `ttl_seconds`.
///
/// # Errors
///
/// Provider failures map to `ProviderUnreachable` / `ProviderFailure` /
/// `Misconfigured`; storage failures surface as `Database`. A failed cache
/// write after a successful fetch is a real failure, not best-effort: the
/// fresh results are not returned.
pub async fn cached_search(
    db: &CacheDb, provider: &dyn SearchProvider, raw_query: &str, count: u8, ttl_seconds: i64, mock: bool,
) -> Result<Vec<SearchResult>, Error> {
    if mock {
        return Ok(mock::results(raw_query));
    }

    let normalized = normalize(raw_query);

    if let Some(entry) = db.lookup_search(&normalized).await? {
        tracing::debug!(query = %normalized, hits = entry.hit_count, "search cache hit");
        return Ok(entry.results);
    }

    tracing::debug!(query = %normalized, provider = provider.name(), "search cache miss");
    let results = provider.fetch(raw_query, count).await?;

    db.upsert_search(&normalized, raw_query, &results, provider.name(), ttl_seconds)
        .await?;

    Ok(results)
}
