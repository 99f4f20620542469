//! Search-result cache operations.
//!
//! Rows are keyed by the normalized query. Expiry is logical: a row whose
//! `expires_at` has passed is treated as absent by lookups but stays in the
//! table until the next write for the same key overwrites it.

use super::connection::CacheDb;
use crate::Error;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio_rusqlite::params;

/// A single web search result.
///
/// Every field is optional: the upstream provider may omit any of them and
/// that is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchResult {
    pub title: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
}

/// A cached row for one normalized query, decoded for the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub query_normalized: String,
    pub query_original: String,
    pub results: Vec<SearchResult>,
    pub provider: String,
    pub fetched_at: String,
    pub expires_at: String,
    pub hit_count: i64,
}

/// Cache row metadata, without the results payload.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CacheMeta {
    pub query_normalized: String,
    pub query_original: String,
    pub provider: String,
    pub fetched_at: String,
    pub expires_at: String,
    pub hit_count: i64,
}

impl CacheDb {
    /// Look up an unexpired entry for a normalized query.
    ///
    /// Returns `None` if no row exists or the row has expired. A successful
    /// return increments the row's hit counter. The read and the increment
    /// run inside a single connection-actor closure, so a concurrent upsert
    /// for the same key cannot interleave between them.
    pub async fn lookup_search(&self, normalized: &str) -> Result<Option<CacheEntry>, Error> {
        let normalized = normalized.to_string();
        let now = Utc::now().to_rfc3339();
        self.conn
            .call(move |conn| -> Result<Option<CacheEntry>, Error> {
                let mut stmt = conn.prepare(
                    "SELECT query_original, results_json, provider, fetched_at, expires_at, hit_count
                     FROM search_cache
                     WHERE query_normalized = ?1 AND expires_at > ?2",
                )?;

                let row = stmt.query_row(params![normalized, now], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, i64>(5)?,
                    ))
                });

                let (query_original, results_json, provider, fetched_at, expires_at, hit_count) = match row {
                    Ok(columns) => columns,
                    Err(tokio_rusqlite::rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                    Err(e) => return Err(e.into()),
                };
                drop(stmt);

                conn.execute(
                    "UPDATE search_cache SET hit_count = hit_count + 1 WHERE query_normalized = ?1",
                    params![normalized],
                )?;

                let results: Vec<SearchResult> =
                    serde_json::from_str(&results_json).map_err(|e| Error::Payload(e.to_string()))?;

                Ok(Some(CacheEntry {
                    query_normalized: normalized,
                    query_original,
                    results,
                    provider,
                    fetched_at,
                    expires_at,
                    hit_count: hit_count + 1,
                }))
            })
            .await
            .map_err(Error::from)
    }

    /// Insert or update the cached results for a normalized query.
    ///
    /// Uses UPSERT semantics: inserts if the key doesn't exist, replaces all
    /// fields if it does (including a previously-expired row, which is an
    /// update rather than a uniqueness conflict). Sets
    /// `expires_at = now + ttl` and resets the hit counter to zero.
    pub async fn upsert_search(
        &self, normalized: &str, original: &str, results: &[SearchResult], provider: &str, ttl_seconds: i64,
    ) -> Result<(), Error> {
        let normalized = normalized.to_string();
        let original = original.to_string();
        let provider = provider.to_string();
        let results_json = serde_json::to_string(results).map_err(|e| Error::Payload(e.to_string()))?;

        let fetched_at = Utc::now().to_rfc3339();
        let expires_at = (Utc::now() + Duration::seconds(ttl_seconds)).to_rfc3339();

        self.conn
            .call(move |conn| -> Result<(), Error> {
                conn.execute(
                    "INSERT INTO search_cache (
                        query_normalized, query_original, results_json, provider, fetched_at, expires_at, hit_count
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0)
                    ON CONFLICT(query_normalized) DO UPDATE SET
                        query_original = excluded.query_original,
                        results_json = excluded.results_json,
                        provider = excluded.provider,
                        fetched_at = excluded.fetched_at,
                        expires_at = excluded.expires_at,
                        hit_count = 0",
                    params![normalized, original, results_json, provider, fetched_at, expires_at],
                )?;
                Ok(())
            })
            .await
            .map_err(Error::from)
    }

    /// Read a row's metadata without touching its hit counter.
    ///
    /// Unlike `lookup_search`, this also returns expired rows, so callers
    /// can observe that expiry is logical rather than physical.
    pub async fn search_meta(&self, normalized: &str) -> Result<Option<CacheMeta>, Error> {
        let normalized = normalized.to_string();
        self.conn
            .call(move |conn| -> Result<Option<CacheMeta>, Error> {
                let mut stmt = conn.prepare(
                    "SELECT query_original, provider, fetched_at, expires_at, hit_count
                     FROM search_cache WHERE query_normalized = ?1",
                )?;

                let row = stmt.query_row(params![normalized], |row| {
                    Ok(CacheMeta {
                        query_normalized: normalized.clone(),
                        query_original: row.get(0)?,
                        provider: row.get(1)?,
                        fetched_at: row.get(2)?,
                        expires_at: row.get(3)?,
                        hit_count: row.get(4)?,
                    })
                });

                match row {
                    Ok(meta) => Ok(Some(meta)),
                    Err(tokio_rusqlite::rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<SearchResult> {
        vec![
            SearchResult {
                title: Some("A".into()),
                url: Some("http://a".into()),
                snippet: Some("s".into()),
            },
            SearchResult { title: Some("B".into()), url: Some("http://b".into()), snippet: None },
        ]
    }

    #[tokio::test]
    async fn test_round_trip_increments_hit_count() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let results = sample_results();

        db.upsert_search("best pasta recipe", "Best Pasta Recipe", &results, "brave", 3600)
            .await
            .unwrap();

        let meta = db.search_meta("best pasta recipe").await.unwrap().unwrap();
        assert_eq!(meta.hit_count, 0);
        assert_eq!(meta.provider, "brave");
        assert_eq!(meta.query_original, "Best Pasta Recipe");

        let entry = db.lookup_search("best pasta recipe").await.unwrap().unwrap();
        assert_eq!(entry.results, results);
        assert_eq!(entry.hit_count, 1);

        let meta = db.search_meta("best pasta recipe").await.unwrap().unwrap();
        assert_eq!(meta.hit_count, 1);
    }

    #[tokio::test]
    async fn test_lookup_missing() {
        let db = CacheDb::open_in_memory().await.unwrap();
        assert!(db.lookup_search("nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_row_is_a_miss_but_still_present() {
        let db = CacheDb::open_in_memory().await.unwrap();
        db.upsert_search("stale", "stale", &sample_results(), "brave", -1)
            .await
            .unwrap();

        assert!(db.lookup_search("stale").await.unwrap().is_none());

        // The row physically remains and its counter was not bumped.
        let meta = db.search_meta("stale").await.unwrap().unwrap();
        assert_eq!(meta.hit_count, 0);
    }

    #[tokio::test]
    async fn test_upsert_overwrites_without_conflict() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let first = sample_results();
        db.upsert_search("k", "K", &first, "brave", 3600).await.unwrap();

        // Accumulate a hit, then refresh the entry.
        db.lookup_search("k").await.unwrap().unwrap();

        let second = vec![SearchResult {
            title: Some("New".into()),
            url: Some("http://new".into()),
            snippet: Some("fresh".into()),
        }];
        db.upsert_search("k", "k again", &second, "mock", 3600).await.unwrap();

        let meta = db.search_meta("k").await.unwrap().unwrap();
        assert_eq!(meta.hit_count, 0);
        assert_eq!(meta.provider, "mock");
        assert_eq!(meta.query_original, "k again");

        let entry = db.lookup_search("k").await.unwrap().unwrap();
        assert_eq!(entry.results, second);
    }

    #[tokio::test]
    async fn test_refresh_of_expired_row_is_an_update() {
        let db = CacheDb::open_in_memory().await.unwrap();
        db.upsert_search("k", "k", &sample_results(), "brave", -1).await.unwrap();

        // Same key again with a fresh ttl must not raise a uniqueness error.
        db.upsert_search("k", "k", &sample_results(), "brave", 3600).await.unwrap();

        assert!(db.lookup_search("k").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_a_miss() {
        let db = CacheDb::open_in_memory().await.unwrap();
        db.conn
            .call(|conn| -> Result<(), Error> {
                conn.execute("DROP TABLE search_cache", [])?;
                Ok(())
            })
            .await
            .unwrap();

        let lookup = db.lookup_search("anything").await;
        assert!(matches!(lookup, Err(Error::Database(_))));

        let upsert = db.upsert_search("k", "k", &[], "brave", 3600).await;
        assert!(matches!(upsert, Err(Error::Database(_))));
    }

    #[tokio::test]
    async fn test_optional_fields_survive_round_trip() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let sparse = vec![SearchResult { title: None, url: None, snippet: None }];
        db.upsert_search("sparse", "sparse", &sparse, "brave", 3600).await.unwrap();

        let entry = db.lookup_search("sparse").await.unwrap().unwrap();
        assert_eq!(entry.results, sparse);
    }
}
