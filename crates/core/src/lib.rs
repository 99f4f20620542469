//! Core types and shared functionality for curio.
//!
//! This crate provides:
//! - Search-result cache with SQLite backend
//! - Query normalization for cache keys
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod normalize;

pub use cache::{CacheDb, CacheEntry, CacheMeta, SearchResult};
pub use config::AppConfig;
pub use error::Error;
pub use normalize::normalize;
