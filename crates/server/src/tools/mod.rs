//! MCP tool implementations.
//!
//! This module contains all tools exposed by the curio server.
#![allow(unused_imports)]

pub mod cache_get;
pub mod web_search;

pub use cache_get::{CacheGetOutput, CacheGetParams};
pub use web_search::{WebSearchOutput, WebSearchParams};
