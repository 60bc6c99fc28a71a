//! Plancia Admin Console Core
//!
//! The data layer of a browser-style administrative dashboard: cached
//! resource clients over a public mock REST API, fabricated-data
//! enrichment, a list query pipeline, a demo token session, and a
//! centralized state store with pure reducers.
//!
//! ## Configuration
//!
//! Behavior is controlled via `plancia.toml` (or `PLANCIA_*` environment
//! variables):
//!
//! ```toml
//! [api]
//! base_url = "https://jsonplaceholder.typicode.com"
//! timeout_secs = 10
//!
//! [cache]
//! ttl_secs = 300
//! # ... see config for all options
//! ```

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;
pub mod store;
pub mod util;
