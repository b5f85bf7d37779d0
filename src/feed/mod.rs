//! Trending feed records and the provider seam.
//!
//! The feed page depends only on [`TrendingProvider`]: a source of ordered
//! [`MemeRecord`]s. The provider is either a remote trending API consumed
//! over HTTP ([`client::TrendingApi`]) or the built-in aggregator
//! (`crate::sources::Aggregator`).

pub mod client;
pub mod record;

pub use client::{FetchError, TrendingApi, TrendingProvider};
pub use record::{MediaKind, MemeRecord};
