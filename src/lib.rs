//! Relevance ranking for local vendor directories.
//!
//! Given a vendor list and whatever the user typed into the search box, this
//! crate returns the same vendors in the order they should be shown. There is
//! no index: ranking is one pass over the records, which is the right trade at
//! directory sizes (tens to low thousands of listings).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │ tokenize.rs  │────▶│ scoring/core.rs  │────▶│   rank.rs    │
//! │ (keywords,   │     │ (keyword_score,  │     │ (Ranker,     │
//! │  STOP_WORDS) │     │  quality_score)  │     │  rank)       │
//! └──────────────┘     └──────────────────┘     └──────────────┘
//!                               │                      │
//!                               ▼                      ▼
//!                      ┌──────────────────┐     ┌──────────────┐
//!                      │scoring/ranking.rs│     │    geo.rs    │
//!                      │ (blend, stable   │     │ (haversine,  │
//!                      │  comparator)     │     │  apply_geo)  │
//!                      └──────────────────┘     └──────────────┘
//! ```
//!
//! Every weight is a field of [`RankingConfig`], whose defaults are the
//! constants in [`scoring`]: name 3.0, category 2.5, description 1.5,
//! locality 1.0, blended 60/40 with the rating on a 0-5 scale.
//!
//! # Usage
//!
//! ```
//! use vendex::{rank, Coordinate, GeoContext, Record};
//!
//! let records = vec![
//!     Record { id: "a".into(), name: "Rosa's Plumbing".into(), rating: 4.8, ..Record::default() },
//!     Record { id: "b".into(), name: "Bean There".into(), rating: 4.6, ..Record::default() },
//! ];
//!
//! let by_relevance = rank(&records, "plumbing", None);
//! assert_eq!(by_relevance[0].record.id, "a");
//!
//! let geo = GeoContext::new(Coordinate::new(51.5, -0.12)).with_radius(10.0);
//! let nearby = rank(&records, "plumbing", Some(&geo));
//! assert_eq!(nearby.len(), 2); // neither record has a coordinate, so none is dropped
//! ```

pub mod catalog;
pub mod config;
mod contracts;
pub mod error;
pub mod geo;
mod rank;
pub mod scoring;
pub mod testing;
mod tokenize;
mod types;

// Re-exports for public API
pub use catalog::{load_catalog, parse_catalog, CatalogStats};
pub use config::{BlendConfig, BlendStrategy, FieldWeights, RankingConfig, TokenizerConfig};
pub use error::{CatalogError, ConfigError};
pub use geo::{apply_geo, haversine_km, EARTH_RADIUS_KM};
pub use rank::{rank, Ranker};
pub use scoring::{keyword_score, keyword_score_with, quality_score, SearchField};
pub use tokenize::{is_stop_word, normalize, tokenize_query, tokenize_query_with, STOP_WORDS};
pub use types::{Coordinate, GeoContext, RankedRecord, Record, ScoredRecord};
