// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking entry points.
//!
//! A ranking call is one pass over the caller's records:
//!
//! ```text
//! query ──▶ tokenize ──▶ keyword_score ─┐
//!                                       ├─▶ blend ──▶ stable sort ──▶ [apply_geo] ──▶ Vec<RankedRecord>
//! record.rating ──▶ quality_score ──────┘
//! ```
//!
//! A blank query skips scoring and orders by rating alone. There is no index
//! and no cache: two calls with the same inputs do the same work and return
//! the same order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::RankingConfig;
use crate::contracts;
use crate::error::ConfigError;
use crate::geo::apply_geo;
use crate::scoring::ranking::{blend, sort_scored};
use crate::scoring::{keyword_score_with, quality_score};
use crate::tokenize::tokenize_query_with;
use crate::types::{GeoContext, RankedRecord, Record, ScoredRecord};

/// Below this many records scoring stays on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 512;

/// Rank with the default configuration.
///
/// ```
/// use vendex::{rank, Record};
///
/// let records = vec![
///     Record { id: "a".into(), name: "Bean There".into(), category: "Cafe".into(), rating: 4.0, ..Record::default() },
///     Record { id: "b".into(), name: "Rosa's Plumbing".into(), category: "Plumber".into(), rating: 4.8, ..Record::default() },
/// ];
///
/// let ranked = rank(&records, "plumber", None);
/// assert_eq!(ranked[0].record.id, "b");
/// assert_eq!(ranked.len(), 2);
/// ```
pub fn rank(records: &[Record], query: &str, geo: Option<&GeoContext>) -> Vec<RankedRecord> {
    Ranker::default().rank(records, query, geo)
}

/// A ranker bound to one immutable configuration.
///
/// Holds no state besides the config, so one instance can serve any number
/// of threads.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankingConfig,
}

impl Ranker {
    /// The config is taken as-is. Degenerate values never produce NaN scores,
    /// but use [`Ranker::try_new`] for configs that came from user input.
    pub fn new(config: RankingConfig) -> Self {
        Ranker { config }
    }

    /// Validate `config`, then build a ranker from it.
    pub fn try_new(config: RankingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Ranker { config })
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Relevance ranking, then the geo stage when `geo` is given.
    pub fn rank(
        &self,
        records: &[Record],
        query: &str,
        geo: Option<&GeoContext>,
    ) -> Vec<RankedRecord> {
        let ranked = self.rank_by_relevance(records, query);
        match geo {
            Some(geo) => apply_geo(ranked, geo),
            None => ranked,
        }
    }

    /// Keyword/quality ranking. Returns every input record.
    pub fn rank_by_relevance(&self, records: &[Record], query: &str) -> Vec<RankedRecord> {
        if query.trim().is_empty() {
            tracing::trace!(records = records.len(), "blank query, ranking by rating");
            return self.rank_by_rating(records);
        }

        let keywords = tokenize_query_with(query, &self.config.tokenizer);
        tracing::debug!(
            records = records.len(),
            keywords = keywords.len(),
            "ranking by relevance"
        );

        let mut scored = self.score_all(records, &keywords);
        contracts::check_scores_in_unit_range(&scored);
        sort_scored(&mut scored);

        let ranked: Vec<RankedRecord> = scored
            .into_iter()
            .map(|s| RankedRecord {
                record: s.record.clone(),
                score: Some(s.score),
                distance_km: None,
            })
            .collect();

        // INVARIANT: NO_RECORD_DROPPED
        contracts::check_same_length(records.len(), ranked.len());
        ranked
    }

    /// Pure distance sort, no query involved. Records keep input order
    /// among equal distances.
    pub fn rank_by_distance(&self, records: &[Record], geo: &GeoContext) -> Vec<RankedRecord> {
        let ranked = records.iter().cloned().map(RankedRecord::unscored).collect();
        apply_geo(ranked, geo)
    }

    /// Highest raw rating first; equal ratings keep input order. NaN ratings
    /// sort with the lowest.
    fn rank_by_rating(&self, records: &[Record]) -> Vec<RankedRecord> {
        let mut ordered: Vec<&Record> = records.iter().collect();
        ordered.sort_by(|a, b| rating_key(b.rating).total_cmp(&rating_key(a.rating)));
        ordered
            .into_iter()
            .cloned()
            .map(RankedRecord::unscored)
            .collect()
    }

    fn score_one<'a>(&self, position: usize, record: &'a Record, keywords: &[String]) -> ScoredRecord<'a> {
        let keyword = keyword_score_with(
            record,
            keywords,
            &self.config.fields,
            self.config.tokenizer.fold_diacritics,
        );
        let quality = quality_score(record.rating, self.config.max_rating);
        let (score, tiebreak) = blend(keyword, quality, &self.config.blend);
        ScoredRecord {
            record,
            score,
            tiebreak,
            position,
        }
    }

    #[cfg(feature = "parallel")]
    fn score_all<'a>(&self, records: &'a [Record], keywords: &[String]) -> Vec<ScoredRecord<'a>> {
        if records.len() < PARALLEL_THRESHOLD {
            return self.score_sequential(records, keywords);
        }
        records
            .par_iter()
            .enumerate()
            .map(|(position, record)| self.score_one(position, record, keywords))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all<'a>(&self, records: &'a [Record], keywords: &[String]) -> Vec<ScoredRecord<'a>> {
        self.score_sequential(records, keywords)
    }

    fn score_sequential<'a>(&self, records: &'a [Record], keywords: &[String]) -> Vec<ScoredRecord<'a>> {
        records
            .iter()
            .enumerate()
            .map(|(position, record)| self.score_one(position, record, keywords))
            .collect()
    }
}

fn rating_key(rating: f64) -> f64 {
    if rating.is_nan() {
        f64::NEG_INFINITY
    } else {
        rating
    }
}
