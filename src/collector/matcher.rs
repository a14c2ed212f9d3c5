//! Query side of a collector.
//!
//! A [`Matcher`] is a short-lived view over a collector's registry. It reads
//! the live indexes, so matches reflect whatever has been ingested by the
//! time each shard is visited.

use std::cmp::Ordering;
use std::sync::Arc;

use log::trace;

use crate::analysis::analysis_type::AnalysisType;
use crate::analysis::sequence_key::SequenceKey;
use crate::analysis::symbol::Symbol;
use crate::analysis::token::Token;
use crate::collector::registry::{AnalyzerRegistry, RegisteredAnalyzer};
use crate::scoring::{
    ConstantScore, MatchStatistics, MatchingTokenAndStatistics, ScoringFunction,
};

/// Matches query sequences against a collector's index partitions.
pub struct Matcher<'a, C, R> {
    registry: &'a AnalyzerRegistry<C, R>,
    scoring: Box<dyn ScoringFunction<C> + 'a>,
    analysis_type: Option<AnalysisType>,
}

impl<'a, C: Symbol, R: Clone> Matcher<'a, C, R> {
    pub(crate) fn new(registry: &'a AnalyzerRegistry<C, R>) -> Self {
        Matcher {
            registry,
            scoring: Box::new(ConstantScore::default()),
            analysis_type: None,
        }
    }

    /// Use `scoring` for [`match_sequence`](Self::match_sequence).
    pub fn with_scoring_function<S: ScoringFunction<C> + 'a>(mut self, scoring: S) -> Self {
        self.scoring = Box::new(scoring);
        self
    }

    /// Restrict matching to partitions of the given analysis type.
    pub fn with_analysis_type(mut self, analysis_type: AnalysisType) -> Self {
        self.analysis_type = Some(analysis_type);
        self
    }

    /// Match `query` with the configured scoring function and type filter.
    pub fn match_sequence(&self, query: &[C]) -> Vec<MatchingTokenAndStatistics<C, R>> {
        self.collect_matches(query, self.scoring.as_ref(), self.analysis_type.as_ref())
    }

    /// Match `query` against every partition whose type equals `filter`, or
    /// all partitions when `filter` is `None`.
    ///
    /// Each partition expands the query key with its analyzer's query-time
    /// transform. Every occurrence stored under an expanded key yields one
    /// result. Results are sorted by descending score; ties keep partition
    /// registration order.
    pub fn match_with<S: ScoringFunction<C> + ?Sized>(
        &self,
        query: &[C],
        scoring: &S,
        filter: Option<&AnalysisType>,
    ) -> Vec<MatchingTokenAndStatistics<C, R>> {
        self.collect_matches(query, scoring, filter)
    }

    /// Score every stored occurrence of every selected partition.
    pub fn match_all<S: ScoringFunction<C> + ?Sized>(
        &self,
        scoring: &S,
    ) -> Vec<MatchingTokenAndStatistics<C, R>> {
        let mut results = Vec::new();
        for registered in self.registry.select(self.analysis_type.as_ref()) {
            let index = registered.index();
            let index_size = index.len();
            let mut hits = Vec::new();
            index.for_each_entry(|_, entry| {
                let match_count = entry.count();
                hits.extend(
                    entry
                        .iter()
                        .map(|o| (Arc::clone(o.token()), o.reference().clone(), match_count)),
                );
            });
            score_into(&mut results, &registered, hits, index_size, scoring);
        }
        sort_by_score(&mut results);
        results
    }

    /// Length of the longest query prefix stored verbatim in any selected
    /// partition. Returns 0 when not even the first symbol is indexed.
    ///
    /// Every prefix length is tested, so a gap does not end the search.
    pub fn matching_depth(&self, query: &[C]) -> usize {
        let partitions = self.registry.select(self.analysis_type.as_ref());
        let mut depth = 0;
        let mut prefix = SequenceKey::empty();
        for (length, symbol) in query.iter().enumerate() {
            prefix = prefix.append(symbol.clone());
            if partitions.iter().any(|p| p.index().contains(&prefix)) {
                depth = depth.max(length + 1);
            }
        }
        depth
    }

    fn collect_matches<S: ScoringFunction<C> + ?Sized>(
        &self,
        query: &[C],
        scoring: &S,
        filter: Option<&AnalysisType>,
    ) -> Vec<MatchingTokenAndStatistics<C, R>> {
        let key = SequenceKey::from(query);
        let mut results = Vec::new();

        for registered in self.registry.select(filter) {
            let index = registered.index();
            let index_size = index.len();
            let mut hits = Vec::new();
            for expanded in registered.analyzer().analyze_query(key.clone()) {
                index.visit_entry(&expanded, |entry| {
                    let match_count = entry.count();
                    hits.extend(entry.iter().map(|o| {
                        (Arc::clone(o.token()), o.reference().clone(), match_count)
                    }));
                });
            }
            score_into(&mut results, &registered, hits, index_size, scoring);
        }

        trace!(
            "matched query of length {} to {} occurrences",
            query.len(),
            results.len()
        );
        sort_by_score(&mut results);
        results
    }
}

impl<C: Symbol, R: Clone> Matcher<'_, C, R>
where
    C: From<char>,
{
    /// Match the characters of `text`.
    pub fn match_text(&self, text: &str) -> Vec<MatchingTokenAndStatistics<C, R>> {
        let query: Vec<C> = text.chars().map(C::from).collect();
        self.match_sequence(&query)
    }

    pub fn matching_depth_text(&self, text: &str) -> usize {
        let query: Vec<C> = text.chars().map(C::from).collect();
        self.matching_depth(&query)
    }
}

fn score_into<C: Symbol, R, S: ScoringFunction<C> + ?Sized>(
    results: &mut Vec<MatchingTokenAndStatistics<C, R>>,
    registered: &RegisteredAnalyzer<C, R>,
    hits: Vec<(Arc<Token<C>>, R, usize)>,
    index_size: usize,
    scoring: &S,
) {
    let analysis_type = registered.analysis_type();
    for (token, reference, match_count) in hits {
        let statistics = MatchStatistics::new(
            Arc::clone(&token),
            match_count,
            index_size,
            Arc::clone(analysis_type),
        );
        let score = scoring.score(&statistics);
        results.push(MatchingTokenAndStatistics::new(
            token,
            reference,
            score,
            Arc::clone(analysis_type),
        ));
    }
}

fn sort_by_score<C, R>(results: &mut [MatchingTokenAndStatistics<C, R>]) {
    results.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
}
