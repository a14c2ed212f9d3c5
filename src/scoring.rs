//! Scoring of match results.
//!
//! A [`ScoringFunction`] turns the statistics of one matched occurrence into
//! a score. Results are ordered by descending score, so any function that
//! grows with the relevance of a match can be plugged in. Closures taking
//! `&MatchStatistics<C>` qualify directly.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analysis_type::AnalysisType;
use crate::analysis::token::Token;

/// Statistics describing one matched occurrence, handed to the scoring
/// function.
#[derive(Debug, Clone)]
pub struct MatchStatistics<C> {
    token: Arc<Token<C>>,
    match_count: usize,
    index_size: usize,
    analysis_type: Arc<AnalysisType>,
}

impl<C> MatchStatistics<C> {
    pub fn new(
        token: Arc<Token<C>>,
        match_count: usize,
        index_size: usize,
        analysis_type: Arc<AnalysisType>,
    ) -> Self {
        MatchStatistics {
            token,
            match_count,
            index_size,
            analysis_type,
        }
    }

    /// The stored token that matched.
    pub fn token(&self) -> &Token<C> {
        &self.token
    }

    /// Number of occurrences stored under the matched key.
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Number of distinct keys in the index partition that matched.
    pub fn index_size(&self) -> usize {
        self.index_size
    }

    pub fn analysis_type(&self) -> &AnalysisType {
        &self.analysis_type
    }
}

/// Maps match statistics to a score. Higher scores rank first.
pub trait ScoringFunction<C>: Send + Sync {
    fn score(&self, statistics: &MatchStatistics<C>) -> f64;
}

impl<C, F> ScoringFunction<C> for F
where
    F: Fn(&MatchStatistics<C>) -> f64 + Send + Sync,
{
    fn score(&self, statistics: &MatchStatistics<C>) -> f64 {
        self(statistics)
    }
}

/// Scores every match with the same value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantScore(pub f64);

impl Default for ConstantScore {
    fn default() -> Self {
        ConstantScore(1.0)
    }
}

impl<C> ScoringFunction<C> for ConstantScore {
    fn score(&self, _statistics: &MatchStatistics<C>) -> f64 {
        self.0
    }
}

/// Scores by the number of occurrences stored under the matched key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCount;

impl<C> ScoringFunction<C> for MatchCount {
    fn score(&self, statistics: &MatchStatistics<C>) -> f64 {
        statistics.match_count as f64
    }
}

/// Scores by match count relative to the number of distinct keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelativeFrequency;

impl<C> ScoringFunction<C> for RelativeFrequency {
    fn score(&self, statistics: &MatchStatistics<C>) -> f64 {
        if statistics.index_size == 0 {
            0.0
        } else {
            statistics.match_count as f64 / statistics.index_size as f64
        }
    }
}

/// Scores by the length of the stored token, preferring longer matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenLength;

impl<C> ScoringFunction<C> for TokenLength {
    fn score(&self, statistics: &MatchStatistics<C>) -> f64 {
        statistics.token.len() as f64
    }
}

/// Scores by the position of the first symbol of the stored token.
///
/// Empty tokens score `-1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartPosition;

impl<C> ScoringFunction<C> for StartPosition {
    fn score(&self, statistics: &MatchStatistics<C>) -> f64 {
        statistics
            .token
            .start_position()
            .map_or(-1.0, |position| position as f64)
    }
}

pub fn constant(value: f64) -> ConstantScore {
    ConstantScore(value)
}

pub fn match_count() -> MatchCount {
    MatchCount
}

pub fn relative_frequency() -> RelativeFrequency {
    RelativeFrequency
}

pub fn token_length() -> TokenLength {
    TokenLength
}

pub fn start_position() -> StartPosition {
    StartPosition
}

/// One scored match result.
#[derive(Debug, Clone)]
pub struct MatchingTokenAndStatistics<C, R> {
    token: Arc<Token<C>>,
    reference: R,
    score: f64,
    analysis_type: Arc<AnalysisType>,
}

impl<C, R> MatchingTokenAndStatistics<C, R> {
    pub fn new(
        token: Arc<Token<C>>,
        reference: R,
        score: f64,
        analysis_type: Arc<AnalysisType>,
    ) -> Self {
        MatchingTokenAndStatistics {
            token,
            reference,
            score,
            analysis_type,
        }
    }

    pub fn token(&self) -> &Token<C> {
        &self.token
    }

    /// Shared handle to the stored token.
    pub fn token_arc(&self) -> &Arc<Token<C>> {
        &self.token
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn analysis_type(&self) -> &AnalysisType {
        &self.analysis_type
    }

    pub fn has_analysis_type(&self, analysis_type: &AnalysisType) -> bool {
        *self.analysis_type == *analysis_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::position::positioned;

    fn statistics(text: &str, match_count: usize, index_size: usize) -> MatchStatistics<char> {
        let symbols: Vec<char> = text.chars().collect();
        let positions = positioned(&symbols)[1..].to_vec();
        MatchStatistics::new(
            Arc::new(Token::new(positions, true, true)),
            match_count,
            index_size,
            Arc::new(AnalysisType::Exact),
        )
    }

    #[test]
    fn test_builtin_scorers() {
        let stats = statistics("abcd", 3, 12);

        assert_eq!(constant(2.5).score(&stats), 2.5);
        assert_eq!(ConstantScore::default().score(&stats), 1.0);
        assert_eq!(match_count().score(&stats), 3.0);
        assert_eq!(relative_frequency().score(&stats), 0.25);
        assert_eq!(token_length().score(&stats), 3.0);
        assert_eq!(start_position().score(&stats), 2.0);
    }

    #[test]
    fn test_degenerate_statistics() {
        let empty = MatchStatistics::new(
            Arc::new(Token::<char>::new(Vec::new(), true, true)),
            0,
            0,
            Arc::new(AnalysisType::Exact),
        );
        assert_eq!(relative_frequency().score(&empty), 0.0);
        assert_eq!(start_position().score(&empty), -1.0);
    }

    #[test]
    fn test_closure_scorer() {
        let scorer = |s: &MatchStatistics<char>| (s.match_count() * 10) as f64;
        assert_eq!(scorer.score(&statistics("ab", 4, 1)), 40.0);
    }

    #[test]
    fn test_result_analysis_type() {
        let stats = statistics("ab", 1, 1);
        let result = MatchingTokenAndStatistics::new(
            Arc::new(stats.token().clone()),
            "ref",
            1.0,
            Arc::new(AnalysisType::Inverse),
        );
        assert!(result.has_analysis_type(&AnalysisType::Inverse));
        assert!(!result.has_analysis_type(&AnalysisType::Exact));
        assert_eq!(result.score(), 1.0);
    }
}
