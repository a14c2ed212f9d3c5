//! The collector: analyzer registry, ingestion and query entry points.
//!
//! A [`Collector`] owns a list of analyzers, each feeding its own index
//! partition. Ingesting a sequence runs it through every registered
//! analyzer; matching expands the query through the same analyzers and
//! looks the resulting keys up in their partitions.
//!
//! ```
//! use seqdex::Collector;
//!
//! let collector: Collector<char, u32> = Collector::builder()
//!     .with_sub_sequence_analysis()
//!     .build()
//!     .unwrap();
//! collector.analyze_text("abcdefg", 7);
//!
//! let results = collector.matcher().match_text("cde");
//! assert_eq!(*results[0].reference(), 7);
//! assert_eq!(collector.matcher().matching_depth_text("cdx"), 2);
//! ```

pub mod config;
pub mod matcher;
pub mod metrics;
pub mod registry;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analysis_type::AnalysisType;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::position::{SymbolPosition, positioned};
use crate::analysis::symbol::Symbol;
use crate::error::{Result, SeqdexError};
use crate::join::{self, JoinMatch};
use crate::scoring::{MatchingTokenAndStatistics, StartPosition};

use self::config::CollectorConfig;
use self::matcher::Matcher;
use self::metrics::Metrics;
use self::registry::AnalyzerRegistry;

/// Predicate deciding whether a whole sequence is ingested.
pub type SequenceFilter<C> = Arc<dyn Fn(&[C]) -> bool + Send + Sync>;

/// Transform applied to the positioned sequence before analysis.
///
/// It runs after boundary flags are assigned and after the sequence limit,
/// so it sees the flags of the full input.
pub type SequenceModifier<C> =
    Arc<dyn Fn(Vec<SymbolPosition<C>>) -> Vec<SymbolPosition<C>> + Send + Sync>;

/// Key and occurrence counts of one index partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionStats {
    pub analysis_type: AnalysisType,
    /// Number of distinct keys.
    pub key_count: usize,
    /// Number of stored occurrences.
    pub occurrence_count: usize,
}

/// Counters describing a collector's contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorStats {
    /// Sequences accepted by the filter and ingested.
    pub sequences_ingested: u64,
    /// Per-partition counts, in registration order.
    pub partitions: Vec<PartitionStats>,
}

impl CollectorStats {
    pub fn total_keys(&self) -> usize {
        self.partitions.iter().map(|p| p.key_count).sum()
    }

    pub fn total_occurrences(&self) -> usize {
        self.partitions.iter().map(|p| p.occurrence_count).sum()
    }
}

/// An in-memory, analyzer-driven sequence index.
///
/// `C` is the symbol alphabet and `R` the opaque reference attached to
/// every ingested sequence. All operations take `&self`; ingestion and
/// matching may run concurrently from many threads.
pub struct Collector<C, R> {
    config: CollectorConfig,
    registry: AnalyzerRegistry<C, R>,
    sequence_filter: Option<SequenceFilter<C>>,
    sequence_modifier: Option<SequenceModifier<C>>,
    ingested: AtomicU64,
}

impl<C: Symbol, R: Clone> Collector<C, R> {
    /// Create an empty collector with no analyzers registered.
    pub fn new(config: CollectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Collector {
            registry: AnalyzerRegistry::new(config.shard_count),
            config,
            sequence_filter: None,
            sequence_modifier: None,
            ingested: AtomicU64::new(0),
        })
    }

    pub fn builder() -> CollectorBuilder<C, R> {
        CollectorBuilder::default()
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Register an analyzer with a fresh index partition.
    ///
    /// Sequences ingested before the registration are not re-analyzed.
    /// Chains without stages, at any depth, are rejected.
    pub fn add_analyzer(&self, analyzer: Analyzer) -> Result<&Self> {
        check_analyzer(&analyzer)?;
        let ingested = self.ingested.load(Ordering::Relaxed);
        if ingested > 0 {
            warn!(
                "registering {} analyzer after {ingested} sequences were ingested; earlier sequences are not indexed by it",
                analyzer.name()
            );
        }
        let registered = self.registry.register(analyzer);
        debug!(
            "registered analyzer {} as partition {}",
            registered.analysis_type(),
            self.registry.len() - 1
        );
        Ok(self)
    }

    /// Register a chain of the given stages.
    pub fn add_analyzer_chain<I: IntoIterator<Item = Analyzer>>(&self, stages: I) -> Result<&Self> {
        self.add_analyzer(Analyzer::chain(stages))
    }

    /// Ingest one sequence for `reference`.
    ///
    /// Sequences rejected by the sequence filter are skipped entirely.
    /// Boundary flags are computed against the full sequence before the
    /// sequence limit truncates it and the sequence modifier runs.
    pub fn analyze(&self, sequence: &[C], reference: R) {
        if let Some(filter) = &self.sequence_filter
            && !filter(sequence)
        {
            trace!("sequence of length {} rejected by filter", sequence.len());
            return;
        }

        let mut positions = positioned(sequence);
        if let Some(limit) = self.config.sequence_limit {
            positions.truncate(limit);
        }
        if let Some(modifier) = &self.sequence_modifier {
            positions = modifier(positions);
        }

        for registered in self.registry.snapshot() {
            for token in registered.analyzer().analyze(&positions) {
                registered.index().insert(Arc::new(token), reference.clone());
            }
        }
        self.ingested.fetch_add(1, Ordering::Relaxed);
        trace!("ingested sequence of length {}", sequence.len());
    }

    /// Ingest every sequence, all for the same reference.
    pub fn analyze_all<I, S>(&self, sequences: I, reference: R)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[C]>,
    {
        for sequence in sequences {
            self.analyze(sequence.as_ref(), reference.clone());
        }
    }

    /// Ingest `(sequence, reference)` pairs on the rayon thread pool.
    pub fn analyze_parallel<I, S>(&self, items: I)
    where
        I: IntoParallelIterator<Item = (S, R)>,
        S: AsRef<[C]> + Send,
        R: Send + Sync,
    {
        items
            .into_par_iter()
            .for_each(|(sequence, reference)| self.analyze(sequence.as_ref(), reference));
    }

    /// A matcher over the live indexes with constant scoring and no type
    /// filter.
    pub fn matcher(&self) -> Matcher<'_, C, R> {
        Matcher::new(&self.registry)
    }

    /// Snapshot of every stored occurrence, ordered by descending token
    /// start position.
    pub fn extract_metrics(&self) -> Metrics<C, R> {
        Metrics::new(self.matcher().match_all(&StartPosition))
    }

    /// Snapshot restricted to partitions of `analysis_type`.
    pub fn extract_metrics_for(&self, analysis_type: &AnalysisType) -> Metrics<C, R> {
        Metrics::new(
            self.matcher()
                .with_analysis_type(analysis_type.clone())
                .match_all(&StartPosition),
        )
    }

    /// Snapshot passed through `modifier` before it is frozen.
    pub fn extract_metrics_with<F, I>(&self, modifier: F) -> Metrics<C, R>
    where
        F: FnOnce(std::vec::IntoIter<MatchingTokenAndStatistics<C, R>>) -> I,
        I: IntoIterator<Item = MatchingTokenAndStatistics<C, R>>,
    {
        let results = self.matcher().match_all(&StartPosition);
        Metrics::new(modifier(results.into_iter()).into_iter().collect())
    }

    pub fn has_analysis_type(&self, analysis_type: &AnalysisType) -> bool {
        self.registry.has_analysis_type(analysis_type)
    }

    /// Analysis types of the registered analyzers, in registration order.
    pub fn analysis_types(&self) -> Vec<AnalysisType> {
        self.registry
            .snapshot()
            .iter()
            .map(|r| r.analysis_type().as_ref().clone())
            .collect()
    }

    /// Distinct key count per partition, in registration order.
    pub fn index_sizes(&self) -> Vec<usize> {
        self.registry
            .snapshot()
            .iter()
            .map(|r| r.index().len())
            .collect()
    }

    pub fn stats(&self) -> CollectorStats {
        let partitions = self
            .registry
            .snapshot()
            .iter()
            .map(|r| PartitionStats {
                analysis_type: r.analysis_type().as_ref().clone(),
                key_count: r.index().len(),
                occurrence_count: r.index().occurrence_count(),
            })
            .collect();
        CollectorStats {
            sequences_ingested: self.ingested.load(Ordering::Relaxed),
            partitions,
        }
    }

    /// Join this collector with `other` on partitions of `analysis_type`.
    pub fn join<R2: Clone>(
        &self,
        other: &Collector<C, R2>,
        analysis_type: &AnalysisType,
    ) -> Vec<JoinMatch<C, R, R2>> {
        join::join(self, other, analysis_type)
    }
}

impl<C: Symbol + From<char>, R: Clone> Collector<C, R> {
    /// Ingest the characters of `text`.
    pub fn analyze_text(&self, text: &str, reference: R) {
        let sequence: Vec<C> = text.chars().map(C::from).collect();
        self.analyze(&sequence, reference);
    }
}

impl<C, R> fmt::Debug for Collector<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collector")
            .field("config", &self.config)
            .field("has_sequence_filter", &self.sequence_filter.is_some())
            .field("has_sequence_modifier", &self.sequence_modifier.is_some())
            .field("ingested", &self.ingested.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

fn check_analyzer(analyzer: &Analyzer) -> Result<()> {
    match analyzer {
        Analyzer::Chain(stages) if stages.is_empty() => Err(SeqdexError::invalid_argument(
            "an analyzer chain needs at least one stage",
        )),
        Analyzer::Chain(children) | Analyzer::Composite(children) => {
            children.iter().try_for_each(check_analyzer)
        }
        _ => Ok(()),
    }
}

/// Builder for [`Collector`].
///
/// The built collector always registers an [`Analyzer::Exact`] partition
/// first, followed by the requested analyzers in call order.
pub struct CollectorBuilder<C, R> {
    config: CollectorConfig,
    analyzers: Vec<Analyzer>,
    sequence_filter: Option<SequenceFilter<C>>,
    sequence_modifier: Option<SequenceModifier<C>>,
    _reference: PhantomData<fn() -> R>,
}

impl<C, R> Default for CollectorBuilder<C, R> {
    fn default() -> Self {
        CollectorBuilder {
            config: CollectorConfig::default(),
            analyzers: Vec::new(),
            sequence_filter: None,
            sequence_modifier: None,
            _reference: PhantomData,
        }
    }
}

impl<C: Symbol, R: Clone> CollectorBuilder<C, R> {
    pub fn with_config(mut self, config: CollectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.config.shard_count = shard_count;
        self
    }

    /// Index at most `limit` leading symbols of each sequence.
    pub fn with_sequence_limit(mut self, limit: usize) -> Self {
        self.config.sequence_limit = Some(limit);
        self
    }

    /// Only ingest sequences for which `filter` returns true.
    pub fn with_sequence_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&[C]) -> bool + Send + Sync + 'static,
    {
        self.sequence_filter = Some(Arc::new(filter));
        self
    }

    /// Rewrite each positioned sequence with `modifier` before analysis.
    pub fn with_sequence_modifier<F>(mut self, modifier: F) -> Self
    where
        F: Fn(Vec<SymbolPosition<C>>) -> Vec<SymbolPosition<C>> + Send + Sync + 'static,
    {
        self.sequence_modifier = Some(Arc::new(modifier));
        self
    }

    pub fn with_analyzer(mut self, analyzer: Analyzer) -> Self {
        self.analyzers.push(analyzer);
        self
    }

    pub fn with_analyzer_chain<I: IntoIterator<Item = Analyzer>>(self, stages: I) -> Self {
        self.with_analyzer(Analyzer::chain(stages))
    }

    pub fn with_from_back_analysis(self) -> Self {
        self.with_analyzer(Analyzer::from_back())
    }

    pub fn with_sub_sequence_analysis(self) -> Self {
        self.with_analyzer(Analyzer::sub_sequences())
    }

    pub fn with_deletions(self) -> Self {
        self.with_analyzer(Analyzer::deletions())
    }

    pub fn with_insertions(self) -> Self {
        self.with_analyzer(Analyzer::insertions())
    }

    pub fn with_inverse_sub_sequence_analysis(self) -> Self {
        self.with_analyzer(Analyzer::inverse_sub_sequences())
    }

    pub fn build(self) -> Result<Collector<C, R>> {
        for analyzer in &self.analyzers {
            check_analyzer(analyzer)?;
        }

        let mut collector = Collector::new(self.config)?;
        collector.sequence_filter = self.sequence_filter;
        collector.sequence_modifier = self.sequence_modifier;
        collector.add_analyzer(Analyzer::Exact)?;
        for analyzer in self.analyzers {
            collector.add_analyzer(analyzer)?;
        }
        Ok(collector)
    }
}
