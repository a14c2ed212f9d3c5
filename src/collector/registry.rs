//! Append-only registry of analyzers and their index partitions.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::analysis::analysis_type::AnalysisType;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::symbol::Symbol;
use crate::index::SequenceIndex;

/// An analyzer together with the index partition it feeds.
#[derive(Debug)]
pub struct RegisteredAnalyzer<C, R> {
    analyzer: Analyzer,
    analysis_type: Arc<AnalysisType>,
    index: SequenceIndex<C, R>,
}

impl<C: Symbol, R> RegisteredAnalyzer<C, R> {
    fn new(analyzer: Analyzer, shard_count: usize) -> Self {
        let analysis_type = Arc::new(analyzer.analysis_type());
        RegisteredAnalyzer {
            analyzer,
            analysis_type,
            index: SequenceIndex::new(shard_count),
        }
    }
}

impl<C, R> RegisteredAnalyzer<C, R> {
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn analysis_type(&self) -> &Arc<AnalysisType> {
        &self.analysis_type
    }

    pub fn index(&self) -> &SequenceIndex<C, R> {
        &self.index
    }

    pub fn matches_type(&self, filter: Option<&AnalysisType>) -> bool {
        filter.is_none_or(|t| *self.analysis_type == *t)
    }
}

/// Registered analyzers in registration order.
///
/// Structurally equal analyzers registered twice get two partitions.
#[derive(Debug)]
pub struct AnalyzerRegistry<C, R> {
    entries: RwLock<Vec<Arc<RegisteredAnalyzer<C, R>>>>,
    shard_count: usize,
}

impl<C: Symbol, R> AnalyzerRegistry<C, R> {
    pub fn new(shard_count: usize) -> Self {
        AnalyzerRegistry {
            entries: RwLock::new(Vec::new()),
            shard_count,
        }
    }

    /// Append an analyzer with a fresh, empty index partition.
    pub fn register(&self, analyzer: Analyzer) -> Arc<RegisteredAnalyzer<C, R>> {
        let registered = Arc::new(RegisteredAnalyzer::new(analyzer, self.shard_count));
        self.entries.write().push(Arc::clone(&registered));
        registered
    }

    /// The analyzers registered so far.
    ///
    /// The registry lock is released on return, so ingestion and matching
    /// never hold it while touching an index.
    pub fn snapshot(&self) -> Vec<Arc<RegisteredAnalyzer<C, R>>> {
        self.entries.read().clone()
    }

    /// Registered analyzers whose type equals `filter`, or all when unset.
    pub fn select(&self, filter: Option<&AnalysisType>) -> Vec<Arc<RegisteredAnalyzer<C, R>>> {
        self.entries
            .read()
            .iter()
            .filter(|entry| entry.matches_type(filter))
            .cloned()
            .collect()
    }

    pub fn has_analysis_type(&self, analysis_type: &AnalysisType) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| *entry.analysis_type == *analysis_type)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
