//! Analyzers turning positioned sequences into tokens.
//!
//! An [`Analyzer`] is an immutable value from a closed set of variants.
//! Each variant applies its fuzziness at exactly one side of the search:
//!
//! | Variant | Index time | Query time |
//! |---|---|---|
//! | `Exact` | whole input | identity |
//! | `FrontNGram` | truncations from the end | identity |
//! | `BackNGram` | truncations from the start | identity |
//! | `SingleDeletions` | input minus one symbol, for every symbol | identity |
//! | `SingleInsertions` | whole input | query minus one symbol, for every symbol |
//! | `Inverse` | reversed input | reversed query |
//! | `LowerCase` | case-folded input | identity |
//! | `Chain` | stages applied one after another | stages applied one after another |
//! | `Composite` | union of all children | union of all children |

pub mod chain;
pub mod composite;
pub mod edit;
pub mod exact;
pub mod inverse;
pub mod lowercase;
pub mod ngram;

use serde::{Deserialize, Serialize};

use crate::analysis::analysis_type::AnalysisType;
use crate::analysis::position::SymbolPosition;
use crate::analysis::sequence_key::SequenceKey;
use crate::analysis::symbol::Symbol;
use crate::analysis::token::Token;

/// A sequence analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analyzer {
    /// One token holding the whole input.
    Exact,
    /// Prefix truncation: emits the input and every shorter prefix.
    #[serde(rename = "front_ngram")]
    FrontNGram,
    /// Suffix truncation: emits the input and every shorter suffix.
    #[serde(rename = "back_ngram")]
    BackNGram,
    /// Indexes every variant of the input with one symbol deleted.
    SingleDeletions,
    /// Expands queries to every variant with one symbol deleted, which
    /// tolerates one inserted symbol relative to the indexed data.
    SingleInsertions,
    /// Reversed input and reversed queries.
    Inverse,
    /// Case-folded input.
    LowerCase,
    /// Stages applied sequentially, each re-analyzing the previous output.
    Chain(Vec<Analyzer>),
    /// Children applied independently to the same input.
    Composite(Vec<Analyzer>),
}

impl Analyzer {
    /// Create a chain from the given stages.
    pub fn chain<I: IntoIterator<Item = Analyzer>>(stages: I) -> Self {
        Analyzer::Chain(stages.into_iter().collect())
    }

    /// Create a composite from the given children.
    pub fn composite<I: IntoIterator<Item = Analyzer>>(children: I) -> Self {
        Analyzer::Composite(children.into_iter().collect())
    }

    /// Matches sequences by their suffixes.
    pub fn from_back() -> Self {
        Analyzer::BackNGram
    }

    /// Matches any contiguous sub-sequence.
    pub fn sub_sequences() -> Self {
        Analyzer::chain([Analyzer::FrontNGram, Analyzer::BackNGram])
    }

    /// Matches any contiguous sub-sequence of the input with one symbol
    /// deleted.
    pub fn deletions() -> Self {
        Analyzer::chain([
            Analyzer::SingleDeletions,
            Analyzer::FrontNGram,
            Analyzer::BackNGram,
        ])
    }

    /// Matches any contiguous sub-sequence while tolerating one inserted
    /// query symbol.
    pub fn insertions() -> Self {
        Analyzer::chain([
            Analyzer::SingleInsertions,
            Analyzer::FrontNGram,
            Analyzer::BackNGram,
        ])
    }

    /// Matches any contiguous sub-sequence of the reversed input.
    pub fn inverse_sub_sequences() -> Self {
        Analyzer::chain([Analyzer::Inverse, Analyzer::FrontNGram, Analyzer::BackNGram])
    }

    /// Short name of this analyzer, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Analyzer::Exact => "exact",
            Analyzer::FrontNGram => "front_ngram",
            Analyzer::BackNGram => "back_ngram",
            Analyzer::SingleDeletions => "single_deletions",
            Analyzer::SingleInsertions => "single_insertions",
            Analyzer::Inverse => "inverse",
            Analyzer::LowerCase => "lower_case",
            Analyzer::Chain(_) => "chain",
            Analyzer::Composite(_) => "composite",
        }
    }

    /// The structural type of this analyzer.
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            Analyzer::Exact => AnalysisType::Exact,
            Analyzer::FrontNGram => AnalysisType::FrontNGram,
            Analyzer::BackNGram => AnalysisType::BackNGram,
            Analyzer::SingleDeletions => AnalysisType::Deletion,
            Analyzer::SingleInsertions => AnalysisType::Insertion,
            Analyzer::Inverse => AnalysisType::Inverse,
            Analyzer::LowerCase => AnalysisType::LowerCase,
            Analyzer::Chain(stages) => {
                AnalysisType::Chain(stages.iter().map(Analyzer::analysis_type).collect())
            }
            Analyzer::Composite(children) => {
                AnalysisType::Composite(children.iter().map(Analyzer::analysis_type).collect())
            }
        }
    }

    /// Index-time transform of a positioned sequence into tokens.
    ///
    /// The input is left untouched, so the same input can be re-analyzed.
    pub fn analyze<C: Symbol>(&self, input: &[SymbolPosition<C>]) -> Vec<Token<C>> {
        match self {
            Analyzer::Exact | Analyzer::SingleInsertions => exact::analyze(input),
            Analyzer::FrontNGram => ngram::analyze_front(input),
            Analyzer::BackNGram => ngram::analyze_back(input),
            Analyzer::SingleDeletions => edit::analyze_deletions(input),
            Analyzer::Inverse => inverse::analyze(input),
            Analyzer::LowerCase => lowercase::analyze(input),
            Analyzer::Chain(stages) => chain::analyze(stages, input),
            Analyzer::Composite(children) => composite::analyze(children, input),
        }
    }

    /// Query-time expansion of a lookup key into candidate keys.
    pub fn analyze_query<C: Symbol>(&self, key: SequenceKey<C>) -> Vec<SequenceKey<C>> {
        match self {
            Analyzer::SingleInsertions => edit::expand_insertions(&key),
            Analyzer::Inverse => vec![key.inverse()],
            Analyzer::Chain(stages) => chain::analyze_query(stages, key),
            Analyzer::Composite(children) => composite::analyze_query(children, &key),
            Analyzer::Exact
            | Analyzer::FrontNGram
            | Analyzer::BackNGram
            | Analyzer::SingleDeletions
            | Analyzer::LowerCase => vec![key],
        }
    }
}
