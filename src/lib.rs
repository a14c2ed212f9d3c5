//! # Seqdex
//!
//! An in-memory approximate sequence search library.
//!
//! ## Features
//!
//! - Index any ordered sequence of symbols against an opaque reference
//! - Pluggable analyzers: exact, prefix and suffix truncation, single
//!   deletion, single insertion, reversal and case folding
//! - Sequential (chain) and parallel (composite) analyzer composition
//! - Sharded, lock-based indexes safe for concurrent ingestion
//! - Pluggable scoring, prefix matching depth and cost-aware joins
//!
//! ```
//! use seqdex::{AnalysisType, Collector};
//!
//! let collector: Collector<char, &str> = Collector::builder()
//!     .with_deletions()
//!     .build()
//!     .unwrap();
//! collector.analyze_text("abcdefgh", "doc-1");
//!
//! // "abdef" only exists with the "c" deleted.
//! let hits = collector
//!     .matcher()
//!     .with_analysis_type(seqdex::Analyzer::deletions().analysis_type())
//!     .match_text("abdef");
//! assert_eq!(*hits[0].reference(), "doc-1");
//! assert!(collector.has_analysis_type(&AnalysisType::Exact));
//! ```

pub mod analysis;
pub mod collector;
mod error;
pub mod index;
pub mod join;
pub mod scoring;

// Re-exports for the public API
pub use analysis::{AnalysisType, Analyzer, SequenceKey, Symbol, SymbolPosition, Token};
pub use collector::config::{CollectorConfig, CollectorConfigBuilder};
pub use collector::matcher::Matcher;
pub use collector::metrics::Metrics;
pub use collector::{
    Collector, CollectorBuilder, CollectorStats, PartitionStats, SequenceFilter, SequenceModifier,
};
pub use error::{Result, SeqdexError};
pub use join::{JoinMatch, join};
pub use scoring::{MatchStatistics, MatchingTokenAndStatistics, ScoringFunction};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
