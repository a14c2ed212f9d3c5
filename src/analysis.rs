//! Sequence analysis module for Seqdex.
//!
//! This module turns raw symbol sequences into the tokens that end up in the
//! inverted indexes, and expands query keys at search time. It includes:
//!
//! - **Symbols**: The alphabet bound and its case-folding hook
//! - **Positions**: Symbols annotated with their ordinal and boundary flags
//! - **Sequence keys**: Value-equal lookup keys for indexing and matching
//! - **Tokens**: Analyzer output units
//! - **Analyzers**: Index-time transforms and query-time expansions
//!
//! # Architecture
//!
//! ```text
//! Sequence → Positioned Symbols → Analyzer → Tokens → SequenceKey (write path)
//! Query → SequenceKey → Analyzer query expansion → SequenceKeys (read path)
//! ```
//!
//! Every analyzer applies its fuzziness either while indexing or while
//! querying, never both.
//!
//! # Examples
//!
//! ```
//! use seqdex::analysis::{Analyzer, position};
//!
//! let symbols: Vec<char> = "abc".chars().collect();
//! let tokens = Analyzer::FrontNGram.analyze(&position::positioned(&symbols));
//! let texts: Vec<String> = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(texts, vec!["abc", "ab", "a"]);
//! ```

pub mod analysis_type;
pub mod analyzer;
pub mod position;
pub mod sequence_key;
pub mod symbol;
pub mod token;

// Re-exports
pub use analysis_type::AnalysisType;
pub use analyzer::Analyzer;
pub use position::SymbolPosition;
pub use sequence_key::SequenceKey;
pub use symbol::Symbol;
pub use token::Token;
