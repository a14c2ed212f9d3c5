//! Parallel alternative analyzers sharing one index partition.

use crate::analysis::analyzer::Analyzer;
use crate::analysis::position::SymbolPosition;
use crate::analysis::sequence_key::SequenceKey;
use crate::analysis::symbol::Symbol;
use crate::analysis::token::Token;

/// Apply every child to the same input and union the tokens in child order.
pub(crate) fn analyze<C: Symbol>(
    children: &[Analyzer],
    input: &[SymbolPosition<C>],
) -> Vec<Token<C>> {
    children
        .iter()
        .flat_map(|child| child.analyze(input))
        .collect()
}

/// Union of every child's query expansion, in child order.
pub(crate) fn analyze_query<C: Symbol>(
    children: &[Analyzer],
    key: &SequenceKey<C>,
) -> Vec<SequenceKey<C>> {
    children
        .iter()
        .flat_map(|child| child.analyze_query(key.clone()))
        .collect()
}
