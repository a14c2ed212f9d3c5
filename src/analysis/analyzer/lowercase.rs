//! Lower-case analysis: every symbol case-folded.

use crate::analysis::position::SymbolPosition;
use crate::analysis::symbol::Symbol;
use crate::analysis::token::Token;

/// Emit the case-folded input as a single start and terminal token.
pub(crate) fn analyze<C: Symbol>(input: &[SymbolPosition<C>]) -> Vec<Token<C>> {
    let folded = input
        .iter()
        .map(|p| p.with_symbol(p.symbol().fold_case()))
        .collect();
    vec![Token::new(folded, true, true)]
}
