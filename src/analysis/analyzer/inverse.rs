//! Inverse analysis: the whole input reversed.

use crate::analysis::position::SymbolPosition;
use crate::analysis::token::Token;

/// Emit the reversed input as a single start and terminal token.
pub(crate) fn analyze<C: Clone>(input: &[SymbolPosition<C>]) -> Vec<Token<C>> {
    vec![Token::new(input.iter().rev().cloned().collect(), true, true)]
}
