//! Single-edit tolerance.
//!
//! Deletions are materialized at index time, insertions are handled by
//! expanding the query. Either way the edited variants of a length-`n`
//! sequence are the `n` sequences with exactly one position omitted.

use crate::analysis::position::SymbolPosition;
use crate::analysis::sequence_key::SequenceKey;
use crate::analysis::token::Token;

/// Emit one token per omitted position.
///
/// A token is flagged as start unless the first symbol was omitted, and as
/// terminal unless the last symbol was omitted.
pub(crate) fn analyze_deletions<C: Clone>(input: &[SymbolPosition<C>]) -> Vec<Token<C>> {
    let n = input.len();
    (0..n)
        .map(|omitted| {
            let mut reduced = input.to_vec();
            reduced.remove(omitted);
            Token::new(reduced, omitted != 0, omitted != n - 1)
        })
        .collect()
}

/// Expand a query key into every variant with one symbol omitted.
pub(crate) fn expand_insertions<C: Clone>(key: &SequenceKey<C>) -> Vec<SequenceKey<C>> {
    (0..key.len()).map(|omitted| key.without(omitted)).collect()
}
