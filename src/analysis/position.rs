//! Symbols annotated with their ingestion-time ordinal.

use serde::{Deserialize, Serialize};

/// One symbol together with its ordinal and the boundary flags of the
/// original, untransformed sequence.
///
/// The flags are computed once when a sequence is ingested. Analyzers move
/// positioned symbols around but never recompute them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolPosition<C> {
    symbol: C,
    position: usize,
    is_start: bool,
    is_terminal: bool,
}

impl<C> SymbolPosition<C> {
    /// Create a new positioned symbol.
    pub fn new(symbol: C, position: usize, is_start: bool, is_terminal: bool) -> Self {
        SymbolPosition {
            symbol,
            position,
            is_start,
            is_terminal,
        }
    }

    /// Get the symbol.
    pub fn symbol(&self) -> &C {
        &self.symbol
    }

    /// Get the ordinal assigned at ingestion.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether this symbol opened the original sequence.
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// Whether this symbol closed the original sequence.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Replace the symbol, keeping the position and boundary flags.
    pub fn with_symbol(&self, symbol: C) -> Self {
        SymbolPosition {
            symbol,
            position: self.position,
            is_start: self.is_start,
            is_terminal: self.is_terminal,
        }
    }

    /// Consume and return the symbol.
    pub fn into_symbol(self) -> C {
        self.symbol
    }
}

/// Annotate a raw sequence with ordinals and boundary flags.
///
/// The ordinal counter is advanced before it is read, so positions start at
/// 1, `is_terminal` holds for position `len - 1` and `is_start` for position
/// 0 (which is never assigned). Token start/end positions and the metrics
/// snapshot ordering depend on this numbering.
pub fn positioned<C: Clone>(symbols: &[C]) -> Vec<SymbolPosition<C>> {
    let len = symbols.len();
    symbols
        .iter()
        .enumerate()
        .map(|(index, symbol)| {
            let position = index + 1;
            SymbolPosition::new(symbol.clone(), position, position == 0, position + 1 == len)
        })
        .collect()
}
