//! Token representation produced by analyzers.

use serde::{Deserialize, Serialize};

use crate::analysis::position::SymbolPosition;
use crate::analysis::sequence_key::SequenceKey;

/// An analyzer output unit: a (sub/transformed) positioned sequence plus two
/// boundary flags describing how it relates to the original sequence.
///
/// The flags are analyzer-defined; see the individual
/// [`Analyzer`](crate::analysis::Analyzer) variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token<C> {
    positions: Vec<SymbolPosition<C>>,
    start: bool,
    terminal: bool,
}

impl<C> Token<C> {
    /// Create a new token.
    pub fn new(positions: Vec<SymbolPosition<C>>, start: bool, terminal: bool) -> Self {
        Token {
            positions,
            start,
            terminal,
        }
    }

    /// Get the positioned symbols of this token.
    pub fn positions(&self) -> &[SymbolPosition<C>] {
        &self.positions
    }

    /// Consume the token and return its positioned symbols.
    pub fn into_positions(self) -> Vec<SymbolPosition<C>> {
        self.positions
    }

    pub fn is_start(&self) -> bool {
        self.start
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of the first symbol, if any.
    pub fn start_position(&self) -> Option<usize> {
        self.positions.first().map(SymbolPosition::position)
    }

    /// Position of the last symbol, if any.
    pub fn end_position(&self) -> Option<usize> {
        self.positions.last().map(SymbolPosition::position)
    }
}

impl<C: Clone> Token<C> {
    /// The symbols of this token without positions.
    pub fn code_sequence(&self) -> Vec<C> {
        self.positions.iter().map(|p| p.symbol().clone()).collect()
    }

    /// The lookup key this token is indexed under.
    pub fn sequence_key(&self) -> SequenceKey<C> {
        SequenceKey::new(self.code_sequence())
    }
}

impl Token<char> {
    /// Render a character token as a string.
    pub fn text(&self) -> String {
        self.positions.iter().map(|p| *p.symbol()).collect()
    }
}
