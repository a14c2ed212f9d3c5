//! Canonical lookup keys for symbol sequences.

use serde::{Deserialize, Serialize};

/// An immutable, value-equal symbol sequence used as the index key.
///
/// Equality, hashing and ordering depend on the symbols only. Ordering is
/// lexicographic over the symbol order. Transformations return new keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceKey<C> {
    symbols: Vec<C>,
}

impl<C> SequenceKey<C> {
    /// Create a key from an owned symbol list.
    pub fn new(symbols: Vec<C>) -> Self {
        SequenceKey { symbols }
    }

    /// Create the empty key.
    pub fn empty() -> Self {
        SequenceKey {
            symbols: Vec::new(),
        }
    }

    /// Get the symbols of this key.
    pub fn symbols(&self) -> &[C] {
        &self.symbols
    }

    /// Number of symbols in this key.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether this key has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Consume the key and return its symbols.
    pub fn into_symbols(self) -> Vec<C> {
        self.symbols
    }
}

impl<C: Clone> SequenceKey<C> {
    /// Return a new key with `symbol` appended.
    pub fn append(&self, symbol: C) -> Self {
        let mut symbols = Vec::with_capacity(self.symbols.len() + 1);
        symbols.extend_from_slice(&self.symbols);
        symbols.push(symbol);
        SequenceKey { symbols }
    }

    /// Return a new key with the symbols in reverse order.
    pub fn inverse(&self) -> Self {
        SequenceKey {
            symbols: self.symbols.iter().rev().cloned().collect(),
        }
    }

    /// Return a new key with the symbol at `index` removed.
    ///
    /// An out-of-range index yields an unchanged copy.
    pub fn without(&self, index: usize) -> Self {
        SequenceKey {
            symbols: self
                .symbols
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, symbol)| symbol.clone())
                .collect(),
        }
    }
}

impl SequenceKey<char> {
    /// Render a character key as a string.
    pub fn text(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl<C> Default for SequenceKey<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> From<Vec<C>> for SequenceKey<C> {
    fn from(symbols: Vec<C>) -> Self {
        SequenceKey::new(symbols)
    }
}

impl<C: Clone> From<&[C]> for SequenceKey<C> {
    fn from(symbols: &[C]) -> Self {
        SequenceKey::new(symbols.to_vec())
    }
}

impl From<&str> for SequenceKey<char> {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl<C> FromIterator<C> for SequenceKey<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        SequenceKey::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_value_equality() {
        let a = SequenceKey::from("abc");
        let b: SequenceKey<char> = vec!['a', 'b', 'c'].into();
        assert_eq!(a, b);

        let set: HashSet<_> = [a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_ne!(a, SequenceKey::from("abd"));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut keys = vec![
            SequenceKey::from("b"),
            SequenceKey::from("ab"),
            SequenceKey::from("a"),
            SequenceKey::from(""),
        ];
        keys.sort();
        let texts: Vec<String> = keys.iter().map(|k| k.text()).collect();
        assert_eq!(texts, vec!["", "a", "ab", "b"]);
    }

    #[test]
    fn test_append_returns_new_key() {
        let base = SequenceKey::from("ab");
        let appended = base.append('c');
        assert_eq!(base.text(), "ab");
        assert_eq!(appended.text(), "abc");
        assert_eq!(SequenceKey::empty().append('x').len(), 1);
    }

    #[test]
    fn test_inverse_and_without() {
        let key = SequenceKey::from("abcd");
        assert_eq!(key.inverse().text(), "dcba");
        assert_eq!(key.without(0).text(), "bcd");
        assert_eq!(key.without(2).text(), "abd");
        assert_eq!(key.without(9).text(), "abcd");
        assert_eq!(key.text(), "abcd");
    }
}
