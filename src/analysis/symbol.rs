//! The alphabet bound shared by every index and analyzer.

use std::fmt::Debug;
use std::hash::Hash;

/// A single atomic element of an indexed sequence.
///
/// Any comparable, hashable value can act as a symbol. The only behavior a
/// symbol adds is [`fold_case`](Symbol::fold_case), used by
/// [`Analyzer::LowerCase`](crate::analysis::Analyzer::LowerCase); alphabets
/// without a notion of case keep the default, which returns the symbol
/// unchanged.
///
/// Custom alphabets opt in with an empty impl:
///
/// ```
/// use seqdex::analysis::Symbol;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// enum Nucleotide { A, C, G, T }
///
/// impl Symbol for Nucleotide {}
/// ```
pub trait Symbol: Clone + Eq + Hash + Ord + Debug + Send + Sync {
    /// Return the case-folded form of this symbol.
    fn fold_case(&self) -> Self {
        self.clone()
    }
}

impl Symbol for char {
    fn fold_case(&self) -> Self {
        // Keep symbols whose lowercase form is not a single char.
        let mut lower = self.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(folded), None) => folded,
            _ => *self,
        }
    }
}

impl Symbol for u8 {
    fn fold_case(&self) -> Self {
        self.to_ascii_lowercase()
    }
}

impl Symbol for String {
    fn fold_case(&self) -> Self {
        self.to_lowercase()
    }
}

macro_rules! caseless_symbol {
    ($($ty:ty),* $(,)?) => {
        $(impl Symbol for $ty {})*
    };
}

caseless_symbol!(u16, u32, u64, usize, i8, i16, i32, i64, isize, bool);
