//! Sequential composition of analyzers.
//!
//! Both directions fold over the stage list instead of recursing into it,
//! so long chains do not grow the stack. Nesting a chain inside a chain
//! still recurses once per nesting level.

use crate::analysis::analyzer::Analyzer;
use crate::analysis::position::SymbolPosition;
use crate::analysis::sequence_key::SequenceKey;
use crate::analysis::symbol::Symbol;
use crate::analysis::token::Token;

/// Feed the input through the first stage, then re-feed every produced
/// token into the next stage, preserving order.
///
/// An empty chain produces no tokens.
pub(crate) fn analyze<C: Symbol>(
    stages: &[Analyzer],
    input: &[SymbolPosition<C>],
) -> Vec<Token<C>> {
    let Some((first, rest)) = stages.split_first() else {
        return Vec::new();
    };

    rest.iter().fold(first.analyze(input), |tokens, stage| {
        tokens
            .iter()
            .flat_map(|token| stage.analyze(token.positions()))
            .collect()
    })
}

/// Expand the key through every stage, each stage expanding all keys the
/// previous stage produced.
///
/// An empty chain returns the key unchanged.
pub(crate) fn analyze_query<C: Symbol>(
    stages: &[Analyzer],
    key: SequenceKey<C>,
) -> Vec<SequenceKey<C>> {
    stages.iter().fold(vec![key], |keys, stage| {
        keys.into_iter()
            .flat_map(|key| stage.analyze_query(key))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::position::positioned;

    fn texts(stages: &[Analyzer], input: &str) -> Vec<String> {
        let symbols: Vec<char> = input.chars().collect();
        analyze(stages, &positioned(&symbols))
            .iter()
            .map(|t| t.text())
            .collect()
    }

    #[test]
    fn test_front_back_enumerates_all_substrings() {
        let tokens = texts(&[Analyzer::FrontNGram, Analyzer::BackNGram], "abcdefg");
        let expected = vec![
            "abcdefg", "bcdefg", "cdefg", "defg", "efg", "fg", "g", //
            "abcdef", "bcdef", "cdef", "def", "ef", "f", //
            "abcde", "bcde", "cde", "de", "e", //
            "abcd", "bcd", "cd", "d", //
            "abc", "bc", "c", //
            "ab", "b", //
            "a",
        ];
        assert_eq!(tokens, expected);
        assert_eq!(tokens.len(), 7 * 8 / 2);
    }

    #[test]
    fn test_back_front_order() {
        let tokens = texts(&[Analyzer::BackNGram, Analyzer::FrontNGram], "abc");
        assert_eq!(tokens, vec!["abc", "ab", "a", "bc", "b", "c"]);
    }

    #[test]
    fn test_stage_order_matters() {
        let inverse_first = texts(&[Analyzer::Inverse, Analyzer::FrontNGram], "abc");
        let front_first = texts(&[Analyzer::FrontNGram, Analyzer::Inverse], "abc");
        assert_eq!(inverse_first, vec!["cba", "cb", "c"]);
        assert_eq!(front_first, vec!["cba", "ba", "a"]);
    }

    #[test]
    fn test_empty_chain() {
        assert!(texts(&[], "abc").is_empty());
        let keys = analyze_query::<char>(&[], SequenceKey::from("abc"));
        assert_eq!(keys, vec![SequenceKey::from("abc")]);
    }

    #[test]
    fn test_query_expansion_is_sequential() {
        let keys = analyze_query(
            &[Analyzer::Inverse, Analyzer::SingleInsertions],
            SequenceKey::from("abc"),
        );
        let texts: Vec<String> = keys.iter().map(|k| k.text()).collect();
        assert_eq!(texts, vec!["ba", "ca", "cb"]);
    }

    #[test]
    fn test_deep_chain() {
        let stages = vec![Analyzer::Inverse; 10_001];
        let tokens = texts(&stages, "abc");
        assert_eq!(tokens, vec!["cba"]);
    }
}
