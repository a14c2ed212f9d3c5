//! Prefix and suffix truncation.
//!
//! For an input of length `n` both directions emit `n` tokens, longest
//! first. Front truncation drops symbols from the end and flags only the
//! length-1 token as start. Back truncation drops symbols from the start and
//! flags only the length-1 token as terminal.

use crate::analysis::position::SymbolPosition;
use crate::analysis::token::Token;

pub(crate) fn analyze_front<C: Clone>(input: &[SymbolPosition<C>]) -> Vec<Token<C>> {
    let n = input.len();
    (0..n)
        .map(|dropped| Token::new(input[..n - dropped].to_vec(), dropped == n - 1, true))
        .collect()
}

pub(crate) fn analyze_back<C: Clone>(input: &[SymbolPosition<C>]) -> Vec<Token<C>> {
    let n = input.len();
    (0..n)
        .map(|dropped| Token::new(input[dropped..].to_vec(), true, dropped == n - 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::position::positioned;

    fn input(text: &str) -> Vec<SymbolPosition<char>> {
        positioned(&text.chars().collect::<Vec<_>>())
    }

    #[test]
    fn test_front_ngram() {
        let tokens = analyze_front(&input("abcd"));
        let texts: Vec<String> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["abcd", "abc", "ab", "a"]);

        let start: Vec<bool> = tokens.iter().map(|t| t.is_start()).collect();
        assert_eq!(start, vec![false, false, false, true]);
        assert!(tokens.iter().all(|t| t.is_terminal()));
    }

    #[test]
    fn test_back_ngram() {
        let tokens = analyze_back(&input("abcd"));
        let texts: Vec<String> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["abcd", "bcd", "cd", "d"]);

        let terminal: Vec<bool> = tokens.iter().map(|t| t.is_terminal()).collect();
        assert_eq!(terminal, vec![false, false, false, true]);
        assert!(tokens.iter().all(|t| t.is_start()));
    }

    #[test]
    fn test_positions_survive_truncation() {
        let tokens = analyze_back(&input("abcd"));
        assert_eq!(tokens[2].start_position(), Some(3));
        assert_eq!(tokens[2].end_position(), Some(4));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(analyze_front::<char>(&[]).is_empty());
        assert!(analyze_back::<char>(&[]).is_empty());

        let single = analyze_front(&input("x"));
        assert_eq!(single.len(), 1);
        assert!(single[0].is_start());
        assert!(single[0].is_terminal());
    }
}
