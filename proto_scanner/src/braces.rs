//! Brace-pair table for match highlighting
//!
//! Enumerates the open/close character pairs an editor should jump
//! between. Quote pairs are included so string delimiters highlight too.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracePair {
    pub open: char,
    pub close: char,
}

impl BracePair {
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }
}

pub const BRACE_PAIRS: &[BracePair] = &[
    BracePair::new('{', '}'),
    BracePair::new('(', ')'),
    BracePair::new('[', ']'),
    BracePair::new('<', '>'),
    BracePair::new('"', '"'),
    BracePair::new('\'', '\''),
];

/// The closing character matching an opening one
pub fn matching_close(open: char) -> Option<char> {
    BRACE_PAIRS
        .iter()
        .find(|p| p.open == open)
        .map(|p| p.close)
}

/// The opening character matching a closing one
pub fn matching_open(close: char) -> Option<char> {
    BRACE_PAIRS
        .iter()
        .find(|p| p.close == close)
        .map(|p| p.open)
}

pub fn is_open_brace(ch: char) -> bool {
    BRACE_PAIRS.iter().any(|p| p.open == ch)
}

pub fn is_close_brace(ch: char) -> bool {
    BRACE_PAIRS.iter().any(|p| p.close == ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_consistent() {
        for pair in BRACE_PAIRS {
            assert_eq!(matching_close(pair.open), Some(pair.close));
            assert_eq!(matching_open(pair.close), Some(pair.open));
        }
    }

    #[test]
    fn test_non_brace_characters() {
        assert_eq!(matching_close('a'), None);
        assert!(!is_open_brace(';'));
    }

    #[test]
    fn test_quotes_pair_with_themselves() {
        assert_eq!(matching_close('"'), Some('"'));
        assert!(is_open_brace('\'') && is_close_brace('\''));
    }
}
