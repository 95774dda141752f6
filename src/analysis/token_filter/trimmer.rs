//! Trimmer filter implementation.

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::PipelineToken;

/// An inclusive range of word characters.
pub type CharRange = (char, char);

/// A filter that strips leading and trailing non-word characters from tokens.
///
/// What counts as a word character is given by a fixed set of inclusive
/// ranges. Inner characters are never touched, so `"e-mail"` stays intact
/// while `"«alma»"` becomes `"alma"`. A token made only of non-word characters
/// is trimmed to the empty string, which hosts drop from the stream.
///
/// # Examples
///
/// ```
/// use hunstem::analysis::token_filter::trimmer::TrimmerFilter;
///
/// let trimmer = TrimmerFilter::new(&[('a', 'z')]);
/// assert_eq!(trimmer.trim("(abc)."), "abc");
/// assert_eq!(trimmer.trim("a-b"), "a-b");
/// ```
#[derive(Clone, Debug)]
pub struct TrimmerFilter {
    word_characters: Arc<[CharRange]>,
}

impl TrimmerFilter {
    /// Create a trimmer that keeps the given word-character ranges.
    pub fn new(word_characters: &[CharRange]) -> Self {
        TrimmerFilter {
            word_characters: Arc::from(word_characters),
        }
    }

    /// Check whether `c` falls inside one of the word-character ranges.
    pub fn is_word_char(&self, c: char) -> bool {
        self.word_characters
            .iter()
            .any(|&(low, high)| low <= c && c <= high)
    }

    /// Strip non-word characters from both ends of `text`.
    pub fn trim<'a>(&self, text: &'a str) -> &'a str {
        text.trim_matches(|c| !self.is_word_char(c))
    }
}

impl Filter for TrimmerFilter {
    fn apply(&self, token: PipelineToken) -> Option<PipelineToken> {
        Some(token.map_text(|text| self.trim(text).to_string()))
    }

    fn name(&self) -> &'static str {
        "trimmer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{IntoTokenStream, Token};

    fn latin() -> TrimmerFilter {
        TrimmerFilter::new(&[('A', 'Z'), ('a', 'z'), ('\u{C0}', '\u{2B8}')])
    }

    #[test]
    fn test_trimmer_filter() {
        let filter = latin();
        let tokens = vec!["\"hello", "world!", "...", "(ők)"].into_token_stream();

        let result: Vec<PipelineToken> = filter.filter(tokens).unwrap().collect();

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text(), "hello");
        assert_eq!(result[1].text(), "world");
        assert_eq!(result[2].text(), "");
        assert_eq!(result[3].text(), "ők");
    }

    #[test]
    fn test_trimmer_keeps_inner_characters() {
        let filter = latin();
        assert_eq!(filter.trim("--e-mail--"), "e-mail");
        assert_eq!(filter.trim("2024"), "");
    }

    #[test]
    fn test_trimmer_is_idempotent() {
        let filter = latin();
        for input in ["«Árvíztűrő»", "tükörfúrógép.", "!!", "", "a"] {
            let once = filter.trim(input);
            assert_eq!(filter.trim(once), once);
        }
    }

    #[test]
    fn test_trimmer_preserves_updatable_shape() {
        let filter = latin();
        let out = filter.apply(Token::new("'alma'", 7).into()).unwrap();
        match out {
            PipelineToken::Token(token) => {
                assert_eq!(token.text, "alma");
                assert_eq!(token.position, 7);
            }
            other => panic!("shape changed: {other:?}"),
        }
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(latin().name(), "trimmer");
    }
}
