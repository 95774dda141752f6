//! Stop filter implementation.
//!
//! Removes tokens whose exact text is a configured stop word. Matching is
//! case-sensitive and happens on the whole token text; there is no
//! normalization.
//!
//! # Examples
//!
//! ```
//! use hunstem::analysis::token::{IntoTokenStream, PipelineToken};
//! use hunstem::analysis::token_filter::Filter;
//! use hunstem::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["a", "az", "és"]);
//! let tokens = vec!["a", "kutya", "és", "a", "macska"].into_token_stream();
//!
//! let result: Vec<PipelineToken> = filter.filter(tokens).unwrap().collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text(), "kutya");
//! assert_eq!(result[1].text(), "macska");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::PipelineToken;
use crate::analysis::token_filter::Filter;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with custom stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use hunstem::analysis::token_filter::stop::StopFilter;
    ///
    /// let mut words = HashSet::new();
    /// words.insert("nem".to_string());
    ///
    /// let filter = StopFilter::with_stop_words(words);
    /// assert!(filter.is_stop_word("nem"));
    /// assert!(!filter.is_stop_word("Nem"));
    /// ```
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// Duplicates in `words` collapse into a single entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn apply(&self, token: PipelineToken) -> Option<PipelineToken> {
        if self.is_stop_word(token.text()) {
            None
        } else {
            Some(token)
        }
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{IntoTokenStream, Token};

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["a", "és", "vagy"]);
        let tokens = vec![
            Token::new("kutya", 0),
            Token::new("és", 1),
            Token::new("macska", 2),
            Token::new("vagy", 3),
            Token::new("egér", 4),
        ]
        .into_token_stream();

        let result: Vec<PipelineToken> = filter.filter(tokens).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text(), "kutya");
        assert_eq!(result[1].text(), "macska");
        assert_eq!(result[2].text(), "egér");
    }

    #[test]
    fn test_stop_filter_is_case_sensitive() {
        let filter = StopFilter::from_words(vec!["és"]);
        assert!(filter.apply(PipelineToken::from("és")).is_none());
        assert_eq!(
            filter.apply(PipelineToken::from("És")).map(|t| t.into_text()),
            Some("És".to_string())
        );
    }

    #[test]
    fn test_stop_filter_passes_text_unchanged() {
        let filter = StopFilter::from_words(vec!["nem"]);
        let token = PipelineToken::from(Token::with_offsets("nemzet", 1, 4, 10));
        assert_eq!(filter.apply(token.clone()), Some(token));
    }

    #[test]
    fn test_duplicates_collapse() {
        let filter = StopFilter::from_words(vec!["majd", "majd"]);
        assert_eq!(filter.len(), 1);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::from_words(Vec::<String>::new()).name(), "stop");
    }
}
