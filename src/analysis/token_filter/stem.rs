//! Stemming token filter: the bridge between host tokens and the analyzer.
//!
//! [`MorphologyStemmer`] turns the analyzer's candidate list into exactly one
//! string per word: the first candidate when there is one, otherwise the word
//! itself ([`StemOutcome::Miss`]). A miss is a normal outcome and never stops
//! the pipeline.
//!
//! [`StemFilter`] adapts any [`Stemmer`] to the host calling convention for
//! both token shapes. Plain text tokens are run through a transient
//! [`StemContext`] directly; updatable tokens get the same set/stem/get
//! sequence inside their [`update`](crate::analysis::token::Token::update)
//! closure. Both shapes yield the same text for the same input.

use std::sync::Arc;

use log::{debug, trace};

use super::Filter;
use crate::analysis::token::PipelineToken;
use crate::morphology::Morphology;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Result of looking a word up in the analyzer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StemOutcome {
    /// The analyzer returned at least one candidate; this is the first.
    Stemmed(String),
    /// The analyzer returned no candidates.
    Miss,
}

impl StemOutcome {
    /// The text to write back for `word`.
    pub fn resolve(self, word: &str) -> String {
        match self {
            StemOutcome::Stemmed(stem) => stem,
            StemOutcome::Miss => word.to_string(),
        }
    }

    /// Check whether the analyzer had nothing for the word.
    pub fn is_miss(&self) -> bool {
        matches!(self, StemOutcome::Miss)
    }
}

/// Stemmer backed by a shared analyzer handle.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use hunstem::analysis::token_filter::stem::{MorphologyStemmer, Stemmer};
/// use hunstem::morphology::MemoryMorphology;
///
/// let morphology = MemoryMorphology::from_entries([("kutyák", vec!["kutya"])]);
/// let stemmer = MorphologyStemmer::new(Arc::new(morphology));
///
/// assert_eq!(stemmer.stem("kutyák"), "kutya");
/// assert_eq!(stemmer.stem("xyzxyz"), "xyzxyz");
/// ```
pub struct MorphologyStemmer<M: ?Sized> {
    morphology: Arc<M>,
}

impl<M: Morphology + ?Sized> MorphologyStemmer<M> {
    /// Create a stemmer over an already constructed analyzer.
    pub fn new(morphology: Arc<M>) -> Self {
        MorphologyStemmer { morphology }
    }

    /// The analyzer this stemmer queries.
    pub fn morphology(&self) -> &Arc<M> {
        &self.morphology
    }

    /// Query the analyzer and pick the first candidate, if any.
    pub fn outcome(&self, word: &str) -> StemOutcome {
        let mut candidates = self.morphology.stem(word);
        if candidates.is_empty() {
            debug!("not stemmed: {word}");
            return StemOutcome::Miss;
        }

        trace!("{word} -> {}", candidates.join(" "));
        StemOutcome::Stemmed(candidates.swap_remove(0))
    }
}

impl<M: Morphology + ?Sized> Stemmer for MorphologyStemmer<M> {
    fn stem(&self, word: &str) -> String {
        self.outcome(word).resolve(word)
    }

    fn name(&self) -> &'static str {
        self.morphology.name()
    }
}

impl<M: ?Sized> Clone for MorphologyStemmer<M> {
    fn clone(&self) -> Self {
        MorphologyStemmer {
            morphology: Arc::clone(&self.morphology),
        }
    }
}

/// A transient holder for the word being stemmed.
///
/// # Examples
///
/// ```
/// use hunstem::analysis::token_filter::stem::{StemContext, Stemmer};
///
/// struct Upper;
/// impl Stemmer for Upper {
///     fn stem(&self, word: &str) -> String { word.to_uppercase() }
///     fn name(&self) -> &'static str { "upper" }
/// }
///
/// let mut context = StemContext::new();
/// context.set_current("ló");
/// context.stem(&Upper);
/// assert_eq!(context.current(), "LÓ");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StemContext {
    current: String,
}

impl StemContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a word into the context.
    pub fn set_current<S: Into<String>>(&mut self, word: S) {
        self.current = word.into();
    }

    /// The word currently held.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Replace the current word with its stem.
    pub fn stem(&mut self, stemmer: &dyn Stemmer) {
        self.current = stemmer.stem(&self.current);
    }

    /// Consume the context, returning the current word.
    pub fn into_current(self) -> String {
        self.current
    }
}

/// Filter that applies stemming to tokens of either shape.
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// Create a stem filter over an analyzer handle.
    pub fn from_morphology<M: Morphology + ?Sized + 'static>(morphology: Arc<M>) -> Self {
        Self::with_stemmer(Box::new(MorphologyStemmer::new(morphology)))
    }

    /// The wrapped stemmer.
    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }

    fn stem_in_context(&self, word: &str) -> String {
        let mut context = StemContext::new();
        context.set_current(word);
        context.stem(self.stemmer.as_ref());
        context.into_current()
    }

    /// Stem one token, writing the result back through its own shape.
    pub fn stem_token(&self, token: PipelineToken) -> PipelineToken {
        match token {
            PipelineToken::Token(token) => {
                PipelineToken::Token(token.update(|word| self.stem_in_context(word)))
            }
            PipelineToken::Text(word) => {
                let mut context = StemContext::new();
                context.set_current(word);
                context.stem(self.stemmer.as_ref());
                PipelineToken::Text(context.into_current())
            }
        }
    }
}

impl Filter for StemFilter {
    fn apply(&self, token: PipelineToken) -> Option<PipelineToken> {
        Some(self.stem_token(token))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{IntoTokenStream, Token};
    use crate::morphology::MemoryMorphology;

    fn filter() -> StemFilter {
        let morphology = MemoryMorphology::from_entries([
            ("kutyák", vec!["kutya"]),
            ("házat", vec!["ház", "háza"]),
        ]);
        StemFilter::from_morphology(Arc::new(morphology))
    }

    #[test]
    fn test_stem_filter() {
        let filter = filter();
        let tokens = vec!["kutyák", "házat", "xyzxyz"].into_token_stream();

        let result: Vec<PipelineToken> = filter.filter(tokens).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text(), "kutya");
        assert_eq!(result[1].text(), "ház");
        assert_eq!(result[2].text(), "xyzxyz");
    }

    #[test]
    fn test_shapes_agree() {
        let filter = filter();
        for word in ["kutyák", "házat", "xyzxyz", ""] {
            let plain = filter.stem_token(PipelineToken::from(word));
            let object = filter.stem_token(PipelineToken::from(Token::new(word, 0)));
            assert_eq!(plain.text(), object.text(), "mismatch for {word:?}");
            assert!(!plain.is_updatable());
            assert!(object.is_updatable());
        }
    }

    #[test]
    fn test_updatable_token_keeps_position() {
        let filter = filter();
        let stemmed = filter.stem_token(Token::with_offsets("kutyák", 5, 20, 27).into());
        assert_eq!(
            stemmed,
            PipelineToken::Token(Token::with_offsets("kutya", 5, 20, 27))
        );
    }

    #[test]
    fn test_outcome() {
        let morphology = MemoryMorphology::from_entries([("házat", vec!["ház", "háza"])]);
        let stemmer = MorphologyStemmer::new(Arc::new(morphology));

        assert_eq!(
            stemmer.outcome("házat"),
            StemOutcome::Stemmed("ház".to_string())
        );
        assert!(stemmer.outcome("semmi").is_miss());
        assert_eq!(StemOutcome::Miss.resolve("semmi"), "semmi");
    }

    #[test]
    fn test_first_candidate_is_stable() {
        let filter = filter();
        let first = filter.stem_token(PipelineToken::from("házat"));
        for _ in 0..10 {
            assert_eq!(filter.stem_token(PipelineToken::from("házat")), first);
        }
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(filter().name(), "stem");
        assert_eq!(filter().stemmer().name(), "memory");
    }
}
