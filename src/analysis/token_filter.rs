//! Token filter implementations: the functions a host pipeline runs per token.
//!
//! # Available Filters
//!
//! - [`trimmer::TrimmerFilter`] - Strips non-word characters from token edges
//! - [`stop::StopFilter`] - Removes stop words
//! - [`stem::StemFilter`] - Replaces tokens with their analyzer stem
//!
//! # Examples
//!
//! ```
//! use hunstem::analysis::token::{IntoTokenStream, PipelineToken};
//! use hunstem::analysis::token_filter::Filter;
//! use hunstem::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["és", "a"]);
//! let tokens = vec!["kutya", "és", "macska"].into_token_stream();
//! let filtered: Vec<PipelineToken> = filter.filter(tokens).unwrap().collect();
//!
//! assert_eq!(filtered.len(), 2);
//! assert_eq!(filtered[1].text(), "macska");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Trimmer → Stop Words → Stemmer → Index
//! ```

use crate::analysis::token::{PipelineToken, TokenStream};
use crate::error::Result;

/// Trait for functions that can be registered with a host pipeline.
///
/// The per-token [`apply`](Filter::apply) is the host calling convention:
/// returning `None` removes the token from the stream. Implementations must be
/// total; they never fail on an individual token.
///
/// # Examples
///
/// ```
/// use hunstem::analysis::token::PipelineToken;
/// use hunstem::analysis::token_filter::Filter;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn apply(&self, token: PipelineToken) -> Option<PipelineToken> {
///         Some(token.map_text(|s| s.chars().rev().collect()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
///
/// let out = ReverseFilter.apply(PipelineToken::from("abc")).unwrap();
/// assert_eq!(out.text(), "cba");
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a single token.
    fn apply(&self, token: PipelineToken) -> Option<PipelineToken>;

    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<PipelineToken> =
            tokens.filter_map(|token| self.apply(token)).collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod stem;
pub mod stop;
pub mod trimmer;

// Re-export all filters for convenient access
pub use stem::{MorphologyStemmer, StemContext, StemFilter, StemOutcome, Stemmer};
pub use stop::StopFilter;
pub use trimmer::TrimmerFilter;
