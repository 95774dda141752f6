//! Token types flowing through a host pipeline.
//!
//! Hosts hand tokens to pipeline functions in one of two shapes:
//!
//! - [`PipelineToken::Text`] - a bare string, as legacy hosts do
//! - [`PipelineToken::Token`] - an updatable [`Token`] that carries position
//!   metadata and exposes [`Token::update`]
//!
//! Pipeline functions work on both shapes through [`PipelineToken::text`] and
//! [`PipelineToken::map_text`]; functions that need to treat the shapes
//! differently match on the enum once per call.
//!
//! # Examples
//!
//! ```
//! use hunstem::analysis::token::{PipelineToken, Token};
//!
//! let plain = PipelineToken::from("Kutyák");
//! let object = PipelineToken::from(Token::new("Kutyák", 0));
//!
//! let plain = plain.map_text(|s| s.to_lowercase());
//! let object = object.map_text(|s| s.to_lowercase());
//!
//! assert_eq!(plain.text(), "kutyák");
//! assert_eq!(object.text(), "kutyák");
//! ```

use std::fmt;

/// An updatable token: text plus the position information a host records.
///
/// # Examples
///
/// ```
/// use hunstem::analysis::token::Token;
///
/// let token = Token::with_offsets("házak", 3, 12, 18).update(|s| s.replace("ak", ""));
/// assert_eq!(token.text, "ház");
/// assert_eq!(token.position, 3);
/// assert_eq!(token.start_offset, 12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text with the result of `transform` applied to the current text.
    ///
    /// Position and offsets are preserved.
    pub fn update<F>(mut self, transform: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        self.text = transform(&self.text);
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token in whichever shape the host supplies.
#[derive(Clone, Debug, PartialEq)]
pub enum PipelineToken {
    /// Plain text token.
    Text(String),
    /// Updatable token object.
    Token(Token),
}

impl PipelineToken {
    /// The current text, regardless of shape.
    pub fn text(&self) -> &str {
        match self {
            PipelineToken::Text(text) => text,
            PipelineToken::Token(token) => &token.text,
        }
    }

    /// Check if the current text is empty.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Rewrite the text, keeping the shape and any offsets intact.
    pub fn map_text<F>(self, transform: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        match self {
            PipelineToken::Text(text) => PipelineToken::Text(transform(&text)),
            PipelineToken::Token(token) => PipelineToken::Token(token.update(transform)),
        }
    }

    /// Consume the token and return its text.
    pub fn into_text(self) -> String {
        match self {
            PipelineToken::Text(text) => text,
            PipelineToken::Token(token) => token.text,
        }
    }

    /// True for the updatable shape.
    pub fn is_updatable(&self) -> bool {
        matches!(self, PipelineToken::Token(_))
    }
}

impl From<String> for PipelineToken {
    fn from(text: String) -> Self {
        PipelineToken::Text(text)
    }
}

impl From<&str> for PipelineToken {
    fn from(text: &str) -> Self {
        PipelineToken::Text(text.to_string())
    }
}

impl From<Token> for PipelineToken {
    fn from(token: Token) -> Self {
        PipelineToken::Token(token)
    }
}

impl fmt::Display for PipelineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = PipelineToken>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<PipelineToken> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter().map(PipelineToken::Token))
    }
}

impl IntoTokenStream for Vec<&str> {
    fn into_token_stream(self) -> TokenStream {
        let tokens: Vec<PipelineToken> = self.into_iter().map(PipelineToken::from).collect();
        Box::new(tokens.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("ház", 0);
        assert_eq!(token.text, "ház");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
    }

    #[test]
    fn test_token_update_keeps_offsets() {
        let token = Token::with_offsets("Házak", 2, 5, 11).update(|s| s.to_lowercase());

        assert_eq!(token.text, "házak");
        assert_eq!(token.position, 2);
        assert_eq!(token.start_offset, 5);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_pipeline_token_shapes() {
        let plain = PipelineToken::from("alma");
        let object = PipelineToken::from(Token::new("alma", 4));

        assert!(!plain.is_updatable());
        assert!(object.is_updatable());
        assert_eq!(plain.text(), object.text());

        match object.map_text(|s| format!("{s}fa")) {
            PipelineToken::Token(token) => {
                assert_eq!(token.text, "almafa");
                assert_eq!(token.position, 4);
            }
            other => panic!("shape changed: {other:?}"),
        }
    }

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", Token::new("szó", 0)), "szó");
        assert_eq!(format!("{}", PipelineToken::from("szó")), "szó");
    }

    #[test]
    fn test_token_stream() {
        let stream = vec![Token::new("egy", 0), Token::new("kettő", 1)].into_token_stream();
        let collected: Vec<_> = stream.collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text(), "egy");
        assert!(collected[1].is_updatable());
    }
}
