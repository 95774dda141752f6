//! Index builder: tokenizes text and drives it through the host pipelines.

use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::token::{PipelineToken, Token};
use crate::error::Result;
use crate::host::LocalePlugin;
use crate::host::pipeline::Pipeline;
use crate::host::registry::FunctionRegistry;

/// Builds index entries from text.
///
/// A current builder produces updatable tokens and carries a separate
/// search-time pipeline. A legacy builder produces plain text tokens and has
/// only the processing pipeline.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use hunstem::host::{FunctionRegistry, IndexBuilder};
///
/// let builder = IndexBuilder::new(Arc::new(FunctionRegistry::new()));
/// let tokens = builder.analyze("Kék-zöld  ég").unwrap();
///
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
/// assert_eq!(texts, vec!["kék", "zöld", "ég"]);
/// assert!(builder.search_pipeline().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct IndexBuilder {
    pipeline: Pipeline,
    search_pipeline: Option<Pipeline>,
    updatable_tokens: bool,
}

impl IndexBuilder {
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        IndexBuilder {
            pipeline: Pipeline::new(Arc::clone(&registry)),
            search_pipeline: Some(Pipeline::new(registry)),
            updatable_tokens: true,
        }
    }

    /// A builder for hosts without updatable tokens or a search pipeline.
    pub fn legacy(registry: Arc<FunctionRegistry>) -> Self {
        IndexBuilder {
            pipeline: Pipeline::new(registry),
            search_pipeline: None,
            updatable_tokens: false,
        }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    pub fn search_pipeline(&self) -> Option<&Pipeline> {
        self.search_pipeline.as_ref()
    }

    pub fn search_pipeline_mut(&mut self) -> Option<&mut Pipeline> {
        self.search_pipeline.as_mut()
    }

    pub fn is_legacy(&self) -> bool {
        !self.updatable_tokens
    }

    /// Let a locale plugin configure this builder.
    pub fn use_plugin(&mut self, plugin: &dyn LocalePlugin) -> &mut Self {
        plugin.activate(self);
        self
    }

    /// Split on whitespace and hyphens and lowercase each piece.
    pub fn tokenize(&self, text: &str) -> Vec<PipelineToken> {
        let mut tokens = Vec::new();
        let mut start = None;

        for (i, c) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
            if c.is_whitespace() || c == '-' {
                if let Some(begin) = start.take() {
                    let word = text[begin..i].to_lowercase();
                    tokens.push(if self.updatable_tokens {
                        PipelineToken::Token(Token::with_offsets(word, tokens.len(), begin, i))
                    } else {
                        PipelineToken::Text(word)
                    });
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }

        tokens
    }

    /// Tokenize `text` and run it through the processing pipeline.
    pub fn analyze(&self, text: &str) -> Result<Vec<PipelineToken>> {
        self.pipeline.run(self.tokenize(text))
    }

    /// Tokenize a query and run it through the search pipeline, or through
    /// the processing pipeline when there is none.
    pub fn analyze_query(&self, text: &str) -> Result<Vec<PipelineToken>> {
        let pipeline = self.search_pipeline.as_ref().unwrap_or(&self.pipeline);
        pipeline.run(self.tokenize(text))
    }

    /// Analyze many documents in parallel.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Result<Vec<Vec<PipelineToken>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::stop::StopFilter;

    fn registry() -> Arc<FunctionRegistry> {
        let registry = Arc::new(FunctionRegistry::new());
        registry.register("stop", Arc::new(StopFilter::from_words(["a", "és"])));
        registry
    }

    #[test]
    fn test_tokenize_offsets() {
        let builder = IndexBuilder::new(registry());
        let tokens = builder.tokenize("Árvíz-tűrő  Tükör");

        assert_eq!(
            tokens,
            vec![
                PipelineToken::Token(Token::with_offsets("árvíz", 0, 0, 7)),
                PipelineToken::Token(Token::with_offsets("tűrő", 1, 8, 14)),
                PipelineToken::Token(Token::with_offsets("tükör", 2, 16, 23)),
            ]
        );
    }

    #[test]
    fn test_legacy_tokens() {
        let builder = IndexBuilder::legacy(registry());
        assert!(builder.is_legacy());
        assert!(builder.search_pipeline().is_none());

        let tokens = builder.tokenize(" A kutya ");
        assert_eq!(tokens, vec![PipelineToken::from("a"), PipelineToken::from("kutya")]);
        assert!(builder.tokenize(" - ").is_empty());
    }

    #[test]
    fn test_analyze_and_query() {
        let registry = registry();
        let mut builder = IndexBuilder::new(Arc::clone(&registry));
        builder.pipeline_mut().add_label("stop").unwrap();

        let texts: Vec<String> = builder
            .analyze("A kutya és a macska")
            .unwrap()
            .into_iter()
            .map(PipelineToken::into_text)
            .collect();
        assert_eq!(texts, vec!["kutya", "macska"]);

        // the search pipeline is still empty
        assert_eq!(builder.analyze_query("a kutya").unwrap().len(), 2);

        let mut legacy = IndexBuilder::legacy(registry);
        legacy.pipeline_mut().add_label("stop").unwrap();
        assert_eq!(legacy.analyze_query("a kutya").unwrap(), vec![PipelineToken::from("kutya")]);
    }

    #[test]
    fn test_analyze_batch() {
        let mut builder = IndexBuilder::new(registry());
        builder.pipeline_mut().add_label("stop").unwrap();

        let docs = vec!["a ház", "kert és ház", ""];
        let results = builder.analyze_batch(&docs).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].len(), 1);
        assert_eq!(results[1].len(), 2);
        assert!(results[2].is_empty());
    }
}
