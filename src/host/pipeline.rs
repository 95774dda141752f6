//! Ordered chain of registered pipeline functions.
//!
//! Every stage receives the output of the previous one. Tokens whose text
//! became empty are dropped between stages, so a trimmer that strips a token
//! to nothing removes it before the stop-word filter or stemmer sees it.
//!
//! A pipeline serializes to the JSON list of its labels and loads back from
//! the same registry.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use hunstem::analysis::token_filter::stop::StopFilter;
//! use hunstem::analysis::token_filter::trimmer::TrimmerFilter;
//! use hunstem::host::{FunctionRegistry, Pipeline};
//!
//! let registry = Arc::new(FunctionRegistry::new());
//! registry.register("trimmer", Arc::new(TrimmerFilter::new(&[('a', 'z')])));
//! registry.register("stop", Arc::new(StopFilter::from_words(["a", "az"])));
//!
//! let pipeline = Pipeline::load(&["trimmer", "stop"], Arc::clone(&registry)).unwrap();
//! assert_eq!(pipeline.to_json().unwrap(), r#"["trimmer","stop"]"#);
//!
//! let tokens = pipeline.run_text("(az) kert!").unwrap();
//! assert_eq!(tokens, vec!["kert"]);
//! ```

use std::sync::Arc;

use log::{debug, warn};

use crate::analysis::token::{IntoTokenStream, PipelineToken, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{HunstemError, Result};
use crate::host::registry::FunctionRegistry;

#[derive(Clone)]
struct Stage {
    label: Option<String>,
    function: Arc<dyn Filter>,
}

/// A sequence of functions drawn from a shared [`FunctionRegistry`].
#[derive(Clone)]
pub struct Pipeline {
    registry: Arc<FunctionRegistry>,
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Create an empty pipeline over `registry`.
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        Pipeline {
            registry,
            stages: Vec::new(),
        }
    }

    /// Rebuild a pipeline from registry labels.
    pub fn load<S: AsRef<str>>(labels: &[S], registry: Arc<FunctionRegistry>) -> Result<Self> {
        let mut pipeline = Self::new(registry);
        for label in labels {
            let label = label.as_ref();
            let function = pipeline.registry.get(label).ok_or_else(|| {
                HunstemError::pipeline(format!("cannot load unregistered function: {label}"))
            })?;
            pipeline.stages.push(Stage {
                label: Some(label.to_string()),
                function,
            });
        }
        Ok(pipeline)
    }

    /// Rebuild a pipeline from the output of [`to_json`](Self::to_json).
    pub fn from_json(json: &str, registry: Arc<FunctionRegistry>) -> Result<Self> {
        let labels: Vec<String> = serde_json::from_str(json)?;
        Self::load(&labels, registry)
    }

    /// Append a function. Functions unknown to the registry are still added,
    /// but the pipeline can no longer be serialized.
    pub fn add(&mut self, function: Arc<dyn Filter>) {
        let label = self.registry.label_of(&function);
        if label.is_none() {
            warn!(
                "function is not registered with pipeline, this may cause problems when serialising the index: {}",
                function.name()
            );
        }
        self.stages.push(Stage { label, function });
    }

    /// Append the function registered under `label`.
    pub fn add_label(&mut self, label: &str) -> Result<()> {
        let function = self
            .registry
            .get(label)
            .ok_or_else(|| HunstemError::pipeline(format!("unregistered function: {label}")))?;
        self.stages.push(Stage {
            label: Some(label.to_string()),
            function,
        });
        Ok(())
    }

    /// Append the function currently registered under `label`, or `fallback`
    /// when the label is free.
    pub fn add_registered(&mut self, label: &str, fallback: &Arc<dyn Filter>) {
        match self.registry.get(label) {
            Some(function) => self.stages.push(Stage {
                label: Some(label.to_string()),
                function,
            }),
            None => self.add(Arc::clone(fallback)),
        }
    }

    /// Remove every function.
    pub fn reset(&mut self) {
        if !self.stages.is_empty() {
            debug!("resetting pipeline of {} functions", self.stages.len());
        }
        self.stages.clear();
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Labels of the stages in order. Unregistered stages show their
    /// function name in angle brackets.
    pub fn labels(&self) -> Vec<String> {
        self.stages
            .iter()
            .map(|stage| match &stage.label {
                Some(label) => label.clone(),
                None => format!("<{}>", stage.function.name()),
            })
            .collect()
    }

    /// The functions in order.
    pub fn functions(&self) -> impl Iterator<Item = &Arc<dyn Filter>> {
        self.stages.iter().map(|stage| &stage.function)
    }

    /// Serialize the stage labels as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        let labels = self
            .stages
            .iter()
            .map(|stage| {
                stage.label.as_deref().ok_or_else(|| {
                    HunstemError::pipeline(format!(
                        "cannot serialize unregistered function: {}",
                        stage.function.name()
                    ))
                })
            })
            .collect::<Result<Vec<&str>>>()?;
        Ok(serde_json::to_string(&labels)?)
    }

    /// Run a token stream through every stage.
    pub fn run_stream(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut tokens = tokens;
        for stage in &self.stages {
            let filtered = stage.function.filter(tokens)?;
            tokens = Box::new(filtered.filter(|token| !token.is_empty()));
        }
        Ok(tokens)
    }

    /// Run tokens through every stage.
    pub fn run(&self, tokens: Vec<PipelineToken>) -> Result<Vec<PipelineToken>> {
        Ok(self.run_stream(tokens.into_token_stream())?.collect())
    }

    /// Run whitespace-separated plain-text tokens through every stage.
    pub fn run_text(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .split_whitespace()
            .map(PipelineToken::from)
            .collect::<Vec<_>>();
        Ok(self
            .run(tokens)?
            .into_iter()
            .map(PipelineToken::into_text)
            .collect())
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.labels())
            .finish()
    }
}
