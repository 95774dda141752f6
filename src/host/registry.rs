//! Label-keyed registry of pipeline functions.

use std::sync::Arc;

use ahash::AHashMap;
use log::warn;
use parking_lot::RwLock;

use crate::analysis::token_filter::Filter;

/// Functions registered with a host, shared by every pipeline it builds.
///
/// Registering under a label that is already taken replaces the previous
/// function.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: RwLock<AHashMap<String, Arc<dyn Filter>>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `function` under `label`, returning the function it replaced.
    pub fn register<S: Into<String>>(
        &self,
        label: S,
        function: Arc<dyn Filter>,
    ) -> Option<Arc<dyn Filter>> {
        let label = label.into();
        let previous = self.functions.write().insert(label.clone(), function);
        if previous.is_some() {
            warn!("overwriting existing registered function: {label}");
        }
        previous
    }

    pub fn get(&self, label: &str) -> Option<Arc<dyn Filter>> {
        self.functions.read().get(label).cloned()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.functions.read().contains_key(label)
    }

    /// The label `function` is currently registered under, if any.
    pub fn label_of(&self, function: &Arc<dyn Filter>) -> Option<String> {
        self.functions
            .read()
            .iter()
            .find(|(_, registered)| Arc::ptr_eq(registered, function))
            .map(|(label, _)| label.clone())
    }

    /// All labels, sorted.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.functions.read().keys().cloned().collect();
        labels.sort();
        labels
    }

    pub fn len(&self) -> usize {
        self.functions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.read().is_empty()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("labels", &self.labels())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::token_filter::trimmer::TrimmerFilter;

    #[test]
    fn test_register_and_get() {
        let registry = FunctionRegistry::new();
        let stop: Arc<dyn Filter> = Arc::new(StopFilter::from_words(["és"]));

        assert!(registry.register("stop", Arc::clone(&stop)).is_none());
        assert!(registry.contains("stop"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("stop").unwrap().name(), "stop");
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.label_of(&stop).as_deref(), Some("stop"));
    }

    #[test]
    fn test_register_overwrites() {
        let registry = FunctionRegistry::new();
        let first: Arc<dyn Filter> = Arc::new(StopFilter::from_words(["a"]));
        let second: Arc<dyn Filter> = Arc::new(TrimmerFilter::new(&[('a', 'z')]));

        registry.register("f", Arc::clone(&first));
        let replaced = registry.register("f", Arc::clone(&second)).unwrap();

        assert!(Arc::ptr_eq(&replaced, &first));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("f").unwrap().name(), "trimmer");
        assert!(registry.label_of(&first).is_none());
    }

    #[test]
    fn test_labels_sorted() {
        let registry = FunctionRegistry::new();
        registry.register("b", Arc::new(StopFilter::from_words(["x"])));
        registry.register("a", Arc::new(StopFilter::from_words(["y"])));
        assert_eq!(registry.labels(), vec!["a", "b"]);
        assert!(registry.contains("a"));
        assert!(registry.get("c").is_none());
    }
}
