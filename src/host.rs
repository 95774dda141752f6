//! In-process indexing host.
//!
//! The host owns the function registry, the installed locale plugins and the
//! capabilities plugins check before they register anything. Builders created
//! from a namespace share its registry.
//!
//! # Examples
//!
//! ```
//! use hunstem::host::{HostCapability, HostNamespace};
//!
//! let host = HostNamespace::with_capabilities([HostCapability::BaseLibrary]);
//! assert!(host.has_capability(HostCapability::BaseLibrary));
//! assert_eq!(
//!     host.missing_capabilities(&[HostCapability::BaseLibrary, HostCapability::StemmerSupport]),
//!     vec![HostCapability::StemmerSupport]
//! );
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

pub mod builder;
pub mod pipeline;
pub mod registry;

pub use builder::IndexBuilder;
pub use pipeline::Pipeline;
pub use registry::FunctionRegistry;

/// A feature of the host that plugins may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCapability {
    /// The core indexing library: registry, pipelines, builders.
    BaseLibrary,
    /// Shared stemming support used by language plugins.
    StemmerSupport,
}

impl HostCapability {
    pub const ALL: [HostCapability; 2] = [HostCapability::BaseLibrary, HostCapability::StemmerSupport];

    pub fn as_str(&self) -> &'static str {
        match self {
            HostCapability::BaseLibrary => "base library",
            HostCapability::StemmerSupport => "stemmer support",
        }
    }
}

impl fmt::Display for HostCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A language plugin that configures builders for its locale.
pub trait LocalePlugin: Send + Sync {
    /// Locale code, such as `"hu"`.
    fn code(&self) -> &str;

    /// Reconfigure the pipelines of `builder`.
    fn activate(&self, builder: &mut IndexBuilder);
}

/// The host namespace plugins register into.
pub struct HostNamespace {
    capabilities: HashSet<HostCapability>,
    registry: Arc<FunctionRegistry>,
    locales: AHashMap<String, Arc<dyn LocalePlugin>>,
}

impl HostNamespace {
    /// A host with every capability.
    pub fn new() -> Self {
        Self::with_capabilities(HostCapability::ALL)
    }

    pub fn with_capabilities<I>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = HostCapability>,
    {
        HostNamespace {
            capabilities: capabilities.into_iter().collect(),
            registry: Arc::new(FunctionRegistry::new()),
            locales: AHashMap::new(),
        }
    }

    pub fn has_capability(&self, capability: HostCapability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// The subset of `required` this host lacks, in the given order.
    pub fn missing_capabilities(&self, required: &[HostCapability]) -> Vec<HostCapability> {
        required
            .iter()
            .copied()
            .filter(|capability| !self.has_capability(*capability))
            .collect()
    }

    pub fn registry(&self) -> &Arc<FunctionRegistry> {
        &self.registry
    }

    /// Install a locale plugin, replacing one with the same code.
    pub fn install_locale(&mut self, locale: Arc<dyn LocalePlugin>) {
        let code = locale.code().to_string();
        debug!("installing locale {code}");
        self.locales.insert(code, locale);
    }

    pub fn locale(&self, code: &str) -> Option<Arc<dyn LocalePlugin>> {
        self.locales.get(code).cloned()
    }

    /// Installed locale codes, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// A builder sharing this host's registry.
    pub fn builder(&self) -> IndexBuilder {
        IndexBuilder::new(Arc::clone(&self.registry))
    }

    /// A legacy builder sharing this host's registry.
    pub fn legacy_builder(&self) -> IndexBuilder {
        IndexBuilder::legacy(Arc::clone(&self.registry))
    }
}

impl Default for HostNamespace {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HostNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostNamespace")
            .field("capabilities", &self.capabilities)
            .field("registry", &self.registry)
            .field("locales", &self.locales())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UpperLocale;

    impl LocalePlugin for UpperLocale {
        fn code(&self) -> &str {
            "up"
        }

        fn activate(&self, builder: &mut IndexBuilder) {
            builder.pipeline_mut().reset();
        }
    }

    #[test]
    fn test_capabilities() {
        let host = HostNamespace::new();
        assert!(host.missing_capabilities(&HostCapability::ALL).is_empty());

        let bare = HostNamespace::with_capabilities([]);
        assert_eq!(bare.missing_capabilities(&HostCapability::ALL), HostCapability::ALL.to_vec());
        assert_eq!(HostCapability::StemmerSupport.to_string(), "stemmer support");
    }

    #[test]
    fn test_install_locale() {
        let mut host = HostNamespace::new();
        assert!(host.locale("up").is_none());

        host.install_locale(Arc::new(UpperLocale));
        host.install_locale(Arc::new(UpperLocale));

        assert_eq!(host.locales(), vec!["up"]);
        let locale = host.locale("up").unwrap();
        let mut builder = host.builder();
        builder.use_plugin(locale.as_ref());
        assert!(builder.pipeline().is_empty());
    }

    #[test]
    fn test_builders_share_registry() {
        let host = HostNamespace::new();
        let mut builder = host.builder();
        let mut legacy = host.legacy_builder();
        assert!(!builder.is_legacy());
        assert!(legacy.is_legacy());

        host.registry().register(
            "stop",
            Arc::new(crate::analysis::token_filter::StopFilter::from_words(["a"])),
        );
        assert!(builder.pipeline_mut().add_label("stop").is_ok());
        assert!(legacy.pipeline_mut().add_label("stop").is_ok());
    }
}
