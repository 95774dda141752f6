//! The Hungarian plugin: analyzer initialization and host registration.
//!
//! A [`HungarianPlugin`] holds a constructed analyzer handle. The only ways
//! to get one are awaiting [`HungarianPlugin::initialize`] (or
//! [`HungarianPlugin::load`]) or wrapping a handle that already exists, so
//! registering with a host and stemming can never run ahead of analyzer
//! construction.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use hunstem::host::HostNamespace;
//! use hunstem::morphology::MemoryMorphology;
//! use hunstem::plugin::HungarianPlugin;
//!
//! let morphology = MemoryMorphology::from_entries([("kutyák", vec!["kutya"])]);
//! let plugin = HungarianPlugin::with_morphology(Arc::new(morphology));
//!
//! let mut host = HostNamespace::new();
//! let locale = plugin.register(&mut host).unwrap();
//!
//! let mut builder = host.builder();
//! builder.use_plugin(locale.as_ref());
//! let tokens = builder.analyze("A kutyák").unwrap();
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text(), "kutya");
//! ```

use std::sync::Arc;

use log::info;

use crate::analysis::language::hungarian::{
    self, HungarianLocale, STEMMER_LABEL, STOP_WORD_FILTER_LABEL, TRIMMER_LABEL,
};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::config::DictionaryConfig;
use crate::error::{HunstemError, Result};
use crate::host::{HostCapability, HostNamespace};
use crate::morphology::hunspell::{Hunspell, HunspellLoader};
use crate::morphology::{EngineFactory, EngineLoader, Morphology};
use crate::resource::ResourceLoader;

/// Host capabilities [`HungarianPlugin::register`] depends on.
pub const REQUIRED_CAPABILITIES: [HostCapability; 2] =
    [HostCapability::BaseLibrary, HostCapability::StemmerSupport];

/// A ready Hungarian plugin.
pub struct HungarianPlugin<M: ?Sized = Hunspell> {
    handle: Arc<M>,
}

impl HungarianPlugin<Hunspell> {
    /// Load the hunspell engine with the configured dictionary files.
    pub async fn load(config: &DictionaryConfig) -> Result<Self> {
        let resources = ResourceLoader::from_config(config);
        Self::initialize(
            &HunspellLoader,
            &resources,
            &config.affix_file,
            &config.dictionary_file,
        )
        .await
    }
}

impl<M: Morphology + 'static> HungarianPlugin<M> {
    /// Load the engine module, mount the affix and dictionary resources and
    /// construct the analyzer.
    ///
    /// The first failing step aborts initialization with its error.
    pub async fn initialize<L>(
        loader: &L,
        resources: &ResourceLoader,
        affix_name: &str,
        dictionary_name: &str,
    ) -> Result<Self>
    where
        L: EngineLoader,
        L::Factory: EngineFactory<Handle = M>,
    {
        let mut factory = loader.load_module().await?;

        let affix = resources.load(affix_name).await?;
        let affix_file = factory.mount_buffer(affix.bytes(), affix.name());

        let dictionary = resources.load(dictionary_name).await?;
        let dictionary_file = factory.mount_buffer(dictionary.bytes(), dictionary.name());

        let handle = factory.create(&affix_file, &dictionary_file)?;
        info!(
            "{} analyzer ready ({} from {})",
            handle.name(),
            dictionary_name,
            resources.base_dir().display()
        );

        Ok(HungarianPlugin {
            handle: Arc::new(handle),
        })
    }
}

impl<M: Morphology + ?Sized + 'static> HungarianPlugin<M> {
    /// Wrap an analyzer that is already constructed.
    pub fn with_morphology(handle: Arc<M>) -> Self {
        HungarianPlugin { handle }
    }

    /// The shared analyzer handle.
    pub fn handle(&self) -> &Arc<M> {
        &self.handle
    }

    /// A stemming filter bound to this plugin's analyzer.
    pub fn stemmer(&self) -> StemFilter {
        StemFilter::from_morphology(Arc::clone(&self.handle))
    }

    /// Register the Hungarian functions with `host` and install the `hu`
    /// locale.
    ///
    /// Fails without touching the host when it lacks any of
    /// [`REQUIRED_CAPABILITIES`]. Registering again replaces the functions
    /// under the same labels.
    pub fn register(&self, host: &mut HostNamespace) -> Result<Arc<HungarianLocale>> {
        let missing = host.missing_capabilities(&REQUIRED_CAPABILITIES);
        if !missing.is_empty() {
            return Err(HunstemError::precondition(
                missing.iter().map(HostCapability::to_string),
            ));
        }

        let trimmer: Arc<dyn Filter> = Arc::new(hungarian::trimmer());
        let stop_word_filter: Arc<dyn Filter> = Arc::new(hungarian::stop_word_filter());
        let stemmer: Arc<dyn Filter> = Arc::new(self.stemmer());

        let registry = host.registry();
        registry.register(TRIMMER_LABEL, Arc::clone(&trimmer));
        registry.register(STOP_WORD_FILTER_LABEL, Arc::clone(&stop_word_filter));
        registry.register(STEMMER_LABEL, Arc::clone(&stemmer));

        let locale = Arc::new(HungarianLocale::new(trimmer, stop_word_filter, stemmer));
        host.install_locale(locale.clone());
        Ok(locale)
    }
}

impl<M: ?Sized> Clone for HungarianPlugin<M> {
    fn clone(&self) -> Self {
        HungarianPlugin {
            handle: Arc::clone(&self.handle),
        }
    }
}

impl<M: Morphology + ?Sized> std::fmt::Debug for HungarianPlugin<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HungarianPlugin")
            .field("analyzer", &self.handle.name())
            .finish()
    }
}
