//! # hunstem
//!
//! Hungarian text normalization for search indexing, backed by a
//! hunspell-compatible morphological analyzer.
//!
//! ## Features
//!
//! - Asynchronous analyzer initialization from `.aff`/`.dic` resources
//! - Trimmer, stop-word filter and stemmer registered under stable labels
//! - Identity fallback for words the analyzer does not know
//! - Plain text and updatable token shapes
//! - In-process host with a function registry, pipelines and builders
//!
//! ## Example
//!
//! ```no_run
//! use hunstem::config::DictionaryConfig;
//! use hunstem::host::HostNamespace;
//! use hunstem::plugin::HungarianPlugin;
//!
//! # async fn example() -> hunstem::error::Result<()> {
//! let plugin = HungarianPlugin::load(&DictionaryConfig::default()).await?;
//!
//! let mut host = HostNamespace::new();
//! let locale = plugin.register(&mut host)?;
//!
//! let mut builder = host.builder();
//! builder.use_plugin(locale.as_ref());
//! let tokens = builder.analyze("A kutyák ugatnak")?;
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod morphology;
pub mod plugin;
pub mod resource;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
