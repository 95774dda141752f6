//! Morphological analyzer engine interface.
//!
//! The engine is driven in three phases, mirroring how hunspell-style
//! libraries are embedded:
//!
//! 1. [`EngineLoader::load_module`] asynchronously produces an
//!    [`EngineFactory`].
//! 2. The factory mounts raw resource buffers as virtual files
//!    ([`EngineFactory::mount_buffer`]) and builds a handle from two of them
//!    ([`EngineFactory::create`]).
//! 3. The handle answers synchronous [`Morphology::stem`] queries. It is
//!    read-only after construction and shared between threads as-is.
//!
//! [`MemoryMorphology`] is an in-memory handle with fixed answers, useful for
//! exercising the stemming bridge without dictionary files.

use std::collections::HashMap;
use std::future::Future;

use crate::error::Result;

pub mod hunspell;

/// A buffer mounted into an engine's virtual file table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MountedFile {
    path: String,
}

impl MountedFile {
    /// Create a handle for a mounted virtual path.
    pub fn new<S: Into<String>>(path: S) -> Self {
        MountedFile { path: path.into() }
    }

    /// The virtual path the buffer is mounted under.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A constructed analyzer that answers stem queries.
pub trait Morphology: Send + Sync {
    /// Candidate stems for `word`, best first. Empty when the word is unknown.
    fn stem(&self, word: &str) -> Vec<String>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}

/// A loaded engine module able to mount buffers and build handles.
pub trait EngineFactory {
    /// The analyzer handle this factory builds.
    type Handle: Morphology + 'static;

    /// Mount `buffer` as a virtual file called `name`.
    ///
    /// Mounting the same name twice replaces the earlier buffer.
    fn mount_buffer(&mut self, buffer: &[u8], name: &str) -> MountedFile;

    /// Build an analyzer handle from a mounted affix file and dictionary file.
    fn create(&self, affix: &MountedFile, dictionary: &MountedFile) -> Result<Self::Handle>;
}

/// Asynchronous entry point of an engine module.
pub trait EngineLoader {
    /// The factory produced once the module is loaded.
    type Factory: EngineFactory;

    /// Load the engine module.
    fn load_module(&self) -> impl Future<Output = Result<Self::Factory>> + Send;
}

/// An analyzer with fixed, pre-computed answers.
///
/// # Examples
///
/// ```
/// use hunstem::morphology::{MemoryMorphology, Morphology};
///
/// let morphology = MemoryMorphology::from_entries([("kutyák", vec!["kutya"])]);
/// assert_eq!(morphology.stem("kutyák"), vec!["kutya".to_string()]);
/// assert!(morphology.stem("xyzxyz").is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryMorphology {
    entries: HashMap<String, Vec<String>>,
}

impl MemoryMorphology {
    /// Create an analyzer that knows no words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer from `(word, candidates)` pairs.
    pub fn from_entries<I, W, C, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, C)>,
        W: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut morphology = Self::new();
        for (word, candidates) in entries {
            morphology.insert(word, candidates);
        }
        morphology
    }

    /// Set the candidates returned for `word`.
    pub fn insert<W, C, S>(&mut self, word: W, candidates: C)
    where
        W: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            word.into(),
            candidates.into_iter().map(Into::into).collect(),
        );
    }
}

impl Morphology for MemoryMorphology {
    fn stem(&self, word: &str) -> Vec<String> {
        self.entries.get(word).cloned().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
