//! Hunspell-compatible analyzer engine.
//!
//! [`HunspellLoader`] is the asynchronous module entry point,
//! [`HunspellFactory`] keeps mounted buffers in a virtual file table and
//! builds [`Hunspell`] handles from an affix file and a dictionary file.
//!
//! Stemming undoes affixes in this order and returns every root found, with
//! duplicates removed:
//!
//! 1. the word itself, when listed and usable on its own
//! 2. one suffix
//! 3. one prefix, and a cross-product prefix + suffix pair
//! 4. two suffixes, where the inner suffix's continuation class allows the
//!    outer one
//!
//! A capitalized word that yields nothing is retried in lowercase.
//!
//! # Examples
//!
//! ```
//! use hunstem::morphology::Morphology;
//! use hunstem::morphology::hunspell::Hunspell;
//!
//! let aff = "SET UTF-8\nSFX P Y 1\nSFX P a ák a\n";
//! let dic = "1\nkutya/P\n";
//! let hunspell = Hunspell::from_buffers(aff.as_bytes(), dic.as_bytes()).unwrap();
//!
//! assert_eq!(hunspell.stem("kutyák"), vec!["kutya".to_string()]);
//! assert!(hunspell.stem("xyzxyz").is_empty());
//! ```

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::error::{HunstemError, Result};
use crate::morphology::{EngineFactory, EngineLoader, Morphology, MountedFile};

pub mod affix;
pub mod dic;

pub use affix::{AffixEntry, AffixKind, AffixTable, Condition, Encoding, Flag, FlagMode};
pub use dic::WordList;

/// Entry point of the hunspell engine module.
#[derive(Clone, Copy, Debug, Default)]
pub struct HunspellLoader;

impl EngineLoader for HunspellLoader {
    type Factory = HunspellFactory;

    async fn load_module(&self) -> Result<HunspellFactory> {
        Ok(HunspellFactory::new())
    }
}

/// Loaded engine module: a virtual file table plus the handle constructor.
#[derive(Debug, Default)]
pub struct HunspellFactory {
    files: AHashMap<String, Arc<[u8]>>,
}

impl HunspellFactory {
    /// Create a factory with an empty file table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a mounted buffer. Returns whether it was mounted.
    pub fn unmount(&mut self, file: &MountedFile) -> bool {
        self.files.remove(file.path()).is_some()
    }

    /// Number of mounted buffers.
    pub fn mounted(&self) -> usize {
        self.files.len()
    }

    fn read(&self, file: &MountedFile) -> Result<&[u8]> {
        self.files
            .get(file.path())
            .map(|bytes| bytes.as_ref())
            .ok_or_else(|| HunstemError::dictionary(format!("{} is not mounted", file.path())))
    }
}

impl EngineFactory for HunspellFactory {
    type Handle = Hunspell;

    fn mount_buffer(&mut self, buffer: &[u8], name: &str) -> MountedFile {
        let path = format!("/{}", name.trim_start_matches('/'));
        self.files.insert(path.clone(), Arc::from(buffer));
        MountedFile::new(path)
    }

    fn create(&self, affix: &MountedFile, dictionary: &MountedFile) -> Result<Hunspell> {
        Hunspell::from_buffers(self.read(affix)?, self.read(dictionary)?)
    }
}

/// A constructed hunspell analyzer.
#[derive(Clone, Debug)]
pub struct Hunspell {
    affixes: AffixTable,
    words: WordList,
}

impl Hunspell {
    /// Create an analyzer from parsed tables.
    pub fn new(affixes: AffixTable, words: WordList) -> Self {
        Hunspell { affixes, words }
    }

    /// Parse an affix buffer and a dictionary buffer into an analyzer.
    pub fn from_buffers(affix: &[u8], dictionary: &[u8]) -> Result<Self> {
        let affixes = AffixTable::parse(affix)?;
        let words = WordList::parse(dictionary, &affixes)?;
        Ok(Self::new(affixes, words))
    }

    pub fn affixes(&self) -> &AffixTable {
        &self.affixes
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Check whether `word` is recognized.
    pub fn check(&self, word: &str) -> bool {
        !self.stem(word).is_empty()
    }

    fn is_forbidden(&self, flags: &[Flag]) -> bool {
        self.affixes
            .forbidden_word()
            .is_some_and(|flag| flags.contains(&flag))
    }

    fn needs_affix(&self, flags: &[Flag]) -> bool {
        self.affixes
            .need_affix()
            .is_some_and(|flag| flags.contains(&flag))
    }

    /// Check whether some listing of `root` carries every flag in `required`.
    fn root_has(&self, root: &str, required: &[Flag]) -> bool {
        self.words.homonyms(root).iter().any(|flags| {
            !self.is_forbidden(flags) && required.iter().all(|flag| flags.contains(flag))
        })
    }

    fn analyze(&self, word: &str) -> Vec<String> {
        let homonyms = self.words.homonyms(word);
        if homonyms.iter().any(|flags| self.is_forbidden(flags)) {
            return Vec::new();
        }

        let mut stems = Vec::new();
        if homonyms.iter().any(|flags| !self.needs_affix(flags)) {
            stems.push(word.to_string());
        }

        for suffix in self.affixes.suffixes_of(word) {
            if self.needs_affix(&suffix.continuation) {
                continue;
            }
            if let Some(root) = suffix.strip_from(word)
                && self.root_has(&root, &[suffix.flag])
            {
                stems.push(root);
            }
        }

        for prefix in self.affixes.prefixes_of(word) {
            let Some(rest) = prefix.strip_from(word) else {
                continue;
            };
            if !self.needs_affix(&prefix.continuation) && self.root_has(&rest, &[prefix.flag]) {
                stems.push(rest.clone());
            }
            if !prefix.cross_product {
                continue;
            }
            for suffix in self.affixes.suffixes_of(&rest) {
                if suffix.cross_product
                    && let Some(root) = suffix.strip_from(&rest)
                    && self.root_has(&root, &[prefix.flag, suffix.flag])
                {
                    stems.push(root);
                }
            }
        }

        for outer in self.affixes.suffixes_of(word) {
            let Some(middle) = outer.strip_from(word) else {
                continue;
            };
            for inner in self.affixes.suffixes_of(&middle) {
                if inner.allows(outer.flag)
                    && let Some(root) = inner.strip_from(&middle)
                    && self.root_has(&root, &[inner.flag])
                {
                    stems.push(root);
                }
            }
        }

        stems
    }
}

impl Morphology for Hunspell {
    fn stem(&self, word: &str) -> Vec<String> {
        let mut stems = self.analyze(word);
        if stems.is_empty() {
            let lower = word.to_lowercase();
            if lower != word {
                stems = self.analyze(&lower);
            }
        }

        let mut seen = AHashSet::with_capacity(stems.len());
        stems.retain(|stem| seen.insert(stem.clone()));
        stems
    }

    fn name(&self) -> &'static str {
        "hunspell"
    }
}
