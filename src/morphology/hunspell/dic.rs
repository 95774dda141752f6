//! Word list (`.dic`) parsing.

use ahash::AHashMap;

use super::affix::{AffixTable, Flag};
use crate::error::Result;

/// Dictionary words and the flag sets attached to them.
///
/// A word listed more than once (a homonym) keeps one flag set per listing.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    entries: AHashMap<String, Vec<Vec<Flag>>>,
}

impl WordList {
    /// Parse a raw `.dic` buffer using the encoding and flag rules of `affixes`.
    ///
    /// The leading word count is optional. Morphological fields after the
    /// first space or tab are ignored, and `\/` escapes a slash inside a word.
    pub fn parse(bytes: &[u8], affixes: &AffixTable) -> Result<Self> {
        let text = affixes.encoding().decode(bytes)?;
        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .peekable();

        let mut list = WordList::default();
        if let Some(count) = lines.peek().and_then(|line| line.parse::<usize>().ok()) {
            list.entries.reserve(count);
            lines.next();
        }

        for line in lines {
            let (word, raw_flags) = split_entry(line);
            if word.is_empty() {
                continue;
            }
            let flags = match raw_flags {
                Some(raw) => affixes.resolve_flags(raw)?,
                None => Vec::new(),
            };
            list.entries.entry(word).or_default().push(flags);
        }

        Ok(list)
    }

    /// Flag sets of every listing of `word`; empty when the word is absent.
    pub fn homonyms(&self, word: &str) -> &[Vec<Flag>] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether `word` is listed.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split `word/flags morph...` into the word and its raw flag field.
fn split_entry(line: &str) -> (String, Option<&str>) {
    let head = line.split([' ', '\t']).next().unwrap_or(line);

    let mut escaped = false;
    let mut slash = None;
    for (i, c) in head.char_indices() {
        match c {
            '\\' => escaped = !escaped,
            '/' if !escaped => {
                slash = Some(i);
                break;
            }
            _ => escaped = false,
        }
    }

    match slash {
        Some(i) => {
            let flags = &head[i + 1..];
            (
                head[..i].replace("\\/", "/"),
                (!flags.is_empty()).then_some(flags),
            )
        }
        None => (head.replace("\\/", "/"), None),
    }
}
