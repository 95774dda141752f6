//! Affix table (`.aff`) parsing.
//!
//! Only the directives that influence stemming are interpreted: `SET`,
//! `FLAG`, `AF`, `NEEDAFFIX`/`PSEUDOROOT`, `FORBIDDENWORD`, `PFX` and `SFX`.
//! Everything else (suggestion tables, compounding rules, `TRY`, ...) is
//! skipped.

use ahash::AHashMap;
use regex::Regex;

use crate::error::{HunstemError, Result};

/// A flag value. Char and UTF-8 flags hold the code point, long flags pack
/// two code points, numeric flags hold the number.
pub type Flag = u32;

/// Character encoding declared by `SET`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    /// Hunspell's default when `SET` is absent.
    #[default]
    Latin1,
}

impl Encoding {
    /// Map a `SET` label to an encoding.
    pub fn from_label(label: &str) -> Result<Self> {
        match label.to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => Ok(Encoding::Utf8),
            "ISO8859-1" | "ISO-8859-1" | "LATIN1" => Ok(Encoding::Latin1),
            other => Err(HunstemError::dictionary(format!(
                "unsupported encoding '{other}'"
            ))),
        }
    }

    /// Find the `SET` directive in raw affix bytes.
    pub fn sniff(bytes: &[u8]) -> Result<Self> {
        for line in bytes.split(|&b| b == b'\n') {
            let line = strip_bom(line);
            if let Some(rest) = line.strip_prefix(b"SET") {
                let label = String::from_utf8_lossy(rest);
                return Self::from_label(label.trim());
            }
        }
        Ok(Encoding::default())
    }

    /// Decode a resource buffer.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        let bytes = strip_bom(bytes);
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| HunstemError::dictionary(format!("invalid UTF-8: {e}"))),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}

/// How flags are spelled, per the `FLAG` directive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlagMode {
    #[default]
    Char,
    Long,
    Num,
    Utf8,
}

impl FlagMode {
    /// Map a `FLAG` value to a mode.
    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            "long" => Ok(FlagMode::Long),
            "num" => Ok(FlagMode::Num),
            "UTF-8" => Ok(FlagMode::Utf8),
            other => Err(HunstemError::dictionary(format!(
                "unknown flag type '{other}'"
            ))),
        }
    }

    /// Parse a flag string into individual flags.
    pub fn parse_flags(self, raw: &str) -> Result<Vec<Flag>> {
        match self {
            FlagMode::Char | FlagMode::Utf8 => Ok(raw.chars().map(Flag::from).collect()),
            FlagMode::Long => {
                let chars: Vec<char> = raw.chars().collect();
                if chars.len() % 2 != 0 {
                    return Err(HunstemError::dictionary(format!(
                        "odd number of characters in long flags '{raw}'"
                    )));
                }
                Ok(chars
                    .chunks(2)
                    .map(|pair| (Flag::from(pair[0]) << 16) | Flag::from(pair[1]))
                    .collect())
            }
            FlagMode::Num => raw
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(|n| {
                    n.parse::<Flag>().map_err(|e| {
                        HunstemError::dictionary(format!("invalid numeric flag '{n}': {e}"))
                    })
                })
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

/// Condition an affix places on the root it attaches to.
#[derive(Clone, Debug)]
pub struct Condition {
    regex: Option<Regex>,
}

impl Condition {
    /// Compile a hunspell condition (`.`, literals, `[abc]`, `[^abc]`).
    ///
    /// # Examples
    ///
    /// ```
    /// use hunstem::morphology::hunspell::{AffixKind, Condition};
    ///
    /// let condition = Condition::parse("[^aeiou]y", AffixKind::Suffix).unwrap();
    /// assert!(condition.matches("fly"));
    /// assert!(!condition.matches("boy"));
    /// ```
    pub fn parse(raw: &str, kind: AffixKind) -> Result<Self> {
        if raw == "." {
            return Ok(Condition { regex: None });
        }

        let mut pattern = String::with_capacity(raw.len() * 2);
        let mut in_class = false;
        let mut class_start = false;
        for c in raw.chars() {
            match c {
                '[' if !in_class => {
                    in_class = true;
                    class_start = true;
                    pattern.push('[');
                    continue;
                }
                ']' if in_class => {
                    in_class = false;
                    pattern.push(']');
                }
                '^' if class_start => pattern.push('^'),
                '.' if !in_class => pattern.push('.'),
                _ => pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
            }
            class_start = false;
        }
        if in_class {
            return Err(HunstemError::dictionary(format!(
                "unterminated character class in condition '{raw}'"
            )));
        }

        let anchored = match kind {
            AffixKind::Suffix => format!("(?:{pattern})$"),
            AffixKind::Prefix => format!("^(?:{pattern})"),
        };
        Regex::new(&anchored)
            .map(|regex| Condition { regex: Some(regex) })
            .map_err(|e| HunstemError::dictionary(format!("invalid condition '{raw}': {e}")))
    }

    /// Check a candidate root against the condition.
    pub fn matches(&self, root: &str) -> bool {
        self.regex.as_ref().is_none_or(|regex| regex.is_match(root))
    }
}

/// One `PFX`/`SFX` rule.
#[derive(Clone, Debug)]
pub struct AffixEntry {
    pub kind: AffixKind,
    pub flag: Flag,
    pub cross_product: bool,
    /// Characters removed from the root before `append` is added.
    pub strip: String,
    pub append: String,
    /// Flags of affixes allowed to follow this one.
    pub continuation: Vec<Flag>,
    pub condition: Condition,
}

impl AffixEntry {
    /// Undo this affix on `word`, returning the root it would have come from.
    ///
    /// The part of `word` outside the affix must be non-empty and the rebuilt
    /// root must satisfy the condition.
    pub fn strip_from(&self, word: &str) -> Option<String> {
        let root = match self.kind {
            AffixKind::Suffix => {
                let base = word.strip_suffix(self.append.as_str())?;
                if base.is_empty() {
                    return None;
                }
                format!("{base}{}", self.strip)
            }
            AffixKind::Prefix => {
                let base = word.strip_prefix(self.append.as_str())?;
                if base.is_empty() {
                    return None;
                }
                format!("{}{base}", self.strip)
            }
        };

        self.condition.matches(&root).then_some(root)
    }

    /// Check whether `flag` may follow this affix.
    pub fn allows(&self, flag: Flag) -> bool {
        self.continuation.contains(&flag)
    }
}

#[derive(Debug)]
struct PendingBlock {
    kind: AffixKind,
    flag: Flag,
    cross_product: bool,
    remaining: usize,
}

impl PendingBlock {
    /// Fail if the open block declared more entries than it received.
    fn ensure_complete(block: Option<&PendingBlock>) -> Result<()> {
        match block {
            Some(block) if block.remaining > 0 => Err(HunstemError::dictionary(format!(
                "affix block ended {} entries short",
                block.remaining
            ))),
            _ => Ok(()),
        }
    }
}

/// Parsed affix rules plus lookup indexes keyed by affix text.
#[derive(Clone, Debug, Default)]
pub struct AffixTable {
    encoding: Encoding,
    flag_mode: FlagMode,
    aliases: Vec<Vec<Flag>>,
    alias_count: Option<usize>,
    need_affix: Option<Flag>,
    forbidden_word: Option<Flag>,
    prefixes: Vec<AffixEntry>,
    suffixes: Vec<AffixEntry>,
    prefix_index: AHashMap<String, Vec<usize>>,
    suffix_index: AHashMap<String, Vec<usize>>,
}

impl AffixTable {
    /// Parse a raw `.aff` buffer.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let encoding = Encoding::sniff(bytes)?;
        let text = encoding.decode(bytes)?;

        let mut table = AffixTable {
            encoding,
            ..Default::default()
        };
        let mut pending: Option<PendingBlock> = None;

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let result = match fields[0] {
                "FLAG" => table.parse_flag_mode(&fields),
                "AF" => table.parse_alias(&fields),
                "NEEDAFFIX" | "PSEUDOROOT" => table
                    .single_flag(&fields)
                    .map(|flag| table.need_affix = Some(flag)),
                "FORBIDDENWORD" => table
                    .single_flag(&fields)
                    .map(|flag| table.forbidden_word = Some(flag)),
                "PFX" => table.parse_affix(AffixKind::Prefix, &fields, &mut pending),
                "SFX" => table.parse_affix(AffixKind::Suffix, &fields, &mut pending),
                _ => Ok(()),
            };
            result.map_err(|e| match e {
                HunstemError::Dictionary(msg) => {
                    HunstemError::dictionary(format!("affix line {}: {msg}", index + 1))
                }
                other => other,
            })?;
        }

        PendingBlock::ensure_complete(pending.as_ref())?;

        table.build_indexes();
        Ok(table)
    }

    fn parse_flag_mode(&mut self, fields: &[&str]) -> Result<()> {
        let label = field(fields, 1)?;
        self.flag_mode = FlagMode::from_label(label)?;
        Ok(())
    }

    fn parse_alias(&mut self, fields: &[&str]) -> Result<()> {
        let value = field(fields, 1)?;
        if self.alias_count.is_none() {
            let count = value
                .parse::<usize>()
                .map_err(|e| HunstemError::dictionary(format!("invalid AF count '{value}': {e}")))?;
            self.alias_count = Some(count);
            self.aliases.reserve(count);
        } else {
            let flags = self.flag_mode.parse_flags(value)?;
            self.aliases.push(flags);
        }
        Ok(())
    }

    fn single_flag(&self, fields: &[&str]) -> Result<Flag> {
        let raw = field(fields, 1)?;
        self.flag_mode
            .parse_flags(raw)?
            .first()
            .copied()
            .ok_or_else(|| HunstemError::dictionary(format!("empty flag in '{}'", fields[0])))
    }

    fn parse_affix(
        &mut self,
        kind: AffixKind,
        fields: &[&str],
        pending: &mut Option<PendingBlock>,
    ) -> Result<()> {
        let flag = self.single_flag(fields)?;

        let cross_product = match pending.as_ref() {
            Some(block) if block.kind == kind && block.flag == flag && block.remaining > 0 => {
                block.cross_product
            }
            _ => {
                PendingBlock::ensure_complete(pending.as_ref())?;
                let cross_product = field(fields, 2)? == "Y";
                let count = field(fields, 3)?;
                let remaining = count.parse::<usize>().map_err(|e| {
                    HunstemError::dictionary(format!("invalid affix count '{count}': {e}"))
                })?;
                *pending = Some(PendingBlock {
                    kind,
                    flag,
                    cross_product,
                    remaining,
                });
                return Ok(());
            }
        };

        let strip = empty_if_zero(field(fields, 2)?);
        let (append, continuation) = match field(fields, 3)?.split_once('/') {
            Some((append, flags)) => (empty_if_zero(append), self.resolve_flags(flags)?),
            None => (empty_if_zero(field(fields, 3)?), Vec::new()),
        };
        let condition = Condition::parse(fields.get(4).copied().unwrap_or("."), kind)?;

        let entry = AffixEntry {
            kind,
            flag,
            cross_product,
            strip: strip.to_string(),
            append: append.to_string(),
            continuation,
            condition,
        };
        if let Some(block) = pending.as_mut() {
            block.remaining -= 1;
        }

        match kind {
            AffixKind::Prefix => self.prefixes.push(entry),
            AffixKind::Suffix => self.suffixes.push(entry),
        }
        Ok(())
    }

    fn build_indexes(&mut self) {
        for (i, entry) in self.prefixes.iter().enumerate() {
            self.prefix_index
                .entry(entry.append.clone())
                .or_default()
                .push(i);
        }
        for (i, entry) in self.suffixes.iter().enumerate() {
            self.suffix_index
                .entry(entry.append.clone())
                .or_default()
                .push(i);
        }
    }

    /// Resolve a flag field, going through `AF` aliases when the table has them.
    pub fn resolve_flags(&self, raw: &str) -> Result<Vec<Flag>> {
        if self.aliases.is_empty() {
            return self.flag_mode.parse_flags(raw);
        }
        let index = raw
            .parse::<usize>()
            .map_err(|e| HunstemError::dictionary(format!("invalid flag alias '{raw}': {e}")))?;
        index
            .checked_sub(1)
            .and_then(|i| self.aliases.get(i))
            .cloned()
            .ok_or_else(|| HunstemError::dictionary(format!("unknown flag alias {index}")))
    }

    /// Suffix rules whose affix text ends `word`, longest affix first.
    pub fn suffixes_of<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a AffixEntry> + 'a {
        boundaries(word)
            .into_iter()
            .filter_map(move |i| self.suffix_index.get(&word[i..]))
            .flatten()
            .map(move |&i| &self.suffixes[i])
    }

    /// Prefix rules whose affix text starts `word`, shortest affix first.
    pub fn prefixes_of<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a AffixEntry> + 'a {
        boundaries(word)
            .into_iter()
            .filter_map(move |i| self.prefix_index.get(&word[..i]))
            .flatten()
            .map(move |&i| &self.prefixes[i])
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn flag_mode(&self) -> FlagMode {
        self.flag_mode
    }

    pub fn need_affix(&self) -> Option<Flag> {
        self.need_affix
    }

    pub fn forbidden_word(&self) -> Option<Flag> {
        self.forbidden_word
    }

    pub fn prefixes(&self) -> &[AffixEntry] {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &[AffixEntry] {
        &self.suffixes
    }
}

fn field<'a>(fields: &[&'a str], index: usize) -> Result<&'a str> {
    fields.get(index).copied().ok_or_else(|| {
        HunstemError::dictionary(format!("'{}' is missing field {index}", fields.join(" ")))
    })
}

fn empty_if_zero(value: &str) -> &str {
    if value == "0" { "" } else { value }
}

/// Char boundaries of `word`, including its end.
fn boundaries(word: &str) -> Vec<usize> {
    word.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AFF: &str = "SET UTF-8
# plural, then case endings
SFX P Y 2
SFX P a ák/D a
SFX P 0 ak/D [^a]

SFX D Y 1
SFX D 0 nak .

PFX L Y 1
PFX L 0 leg .
";

    #[test]
    fn test_parse_table() {
        let table = AffixTable::parse(AFF.as_bytes()).unwrap();

        assert_eq!(table.encoding(), Encoding::Utf8);
        assert_eq!(table.flag_mode(), FlagMode::Char);
        assert_eq!(table.suffixes().len(), 3);
        assert_eq!(table.prefixes().len(), 1);

        let plural = &table.suffixes()[0];
        assert_eq!(plural.flag, Flag::from('P'));
        assert_eq!(plural.strip, "a");
        assert_eq!(plural.append, "ák");
        assert!(plural.cross_product);
        assert!(plural.allows(Flag::from('D')));
    }

    #[test]
    fn test_suffixes_of() {
        let table = AffixTable::parse(AFF.as_bytes()).unwrap();
        let appends: Vec<&str> = table
            .suffixes_of("kutyáknak")
            .map(|e| e.append.as_str())
            .collect();
        assert_eq!(appends, vec!["nak", "ak"]);

        let appends: Vec<&str> = table.suffixes_of("házak").map(|e| e.append.as_str()).collect();
        assert_eq!(appends, vec!["ak"]);
    }

    #[test]
    fn test_strip_from() {
        let table = AffixTable::parse(AFF.as_bytes()).unwrap();
        let lengthening = &table.suffixes()[0];
        let plain = &table.suffixes()[1];

        assert_eq!(lengthening.strip_from("kutyák").as_deref(), Some("kutya"));
        assert_eq!(plain.strip_from("házak").as_deref(), Some("ház"));
        // condition [^a] rejects a root ending in "a"
        assert_eq!(plain.strip_from("almaak"), None);
        // nothing may remain of the word but the affix
        assert_eq!(plain.strip_from("ak"), None);

        let superlative = &table.prefixes()[0];
        assert_eq!(superlative.strip_from("legnagy").as_deref(), Some("nagy"));
    }

    #[test]
    fn test_condition() {
        let condition = Condition::parse("[^aeiou]y", AffixKind::Suffix).unwrap();
        assert!(condition.matches("fly"));
        assert!(!condition.matches("boy"));

        let condition = Condition::parse("[aá]", AffixKind::Prefix).unwrap();
        assert!(condition.matches("álom"));
        assert!(!condition.matches("ember"));

        assert!(Condition::parse(".", AffixKind::Suffix).unwrap().matches(""));
        assert!(Condition::parse("[ab", AffixKind::Suffix).is_err());
    }

    #[test]
    fn test_flag_modes() {
        assert_eq!(
            FlagMode::Long.parse_flags("AaBb").unwrap(),
            vec![
                (Flag::from('A') << 16) | Flag::from('a'),
                (Flag::from('B') << 16) | Flag::from('b')
            ]
        );
        assert!(FlagMode::Long.parse_flags("Aab").is_err());
        assert_eq!(FlagMode::Num.parse_flags("1,23").unwrap(), vec![1, 23]);
        assert!(FlagMode::Num.parse_flags("1,x").is_err());
        assert_eq!(FlagMode::Utf8.parse_flags("Ő").unwrap(), vec![Flag::from('Ő')]);
        assert!(FlagMode::from_label("short").is_err());
    }

    #[test]
    fn test_aliases() {
        let aff = "FLAG num\nAF 2\nAF 1,2\nAF 2\nSFX 1 Y 1\nSFX 1 0 ban/2 .\n";
        let table = AffixTable::parse(aff.as_bytes()).unwrap();

        assert_eq!(table.resolve_flags("1").unwrap(), vec![1, 2]);
        assert_eq!(table.resolve_flags("2").unwrap(), vec![2]);
        assert!(table.resolve_flags("3").is_err());
        assert!(table.resolve_flags("0").is_err());
        assert_eq!(table.suffixes()[0].continuation, vec![2]);
    }

    #[test]
    fn test_encodings() {
        assert_eq!(Encoding::sniff(b"SET ISO8859-1\n").unwrap(), Encoding::Latin1);
        assert_eq!(Encoding::sniff(b"\xEF\xBB\xBFSET UTF-8\n").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::sniff(b"TRY abc\n").unwrap(), Encoding::Latin1);
        assert!(Encoding::sniff(b"SET KOI8-R\n").is_err());

        assert_eq!(Encoding::Latin1.decode(b"k\xe1v\xe9").unwrap(), "kávé");
        assert!(Encoding::Utf8.decode(b"k\xe1v\xe9").is_err());
    }

    #[test]
    fn test_short_block_is_rejected() {
        let aff = "SET UTF-8\nSFX K Y 2\nSFX K a ák a\n";
        let err = AffixTable::parse(aff.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("1 entries short"));
    }

    #[test]
    fn test_short_block_before_next_header_is_rejected() {
        let aff = "SET UTF-8\nSFX A Y 2\nSFX A 0 s .\nSFX B Y 1\nSFX B 0 k .\n";
        let err = AffixTable::parse(aff.as_bytes()).unwrap_err();
        assert!(matches!(err, HunstemError::Dictionary(_)));
        assert!(err.to_string().contains("affix line 4"));
        assert!(err.to_string().contains("1 entries short"));
    }

    #[test]
    fn test_bad_count_reports_line() {
        let aff = "SET UTF-8\nSFX K Y many\n";
        let err = AffixTable::parse(aff.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("affix line 2"));
    }
}
