//! Hungarian normalization data: word characters, stop words, the labels
//! the Hungarian functions are registered under and the `hu` locale
//! activation.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::trimmer::{CharRange, TrimmerFilter};
use crate::host::{IndexBuilder, LocalePlugin};

/// Locale code the activation function is installed under.
pub const LOCALE: &str = "hu";

/// Registry label of the Hungarian trimmer.
pub const TRIMMER_LABEL: &str = "trimmer-hu";

/// Registry label of the Hungarian stop-word filter.
pub const STOP_WORD_FILTER_LABEL: &str = "stopWordFilter-hu";

/// Registry label of the Hungarian stemmer.
pub const STEMMER_LABEL: &str = "stemmer-hu";

/// Latin-script letters, including the extended blocks used by Hungarian.
///
/// Digits are deliberately absent: a purely numeric token trims to nothing.
pub const WORD_CHARACTERS: &[CharRange] = &[
    ('A', 'Z'),
    ('a', 'z'),
    ('\u{AA}', '\u{AA}'),
    ('\u{BA}', '\u{BA}'),
    ('\u{C0}', '\u{D6}'),
    ('\u{D8}', '\u{F6}'),
    ('\u{F8}', '\u{2B8}'),
    ('\u{2E0}', '\u{2E4}'),
    ('\u{1D00}', '\u{1D25}'),
    ('\u{1D2C}', '\u{1D5C}'),
    ('\u{1D62}', '\u{1D65}'),
    ('\u{1D6B}', '\u{1D77}'),
    ('\u{1D79}', '\u{1DBE}'),
    ('\u{1E00}', '\u{1EFF}'),
    ('\u{2071}', '\u{2071}'),
    ('\u{207F}', '\u{207F}'),
    ('\u{2090}', '\u{209C}'),
    ('\u{212A}', '\u{212B}'),
    ('\u{2132}', '\u{2132}'),
    ('\u{214E}', '\u{214E}'),
    ('\u{2160}', '\u{2188}'),
    ('\u{2C60}', '\u{2C7F}'),
    ('\u{A722}', '\u{A787}'),
    ('\u{A78B}', '\u{A7AD}'),
    ('\u{A7B0}', '\u{A7B7}'),
    ('\u{A7F7}', '\u{A7FF}'),
    ('\u{AB30}', '\u{AB5A}'),
    ('\u{AB5C}', '\u{AB64}'),
    ('\u{FB00}', '\u{FB06}'),
    ('\u{FF21}', '\u{FF3A}'),
    ('\u{FF41}', '\u{FF5A}'),
];

/// Hungarian stop words. Matching is exact and case-sensitive. Some entries
/// are spelled with `õ` (U+00F5) rather than `ő`, and are matched as written.
pub const STOP_WORDS: &[&str] = &[
    "a", "abban", "ahhoz", "ahogy", "ahol", "aki", "akik", "akkor", "alatt", "amely", "amelyek",
    "amelyekben", "amelyeket", "amelyet", "amelynek", "ami", "amikor", "amit", "amolyan", "amíg",
    "annak", "arra", "arról", "az", "azok", "azon", "azonban", "azt", "aztán", "azután", "azzal",
    "azért", "be", "belül", "benne", "bár", "cikk", "cikkek", "cikkeket", "csak", "de", "e",
    "ebben", "eddig", "egy", "egyes", "egyetlen", "egyik", "egyre", "egyéb", "egész", "ehhez",
    "ekkor", "el", "ellen", "elsõ", "elég", "elõ", "elõször", "elõtt", "emilyen", "ennek", "erre",
    "ez", "ezek", "ezen", "ezt", "ezzel", "ezért", "fel", "felé", "hanem", "hiszen", "hogy",
    "hogyan", "igen", "ill", "ill.", "illetve", "ilyen", "ilyenkor", "ismét", "ison", "itt",
    "jobban", "jó", "jól", "kell", "kellett", "keressünk", "keresztül", "ki", "kívül", "között",
    "közül", "legalább", "legyen", "lehet", "lehetett", "lenne", "lenni", "lesz", "lett", "maga",
    "magát", "majd", "majd", "meg", "mellett", "mely", "melyek", "mert", "mi", "mikor", "milyen",
    "minden", "mindenki", "mindent", "mindig", "mint", "mintha", "mit", "mivel", "miért", "most",
    "már", "más", "másik", "még", "míg", "nagy", "nagyobb", "nagyon", "ne", "nekem", "neki", "nem",
    "nincs", "néha", "néhány", "nélkül", "olyan", "ott", "pedig", "persze", "rá", "s", "saját",
    "sem", "semmi", "sok", "sokat", "sokkal", "szemben", "szerint", "szinte", "számára", "talán",
    "tehát", "teljes", "tovább", "továbbá", "több", "ugyanis", "utolsó", "után", "utána", "vagy",
    "vagyis", "vagyok", "valaki", "valami", "valamint", "való", "van", "vannak", "vele", "vissza",
    "viszont", "volna", "volt", "voltak", "voltam", "voltunk", "által", "általában", "át", "én",
    "éppen", "és", "így", "õ", "õk", "õket", "össze", "úgy", "új", "újabb", "újra",
];

/// Hungarian stop words as a HashSet.
pub static STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| STOP_WORDS.iter().map(|&s| s.to_string()).collect());

/// The Hungarian trimmer.
pub fn trimmer() -> TrimmerFilter {
    TrimmerFilter::new(WORD_CHARACTERS)
}

/// The Hungarian stop-word filter.
pub fn stop_word_filter() -> StopFilter {
    StopFilter::with_stop_words(STOP_WORDS_SET.clone())
}

/// Locale activation installed under [`LOCALE`].
///
/// Activating a builder replaces its processing pipeline with exactly
/// trimmer, stop-word filter, stemmer, and its search pipeline (when it has
/// one) with exactly the stemmer. Stages resolve through the builder's
/// registry by label; the locale's own functions are used only for labels
/// nothing is registered under.
#[derive(Clone)]
pub struct HungarianLocale {
    trimmer: Arc<dyn Filter>,
    stop_word_filter: Arc<dyn Filter>,
    stemmer: Arc<dyn Filter>,
}

impl HungarianLocale {
    pub fn new(
        trimmer: Arc<dyn Filter>,
        stop_word_filter: Arc<dyn Filter>,
        stemmer: Arc<dyn Filter>,
    ) -> Self {
        HungarianLocale {
            trimmer,
            stop_word_filter,
            stemmer,
        }
    }

    pub fn trimmer(&self) -> &Arc<dyn Filter> {
        &self.trimmer
    }

    pub fn stop_word_filter(&self) -> &Arc<dyn Filter> {
        &self.stop_word_filter
    }

    pub fn stemmer(&self) -> &Arc<dyn Filter> {
        &self.stemmer
    }
}

impl LocalePlugin for HungarianLocale {
    fn code(&self) -> &str {
        LOCALE
    }

    fn activate(&self, builder: &mut IndexBuilder) {
        let pipeline = builder.pipeline_mut();
        pipeline.reset();
        pipeline.add_registered(TRIMMER_LABEL, &self.trimmer);
        pipeline.add_registered(STOP_WORD_FILTER_LABEL, &self.stop_word_filter);
        pipeline.add_registered(STEMMER_LABEL, &self.stemmer);

        if let Some(search_pipeline) = builder.search_pipeline_mut() {
            search_pipeline.reset();
            search_pipeline.add_registered(STEMMER_LABEL, &self.stemmer);
        }
    }
}

impl std::fmt::Debug for HungarianLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HungarianLocale")
            .field("code", &LOCALE)
            .finish()
    }
}
