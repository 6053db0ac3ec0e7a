use std::fmt;

/// Language utilities for translation lines
///
/// Transcripts carry per-language renderings after the answer line, introduced
/// by the English name of the language followed by a colon. Only a closed set of
/// languages is recognised; anything else is not a translation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationLanguage {
    Danish,
    Dutch,
    French,
    German,
    Norwegian,
    Polish,
    Romanian,
    Swedish,
    Mandarin,
}

impl TranslationLanguage {
    /// Every recognised language, in the order used to build the line pattern
    pub const ALL: [TranslationLanguage; 9] = [
        Self::Danish,
        Self::Dutch,
        Self::French,
        Self::German,
        Self::Norwegian,
        Self::Polish,
        Self::Romanian,
        Self::Swedish,
        Self::Mandarin,
    ];

    // @returns: Capitalized language name as it appears in transcripts
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Danish => "Danish",
            Self::Dutch => "Dutch",
            Self::French => "French",
            Self::German => "German",
            Self::Norwegian => "Norwegian",
            Self::Polish => "Polish",
            Self::Romanian => "Romanian",
            Self::Swedish => "Swedish",
            Self::Mandarin => "Mandarin",
        }
    }

    // @returns: Lowercase key used in the translations map
    pub fn key(&self) -> &'static str {
        match self {
            Self::Danish => "danish",
            Self::Dutch => "dutch",
            Self::French => "french",
            Self::German => "german",
            Self::Norwegian => "norwegian",
            Self::Polish => "polish",
            Self::Romanian => "romanian",
            Self::Swedish => "swedish",
            Self::Mandarin => "mandarin",
        }
    }

    /// Look up a language by name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.display_name().eq_ignore_ascii_case(name))
    }

    /// Regex alternation of all language names, e.g. `Danish|Dutch|...`
    pub fn name_alternation() -> String {
        Self::ALL
            .iter()
            .map(|lang| lang.display_name())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for TranslationLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for TranslationLanguage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::from_name(s).ok_or_else(|| anyhow::anyhow!("Unsupported translation language: {}", s))
    }
}

/// Check if a name is one of the recognised translation languages
pub fn is_translation_language(name: &str) -> bool {
    TranslationLanguage::from_name(name).is_some()
}
