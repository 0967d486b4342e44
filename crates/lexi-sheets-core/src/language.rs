//! Dictionary languages

use crate::word::Word;

/// Display font registered for a language
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LanguageFont {
    /// Font family name
    pub name: String,
    /// Font size in points
    pub size: u32,
    /// Human-readable language name (e.g., "French"); may be empty
    pub language_name: String,
}

impl LanguageFont {
    pub fn new<N: Into<String>, L: Into<String>>(name: N, size: u32, language_name: L) -> Self {
        Self {
            name: name.into(),
            size,
            language_name: language_name.into(),
        }
    }
}

/// A language registered in the dictionary, with its words.
///
/// Languages compare equal by code only.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Language {
    /// Language code, e.g. `eng` or `eng/us`
    pub code: String,
    pub font: LanguageFont,
    words: Vec<Word>,
}

impl Language {
    pub fn new<S: Into<String>>(code: S, font: LanguageFont) -> Self {
        Self {
            code: code.into(),
            font,
            words: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Look up a word by key
    pub fn word(&self, key: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.key == key)
    }

    /// Add a word, combining it with an existing word of the same key.
    ///
    /// Combining keeps existing per-language text, fills empty gloss and
    /// phonetics and appends the incoming rows and columns.
    pub fn merge_word(&mut self, word: Word) {
        match self.words.iter_mut().find(|w| w.key == word.key) {
            Some(existing) => existing.entry.absorb(word.entry),
            None => self.words.push(word),
        }
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Language {}
