//! Dictionary type - the top-level container

use crate::author::Author;
use crate::language::Language;

/// A dictionary: its authors and its languages (each holding words)
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dictionary {
    authors: Vec<Author>,
    languages: Vec<Language>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Add an author by name.
    ///
    /// Blank names and names already present are skipped; returns whether
    /// the author was added.
    pub fn add_author<S: AsRef<str>>(&mut self, name: S) -> bool {
        let author = Author::new(name);
        if author.is_clear() || self.authors.iter().any(|a| a.name == author.name) {
            return false;
        }
        self.authors.push(author);
        true
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Add a language unless one with the same code exists; returns whether it was added
    pub fn add_language(&mut self, language: Language) -> bool {
        if self.languages.contains(&language) {
            return false;
        }
        self.languages.push(language);
        true
    }

    /// Get a language by code
    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    /// Get a mutable language by code
    pub fn language_mut(&mut self, code: &str) -> Option<&mut Language> {
        self.languages.iter_mut().find(|l| l.code == code)
    }

    /// Total number of words across all languages
    pub fn word_count(&self) -> usize {
        self.languages.iter().map(|l| l.words().len()).sum()
    }
}
