//! Per-language text

/// Text keyed by language code, in insertion order.
///
/// Setting text for a language that is already present replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IndigenousData {
    entries: Vec<(String, String)>,
}

impl IndigenousData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text for a language
    pub fn set<L: Into<String>, T: Into<String>>(&mut self, language: L, text: T) {
        let language = language.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(code, _)| *code == language) {
            Some((_, existing)) => *existing = text,
            None => self.entries.push((language, text)),
        }
    }

    /// Get the text for a language
    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, text)| text.as_str())
    }

    /// Add entries for languages not present yet; existing entries win.
    pub fn combine(&mut self, other: IndigenousData) {
        for (language, text) in other.entries {
            if self.get(&language).is_none() {
                self.entries.push((language, text));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
