//! Dictionary entries and definition blocks

use crate::format::{ItemFormat, Size};
use crate::indigenous::IndigenousData;
use crate::item::Item;

/// A multilingual block with nested rows and columns.
///
/// Every [`Word`] carries one as its body; "Definition" blocks are groups
/// nested in a word's rows.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Group {
    pub format: ItemFormat,
    pub indigenous: IndigenousData,
    /// Text in the entry's own language
    pub gloss: String,
    pub phonetics: String,
    /// Size of the attached media area
    pub media_size: Size,
    /// Nested blocks
    pub rows: Vec<Item>,
    /// Attributes
    pub columns: Vec<Item>,
}

impl Group {
    /// Create an empty group with the given title
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            format: ItemFormat::titled(title),
            ..Default::default()
        }
    }

    pub fn set_indigenous_data<L: Into<String>, T: Into<String>>(&mut self, language: L, text: T) {
        self.indigenous.set(language, text);
    }

    pub fn set_gloss<S: Into<String>>(&mut self, gloss: S) {
        self.gloss = gloss.into();
    }

    pub fn set_phonetics<S: Into<String>>(&mut self, phonetics: S) {
        self.phonetics = phonetics.into();
    }

    /// Set the widget size and the media area size together
    pub fn set_size(&mut self, size: Size) {
        self.format.size = size;
        self.media_size = size;
    }

    /// Append a nested block, returning its row index
    pub fn add_row(&mut self, item: Item) -> usize {
        self.rows.push(item);
        self.rows.len() - 1
    }

    /// Append an attribute, returning its column index
    pub fn add_column(&mut self, item: Item) -> usize {
        self.columns.push(item);
        self.columns.len() - 1
    }

    /// Nested group at a row index
    pub fn row_group_mut(&mut self, index: usize) -> Option<&mut Group> {
        self.rows.get_mut(index).and_then(Item::as_group_mut)
    }

    /// Fold another group's content into this one.
    ///
    /// Indigenous entries already present win; empty gloss and phonetics are
    /// filled; rows and columns are appended.
    pub fn absorb(&mut self, other: Group) {
        self.indigenous.combine(other.indigenous);
        if self.gloss.is_empty() {
            self.gloss = other.gloss;
        }
        if self.phonetics.is_empty() {
            self.phonetics = other.phonetics;
        }
        self.rows.extend(other.rows);
        self.columns.extend(other.columns);
    }
}

/// A dictionary entry: one per imported row
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Word {
    /// Spelling used to identify the entry within its language
    pub key: String,
    pub entry: Group,
}

impl Word {
    /// Create a word from its spelling
    pub fn new<S: AsRef<str>>(text: S) -> Self {
        Self {
            key: text.as_ref().trim().to_string(),
            entry: Group::new("Word"),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_indigenous_data<L: Into<String>, T: Into<String>>(&mut self, language: L, text: T) {
        self.entry.set_indigenous_data(language, text);
    }

    pub fn indigenous(&self) -> &crate::IndigenousData {
        &self.entry.indigenous
    }

    pub fn rows(&self) -> &[Item] {
        &self.entry.rows
    }

    pub fn columns(&self) -> &[Item] {
        &self.entry.columns
    }

    /// Definition blocks in row order
    pub fn definitions(&self) -> impl Iterator<Item = &Group> {
        self.entry
            .rows
            .iter()
            .filter_map(Item::as_group)
            .filter(|g| g.format.title == "Definition")
    }
}
