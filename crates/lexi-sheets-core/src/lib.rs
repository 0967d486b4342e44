//! # lexi-sheets-core
//!
//! Core data structures for the lexi-sheets dictionary importer.
//!
//! This crate provides the dictionary model that the importer builds:
//! - [`Dictionary`] - The top-level container of authors and languages
//! - [`Language`] - A language registry entry holding its words
//! - [`Word`], [`Group`] - Entries and nested definition blocks
//! - [`Item`] - Leaf content ([`Reference`], [`Unit`], [`Comment`], [`Ontology`])
//!
//! ## Example
//!
//! ```rust
//! use lexi_sheets_core::{Dictionary, Language, LanguageFont, Word};
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.add_language(Language::new("eng", LanguageFont::new("Calabri", 12, "English")));
//!
//! let mut word = Word::new("wolf");
//! word.set_indigenous_data("fra", "loup");
//! dictionary.language_mut("eng").unwrap().merge_word(word);
//!
//! assert_eq!(dictionary.word_count(), 1);
//! ```

pub mod author;
pub mod dictionary;
pub mod format;
pub mod indigenous;
pub mod item;
pub mod language;
pub mod word;

pub use author::Author;
pub use dictionary::Dictionary;
pub use format::{FontFace, ItemFormat, Rgb, Size};
pub use indigenous::IndigenousData;
pub use item::{Comment, Item, Ontology, OntologyKind, Reference, Unit};
pub use language::{Language, LanguageFont};
pub use word::{Group, Word};

/// Nominal width of a column (attribute) widget
pub const COLUMN_WIDGET_WIDTH: u32 = 150;

/// Nominal width of a row widget
pub const ROW_WIDGET_WIDTH: u32 = 400;

/// Width of a definition block and of the word column
pub const DEFINITION_WIDGET_WIDTH: u32 = 400;

/// Width of an example block
pub const EXAMPLE_WIDGET_WIDTH: u32 = 350;

/// Height of a definition block
pub const WIDGET_HEIGHT: u32 = 30;

/// Height of an example block
pub const TEXT_HEIGHT: u32 = 25;

/// Height given to every imported cell
pub const AREA_WIDGET_HEIGHT: u32 = 50;
