//! Import options

use crate::style::FontSpec;

/// Options for converting a document
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Font used wherever the document declares none
    /// (default: Calabri, Swiss, 12pt, black, width 50)
    pub default_font: FontSpec,
    /// Treat malformed numeric attributes as errors instead of zero
    pub strict_numbers: bool,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_font(mut self, font: FontSpec) -> Self {
        self.default_font = font;
        self
    }

    pub fn with_strict_numbers(mut self, strict: bool) -> Self {
        self.strict_numbers = strict;
        self
    }
}
