//! Document conversion
//!
//! [`Converter`] drives a whole document: authors first, then each
//! worksheet in order (validate the header, register its languages,
//! transform its rows). The first error stops the conversion; everything
//! merged before it stays in the dictionary.

use std::path::Path;

use lexi_sheets_core::Dictionary;
use lexi_sheets_xml::{read_file, read_str, Element};
use log::{debug, info};

use crate::error::{ImportError, ImportResult, WorksheetError};
use crate::language::register_languages;
use crate::options::ImportOptions;
use crate::style::StyleResolver;
use crate::transform::RowTransformer;
use crate::validate::{validate_worksheet, WorksheetLayout};

/// Summary of a successful conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub worksheets: usize,
    /// Words merged into their default languages
    pub rows: usize,
    pub authors_added: usize,
    pub languages_added: usize,
}

/// Converts one parsed document into dictionary content
#[derive(Debug)]
pub struct Converter<'a> {
    root: &'a Element,
    resolver: StyleResolver,
}

impl<'a> Converter<'a> {
    /// Prepare a conversion, loading the document's styles
    pub fn new(root: &'a Element, options: &ImportOptions) -> ImportResult<Self> {
        let resolver = StyleResolver::new(root, options)?;
        Ok(Self { root, resolver })
    }

    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    /// Worksheets in document order
    pub fn worksheets(&self) -> Vec<&'a Element> {
        self.root.descendants("Worksheet")
    }

    /// Author names from the document properties, trimmed, blanks skipped
    pub fn authors(&self) -> Vec<String> {
        let Some(properties) = self.root.first_descendant("DocumentProperties") else {
            return Vec::new();
        };
        properties
            .children
            .iter()
            .filter(|child| {
                let name = child.local_name().to_lowercase();
                name == "author" || name == "lastauthor"
            })
            .map(|child| child.text_content().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Validate every worksheet header without touching a dictionary
    pub fn validate(&self) -> ImportResult<Vec<WorksheetLayout>> {
        let worksheets = self.worksheets();
        if worksheets.is_empty() {
            return Err(ImportError::NoWorksheets);
        }
        worksheets
            .iter()
            .enumerate()
            .map(|(sheet, worksheet)| {
                validate_worksheet(sheet, worksheet, &self.resolver).map_err(ImportError::from)
            })
            .collect()
    }

    /// Convert the document into `dictionary`
    pub fn convert(&self, dictionary: &mut Dictionary) -> ImportResult<ConversionReport> {
        let mut report = ConversionReport::default();

        for name in self.authors() {
            if dictionary.add_author(&name) {
                report.authors_added += 1;
            }
        }

        let worksheets = self.worksheets();
        if worksheets.is_empty() {
            return Err(ImportError::NoWorksheets);
        }

        for (sheet, worksheet) in worksheets.iter().enumerate() {
            let layout = validate_worksheet(sheet, worksheet, &self.resolver)?;

            let added = register_languages(dictionary.languages(), &layout.fields, &layout.fonts)
                .map_err(|kind| WorksheetError::new(sheet, kind))?;
            report.languages_added += added.len();
            for language in added {
                debug!("Registered language {}", language.code());
                dictionary.add_language(language);
            }

            let rows = worksheet
                .first_descendant("Table")
                .map(|table| table.descendants("Row"))
                .unwrap_or_default();
            let merged = RowTransformer::new(sheet, &layout, &self.resolver)
                .transform_rows(&rows, dictionary)?;
            debug!("Worksheet {}: merged {} words", sheet, merged);

            report.rows += merged;
            report.worksheets += 1;
        }

        info!(
            "Converted {} worksheets, {} words, {} new languages",
            report.worksheets, report.rows, report.languages_added
        );
        Ok(report)
    }
}

/// Read a document from a file and convert it into `dictionary`
pub fn import_file<P: AsRef<Path>>(
    path: P,
    dictionary: &mut Dictionary,
    options: &ImportOptions,
) -> ImportResult<ConversionReport> {
    let root = read_file(path)?;
    Converter::new(&root, options)?.convert(dictionary)
}

/// Convert a document held in a string into `dictionary`
pub fn import_str(
    xml: &str,
    dictionary: &mut Dictionary,
    options: &ImportOptions,
) -> ImportResult<ConversionReport> {
    let root = read_str(xml)?;
    Converter::new(&root, options)?.convert(dictionary)
}
