//! Import error types

use std::fmt;

use lexi_sheets_core::OntologyKind;
use lexi_sheets_xml::XmlError;
use thiserror::Error;

/// Result type for import operations
pub type ImportResult<T> = std::result::Result<T, ImportError>;

/// Broad classes of import failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing table, rows, columns or header
    Structural,
    /// Illegal header row
    HeaderSyntax,
    /// Bad data on a row
    RowData,
    /// Unreadable document or malformed numeric attribute
    Input,
}

/// Errors that can occur while converting a document.
///
/// The display form is the message reported to the user: worksheet
/// errors read `Worksheet <index>: <message>`, row errors carry only their
/// own message.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Document has no worksheets
    #[error("There are no worksheets in this dictionary")]
    NoWorksheets,

    /// Worksheet structure or header error
    #[error(transparent)]
    Worksheet(#[from] WorksheetError),

    /// Row data error
    #[error(transparent)]
    Row(#[from] RowError),

    /// Malformed number in the workbook styles
    #[error("Workbook styles: {0}")]
    Styles(#[from] InvalidNumber),

    /// Document could not be read
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),
}

impl ImportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ImportError::NoWorksheets => ErrorCategory::Structural,
            ImportError::Worksheet(e) => e.kind.category(),
            ImportError::Row(e) => e.kind.category(),
            ImportError::Styles(_) | ImportError::Xml(_) => ErrorCategory::Input,
        }
    }
}

/// An error in one worksheet's structure or header row
#[derive(Debug, Error)]
#[error("Worksheet {sheet}: {kind}")]
pub struct WorksheetError {
    /// Worksheet index (0-based)
    pub sheet: usize,
    pub kind: WorksheetErrorKind,
}

impl WorksheetError {
    pub fn new(sheet: usize, kind: WorksheetErrorKind) -> Self {
        Self { sheet, kind }
    }
}

/// Kinds of worksheet error
#[derive(Debug, Error)]
pub enum WorksheetErrorKind {
    #[error("No dictionary data is present")]
    NoTable,

    #[error("No row data")]
    NoRows,

    #[error("No column data")]
    NoColumns,

    #[error("There are no fields specified")]
    NoFields,

    /// A header cell's explicit index skips over a column (1-based column)
    #[error("There is no field header for column {0}")]
    MissingFieldHeader(usize),

    #[error("Column header for field {header} is illegal")]
    IllegalHeader {
        header: String,
        #[source]
        source: HeaderError,
    },

    #[error("The first column field must be 'Word'")]
    FirstColumnNotWord,

    #[error("There is no language code in the initial field")]
    NoDefaultLanguage,

    #[error("Only one word can be specified on a row")]
    DuplicateWord,

    #[error("The dictionary has no languages specified")]
    NoLanguages,

    #[error(transparent)]
    InvalidNumber(#[from] InvalidNumber),
}

impl WorksheetErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WorksheetErrorKind::NoTable
            | WorksheetErrorKind::NoRows
            | WorksheetErrorKind::NoColumns
            | WorksheetErrorKind::NoFields
            | WorksheetErrorKind::MissingFieldHeader(_) => ErrorCategory::Structural,
            WorksheetErrorKind::IllegalHeader { .. }
            | WorksheetErrorKind::FirstColumnNotWord
            | WorksheetErrorKind::NoDefaultLanguage
            | WorksheetErrorKind::DuplicateWord
            | WorksheetErrorKind::NoLanguages => ErrorCategory::HeaderSyntax,
            WorksheetErrorKind::InvalidNumber(_) => ErrorCategory::Input,
        }
    }
}

/// Why a header string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("unknown field name '{0}'")]
    UnknownField(String),

    #[error("language code '{0}' must be exactly 3 characters")]
    LanguageCode(String),
}

/// An error on one data row.
///
/// Displays as `Row <row> <kind>`, except ontology errors, which read
/// `Illegal Ontology data on row <row> column <column>: <reason>`.
#[derive(Debug)]
pub struct RowError {
    /// Worksheet index (0-based)
    pub sheet: usize,
    /// Row index within the table; the header is row 0
    pub row: usize,
    pub kind: RowErrorKind,
}

impl RowError {
    pub fn new(sheet: usize, row: usize, kind: RowErrorKind) -> Self {
        Self { sheet, row, kind }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RowErrorKind::IllegalOntology { column, source } => write!(
                f,
                "Illegal Ontology data on row {} column {}: {}",
                self.row, column, source
            ),
            kind => write!(f, "Row {} {}", self.row, kind),
        }
    }
}

impl std::error::Error for RowError {}

/// Kinds of row error
#[derive(Debug, Error)]
pub enum RowErrorKind {
    #[error("has duplicate columns")]
    DuplicateColumns,

    #[error("has no word specified")]
    NoWord,

    /// Ontology cell could not be decoded (1-based column)
    #[error("has illegal Ontology data in column {column}: {source}")]
    IllegalOntology {
        column: usize,
        #[source]
        source: OntologyError,
    },

    #[error("has {0}")]
    InvalidNumber(#[from] InvalidNumber),
}

impl RowErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RowErrorKind::InvalidNumber(_) => ErrorCategory::Input,
            _ => ErrorCategory::RowData,
        }
    }
}

/// Ontology text that does not fit its shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OntologyError {
    #[error("{kind} expects {expected} comma-separated parts, found {found}")]
    Arity {
        kind: OntologyKind,
        expected: usize,
        found: usize,
    },

    #[error("{kind} expects at least {minimum} comma-separated parts, found {found}")]
    TooFewParts {
        kind: OntologyKind,
        minimum: usize,
        found: usize,
    },
}

/// A numeric attribute that does not parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {what} '{value}'")]
pub struct InvalidNumber {
    /// Which attribute was being read
    pub what: &'static str,
    pub value: String,
}
