//! # lexi-sheets-import
//!
//! Converts spreadsheet XML workbooks into multilingual dictionaries.
//!
//! The first row of each worksheet is a header naming one field per column
//! (`Word:eng`, `Definition:fra`, `Gloss:spa/mx:Spanish:g`, ...). Every
//! following row becomes one word in the header's default language.
//!
//! ## Example
//!
//! ```rust
//! use lexi_sheets_core::Dictionary;
//! use lexi_sheets_import::{import_str, ImportOptions};
//!
//! let xml = r#"<Workbook>
//!  <Worksheet>
//!   <Table ss:ExpandedRowCount="2" ss:ExpandedColumnCount="3">
//!    <Row>
//!     <Cell><Data>Word:eng</Data></Cell>
//!     <Cell><Data>Definition:eng</Data></Cell>
//!     <Cell><Data>Definition:fra</Data></Cell>
//!    </Row>
//!    <Row>
//!     <Cell><Data>wolf</Data></Cell>
//!     <Cell><Data>a canine</Data></Cell>
//!     <Cell><Data>loup</Data></Cell>
//!    </Row>
//!   </Table>
//!  </Worksheet>
//! </Workbook>"#;
//!
//! let mut dictionary = Dictionary::new();
//! let report = import_str(xml, &mut dictionary, &ImportOptions::default()).unwrap();
//! assert_eq!(report.rows, 1);
//!
//! let wolf = dictionary.language("eng").unwrap().word("wolf").unwrap();
//! let definition = wolf.definitions().next().unwrap();
//! assert_eq!(definition.gloss, "a canine");
//! assert_eq!(definition.indigenous.get("fra"), Some("loup"));
//! ```

pub mod convert;
pub mod error;
pub mod field;
pub mod language;
mod number;
pub mod ontology;
pub mod options;
pub mod style;
pub mod transform;
pub mod validate;

pub use convert::{import_file, import_str, ConversionReport, Converter};
pub use error::{
    ErrorCategory, HeaderError, ImportError, ImportResult, InvalidNumber, OntologyError, RowError,
    RowErrorKind, WorksheetError, WorksheetErrorKind,
};
pub use field::{parse_header, ApplyTarget, FieldKind, FieldName, FieldRole, FieldSpec};
pub use language::register_languages;
pub use ontology::build_ontology;
pub use options::ImportOptions;
pub use style::{max_width, FontSpec, StyleResolver};
pub use transform::{CellTarget, RowTransformer};
pub use validate::{validate_worksheet, WorksheetLayout};
