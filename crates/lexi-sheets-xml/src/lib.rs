//! # lexi-sheets-xml
//!
//! Generic attributed element tree for spreadsheet XML documents, and the
//! reader that builds it.
//!
//! ```rust
//! use lexi_sheets_xml::read_str;
//!
//! let root = read_str(r#"<Workbook><Worksheet><Table ss:ExpandedRowCount="2"/></Worksheet></Workbook>"#).unwrap();
//! let table = root.first_descendant("Table").unwrap();
//! assert_eq!(table.attr("ss:ExpandedRowCount"), Some("2"));
//! ```

pub mod element;
pub mod error;
pub mod reader;

pub use element::Element;
pub use error::{XmlError, XmlResult};
pub use reader::{read_document, read_file, read_str};
