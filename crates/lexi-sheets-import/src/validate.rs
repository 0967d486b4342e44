//! Worksheet structure and header validation

use lexi_sheets_xml::Element;
use log::debug;

use crate::error::{WorksheetError, WorksheetErrorKind};
use crate::field::{parse_header, FieldKind, FieldName, FieldSpec};
use crate::style::{max_width, FontSpec, StyleResolver};

/// A validated worksheet header: one field and one font per column
#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetLayout {
    pub fields: Vec<FieldSpec>,
    /// Header-resolved font per column
    pub fonts: Vec<FontSpec>,
    pub table_font: FontSpec,
    /// Language code of the `Word` column
    pub default_code: String,
    /// Language key of the `Word` column
    pub default_key: String,
}

impl WorksheetLayout {
    pub fn width(&self) -> usize {
        self.fields.len()
    }
}

/// Check a worksheet's table and parse its header row
pub fn validate_worksheet(
    sheet: usize,
    worksheet: &Element,
    resolver: &StyleResolver,
) -> Result<WorksheetLayout, WorksheetError> {
    validate(worksheet, resolver).map_err(|kind| WorksheetError::new(sheet, kind))
}

fn validate(worksheet: &Element, resolver: &StyleResolver) -> Result<WorksheetLayout, WorksheetErrorKind> {
    let numbers = resolver.numbers();
    let table = worksheet
        .first_descendant("Table")
        .ok_or(WorksheetErrorKind::NoTable)?;
    if numbers.count(table.attr("ss:ExpandedRowCount"), "row count")? == 0 {
        return Err(WorksheetErrorKind::NoRows);
    }
    if numbers.count(table.attr("ss:ExpandedColumnCount"), "column count")? == 0 {
        return Err(WorksheetErrorKind::NoColumns);
    }

    let table_font = resolver.table_font(table);
    let column_fonts = resolver.column_fonts(
        &table_font,
        table.attr("ss:DefaultColumnWidth"),
        &table.descendants("Column"),
    )?;

    let cells = table
        .first_descendant("Row")
        .map(|row| row.descendants("Cell"))
        .unwrap_or_default();
    if cells.is_empty() {
        return Err(WorksheetErrorKind::NoFields);
    }

    let mut layout = WorksheetLayout {
        fields: Vec::with_capacity(cells.len()),
        fonts: Vec::with_capacity(cells.len()),
        table_font,
        default_code: String::new(),
        default_key: String::new(),
    };

    for (column, cell) in cells.iter().enumerate() {
        if let Some(index) = numbers.index(cell.attr("ss:Index"), "cell index")? {
            if index > column {
                return Err(WorksheetErrorKind::MissingFieldHeader(column + 1));
            }
        }

        let text = cell.text_content();
        let header = text.trim();
        let mut spec = parse_header(header).map_err(|source| WorksheetErrorKind::IllegalHeader {
            header: header.to_string(),
            source,
        })?;

        if column == 0 {
            if spec.name != FieldName::Word {
                return Err(WorksheetErrorKind::FirstColumnNotWord);
            }
            if spec.language_code.is_empty() {
                return Err(WorksheetErrorKind::NoDefaultLanguage);
            }
            layout.default_code = spec.language_code.clone();
            layout.default_key = spec.language_key.clone();
        } else {
            if spec.kind == FieldKind::Translation && spec.language_code.is_empty() {
                spec.language_code = layout.default_code.clone();
                spec.language_key = layout.default_key.clone();
            }
            if spec.name == FieldName::Word && spec.language_code == layout.default_code {
                return Err(WorksheetErrorKind::DuplicateWord);
            }
        }

        let font = resolver.cell_font(cell, column_fonts.get(&column), &layout.table_font)?;
        let cell_width = numbers.decimal(cell.attr("ss:Width"), "cell width")?;
        spec.width = max_width(&[cell_width, spec.width, font.width, layout.table_font.width]);

        layout.fields.push(spec);
        layout.fonts.push(font);
    }

    debug!(
        "Validated {} columns, default language {}",
        layout.width(),
        layout.default_code
    );
    Ok(layout)
}
