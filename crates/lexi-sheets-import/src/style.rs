//! Font and width resolution
//!
//! Fonts are resolved through a chain of scopes: a cell's inline `Font`,
//! then its `StyleID` in the workbook style table, then the column's
//! resolved font, then the table's font. The table font in turn falls back
//! to the document default, so every [`FontSpec`] handed out is complete.

use ahash::AHashMap;
use lexi_sheets_core::{FontFace, Rgb};
use lexi_sheets_xml::Element;
use log::{debug, warn};

use crate::error::InvalidNumber;
use crate::number::Numbers;
use crate::options::ImportOptions;

/// A fully populated font description
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub font_name: String,
    pub family: String,
    /// Point size
    pub size: f64,
    /// `#rrggbb`
    pub color: String,
    /// Column width in points
    pub width: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            font_name: "Calabri".to_string(),
            family: "Swiss".to_string(),
            size: 12.0,
            color: "#000000".to_string(),
            width: 50.0,
        }
    }
}

impl FontSpec {
    pub fn new<N: Into<String>, F: Into<String>, C: Into<String>>(
        font_name: N,
        family: F,
        size: f64,
        color: C,
        width: f64,
    ) -> Self {
        Self {
            font_name: font_name.into(),
            family: family.into(),
            size,
            color: color.into(),
            width,
        }
    }

    /// Size rounded to whole points
    pub fn points(&self) -> u32 {
        self.size.max(0.0).round() as u32
    }

    pub fn face(&self) -> FontFace {
        FontFace::new(self.font_name.clone(), self.points())
    }

    /// Foreground colour; anything but `#rrggbb` is white
    pub fn foreground(&self) -> Rgb {
        Rgb::from_hex(&self.color).unwrap_or(Rgb::WHITE)
    }
}

/// Largest of the candidate widths, never below zero
pub fn max_width(candidates: &[f64]) -> f64 {
    candidates.iter().copied().fold(0.0, f64::max)
}

/// Workbook style table plus the document default font
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    styles: AHashMap<String, FontSpec>,
    default_font: FontSpec,
    numbers: Numbers,
}

impl StyleResolver {
    /// Build from a document root.
    ///
    /// The first `Font` element in the document becomes the default font;
    /// the `Style` entries under `Styles` fill the style table.
    pub fn new(root: &Element, options: &ImportOptions) -> Result<Self, InvalidNumber> {
        let mut resolver = Self {
            styles: AHashMap::new(),
            default_font: options.default_font.clone(),
            numbers: Numbers::new(options.strict_numbers),
        };

        if let Some(font) = root.first_descendant("Font") {
            resolver.default_font = resolver.font_from_element(font)?;
        }
        if let Some(styles) = root.first_descendant("Styles") {
            resolver.build_style_table(&styles.descendants("Style"))?;
        }
        debug!("Loaded {} workbook styles", resolver.styles.len());

        Ok(resolver)
    }

    pub(crate) fn numbers(&self) -> Numbers {
        self.numbers
    }

    pub fn default_font(&self) -> &FontSpec {
        &self.default_font
    }

    /// Look up a style by identifier
    pub fn style(&self, id: &str) -> Option<&FontSpec> {
        self.styles.get(id)
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Add style definitions to the table.
    ///
    /// Styles without an identifier are skipped. A style with its own
    /// `Font` stores that font; otherwise it copies its parent's entry if
    /// the parent was declared earlier.
    pub fn build_style_table(&mut self, styles: &[&Element]) -> Result<(), InvalidNumber> {
        for style in styles {
            let Some(id) = style.attr_non_empty("ss:ID") else {
                continue;
            };
            if let Some(font) = style.first_descendant("Font") {
                let spec = self.font_from_element(font)?;
                self.styles.insert(id.to_string(), spec);
            } else if let Some(parent) = style.attr_non_empty("ss:Parent") {
                match self.styles.get(parent).cloned() {
                    Some(spec) => {
                        self.styles.insert(id.to_string(), spec);
                    }
                    None => debug!("Style {} has unknown parent {}", id, parent),
                }
            }
        }
        Ok(())
    }

    /// Read a `Font` element; missing attributes come from the default font
    pub fn font_from_element(&self, font: &Element) -> Result<FontSpec, InvalidNumber> {
        let base = &self.default_font;
        Ok(FontSpec {
            font_name: font
                .attr_non_empty("ss:FontName")
                .unwrap_or(base.font_name.as_str())
                .to_string(),
            family: font
                .attr_non_empty("x:Family")
                .unwrap_or(base.family.as_str())
                .to_string(),
            size: self.numbers.decimal_or(font.attr("ss:Size"), "font size", base.size)?,
            color: font
                .attr_non_empty("ss:Color")
                .unwrap_or(base.color.as_str())
                .to_string(),
            width: base.width,
        })
    }

    /// Font for a table: its style, else the default font
    pub fn table_font(&self, table: &Element) -> FontSpec {
        table
            .attr_non_empty("ss:StyleID")
            .and_then(|id| self.style(id))
            .unwrap_or(&self.default_font)
            .clone()
    }

    /// Resolve fonts for a table's `Column` definitions, keyed by 0-based column.
    ///
    /// An explicit `ss:Index` moves the column cursor forward; one behind the
    /// cursor is ignored. Each font's width is widened to the column's own
    /// width and the table's default column width.
    pub fn column_fonts(
        &self,
        table_font: &FontSpec,
        default_width: Option<&str>,
        columns: &[&Element],
    ) -> Result<AHashMap<usize, FontSpec>, InvalidNumber> {
        let default_width = self.numbers.decimal(default_width, "default column width")?;
        let mut fonts = AHashMap::new();
        let mut position = 0;

        for column in columns {
            if let Some(index) = self.numbers.index(column.attr("ss:Index"), "column index")? {
                if index < position {
                    warn!(
                        "Ignoring column index {} behind column {}",
                        index + 1,
                        position + 1
                    );
                } else {
                    position = index;
                }
            }

            let mut font = column
                .attr_non_empty("ss:StyleID")
                .and_then(|id| self.style(id))
                .unwrap_or(table_font)
                .clone();
            let width = self.numbers.decimal(column.attr("ss:Width"), "column width")?;
            font.width = max_width(&[font.width, default_width, width]);

            fonts.insert(position, font);
            position += 1;
        }

        Ok(fonts)
    }

    /// Font for a cell: inline `Font`, else its style, else the column, else the table
    pub fn cell_font(
        &self,
        cell: &Element,
        column: Option<&FontSpec>,
        table: &FontSpec,
    ) -> Result<FontSpec, InvalidNumber> {
        if let Some(font) = cell.child("Font") {
            return self.font_from_element(font);
        }
        let font = cell
            .attr_non_empty("ss:StyleID")
            .and_then(|id| self.style(id))
            .or(column)
            .unwrap_or(table);
        Ok(font.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexi_sheets_xml::read_str;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const STYLES: &str = r##"<Workbook>
 <Styles>
  <Style ss:ID="Default" ss:Name="Normal">
   <Font ss:FontName="Arial" x:Family="Swiss" ss:Size="10"/>
  </Style>
  <Style ss:ID="s21"><Font ss:FontName="Charis SIL" ss:Size="14" ss:Color="#FF0000"/></Style>
  <Style ss:ID="s22" ss:Parent="s21"/>
  <Style ss:ID="s23" ss:Parent="s24"/>
  <Style ss:ID="s24" ss:Parent="s21"/>
  <Style><Font ss:FontName="Nameless"/></Style>
 </Styles>
</Workbook>"##;

    fn resolver() -> StyleResolver {
        let root = read_str(STYLES).unwrap();
        StyleResolver::new(&root, &ImportOptions::default()).unwrap()
    }

    #[test]
    fn test_default_font() {
        let font = FontSpec::default();
        assert_eq!(font.font_name, "Calabri");
        assert_eq!(font.family, "Swiss");
        assert_eq!(font.points(), 12);
        assert_eq!(font.foreground(), Rgb::BLACK);
        assert_eq!(font.width, 50.0);
    }

    #[test]
    fn test_document_default_font() {
        let resolver = resolver();
        let font = resolver.default_font();
        assert_eq!(font.font_name, "Arial");
        assert_eq!(font.points(), 10);
        // Not declared on the element: inherited from the built-in default
        assert_eq!(font.color, "#000000");
        assert_eq!(font.width, 50.0);
    }

    #[test]
    fn test_style_table() {
        let resolver = resolver();
        assert_eq!(resolver.style_count(), 4);

        let s21 = resolver.style("s21").unwrap();
        assert_eq!(s21.font_name, "Charis SIL");
        assert_eq!(s21.family, "Swiss");
        assert_eq!(s21.foreground(), Rgb::new(255, 0, 0));

        assert_eq!(resolver.style("s22"), Some(s21));
        // Forward parent reference is not resolved
        assert_eq!(resolver.style("s23"), None);
        assert_eq!(resolver.style("s24"), Some(s21));
    }

    #[test]
    fn test_column_fonts() {
        let resolver = resolver();
        let root = read_str(
            r#"<Table>
                <Column ss:Width="80"/>
                <Column ss:Index="4" ss:StyleID="s21"/>
                <Column ss:Index="2" ss:Width="20"/>
            </Table>"#,
        )
        .unwrap();
        let columns = root.descendants("Column");
        let table_font = resolver.default_font().clone();
        let fonts = resolver.column_fonts(&table_font, Some("60"), &columns).unwrap();

        assert_eq!(fonts.len(), 3);
        assert_eq!(fonts[&0].width, 80.0);
        assert_eq!(fonts[&0].font_name, "Arial");
        assert_eq!(fonts[&3].font_name, "Charis SIL");
        assert_eq!(fonts[&3].width, 60.0);
        // Backwards index ignored: placed after column 4
        assert_eq!(fonts[&4].width, 60.0);
        assert!(!fonts.contains_key(&1));
    }

    #[test]
    fn test_cell_font_priority() {
        let resolver = resolver();
        let table = FontSpec::new("Table", "Roman", 9.0, "#000000", 40.0);
        let column = FontSpec::new("Column", "Roman", 11.0, "#000000", 70.0);

        let inline = read_str(r#"<Cell ss:StyleID="s21"><Font ss:FontName="Inline"/></Cell>"#).unwrap();
        assert_eq!(
            resolver.cell_font(&inline, Some(&column), &table).unwrap().font_name,
            "Inline"
        );

        let styled = read_str(r#"<Cell ss:StyleID="s21"/>"#).unwrap();
        assert_eq!(
            resolver.cell_font(&styled, Some(&column), &table).unwrap().font_name,
            "Charis SIL"
        );

        let unknown = read_str(r#"<Cell ss:StyleID="nope"/>"#).unwrap();
        assert_eq!(resolver.cell_font(&unknown, Some(&column), &table).unwrap(), column);
        assert_eq!(resolver.cell_font(&unknown, None, &table).unwrap(), table);
    }

    #[test]
    fn test_strict_font_size() {
        let root = read_str(r#"<Workbook><Font ss:Size="big"/></Workbook>"#).unwrap();
        let lenient = StyleResolver::new(&root, &ImportOptions::default()).unwrap();
        assert_eq!(lenient.default_font().points(), 12);

        let strict = ImportOptions::new().with_strict_numbers(true);
        let err = StyleResolver::new(&root, &strict).unwrap_err();
        assert_eq!(err.what, "font size");
    }

    proptest! {
        #[test]
        fn max_width_bounds_inputs(
            widths in proptest::collection::vec(0.0f64..10_000.0, 1..=4)
        ) {
            let width = max_width(&widths);
            for w in &widths {
                prop_assert!(width >= *w);
            }
            prop_assert!(widths.contains(&width));
        }

        #[test]
        fn resolved_font_is_never_empty(
            name in proptest::option::of("[A-Za-z ]{0,12}"),
            size in proptest::option::of("[0-9a-z.]{0,4}"),
        ) {
            let mut font = Element::new("Font");
            if let Some(name) = name {
                font = font.with_attr("ss:FontName", name);
            }
            if let Some(size) = size {
                font = font.with_attr("ss:Size", size);
            }
            let root = Element::new("Workbook").with_child(font);
            let resolver = StyleResolver::new(&root, &ImportOptions::default()).unwrap();
            prop_assert!(!resolver.default_font().font_name.is_empty());
            prop_assert!(!resolver.default_font().color.is_empty());
        }
    }
}
