//! Row transformation
//!
//! Every data row becomes one [`Word`], merged into the worksheet's default
//! language. Cells are visited in column order and routed by their field:
//!
//! - `Word` creates the entry; further word columns add translations
//! - reference fields (`Gloss`, `Usage`, ...) build a [`Reference`] that
//!   later language columns of the same field extend
//! - `Definition` opens nested definition groups
//! - `Example` builds a [`Unit`] that later language columns extend
//! - comment fields and ontology fields add one item per cell
//!
//! New items go on the word or on the active definition, as the field's
//! apply target says.

use lexi_sheets_core::{
    Comment, Dictionary, Group, Item, ItemFormat, Reference, Size, Unit, Word, AREA_WIDGET_HEIGHT,
    DEFINITION_WIDGET_WIDTH, EXAMPLE_WIDGET_WIDTH, TEXT_HEIGHT, WIDGET_HEIGHT,
};
use lexi_sheets_xml::Element;
use log::{debug, warn};

use crate::error::{InvalidNumber, RowError, RowErrorKind};
use crate::field::{ApplyTarget, FieldName, FieldRole, FieldSpec};
use crate::ontology::build_ontology;
use crate::style::StyleResolver;
use crate::validate::WorksheetLayout;

/// Something a cell can be poured into: its format plus the text of the
/// cell's `Data` and `Phonetics` children
pub trait CellTarget {
    fn format_mut(&mut self) -> &mut ItemFormat;

    fn apply_data(&mut self, _language: &str, _text: &str) {}

    fn apply_phonetics(&mut self, _text: &str) {}
}

impl CellTarget for Word {
    fn format_mut(&mut self) -> &mut ItemFormat {
        &mut self.entry.format
    }

    fn apply_phonetics(&mut self, text: &str) {
        self.entry.set_phonetics(text);
    }
}

impl CellTarget for Group {
    fn format_mut(&mut self) -> &mut ItemFormat {
        &mut self.format
    }

    fn apply_data(&mut self, language: &str, text: &str) {
        self.set_indigenous_data(language, text);
    }

    fn apply_phonetics(&mut self, text: &str) {
        self.set_phonetics(text);
    }
}

impl CellTarget for Reference {
    fn format_mut(&mut self) -> &mut ItemFormat {
        &mut self.format
    }

    fn apply_data(&mut self, language: &str, text: &str) {
        self.set_indigenous_data(language, text);
    }
}

impl CellTarget for Unit {
    fn format_mut(&mut self) -> &mut ItemFormat {
        &mut self.format
    }

    fn apply_data(&mut self, language: &str, text: &str) {
        self.set_indigenous_data(language, text);
    }
}

impl CellTarget for Comment {
    fn format_mut(&mut self) -> &mut ItemFormat {
        &mut self.format
    }

    fn apply_data(&mut self, _language: &str, text: &str) {
        self.set_comment(text);
    }

    fn apply_phonetics(&mut self, text: &str) {
        self.set_phonetics(text);
    }
}

/// The group new group-level items attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Host {
    /// The row's word
    #[default]
    Word,
    /// A definition group at this index of the word's rows
    Definition(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Row,
    Column,
}

/// Location of an attached item within the row's word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    host: Host,
    placement: Placement,
    index: usize,
}

/// Per-row state; a fresh one is used for every row
#[derive(Debug, Default)]
struct RowState {
    word: Option<Word>,
    group: Host,
    example: Option<Slot>,
    reference: Option<Slot>,
    gloss_set: bool,
}

fn host_mut(word: &mut Word, host: Host) -> Option<&mut Group> {
    match host {
        Host::Word => Some(&mut word.entry),
        Host::Definition(index) => word.entry.row_group_mut(index),
    }
}

fn slot_mut(word: &mut Word, slot: Slot) -> Option<&mut Item> {
    let group = host_mut(word, slot.host)?;
    match slot.placement {
        Placement::Row => group.rows.get_mut(slot.index),
        Placement::Column => group.columns.get_mut(slot.index),
    }
}

fn place(group: &mut Group, placement: Placement, item: Item) -> usize {
    match placement {
        Placement::Row => group.add_row(item),
        Placement::Column => group.add_column(item),
    }
}

/// Attach an item to the word, or to the current definition when the
/// field targets the group and one is open
fn attach(word: &mut Word, target: ApplyTarget, current: Host, placement: Placement, item: Item) -> Slot {
    if let (ApplyTarget::Group, Host::Definition(index)) = (target, current) {
        if let Some(group) = word.entry.row_group_mut(index) {
            let index = place(group, placement, item);
            return Slot {
                host: current,
                placement,
                index,
            };
        }
    }
    Slot {
        host: Host::Word,
        placement,
        index: place(&mut word.entry, placement, item),
    }
}

/// Text of a cell's `Data` child, or of the whole cell when it has none
fn cell_text(cell: &Element) -> String {
    let text = match cell.child("Data") {
        Some(data) => data.text_content(),
        None => cell.text_content(),
    };
    text.trim().to_string()
}

/// Turns the data rows of one validated worksheet into words
pub struct RowTransformer<'a> {
    sheet: usize,
    layout: &'a WorksheetLayout,
    resolver: &'a StyleResolver,
}

impl<'a> RowTransformer<'a> {
    pub fn new(sheet: usize, layout: &'a WorksheetLayout, resolver: &'a StyleResolver) -> Self {
        Self {
            sheet,
            layout,
            resolver,
        }
    }

    /// Transform every row after the header, merging each word into the
    /// default language. Returns the number of words merged.
    ///
    /// Words merged before a failing row stay in the dictionary.
    pub fn transform_rows(&self, rows: &[&Element], dictionary: &mut Dictionary) -> Result<usize, RowError> {
        let mut merged = 0;
        for (number, row) in rows.iter().enumerate().skip(1) {
            let Some(word) = self.transform_row(number, row, dictionary)? else {
                debug!("Skipping empty row {}", number);
                continue;
            };
            match dictionary.language_mut(&self.layout.default_code) {
                Some(language) => {
                    language.merge_word(word);
                    merged += 1;
                }
                None => warn!(
                    "Dropping row {}: language {} is not registered",
                    number, self.layout.default_code
                ),
            }
        }
        Ok(merged)
    }

    /// Build the word for one row; `None` for a row without cells.
    ///
    /// Reversal mirrors are merged into their languages as the row is read.
    pub fn transform_row(
        &self,
        number: usize,
        row: &Element,
        dictionary: &mut Dictionary,
    ) -> Result<Option<Word>, RowError> {
        self.transform_cells(row, dictionary)
            .map_err(|kind| RowError::new(self.sheet, number, kind))
    }

    fn transform_cells(&self, row: &Element, dictionary: &mut Dictionary) -> Result<Option<Word>, RowErrorKind> {
        let numbers = self.resolver.numbers();
        let mut state = RowState::default();
        let mut next = 0;

        for (position, cell) in row.descendants("Cell").into_iter().enumerate() {
            let mut column = next;
            if let Some(index) = numbers.index(cell.attr("ss:Index"), "cell index")? {
                if index < next {
                    return Err(RowErrorKind::DuplicateColumns);
                }
                column = index;
            }
            if position == 0 && column != 0 {
                return Err(RowErrorKind::NoWord);
            }
            next = column + 1;

            let Some(field) = self.layout.fields.get(column) else {
                warn!("Ignoring cell in column {} beyond the header", column + 1);
                continue;
            };
            self.transform_cell(&mut state, column, field, cell, dictionary)?;
        }

        Ok(state.word)
    }

    fn transform_cell(
        &self,
        state: &mut RowState,
        column: usize,
        field: &FieldSpec,
        cell: &Element,
        dictionary: &mut Dictionary,
    ) -> Result<(), RowErrorKind> {
        let role = field.name.role();
        if role != FieldRole::Definition {
            state.gloss_set = false;
        }
        let language = if field.language_key.is_empty() {
            self.layout.default_key.as_str()
        } else {
            field.language_key.as_str()
        };
        let is_default = language == self.layout.default_key;
        let text = cell_text(cell);

        if role == FieldRole::Word {
            match state.word.as_mut() {
                Some(word) => word.set_indigenous_data(language, text),
                None => {
                    let mut word = Word::new(&text);
                    self.configure(cell, column, field, language, &mut word)?;
                    state.word = Some(word);
                    state.group = Host::Word;
                }
            }
            return Ok(());
        }

        let Some(word) = state.word.as_mut() else {
            return Err(RowErrorKind::NoWord);
        };

        match role {
            FieldRole::Word => {}

            FieldRole::Reference => {
                if field.name == FieldName::Reversals && !is_default && !word.key().is_empty() {
                    let mut mirror = Word::new(&text);
                    mirror.set_indigenous_data(self.layout.default_key.as_str(), word.key());
                    let code = if dictionary.language(language).is_some() {
                        language
                    } else {
                        field.language_code.as_str()
                    };
                    match dictionary.language_mut(code) {
                        Some(target) => target.merge_word(mirror),
                        None => debug!("No language {} for reversal {}", code, text),
                    }
                }

                let active = match state.reference {
                    Some(slot) if !is_default => slot_mut(word, slot)
                        .and_then(Item::as_reference_mut)
                        .filter(|r| r.format.title == field.name.as_str()),
                    _ => None,
                };
                match active {
                    Some(reference) => self.configure(cell, column, field, language, reference)?,
                    None => {
                        let mut reference = Reference::new();
                        self.configure(cell, column, field, language, &mut reference)?;
                        state.reference = Some(attach(
                            word,
                            field.apply,
                            state.group,
                            Placement::Column,
                            Item::Reference(reference),
                        ));
                    }
                }
            }

            FieldRole::Definition => {
                let continuing = is_default != state.gloss_set
                    && state.group != Host::Word
                    && host_mut(word, state.group).is_some();
                if continuing {
                    if let Some(group) = host_mut(word, state.group) {
                        group.set_indigenous_data(language, text.as_str());
                    }
                } else {
                    let mut group = Group::new("Definition");
                    self.configure(cell, column, field, language, &mut group)?;
                    group.set_size(Size::new(DEFINITION_WIDGET_WIDTH, WIDGET_HEIGHT));
                    let index = word.entry.add_row(Item::Group(group));
                    state.group = Host::Definition(index);
                }
                if is_default {
                    state.gloss_set = true;
                    if let Some(group) = host_mut(word, state.group) {
                        group.set_gloss(text.as_str());
                    }
                }
            }

            FieldRole::Example => {
                let active = match state.example {
                    Some(slot) if !is_default => slot_mut(word, slot).and_then(Item::as_unit_mut),
                    _ => None,
                };
                match active {
                    Some(unit) => unit.set_indigenous_data(language, text),
                    None => {
                        let mut unit = Unit::new("Unit");
                        self.configure(cell, column, field, language, &mut unit)?;
                        unit.format.size = Size::new(EXAMPLE_WIDGET_WIDTH, TEXT_HEIGHT);
                        if is_default {
                            unit.set_gloss(text);
                        }
                        state.example = Some(attach(
                            word,
                            field.apply,
                            state.group,
                            Placement::Row,
                            Item::Unit(unit),
                        ));
                    }
                }
            }

            FieldRole::TitledComment | FieldRole::Comment | FieldRole::RowComment => {
                let mut comment = Comment::new();
                self.configure(cell, column, field, language, &mut comment)?;
                if role != FieldRole::TitledComment {
                    comment.format.title.clear();
                }
                let placement = if role == FieldRole::RowComment {
                    Placement::Row
                } else {
                    Placement::Column
                };
                attach(word, field.apply, state.group, placement, Item::Comment(comment));
            }

            FieldRole::Ontology(kind) => {
                let ontology = build_ontology(kind, &text).map_err(|source| RowErrorKind::IllegalOntology {
                    column: column + 1,
                    source,
                })?;
                attach(
                    word,
                    field.apply,
                    state.group,
                    Placement::Column,
                    Item::Ontology(ontology),
                );
            }
        }

        Ok(())
    }

    /// Title, font, colour and size from the cell and its field; the
    /// cell's `Data` and `Phonetics` text go to the target
    fn configure<T: CellTarget + ?Sized>(
        &self,
        cell: &Element,
        column: usize,
        field: &FieldSpec,
        language: &str,
        target: &mut T,
    ) -> Result<(), InvalidNumber> {
        let font = self
            .resolver
            .cell_font(cell, self.layout.fonts.get(column), &self.layout.table_font)?;

        let format = target.format_mut();
        format.title = field.name.as_str().to_string();
        format.font = Some(font.face());
        format.foreground = font.foreground();
        format.size.height = AREA_WIDGET_HEIGHT;
        format.size.width = format.size.width.max(field.width_pixels());

        for child in &cell.children {
            if child.is("Data") {
                target.apply_data(language, child.text_content().trim());
            } else if child.is("Phonetics") {
                target.apply_phonetics(child.text_content().trim());
            }
        }
        Ok(())
    }
}
