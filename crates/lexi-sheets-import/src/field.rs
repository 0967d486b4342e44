//! Column header parsing
//!
//! A header cell reads `Name[:Code[/Variant]][:DisplayName][:ApplyTarget]`,
//! e.g. `Word:eng`, `Definition:fra::w` or `Gloss:spa/mx:Spanish:g`.

use std::fmt;

use lexi_sheets_core::{
    OntologyKind, COLUMN_WIDGET_WIDTH, DEFINITION_WIDGET_WIDTH, EXAMPLE_WIDGET_WIDTH,
    ROW_WIDGET_WIDTH,
};

use crate::error::HeaderError;

/// Whether a column holds language text or commentary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Translation,
    Comment,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Translation => f.pad("translation"),
            FieldKind::Comment => f.pad("comment"),
        }
    }
}

/// Where new items from a column are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApplyTarget {
    /// The row's word
    #[default]
    Word,
    /// The currently active group (the word itself until a definition opens)
    Group,
}

impl ApplyTarget {
    /// `w` (any case) selects the word; anything else the group
    pub fn parse(text: &str) -> Self {
        if text.trim().eq_ignore_ascii_case("w") {
            ApplyTarget::Word
        } else {
            ApplyTarget::Group
        }
    }
}

impl fmt::Display for ApplyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyTarget::Word => f.pad("word"),
            ApplyTarget::Group => f.pad("group"),
        }
    }
}

/// How a row transformer treats a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Word,
    /// Multilingual attribute, continued across language columns
    Reference,
    Definition,
    Example,
    /// Comment carrying the field name as its title
    TitledComment,
    /// Untitled comment attached as a column
    Comment,
    /// Untitled comment attached as a row
    RowComment,
    Ontology(OntologyKind),
}

/// The recognized field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Word,
    Compare,
    EncyclopediaInfo,
    Gloss,
    LexicalFunction,
    References,
    Reversals,
    Restrictions,
    Usage,
    Variants,
    Definition,
    Example,
    Annotations,
    Antonyms,
    Categories,
    Etymology,
    LanguageLinks,
    MainEntry,
    Morphemes,
    ReferTo,
    Spelling,
    Subentry,
    Synonyms,
    Table,
    Thesaurus,
    RowComment,
    Comment,
    Ontology(OntologyKind),
}

impl FieldName {
    /// Every field name, in header vocabulary order
    pub const ALL: [FieldName; 33] = [
        FieldName::Word,
        FieldName::Compare,
        FieldName::EncyclopediaInfo,
        FieldName::Gloss,
        FieldName::LexicalFunction,
        FieldName::References,
        FieldName::Reversals,
        FieldName::Restrictions,
        FieldName::Usage,
        FieldName::Variants,
        FieldName::Definition,
        FieldName::Example,
        FieldName::Annotations,
        FieldName::Antonyms,
        FieldName::Categories,
        FieldName::Etymology,
        FieldName::LanguageLinks,
        FieldName::MainEntry,
        FieldName::Morphemes,
        FieldName::ReferTo,
        FieldName::Spelling,
        FieldName::Subentry,
        FieldName::Synonyms,
        FieldName::Table,
        FieldName::Thesaurus,
        FieldName::RowComment,
        FieldName::Comment,
        FieldName::Ontology(OntologyKind::Value),
        FieldName::Ontology(OntologyKind::Child),
        FieldName::Ontology(OntologyKind::ParentChild),
        FieldName::Ontology(OntologyKind::ParentSlashChild),
        FieldName::Ontology(OntologyKind::ChildValue),
        FieldName::Ontology(OntologyKind::ParentChildValue),
    ];

    /// Look up a header name (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.as_str() == name)
    }

    /// Name as written in a header
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Word => "Word",
            FieldName::Compare => "Compare",
            FieldName::EncyclopediaInfo => "Encyclopedia Info",
            FieldName::Gloss => "Gloss",
            FieldName::LexicalFunction => "Lexical Function",
            FieldName::References => "References",
            FieldName::Reversals => "Reversals",
            FieldName::Restrictions => "Restrictions",
            FieldName::Usage => "Usage",
            FieldName::Variants => "Variants",
            FieldName::Definition => "Definition",
            FieldName::Example => "Example",
            FieldName::Annotations => "Annotations",
            FieldName::Antonyms => "Antonyms",
            FieldName::Categories => "Categories",
            FieldName::Etymology => "Etymology",
            FieldName::LanguageLinks => "Language Links",
            FieldName::MainEntry => "Main Entry",
            FieldName::Morphemes => "Morphemes",
            FieldName::ReferTo => "Refer To",
            FieldName::Spelling => "Spelling",
            FieldName::Subentry => "Subentry",
            FieldName::Synonyms => "Synonyms",
            FieldName::Table => "Table",
            FieldName::Thesaurus => "Thesaurus",
            FieldName::RowComment => "Row Comment",
            FieldName::Comment => "Comment",
            FieldName::Ontology(kind) => match kind {
                OntologyKind::Value => "Ontology",
                OntologyKind::Child => "Ontology-C",
                OntologyKind::ParentChild => "Ontology-PC",
                OntologyKind::ParentSlashChild => "Ontology-P/C",
                OntologyKind::ChildValue => "Ontology-C/D",
                OntologyKind::ParentChildValue => "Ontology-PC/D",
            },
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self.role() {
            FieldRole::Word | FieldRole::Reference | FieldRole::Definition | FieldRole::Example => {
                FieldKind::Translation
            }
            _ => FieldKind::Comment,
        }
    }

    /// Widget width the field asks for before styles are considered
    pub fn nominal_width(&self) -> u32 {
        match self {
            FieldName::Word => DEFINITION_WIDGET_WIDTH,
            FieldName::Definition | FieldName::RowComment => ROW_WIDGET_WIDTH,
            FieldName::Example => EXAMPLE_WIDGET_WIDTH,
            _ => COLUMN_WIDGET_WIDTH,
        }
    }

    pub fn role(&self) -> FieldRole {
        match self {
            FieldName::Word => FieldRole::Word,
            FieldName::Compare
            | FieldName::EncyclopediaInfo
            | FieldName::Gloss
            | FieldName::LexicalFunction
            | FieldName::References
            | FieldName::Reversals
            | FieldName::Restrictions
            | FieldName::Usage
            | FieldName::Variants => FieldRole::Reference,
            FieldName::Definition => FieldRole::Definition,
            FieldName::Example => FieldRole::Example,
            FieldName::Annotations
            | FieldName::Antonyms
            | FieldName::Categories
            | FieldName::Etymology
            | FieldName::LanguageLinks
            | FieldName::MainEntry
            | FieldName::Morphemes
            | FieldName::ReferTo
            | FieldName::Spelling
            | FieldName::Subentry
            | FieldName::Synonyms
            | FieldName::Table
            | FieldName::Thesaurus => FieldRole::TitledComment,
            FieldName::Comment => FieldRole::Comment,
            FieldName::RowComment => FieldRole::RowComment,
            FieldName::Ontology(kind) => FieldRole::Ontology(*kind),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Parsed description of one worksheet column
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: FieldName,
    /// Language code with the variant cut to two characters (`spa/mexico` reads `spa/me`); may be empty
    pub language_code: String,
    /// Primary code and variant, used to key indigenous data
    pub language_key: String,
    /// Display name for the language; may be empty
    pub language_name: String,
    /// Column width in points
    pub width: f64,
    pub kind: FieldKind,
    pub apply: ApplyTarget,
}

impl FieldSpec {
    /// Create a spec with the field's nominal width and no language
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            language_code: String::new(),
            language_key: String::new(),
            language_name: String::new(),
            width: f64::from(name.nominal_width()),
            kind: name.kind(),
            apply: ApplyTarget::Word,
        }
    }

    /// Width rounded up to whole widget pixels
    pub fn width_pixels(&self) -> u32 {
        self.width.max(0.0).ceil() as u32
    }

    /// Header text that parses back to this spec
    pub fn header(&self) -> String {
        let mut header = self.name.as_str().to_string();
        let segments = [
            self.language_code.as_str(),
            self.language_name.as_str(),
            match self.apply {
                ApplyTarget::Word => "",
                ApplyTarget::Group => "g",
            },
        ];
        let used = segments.iter().rposition(|s| !s.is_empty()).map_or(0, |i| i + 1);
        for segment in &segments[..used] {
            header.push(':');
            header.push_str(segment);
        }
        header
    }
}

/// Split on a separator, dropping trailing empty parts but keeping at least one
pub(crate) fn split_segments(text: &str, separator: char) -> Vec<&str> {
    let mut parts: Vec<&str> = text.split(separator).collect();
    while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

/// Parse one header string
pub fn parse_header(text: &str) -> Result<FieldSpec, HeaderError> {
    let segments = split_segments(text, ':');
    let name = segments.first().copied().unwrap_or_default();
    let field = FieldName::from_name(name).ok_or_else(|| HeaderError::UnknownField(name.to_string()))?;
    let mut spec = FieldSpec::new(field);

    if let Some(code) = segments.get(1) {
        let mut parts: Vec<String> = split_segments(code, '/').into_iter().map(str::to_string).collect();
        let primary = parts.first().cloned().unwrap_or_default();
        let length = primary.chars().count();
        if length != 0 && length != 3 {
            return Err(HeaderError::LanguageCode(code.to_string()));
        }

        let mut key = primary;
        if let Some(variant) = parts.get_mut(1) {
            if variant.chars().count() > 2 {
                *variant = variant.chars().take(2).collect();
            }
            key.push('/');
            key.push_str(variant);
        }
        spec.language_code = parts.join("/");
        spec.language_key = key;
    }

    if let Some(display) = segments.get(2) {
        spec.language_name = display.trim().to_string();
    }
    if let Some(apply) = segments.get(3) {
        spec.apply = ApplyTarget::parse(apply);
    }

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_parse_word() {
        let spec = parse_header("Word:eng").unwrap();
        assert_eq!(spec.name, FieldName::Word);
        assert_eq!(spec.language_code, "eng");
        assert_eq!(spec.language_key, "eng");
        assert_eq!(spec.language_name, "");
        assert_eq!(spec.kind, FieldKind::Translation);
        assert_eq!(spec.apply, ApplyTarget::Word);
        assert_eq!(spec.width, f64::from(DEFINITION_WIDGET_WIDTH));
    }

    #[test]
    fn test_parse_all_segments() {
        let spec = parse_header("Gloss:spa/mexico: Spanish :G").unwrap();
        assert_eq!(spec.language_code, "spa/me");
        assert_eq!(spec.language_key, "spa/me");
        assert_eq!(spec.language_name, "Spanish");
        assert_eq!(spec.apply, ApplyTarget::Group);

        let spec = parse_header("Gloss:fra::W").unwrap();
        assert_eq!(spec.apply, ApplyTarget::Word);
    }

    #[test]
    fn test_parse_three_part_code() {
        let spec = parse_header("Usage:eng/us/south").unwrap();
        assert_eq!(spec.language_code, "eng/us/south");
        assert_eq!(spec.language_key, "eng/us");
    }

    #[test]
    fn test_parse_no_code() {
        let spec = parse_header("Antonyms").unwrap();
        assert_eq!(spec.language_code, "");
        assert_eq!(spec.kind, FieldKind::Comment);

        let spec = parse_header("Comment::").unwrap();
        assert_eq!(spec.language_code, "");
        assert_eq!(spec.apply, ApplyTarget::Word);
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(
            parse_header("word:eng"),
            Err(HeaderError::UnknownField("word".into()))
        );
        assert_eq!(
            parse_header("Word:en"),
            Err(HeaderError::LanguageCode("en".into()))
        );
        assert_eq!(
            parse_header("Word:english"),
            Err(HeaderError::LanguageCode("english".into()))
        );
        assert!(parse_header("").is_err());
    }

    #[test]
    fn test_ontology_names() {
        assert_eq!(
            parse_header("Ontology-PC/D").unwrap().name,
            FieldName::Ontology(OntologyKind::ParentChildValue)
        );
        assert_eq!(
            FieldName::from_name("Ontology-P/C").map(|f| f.role()),
            Some(FieldRole::Ontology(OntologyKind::ParentSlashChild))
        );
    }

    #[test]
    fn test_vocabulary_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_name(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_kinds_and_widths() {
        assert_eq!(FieldName::Example.kind(), FieldKind::Translation);
        assert_eq!(FieldName::Morphemes.kind(), FieldKind::Comment);
        assert_eq!(FieldName::Definition.nominal_width(), ROW_WIDGET_WIDTH);
        assert_eq!(FieldName::RowComment.nominal_width(), ROW_WIDGET_WIDTH);
        assert_eq!(FieldName::Example.nominal_width(), EXAMPLE_WIDGET_WIDTH);
        assert_eq!(FieldName::Thesaurus.nominal_width(), COLUMN_WIDGET_WIDTH);
    }

    #[test]
    fn test_header_text() {
        assert_eq!(parse_header("Word:eng").unwrap().header(), "Word:eng");
        assert_eq!(parse_header("Synonyms").unwrap().header(), "Synonyms");
        assert_eq!(
            parse_header("Gloss::Spanish:x").unwrap().header(),
            "Gloss::Spanish:g"
        );
    }

    fn header_strategy() -> impl Strategy<Value = String> {
        (
            proptest::sample::select(FieldName::ALL.to_vec()),
            proptest::option::of("[a-z]{3}(/[a-z]{1,4})?"),
            proptest::option::of("[A-Za-z ]{0,10}"),
            proptest::option::of("[wWgG]"),
        )
            .prop_map(|(field, code, name, apply)| {
                let mut header = field.as_str().to_string();
                if code.is_some() || name.is_some() || apply.is_some() {
                    header.push(':');
                    header.push_str(code.as_deref().unwrap_or(""));
                }
                if name.is_some() || apply.is_some() {
                    header.push(':');
                    header.push_str(name.as_deref().unwrap_or(""));
                }
                if let Some(apply) = apply {
                    header.push(':');
                    header.push_str(&apply);
                }
                header
            })
    }

    proptest! {
        #[test]
        fn parse_is_idempotent(header in header_strategy()) {
            let first = parse_header(&header).unwrap();
            let second = parse_header(&first.header()).unwrap();
            prop_assert_eq!(first.name, second.name);
            prop_assert_eq!(&first.language_key, &second.language_key);
            prop_assert_eq!(&first.language_code, &second.language_code);
            prop_assert_eq!(&first.language_name, &second.language_name);
            prop_assert_eq!(first.apply, second.apply);
            prop_assert_eq!(parse_header(&header).unwrap(), first);
        }
    }
}
