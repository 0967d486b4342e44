//! Leaf dictionary items
//!
//! Items hang off a [`Group`](crate::Group) either as a *column* (an
//! attribute of the entry) or as a *row* (a nested block).

use std::fmt;

use crate::format::ItemFormat;
use crate::indigenous::IndigenousData;
use crate::word::Group;

/// Content attached to a word or group
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Item {
    Group(Group),
    Reference(Reference),
    Unit(Unit),
    Comment(Comment),
    Ontology(Ontology),
}

impl Item {
    /// Title of the item ("Definition", "Gloss", ...); empty for untitled comments
    pub fn title(&self) -> &str {
        match self {
            Item::Group(g) => &g.format.title,
            Item::Reference(r) => &r.format.title,
            Item::Unit(u) => &u.format.title,
            Item::Comment(c) => &c.format.title,
            Item::Ontology(_) => "Ontology",
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Item::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Item::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Item::Reference(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_reference_mut(&mut self) -> Option<&mut Reference> {
        match self {
            Item::Reference(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            Item::Unit(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_unit_mut(&mut self) -> Option<&mut Unit> {
        match self {
            Item::Unit(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Item::Comment(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_ontology(&self) -> Option<&Ontology> {
        match self {
            Item::Ontology(o) => Some(o),
            _ => None,
        }
    }
}

/// Translated reference text (Gloss, Usage, Reversals, ...)
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reference {
    pub format: ItemFormat,
    pub indigenous: IndigenousData,
}

impl Reference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_indigenous_data<L: Into<String>, T: Into<String>>(&mut self, language: L, text: T) {
        self.indigenous.set(language, text);
    }
}

/// Example sentence block
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Unit {
    pub format: ItemFormat,
    /// Example text in the entry's own language
    pub gloss: String,
    pub indigenous: IndigenousData,
}

impl Unit {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            format: ItemFormat::titled(title),
            ..Default::default()
        }
    }

    pub fn set_gloss<S: Into<String>>(&mut self, gloss: S) {
        self.gloss = gloss.into();
    }

    pub fn set_indigenous_data<L: Into<String>, T: Into<String>>(&mut self, language: L, text: T) {
        self.indigenous.set(language, text);
    }
}

/// Free-text note
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comment {
    pub format: ItemFormat,
    pub comment: String,
    pub phonetics: String,
}

impl Comment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_comment<S: Into<String>>(&mut self, comment: S) {
        self.comment = comment.into();
    }

    pub fn set_phonetics<S: Into<String>>(&mut self, phonetics: S) {
        self.phonetics = phonetics.into();
    }
}

/// Shape of an ontology cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OntologyKind {
    /// Whole text is the value
    Value,
    /// Whole text is the child
    Child,
    /// `parent, child`
    ParentChild,
    /// `parent, child` where parent and child are separate levels
    ParentSlashChild,
    /// `child, value`
    ChildValue,
    /// `parent, child, value`
    ParentChildValue,
}

impl fmt::Display for OntologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OntologyKind::Value => "Value",
            OntologyKind::Child => "Child",
            OntologyKind::ParentChild => "ParentChild",
            OntologyKind::ParentSlashChild => "Parent/Child",
            OntologyKind::ChildValue => "ChildValue",
            OntologyKind::ParentChildValue => "ParentChildValue",
        };
        f.write_str(name)
    }
}

/// Classification tuple
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ontology {
    pub parent: String,
    pub child: String,
    pub abbreviation: String,
    pub value: String,
    pub kind: OntologyKind,
}

impl Ontology {
    pub fn new<P, C, V>(parent: P, child: C, value: V, kind: OntologyKind) -> Self
    where
        P: Into<String>,
        C: Into<String>,
        V: Into<String>,
    {
        Self {
            parent: parent.into(),
            child: child.into(),
            abbreviation: String::new(),
            value: value.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_title() {
        let unit = Unit::new("Example");
        assert_eq!(Item::Unit(unit).title(), "Example");

        let ontology = Ontology::new("", "", "x", OntologyKind::Value);
        assert_eq!(Item::Ontology(ontology).title(), "Ontology");
    }

    #[test]
    fn test_accessors() {
        let mut item = Item::Reference(Reference::new());
        assert!(item.as_unit().is_none());
        item.as_reference_mut()
            .unwrap()
            .set_indigenous_data("fra", "loup");
        assert_eq!(item.as_reference().unwrap().indigenous.get("fra"), Some("loup"));
    }

    #[test]
    fn test_ontology_kind_display() {
        assert_eq!(OntologyKind::ParentSlashChild.to_string(), "Parent/Child");
    }
}
