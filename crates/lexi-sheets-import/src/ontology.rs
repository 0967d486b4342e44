//! Ontology cell decoding

use lexi_sheets_core::{Ontology, OntologyKind};

use crate::error::OntologyError;
use crate::field::split_segments;

/// Decode an ontology cell's comma-separated text.
///
/// The value starts out as the whole text and is only replaced by shapes
/// that carry their own value part. Empty parts after the last comma are
/// dropped, so `animal, canine,` has two parts.
pub fn build_ontology(kind: OntologyKind, text: &str) -> Result<Ontology, OntologyError> {
    let parts: Vec<&str> = split_segments(text, ',').into_iter().map(str::trim).collect();

    match kind {
        OntologyKind::Value => Ok(Ontology::new("", "", text, kind)),
        OntologyKind::Child => Ok(Ontology::new("", text, text, kind)),
        OntologyKind::ParentChild | OntologyKind::ParentSlashChild => match parts.as_slice() {
            [parent, child] => Ok(Ontology::new(*parent, *child, text, kind)),
            _ => Err(OntologyError::Arity {
                kind,
                expected: 2,
                found: parts.len(),
            }),
        },
        OntologyKind::ChildValue => match parts.as_slice() {
            [child, value, ..] => Ok(Ontology::new("", *child, *value, kind)),
            _ => Err(OntologyError::TooFewParts {
                kind,
                minimum: 2,
                found: parts.len(),
            }),
        },
        OntologyKind::ParentChildValue => match parts.as_slice() {
            [parent, child, value] => Ok(Ontology::new(*parent, *child, *value, kind)),
            _ => Err(OntologyError::Arity {
                kind,
                expected: 3,
                found: parts.len(),
            }),
        },
    }
}
