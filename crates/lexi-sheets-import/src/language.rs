//! Language registration from header columns

use lexi_sheets_core::{Language, LanguageFont};

use crate::error::WorksheetErrorKind;
use crate::field::FieldSpec;
use crate::style::FontSpec;

/// Build a language for every column code not yet registered, returning
/// only the new ones.
///
/// Columns without a language code are skipped. Each new language takes
/// its display font from the column's resolved font and the header's
/// display name. Fails when neither the registry nor the header names a
/// language.
pub fn register_languages(
    existing: &[Language],
    fields: &[FieldSpec],
    fonts: &[FontSpec],
) -> Result<Vec<Language>, WorksheetErrorKind> {
    let mut languages: Vec<Language> = Vec::new();

    for (field, font) in fields.iter().zip(fonts) {
        let code = field.language_code.as_str();
        if code.is_empty()
            || existing.iter().any(|l| l.code() == code)
            || languages.iter().any(|l| l.code() == code)
        {
            continue;
        }
        let display = LanguageFont::new(
            font.font_name.clone(),
            font.points(),
            field.language_name.clone(),
        );
        languages.push(Language::new(field.language_code.clone(), display));
    }

    if existing.is_empty() && languages.is_empty() {
        return Err(WorksheetErrorKind::NoLanguages);
    }
    Ok(languages)
}
