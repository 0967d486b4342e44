//! Numeric attribute parsing

use log::warn;

use crate::error::InvalidNumber;

/// Parses numeric attributes, either leniently or strictly.
///
/// Absent and empty values are never errors. A malformed value is an
/// [`InvalidNumber`] in strict mode; otherwise it is logged and replaced by
/// a fallback.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Numbers {
    strict: bool,
}

impl Numbers {
    pub(crate) fn new(strict: bool) -> Self {
        Self { strict }
    }

    fn malformed<T>(&self, what: &'static str, value: &str, fallback: T) -> Result<T, InvalidNumber> {
        if self.strict {
            return Err(InvalidNumber {
                what,
                value: value.to_string(),
            });
        }
        warn!("Ignoring invalid {} '{}'", what, value);
        Ok(fallback)
    }

    /// Decimal value; absent, empty or malformed reads as zero
    pub(crate) fn decimal(&self, value: Option<&str>, what: &'static str) -> Result<f64, InvalidNumber> {
        self.decimal_or(value, what, 0.0)
    }

    /// Decimal value with a fallback for absent, empty or malformed text
    pub(crate) fn decimal_or(
        &self,
        value: Option<&str>,
        what: &'static str,
        fallback: f64,
    ) -> Result<f64, InvalidNumber> {
        let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(fallback);
        };
        match text.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => self.malformed(what, text, fallback),
        }
    }

    /// Non-negative count; absent, empty or malformed reads as zero
    pub(crate) fn count(&self, value: Option<&str>, what: &'static str) -> Result<u64, InvalidNumber> {
        let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(0);
        };
        match text.parse::<u64>() {
            Ok(n) => Ok(n),
            Err(_) => self.malformed(what, text, 0),
        }
    }

    /// 1-based index converted to 0-based; absent, empty or malformed reads as `None`
    pub(crate) fn index(&self, value: Option<&str>, what: &'static str) -> Result<Option<usize>, InvalidNumber> {
        let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };
        match text.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n - 1)),
            _ => self.malformed(what, text, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient() {
        let numbers = Numbers::new(false);
        assert_eq!(numbers.decimal(Some("72.5"), "width"), Ok(72.5));
        assert_eq!(numbers.decimal(Some(""), "width"), Ok(0.0));
        assert_eq!(numbers.decimal(None, "width"), Ok(0.0));
        assert_eq!(numbers.decimal(Some("wide"), "width"), Ok(0.0));
        assert_eq!(numbers.decimal_or(Some("x"), "size", 12.0), Ok(12.0));
        assert_eq!(numbers.count(Some("7"), "rows"), Ok(7));
        assert_eq!(numbers.count(Some("-1"), "rows"), Ok(0));
        assert_eq!(numbers.index(Some("3"), "index"), Ok(Some(2)));
        assert_eq!(numbers.index(Some("0"), "index"), Ok(None));
        assert_eq!(numbers.index(None, "index"), Ok(None));
    }

    #[test]
    fn test_strict() {
        let numbers = Numbers::new(true);
        assert_eq!(numbers.decimal(Some(" 10 "), "width"), Ok(10.0));
        assert_eq!(numbers.decimal(None, "width"), Ok(0.0));
        assert_eq!(
            numbers.decimal(Some("wide"), "column width"),
            Err(InvalidNumber {
                what: "column width",
                value: "wide".into()
            })
        );
        assert!(numbers.decimal(Some("NaN"), "width").is_err());
        assert!(numbers.count(Some("many"), "rows").is_err());
        assert!(numbers.index(Some("0"), "index").is_err());
    }
}
