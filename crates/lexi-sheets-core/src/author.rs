//! Dictionary authors

use std::fmt;

/// A dictionary author
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Author {
    /// Author name
    pub name: String,
}

impl Author {
    /// Create an author; the name is trimmed
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
        }
    }

    /// Check if this author carries no data
    pub fn is_clear(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims() {
        let author = Author::new("  Dan Harvey ");
        assert_eq!(author.name, "Dan Harvey");
        assert_eq!(format!("{}", author), "Dan Harvey");
    }

    #[test]
    fn test_is_clear() {
        assert!(Author::new("   ").is_clear());
        assert!(!Author::new("x").is_clear());
    }
}
