//! Attributed element tree
//!
//! Names are compared on their local part, so `ss:Index` matches `Index`
//! and `o:Author` matches `Author`.

/// One element of the document tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Qualified tag name as written in the document
    pub name: String,
    /// Attributes in document order (qualified name, value)
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<Element>,
    /// Text directly inside this element, before its first child
    pub text: String,
    /// Text following this element's closing tag, up to the next sibling
    pub tail: String,
}

/// Strip a namespace prefix
fn local_name(name: &str) -> &str {
    match name.rfind(':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

impl Element {
    /// Create an element with no attributes or content
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an attribute
    pub fn with_attr<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the direct text
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Tag name without namespace prefix
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    /// Check the tag name (prefix ignored)
    pub fn is(&self, name: &str) -> bool {
        self.local_name() == local_name(name)
    }

    /// Get an attribute value.
    ///
    /// An exact qualified-name match wins; otherwise the first attribute
    /// with the same local name is returned.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .or_else(|| {
                let wanted = local_name(name);
                self.attributes.iter().find(|(key, _)| local_name(key) == wanted)
            })
            .map(|(_, value)| value.as_str())
    }

    /// Get an attribute value, treating an empty value as absent
    pub fn attr_non_empty(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(name))
    }

    /// Direct children with the given name
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.is(name))
    }

    /// All descendants with the given name, in document order
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_descendants(local_name(name), &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.local_name() == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// First descendant with the given name, in document order
    pub fn first_descendant(&self, name: &str) -> Option<&Element> {
        let name = local_name(name);
        self.children.iter().find_map(|child| {
            if child.local_name() == name {
                Some(child)
            } else {
                child.first_descendant(name)
            }
        })
    }

    /// Concatenated text of this element and all its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
            out.push_str(&child.tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Element {
        Element::new("Workbook")
            .with_child(
                Element::new("ss:Worksheet").with_child(
                    Element::new("Table")
                        .with_attr("ss:StyleID", "s21")
                        .with_child(
                            Element::new("Row").with_child(
                                Element::new("Cell")
                                    .with_attr("ss:Index", "2")
                                    .with_child(Element::new("Data").with_text("wolf")),
                            ),
                        ),
                ),
            )
            .with_child(Element::new("Worksheet"))
    }

    #[test]
    fn test_attr_exact_and_local() {
        let cell = Element::new("Cell")
            .with_attr("ss:Index", "2")
            .with_attr("Index", "9");
        assert_eq!(cell.attr("ss:Index"), Some("2"));
        assert_eq!(cell.attr("Index"), Some("9"));

        let cell = Element::new("Cell").with_attr("ss:StyleID", "s1");
        assert_eq!(cell.attr("StyleID"), Some("s1"));
        assert_eq!(cell.attr("x:StyleID"), Some("s1"));
        assert_eq!(cell.attr("Width"), None);
    }

    #[test]
    fn test_attr_non_empty() {
        let cell = Element::new("Cell").with_attr("ss:Width", "");
        assert_eq!(cell.attr("ss:Width"), Some(""));
        assert_eq!(cell.attr_non_empty("ss:Width"), None);
    }

    #[test]
    fn test_descendants_in_document_order() {
        let root = sample();
        let sheets = root.descendants("Worksheet");
        assert_eq!(sheets.len(), 2);
        assert!(sheets[0].first_descendant("Table").is_some());
        assert!(sheets[1].first_descendant("Table").is_none());
    }

    #[test]
    fn test_text_content_mixed() {
        let mut bold = Element::new("B").with_text("wo");
        bold.tail = "lf".to_string();
        let data = Element::new("Data").with_text("a ").with_child(bold);
        assert_eq!(data.text_content(), "a wolf");
    }

    #[test]
    fn test_text_content() {
        let root = sample();
        assert_eq!(root.text_content(), "wolf");
        let cell = root.first_descendant("Cell").unwrap();
        assert_eq!(cell.child("Data").unwrap().text, "wolf");
        assert_eq!(cell.children_named("Data").count(), 1);
    }
}
