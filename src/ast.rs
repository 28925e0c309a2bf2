//! Element tree consumed by the shape converters.
//!
//! Only elements and their attributes are kept. Text, comments and the like
//! carry no geometry and are dropped at parse time.

/// A qualified name (possibly with namespace prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace prefix (e.g., "svg", "xlink")
    pub prefix: Option<String>,
    /// Local name (e.g., "rect", "href")
    pub local: String,
}

impl QName {
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local: local.into(),
        }
    }

    /// Parse a qualified name from a string like "prefix:local" or just "local".
    pub fn parse(s: &str) -> Self {
        match s.split_once(':') {
            Some((prefix, local)) => Self {
                prefix: Some(prefix.to_string()),
                local: local.to_string(),
            },
            None => Self::new(s),
        }
    }

    pub fn full_name(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{}:{}", p, self.local),
            None => self.local.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

/// An SVG element with its child elements.
#[derive(Debug, Clone)]
pub struct Element {
    pub name: QName,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: QName::new(name),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value by local name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.local == name)
            .map(|a| a.value.as_str())
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name.local == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute {
                name: QName::new(name),
                value,
            }),
        }
    }

    /// Check if this element has a specific local name.
    pub fn is(&self, name: &str) -> bool {
        self.name.local == name
    }

    /// The element kind, without namespace prefix.
    pub fn kind(&self) -> &str {
        &self.name.local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qname_parse() {
        let q = QName::parse("svg:rect");
        assert_eq!(q.prefix.as_deref(), Some("svg"));
        assert_eq!(q.local, "rect");
        assert_eq!(q.full_name(), "svg:rect");
        assert_eq!(QName::parse("path").full_name(), "path");
    }

    #[test]
    fn test_attributes() {
        let mut el = Element::new("rect").with_attr("width", "10");
        assert_eq!(el.get_attr("width"), Some("10"));
        el.set_attr("width", "20");
        assert_eq!(el.get_attr("width"), Some("20"));
        assert_eq!(el.attributes.len(), 1);
        assert_eq!(el.get_attr("height"), None);
        assert!(el.is("rect"));
    }
}
