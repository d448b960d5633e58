//! SVG node tree

use indexmap::IndexMap;

#[cfg(feature = "serde")]
mod ser;

/// Attribute map of an element, in document order
pub type Properties = IndexMap<String, PropertyValue>;

/// Parsed document: a wrapper around the single document element
#[derive(Clone, Debug, PartialEq)]
pub struct Root {
    pub element: Element,
}

impl Root {
    /// The document element
    pub const fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }

    /// Raw header text captured before the first tag of an `<svg>` document
    pub fn metadata(&self) -> Option<&str> {
        self.element.metadata.as_deref()
    }
}

/// SVG element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag_name: String,
    pub properties: Properties,
    pub children: Vec<Node>,
    /// Header of the document, set on an `svg` document element only
    pub metadata: Option<String>,
}

impl Element {
    /// Create an empty element
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children: Vec::new(),
            metadata: None,
        }
    }

    /// Look up an attribute by name
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Child elements, skipping text, comments and CDATA
    pub fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Self> + '_ {
        self.children.iter().filter_map(Node::as_element)
    }

    /// This element and all nested elements, depth-first in document order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Set an attribute; a repeated name moves to the end with the new value
    pub(crate) fn set_property(&mut self, name: &str, value: PropertyValue) {
        self.properties.shift_remove(name);
        self.properties.insert(name.to_string(), value);
    }
}

impl Drop for Element {
    // Nested elements are flattened onto a work list so dropping a deep
    // tree does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// Depth-first element iterator, see [`Element::descendants`]
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.child_elements().rev());
        Some(element)
    }
}

/// Content of an element
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    /// Raw inner text of a `<![CDATA[ ... ]]>` section
    CData(String),
}

impl Node {
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Attribute value
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Attribute written without `=value`
    Bool(bool),
    Number(f64),
    String(String),
}

impl PropertyValue {
    /// Turn raw attribute text into a value, coercing numeric literals.
    ///
    /// `"5"`, `" 1.5e3 "` and `"0x1f"` become numbers; `"5cm"`, `""` and
    /// `"NaN"` stay strings.
    pub fn from_raw(raw: &str) -> Self {
        match parse_number(raw) {
            Some(n) => Self::Number(n),
            None => Self::String(raw.to_string()),
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(s.get(2..).unwrap_or_default(), radix);
    }

    // keeps `inf`, `nan` and friends out of `f64::from_str`
    if !s
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
