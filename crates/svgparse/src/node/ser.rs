//! JSON-shaped serialization of the node tree

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Element, Node, PropertyValue, Root};

/// Largest float that still round-trips through an `i64` exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "root")?;
        map.serialize_entry("children", std::slice::from_ref(&self.element))?;
        map.end()
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.metadata.is_some() { 5 } else { 4 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", "element")?;
        map.serialize_entry("tagName", &self.tag_name)?;
        map.serialize_entry("properties", &self.properties)?;
        map.serialize_entry("children", &self.children)?;
        if let Some(metadata) = &self.metadata {
            map.serialize_entry("metadata", metadata)?;
        }
        map.end()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (kind, value) = match self {
            Self::Element(element) => return element.serialize(serializer),
            Self::CData(raw) => return serializer.serialize_str(raw),
            Self::Text(value) => ("text", value),
            Self::Comment(value) => ("comment", value),
        };
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", kind)?;
        map.serialize_entry("value", value)?;
        map.end()
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                #[allow(clippy::as_conversions)]
                let int = *n as i64;
                serializer.serialize_i64(int)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
        }
    }
}
