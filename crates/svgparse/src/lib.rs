//! svgparse - a small, fail-fast SVG parser
//!
//! Turns SVG source into a tree of elements, text runs, comments and raw
//! CDATA. Only the XML actually found in SVG files is understood: no
//! entity expansion, no namespaces, no DTDs.
//!
//! # Quick Start
//!
//! ```
//! use svgparse::{parse, PropertyValue};
//! # fn main() -> Result<(), svgparse::Error> {
//! let root = parse(r#"<svg width="100"><rect fill="red"/></svg>"#)?;
//! let svg = root.element();
//! assert_eq!(svg.tag_name, "svg");
//! assert_eq!(svg.get("width"), Some(&PropertyValue::Number(100.0)));
//! assert_eq!(svg.child_elements().count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Errors carry the position and a caret snippet:
//!
//! ```
//! let err = svgparse::parse("<a><b></a>").unwrap_err();
//! assert_eq!(err.line(), 1);
//! assert_eq!(err.column(), 6);
//! ```

#![forbid(unsafe_code)]

pub mod cursor;

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod locate;
pub use locate::{locate, Location};

pub mod node;
pub use node::{Descendants, Element, Node, Properties, PropertyValue, Root};

pub mod parser;
pub use parser::{Config, Parser};

/// Parse SVG source without depth or size limits
pub fn parse(source: &str) -> Result<Root> {
    Parser::new(source).parse()
}

/// Parse SVG source with custom limits, e.g. [`Config::default`] for untrusted input
pub fn parse_with_config(source: &str, config: Config) -> Result<Root> {
    Parser::with_config(source, config).parse()
}
