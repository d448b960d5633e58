//! Attribute parsing for start tags

use crate::error::{ErrorKind, Result};
use crate::node::{Element, PropertyValue};

use super::Parser;

impl<'a> Parser<'a> {
    /// Read `name`, `name=value`, `name="value"` pairs up to `/` or `>`.
    ///
    /// Attributes must be separated by whitespace; anything else is left
    /// for the tag-close check to reject.
    pub(super) fn parse_attributes(&mut self, element: &mut Element) -> Result<()> {
        let mut separated = self.cursor.skip_whitespace();
        while separated {
            let name = self.read_name();
            if name.is_empty() {
                break;
            }

            let spaced = self.cursor.skip_whitespace();
            let value = if self.cursor.consume(b'=') {
                self.cursor.skip_whitespace();
                let raw = self.read_attribute_value()?;
                separated = self.cursor.skip_whitespace();
                PropertyValue::from_raw(raw)
            } else {
                separated = spaced;
                PropertyValue::Bool(true)
            };

            element.set_property(name, value);
        }
        Ok(())
    }

    fn read_attribute_value(&mut self) -> Result<&'a str> {
        match self.cursor.current() {
            Some(quote @ (b'"' | b'\'')) => self.read_quoted_value(quote),
            _ => Ok(self.read_unquoted_value()),
        }
    }

    /// A backslash keeps the next byte inside the value, escape included.
    fn read_quoted_value(&mut self, quote: u8) -> Result<&'a str> {
        let open = self.cursor.pos();
        self.cursor.advance();
        let start = self.cursor.pos();

        while let Some(b) = self.cursor.current() {
            if b == quote {
                let value = self.cursor.slice_from(start);
                self.cursor.advance();
                return Ok(value);
            }
            if b == b'\\' {
                self.cursor.advance();
            }
            self.cursor.advance();
        }

        Err(self.error_at(ErrorKind::UnexpectedEndOfInput, open))
    }

    /// Runs to a space, `>` or `/`; tabs and newlines stay in the value.
    fn read_unquoted_value(&mut self) -> &'a str {
        let start = self.cursor.pos();
        while self
            .cursor
            .current()
            .is_some_and(|b| !matches!(b, b' ' | b'>' | b'/'))
        {
            self.cursor.advance();
        }
        self.cursor.slice_from(start)
    }
}
