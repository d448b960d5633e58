//! Error types for svgparse

use std::fmt;
use thiserror::Error;

use crate::locate::locate;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    UnexpectedCharacter,
    ExpectedTagClose,
    ExpectedTagName,
    MismatchedTag { found: String, expected: String },
    UnexpectedClosingTag { name: String },
    UnterminatedComment,
    UnterminatedCData,
    UnexpectedEndOfInput,
    MissingRootElement,
    MultipleRootElements,
    MaxDepthExceeded { max: u16 },
    MaxSizeExceeded { max: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter => write!(f, "Unexpected character"),
            Self::ExpectedTagClose => write!(f, "Expected >"),
            Self::ExpectedTagName => write!(f, "Expected tag name"),
            Self::MismatchedTag { found, expected } => write!(
                f,
                "Expected closing tag </{found}> to match opening tag <{expected}>"
            ),
            Self::UnexpectedClosingTag { name } => write!(f, "Unexpected closing tag </{name}>"),
            Self::UnterminatedComment => write!(f, "expected -->"),
            Self::UnterminatedCData => write!(f, "expected ]]>"),
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input"),
            Self::MissingRootElement => write!(f, "Expected a root element"),
            Self::MultipleRootElements => {
                write!(f, "Unexpected element after the root element")
            }
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
        }
    }
}

/// Main error type for svgparse
///
/// Carries the byte offset the parser stopped at together with the
/// derived line, column and caret snippet.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    offset: usize,
    line: usize,
    column: usize,
    snippet: String,
}

impl Error {
    /// Create an error for `kind` at byte `offset` of `source`
    pub fn new(kind: ErrorKind, source: &str, offset: usize) -> Self {
        let location = locate(source, offset);
        let message = kind.to_string();
        Self {
            kind,
            message,
            offset,
            line: location.line,
            column: location.column,
            snippet: location.snippet,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of the failure
    pub const fn line(&self) -> usize {
        self.line
    }

    /// 0-based column of the failure
    pub const fn column(&self) -> usize {
        self.column
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}:{})\n\n{}",
            self.message, self.line, self.column, self.snippet
        )
    }
}

/// Result type alias for svgparse
pub type Result<T> = std::result::Result<T, Error>;
