//! SVG parser state machine

use tracing::{debug, instrument, trace};

use crate::cursor::{is_name_char, Cursor};
use crate::error::{Error, ErrorKind, Result};
use crate::node::{Element, Node, Root};

mod attributes;

/// Configuration for the SVG parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }
}

/// Scanner states. Each step consumes input and names the next state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Prolog before the first start tag
    Header,
    /// Text between tags
    Neutral,
    /// Just past a `<`
    TagOpen,
    /// Just past `<!--`
    Comment,
    /// Just past `<![CDATA[`
    CData,
    /// Just past `</`
    ClosingTag,
}

/// Single-pass SVG parser
#[derive(Debug)]
pub struct Parser<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    config: Config,
    /// Unclosed elements, innermost last
    stack: Vec<Element>,
    root: Option<Element>,
    /// End of the header region
    header_end: usize,
    /// Offset of the `<` that opened the markup being parsed
    tag_start: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser without depth or size limits
    pub const fn new(source: &'a str) -> Self {
        Self::with_config(source, Config::unlimited())
    }

    /// Create a new parser with custom configuration
    pub const fn with_config(source: &'a str, config: Config) -> Self {
        Self {
            source,
            cursor: Cursor::new(source),
            config,
            stack: Vec::new(),
            root: None,
            header_end: 0,
            tag_start: 0,
        }
    }

    /// Parse the whole source into a [`Root`].
    ///
    /// Fails on the first syntax error; nothing of the partial tree is kept.
    #[instrument(level = "debug", skip_all, fields(len = self.source.len()))]
    pub fn parse(mut self) -> Result<Root> {
        if self.config.max_size > 0 && self.source.len() > self.config.max_size {
            return Err(self.error_at(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                self.config.max_size,
            ));
        }

        let mut state = State::Header;
        loop {
            if self.cursor.is_eof() && matches!(state, State::Header | State::Neutral) {
                break;
            }
            let next = self.step(state).inspect_err(|err| {
                debug!(line = err.line(), column = err.column(), "parse failed: {}", err.message());
            })?;
            trace!(?state, ?next, pos = self.cursor.pos(), "transition");
            state = next;
        }

        self.finish()
    }

    fn step(&mut self, state: State) -> Result<State> {
        match state {
            State::Header => self.header(),
            State::Neutral => Ok(self.neutral()),
            State::TagOpen => self.tag_open(),
            State::Comment => self.comment(),
            State::CData => self.cdata(),
            State::ClosingTag => self.closing_tag(),
        }
    }

    fn finish(mut self) -> Result<Root> {
        if let Some(open) = self.stack.last() {
            debug!(open = %open.tag_name, depth = self.stack.len(), "input ended inside an element");
            return Err(self.error(ErrorKind::UnexpectedEndOfInput));
        }

        let Some(mut element) = self.root.take() else {
            return Err(self.error(ErrorKind::MissingRootElement));
        };

        if element.tag_name == "svg" {
            element.metadata = Some(self.cursor.slice(0, self.header_end).to_string());
        }

        debug!(root = %element.tag_name, "parse completed");
        Ok(Root { element })
    }

    /// Skip the prolog up to the first `<` that starts a tag name.
    ///
    /// Comments are jumped over whole so markup inside them is ignored.
    fn header(&mut self) -> Result<State> {
        while let Some(b) = self.cursor.current() {
            if b == b'<' && self.cursor.peek(1).is_some_and(is_name_char) {
                break;
            }
            if self.cursor.starts_with(b"<!--") {
                let open = self.cursor.pos();
                self.cursor.advance_by(4);
                let Some(end) = self.cursor.find(b"-->") else {
                    return Err(self.error_at(ErrorKind::UnterminatedComment, open));
                };
                self.cursor.jump_to(end + 3);
                continue;
            }
            self.cursor.advance();
        }
        self.header_end = self.cursor.pos();
        Ok(State::Neutral)
    }

    fn neutral(&mut self) -> State {
        let start = self.cursor.pos();
        while self.cursor.current().is_some_and(|b| b != b'<') {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        if !text.trim().is_empty() {
            self.append(Node::Text(text.to_string()));
        }

        let tag_start = self.cursor.pos();
        if self.cursor.consume(b'<') {
            self.tag_start = tag_start;
            State::TagOpen
        } else {
            State::Neutral
        }
    }

    fn tag_open(&mut self) -> Result<State> {
        match self.cursor.current() {
            None => Err(self.error(ErrorKind::UnexpectedEndOfInput)),
            Some(b'?') => {
                self.cursor.advance();
                self.skip_past(b"?>")?;
                Ok(State::Neutral)
            }
            Some(b'!') => self.markup_declaration(),
            Some(b'/') => {
                self.cursor.advance();
                Ok(State::ClosingTag)
            }
            Some(_) => self.start_tag(),
        }
    }

    fn markup_declaration(&mut self) -> Result<State> {
        if self.cursor.starts_with(b"!--") {
            self.cursor.advance_by(3);
            return Ok(State::Comment);
        }

        if self.cursor.starts_with(b"![CDATA[") {
            self.cursor.advance_by(8);
            return Ok(State::CData);
        }

        let is_doctype = self
            .cursor
            .remaining()
            .get(1..8)
            .is_some_and(|word| word.eq_ignore_ascii_case(b"doctype"));
        if is_doctype {
            self.skip_past(b">")?;
            return Ok(State::Neutral);
        }

        Err(self.error(ErrorKind::UnexpectedCharacter))
    }

    fn start_tag(&mut self) -> Result<State> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(self.error_at(ErrorKind::MultipleRootElements, self.tag_start));
        }

        let name = self.read_name();
        if name.is_empty() {
            return Err(self.error(ErrorKind::ExpectedTagName));
        }

        let mut element = Element::new(name);
        self.parse_attributes(&mut element)?;

        let self_closing = self.cursor.consume(b'/');
        self.expect_tag_close()?;

        if self_closing {
            self.close(element);
        } else {
            self.open(element)?;
        }
        Ok(State::Neutral)
    }

    fn comment(&mut self) -> Result<State> {
        let start = self.cursor.pos();
        let Some(end) = self.cursor.find(b"-->") else {
            return Err(self.error_at(ErrorKind::UnterminatedComment, self.tag_start));
        };

        let value = self.cursor.slice(start, end);
        self.append(Node::Comment(value.to_string()));
        self.cursor.jump_to(end + 3);
        Ok(State::Neutral)
    }

    fn cdata(&mut self) -> Result<State> {
        let start = self.cursor.pos();
        let Some(end) = self.cursor.find(b"]]>") else {
            return Err(self.error_at(ErrorKind::UnterminatedCData, self.tag_start));
        };

        let raw = self.cursor.slice(start, end);
        self.append(Node::CData(raw.to_string()));
        self.cursor.jump_to(end + 3);
        Ok(State::Neutral)
    }

    fn closing_tag(&mut self) -> Result<State> {
        let name = self.read_name();
        if name.is_empty() {
            let kind = if self.cursor.is_eof() {
                ErrorKind::UnexpectedEndOfInput
            } else {
                ErrorKind::ExpectedTagName
            };
            return Err(self.error(kind));
        }

        let Some(open) = self.stack.last() else {
            return Err(self.error_at(
                ErrorKind::UnexpectedClosingTag {
                    name: name.to_string(),
                },
                self.tag_start,
            ));
        };
        if open.tag_name != name {
            return Err(self.error_at(
                ErrorKind::MismatchedTag {
                    found: name.to_string(),
                    expected: open.tag_name.clone(),
                },
                self.tag_start,
            ));
        }

        self.cursor.skip_whitespace();
        self.expect_tag_close()?;

        if let Some(element) = self.stack.pop() {
            self.close(element);
        }
        Ok(State::Neutral)
    }

    /// Push a non-empty element; it becomes the target for new children.
    fn open(&mut self, element: Element) -> Result<()> {
        let max = self.config.max_depth;
        if max > 0 && self.stack.len() >= usize::from(max) {
            return Err(self.error_at(ErrorKind::MaxDepthExceeded { max }, self.tag_start));
        }
        self.stack.push(element);
        Ok(())
    }

    /// Hand a finished element to its parent, or keep it as the root.
    fn close(&mut self, element: Element) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None => self.root = Some(element),
        }
    }

    fn append(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => trace!(pos = self.cursor.pos(), "dropping content outside the root element"),
        }
    }

    fn expect_tag_close(&mut self) -> Result<()> {
        match self.cursor.current() {
            Some(b'>') => {
                self.cursor.advance();
                Ok(())
            }
            Some(_) => Err(self.error(ErrorKind::ExpectedTagClose)),
            None => Err(self.error(ErrorKind::UnexpectedEndOfInput)),
        }
    }

    fn skip_past(&mut self, terminator: &[u8]) -> Result<()> {
        match self.cursor.find(terminator) {
            Some(idx) => {
                self.cursor.jump_to(idx + terminator.len());
                Ok(())
            }
            None => Err(self.error_at(ErrorKind::UnexpectedEndOfInput, self.source.len())),
        }
    }

    fn read_name(&mut self) -> &'a str {
        let start = self.cursor.pos();
        while self.cursor.current().is_some_and(is_name_char) {
            self.cursor.advance();
        }
        self.cursor.slice_from(start)
    }

    fn error(&self, kind: ErrorKind) -> Error {
        self.error_at(kind, self.cursor.pos())
    }

    fn error_at(&self, kind: ErrorKind, offset: usize) -> Error {
        Error::new(kind, self.source, offset)
    }
}
