//! Source positions and caret snippets for diagnostics

use std::fmt;

/// Where an offset falls in the source, with a printable snippet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// 0-based column, counted in characters
    pub column: usize,
    /// The offending line followed by a caret line pointing at the offset
    pub snippet: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Locate byte `offset` inside `source`.
///
/// Offsets past the end clamp to the end and offsets inside a multi-byte
/// character clamp back to its first byte.
pub fn locate(source: &str, offset: usize) -> Location {
    let offset = char_boundary_at_or_before(source, offset);
    let before = source.get(..offset).unwrap_or_default();
    let after = source.get(offset..).unwrap_or_default();

    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let before_line = before.get(line_start..).unwrap_or_default();
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = before_line.chars().count();

    let after_line = after
        .split_inclusive('\n')
        .next()
        .unwrap_or_default()
        .trim_end_matches(['\n', '\r']);

    let before_line = expand_leading_tabs(before_line);
    let pad = " ".repeat(before_line.chars().count());
    let snippet = format!("{before_line}{after_line}\n{pad}^");

    Location {
        line,
        column,
        snippet,
    }
}

/// Leading tabs become two spaces each so the caret line lines up.
fn expand_leading_tabs(line: &str) -> String {
    let body = line.trim_start_matches('\t');
    let tabs = line.len() - body.len();
    let mut out = "  ".repeat(tabs);
    out.push_str(body);
    out
}

fn char_boundary_at_or_before(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        let loc = locate("<a><b></a>", 7);
        assert_eq!(loc.line, 1);
        assert_eq!(loc.column, 7);
        assert_eq!(loc.snippet, "<a><b></a>\n       ^");
    }

    #[test]
    fn test_later_line() {
        let source = "<svg>\n  <rect>\n</svg>";
        let offset = source.find("rect").unwrap_or_default();
        let loc = locate(source, offset);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 3);
        assert_eq!(loc.snippet, "  <rect>\n   ^");
        assert_eq!(loc.to_string(), "2:3");
    }

    #[test]
    fn test_leading_tabs_expand() {
        let source = "<svg>\n\t\t<g x>\n</svg>";
        let offset = source.find('x').unwrap_or_default();
        let loc = locate(source, offset);
        assert_eq!(loc.column, 5);
        assert_eq!(loc.snippet, "    <g x>\n       ^");
    }

    #[test]
    fn test_offset_at_end() {
        let loc = locate("<a>\n", 4);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 0);
        assert_eq!(loc.snippet, "\n^");
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let loc = locate("abc", 99);
        assert_eq!(loc.line, 1);
        assert_eq!(loc.column, 3);
        assert_eq!(loc.snippet, "abc\n   ^");
    }

    #[test]
    fn test_offset_inside_multibyte_char() {
        let loc = locate("é<", 1);
        assert_eq!(loc.column, 0);
        assert_eq!(loc.snippet, "é<\n^");
    }

    #[test]
    fn test_crlf_is_trimmed_from_snippet() {
        let loc = locate("<a>\r\n</b>", 1);
        assert_eq!(loc.snippet, "<a>\n ^");
    }
}
