// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Source location tracking.

use std::fmt;

/// A point in the source text.
///
/// `index` is a byte offset; `line` and `col` are 1-based, with `col`
/// counting characters rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub index: usize,
    pub line: u32,
    pub col: u32,
}

impl Pos {
    /// The start of the input.
    pub const START: Pos = Pos { index: 0, line: 1, col: 1 };

    pub fn new(index: usize, line: u32, col: u32) -> Self {
        Self { index, line, col }
    }

    /// The position of byte `offset`, found by walking forward from `self`
    /// over the text in between.
    ///
    /// Returns `self` unchanged if `offset` is behind it or not on a char
    /// boundary.
    pub fn advance_to(self, source: &str, offset: usize) -> Pos {
        let Some(text) = source.get(self.index..offset) else {
            return self;
        };
        let mut pos = self;
        for ch in text.chars() {
            if ch == '\n' {
                pos.line += 1;
                pos.col = 1;
            } else {
                pos.col += 1;
            }
        }
        pos.index = offset;
        pos
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Precomputed line-start offsets for fetching the text of a line.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset of the start of each line. line_starts[0] is always 0.
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map by scanning source for newlines. O(n).
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        LineMap { line_starts }
    }

    /// Get the source text of a 1-based line number. O(1).
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)? as usize;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|&s| (s as usize).saturating_sub(1)) // exclude the \n
            .unwrap_or(source.len());
        source.get(start..end).map(|text| text.strip_suffix('\r').unwrap_or(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_lines_and_chars() {
        let src = "fn a\nlet b\n\nc";
        let p = Pos::START.advance_to(src, 3);
        assert_eq!(p, Pos::new(3, 1, 4));
        let p = p.advance_to(src, 5);
        assert_eq!(p, Pos::new(5, 2, 1));
        assert_eq!(p.advance_to(src, 12), Pos::new(12, 4, 1));
        assert_eq!(Pos::START.advance_to(src, 12), Pos::new(12, 4, 1));
    }

    #[test]
    fn advance_columns_count_chars() {
        let src = "\"é\" x";
        // 'x' is at byte 5 but character 5 of the line.
        assert_eq!(Pos::START.advance_to(src, 5), Pos::new(5, 1, 5));
    }

    #[test]
    fn advance_never_moves_back() {
        let p = Pos::new(4, 1, 5);
        assert_eq!(p.advance_to("abcdef", 2), p);
        assert_eq!(p.advance_to("abcdef", 4), p);
        assert_eq!(Pos::START.advance_to("", 0), Pos::START);
    }

    #[test]
    fn line_text() {
        let src = "fn a\nlet b\n\nc";
        let lm = LineMap::new(src);
        assert_eq!(lm.line_text(src, 2), Some("let b"));
        assert_eq!(lm.line_text(src, 3), Some(""));
        assert_eq!(lm.line_text(src, 4), Some("c"));
        assert_eq!(lm.line_text(src, 5), None);
        assert_eq!(lm.line_text(src, 0), None);
    }

    #[test]
    fn crlf_line_text() {
        let src = "a;\r\nb;\r\n";
        let lm = LineMap::new(src);
        assert_eq!(lm.line_text(src, 1), Some("a;"));
        assert_eq!(Pos::START.advance_to(src, 4), Pos::new(4, 2, 1));
    }
}
