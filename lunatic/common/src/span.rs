use serde::{Deserialize, Serialize};

/// A byte range into an input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Converts a one-based line and column (as reported by JSON parsers) into a
    /// single-character span. Positions past the end clamp to the end of `source`.
    pub fn from_line_column(source: &str, line: usize, column: usize) -> Self {
        let mut offset = 0;
        for (index, text) in source.split_inclusive('\n').enumerate() {
            if index + 1 == line {
                let within = column.saturating_sub(1).min(text.trim_end_matches('\n').len());
                let start = offset + within;
                let end = source
                    .get(start..)
                    .and_then(|rest| rest.chars().next())
                    .map_or(start, |c| start + c.len_utf8());
                return Span { start, end };
            }
            offset += text.len();
        }
        Span {
            start: source.len(),
            end: source.len(),
        }
    }

    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::dummy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line() {
        let span = Span::from_line_column("{\"a\": x}", 1, 7);
        assert_eq!(span, Span::new(6, 7));
    }

    #[test]
    fn later_line() {
        let src = "{\n  \"a\": ?\n}";
        let span = Span::from_line_column(src, 2, 8);
        assert_eq!(&src[span.start..span.end], "?");
    }

    #[test]
    fn past_end_clamps() {
        let src = "{\"a\": 1";
        let span = Span::from_line_column(src, 3, 1);
        assert_eq!(span, Span::new(src.len(), src.len()));
        assert!(span.is_empty());
    }

    #[test]
    fn column_zero_is_line_start() {
        let src = "ab\ncd";
        assert_eq!(Span::from_line_column(src, 2, 0), Span::new(3, 4));
    }
}
