//! Balanced-delimiter scanning.

use std::ops::Range;

use serde::Serialize;

/// A balanced delimiter pair located by [`find_balanced`].
///
/// `start` and `end` are byte offsets into the scanned text: `start` points at
/// the opening delimiter, `end` at its matching closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BalancedSpan {
    pub start: usize,
    pub end: usize,
}

impl BalancedSpan {
    /// Byte range of the text strictly between the two delimiters.
    pub fn interior(&self) -> Range<usize> {
        self.start + 1..self.end
    }
}

/// Finds the first balanced `open`/`close` pair in `text`.
///
/// Scanning begins at the first occurrence of `open`; nested pairs of the same
/// delimiters are skipped over, and the span ends at the first `close` that
/// brings the nesting depth back to zero. Returns `None` when `text` contains
/// no `open` at all, and also when the pair never closes; callers that need
/// to distinguish the two can check for `open` themselves.
///
/// `open` and `close` must be distinct characters.
pub fn find_balanced(open: char, close: char, text: &str) -> Option<BalancedSpan> {
    let mut opened: Option<usize> = None;
    let mut depth = 0usize;
    for (index, ch) in text.char_indices() {
        match opened {
            None => {
                if ch == open {
                    opened = Some(index);
                    depth = 1;
                }
            }
            Some(start) => {
                if ch == open {
                    depth += 1;
                } else if ch == close {
                    depth -= 1;
                    if depth == 0 {
                        return Some(BalancedSpan { start, end: index });
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_simple_pair() {
        let span = find_balanced('(', ')', "(abc)").expect("span");
        assert_eq!(span, BalancedSpan { start: 0, end: 4 });
        assert_eq!(span.interior(), 1..4);
    }

    #[test]
    fn skips_text_before_the_first_open() {
        let span = find_balanced('(', ')', "pre (x) post").expect("span");
        assert_eq!(span.start, 4);
        assert_eq!(span.end, 6);
    }

    #[test]
    fn matches_across_nested_pairs() {
        let span = find_balanced('(', ')', "(a(b(c))d)e").expect("span");
        assert_eq!(span, BalancedSpan { start: 0, end: 9 });
    }

    #[test]
    fn ignores_a_close_before_any_open() {
        let span = find_balanced('(', ')', ") (a)").expect("span");
        assert_eq!(span, BalancedSpan { start: 2, end: 4 });
    }

    #[test]
    fn returns_none_without_any_open() {
        assert_eq!(find_balanced('(', ')', "no parens here"), None);
    }

    #[test]
    fn returns_none_when_never_closed() {
        assert_eq!(find_balanced('(', ')', "(a(b)"), None);
        assert_eq!(find_balanced('(', ')', "("), None);
    }

    #[test]
    fn handles_other_delimiter_kinds() {
        let span = find_balanced('{', '}', "a { b { c } }").expect("span");
        assert_eq!(span, BalancedSpan { start: 2, end: 12 });
    }

    #[test]
    fn offsets_are_bytes_even_with_multibyte_text() {
        // "é" is two bytes, so the open paren sits at byte 2.
        let span = find_balanced('(', ')', "é(ü)").expect("span");
        assert_eq!(span.start, 2);
        assert_eq!(span.end, 5);
        assert_eq!(&"é(ü)"[span.interior()], "ü");
    }
}
