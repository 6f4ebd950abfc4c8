//! Classification of whitespace and comments.

use javelin_core::chars::{is_line_break, is_white_space_single_line, CARRIAGE_RETURN, LINE_FEED};
use javelin_core::text::{TextPos, TextRange};
use memchr::{memchr2, memmem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaKind {
    /// Spaces, tabs and form feeds.
    Whitespace,
    /// `\n`, `\r` or `\r\n`.
    NewLine,
    /// `// ...` up to, not including, the line break.
    SingleLineComment,
    /// `/* ... */`, including Javadoc.
    MultiLineComment,
}

/// One run of trivia in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub range: TextRange,
}

/// The result of looking for trivia at an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaScan {
    Found(Trivia),
    /// A significant character, or the end of the text.
    None,
    /// A `/*` with no closing `*/`.
    Unterminated(TextPos),
}

/// Recognize the trivia run starting at `pos`.
pub fn scan_trivia(text: &str, pos: usize) -> TriviaScan {
    let bytes = text.as_bytes();
    let Some(ch) = text[pos..].chars().next() else {
        return TriviaScan::None;
    };

    let (kind, end) = if ch == CARRIAGE_RETURN {
        let end = if bytes.get(pos + 1) == Some(&b'\n') { pos + 2 } else { pos + 1 };
        (TriviaKind::NewLine, end)
    } else if ch == LINE_FEED {
        (TriviaKind::NewLine, pos + 1)
    } else if is_white_space_single_line(ch) {
        let run = text[pos..]
            .char_indices()
            .find(|&(_, c)| !is_white_space_single_line(c))
            .map_or(text.len() - pos, |(i, _)| i);
        (TriviaKind::Whitespace, pos + run)
    } else if bytes[pos..].starts_with(b"//") {
        let end = memchr2(b'\n', b'\r', &bytes[pos..]).map_or(text.len(), |i| pos + i);
        (TriviaKind::SingleLineComment, end)
    } else if bytes[pos..].starts_with(b"/*") {
        match memmem::find(&bytes[pos + 2..], b"*/") {
            Some(i) => (TriviaKind::MultiLineComment, pos + 2 + i + 2),
            None => return TriviaScan::Unterminated(pos as TextPos),
        }
    } else {
        return TriviaScan::None;
    };

    TriviaScan::Found(Trivia {
        kind,
        range: TextRange::new(pos as TextPos, end as TextPos),
    })
}

/// Whether the text at `pos` begins with a line break, possibly after spaces and tabs.
pub fn starts_with_line_break(text: &str, pos: usize) -> bool {
    text[pos..]
        .chars()
        .find(|&c| !is_white_space_single_line(c))
        .is_some_and(is_line_break)
}
