//! Character classes of the Java lexical grammar.
//!
//! Only what the cursor needs: white space, line terminators and identifier
//! characters. Comment delimiters are handled by the scanner itself.

use unicode_xid::UnicodeXID;

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const SPACE: char = ' ';
pub const TAB: char = '\t';
pub const FORM_FEED: char = '\u{000C}';

/// Check if a character is a Java line terminator.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == LINE_FEED || ch == CARRIAGE_RETURN
}

/// Check if a character is Java white space that does not end a line.
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(ch, SPACE | TAB | FORM_FEED)
}

/// Check if a character is any Java white space, line terminators included.
#[inline]
pub fn is_white_space(ch: char) -> bool {
    is_white_space_single_line(ch) || is_line_break(ch)
}

/// Check if a character may start a Java identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == '$' || ch == '_' || ch.is_xid_start()
}

/// Check if a character may continue a Java identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == '$' || ch.is_xid_continue()
}

/// Whether `text` is a single well-formed Java identifier.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_space() {
        assert!(is_white_space(' '));
        assert!(is_white_space('\t'));
        assert!(is_white_space('\n'));
        assert!(is_white_space('\u{000C}'));
        assert!(!is_white_space('a'));
        assert!(!is_white_space_single_line('\r'));
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("foo"));
        assert!(is_identifier("$bar"));
        assert!(is_identifier("_x1"));
        assert!(is_identifier("größe"));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a.b"));
    }
}
