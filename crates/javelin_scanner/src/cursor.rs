//! The source cursor.
//!
//! A `SourceCursor` owns a single offset into borrowed source text. The
//! advancing primitives (`scan_space_and_comments`, `skip_spaces_and_tabs`,
//! `match_literal`, ...) only ever move forward and always stop on a token or
//! trivia boundary. `set_position` is the one explicit jump.

use crate::trivia::{scan_trivia, starts_with_line_break, Trivia, TriviaKind, TriviaScan};
use javelin_core::chars::{is_line_break, is_white_space_single_line};
use javelin_core::text::TextPos;
use thiserror::Error;
use tracing::debug;

/// Longest excerpt of source quoted back in a mismatch.
const MAX_FOUND_LEN: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("expected `{expected}` at offset {pos} but found `{found}`")]
    Mismatch {
        expected: String,
        found: String,
        pos: TextPos,
    },
    #[error("unterminated comment starting at offset {pos}")]
    UnterminatedComment { pos: TextPos },
    #[error("position {pos} is outside the source text (length {len})")]
    OutOfBounds { pos: TextPos, len: TextPos },
}

impl CursorError {
    /// The offset the error was detected at.
    pub fn pos(&self) -> TextPos {
        match self {
            CursorError::Mismatch { pos, .. }
            | CursorError::UnterminatedComment { pos }
            | CursorError::OutOfBounds { pos, .. } => *pos,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourceCursor<'s> {
    text: &'s str,
    pos: usize,
}

impl<'s> SourceCursor<'s> {
    pub fn new(text: &'s str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn text(&self) -> &'s str {
        self.text
    }

    pub fn position(&self) -> TextPos {
        self.pos as TextPos
    }

    pub fn len(&self) -> TextPos {
        self.text.len() as TextPos
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// The unread remainder of the text.
    pub fn remaining(&self) -> &'s str {
        &self.text[self.pos..]
    }

    /// Jump to `pos`, forwards or backwards.
    pub fn set_position(&mut self, pos: TextPos) -> Result<(), CursorError> {
        let target = pos as usize;
        if target > self.text.len() || !self.text.is_char_boundary(target) {
            return Err(CursorError::OutOfBounds {
                pos,
                len: self.len(),
            });
        }
        if target != self.pos {
            debug!(from = self.pos, to = target, "cursor jump");
        }
        self.pos = target;
        Ok(())
    }

    /// Move to the end of the text.
    pub fn set_position_to_end(&mut self) {
        self.pos = self.text.len();
    }

    /// The next trivia run, without consuming it.
    pub fn peek_trivia(&self) -> Result<Option<Trivia>, CursorError> {
        match scan_trivia(self.text, self.pos) {
            TriviaScan::Found(trivia) => Ok(Some(trivia)),
            TriviaScan::None => Ok(None),
            TriviaScan::Unterminated(pos) => Err(CursorError::UnterminatedComment { pos }),
        }
    }

    /// Consume whitespace and comments and return the text passed over.
    ///
    /// A trivia run that starts at or after `limit` is left unread, so a
    /// caller can stop short of a comment that belongs to the next node.
    pub fn scan_space_and_comments_until(&mut self, limit: TextPos) -> Result<&'s str, CursorError> {
        let start = self.pos;
        while (self.pos as TextPos) < limit {
            match self.peek_trivia()? {
                Some(trivia) => self.pos = trivia.range.end as usize,
                None => break,
            }
        }
        Ok(&self.text[start..self.pos])
    }

    /// Consume whitespace and comments and return the text passed over.
    pub fn scan_space_and_comments(&mut self) -> Result<&'s str, CursorError> {
        self.scan_space_and_comments_until(TextPos::MAX)
    }

    /// Consume spaces, tabs and form feeds on the current line.
    pub fn skip_spaces_and_tabs(&mut self) -> &'s str {
        let start = self.pos;
        let run = self.text[start..]
            .char_indices()
            .find(|&(_, c)| !is_white_space_single_line(c))
            .map_or(self.text.len() - start, |(i, _)| i);
        self.pos += run;
        &self.text[start..self.pos]
    }

    /// Consume trailing spaces and tabs plus one line break, if the rest of
    /// the line holds nothing else. Returns whether anything was consumed.
    pub fn skip_rest_of_line(&mut self) -> Result<bool, CursorError> {
        let start = self.pos;
        self.skip_spaces_and_tabs();
        match self.peek_trivia()? {
            Some(Trivia {
                kind: TriviaKind::NewLine,
                range,
            }) => {
                self.pos = range.end as usize;
                Ok(true)
            }
            _ if self.is_eof() => Ok(self.pos > start),
            _ => {
                self.pos = start;
                Ok(false)
            }
        }
    }

    /// Whether the upcoming trivia begins with a line break.
    pub fn at_line_break(&self) -> bool {
        starts_with_line_break(self.text, self.pos)
    }

    /// Whether the character before the cursor is a line break, or the
    /// cursor is at the start of the text.
    pub fn at_line_start(&self) -> bool {
        self.text[..self.pos].chars().next_back().map_or(true, is_line_break)
    }

    pub fn starts_with(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Assert that `literal` is at the cursor and step over it.
    pub fn match_literal(&mut self, literal: &str) -> Result<(), CursorError> {
        if !self.starts_with(literal) {
            return Err(CursorError::Mismatch {
                expected: literal.to_string(),
                found: self.upcoming_excerpt(literal.len()),
                pos: self.position(),
            });
        }
        self.pos += literal.len();
        Ok(())
    }

    /// A short excerpt of the text at the cursor, for error messages.
    pub fn upcoming_excerpt(&self, wanted: usize) -> String {
        let wanted = wanted.clamp(1, MAX_FOUND_LEN);
        let excerpt: String = self
            .remaining()
            .chars()
            .take_while(|c| !is_line_break(*c))
            .take(wanted)
            .collect();
        if excerpt.is_empty() && self.is_eof() {
            "<end of file>".to_string()
        } else {
            excerpt
        }
    }
}
