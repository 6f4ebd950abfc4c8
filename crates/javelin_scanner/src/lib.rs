//! javelin_scanner: Position tracking over Java source text.
//!
//! The translator does not tokenize Java; the tree already says where every
//! node is. What it needs is a cursor that can step over whitespace and
//! comments between nodes and confirm that the token the tree expects is
//! actually at the current offset.

pub mod cursor;
pub mod trivia;

pub use cursor::{CursorError, SourceCursor};
pub use trivia::{scan_trivia, Trivia, TriviaKind, TriviaScan};
