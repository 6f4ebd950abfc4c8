//! javelin_core: Core utilities for the javelin translator.
//!
//! Provides source positions, text ranges, line maps and the Java character
//! classes shared by the scanner, the syntax tree and the translator.

pub mod chars;
pub mod text;

// Re-export commonly used types
pub use text::{LineAndColumn, LineMap, TextPos, TextRange, TextSpan};
