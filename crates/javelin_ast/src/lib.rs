//! javelin_ast: The Java syntax tree consumed by the translator.
//!
//! The tree is produced by an external parse/bind front end and handed to the
//! translator either directly or as JSON. Every node carries its source range
//! and, where the translation needs it, a resolved binding.

pub mod builder;
pub mod node;
pub mod syntax_kind;
pub mod types;

// Re-export key types
pub use node::*;
pub use syntax_kind::NodeKind;
pub use types::*;
