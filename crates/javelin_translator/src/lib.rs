//! javelin_translator: Source-to-source translation of Java syntax trees.
//!
//! The translator walks a syntax tree and the source text it was parsed
//! from side by side. Whatever the tree does not model (whitespace,
//! comments, the exact spelling of tokens) is copied from the source, and
//! each construct is rewritten by its writer in [`writers`]. Node dispatch
//! and per-target gaps live in [`registry`] and [`tables`].

pub mod context;
pub mod error;
pub mod registry;
pub mod tables;
pub mod writers;

pub use context::TranslationContext;
pub use error::{TranslateError, TranslateResult};

use javelin_ast::{CompilationUnit, Node};
use javelin_options::TranslationSession;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, debug_span};

/// Translates files for one session. Cheap to clone and share across threads.
#[derive(Debug, Clone)]
pub struct Translator {
    session: Arc<TranslationSession>,
}

impl Translator {
    pub fn new(session: Arc<TranslationSession>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &TranslationSession {
        &self.session
    }

    /// Translate a whole compilation unit into `sink`.
    ///
    /// Output is written as it is produced; after an error the sink holds a
    /// partial file and should be discarded.
    pub fn translate_compilation_unit(
        &self,
        file: &str,
        source: &str,
        unit: &CompilationUnit,
        sink: &mut dyn fmt::Write,
    ) -> TranslateResult {
        let span = debug_span!("translate", file, language = %self.session.target());
        let _enter = span.enter();

        let mut ctx = TranslationContext::new(source, &self.session, sink);
        ctx.write_node(Node::CompilationUnit(unit))?;
        debug!(bytes = source.len(), "translated compilation unit");
        Ok(())
    }

    pub fn translate_to_string(
        &self,
        file: &str,
        source: &str,
        unit: &CompilationUnit,
    ) -> TranslateResult<String> {
        let mut out = String::with_capacity(source.len());
        self.translate_compilation_unit(file, source, unit, &mut out)?;
        Ok(out)
    }

    /// Translate a single node of `source`, e.g. one expression or statement.
    pub fn translate_node(
        &self,
        source: &str,
        node: Node<'_>,
        sink: &mut dyn fmt::Write,
    ) -> TranslateResult {
        let mut ctx = TranslationContext::new(source, &self.session, sink);
        ctx.set_position(node.range().pos)?;
        ctx.write_node(node)
    }
}
