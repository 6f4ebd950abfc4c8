//! The per-file translation context.
//!
//! `TranslationContext` couples the cursor over the Java source with the
//! target writer and carries the little state a file needs while it is
//! written: the imports the body requires and the imports already emitted.
//! Every construct writer receives it by `&mut`.

use crate::error::{TranslateError, TranslateResult};
use crate::registry;
use crate::tables::modifiers::DeclarationContext;
use crate::tables::{self, TargetProfile};
use indexmap::IndexSet;
use javelin_ast::Node;
use javelin_core::chars::is_white_space;
use javelin_core::text::{TextPos, TextRange};
use javelin_diagnostics::messages;
use javelin_options::{TargetLanguage, TranslationSession};
use javelin_printer::{Redirect, RedirectGuard, TargetWriter};
use javelin_scanner::SourceCursor;
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::BuildHasherDefault;
use tracing::debug;

type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

pub struct TranslationContext<'s, 'w> {
    cursor: SourceCursor<'s>,
    writer: TargetWriter<'w>,
    session: &'s TranslationSession,
    profile: &'static TargetProfile,
    /// Namespaces the translated body depends on.
    required_imports: FxIndexSet<String>,
    /// Imports written to the header so far.
    written_imports: FxIndexSet<String>,
    /// The declaration whose modifier list is being written.
    declaration: Option<DeclarationContext>,
}

impl<'s, 'w> TranslationContext<'s, 'w> {
    pub fn new(source: &'s str, session: &'s TranslationSession, sink: &'w mut dyn fmt::Write) -> Self {
        Self {
            cursor: SourceCursor::new(source),
            writer: TargetWriter::new(sink),
            session,
            profile: tables::profile(session.target()),
            required_imports: FxIndexSet::default(),
            written_imports: FxIndexSet::default(),
            declaration: None,
        }
    }

    pub fn session(&self) -> &'s TranslationSession {
        self.session
    }

    pub fn profile(&self) -> &'static TargetProfile {
        self.profile
    }

    pub fn target(&self) -> TargetLanguage {
        self.profile.language
    }

    pub fn source(&self) -> &'s str {
        self.cursor.text()
    }

    /// The source text of `range`.
    pub fn source_text(&self, range: TextRange) -> &'s str {
        range.slice(self.cursor.text()).unwrap_or_default()
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    pub fn position(&self) -> TextPos {
        self.cursor.position()
    }

    pub fn set_position(&mut self, pos: TextPos) -> TranslateResult {
        Ok(self.cursor.set_position(pos)?)
    }

    pub fn set_position_to_end(&mut self) {
        self.cursor.set_position_to_end();
    }

    /// Copy whitespace and comments at the cursor to the output. Returns
    /// whether there was anything to copy.
    pub fn copy_space_and_comments(&mut self) -> TranslateResult<bool> {
        self.copy_space_and_comments_until(TextPos::MAX)
    }

    /// Like `copy_space_and_comments`, but leaves a trivia run starting at
    /// or after `limit` unread.
    pub fn copy_space_and_comments_until(&mut self, limit: TextPos) -> TranslateResult<bool> {
        let text = self.cursor.scan_space_and_comments_until(limit)?;
        if text.is_empty() {
            return Ok(false);
        }
        self.writer.write(text)?;
        Ok(true)
    }

    pub fn skip_space_and_comments(&mut self) -> TranslateResult {
        self.cursor.scan_space_and_comments()?;
        Ok(())
    }

    pub fn skip_space_and_comments_until(&mut self, limit: TextPos) -> TranslateResult {
        self.cursor.scan_space_and_comments_until(limit)?;
        Ok(())
    }

    pub fn skip_spaces_and_tabs(&mut self) {
        self.cursor.skip_spaces_and_tabs();
    }

    pub fn skip_rest_of_line(&mut self) -> TranslateResult<bool> {
        Ok(self.cursor.skip_rest_of_line()?)
    }

    /// Whether the trivia at the cursor begins with a line break.
    pub fn at_line_break(&self) -> bool {
        self.cursor.at_line_break()
    }

    /// Whether whitespace or a comment follows the `len` bytes at the cursor.
    pub fn trivia_follows(&self, len: usize) -> bool {
        let rest = self.cursor.remaining().get(len..).unwrap_or_default();
        rest.starts_with(is_white_space) || rest.starts_with("//") || rest.starts_with("/*")
    }

    /// Step over `literal`, writing nothing.
    pub fn match_token(&mut self, literal: &str) -> TranslateResult {
        Ok(self.cursor.match_literal(literal)?)
    }

    /// Step over `literal` and write `replacement` in its place.
    pub fn match_and_write(&mut self, literal: &str, replacement: &str) -> TranslateResult {
        self.cursor.match_literal(literal)?;
        self.writer.write(replacement)?;
        Ok(())
    }

    /// Step over `literal` and write it unchanged.
    pub fn match_and_copy(&mut self, literal: &str) -> TranslateResult {
        self.match_and_write(literal, literal)
    }

    /// Step over the source text of `range` and write `replacement`.
    pub fn replace_range(&mut self, range: TextRange, replacement: &str) -> TranslateResult {
        let text = self.source_text(range);
        self.set_position(range.pos)?;
        self.match_and_write(text, replacement)
    }

    /// Step over the source text of `range`, writing nothing.
    pub fn skip_range(&mut self, range: TextRange) -> TranslateResult {
        self.replace_range(range, "")
    }

    // ========================================================================
    // Writer
    // ========================================================================

    pub fn write(&mut self, text: &str) -> TranslateResult {
        Ok(self.writer.write(text)?)
    }

    pub fn writeln(&mut self, text: &str) -> TranslateResult {
        Ok(self.writer.writeln(text)?)
    }

    pub fn ensure_line_start(&mut self) -> TranslateResult {
        Ok(self.writer.ensure_line_start()?)
    }

    pub fn at_output_line_start(&self) -> bool {
        self.writer.at_line_start()
    }

    pub fn additional_indentation(&self) -> usize {
        self.writer.additional_indentation()
    }

    pub fn increment_additional_indentation(&mut self, amount: usize) -> usize {
        self.writer.increment_additional_indentation(amount)
    }

    pub fn set_additional_indentation(&mut self, value: usize) {
        self.writer.set_additional_indentation(value);
    }

    /// Redirect output into a buffer until the guard is finished or dropped.
    pub fn scoped_redirect(&mut self) -> RedirectGuard<'_, Self> {
        RedirectGuard::new(self)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    pub fn write_node(&mut self, node: Node<'_>) -> TranslateResult {
        registry::write_node(self, node)
    }

    /// Write `node` from its own position, then return to where the cursor was.
    pub fn write_node_at(&mut self, node: Node<'_>) -> TranslateResult {
        let saved = self.position();
        self.set_position(node.range().pos)?;
        self.write_node(node)?;
        self.set_position(saved)
    }

    /// Run `f` with `declaration` as the context for modifiers.
    pub fn with_declaration<T>(
        &mut self,
        declaration: DeclarationContext,
        f: impl FnOnce(&mut Self) -> TranslateResult<T>,
    ) -> TranslateResult<T> {
        let previous = self.declaration.replace(declaration);
        let result = f(self);
        self.declaration = previous;
        result
    }

    pub fn declaration(&self) -> Option<DeclarationContext> {
        self.declaration
    }

    // ========================================================================
    // File state
    // ========================================================================

    /// Record that the translated body needs `namespace` imported.
    pub fn require_import(&mut self, namespace: &str) {
        if self.required_imports.insert(namespace.to_string()) {
            debug!(namespace, "import required by body");
        }
    }

    pub fn required_imports(&self) -> impl Iterator<Item = &str> {
        self.required_imports.iter().map(String::as_str)
    }

    /// Remember an emitted import; returns false if it was already written.
    pub fn record_written_import(&mut self, import: &str) -> bool {
        self.written_imports.insert(import.to_string())
    }

    pub fn is_import_written(&self, import: &str) -> bool {
        self.written_imports.contains(import)
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// `node` has no translation for the active target.
    pub fn unsupported_node(&self, node: Node<'_>) -> TranslateError {
        TranslateError::unsupported(
            &messages::_0_IS_NOT_SUPPORTED_WHEN_TRANSLATING_TO_1,
            &[node.kind().as_str(), self.target().display_name()],
            node,
        )
    }

    /// `what` (a token or construct spelling) has no equivalent in the target.
    pub fn no_equivalent(&self, what: &str, node: Node<'_>) -> TranslateError {
        TranslateError::unsupported(
            &messages::_0_HAS_NO_EQUIVALENT_IN_1,
            &[what, self.target().display_name()],
            node,
        )
    }
}

impl Redirect for TranslationContext<'_, '_> {
    fn push_redirect(&mut self) {
        self.writer.push_redirect();
    }

    fn pop_redirect(&mut self) -> String {
        self.writer.pop_redirect()
    }

    fn write_captured(&mut self, text: &str) -> fmt::Result {
        self.writer.write_captured(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_and_match() {
        let session = TranslationSession::default();
        let mut out = String::new();
        {
            let mut ctx = TranslationContext::new("a /* c */ >>> b", &session, &mut out);
            ctx.match_and_copy("a").unwrap();
            assert!(ctx.copy_space_and_comments().unwrap());
            ctx.match_and_write(">>>", ",").unwrap();
            assert!(ctx.copy_space_and_comments().unwrap());
            assert!(!ctx.copy_space_and_comments().unwrap());
            ctx.match_and_copy("b").unwrap();
        }
        assert_eq!(out, "a /* c */ , b");
    }

    #[test]
    fn test_mismatch_is_desync() {
        let session = TranslationSession::default();
        let mut out = String::new();
        let mut ctx = TranslationContext::new("x = 1;", &session, &mut out);
        match ctx.match_token("y") {
            Err(TranslateError::Desync { expected, found, .. }) => {
                assert_eq!(expected, "y");
                assert_eq!(found, "x");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_redirect_then_flush() {
        let session = TranslationSession::default();
        let mut out = String::new();
        {
            let mut ctx = TranslationContext::new("header body", &session, &mut out);
            let body = {
                let mut guard = ctx.scoped_redirect();
                guard.set_position(7).unwrap();
                guard.match_and_copy("body").unwrap();
                guard.finish()
            };
            ctx.set_position(0).unwrap();
            ctx.match_and_write("header", "using x;").unwrap();
            ctx.copy_space_and_comments().unwrap();
            body.flush(&mut ctx).unwrap();
        }
        assert_eq!(out, "using x; body");
    }

    #[test]
    fn test_required_imports_are_deduplicated() {
        let session = TranslationSession::default();
        let mut out = String::new();
        let mut ctx = TranslationContext::new("", &session, &mut out);
        ctx.require_import("System.Text");
        ctx.require_import("System.Text");
        assert_eq!(ctx.required_imports().collect::<Vec<_>>(), ["System.Text"]);
        assert!(ctx.record_written_import("System"));
        assert!(!ctx.record_written_import("System"));
        assert!(ctx.is_import_written("System"));
    }

    #[test]
    fn test_trivia_follows() {
        let session = TranslationSession::default();
        let mut out = String::new();
        let ctx = TranslationContext::new("+ b", &session, &mut out);
        assert!(ctx.trivia_follows(1));
        let ctx2_out = &mut String::new();
        let ctx2 = TranslationContext::new("+b", &session, ctx2_out);
        assert!(!ctx2.trivia_follows(1));
    }
}
