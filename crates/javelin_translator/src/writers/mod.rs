//! Construct writers, one function per node kind.
//!
//! Every writer is entered with the cursor at its node's first token and
//! leaves it just past the node's last token. Trivia between child nodes is
//! copied by the writer of the parent.

pub mod compilation_unit;
pub mod declarations;
pub mod expressions;
pub mod infix;
pub mod invocation;
pub mod modifiers;
pub mod statements;
pub mod types;

use crate::context::TranslationContext;
use crate::error::{TranslateError, TranslateResult};
use javelin_ast::{Expression, Node};
use javelin_diagnostics::messages;
use javelin_options::TargetLanguage;

/// Copy the trivia around a binary operator and write its replacement.
///
/// Swift parses an operator with whitespace on one side only as a prefix or
/// postfix operator, so for Swift the missing side is filled in. With
/// `always_spaced` both sides get whitespace, as the ternary operator needs.
pub(crate) fn write_operator(
    ctx: &mut TranslationContext<'_, '_>,
    token: &str,
    replacement: &str,
    always_spaced: bool,
) -> TranslateResult {
    let balance = ctx.target() == TargetLanguage::Swift;
    let space_before = ctx.copy_space_and_comments()?;
    if balance && !space_before && (always_spaced || ctx.trivia_follows(token.len())) {
        ctx.write(" ")?;
    }
    ctx.match_and_write(token, replacement)?;
    let space_after = ctx.copy_space_and_comments()?;
    if balance && !space_after && (always_spaced || space_before) {
        ctx.write(" ")?;
    }
    Ok(())
}

/// Write `items` separated by the commas found between them in the source.
pub(crate) fn write_comma_separated<'n, T>(
    ctx: &mut TranslationContext<'_, '_>,
    items: &'n [T],
    node_of: impl Fn(&'n T) -> Node<'n>,
) -> TranslateResult {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            ctx.copy_space_and_comments()?;
            ctx.match_and_copy(",")?;
        }
        ctx.copy_space_and_comments()?;
        ctx.write_node(node_of(item))?;
    }
    Ok(())
}

/// `(a, b, ...)`, with the cursor at the opening parenthesis.
pub(crate) fn write_arguments(
    ctx: &mut TranslationContext<'_, '_>,
    arguments: &[Expression],
) -> TranslateResult {
    ctx.match_and_copy("(")?;
    write_comma_separated(ctx, arguments, Node::from)?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy(")")
}

/// The `;` ending a statement or member, dropped where the target has none.
pub(crate) fn write_terminator(ctx: &mut TranslationContext<'_, '_>) -> TranslateResult {
    ctx.copy_space_and_comments()?;
    if ctx.profile().statement_terminator {
        ctx.match_and_copy(";")
    } else {
        ctx.match_token(";")
    }
}

pub(crate) fn unsupported_operator(
    ctx: &TranslationContext<'_, '_>,
    token: &str,
    node: Node<'_>,
) -> TranslateError {
    TranslateError::unsupported(
        &messages::OPERATOR_0_HAS_NO_EQUIVALENT_IN_1,
        &[token, ctx.target().display_name()],
        node,
    )
}
