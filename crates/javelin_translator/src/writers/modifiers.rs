//! Modifier keywords and annotations.

use crate::context::TranslationContext;
use crate::error::{TranslateError, TranslateResult};
use crate::tables::modifiers::{modifier_rule, DeclarationContext, ModifierRule};
use javelin_ast::{Annotation, AnnotationKind, ExtendedModifier, Modifier, Node};
use javelin_diagnostics::messages;
use javelin_options::{AnnotationTranslation, TargetLanguage};
use tracing::debug;

/// Write a declaration's modifier list and the trivia after it, leaving the
/// cursor at the declaration's next token.
pub(crate) fn write_modifiers(
    ctx: &mut TranslationContext<'_, '_>,
    modifiers: &[ExtendedModifier],
    declaration: DeclarationContext,
) -> TranslateResult {
    ctx.with_declaration(declaration, |ctx| {
        for modifier in modifiers {
            ctx.copy_space_and_comments()?;
            ctx.write_node(Node::from(modifier))?;
        }
        ctx.copy_space_and_comments()?;
        Ok(())
    })
}

pub fn write_modifier(ctx: &mut TranslationContext<'_, '_>, modifier: &Modifier) -> TranslateResult {
    let node = Node::Modifier(modifier);
    let Some(declaration) = ctx.declaration() else {
        return Err(ctx.unsupported_node(node));
    };
    let token = modifier.keyword.token();
    match modifier_rule(ctx.target(), modifier.keyword, declaration) {
        ModifierRule::Keep => ctx.match_and_copy(token),
        ModifierRule::Replace(replacement) => ctx.match_and_write(token, replacement),
        ModifierRule::Drop => {
            ctx.match_token(token)?;
            ctx.skip_spaces_and_tabs();
            Ok(())
        }
        ModifierRule::Unsupported => Err(TranslateError::unsupported(
            &messages::MODIFIER_0_IS_NOT_SUPPORTED_IN_1,
            &[token, ctx.target().display_name()],
            node,
        )),
    }
}

pub fn write_annotation(
    ctx: &mut TranslationContext<'_, '_>,
    annotation: &Annotation,
) -> TranslateResult {
    let node = Node::Annotation(annotation);
    if annotation.annotation_kind != AnnotationKind::Marker {
        return Err(TranslateError::unsupported(
            &messages::ANNOTATIONS_WITH_ARGUMENTS_ARE_NOT_SUPPORTED,
            &[],
            node,
        ));
    }

    let name = annotation.qualified_name();
    match ctx.session().annotation(&name) {
        None => Err(TranslateError::unsupported(
            &messages::ANNOTATION_0_HAS_NO_TRANSLATION,
            &[name.as_str()],
            node,
        )),
        Some(AnnotationTranslation::Suppress) => {
            debug!(annotation = name.as_str(), "suppressing annotation");
            // An annotation on a line of its own goes with its line.
            ctx.skip_range(annotation.range)?;
            ctx.skip_rest_of_line()?;
            ctx.skip_spaces_and_tabs();
            Ok(())
        }
        Some(AnnotationTranslation::Attribute(attribute)) => {
            let text = match ctx.target() {
                TargetLanguage::CSharp => format!("[{}]", attribute),
                _ => format!("@{}", attribute),
            };
            ctx.replace_range(annotation.range, &text)
        }
    }
}
