//! Node dispatch.
//!
//! `write_node` is the single entry point through which construct writers
//! translate their children. It checks that the cursor sits at the node,
//! rejects kinds the active target cannot express, and hands the node to
//! its writer.

use crate::context::TranslationContext;
use crate::error::{TranslateError, TranslateResult};
use crate::writers::{
    compilation_unit, declarations, expressions, infix, invocation, modifiers, statements, types,
};
use javelin_ast::{Node, TypeDeclarationKind};
use javelin_core::text::TextSpan;
use javelin_scanner::SourceCursor;
use tracing::trace;

pub fn write_node(ctx: &mut TranslationContext<'_, '_>, node: Node<'_>) -> TranslateResult {
    trace!(kind = %node.kind(), pos = node.range().pos, "write node");

    if !ctx.profile().supports(node.kind()) {
        return Err(ctx.unsupported_node(node));
    }
    check_position(ctx, node)?;

    match node {
        Node::CompilationUnit(n) => compilation_unit::write_compilation_unit(ctx, n),
        Node::PackageDeclaration(n) => compilation_unit::write_package_declaration(ctx, n),
        Node::ImportDeclaration(n) => compilation_unit::write_import_declaration(ctx, n),
        Node::TypeDeclaration(n) => match n.declaration_kind {
            TypeDeclarationKind::Class | TypeDeclarationKind::Interface => {
                declarations::write_type_declaration(ctx, n)
            }
            TypeDeclarationKind::Enum | TypeDeclarationKind::AnnotationType => {
                Err(ctx.unsupported_node(node))
            }
        },
        Node::FieldDeclaration(n) => declarations::write_field_declaration(ctx, n),
        Node::MethodDeclaration(n) => declarations::write_method_declaration(ctx, n),
        Node::SingleVariableDeclaration(n) => declarations::write_parameter(ctx, n),
        Node::VariableDeclarationFragment(n) => declarations::write_fragment(ctx, n, None),
        Node::Modifier(n) => modifiers::write_modifier(ctx, n),
        Node::Annotation(n) => modifiers::write_annotation(ctx, n),
        Node::PrimitiveType(n) => types::write_primitive_type(ctx, n),
        Node::SimpleType(n) => types::write_simple_type(ctx, n),
        Node::ArrayType(n) => types::write_array_type(ctx, n),
        Node::SimpleName(n) => expressions::write_simple_name(ctx, n),
        Node::QualifiedName(n) => expressions::write_qualified_name(ctx, n),
        Node::NumberLiteral(n) => expressions::write_number_literal(ctx, n),
        Node::StringLiteral(n) => expressions::write_string_literal(ctx, n),
        Node::CharacterLiteral(n) => expressions::write_character_literal(ctx, n),
        Node::BooleanLiteral(n) => expressions::write_boolean_literal(ctx, n),
        Node::NullLiteral(n) => expressions::write_null_literal(ctx, n),
        Node::ThisExpression(n) => expressions::write_this_expression(ctx, n),
        Node::ParenthesizedExpression(n) => expressions::write_parenthesized_expression(ctx, n),
        Node::InfixExpression(n) => infix::write_infix_expression(ctx, n),
        Node::PrefixExpression(n) => expressions::write_prefix_expression(ctx, n),
        Node::PostfixExpression(n) => expressions::write_postfix_expression(ctx, n),
        Node::Assignment(n) => expressions::write_assignment(ctx, n),
        Node::ConditionalExpression(n) => expressions::write_conditional_expression(ctx, n),
        Node::MethodInvocation(n) => invocation::write_method_invocation(ctx, n),
        Node::SuperMethodInvocation(n) => invocation::write_super_method_invocation(ctx, n),
        Node::FieldAccess(n) => expressions::write_field_access(ctx, n),
        Node::SuperFieldAccess(n) => expressions::write_super_field_access(ctx, n),
        Node::ArrayAccess(n) => expressions::write_array_access(ctx, n),
        Node::ClassInstanceCreation(n) => expressions::write_class_instance_creation(ctx, n),
        Node::CastExpression(n) => expressions::write_cast_expression(ctx, n),
        Node::InstanceofExpression(n) => expressions::write_instanceof_expression(ctx, n),
        Node::Block(n) => statements::write_block(ctx, n),
        Node::ExpressionStatement(n) => statements::write_expression_statement(ctx, n),
        Node::VariableDeclarationStatement(n) => {
            statements::write_variable_declaration_statement(ctx, n)
        }
        Node::ReturnStatement(n) => statements::write_return_statement(ctx, n),
        Node::IfStatement(n) => statements::write_if_statement(ctx, n),
        Node::WhileStatement(n) => statements::write_while_statement(ctx, n),
        Node::DoStatement(n) => statements::write_do_statement(ctx, n),
        Node::EmptyStatement(n) => statements::write_empty_statement(ctx, n),
        Node::BreakStatement(n) => statements::write_jump_statement(ctx, n, "break"),
        Node::ContinueStatement(n) => statements::write_jump_statement(ctx, n, "continue"),
        Node::ThrowStatement(n) => statements::write_throw_statement(ctx, n),
        Node::ParameterizedType(_) | Node::Opaque(..) => Err(ctx.unsupported_node(node)),
    }
}

/// The cursor must sit at the node's first token. It may already be past
/// the start when only trivia lies in between, which happens when a node's
/// range begins with its doc comment and that comment was copied already.
fn check_position(ctx: &TranslationContext<'_, '_>, node: Node<'_>) -> TranslateResult {
    let start = node.range().pos;
    let pos = ctx.position();
    if pos == start {
        return Ok(());
    }
    if pos > start {
        let mut probe = SourceCursor::new(ctx.source());
        if probe.set_position(start).is_ok()
            && probe.scan_space_and_comments_until(pos).is_ok()
            && probe.position() >= pos
        {
            return Ok(());
        }
    }

    let mut at_cursor = SourceCursor::new(ctx.source());
    let found = match at_cursor.set_position(pos) {
        Ok(()) => at_cursor.upcoming_excerpt(node.range().len() as usize),
        Err(_) => "<end of file>".to_string(),
    };
    Err(TranslateError::Desync {
        expected: format!("{} at offset {}", node.kind(), start),
        found,
        span: TextSpan::empty(pos),
    })
}
