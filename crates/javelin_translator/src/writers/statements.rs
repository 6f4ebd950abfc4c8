//! Statements.

use super::declarations::write_variables;
use super::modifiers::write_modifiers;
use super::write_terminator;
use crate::context::TranslationContext;
use crate::error::{TranslateError, TranslateResult};
use crate::tables::modifiers::DeclarationContext;
use javelin_ast::{
    Block, DoStatement, EmptyStatement, Expression, ExpressionStatement, IfStatement,
    JumpStatement, Node, PostfixOperator, PrefixOperator, ReturnStatement, Statement,
    ThrowStatement, VariableDeclarationStatement, WhileStatement,
};
use javelin_diagnostics::messages;
use javelin_options::TargetLanguage;

pub fn write_block(ctx: &mut TranslationContext<'_, '_>, block: &Block) -> TranslateResult {
    ctx.match_and_copy("{")?;
    for statement in &block.statements {
        ctx.copy_space_and_comments()?;
        ctx.write_node(Node::from(statement))?;
    }
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy("}")
}

pub fn write_expression_statement(
    ctx: &mut TranslationContext<'_, '_>,
    statement: &ExpressionStatement,
) -> TranslateResult {
    if ctx.target() == TargetLanguage::Swift {
        write_swift_step(ctx, &statement.expression)?;
    } else {
        ctx.write_node(Node::from(&statement.expression))?;
    }
    write_terminator(ctx)
}

/// Swift has no `++`/`--`; as a statement `i++` is `i += 1`.
fn write_swift_step(ctx: &mut TranslationContext<'_, '_>, expression: &Expression) -> TranslateResult {
    match expression {
        Expression::Prefix(prefix) => {
            let step = match prefix.operator {
                PrefixOperator::Increment => " += 1",
                PrefixOperator::Decrement => " -= 1",
                _ => return ctx.write_node(Node::from(expression)),
            };
            ctx.match_token(prefix.operator.token())?;
            ctx.skip_space_and_comments()?;
            ctx.write_node(Node::from(prefix.operand.as_ref()))?;
            ctx.write(step)
        }
        Expression::Postfix(postfix) => {
            let step = match postfix.operator {
                PostfixOperator::Increment => " += 1",
                PostfixOperator::Decrement => " -= 1",
            };
            ctx.write_node(Node::from(postfix.operand.as_ref()))?;
            ctx.skip_space_and_comments()?;
            ctx.match_and_write(postfix.operator.token(), step)
        }
        _ => ctx.write_node(Node::from(expression)),
    }
}

pub fn write_variable_declaration_statement(
    ctx: &mut TranslationContext<'_, '_>,
    statement: &VariableDeclarationStatement,
) -> TranslateResult {
    write_modifiers(ctx, &statement.modifiers, DeclarationContext::Local)?;
    write_variables(ctx, &statement.modifiers, &statement.ty, &statement.fragments)?;
    write_terminator(ctx)
}

pub fn write_return_statement(
    ctx: &mut TranslationContext<'_, '_>,
    statement: &ReturnStatement,
) -> TranslateResult {
    ctx.match_and_copy("return")?;
    if let Some(expression) = &statement.expression {
        ctx.copy_space_and_comments()?;
        ctx.write_node(Node::from(expression))?;
    }
    write_terminator(ctx)
}

pub fn write_throw_statement(
    ctx: &mut TranslationContext<'_, '_>,
    statement: &ThrowStatement,
) -> TranslateResult {
    ctx.match_and_copy("throw")?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::from(&statement.expression))?;
    write_terminator(ctx)
}

// ============================================================================
// Control flow
// ============================================================================

/// `(condition)`, parentheses kept.
fn write_condition(ctx: &mut TranslationContext<'_, '_>, condition: &Expression) -> TranslateResult {
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy("(")?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::from(condition))?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy(")")
}

/// Swift requires braces around every body.
fn check_body(
    ctx: &TranslationContext<'_, '_>,
    keyword: &str,
    body: &Statement,
) -> TranslateResult {
    if ctx.target() == TargetLanguage::Swift && !matches!(body, Statement::Block(_)) {
        return Err(TranslateError::unsupported(
            &messages::_0_BODY_MUST_BE_A_BLOCK_IN_1,
            &[keyword, ctx.target().display_name()],
            Node::from(body),
        ));
    }
    Ok(())
}

fn write_body(
    ctx: &mut TranslationContext<'_, '_>,
    keyword: &str,
    body: &Statement,
) -> TranslateResult {
    check_body(ctx, keyword, body)?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::from(body))
}

pub fn write_if_statement(ctx: &mut TranslationContext<'_, '_>, statement: &IfStatement) -> TranslateResult {
    ctx.match_and_copy("if")?;
    write_condition(ctx, &statement.expression)?;
    write_body(ctx, "if", &statement.then_statement)?;

    if let Some(else_statement) = &statement.else_statement {
        ctx.copy_space_and_comments()?;
        ctx.match_and_copy("else")?;
        // `else if` chains are fine everywhere.
        if !matches!(else_statement.as_ref(), Statement::If(_)) {
            check_body(ctx, "else", else_statement)?;
        }
        ctx.copy_space_and_comments()?;
        ctx.write_node(Node::from(else_statement.as_ref()))?;
    }
    Ok(())
}

pub fn write_while_statement(
    ctx: &mut TranslationContext<'_, '_>,
    statement: &WhileStatement,
) -> TranslateResult {
    ctx.match_and_copy("while")?;
    write_condition(ctx, &statement.expression)?;
    write_body(ctx, "while", &statement.body)
}

/// `do { } while (c);`; Swift spells it `repeat { } while (c)`.
pub fn write_do_statement(ctx: &mut TranslationContext<'_, '_>, statement: &DoStatement) -> TranslateResult {
    let keyword = match ctx.target() {
        TargetLanguage::Swift => "repeat",
        _ => "do",
    };
    ctx.match_and_write("do", keyword)?;
    write_body(ctx, "do", &statement.body)?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy("while")?;
    write_condition(ctx, &statement.expression)?;
    write_terminator(ctx)
}

pub fn write_empty_statement(
    ctx: &mut TranslationContext<'_, '_>,
    _statement: &EmptyStatement,
) -> TranslateResult {
    if ctx.profile().statement_terminator {
        ctx.match_and_copy(";")
    } else {
        ctx.match_token(";")
    }
}

pub fn write_jump_statement(
    ctx: &mut TranslationContext<'_, '_>,
    statement: &JumpStatement,
    keyword: &str,
) -> TranslateResult {
    if statement.label.is_some() {
        let node = match keyword {
            "break" => Node::BreakStatement(statement),
            _ => Node::ContinueStatement(statement),
        };
        return Err(TranslateError::unsupported(
            &messages::LABELED_JUMPS_ARE_NOT_SUPPORTED,
            &[],
            node,
        ));
    }
    ctx.match_and_copy(keyword)?;
    write_terminator(ctx)
}
