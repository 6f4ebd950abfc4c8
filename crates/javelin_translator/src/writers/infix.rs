//! Infix expressions, including extended operand chains (`a + b + c`).

use super::write_operator;
use crate::context::TranslationContext;
use crate::error::TranslateResult;
use crate::tables::operators::{infix_token, is_non_associative, needs_parentheses};
use javelin_ast::{Expression, InfixExpression, InfixOperator, Node};

pub fn write_infix_expression(
    ctx: &mut TranslationContext<'_, '_>,
    infix: &InfixExpression,
) -> TranslateResult {
    let operator = infix.operator;
    let Some(replacement) = infix_token(ctx.target(), operator) else {
        return write_as_call(ctx, infix);
    };
    let token = operator.token();
    // `a == b == c` groups as `(a == b) == c`.
    let group_links = is_non_associative(ctx.target(), operator) && !infix.extended_operands.is_empty();

    if group_links {
        for _ in &infix.extended_operands {
            ctx.write("(")?;
        }
    }
    write_operand(ctx, operator, &infix.left, true)?;
    write_operator(ctx, token, replacement, false)?;
    write_operand(ctx, operator, &infix.right, false)?;
    for operand in &infix.extended_operands {
        if group_links {
            ctx.write(")")?;
        }
        write_operator(ctx, token, replacement, false)?;
        write_operand(ctx, operator, operand, false)?;
    }
    Ok(())
}

/// Write an operand, parenthesized when the target grammar would otherwise
/// regroup it.
fn write_operand(
    ctx: &mut TranslationContext<'_, '_>,
    parent: InfixOperator,
    operand: &Expression,
    is_left: bool,
) -> TranslateResult {
    let wrap = match operand {
        Expression::Infix(child) => needs_parentheses(ctx.target(), parent, child.operator, is_left),
        _ => false,
    };
    if wrap {
        ctx.write("(")?;
    }
    ctx.write_node(Node::from(operand))?;
    if wrap {
        ctx.write(")")?;
    }
    Ok(())
}

/// `a >>> b >>> c` as `f(f(a, b), c)` for targets without the operator.
fn write_as_call(ctx: &mut TranslationContext<'_, '_>, infix: &InfixExpression) -> TranslateResult {
    let function = ctx.profile().unsigned_shift_function;
    let token = infix.operator.token();
    let calls = 1 + infix.extended_operands.len();
    for _ in 0..calls {
        ctx.write(function)?;
        ctx.write("(")?;
    }
    ctx.write_node(Node::from(infix.left.as_ref()))?;
    for operand in std::iter::once(infix.right.as_ref()).chain(&infix.extended_operands) {
        // Spaces before the operator would land before the comma.
        ctx.skip_spaces_and_tabs();
        ctx.copy_space_and_comments()?;
        ctx.match_and_write(token, ",")?;
        ctx.copy_space_and_comments()?;
        ctx.write_node(Node::from(operand))?;
        ctx.write(")")?;
    }
    Ok(())
}
