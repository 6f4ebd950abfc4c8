//! Names, literals and the expression forms other than infix chains and
//! method invocations.

use super::{unsupported_operator, write_arguments, write_operator};
use crate::context::TranslationContext;
use crate::error::{TranslateError, TranslateResult};
use crate::tables::keywords::escape_identifier;
use crate::tables::{literals, operators};
use javelin_ast::*;
use javelin_diagnostics::messages;
use javelin_options::TargetLanguage;

// ============================================================================
// Names
// ============================================================================

pub fn write_simple_name(ctx: &mut TranslationContext<'_, '_>, name: &SimpleName) -> TranslateResult {
    let escaped = escape_identifier(ctx.target(), &name.identifier);
    ctx.match_and_write(&name.identifier, &escaped)
}

/// `a.b`; a name that denotes a static field uses the target's static
/// access token, and so does an unresolved (package or type) qualifier.
pub fn write_qualified_name(
    ctx: &mut TranslationContext<'_, '_>,
    name: &QualifiedName,
) -> TranslateResult {
    ctx.write_node(Node::from(name.qualifier.as_ref()))?;
    ctx.copy_space_and_comments()?;
    let access = match name.binding {
        Some(binding) => ctx.profile().member_access(binding.is_static),
        None => ctx.profile().static_access,
    };
    ctx.match_and_write(".", access)?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::SimpleName(&name.name))
}

// ============================================================================
// Literals
// ============================================================================

pub fn write_number_literal(ctx: &mut TranslationContext<'_, '_>, literal: &Literal) -> TranslateResult {
    let translated = literals::number_literal(ctx.target(), &literal.token);
    write_literal(ctx, literal, translated, Node::NumberLiteral(literal))
}

pub fn write_string_literal(ctx: &mut TranslationContext<'_, '_>, literal: &Literal) -> TranslateResult {
    let translated = literals::string_literal(ctx.target(), &literal.token);
    write_literal(ctx, literal, translated, Node::StringLiteral(literal))
}

pub fn write_character_literal(
    ctx: &mut TranslationContext<'_, '_>,
    literal: &Literal,
) -> TranslateResult {
    let translated = literals::character_literal(ctx.target(), &literal.token);
    write_literal(ctx, literal, translated, Node::CharacterLiteral(literal))
}

fn write_literal(
    ctx: &mut TranslationContext<'_, '_>,
    literal: &Literal,
    translated: Option<String>,
    node: Node<'_>,
) -> TranslateResult {
    match translated {
        Some(text) => ctx.match_and_write(&literal.token, &text),
        None => Err(ctx.no_equivalent(&literal.token, node)),
    }
}

pub fn write_boolean_literal(
    ctx: &mut TranslationContext<'_, '_>,
    literal: &BooleanLiteral,
) -> TranslateResult {
    ctx.match_and_copy(if literal.value { "true" } else { "false" })
}

pub fn write_null_literal(ctx: &mut TranslationContext<'_, '_>, _literal: &NullLiteral) -> TranslateResult {
    let null = ctx.profile().null_literal;
    ctx.match_and_write("null", null)
}

pub fn write_this_expression(
    ctx: &mut TranslationContext<'_, '_>,
    this: &ThisExpression,
) -> TranslateResult {
    if this.qualifier.is_some() {
        return Err(TranslateError::unsupported(
            &messages::QUALIFIED_THIS_IS_NOT_SUPPORTED,
            &[],
            Node::ThisExpression(this),
        ));
    }
    let keyword = ctx.profile().this_keyword;
    ctx.match_and_write("this", keyword)
}

// ============================================================================
// Operators
// ============================================================================

pub fn write_parenthesized_expression(
    ctx: &mut TranslationContext<'_, '_>,
    expression: &ParenthesizedExpression,
) -> TranslateResult {
    ctx.match_and_copy("(")?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::from(expression.expression.as_ref()))?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy(")")
}

pub fn write_prefix_expression(
    ctx: &mut TranslationContext<'_, '_>,
    prefix: &PrefixExpression,
) -> TranslateResult {
    let token = prefix.operator.token();
    let Some(replacement) = operators::prefix_token(ctx.target(), prefix.operator) else {
        return Err(unsupported_operator(ctx, token, Node::PrefixExpression(prefix)));
    };
    ctx.match_and_write(token, replacement)?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::from(prefix.operand.as_ref()))
}

pub fn write_postfix_expression(
    ctx: &mut TranslationContext<'_, '_>,
    postfix: &PostfixExpression,
) -> TranslateResult {
    let token = postfix.operator.token();
    let Some(replacement) = operators::postfix_token(ctx.target(), postfix.operator) else {
        return Err(unsupported_operator(ctx, token, Node::PostfixExpression(postfix)));
    };
    ctx.write_node(Node::from(postfix.operand.as_ref()))?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_write(token, replacement)
}

/// `left op= right`. Where `>>>=` has no counterpart it becomes
/// `left = rightShiftUnsigned(left, right)`, which evaluates `left` twice
/// and so is only done for plain variables.
pub fn write_assignment(ctx: &mut TranslationContext<'_, '_>, assignment: &Assignment) -> TranslateResult {
    let token = assignment.operator.token();
    let left = Node::from(assignment.left.as_ref());
    let right = Node::from(assignment.right.as_ref());

    match operators::assignment_token(ctx.target(), assignment.operator) {
        Some(replacement) => {
            ctx.write_node(left)?;
            write_operator(ctx, token, replacement, false)?;
            ctx.write_node(right)
        }
        None if is_plain_variable(&assignment.left) => {
            ctx.write_node(left)?;
            write_operator(ctx, token, "=", false)?;
            let function = ctx.profile().unsigned_shift_function;
            ctx.write(function)?;
            ctx.write("(")?;
            ctx.write_node_at(left)?;
            ctx.write(", ")?;
            ctx.write_node(right)?;
            ctx.write(")")
        }
        None => Err(unsupported_operator(ctx, token, Node::Assignment(assignment))),
    }
}

fn is_plain_variable(expression: &Expression) -> bool {
    match expression {
        Expression::SimpleName(_) | Expression::QualifiedName(_) => true,
        Expression::FieldAccess(access) => matches!(access.expression.as_ref(), Expression::This(_)),
        _ => false,
    }
}

pub fn write_conditional_expression(
    ctx: &mut TranslationContext<'_, '_>,
    conditional: &ConditionalExpression,
) -> TranslateResult {
    ctx.write_node(Node::from(conditional.condition.as_ref()))?;
    write_operator(ctx, "?", "?", true)?;
    ctx.write_node(Node::from(conditional.then_expression.as_ref()))?;
    write_operator(ctx, ":", ":", true)?;
    ctx.write_node(Node::from(conditional.else_expression.as_ref()))
}

pub fn write_instanceof_expression(
    ctx: &mut TranslationContext<'_, '_>,
    instanceof: &InstanceofExpression,
) -> TranslateResult {
    let node = Node::InstanceofExpression(instanceof);
    let Some(keyword) = ctx.profile().instanceof_keyword else {
        return Err(ctx.no_equivalent("instanceof", node));
    };
    ctx.write_node(Node::from(instanceof.left.as_ref()))?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_write("instanceof", keyword)?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::from(&instanceof.right_operand))
}

pub fn write_cast_expression(
    ctx: &mut TranslationContext<'_, '_>,
    cast: &CastExpression,
) -> TranslateResult {
    ctx.match_and_copy("(")?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::from(&cast.ty))?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy(")")?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::from(cast.expression.as_ref()))
}

// ============================================================================
// Member access
// ============================================================================

/// The access token for a member. The binding is only needed where static
/// and instance access are spelled differently.
fn member_access(
    ctx: &TranslationContext<'_, '_>,
    binding: Option<MemberBinding>,
    name: &SimpleName,
    node: Node<'_>,
) -> TranslateResult<&'static str> {
    let profile = ctx.profile();
    match binding {
        Some(binding) => Ok(profile.member_access(binding.is_static)),
        None if profile.static_access == profile.instance_access => Ok(profile.instance_access),
        None => Err(TranslateError::missing_binding(name.identifier.as_str(), node)),
    }
}

pub fn write_field_access(ctx: &mut TranslationContext<'_, '_>, access: &FieldAccess) -> TranslateResult {
    let token = member_access(ctx, access.binding, &access.name, Node::FieldAccess(access))?;
    ctx.write_node(Node::from(access.expression.as_ref()))?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_write(".", token)?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::SimpleName(&access.name))
}

pub fn write_super_field_access(
    ctx: &mut TranslationContext<'_, '_>,
    access: &SuperFieldAccess,
) -> TranslateResult {
    let node = Node::SuperFieldAccess(access);
    if access.qualifier.is_some() {
        return Err(ctx.no_equivalent("Outer.super", node));
    }
    let Some(keyword) = ctx.profile().super_keyword else {
        return Err(ctx.no_equivalent("super", node));
    };
    let token = member_access(ctx, access.binding, &access.name, node)?;
    ctx.match_and_write("super", keyword)?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_write(".", token)?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::SimpleName(&access.name))
}

pub fn write_array_access(ctx: &mut TranslationContext<'_, '_>, access: &ArrayAccess) -> TranslateResult {
    ctx.write_node(Node::from(access.array.as_ref()))?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy("[")?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::from(access.index.as_ref()))?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy("]")
}

/// `new T(args)`; Swift constructs with `T(args)`.
pub fn write_class_instance_creation(
    ctx: &mut TranslationContext<'_, '_>,
    creation: &ClassInstanceCreation,
) -> TranslateResult {
    let node = Node::ClassInstanceCreation(creation);
    if creation.expression.is_some() {
        return Err(ctx.no_equivalent("outer.new", node));
    }
    if !creation.type_arguments.is_empty() {
        return Err(TranslateError::unsupported(
            &messages::TYPE_ARGUMENTS_ON_INVOCATIONS_ARE_NOT_SUPPORTED,
            &[],
            node,
        ));
    }
    if creation.anonymous_class_declaration.is_some() {
        return Err(TranslateError::unsupported(
            &messages::ANONYMOUS_CLASSES_ARE_NOT_SUPPORTED,
            &[],
            node,
        ));
    }

    if ctx.target() == TargetLanguage::Swift {
        ctx.match_token("new")?;
        ctx.skip_space_and_comments()?;
    } else {
        ctx.match_and_copy("new")?;
        ctx.copy_space_and_comments()?;
    }
    ctx.write_node(Node::from(&creation.ty))?;
    ctx.copy_space_and_comments()?;
    write_arguments(ctx, &creation.arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_ast::builder::TreeBuilder;
    use javelin_options::TranslationSession;

    fn write(target: TargetLanguage, source: &str, expression: &Expression) -> TranslateResult<String> {
        let session = TranslationSession::for_target(target);
        let mut out = String::new();
        {
            let mut ctx = TranslationContext::new(source, &session, &mut out);
            ctx.write_node(Node::from(expression))?;
        }
        Ok(out)
    }

    #[test]
    fn test_keyword_names_are_escaped() {
        let source = "base";
        let mut b = TreeBuilder::new(source);
        let name = b.name_expr("base");
        assert_eq!(write(TargetLanguage::CSharp, source, &name).unwrap(), "@base");
        assert_eq!(write(TargetLanguage::Swift, source, &name).unwrap(), "base");
    }

    #[test]
    fn test_static_field_name_in_cpp() {
        let source = "Math.PI";
        let mut b = TreeBuilder::new(source);
        let pi = b.field_name("Math.PI", MemberBinding::static_member());
        assert_eq!(write(TargetLanguage::Cpp, source, &pi).unwrap(), "Math::PI");
        assert_eq!(write(TargetLanguage::CSharp, source, &pi).unwrap(), "Math.PI");
    }

    #[test]
    fn test_null_and_this() {
        let source = "this == null";
        let mut b = TreeBuilder::new(source);
        let this = b.this();
        let null = b.null();
        let expr = b.infix(this, InfixOperator::Equals, null);
        assert_eq!(write(TargetLanguage::Swift, source, &expr).unwrap(), "self == nil");
        assert_eq!(write(TargetLanguage::Cpp, source, &expr).unwrap(), "this == nullptr");
    }

    #[test]
    fn test_swift_ternary_gets_spaces() {
        let source = "a?b:c";
        let mut b = TreeBuilder::new(source);
        let a = b.name_expr("a");
        let bb = b.name_expr("b");
        let c = b.name_expr("c");
        let expr = b.conditional(a, bb, c);
        assert_eq!(write(TargetLanguage::Swift, source, &expr).unwrap(), "a ? b : c");
        assert_eq!(write(TargetLanguage::CSharp, source, &expr).unwrap(), "a?b:c");
    }

    #[test]
    fn test_unsigned_shift_assignment() {
        let source = "bits >>>= 2";
        let mut b = TreeBuilder::new(source);
        let bits = b.name_expr("bits");
        let two = b.number("2");
        let expr = b.assignment(bits, AssignmentOperator::RightShiftUnsignedAssign, two);
        assert_eq!(
            write(TargetLanguage::Swift, source, &expr).unwrap(),
            "bits = rightShiftUnsigned(bits, 2)"
        );
        assert_eq!(write(TargetLanguage::CSharp, source, &expr).unwrap(), "bits >>>= 2");
    }

    #[test]
    fn test_unsigned_shift_assignment_needs_plain_variable() {
        let source = "a[i] >>>= 2";
        let mut b = TreeBuilder::new(source);
        let a = b.name_expr("a");
        let i = b.name_expr("i");
        let element = b.array_access(a, i);
        let two = b.number("2");
        let expr = b.assignment(element, AssignmentOperator::RightShiftUnsignedAssign, two);
        let err = write(TargetLanguage::Swift, source, &expr).unwrap_err();
        assert_eq!(err.code(), 3006);
    }

    #[test]
    fn test_swift_increment_is_unsupported_in_expressions() {
        let source = "i++";
        let mut b = TreeBuilder::new(source);
        let i = b.name_expr("i");
        let expr = b.postfix(i, PostfixOperator::Increment);
        assert_eq!(write(TargetLanguage::CSharp, source, &expr).unwrap(), "i++");
        assert!(write(TargetLanguage::Swift, source, &expr).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_instance_creation() {
        let source = "new Point(1, 2)";
        let mut b = TreeBuilder::new(source);
        let new = b.word("new");
        let ty = b.simple_type("Point", None);
        let one = b.number("1");
        let two = b.number("2");
        let expr = b.new_instance(new, ty, vec![one, two]);
        assert_eq!(write(TargetLanguage::CSharp, source, &expr).unwrap(), "new Point(1, 2)");
        assert_eq!(write(TargetLanguage::Swift, source, &expr).unwrap(), "Point(1, 2)");
    }

    #[test]
    fn test_field_access_in_cpp_needs_binding() {
        let source = "this.count";
        let mut b = TreeBuilder::new(source);
        let this = b.this();
        let name = b.simple_name("count");
        let expr = b.field_access(this, name, None);
        assert_eq!(write(TargetLanguage::CSharp, source, &expr).unwrap(), "this.count");
        assert!(matches!(
            write(TargetLanguage::Cpp, source, &expr),
            Err(TranslateError::MissingBinding { .. })
        ));
    }

    #[test]
    fn test_cast_and_instanceof() {
        let source = "(Shape) o";
        let mut b = TreeBuilder::new(source);
        let open = b.token("(");
        let ty = b.simple_type("Shape", None);
        let o = b.name_expr("o");
        let cast = b.cast(open, ty, o);
        assert_eq!(write(TargetLanguage::CSharp, source, &cast).unwrap(), "(Shape) o");

        let source = "o instanceof Shape";
        let mut b = TreeBuilder::new(source);
        let o = b.name_expr("o");
        let ty = b.simple_type("Shape", None);
        let test = b.instanceof(o, ty);
        assert_eq!(write(TargetLanguage::CSharp, source, &test).unwrap(), "o is Shape");
        assert_eq!(write(TargetLanguage::Swift, source, &test).unwrap(), "o is Shape");
    }
}
