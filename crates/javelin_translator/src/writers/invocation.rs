//! Method invocations.
//!
//! The access token before the method name depends on whether the method is
//! static, so an invocation without a resolved binding cannot be written.

use super::write_arguments;
use crate::context::TranslationContext;
use crate::error::{TranslateError, TranslateResult};
use javelin_ast::{MemberBinding, MethodInvocation, Node, SuperMethodInvocation, Type};
use javelin_diagnostics::messages;

fn require_binding(
    binding: Option<MemberBinding>,
    name: &str,
    node: Node<'_>,
) -> TranslateResult<MemberBinding> {
    binding.ok_or_else(|| TranslateError::missing_binding(name, node))
}

fn reject_type_arguments(type_arguments: &[Type], node: Node<'_>) -> TranslateResult {
    if type_arguments.is_empty() {
        return Ok(());
    }
    Err(TranslateError::unsupported(
        &messages::TYPE_ARGUMENTS_ON_INVOCATIONS_ARE_NOT_SUPPORTED,
        &[],
        node,
    ))
}

pub fn write_method_invocation(
    ctx: &mut TranslationContext<'_, '_>,
    invocation: &MethodInvocation,
) -> TranslateResult {
    let node = Node::MethodInvocation(invocation);
    let binding = require_binding(invocation.binding, &invocation.name.identifier, node)?;
    reject_type_arguments(&invocation.type_arguments, node)?;

    if let Some(expression) = &invocation.expression {
        ctx.write_node(Node::from(expression.as_ref()))?;
        ctx.copy_space_and_comments()?;
        let access = ctx.profile().member_access(binding.is_static);
        ctx.match_and_write(".", access)?;
        ctx.copy_space_and_comments()?;
    }
    ctx.write_node(Node::SimpleName(&invocation.name))?;
    ctx.copy_space_and_comments()?;
    write_arguments(ctx, &invocation.arguments)
}

pub fn write_super_method_invocation(
    ctx: &mut TranslationContext<'_, '_>,
    invocation: &SuperMethodInvocation,
) -> TranslateResult {
    let node = Node::SuperMethodInvocation(invocation);
    if invocation.qualifier.is_some() {
        return Err(TranslateError::unsupported(
            &messages::QUALIFIED_SUPER_INVOCATIONS_ARE_NOT_SUPPORTED,
            &[],
            node,
        ));
    }
    let binding = require_binding(invocation.binding, &invocation.name.identifier, node)?;
    reject_type_arguments(&invocation.type_arguments, node)?;
    let Some(keyword) = ctx.profile().super_keyword else {
        return Err(ctx.no_equivalent("super", node));
    };

    ctx.match_and_write("super", keyword)?;
    ctx.copy_space_and_comments()?;
    let access = ctx.profile().member_access(binding.is_static);
    ctx.match_and_write(".", access)?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::SimpleName(&invocation.name))?;
    ctx.copy_space_and_comments()?;
    write_arguments(ctx, &invocation.arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_ast::builder::TreeBuilder;
    use javelin_ast::Expression;
    use javelin_options::{TargetLanguage, TranslationSession};

    fn write(target: TargetLanguage, source: &str, expression: &Expression) -> TranslateResult<String> {
        let session = TranslationSession::for_target(target);
        let mut out = String::new();
        {
            let mut ctx = TranslationContext::new(source, &session, &mut out);
            ctx.write_node(Node::from(expression))?;
        }
        Ok(out)
    }

    fn list_add(source: &str, binding: Option<MemberBinding>) -> Expression {
        let mut b = TreeBuilder::new(source);
        let list = b.name_expr("list");
        let name = b.simple_name("add");
        let x = b.name_expr("x");
        b.invocation(Some(list), name, vec![x], binding)
    }

    #[test]
    fn test_instance_and_static_access() {
        let source = "list.add( x )";
        let call = list_add(source, Some(MemberBinding::instance()));
        assert_eq!(write(TargetLanguage::CSharp, source, &call).unwrap(), "list.add( x )");
        assert_eq!(write(TargetLanguage::Cpp, source, &call).unwrap(), "list->add( x )");

        let source = "Math.max(a, b)";
        let mut b = TreeBuilder::new(source);
        let math = b.name_expr("Math");
        let name = b.simple_name("max");
        let args = vec![b.name_expr("a"), b.name_expr("b")];
        let call = b.invocation(Some(math), name, args, Some(MemberBinding::static_member()));
        assert_eq!(write(TargetLanguage::Cpp, source, &call).unwrap(), "Math::max(a, b)");
    }

    #[test]
    fn test_missing_binding_is_fatal() {
        let source = "list.add(x)";
        let call = list_add(source, None);
        match write(TargetLanguage::CSharp, source, &call) {
            Err(TranslateError::MissingBinding { name, .. }) => assert_eq!(name, "add"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_type_arguments_are_unsupported() {
        let source = "list.add(x)";
        let mut call = list_add(source, Some(MemberBinding::instance()));
        if let Expression::MethodInvocation(invocation) = &mut call {
            let mut b = TreeBuilder::new(source);
            invocation.type_arguments.push(b.simple_type("list", None));
        }
        assert_eq!(write(TargetLanguage::CSharp, source, &call).unwrap_err().code(), 3005);
    }

    #[test]
    fn test_super_invocation() {
        let source = "super.close()";
        let mut b = TreeBuilder::new(source);
        let keyword = b.word("super");
        let name = b.simple_name("close");
        let call = b.super_invocation(keyword, name, vec![], Some(MemberBinding::instance()));
        assert_eq!(write(TargetLanguage::CSharp, source, &call).unwrap(), "base.close()");
        assert_eq!(write(TargetLanguage::Swift, source, &call).unwrap(), "super.close()");
        assert!(write(TargetLanguage::Cpp, source, &call).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_qualified_super_is_unsupported() {
        let source = "Outer.super.close()";
        let mut b = TreeBuilder::new(source);
        let qualifier = b.name("Outer");
        let keyword = b.word("super");
        let name = b.simple_name("close");
        let mut call = b.super_invocation(keyword, name, vec![], Some(MemberBinding::instance()));
        if let Expression::SuperMethodInvocation(invocation) = &mut call {
            invocation.range.pos = qualifier.range().pos;
            invocation.qualifier = Some(qualifier);
        }
        assert_eq!(write(TargetLanguage::CSharp, source, &call).unwrap_err().code(), 3004);
    }
}
