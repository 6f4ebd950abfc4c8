//! Type, field, method and parameter declarations.

use super::modifiers::write_modifiers;
use super::{write_comma_separated, write_operator, write_terminator};
use crate::context::TranslationContext;
use crate::error::{TranslateError, TranslateResult};
use crate::tables::modifiers::DeclarationContext;
use javelin_ast::{
    modifier_flags, ExtendedModifier, FieldDeclaration, MethodDeclaration, ModifierFlags, Node,
    NodeKind, OpaqueNode, SingleVariableDeclaration, Type, TypeDeclaration,
    TypeDeclarationKind, VariableDeclarationFragment,
};
use javelin_diagnostics::messages;
use javelin_options::TargetLanguage;

fn type_parameters_unsupported(first: &OpaqueNode) -> TranslateError {
    TranslateError::unsupported(
        &messages::TYPE_PARAMETERS_ARE_NOT_SUPPORTED,
        &[],
        Node::Opaque(NodeKind::TypeParameter, first),
    )
}

fn extra_dimensions_unsupported(node: Node<'_>) -> TranslateError {
    TranslateError::unsupported(&messages::EXTRA_DIMENSIONS_ARE_NOT_SUPPORTED, &[], node)
}

// ============================================================================
// Types
// ============================================================================

pub fn write_type_declaration(
    ctx: &mut TranslationContext<'_, '_>,
    decl: &TypeDeclaration,
) -> TranslateResult {
    if let Some(first) = decl.type_parameters.first() {
        return Err(type_parameters_unsupported(first));
    }

    ctx.copy_space_and_comments()?;
    write_modifiers(ctx, &decl.modifiers, DeclarationContext::Type)?;

    let swift = ctx.target() == TargetLanguage::Swift;
    match decl.declaration_kind {
        TypeDeclarationKind::Interface if swift => ctx.match_and_write("interface", "protocol")?,
        TypeDeclarationKind::Interface => ctx.match_and_copy("interface")?,
        _ => ctx.match_and_copy("class")?,
    }
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::SimpleName(&decl.name))?;

    // Both `extends` and `implements` collapse into one base list.
    let mut has_base_list = false;
    if let Some(superclass) = &decl.superclass_type {
        ctx.copy_space_and_comments()?;
        ctx.match_and_write("extends", ":")?;
        ctx.copy_space_and_comments()?;
        ctx.write_node(Node::from(superclass))?;
        has_base_list = true;
    }
    if !decl.super_interface_types.is_empty() {
        let keyword = if decl.is_interface() { "extends" } else { "implements" };
        if has_base_list {
            ctx.skip_space_and_comments()?;
            ctx.match_and_write(keyword, ",")?;
        } else {
            ctx.copy_space_and_comments()?;
            ctx.match_and_write(keyword, ":")?;
        }
        write_comma_separated(ctx, &decl.super_interface_types, Node::from)?;
    }

    ctx.copy_space_and_comments()?;
    ctx.match_and_copy("{")?;
    for member in &decl.body_declarations {
        ctx.copy_space_and_comments()?;
        ctx.write_node(Node::from(member))?;
    }
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy("}")
}

// ============================================================================
// Fields & variables
// ============================================================================

pub fn write_field_declaration(
    ctx: &mut TranslationContext<'_, '_>,
    field: &FieldDeclaration,
) -> TranslateResult {
    ctx.copy_space_and_comments()?;
    write_modifiers(ctx, &field.modifiers, DeclarationContext::Field)?;
    write_variables(ctx, &field.modifiers, &field.ty, &field.fragments)?;
    write_terminator(ctx)
}

/// The type and fragments of a field or local variable declaration.
///
/// Swift declares variables as `let name: Type` (or `var`), so there the
/// type is replaced by the keyword and written again after each name.
pub(crate) fn write_variables(
    ctx: &mut TranslationContext<'_, '_>,
    modifiers: &[ExtendedModifier],
    ty: &Type,
    fragments: &[VariableDeclarationFragment],
) -> TranslateResult {
    let swift = ctx.target() == TargetLanguage::Swift;
    if swift {
        let keyword = if modifier_flags(modifiers).contains(ModifierFlags::FINAL) {
            "let"
        } else {
            "var"
        };
        ctx.replace_range(ty.range(), keyword)?;
    } else {
        ctx.write_node(Node::from(ty))?;
    }

    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            ctx.copy_space_and_comments()?;
            ctx.match_and_copy(",")?;
        }
        ctx.copy_space_and_comments()?;
        write_fragment(ctx, fragment, swift.then_some(ty))?;
    }
    Ok(())
}

/// `name = initializer`, with `: declared_type` after the name when given.
pub fn write_fragment(
    ctx: &mut TranslationContext<'_, '_>,
    fragment: &VariableDeclarationFragment,
    declared_type: Option<&Type>,
) -> TranslateResult {
    if fragment.extra_dimensions > 0 {
        return Err(extra_dimensions_unsupported(Node::VariableDeclarationFragment(
            fragment,
        )));
    }
    ctx.write_node(Node::SimpleName(&fragment.name))?;
    if let Some(ty) = declared_type {
        ctx.write(": ")?;
        ctx.write_node_at(Node::from(ty))?;
    }
    if let Some(initializer) = &fragment.initializer {
        write_operator(ctx, "=", "=", false)?;
        ctx.write_node(Node::from(initializer))?;
    }
    Ok(())
}

// ============================================================================
// Methods
// ============================================================================

pub fn write_method_declaration(
    ctx: &mut TranslationContext<'_, '_>,
    method: &MethodDeclaration,
) -> TranslateResult {
    if let Some(first) = method.type_parameters.first() {
        return Err(type_parameters_unsupported(first));
    }
    if method.extra_dimensions > 0 {
        return Err(extra_dimensions_unsupported(Node::MethodDeclaration(method)));
    }

    ctx.copy_space_and_comments()?;
    write_modifiers(ctx, &method.modifiers, DeclarationContext::Method)?;

    let swift = ctx.target() == TargetLanguage::Swift;
    match &method.return_type {
        Some(return_type) if swift => {
            ctx.replace_range(return_type.range(), "func")?;
            ctx.copy_space_and_comments()?;
            ctx.write_node(Node::SimpleName(&method.name))?;
        }
        Some(return_type) => {
            ctx.write_node(Node::from(return_type))?;
            ctx.copy_space_and_comments()?;
            ctx.write_node(Node::SimpleName(&method.name))?;
        }
        None if swift => ctx.replace_range(method.name.range, "init")?,
        None => ctx.write_node(Node::SimpleName(&method.name))?,
    }

    ctx.copy_space_and_comments()?;
    ctx.match_and_copy("(")?;
    write_comma_separated(ctx, &method.parameters, Node::SingleVariableDeclaration)?;
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy(")")?;

    write_thrown_exceptions(ctx, method)?;

    if swift {
        if let Some(return_type) = method.return_type.as_ref().filter(|t| !t.is_void()) {
            ctx.write(" -> ")?;
            ctx.write_node_at(Node::from(return_type))?;
        }
    }

    match &method.body {
        Some(body) => {
            ctx.copy_space_and_comments()?;
            ctx.write_node(Node::Block(body))
        }
        None => write_terminator(ctx),
    }
}

/// C# has no checked exceptions, so the clause goes; Swift keeps a bare
/// `throws` without the types. Comments inside the type list go with it.
fn write_thrown_exceptions(
    ctx: &mut TranslationContext<'_, '_>,
    method: &MethodDeclaration,
) -> TranslateResult {
    if method.thrown_exceptions.is_empty() {
        return Ok(());
    }
    if ctx.target() == TargetLanguage::Swift {
        ctx.copy_space_and_comments()?;
        ctx.match_and_copy("throws")?;
    } else {
        ctx.skip_space_and_comments()?;
        ctx.match_token("throws")?;
    }
    for (i, exception) in method.thrown_exceptions.iter().enumerate() {
        if i > 0 {
            ctx.skip_space_and_comments()?;
            ctx.match_token(",")?;
        }
        ctx.skip_space_and_comments()?;
        ctx.skip_range(exception.range())?;
    }
    Ok(())
}

pub fn write_parameter(
    ctx: &mut TranslationContext<'_, '_>,
    param: &SingleVariableDeclaration,
) -> TranslateResult {
    if param.extra_dimensions > 0 {
        return Err(extra_dimensions_unsupported(Node::SingleVariableDeclaration(param)));
    }
    write_modifiers(ctx, &param.modifiers, DeclarationContext::Parameter)?;

    match ctx.target() {
        TargetLanguage::Swift => {
            ctx.write("_ ")?;
            ctx.skip_range(param.ty.range())?;
            if param.is_varargs {
                ctx.skip_space_and_comments()?;
                ctx.match_token("...")?;
            }
            ctx.skip_space_and_comments()?;
            ctx.write_node(Node::SimpleName(&param.name))?;
            ctx.write(": ")?;
            ctx.write_node_at(Node::from(&param.ty))?;
            if param.is_varargs {
                ctx.write("...")?;
            }
        }
        target => {
            let csharp = target == TargetLanguage::CSharp;
            if param.is_varargs && csharp {
                ctx.write("params ")?;
            }
            ctx.write_node(Node::from(&param.ty))?;
            if param.is_varargs {
                ctx.copy_space_and_comments()?;
                ctx.match_and_write("...", if csharp { "[]" } else { "..." })?;
            }
            ctx.copy_space_and_comments()?;
            ctx.write_node(Node::SimpleName(&param.name))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_ast::builder::TreeBuilder;
    use javelin_ast::{BodyDeclaration, ModifierKeyword};
    use javelin_options::TranslationSession;

    fn write(target: TargetLanguage, source: &str, node: Node<'_>) -> String {
        let session = TranslationSession::for_target(target);
        let mut out = String::new();
        {
            let mut ctx = TranslationContext::new(source, &session, &mut out);
            ctx.write_node(node).unwrap();
        }
        out
    }

    fn private_field(source: &str, final_: bool) -> BodyDeclaration {
        let mut b = TreeBuilder::new(source);
        let mut modifiers = vec![b.modifier(ModifierKeyword::Private)];
        if final_ {
            modifiers.push(b.modifier(ModifierKeyword::Final));
        }
        let ty = b.primitive_type("int");
        let name = b.simple_name("count");
        let zero = b.number("0");
        let fragment = b.fragment(name, Some(zero));
        b.field(modifiers, ty, vec![fragment])
    }

    #[test]
    fn test_field_in_csharp() {
        let source = "private final int count = 0;";
        let field = private_field(source, true);
        assert_eq!(
            write(TargetLanguage::CSharp, source, Node::from(&field)),
            "private readonly int count = 0;"
        );
    }

    #[test]
    fn test_field_in_swift() {
        let source = "private final int count = 0;";
        let field = private_field(source, true);
        assert_eq!(
            write(TargetLanguage::Swift, source, Node::from(&field)),
            "private let count: Int32 = 0"
        );

        let source = "private int count = 0;";
        let field = private_field(source, false);
        assert_eq!(
            write(TargetLanguage::Swift, source, Node::from(&field)),
            "private var count: Int32 = 0"
        );
    }

    #[test]
    fn test_varargs_parameter() {
        let source = "String... parts";
        let mut b = TreeBuilder::new(source);
        let ty = b.simple_type("String", None);
        b.token("...");
        let name = b.simple_name("parts");
        let param = b.parameter(vec![], ty, true, name);
        let node = Node::SingleVariableDeclaration(&param);
        assert_eq!(write(TargetLanguage::CSharp, source, node), "params String[] parts");
        assert_eq!(write(TargetLanguage::Swift, source, node), "_ parts: String...");
    }

    #[test]
    fn test_method_throws_clause() {
        let source = "int read(int n) throws IOException { }";
        let mut b = TreeBuilder::new(source);
        let ret = b.primitive_type("int");
        let name = b.simple_name("read");
        let pty = b.primitive_type("int");
        let pname = b.simple_name("n");
        let param = b.parameter(vec![], pty, false, pname);
        let thrown = b.simple_type("IOException", None);
        let open = b.token("{");
        let body = b.block(open, vec![]);
        let method = b.method(vec![], ret, name, vec![param], vec![thrown], Some(body));
        let node = Node::from(&method);
        assert_eq!(write(TargetLanguage::CSharp, source, node), "int read(int n) { }");
        assert_eq!(
            write(TargetLanguage::Swift, source, node),
            "func read(_ n: Int32) throws -> Int32 { }"
        );
    }

    #[test]
    fn test_throws_list_is_stepped_over_type_by_type() {
        let source = "void close() throws IOException, /* slow */ TimeoutException { }";
        let mut b = TreeBuilder::new(source);
        let ret = b.primitive_type("void");
        let name = b.simple_name("close");
        let io = b.simple_type("IOException", None);
        let timeout = b.simple_type("TimeoutException", None);
        let open = b.token("{");
        let body = b.block(open, vec![]);
        let method = b.method(vec![], ret, name, vec![], vec![io, timeout], Some(body));
        let node = Node::from(&method);
        assert_eq!(write(TargetLanguage::CSharp, source, node), "void close() { }");
        assert_eq!(write(TargetLanguage::Swift, source, node), "func close() throws { }");
    }

    #[test]
    fn test_swift_constructor_is_init() {
        let source = "public Point(int x) { }";
        let mut b = TreeBuilder::new(source);
        let public = b.modifier(ModifierKeyword::Public);
        let name = b.simple_name("Point");
        let pty = b.primitive_type("int");
        let pname = b.simple_name("x");
        let param = b.parameter(vec![], pty, false, pname);
        let open = b.token("{");
        let body = b.block(open, vec![]);
        let ctor = b.constructor(vec![public], name, vec![param], vec![], body);
        assert_eq!(
            write(TargetLanguage::Swift, source, Node::from(&ctor)),
            "public init(_ x: Int32) { }"
        );
    }

    #[test]
    fn test_interface_with_base_list() {
        let source = "interface Shape extends Named, Sized { }";
        let mut b = TreeBuilder::new(source);
        let keyword = b.word("interface");
        let name = b.simple_name("Shape");
        let named = b.simple_type("Named", None);
        let sized = b.simple_type("Sized", None);
        let decl = b.type_declaration(
            vec![],
            keyword,
            TypeDeclarationKind::Interface,
            name,
            None,
            vec![named, sized],
            vec![],
        );
        let node = Node::TypeDeclaration(&decl);
        assert_eq!(
            write(TargetLanguage::CSharp, source, node),
            "interface Shape : Named, Sized { }"
        );
        assert_eq!(
            write(TargetLanguage::Swift, source, node),
            "protocol Shape : Named, Sized { }"
        );
    }

    #[test]
    fn test_class_extends_and_implements() {
        let source = "class A extends B implements C { }";
        let mut b = TreeBuilder::new(source);
        let keyword = b.word("class");
        let name = b.simple_name("A");
        let base = b.simple_type("B", None);
        let iface = b.simple_type("C", None);
        let decl = b.type_declaration(
            vec![],
            keyword,
            TypeDeclarationKind::Class,
            name,
            Some(base),
            vec![iface],
            vec![],
        );
        assert_eq!(
            write(TargetLanguage::CSharp, source, Node::TypeDeclaration(&decl)),
            "class A : B, C { }"
        );
    }
}
