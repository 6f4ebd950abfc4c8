//! Compilation units, packages and imports.
//!
//! A file is written in two passes. The type declaration is translated
//! first, into a redirect buffer, because only then is it known which
//! namespaces the body needs. The header (leading comments, the import
//! block) is written afterwards, and the buffered body is flushed behind it.

use crate::context::TranslationContext;
use crate::error::{TranslateError, TranslateResult};
use javelin_ast::{CompilationUnit, ImportDeclaration, Name, Node, PackageDeclaration, TypeDeclaration};
use javelin_core::text::TextPos;
use javelin_diagnostics::messages;
use javelin_options::TargetLanguage;
use tracing::debug;

pub fn write_compilation_unit(
    ctx: &mut TranslationContext<'_, '_>,
    unit: &CompilationUnit,
) -> TranslateResult {
    let ty = match unit.types.as_slice() {
        [ty] => ty,
        [] => {
            return Err(TranslateError::unsupported(
                &messages::COMPILATION_UNIT_DECLARES_NO_TYPE,
                &[],
                Node::CompilationUnit(unit),
            ))
        }
        [_, extra, ..] => {
            return Err(TranslateError::unsupported(
                &messages::ONLY_ONE_TYPE_DECLARATION_IS_SUPPORTED,
                &[],
                Node::TypeDeclaration(extra),
            ))
        }
    };
    let limit = ty.range.pos;

    // Comments before the package or first import stay at the top of the file.
    ctx.copy_space_and_comments_until(limit)?;

    let body = {
        let mut guard = ctx.scoped_redirect();
        write_body(&mut guard, unit.package.as_ref(), ty)?;
        guard.finish()
    };

    match &unit.package {
        Some(package) => {
            ctx.set_position(package.range.end)?;
            ctx.skip_rest_of_line()?;
        }
        None => {
            ctx.set_position(0)?;
            ctx.skip_space_and_comments_until(limit)?;
        }
    }
    ctx.copy_space_and_comments_until(limit)?;

    write_imports(ctx, unit, limit)?;

    ctx.copy_space_and_comments_until(limit)?;
    body.flush(ctx)?;
    ctx.set_position_to_end();
    Ok(())
}

/// The namespace block (when there is one) around the single type.
fn write_body(
    ctx: &mut TranslationContext<'_, '_>,
    package: Option<&PackageDeclaration>,
    ty: &TypeDeclaration,
) -> TranslateResult {
    let indentation = ctx.additional_indentation();
    let wrapped = match package {
        Some(package) if opens_namespace(ctx.target()) => {
            ctx.write_node_at(Node::PackageDeclaration(package))?;
            true
        }
        _ => false,
    };

    ctx.set_position(ty.range.pos)?;
    ctx.write_node(Node::TypeDeclaration(ty))?;
    ctx.copy_space_and_comments()?;

    if wrapped {
        ctx.set_additional_indentation(indentation);
        ctx.ensure_line_start()?;
        ctx.writeln("}")?;
    }
    Ok(())
}

fn opens_namespace(target: TargetLanguage) -> bool {
    target == TargetLanguage::CSharp
}

/// `package a.b;` opens `namespace a.b {` and indents what follows. The
/// compilation unit closes the block after the type declaration.
pub fn write_package_declaration(
    ctx: &mut TranslationContext<'_, '_>,
    package: &PackageDeclaration,
) -> TranslateResult {
    if !opens_namespace(ctx.target()) {
        return ctx.skip_range(package.range);
    }
    ctx.match_and_write("package", "namespace")?;
    ctx.copy_space_and_comments()?;
    ctx.write_node(Node::from(&package.name))?;
    ctx.skip_space_and_comments()?;
    ctx.match_token(";")?;
    ctx.writeln(" {")?;
    let width = ctx.session().indent_width();
    ctx.increment_additional_indentation(width);
    Ok(())
}

// ============================================================================
// Imports
// ============================================================================

fn write_imports(
    ctx: &mut TranslationContext<'_, '_>,
    unit: &CompilationUnit,
    limit: TextPos,
) -> TranslateResult {
    for import in &unit.imports {
        ctx.copy_space_and_comments_until(limit)?;
        ctx.write_node(Node::ImportDeclaration(import))?;
    }

    let session = ctx.session();
    let pending: Vec<String> = session
        .extra_imports()
        .iter()
        .map(String::as_str)
        .chain(ctx.required_imports())
        .map(str::to_string)
        .collect();

    let mut wrote_any = false;
    for namespace in &pending {
        if !ctx.record_written_import(namespace) {
            continue;
        }
        debug!(namespace = namespace.as_str(), "adding import");
        ctx.ensure_line_start()?;
        ctx.write(&import_directive(ctx.target(), namespace))?;
        wrote_any = true;
    }
    if wrote_any && !ctx.at_line_break() {
        ctx.writeln("")?;
    }
    Ok(())
}

fn import_directive(target: TargetLanguage, namespace: &str) -> String {
    match target {
        TargetLanguage::CSharp => format!("using {};", namespace),
        TargetLanguage::Swift => format!("import {}", namespace),
        TargetLanguage::Cpp => format!("using namespace {};", namespace),
    }
}

pub fn write_import_declaration(
    ctx: &mut TranslationContext<'_, '_>,
    import: &ImportDeclaration,
) -> TranslateResult {
    let node = Node::ImportDeclaration(import);
    if import.is_static {
        return Err(TranslateError::unsupported(
            &messages::STATIC_IMPORTS_ARE_NOT_SUPPORTED,
            &[],
            node,
        ));
    }
    let name = import.name.fully_qualified_name();
    let qualifier = match &import.name {
        Name::Qualified(qualified) => qualified.qualifier.as_ref(),
        Name::Simple(_) => {
            return Err(TranslateError::unsupported(
                &messages::IMPORT_0_IS_NOT_FULLY_QUALIFIED,
                &[name.as_str()],
                node,
            ))
        }
    };

    if ctx.session().is_mapped_annotation(&name) {
        debug!(import = name.as_str(), "dropping annotation import");
        return skip_import(ctx, import);
    }
    // Swift imports whole modules; the Java package has no counterpart.
    if ctx.target() == TargetLanguage::Swift {
        return skip_import(ctx, import);
    }

    if import.is_on_demand {
        if !ctx.record_written_import(&name) {
            return skip_import(ctx, import);
        }
        ctx.match_and_write("import", "using")?;
        ctx.copy_space_and_comments()?;
        ctx.write_node(Node::from(&import.name))?;
        ctx.skip_space_and_comments()?;
        ctx.match_token(".")?;
        ctx.skip_space_and_comments()?;
        ctx.match_token("*")?;
        return write_import_end(ctx);
    }

    if import.is_generic_import() {
        let package = qualifier.fully_qualified_name();
        let namespace = ctx.session().generic_namespace(&package);
        if !ctx.record_written_import(namespace) {
            debug!(import = name.as_str(), namespace, "namespace already imported");
            return skip_import(ctx, import);
        }
        ctx.match_and_write("import", "using")?;
        ctx.copy_space_and_comments()?;
        ctx.replace_range(import.name.range(), namespace)?;
        return write_import_end(ctx);
    }

    if !ctx.record_written_import(&name) {
        return skip_import(ctx, import);
    }
    ctx.match_and_write("import", "using")?;
    ctx.copy_space_and_comments()?;
    let alias = &import.name.last_identifier().identifier;
    ctx.write(&format!("{} = ", alias))?;
    ctx.write_node(Node::from(&import.name))?;
    write_import_end(ctx)
}

fn write_import_end(ctx: &mut TranslationContext<'_, '_>) -> TranslateResult {
    ctx.copy_space_and_comments()?;
    ctx.match_and_copy(";")
}

/// Drop an import together with the rest of its line.
fn skip_import(ctx: &mut TranslationContext<'_, '_>, import: &ImportDeclaration) -> TranslateResult {
    ctx.set_position(import.range.end)?;
    ctx.skip_rest_of_line()?;
    Ok(())
}
