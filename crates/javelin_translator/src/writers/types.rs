//! Type references.

use crate::context::TranslationContext;
use crate::error::TranslateResult;
use crate::tables::types::{primitive_type, well_known_type};
use javelin_ast::{ArrayType, Node, PrimitiveType, SimpleType};
use javelin_options::TargetLanguage;

pub fn write_primitive_type(
    ctx: &mut TranslationContext<'_, '_>,
    ty: &PrimitiveType,
) -> TranslateResult {
    ctx.match_and_write(ty.primitive.keyword(), primitive_type(ctx.target(), ty.primitive))
}

pub fn write_simple_type(ctx: &mut TranslationContext<'_, '_>, ty: &SimpleType) -> TranslateResult {
    if let Some(binding) = &ty.binding {
        if let Some(namespace) = ctx.session().implicit_import(&binding.qualified_name) {
            ctx.require_import(namespace);
        }
        if let Some(builtin) = well_known_type(ctx.target(), &binding.qualified_name) {
            return ctx.replace_range(ty.range, builtin);
        }
    }
    ctx.write_node(Node::from(&ty.name))
}

/// `int[][]`; Swift spells it `[[Int32]]`.
pub fn write_array_type(ctx: &mut TranslationContext<'_, '_>, ty: &ArrayType) -> TranslateResult {
    let element = Node::from(ty.element_type.as_ref());
    if ctx.target() == TargetLanguage::Swift {
        for _ in 0..ty.dimensions {
            ctx.write("[")?;
        }
        ctx.write_node(element)?;
        for _ in 0..ty.dimensions {
            ctx.skip_space_and_comments()?;
            ctx.match_token("[")?;
            ctx.skip_space_and_comments()?;
            ctx.match_and_copy("]")?;
        }
        return Ok(());
    }

    ctx.write_node(element)?;
    for _ in 0..ty.dimensions {
        ctx.copy_space_and_comments()?;
        ctx.match_and_copy("[")?;
        ctx.copy_space_and_comments()?;
        ctx.match_and_copy("]")?;
    }
    Ok(())
}
