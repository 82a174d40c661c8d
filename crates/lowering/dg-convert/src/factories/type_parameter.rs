use crate::context::Context;
use crate::error::ConversionError;
use crate::events::EventKind;
use crate::types::convert_type;
use crate::Result;
use dg_model::{Reflection, ReflectionData, ReflectionId, ReflectionKind};
use dg_syntax::SyntaxNode;

/// Creates a type parameter of the current declaration or signature
///
/// The node's annotation is the `extends` constraint.
pub fn create_type_parameter(ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<ReflectionId> {
    let owner = ctx.scope();
    if !matches!(
        ctx.project[owner].data,
        ReflectionData::Declaration(_) | ReflectionData::Signature(_)
    ) {
        return Err(ConversionError::ScopeMismatch {
            factory: "type parameter",
            expected: "declaration or signature",
            found: ctx.scope_kind(),
        });
    }

    let mut reflection = Reflection::new(node.name_or_empty(), ReflectionKind::TypeParameter, Some(owner));
    reflection.sources.push(node.span);
    let id = ctx.project.alloc(reflection);
    ctx.register(node, id);

    let constraint = ctx.with_scope(id, |ctx| {
        convert_type(ctx, node.file(), node.type_annotation.as_ref(), None)
    })?;
    if let Some(data) = ctx.project[id].as_type_parameter_mut() {
        data.constraint = constraint;
    }

    match &mut ctx.project[owner].data {
        ReflectionData::Declaration(data) => data.type_parameters.push(id),
        ReflectionData::Signature(data) => data.type_parameters.push(id),
        ReflectionData::Parameter(_) | ReflectionData::TypeParameter(_) => {}
    }

    ctx.trigger(EventKind::CreateTypeParameter, id, node);
    Ok(id)
}
