use super::{create_comment, create_parameter, create_type_parameter};
use crate::context::Context;
use crate::error::ConversionError;
use crate::events::EventKind;
use crate::types::convert_type;
use crate::Result;
use dg_model::{Reflection, ReflectionId, ReflectionKind};
use dg_syntax::{SyntaxKind, SyntaxNode};

/// Creates a call or construct signature of the current declaration
///
/// Type parameters and parameters are converted in declaration order, with
/// the declaration's own `@param` tags available to the parameters. The
/// return type comes from the annotation, else from a `@returns` tag.
pub fn create_signature(
    ctx: &mut Context<'_>,
    node: &SyntaxNode,
    kind: ReflectionKind,
    name: Option<&str>,
) -> Result<ReflectionId> {
    let container = ctx.scope();
    if !ctx.project[container].is_container() {
        return Err(ConversionError::ScopeMismatch {
            factory: "signature",
            expected: "declaration",
            found: ctx.scope_kind(),
        });
    }

    let name = name.map_or_else(|| ctx.project[container].name.clone(), str::to_string);
    let mut signature = Reflection::new(name, kind, Some(container));
    signature.comment = create_comment(node.comment.as_ref());
    signature.sources.push(node.span);
    let id = ctx.project.alloc(signature);
    if let Some(owner) = ctx.project[container].as_declaration_mut() {
        owner.signatures.push(id);
    }

    ctx.with_scope(id, |ctx| {
        for type_parameter in node.children_of_kind(&SyntaxKind::TypeParameter) {
            create_type_parameter(ctx, type_parameter)?;
        }
        let host_tags = ctx.front_end().doc_tags(node);
        for parameter in node.children_of_kind(&SyntaxKind::Parameter) {
            create_parameter(ctx, parameter, host_tags)?;
        }

        let annotation = node.type_annotation.as_ref().or_else(|| {
            node.comment
                .as_ref()
                .and_then(|comment| comment.returns_tag())
                .and_then(|tag| tag.type_expression.as_ref())
        });
        let return_type = convert_type(ctx, node.file(), annotation, None)?;
        if let Some(data) = ctx.project[id].as_signature_mut() {
            data.return_type = return_type;
        }
        Ok(())
    })?;

    ctx.trigger(EventKind::CreateSignature, id, node);
    Ok(id)
}
