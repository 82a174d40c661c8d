use crate::context::Context;
use crate::error::ConversionError;
use crate::events::EventKind;
use crate::types::convert_type;
use crate::Result;
use dg_model::{Comment, Reflection, ReflectionFlag, ReflectionId, ReflectionKind};
use dg_syntax::doc::find_param_tag;
use dg_syntax::{DocTag, SyntaxNode};

/// Name given to destructured parameters
pub const NAMED_PARAMETERS: &str = "__namedParameters";

/// Creates a parameter of the current signature
///
/// Without an annotation the type of the `@param` tag with the same name is
/// used, looked up in the parameter's own tags first and then in
/// `host_tags`, the tags of the signature's declaration. An optional tag form
/// or a bracketed tag name makes the parameter optional. Destructuring patterns are named [`NAMED_PARAMETERS`] and typed
/// with the checker's type for the whole pattern.
pub fn create_parameter(
    ctx: &mut Context<'_>,
    node: &SyntaxNode,
    host_tags: &[DocTag],
) -> Result<ReflectionId> {
    let signature = ctx.scope();
    if ctx.project[signature].as_signature().is_none() {
        return Err(ConversionError::ScopeMismatch {
            factory: "parameter",
            expected: "signature",
            found: ctx.scope_kind(),
        });
    }

    let mut parameter = Reflection::new(node.name_or_empty(), ReflectionKind::Parameter, Some(signature));
    parameter.sources.push(node.span);
    let id = ctx.project.alloc(parameter);
    ctx.register(node, id);

    ctx.with_scope(id, |ctx| {
        let front_end = ctx.front_end();
        let mut optional = node.flags.optional;

        let ty = if node.flags.binding_pattern {
            ctx.project[id].name = NAMED_PARAMETERS.to_string();
            let checked = front_end.type_at_location(node);
            convert_type(ctx, node.file(), None, checked.as_ref())?
        } else {
            let name = node.name_or_empty();
            let tag = find_param_tag(front_end.doc_tags(node), name)
                .or_else(|| find_param_tag(host_tags, name));
            if let Some(tag) = tag.filter(|tag| !tag.text.trim().is_empty()) {
                ctx.project[id].comment = Some(Comment {
                    summary: tag.text.trim().to_string(),
                    tags: Vec::new(),
                });
            }

            let mut annotation = node.type_annotation.as_ref();
            if annotation.is_none() {
                if let Some((expression, tag)) =
                    tag.and_then(|tag| tag.type_expression.as_ref().map(|expression| (expression, tag)))
                {
                    let (inner, optional_form) = expression.unwrap_doc_modifiers();
                    optional |= optional_form || tag.bracketed;
                    annotation = Some(inner);
                }
            }

            let checked = front_end.type_at_location(node);
            convert_type(ctx, node.file(), annotation, checked.as_ref())?
        };

        let reflection = &mut ctx.project[id];
        if let Some(data) = reflection.as_parameter_mut() {
            data.ty = ty;
            data.default_value.clone_from(&node.initializer);
        }
        reflection.set_flag(ReflectionFlag::Optional, optional);
        reflection.set_flag(ReflectionFlag::Rest, node.flags.rest);
        reflection.set_flag(ReflectionFlag::DefaultValue, node.initializer.is_some());

        if let Some(data) = ctx.project[signature].as_signature_mut() {
            data.parameters.push(id);
        }
        Ok(())
    })?;

    ctx.trigger(EventKind::CreateParameter, id, node);
    Ok(id)
}
