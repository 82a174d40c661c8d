use super::NodeConverter;
use crate::context::Context;
use crate::factories::create_declaration;
use crate::types::convert_type;
use crate::Result;
use dg_model::{ReflectionId, ReflectionKind};
use dg_syntax::{SyntaxKind, SyntaxNode, TypeNode};

const KINDS: &[SyntaxKind] = &[SyntaxKind::DocTypedefTag];

/// Converts documentation `@typedef` tags
///
/// A `{Type}` expression becomes a type alias of that type. A typedef
/// described by `@property` tags becomes an interface (or, when the tag is
/// the base being merged, augments the current scope) whose members are the
/// property tags in declaration order. Any other shape is skipped.
pub struct DocTypedefConverter;

impl NodeConverter for DocTypedefConverter {
    fn name(&self) -> &'static str {
        "doc_typedef"
    }

    fn supports(&self) -> &'static [SyntaxKind] {
        KINDS
    }

    fn convert(&self, ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<Option<ReflectionId>> {
        match &node.type_annotation {
            Some(TypeNode::DocExpression { inner }) => {
                let Some(alias) = create_declaration(ctx, node, ReflectionKind::TypeAlias, None)? else {
                    return Ok(None);
                };
                let checked = ctx.front_end().type_at_location(node);
                let ty = ctx.with_scope(alias, |ctx| {
                    convert_type(ctx, node.file(), Some(inner), checked.as_ref())
                })?;
                if let Some(data) = ctx.project[alias].as_declaration_mut() {
                    data.ty = ty;
                }
                Ok(Some(alias))
            }
            Some(TypeNode::DocTypeLiteral { properties }) => {
                let reflection = if ctx.is_inherit_target(node) {
                    ctx.scope()
                } else {
                    match create_declaration(ctx, node, ReflectionKind::Interface, None)? {
                        Some(reflection) => reflection,
                        None => return Ok(None),
                    }
                };
                ctx.with_scope(reflection, |ctx| {
                    for property in properties {
                        ctx.convert_node(property)?;
                    }
                    Ok(())
                })?;
                Ok(Some(reflection))
            }
            _ => Ok(None),
        }
    }
}
