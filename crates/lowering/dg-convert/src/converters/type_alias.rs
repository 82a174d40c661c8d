use super::NodeConverter;
use crate::context::Context;
use crate::factories::{create_declaration, create_type_parameter};
use crate::types::convert_type;
use crate::Result;
use dg_model::{ReflectionId, ReflectionKind};
use dg_syntax::{SyntaxKind, SyntaxNode};

const KINDS: &[SyntaxKind] = &[SyntaxKind::TypeAlias];

/// Converts `type Name<T> = ...` declarations
pub struct TypeAliasConverter;

impl NodeConverter for TypeAliasConverter {
    fn name(&self) -> &'static str {
        "type_alias"
    }

    fn supports(&self) -> &'static [SyntaxKind] {
        KINDS
    }

    fn convert(&self, ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<Option<ReflectionId>> {
        let Some(alias) = create_declaration(ctx, node, ReflectionKind::TypeAlias, None)? else {
            return Ok(None);
        };

        let checked = match node.type_annotation {
            Some(_) => None,
            None => ctx.front_end().type_at_location(node),
        };
        let ty = ctx.with_scope(alias, |ctx| {
            for type_parameter in node.children_of_kind(&SyntaxKind::TypeParameter) {
                create_type_parameter(ctx, type_parameter)?;
            }
            convert_type(ctx, node.file(), node.type_annotation.as_ref(), checked.as_ref())
        })?;

        if let Some(data) = ctx.project[alias].as_declaration_mut() {
            data.ty = ty;
        }
        Ok(Some(alias))
    }
}
