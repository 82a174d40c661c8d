use super::NodeConverter;
use crate::context::Context;
use crate::factories::create_declaration;
use crate::types::convert_type;
use crate::Result;
use dg_model::{ReflectionFlag, ReflectionId, ReflectionKind};
use dg_syntax::{SyntaxKind, SyntaxNode};

const KINDS: &[SyntaxKind] = &[
    SyntaxKind::Property,
    SyntaxKind::Variable,
    SyntaxKind::EnumMember,
    SyntaxKind::DocPropertyTag,
];

/// Converts properties, variables, enum members and `@property` tags
///
/// The type comes from the annotation (documentation wrappers stripped, an
/// optional wrapper marking the member optional), else from the checker.
pub struct VariableConverter;

impl NodeConverter for VariableConverter {
    fn name(&self) -> &'static str {
        "variable"
    }

    fn supports(&self) -> &'static [SyntaxKind] {
        KINDS
    }

    fn convert(&self, ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<Option<ReflectionId>> {
        let kind = match node.kind {
            SyntaxKind::Variable => ReflectionKind::Variable,
            SyntaxKind::EnumMember => ReflectionKind::EnumMember,
            _ => ReflectionKind::Property,
        };
        let Some(reflection) = create_declaration(ctx, node, kind, None)? else {
            return Ok(None);
        };
        if ctx.project[reflection]
            .as_declaration()
            .is_some_and(|data| data.ty.is_some())
        {
            return Ok(Some(reflection));
        }

        let (annotation, optional_form) = match &node.type_annotation {
            Some(annotation) => {
                let (inner, optional) = annotation.unwrap_doc_modifiers();
                (Some(inner), optional)
            }
            None => (None, false),
        };
        let checked = match annotation {
            Some(_) => None,
            None => ctx.front_end().type_at_location(node),
        };

        let ty = ctx.with_scope(reflection, |ctx| {
            convert_type(ctx, node.file(), annotation, checked.as_ref())
        })?;

        let declaration = &mut ctx.project[reflection];
        if optional_form {
            declaration.set_flag(ReflectionFlag::Optional, true);
        }
        if let Some(data) = declaration.as_declaration_mut() {
            data.ty = ty;
            if data.default_value.is_none() {
                data.default_value.clone_from(&node.initializer);
            }
        }
        Ok(Some(reflection))
    }
}
