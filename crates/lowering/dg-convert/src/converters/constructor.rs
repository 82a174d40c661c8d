use super::NodeConverter;
use crate::context::Context;
use crate::factories::{create_declaration, create_signature};
use crate::Result;
use dg_model::{ReferenceType, ReflectionId, ReflectionKind, Type};
use dg_syntax::{SyntaxKind, SyntaxNode};

const KINDS: &[SyntaxKind] = &[SyntaxKind::Constructor];

/// Converts class constructors
///
/// Each declaration site adds a construct signature `new Class(...)` whose
/// return type refers back to the class.
pub struct ConstructorConverter;

impl NodeConverter for ConstructorConverter {
    fn name(&self) -> &'static str {
        "constructor"
    }

    fn supports(&self) -> &'static [SyntaxKind] {
        KINDS
    }

    fn convert(&self, ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<Option<ReflectionId>> {
        let class = ctx.scope();
        let class_name = ctx.project[class].name.clone();
        let class_type = Type::Reference(ReferenceType::new(
            class_name.clone(),
            ctx.registry.symbol_of(class),
        ));

        let Some(constructor) =
            create_declaration(ctx, node, ReflectionKind::Constructor, Some("constructor"))?
        else {
            return Ok(None);
        };

        let signature = ctx.with_scope(constructor, |ctx| {
            create_signature(
                ctx,
                node,
                ReflectionKind::ConstructorSignature,
                Some(&format!("new {class_name}")),
            )
        })?;
        if let Some(data) = ctx.project[signature].as_signature_mut() {
            data.return_type.get_or_insert(class_type);
        }
        Ok(Some(constructor))
    }
}
