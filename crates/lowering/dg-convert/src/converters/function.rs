use super::NodeConverter;
use crate::context::Context;
use crate::factories::{create_declaration, create_signature};
use crate::Result;
use dg_model::{ReflectionId, ReflectionKind};
use dg_syntax::{SyntaxKind, SyntaxNode};

const KINDS: &[SyntaxKind] = &[SyntaxKind::Function, SyntaxKind::Method];

/// Converts functions and methods
///
/// Every declaration site adds one call signature, so overloads of one
/// symbol end up as several signatures of a single declaration.
pub struct FunctionConverter;

impl NodeConverter for FunctionConverter {
    fn name(&self) -> &'static str {
        "function"
    }

    fn supports(&self) -> &'static [SyntaxKind] {
        KINDS
    }

    fn convert(&self, ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<Option<ReflectionId>> {
        let kind = if node.kind == SyntaxKind::Method {
            ReflectionKind::Method
        } else {
            ReflectionKind::Function
        };
        let Some(reflection) = create_declaration(ctx, node, kind, None)? else {
            return Ok(None);
        };

        ctx.with_scope(reflection, |ctx| {
            create_signature(ctx, node, ReflectionKind::CallSignature, None)
        })?;
        Ok(Some(reflection))
    }
}
