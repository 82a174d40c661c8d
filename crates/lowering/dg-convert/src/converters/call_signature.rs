use super::NodeConverter;
use crate::context::Context;
use crate::factories::create_signature;
use crate::Result;
use dg_model::{ReflectionId, ReflectionKind};
use dg_syntax::{SyntaxKind, SyntaxNode};

const KINDS: &[SyntaxKind] = &[SyntaxKind::CallSignature];

/// Name of call signatures declared inside interfaces and type literals
pub const CALL_SIGNATURE_NAME: &str = "__call";

/// Converts call signatures of interfaces and type literals
pub struct CallSignatureConverter;

impl NodeConverter for CallSignatureConverter {
    fn name(&self) -> &'static str {
        "call_signature"
    }

    fn supports(&self) -> &'static [SyntaxKind] {
        KINDS
    }

    fn convert(&self, ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<Option<ReflectionId>> {
        create_signature(ctx, node, ReflectionKind::CallSignature, Some(CALL_SIGNATURE_NAME)).map(Some)
    }
}
