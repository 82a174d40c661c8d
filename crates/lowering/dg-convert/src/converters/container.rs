use super::NodeConverter;
use crate::context::Context;
use crate::factories::{create_declaration, create_type_parameter};
use crate::types::convert_type;
use crate::Result;
use dg_model::{ReflectionId, ReflectionKind};
use dg_syntax::{SyntaxKind, SyntaxNode, TypeNode};
use tracing::debug;

const KINDS: &[SyntaxKind] = &[
    SyntaxKind::Namespace,
    SyntaxKind::Class,
    SyntaxKind::Interface,
    SyntaxKind::Enum,
];

/// Converts namespaces, classes, interfaces and enums
///
/// Own members are converted first, then the members of every base type
/// named in a heritage clause are merged in through inherit mode. When the
/// node itself is the base being merged, its members go into the current
/// scope instead of a new declaration.
pub struct ContainerConverter;

impl NodeConverter for ContainerConverter {
    fn name(&self) -> &'static str {
        "container"
    }

    fn supports(&self) -> &'static [SyntaxKind] {
        KINDS
    }

    fn convert(&self, ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<Option<ReflectionId>> {
        let kind = match node.kind {
            SyntaxKind::Namespace => ReflectionKind::Namespace,
            SyntaxKind::Class => ReflectionKind::Class,
            SyntaxKind::Interface => ReflectionKind::Interface,
            SyntaxKind::Enum => ReflectionKind::Enum,
            _ => return Ok(None),
        };

        let merging_base = ctx.is_inherit_target(node);
        let reflection = if merging_base {
            ctx.scope()
        } else {
            match create_declaration(ctx, node, kind, None)? {
                Some(reflection) => reflection,
                None => return Ok(None),
            }
        };

        ctx.with_scope(reflection, |ctx| {
            if !merging_base {
                for type_parameter in node.children_of_kind(&SyntaxKind::TypeParameter) {
                    create_type_parameter(ctx, type_parameter)?;
                }
            }

            for child in node.children.iter().filter(|child| child.kind != SyntaxKind::TypeParameter) {
                ctx.convert_node(child)?;
            }

            for heritage in &node.heritage {
                if !merging_base {
                    if let Some(ty) = convert_type(ctx, node.file(), Some(heritage), None)? {
                        // merged declarations repeat the clause at every site
                        if let Some(data) = ctx.project[reflection].as_declaration_mut() {
                            if !data.extended_types.contains(&ty) {
                                data.extended_types.push(ty);
                            }
                        }
                    }
                }
                inherit_from(ctx, heritage)?;
            }
            Ok(())
        })?;

        Ok(Some(reflection))
    }
}

/// Merges the members of the base named by `heritage` into the current scope
fn inherit_from(ctx: &mut Context<'_>, heritage: &TypeNode) -> Result<()> {
    let TypeNode::Reference {
        symbol: Some(base), ..
    } = heritage
    else {
        return Ok(());
    };

    let front_end = ctx.front_end();
    for declaration in front_end.symbol_declarations(*base) {
        if !is_inheritable(declaration) {
            continue;
        }
        debug!(base = declaration.name_or_empty(), "inheriting members");
        ctx.inherit(declaration, |ctx| ctx.convert_node(declaration))?;
    }
    Ok(())
}

/// Classes, interfaces and `@typedef` property bags can be extended
fn is_inheritable(declaration: &SyntaxNode) -> bool {
    match declaration.kind {
        SyntaxKind::Class | SyntaxKind::Interface => true,
        SyntaxKind::DocTypedefTag => {
            matches!(declaration.type_annotation, Some(TypeNode::DocTypeLiteral { .. }))
        }
        _ => false,
    }
}
