//! Conversion of syntactic and checked types into documentation types

use crate::context::Context;
use crate::factories::{create_import_reference_type, create_reference_type};
use crate::Result;
use dg_model::{ReferenceType, Reflection, ReflectionId, ReflectionKind, Type};
use dg_span::FileId;
use dg_syntax::{CheckedType, SyntaxNode, TypeNode};
use tracing::trace;

/// Name given to anonymous object types
pub const TYPE_LITERAL_NAME: &str = "__type";

/// Converts a type, preferring the syntax node and falling back to the
/// checker's answer
///
/// `file` is the file the type node appears in; it anchors module
/// resolution for `import("...")` types.
pub fn convert_type(
    ctx: &mut Context<'_>,
    file: FileId,
    node: Option<&TypeNode>,
    checked: Option<&CheckedType>,
) -> Result<Option<Type>> {
    match node {
        Some(node) => convert_type_node(ctx, file, node, checked).map(Some),
        None => Ok(checked.map(|checked| convert_checked_type(ctx, checked))),
    }
}

fn convert_type_node(
    ctx: &mut Context<'_>,
    file: FileId,
    node: &TypeNode,
    checked: Option<&CheckedType>,
) -> Result<Type> {
    let ty = match node {
        TypeNode::Keyword { name } => Type::intrinsic(name.clone()),
        TypeNode::Reference {
            name,
            symbol,
            type_arguments,
        } => {
            let mut reference = match symbol {
                Some(symbol) => create_reference_type(ctx, *symbol, false),
                None => ReferenceType::new(name.clone(), None),
            };
            for argument in type_arguments {
                reference
                    .type_arguments
                    .push(convert_type_node(ctx, file, argument, None)?);
            }
            Type::Reference(reference)
        }
        TypeNode::Array { element } => Type::Array {
            element: Box::new(convert_type_node(ctx, file, element, None)?),
        },
        TypeNode::Union { types } => Type::Union {
            types: convert_all(ctx, file, types)?,
        },
        TypeNode::Intersection { types } => Type::Intersection {
            types: convert_all(ctx, file, types)?,
        },
        TypeNode::Literal { value } => Type::Literal {
            value: value.clone(),
        },
        TypeNode::TypeLiteral { members } => Type::Reflection {
            declaration: convert_type_literal(ctx, members)?,
        },
        TypeNode::DocTypeLiteral { properties } => Type::Reflection {
            declaration: convert_type_literal(ctx, properties)?,
        },
        TypeNode::Import {
            specifier,
            qualifier,
            symbol,
        } => Type::Reference(create_import_reference_type(
            ctx,
            file,
            specifier,
            qualifier.as_deref(),
            *symbol,
        )?),
        TypeNode::DocExpression { inner }
        | TypeNode::DocOptional { inner }
        | TypeNode::DocNullable { inner }
        | TypeNode::DocNonNullable { inner } => convert_type_node(ctx, file, inner, checked)?,
        TypeNode::Unknown { text } => match checked {
            Some(checked) => convert_checked_type(ctx, checked),
            None => Type::Unknown { name: text.clone() },
        },
    };
    Ok(ty)
}

fn convert_all(ctx: &mut Context<'_>, file: FileId, types: &[TypeNode]) -> Result<Vec<Type>> {
    types
        .iter()
        .map(|ty| convert_type_node(ctx, file, ty, None))
        .collect()
}

/// Creates the declaration documenting an anonymous object type
///
/// The declaration is owned by the current scope but is not one of its
/// children; it is only reachable through the [`Type::Reflection`] pointing
/// at it.
fn convert_type_literal(ctx: &mut Context<'_>, members: &[SyntaxNode]) -> Result<ReflectionId> {
    let scope = ctx.scope();
    let declaration = ctx.project.alloc(Reflection::new(
        TYPE_LITERAL_NAME,
        ReflectionKind::TypeLiteral,
        Some(scope),
    ));
    trace!(?declaration, members = members.len(), "type literal");

    ctx.with_scope(declaration, |ctx| {
        for member in members {
            ctx.convert_node(member)?;
        }
        Ok(())
    })?;
    Ok(declaration)
}

/// Converts a type computed by the checker
pub fn convert_checked_type(ctx: &mut Context<'_>, checked: &CheckedType) -> Type {
    match checked {
        CheckedType::Intrinsic { name } => Type::intrinsic(name.clone()),
        CheckedType::Reference {
            name,
            symbol,
            type_arguments,
        } => {
            let mut reference = ReferenceType::new(
                name.clone(),
                symbol.map(|symbol| ctx.registry.id_for(symbol)),
            );
            reference.type_arguments = type_arguments
                .iter()
                .map(|argument| convert_checked_type(ctx, argument))
                .collect();
            Type::Reference(reference)
        }
        CheckedType::Array { element } => Type::Array {
            element: Box::new(convert_checked_type(ctx, element)),
        },
        CheckedType::Union { types } => Type::Union {
            types: types
                .iter()
                .map(|ty| convert_checked_type(ctx, ty))
                .collect(),
        },
        CheckedType::Literal { value } => Type::Literal {
            value: value.clone(),
        },
        CheckedType::Unknown { text } => Type::Unknown { name: text.clone() },
    }
}
