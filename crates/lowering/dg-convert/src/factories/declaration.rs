use super::{create_comment, create_reference_type};
use crate::context::Context;
use crate::error::ConversionError;
use crate::events::EventKind;
use crate::Result;
use dg_model::{Reflection, ReflectionFlag, ReflectionId, ReflectionKind, Type};
use dg_syntax::SyntaxNode;
use tracing::debug;

/// Creates, or merges into, the declaration documenting `node`
///
/// The current scope must be a container. A node whose symbol already has a
/// reflection merges into it: the new declaration site is recorded, a missing
/// comment is filled in and no second creation event fires. Nodes without a
/// symbol merge by name with a sibling of the same staticness.
///
/// In inherit mode members of the base become fresh `Inherited` copies that
/// are never registered. A base member whose name the derived container
/// already uses is skipped.
///
/// Returns `None` when the node is skipped.
pub fn create_declaration(
    ctx: &mut Context<'_>,
    node: &SyntaxNode,
    kind: ReflectionKind,
    name: Option<&str>,
) -> Result<Option<ReflectionId>> {
    let container = ctx.scope();
    if !ctx.project[container].is_container() {
        return Err(ConversionError::ScopeMismatch {
            factory: "declaration",
            expected: "container",
            found: ctx.scope_kind(),
        });
    }

    let container_kind = ctx.scope_kind();
    if ctx.options().exclude_not_exported
        && kind != ReflectionKind::Module
        && matches!(container_kind, ReflectionKind::Project | ReflectionKind::Module)
        && !node.flags.exported
    {
        debug!(name = node.name_or_empty(), "skipping declaration that is not exported");
        return Ok(None);
    }

    let name = name.unwrap_or_else(|| node.name_or_empty()).to_string();
    let inherited = ctx.is_inheriting_into_scope();

    if let Some(existing) = find_existing(ctx, node, container, &name) {
        if inherited && !inherits_same_member(ctx, existing, node) {
            debug!(%name, "base member shadowed by derived member");
            return Ok(None);
        }
        merge(ctx, existing, node);
        return Ok(Some(existing));
    }

    let mut reflection = Reflection::new(name, kind, Some(container));
    reflection.set_flag(ReflectionFlag::Exported, node.flags.exported);
    reflection.set_flag(ReflectionFlag::Static, node.flags.is_static);
    reflection.set_flag(ReflectionFlag::Readonly, node.flags.readonly);
    reflection.set_flag(ReflectionFlag::Optional, node.flags.optional);
    reflection.comment = create_comment(node.comment.as_ref());
    reflection.sources.push(node.span);

    if inherited {
        reflection.set_flag(ReflectionFlag::Inherited, true);
        if let (Some(symbol), Some(data)) = (node.symbol, reflection.as_declaration_mut()) {
            data.inherited_from = Some(Type::Reference(create_reference_type(ctx, symbol, true)));
        }
    }

    let id = ctx.project.alloc(reflection);
    ctx.project.add_child(container, id);
    ctx.register(node, id);
    debug!(
        name = %ctx.project[id].name,
        kind = %kind,
        ?id,
        inherited,
        "created declaration"
    );

    ctx.trigger(EventKind::CreateDeclaration, id, node);
    Ok(Some(id))
}

fn find_existing(
    ctx: &Context<'_>,
    node: &SyntaxNode,
    container: ReflectionId,
    name: &str,
) -> Option<ReflectionId> {
    if !ctx.is_inherit() {
        if let Some(symbol) = node.symbol {
            return ctx.existing_reflection(symbol);
        }
    } else if !ctx.is_inheriting_into_scope() {
        return None;
    }

    ctx.project.children(container).iter().copied().find(|child| {
        let child = &ctx.project[*child];
        child.name == name && child.has_flag(ReflectionFlag::Static) == node.flags.is_static
    })
}

/// Whether `existing` is an inherited copy of the same base member as `node`
fn inherits_same_member(ctx: &Context<'_>, existing: ReflectionId, node: &SyntaxNode) -> bool {
    let Some(symbol) = node.symbol else {
        return false;
    };
    let Some(symbol_id) = ctx.registry.symbol_id(symbol) else {
        return false;
    };
    let reflection = &ctx.project[existing];
    reflection.has_flag(ReflectionFlag::Inherited)
        && reflection
            .as_declaration()
            .and_then(|data| data.inherited_from.as_ref())
            .and_then(Type::as_reference)
            .is_some_and(|reference| reference.symbol_id == Some(symbol_id))
}

fn merge(ctx: &mut Context<'_>, existing: ReflectionId, node: &SyntaxNode) {
    let reflection = &mut ctx.project[existing];
    if !reflection.sources.contains(&node.span) {
        reflection.sources.push(node.span);
    }
    if reflection.comment.is_none() {
        reflection.comment = create_comment(node.comment.as_ref());
    }
    if node.flags.exported {
        reflection.set_flag(ReflectionFlag::Exported, true);
    }
    debug!(name = %reflection.name, id = ?existing, "merged declaration");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::ConverterRegistry;
    use crate::events::EventBus;
    use crate::options::ConverterOptions;
    use crate::test_support::{node, MockFrontEnd};
    use dg_model::ProjectReflection;
    use dg_syntax::{SymbolHandle, SyntaxKind};
    use std::cell::Cell;
    use std::rc::Rc;

    fn context(front_end: &MockFrontEnd, events: EventBus, options: ConverterOptions) -> Context<'_> {
        Context::new(
            front_end,
            ProjectReflection::new("demo"),
            events,
            Rc::new(ConverterRegistry::with_defaults()),
            options,
        )
    }

    #[test]
    fn test_same_symbol_merges_into_one_reflection() {
        let front_end = MockFrontEnd::default();
        let created = Rc::new(Cell::new(0));
        let mut events = EventBus::new();
        let counter = Rc::clone(&created);
        events.on(EventKind::CreateDeclaration, move |_| counter.set(counter.get() + 1));
        let mut ctx = context(&front_end, events, ConverterOptions::default());

        let mut first = node(1, SyntaxKind::Interface).with_name("Foo").with_symbol(SymbolHandle(9));
        first.span.span = dg_span::Span::new(0, 10);
        let mut second = node(2, SyntaxKind::Interface).with_name("Foo").with_symbol(SymbolHandle(9));
        second.span.span = dg_span::Span::new(20, 30);

        let a = create_declaration(&mut ctx, &first, ReflectionKind::Interface, None).unwrap();
        let b = create_declaration(&mut ctx, &second, ReflectionKind::Interface, None).unwrap();

        assert_eq!(a, b);
        let id = a.unwrap();
        assert_eq!(ctx.project.children(ctx.project.root()), [id]);
        assert_eq!(ctx.project[id].sources.len(), 2);
        assert_eq!(ctx.registry.reflection_for_symbol(SymbolHandle(9)), Some(id));
        assert_eq!(created.get(), 1);
    }

    #[test]
    fn test_declaration_requires_container_scope() {
        let front_end = MockFrontEnd::default();
        let mut ctx = context(&front_end, EventBus::new(), ConverterOptions::default());
        let root = ctx.scope();
        let signature = ctx
            .project
            .alloc(Reflection::new("f", ReflectionKind::CallSignature, Some(root)));

        let error = ctx
            .with_scope(signature, |ctx| {
                create_declaration(ctx, &node(1, SyntaxKind::Variable).with_name("x"), ReflectionKind::Variable, None)
            })
            .unwrap_err();
        assert_eq!(
            error,
            ConversionError::ScopeMismatch {
                factory: "declaration",
                expected: "container",
                found: ReflectionKind::CallSignature,
            }
        );
        assert_eq!(ctx.scope(), root);
    }

    #[test]
    fn test_exclude_not_exported_skips_top_level_only() {
        let front_end = MockFrontEnd::default();
        let options = ConverterOptions {
            exclude_not_exported: true,
            ..ConverterOptions::default()
        };
        let mut ctx = context(&front_end, EventBus::new(), options);

        let hidden = node(1, SyntaxKind::Class).with_name("Hidden");
        assert_eq!(create_declaration(&mut ctx, &hidden, ReflectionKind::Class, None).unwrap(), None);

        let mut shown = node(2, SyntaxKind::Class).with_name("Shown");
        shown.flags.exported = true;
        let class = create_declaration(&mut ctx, &shown, ReflectionKind::Class, None)
            .unwrap()
            .unwrap();

        let member = ctx
            .with_scope(class, |ctx| {
                create_declaration(ctx, &node(3, SyntaxKind::Property).with_name("x"), ReflectionKind::Property, None)
            })
            .unwrap();
        assert!(member.is_some());
    }
}
