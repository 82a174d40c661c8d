//! Creation events and their listeners

use dg_model::{ProjectReflection, ReflectionId};
use dg_syntax::SyntaxNode;
use rustc_hash::FxHashMap;
use std::fmt;

/// Named creation events fired by the factories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A declaration reflection was created
    CreateDeclaration,
    /// A signature reflection was created
    CreateSignature,
    /// A parameter reflection was created
    CreateParameter,
    /// A type parameter reflection was created
    CreateTypeParameter,
}

impl fmt::Display for EventKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateDeclaration => "createDeclaration",
            Self::CreateSignature => "createSignature",
            Self::CreateParameter => "createParameter",
            Self::CreateTypeParameter => "createTypeParameter",
        };
        formatter.write_str(name)
    }
}

/// Payload handed to a listener
pub struct EventArgs<'a> {
    /// Event being dispatched
    pub kind: EventKind,
    /// The project, so the listener can mutate the new reflection in place
    pub project: &'a mut ProjectReflection,
    /// The new reflection
    pub reflection: ReflectionId,
    /// Syntax node it was created from
    pub node: &'a SyntaxNode,
}

/// Boxed event listener
pub type Listener = Box<dyn FnMut(EventArgs<'_>)>;

/// Synchronous event bus
///
/// Listeners run on the converting thread, in registration order, before the
/// factory that fired the event returns.
#[derive(Default)]
pub struct EventBus {
    listeners: FxHashMap<EventKind, Vec<Listener>>,
}

impl EventBus {
    /// Creates a bus without listeners
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for `kind`
    pub fn on(&mut self, kind: EventKind, listener: impl FnMut(EventArgs<'_>) + 'static) {
        self.listeners.entry(kind).or_default().push(Box::new(listener));
    }

    /// Number of listeners registered for `kind`
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Runs every listener of `kind`
    pub fn dispatch(
        &mut self,
        kind: EventKind,
        project: &mut ProjectReflection,
        reflection: ReflectionId,
        node: &SyntaxNode,
    ) {
        let Some(listeners) = self.listeners.get_mut(&kind) else {
            return;
        };
        for listener in listeners {
            listener(EventArgs {
                kind,
                project: &mut *project,
                reflection,
                node,
            });
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<_> = self
            .listeners
            .iter()
            .map(|(kind, listeners)| (kind.to_string(), listeners.len()))
            .collect();
        counts.sort();
        formatter.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_model::{Reflection, ReflectionKind};
    use dg_span::{FileId, FileSpan};
    use dg_syntax::{NodeId, SyntaxKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_in_registration_order() {
        let mut project = ProjectReflection::new("demo");
        let root = project.root();
        let id = project.alloc(Reflection::new("f", ReflectionKind::Function, Some(root)));
        let node = SyntaxNode::new(NodeId(0), SyntaxKind::Function, FileSpan::file_start(FileId(0)));

        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        for label in ["first", "second"] {
            let log = Rc::clone(&log);
            bus.on(EventKind::CreateDeclaration, move |args| {
                log.borrow_mut().push(label);
                args.project[args.reflection].name.push('!');
            });
        }
        bus.on(EventKind::CreateSignature, |_| panic!("wrong event"));

        bus.dispatch(EventKind::CreateDeclaration, &mut project, id, &node);

        assert_eq!(*log.borrow(), ["first", "second"]);
        assert_eq!(project[id].name, "f!!");
        assert_eq!(bus.listener_count(EventKind::CreateDeclaration), 2);
        assert_eq!(bus.listener_count(EventKind::CreateParameter), 0);
    }
}
