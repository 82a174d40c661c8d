//! The reflection graph of one documented program

use crate::{Reflection, ReflectionId, ReflectionKind};
use la_arena::Arena;

/// Root of the documentation graph
///
/// Owns every reflection in an arena. Reflections refer to each other only
/// through [`ReflectionId`]s, so parents, children and type targets can be
/// linked in any order.
#[derive(Debug, Clone)]
pub struct ProjectReflection {
    reflections: Arena<Reflection>,
    root: ReflectionId,
}

impl ProjectReflection {
    /// Creates a project holding only its root reflection
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut reflections = Arena::new();
        let root = ReflectionId::from_idx(reflections.alloc(Reflection::new(
            name,
            ReflectionKind::Project,
            None,
        )));
        Self { reflections, root }
    }

    /// The project root
    #[must_use]
    pub fn root(&self) -> ReflectionId {
        self.root
    }

    /// Name of the project
    #[must_use]
    pub fn name(&self) -> &str {
        &self[self.root].name
    }

    /// Stores a reflection without linking it to its parent
    pub fn alloc(&mut self, reflection: Reflection) -> ReflectionId {
        ReflectionId::from_idx(self.reflections.alloc(reflection))
    }

    /// Number of reflections, root included
    #[must_use]
    pub fn len(&self) -> usize {
        self.reflections.len()
    }

    /// Whether the project holds only its root
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reflections.len() <= 1
    }

    /// All reflections in allocation order
    pub fn iter(&self) -> impl Iterator<Item = (ReflectionId, &Reflection)> {
        self.reflections
            .iter()
            .map(|(idx, reflection)| (ReflectionId::from_idx(idx), reflection))
    }

    /// All reflections, mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ReflectionId, &mut Reflection)> {
        self.reflections
            .iter_mut()
            .map(|(idx, reflection)| (ReflectionId::from_idx(idx), reflection))
    }

    /// Appends `child` to the children of `parent`
    ///
    /// Returns `false` when `parent` cannot own children.
    pub fn add_child(&mut self, parent: ReflectionId, child: ReflectionId) -> bool {
        match self[parent].as_declaration_mut() {
            Some(data) => {
                data.children.push(child);
                true
            }
            None => false,
        }
    }

    /// Children of a container, empty for anything else
    #[must_use]
    pub fn children(&self, parent: ReflectionId) -> &[ReflectionId] {
        self[parent]
            .as_declaration()
            .map_or(&[][..], |data| data.children.as_slice())
    }

    /// Child of `parent` named `name`
    #[must_use]
    pub fn find_child(&self, parent: ReflectionId, name: &str) -> Option<ReflectionId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|child| self[*child].name == name)
    }

    /// Descends from the root along a dotted path such as `shapes.Point.x`
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<ReflectionId> {
        path.split('.')
            .try_fold(self.root, |parent, name| self.find_child(parent, name))
    }

    /// Dotted name from the first non-project ancestor down to `id`
    #[must_use]
    pub fn full_name(&self, id: ReflectionId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(reflection_id) = current {
            let reflection = &self[reflection_id];
            if reflection.kind == ReflectionKind::Project {
                break;
            }
            names.push(reflection.name.as_str());
            current = reflection.parent;
        }
        names.reverse();
        names.join(".")
    }
}

impl std::ops::Index<ReflectionId> for ProjectReflection {
    type Output = Reflection;

    fn index(&self, id: ReflectionId) -> &Reflection {
        &self.reflections[id.idx()]
    }
}

impl std::ops::IndexMut<ReflectionId> for ProjectReflection {
    fn index_mut(&mut self, id: ReflectionId) -> &mut Reflection {
        &mut self.reflections[id.idx()]
    }
}
