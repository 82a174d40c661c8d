//! JSON shape of a converted project

use crate::{
    Comment, ProjectReflection, ReflectionData, ReflectionFlags, ReflectionId, ReflectionKind, Type,
};
use dg_span::FileSpan;
use serde::Serialize;

/// Serialisable view of a whole project
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonProject<'a> {
    /// Project name
    pub name: &'a str,
    /// Total number of reflections, root included
    pub reflection_count: usize,
    /// The reflection tree below the root
    pub root: JsonReflection<'a>,
    /// Type literal declarations, referenced by id from `reflection` types
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_literals: Vec<JsonReflection<'a>>,
}

/// Serialisable view of one reflection and everything it owns
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReflection<'a> {
    id: ReflectionId,
    name: &'a str,
    kind: ReflectionKind,
    #[serde(skip_serializing_if = "no_flags")]
    flags: ReflectionFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a Comment>,
    #[serde(skip_serializing_if = "is_empty_slice")]
    sources: &'a [FileSpan],
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    ty: Option<&'a Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty_slice")]
    extended_types: &'a [Type],
    #[serde(skip_serializing_if = "Option::is_none")]
    inherited_from: Option<&'a Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    constraint: Option<&'a Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    return_type: Option<&'a Type>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    type_parameters: Vec<JsonReflection<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    parameters: Vec<JsonReflection<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    signatures: Vec<JsonReflection<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonReflection<'a>>,
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "serde passes skip predicates by reference")]
fn no_flags(flags: &ReflectionFlags) -> bool {
    flags.is_empty()
}

fn is_empty_slice<T>(items: &&[T]) -> bool {
    items.is_empty()
}

impl ProjectReflection {
    /// Borrowing JSON view of the project
    #[must_use]
    pub fn to_json(&self) -> JsonProject<'_> {
        let type_literals = self
            .iter()
            .filter(|(_, reflection)| reflection.kind == ReflectionKind::TypeLiteral)
            .map(|(id, _)| self.json_reflection(id))
            .collect();
        JsonProject {
            name: self.name(),
            reflection_count: self.len(),
            root: self.json_reflection(self.root()),
            type_literals,
        }
    }

    fn json_reflection(&self, id: ReflectionId) -> JsonReflection<'_> {
        let reflection = &self[id];

        let mut json = JsonReflection {
            id,
            name: &reflection.name,
            kind: reflection.kind,
            flags: reflection.flags,
            comment: reflection.comment.as_ref().filter(|comment| !comment.is_empty()),
            sources: &reflection.sources,
            ty: None,
            default_value: None,
            extended_types: &[],
            inherited_from: None,
            constraint: None,
            return_type: None,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            signatures: Vec::new(),
            children: Vec::new(),
        };

        match &reflection.data {
            ReflectionData::Declaration(data) => {
                json.ty = data.ty.as_ref();
                json.default_value = data.default_value.as_deref();
                json.extended_types = &data.extended_types;
                json.inherited_from = data.inherited_from.as_ref();
                json.type_parameters = self.json_nested(&data.type_parameters);
                json.signatures = self.json_nested(&data.signatures);
                json.children = self.json_nested(&data.children);
            }
            ReflectionData::Signature(data) => {
                json.return_type = data.return_type.as_ref();
                json.type_parameters = self.json_nested(&data.type_parameters);
                json.parameters = self.json_nested(&data.parameters);
            }
            ReflectionData::Parameter(data) => {
                json.ty = data.ty.as_ref();
                json.default_value = data.default_value.as_deref();
            }
            ReflectionData::TypeParameter(data) => {
                json.constraint = data.constraint.as_ref();
            }
        }
        json
    }

    fn json_nested(&self, ids: &[ReflectionId]) -> Vec<JsonReflection<'_>> {
        ids.iter().map(|id| self.json_reflection(*id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ProjectReflection, Reflection, ReflectionFlag, ReflectionKind, Type};

    #[test]
    fn test_json_nests_children_and_skips_empty_fields() {
        let mut project = ProjectReflection::new("demo");
        let root = project.root();
        let mut variable = Reflection::new("answer", ReflectionKind::Variable, Some(root));
        variable.set_flag(ReflectionFlag::Exported, true);
        variable.as_declaration_mut().unwrap().ty = Some(Type::intrinsic("number"));
        let variable = project.alloc(variable);
        project.add_child(root, variable);

        let json = serde_json::to_value(project.to_json()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "demo",
                "reflectionCount": 2,
                "root": {
                    "id": 0,
                    "name": "demo",
                    "kind": "Project",
                    "children": [{
                        "id": 1,
                        "name": "answer",
                        "kind": "Variable",
                        "flags": ["exported"],
                        "type": { "type": "intrinsic", "name": "number" }
                    }]
                }
            })
        );
    }
}
