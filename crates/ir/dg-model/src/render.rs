//! Indented text rendering of a project, used by the CLI and snapshot tests

use crate::{ProjectReflection, Reflection, ReflectionData, ReflectionFlag, ReflectionId, Type};
use std::fmt;

/// Renders the reflection tree below the project root
///
/// ```text
/// Project demo
///   Module shapes
///     Interface Point [exported]
///       Property x: number
///     Function area [exported]
///       CallSignature area(p: Point): number
/// ```
#[must_use]
pub fn render_tree(project: &ProjectReflection) -> String {
    RenderTree { project }.to_string()
}

struct RenderTree<'a> {
    project: &'a ProjectReflection,
}

impl fmt::Display for RenderTree<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node(formatter, self.project.root(), 0)
    }
}

impl RenderTree<'_> {
    fn node(&self, f: &mut fmt::Formatter<'_>, id: ReflectionId, depth: usize) -> fmt::Result {
        let reflection = &self.project[id];
        let indent = "  ".repeat(depth);
        write!(f, "{indent}{} {}", reflection.kind, reflection.name)?;

        match &reflection.data {
            ReflectionData::Declaration(data) => {
                self.type_parameters(f, &data.type_parameters)?;
                if reflection.has_flag(ReflectionFlag::Optional) {
                    write!(f, "?")?;
                }
                if let Some(ty) = &data.ty {
                    write!(f, ": {ty}")?;
                }
                if let Some(default_value) = &data.default_value {
                    write!(f, " = {default_value}")?;
                }
                if !data.extended_types.is_empty() {
                    let extended: Vec<_> = data.extended_types.iter().map(Type::to_string).collect();
                    write!(f, " extends {}", extended.join(", "))?;
                }
                write_flags(f, reflection)?;
                writeln!(f)?;

                if let Some(Type::Reflection { declaration }) = &data.ty {
                    self.node(f, *declaration, depth + 1)?;
                }
                for signature in &data.signatures {
                    self.node(f, *signature, depth + 1)?;
                }
                for child in &data.children {
                    self.node(f, *child, depth + 1)?;
                }
                Ok(())
            }
            ReflectionData::Signature(data) => {
                self.type_parameters(f, &data.type_parameters)?;
                write!(f, "(")?;
                for (index, parameter) in data.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    self.parameter(f, *parameter)?;
                }
                write!(f, ")")?;
                if let Some(return_type) = &data.return_type {
                    write!(f, ": {return_type}")?;
                }
                write_flags(f, reflection)?;
                writeln!(f)
            }
            ReflectionData::Parameter(_) | ReflectionData::TypeParameter(_) => writeln!(f),
        }
    }

    fn type_parameters(&self, f: &mut fmt::Formatter<'_>, ids: &[ReflectionId]) -> fmt::Result {
        if ids.is_empty() {
            return Ok(());
        }
        write!(f, "<")?;
        for (index, id) in ids.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            let reflection = &self.project[*id];
            write!(f, "{}", reflection.name)?;
            if let Some(constraint) = reflection.as_type_parameter().and_then(|data| data.constraint.as_ref()) {
                write!(f, " extends {constraint}")?;
            }
        }
        write!(f, ">")
    }

    fn parameter(&self, f: &mut fmt::Formatter<'_>, id: ReflectionId) -> fmt::Result {
        let reflection = &self.project[id];
        if reflection.has_flag(ReflectionFlag::Rest) {
            write!(f, "...")?;
        }
        write!(f, "{}", reflection.name)?;
        if reflection.has_flag(ReflectionFlag::Optional) {
            write!(f, "?")?;
        }
        if let Some(data) = reflection.as_parameter() {
            if let Some(ty) = &data.ty {
                write!(f, ": {ty}")?;
            }
            if let Some(default_value) = &data.default_value {
                write!(f, " = {default_value}")?;
            }
        }
        Ok(())
    }
}

/// Flags not already visible in the rendered syntax
fn write_flags(f: &mut fmt::Formatter<'_>, reflection: &Reflection) -> fmt::Result {
    let shown: Vec<_> = reflection
        .flags
        .iter()
        .filter(|flag| {
            !matches!(
                flag,
                ReflectionFlag::Optional | ReflectionFlag::Rest | ReflectionFlag::DefaultValue
            )
        })
        .map(ReflectionFlag::name)
        .collect();
    if shown.is_empty() {
        return Ok(());
    }
    write!(f, " [{}]", shown.join(", "))
}
