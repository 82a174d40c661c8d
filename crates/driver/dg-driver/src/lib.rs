//! Documentation driver and high-level APIs
//!
//! This crate ties the pipeline together: it loads configuration and program
//! snapshots, runs the conversion pass and then the reference resolution pass,
//! and renders the finished project.

pub mod config;
pub mod snapshot;

pub use config::{CONFIG_FILE_NAME, Config, ModeSetting};
pub use snapshot::ProgramSnapshot;

use anyhow::Result;
use dg_convert::{ConversionError, Converter, ConverterOptions, IdentityRegistry};
use dg_model::{ProjectReflection, render_tree};
use dg_resolve::{ResolutionReport, resolve_references};
use dg_syntax::FrontEnd;
use tracing::{info, warn};

/// A fully converted and resolved program
#[derive(Debug)]
pub struct Documentation {
    /// The frozen reflection graph
    pub project: ProjectReflection,
    /// Identities assigned during conversion
    pub registry: IdentityRegistry,
    /// Outcome of reference resolution
    pub report: ResolutionReport,
}

impl Documentation {
    /// JSON form of the project
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = self.project.to_json();
        let text = if pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };
        Ok(text)
    }

    /// Indented outline of the project
    #[must_use]
    pub fn render_tree(&self) -> String {
        render_tree(&self.project)
    }
}

/// Convert a program and resolve its references
pub fn document_program(
    front_end: &dyn FrontEnd,
    options: ConverterOptions,
) -> Result<Documentation, ConversionError> {
    let mut converter = Converter::new(options);
    document_with(&mut converter, front_end)
}

/// Run both passes with a caller-configured converter (custom converters or
/// event listeners)
pub fn document_with(
    converter: &mut Converter,
    front_end: &dyn FrontEnd,
) -> Result<Documentation, ConversionError> {
    let conversion = converter.convert(front_end)?;
    let mut project = conversion.project;
    let registry = conversion.registry;

    let report = resolve_references(&mut project, &registry);
    if !report.external_names.is_empty() {
        let names: Vec<&str> = report.external_names.iter().map(String::as_str).collect();
        warn!(
            count = report.external,
            names = %names.join(", "),
            "references to undocumented types"
        );
    }
    info!(
        reflections = project.len(),
        internal = report.internal,
        external = report.external,
        "documentation ready"
    );

    Ok(Documentation {
        project,
        registry,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_model::ReferenceTarget;

    const SNAPSHOT: &str = r#"{
        "name": "demo",
        "files": [{
            "path": "src/index.ts",
            "root": {
                "id": 0, "kind": "source_file", "span": { "file": 0 },
                "children": [
                    {
                        "id": 1, "kind": "type_alias", "span": { "file": 0 },
                        "name": "Id", "symbol": 1, "flags": { "exported": true },
                        "type_annotation": { "kind": "keyword", "name": "string" }
                    },
                    {
                        "id": 2, "kind": "variable", "span": { "file": 0 },
                        "name": "current", "symbol": 2,
                        "type_annotation": {
                            "kind": "union",
                            "types": [
                                { "kind": "reference", "name": "Id", "symbol": 1 },
                                { "kind": "reference", "name": "Missing", "symbol": 9 }
                            ]
                        }
                    }
                ]
            }
        }],
        "symbols": [
            { "id": 1, "name": "Id", "file": "src/index.ts" },
            { "id": 2, "name": "current", "file": "src/index.ts" },
            { "id": 9, "name": "Missing" }
        ]
    }"#;

    #[test]
    fn test_pipeline_resolves_and_renders() {
        let snapshot = ProgramSnapshot::from_json(SNAPSHOT).unwrap();
        let options = Config::default().converter_options(snapshot.name());
        let docs = document_program(&snapshot, options).unwrap();

        assert_eq!(docs.report.internal, 1);
        assert_eq!(docs.report.external, 1);
        assert!(docs.report.external_names.contains("Missing"));

        let alias = docs.project.find_by_path("src/index.Id").unwrap();
        let variable = docs.project.find_by_path("src/index.current").unwrap();
        let ty = docs.project[variable].as_declaration().unwrap().ty.clone().unwrap();
        let dg_model::Type::Union { types } = &ty else {
            panic!("expected a union, got {ty:?}");
        };
        assert_eq!(
            types[0].as_reference().unwrap().target,
            ReferenceTarget::Internal(alias)
        );

        assert_eq!(
            docs.render_tree(),
            "Project demo\n  Module src/index\n    TypeAlias Id: string [exported]\n    Variable current: Id | Missing\n"
        );
        let json = docs.to_json(false).unwrap();
        assert!(json.starts_with(r#"{"name":"demo""#));
    }
}
