//! Conversion of the individual declaration kinds and entry point modes

use dg_convert::{ConverterOptions, EntryPointMode};
use dg_driver::document_program;
use dg_model::{ReferenceTarget, ReflectionKind};
use dg_syntax::{SyntaxKind, TypeNode};
use expect_test::expect;
use integration_tests::{ProgramBuilder, document};

#[test]
fn test_namespace_members() {
    let mut program = ProgramBuilder::new("demo");
    let file = program.file("src/geometry.ts");

    let (mut namespace, geometry) = program.declaration(file, SyntaxKind::Namespace, "Geometry", None);
    namespace.flags.exported = true;

    let (point, point_symbol) = program.declaration(file, SyntaxKind::Class, "Point", Some(geometry));
    let mut constructor = program.node(file, SyntaxKind::Constructor);
    let x = program.parameter(file, "x", Some(TypeNode::keyword("number")));
    let y = program.parameter(file, "y", Some(TypeNode::keyword("number")));
    constructor = constructor.with_child(x).with_child(y);
    let (mut x_property, _) = program.declaration(file, SyntaxKind::Property, "x", Some(point_symbol));
    x_property.flags.readonly = true;
    let point = point
        .with_child(constructor)
        .with_child(x_property.with_type(TypeNode::keyword("number")));

    let (color, color_symbol) = program.declaration(file, SyntaxKind::Enum, "Color", Some(geometry));
    let (mut red, _) = program.declaration(file, SyntaxKind::EnumMember, "Red", Some(color_symbol));
    red.initializer = Some("\"red\"".to_string());
    let color = color.with_child(red);

    let (pair, pair_symbol) = program.declaration(file, SyntaxKind::TypeAlias, "Pair", Some(geometry));
    let (t, t_symbol) = program.declaration(file, SyntaxKind::TypeParameter, "T", Some(pair_symbol));
    let pair = pair.with_child(t).with_type(TypeNode::Array {
        element: Box::new(TypeNode::reference("T", Some(t_symbol))),
    });

    let (options, _) = program.declaration(file, SyntaxKind::TypeAlias, "Options", Some(geometry));
    let call = program.node(file, SyntaxKind::CallSignature).with_type(TypeNode::keyword("void"));
    let mut verbose = program
        .node(file, SyntaxKind::Property)
        .with_name("verbose")
        .with_type(TypeNode::keyword("boolean"));
    verbose.flags.optional = true;
    let options = options.with_type(TypeNode::TypeLiteral {
        members: vec![call, verbose],
    });

    let namespace = namespace
        .with_child(point)
        .with_child(color)
        .with_child(pair)
        .with_child(options);
    program.push(file, namespace);

    let docs = document(&program, EntryPointMode::File).unwrap();
    let project = &docs.project;

    expect![[r#"
        Project demo
          Namespace Geometry [exported]
            Class Point
              Constructor constructor
                ConstructorSignature new Point(x: number, y: number): Point
              Property x: number [readonly]
            Enum Color
              EnumMember Red = "red"
            TypeAlias Pair<T>: T[]
            TypeAlias Options: {...}
              TypeLiteral __type
                CallSignature __call(): void
                Property verbose?: boolean
    "#]]
    .assert_eq(&docs.render_tree());

    let point = project.find_by_path("Geometry.Point").unwrap();
    let constructor = project.find_by_path("Geometry.Point.constructor").unwrap();
    let signature = project[constructor].as_declaration().unwrap().signatures[0];
    let returns = project[signature].as_signature().unwrap().return_type.as_ref().unwrap();
    assert_eq!(returns.as_reference().unwrap().target, ReferenceTarget::Internal(point));

    let pair = project.find_by_path("Geometry.Pair").unwrap();
    let t = project[pair].type_parameters()[0];
    assert_eq!(project[t].kind, ReflectionKind::TypeParameter);
    let dg_model::Type::Array { element } = project[pair].as_declaration().unwrap().ty.as_ref().unwrap() else {
        panic!("expected an array type");
    };
    assert_eq!(element.as_reference().unwrap().target, ReferenceTarget::Internal(t));

    let options = project.find_by_path("Geometry.Options").unwrap();
    assert!(project.children(options).is_empty());
    assert_eq!(project.full_name(options), "Geometry.Options");
}

fn two_file_program() -> ProgramBuilder {
    let mut program = ProgramBuilder::new("demo");
    let index = program.file("src/index.ts");
    let util = program.file("src/util/index.d.ts");

    let (mut api, api_symbol) = program.declaration(index, SyntaxKind::Class, "Api", None);
    api.flags.exported = true;
    let (call, _) = program.declaration(index, SyntaxKind::Method, "call", Some(api_symbol));
    let api = api.with_child(call.with_type(TypeNode::keyword("void")));
    program.push(index, api);

    let (helper, _) = program.declaration(index, SyntaxKind::Function, "helper", None);
    program.push(index, helper.with_type(TypeNode::keyword("void")));

    let (mut version, _) = program.declaration(util, SyntaxKind::Variable, "version", None);
    version.flags.exported = true;
    version.initializer = Some("\"1.0\"".to_string());
    program.push(util, version.with_type(TypeNode::keyword("string")));
    program
}

#[test]
fn test_modules_mode_creates_one_module_per_file() {
    let docs = document(&two_file_program(), EntryPointMode::Modules).unwrap();
    expect![[r#"
        Project demo
          Module src/index
            Class Api [exported]
              Method call
                CallSignature call(): void
            Function helper
              CallSignature helper(): void
          Module src/util/index
            Variable version: string = "1.0" [exported]
    "#]]
    .assert_eq(&docs.render_tree());
}

#[test]
fn test_file_mode_flattens_into_project() {
    let docs = document(&two_file_program(), EntryPointMode::File).unwrap();
    let kinds: Vec<_> = docs
        .project
        .children(docs.project.root())
        .iter()
        .map(|id| docs.project[*id].kind)
        .collect();
    assert_eq!(
        kinds,
        [ReflectionKind::Class, ReflectionKind::Function, ReflectionKind::Variable]
    );
}

#[test]
fn test_exclude_not_exported_skips_top_level_only() {
    let program = two_file_program();
    let snapshot = program.build().unwrap();
    let options = ConverterOptions {
        project_name: "demo".to_string(),
        mode: EntryPointMode::Modules,
        exclude_not_exported: true,
    };
    let docs = document_program(&snapshot, options).unwrap();

    expect![[r#"
        Project demo
          Module src/index
            Class Api [exported]
              Method call
                CallSignature call(): void
          Module src/util/index
            Variable version: string = "1.0" [exported]
    "#]]
    .assert_eq(&docs.render_tree());
    assert!(docs.project.find_by_path("src/index.helper").is_none());
}

#[test]
fn test_json_output_shape() {
    let docs = document(&two_file_program(), EntryPointMode::File).unwrap();
    let json: serde_json::Value = serde_json::from_str(&docs.to_json(true).unwrap()).unwrap();

    assert_eq!(json["name"], "demo");
    assert_eq!(json["reflectionCount"], docs.project.len());
    let children = json["root"]["children"].as_array().unwrap();
    let names: Vec<_> = children.iter().map(|child| child["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Api", "helper", "version"]);
    assert_eq!(children[0]["kind"], "Class");
    assert_eq!(children[0]["flags"], serde_json::json!(["exported"]));
    assert_eq!(children[2]["defaultValue"], "\"1.0\"");
}
