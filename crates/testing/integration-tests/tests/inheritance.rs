//! Members inherited through `extends` clauses

use dg_convert::EntryPointMode;
use dg_model::{ReferenceTarget, ReflectionFlag};
use dg_syntax::{SymbolHandle, SyntaxKind, SyntaxNode, TypeNode};
use expect_test::expect;
use integration_tests::{ProgramBuilder, document};
use dg_span::FileId;

fn method(program: &mut ProgramBuilder, file: FileId, name: &str, parent: SymbolHandle, returns: &str) -> SyntaxNode {
    let (node, _) = program.declaration(file, SyntaxKind::Method, name, Some(parent));
    node.with_type(TypeNode::keyword(returns))
}

fn property(program: &mut ProgramBuilder, file: FileId, name: &str, parent: SymbolHandle) -> SyntaxNode {
    let (node, _) = program.declaration(file, SyntaxKind::Property, name, Some(parent));
    node.with_type(TypeNode::keyword("string"))
}

#[test]
fn test_derived_class_inherits_base_members() {
    let mut program = ProgramBuilder::new("demo");
    let file = program.file("src/animals.ts");

    let (animal, animal_symbol) = program.declaration(file, SyntaxKind::Class, "Animal", None);
    let (dog, dog_symbol) = program.declaration(file, SyntaxKind::Class, "Dog", None);

    let dog_speak = method(&mut program, file, "speak", dog_symbol, "string");
    let fetch = method(&mut program, file, "fetch", dog_symbol, "void");
    let mut dog = dog.with_child(dog_speak).with_child(fetch);
    dog.heritage.push(TypeNode::reference("Animal", Some(animal_symbol)));

    let name = property(&mut program, file, "name", animal_symbol);
    let speak = method(&mut program, file, "speak", animal_symbol, "void");
    let eat = method(&mut program, file, "eat", animal_symbol, "void");
    let animal = animal.with_child(name).with_child(speak).with_child(eat);

    // The derived class comes first, so its base is still unconverted
    program.push(file, dog);
    program.push(file, animal);

    let docs = document(&program, EntryPointMode::File).unwrap();
    let project = &docs.project;

    expect![[r#"
        Project demo
          Class Dog extends Animal
            Method speak
              CallSignature speak(): string
            Method fetch
              CallSignature fetch(): void
            Property name: string [inherited]
            Method eat [inherited]
              CallSignature eat(): void
          Class Animal
            Property name: string
            Method speak
              CallSignature speak(): void
            Method eat
              CallSignature eat(): void
    "#]]
    .assert_eq(&docs.render_tree());

    let animal = project.find_by_path("Animal").unwrap();
    let base_name = project.find_by_path("Animal.name").unwrap();
    let inherited_name = project.find_by_path("Dog.name").unwrap();
    assert_ne!(base_name, inherited_name);
    assert!(project[inherited_name].has_flag(ReflectionFlag::Inherited));
    assert!(!project[base_name].has_flag(ReflectionFlag::Inherited));

    let inherited_from = project[inherited_name]
        .as_declaration()
        .and_then(|data| data.inherited_from.as_ref())
        .and_then(|ty| ty.as_reference())
        .unwrap();
    assert_eq!(inherited_from.name, "Animal.name");
    assert_eq!(inherited_from.target, ReferenceTarget::Internal(base_name));

    let dog = project.find_by_path("Dog").unwrap();
    let extended = &project[dog].as_declaration().unwrap().extended_types;
    assert_eq!(extended.len(), 1);
    assert_eq!(
        extended[0].as_reference().unwrap().target,
        ReferenceTarget::Internal(animal)
    );
}

#[test]
fn test_grandparent_members_reach_the_derived_class() {
    let mut program = ProgramBuilder::new("demo");
    let file = program.file("src/shapes.ts");

    let (shape, shape_symbol) = program.declaration(file, SyntaxKind::Interface, "Shape", None);
    let (polygon, polygon_symbol) = program.declaration(file, SyntaxKind::Interface, "Polygon", None);
    let (square, square_symbol) = program.declaration(file, SyntaxKind::Interface, "Square", None);

    let id = property(&mut program, file, "id", shape_symbol);
    let shape = shape.with_child(id);

    let sides = property(&mut program, file, "sides", polygon_symbol);
    let mut polygon = polygon.with_child(sides);
    polygon.heritage.push(TypeNode::reference("Shape", Some(shape_symbol)));

    let size = property(&mut program, file, "size", square_symbol);
    let mut square = square.with_child(size);
    square.heritage.push(TypeNode::reference("Polygon", Some(polygon_symbol)));

    program.push(file, shape);
    program.push(file, polygon);
    program.push(file, square);

    let docs = document(&program, EntryPointMode::File).unwrap();
    expect![[r#"
        Project demo
          Interface Shape
            Property id: string
          Interface Polygon extends Shape
            Property sides: string
            Property id: string [inherited]
          Interface Square extends Polygon
            Property size: string
            Property sides: string [inherited]
            Property id: string [inherited]
    "#]]
    .assert_eq(&docs.render_tree());
}

#[test]
fn test_inheritance_cycle_terminates() {
    let mut program = ProgramBuilder::new("demo");
    let file = program.file("src/cycle.ts");

    let (a, a_symbol) = program.declaration(file, SyntaxKind::Class, "A", None);
    let (b, b_symbol) = program.declaration(file, SyntaxKind::Class, "B", None);

    let a_member = property(&mut program, file, "a", a_symbol);
    let mut a = a.with_child(a_member);
    a.heritage.push(TypeNode::reference("B", Some(b_symbol)));

    let b_member = property(&mut program, file, "b", b_symbol);
    let mut b = b.with_child(b_member);
    b.heritage.push(TypeNode::reference("A", Some(a_symbol)));

    program.push(file, a);
    program.push(file, b);

    let docs = document(&program, EntryPointMode::File).unwrap();
    expect![[r#"
        Project demo
          Class A extends B
            Property a: string
            Property b: string [inherited]
          Class B extends A
            Property b: string
            Property a: string [inherited]
    "#]]
    .assert_eq(&docs.render_tree());
}

#[test]
fn test_interface_extends_typedef_properties() {
    let mut program = ProgramBuilder::new("demo");
    let file = program.file("src/point.js");

    let (typedef, point_symbol) = program.declaration(file, SyntaxKind::DocTypedefTag, "Point", None);
    let number = || TypeNode::DocExpression {
        inner: Box::new(TypeNode::keyword("number")),
    };
    let (x, _) = program.declaration(file, SyntaxKind::DocPropertyTag, "x", Some(point_symbol));
    let (y, _) = program.declaration(file, SyntaxKind::DocPropertyTag, "y", Some(point_symbol));
    let typedef = typedef.with_type(TypeNode::DocTypeLiteral {
        properties: vec![x.with_type(number()), y.with_type(number())],
    });

    let (point3, point3_symbol) = program.declaration(file, SyntaxKind::Interface, "Point3", None);
    let (z, _) = program.declaration(file, SyntaxKind::Property, "z", Some(point3_symbol));
    let mut point3 = point3.with_child(z.with_type(TypeNode::keyword("number")));
    point3.heritage.push(TypeNode::reference("Point", Some(point_symbol)));

    program.push(file, typedef);
    program.push(file, point3);

    let docs = document(&program, EntryPointMode::File).unwrap();
    let project = &docs.project;

    expect![[r#"
        Project demo
          Interface Point
            Property x: number
            Property y: number
          Interface Point3 extends Point
            Property z: number
            Property x: number [inherited]
            Property y: number [inherited]
    "#]]
    .assert_eq(&docs.render_tree());

    let base_x = project.find_by_path("Point.x").unwrap();
    let inherited_x = project.find_by_path("Point3.x").unwrap();
    assert!(project[inherited_x].has_flag(ReflectionFlag::Inherited));
    let inherited_from = project[inherited_x]
        .as_declaration()
        .and_then(|data| data.inherited_from.as_ref())
        .and_then(|ty| ty.as_reference())
        .unwrap();
    assert_eq!(inherited_from.target, ReferenceTarget::Internal(base_x));
}
