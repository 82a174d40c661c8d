//! Programs loaded from snapshot files on disk, with and without a config

use dg_driver::{CONFIG_FILE_NAME, Config, ProgramSnapshot, document_program};
use dg_model::ReferenceTarget;
use expect_test::expect;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn test_fixture_with_default_config() {
    let snapshot = ProgramSnapshot::from_file(&fixture("shapes.json")).unwrap();
    assert_eq!(snapshot.name(), Some("shapes"));
    assert_eq!(snapshot.file_count(), 2);

    let options = Config::default().converter_options(snapshot.name());
    let docs = document_program(&snapshot, options).unwrap();

    expect![[r#"
        Project shapes
          Module src/shapes
            Interface Point [exported]
              Property x: number
              Property y: number
            Function norm [exported]
              CallSignature norm(p: Point): number
          Module src/main
            Variable origin: Point [exported]
            Variable unit: number = 1
            Variable library: Point
    "#]]
    .assert_eq(&docs.render_tree());

    let project = &docs.project;
    let point = project.find_by_path("src/shapes.Point").unwrap();
    assert_eq!(
        project[point].comment.as_ref().map(|comment| comment.summary.as_str()),
        Some("A point in the plane.")
    );

    // relative and ambient imports both land on the exported interface
    for variable in ["src/main.origin", "src/main.library"] {
        let id = project.find_by_path(variable).unwrap();
        let ty = project[id].as_declaration().unwrap().ty.as_ref().unwrap();
        assert_eq!(ty.as_reference().unwrap().target, ReferenceTarget::Internal(point));
    }
    assert_eq!(docs.report.internal, 3);
    assert_eq!(docs.report.external, 0);
}

#[test]
fn test_config_file_next_to_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("shapes.json");
    std::fs::copy(fixture("shapes.json"), &snapshot_path).unwrap();
    std::fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        r#"
[conversion]
name = "geometry"
mode = "file"
exclude_not_exported = true
"#,
    )
    .unwrap();

    let snapshot = ProgramSnapshot::from_file(&snapshot_path).unwrap();
    let config = Config::find_in_dir(temp_dir.path()).unwrap();
    let docs = document_program(&snapshot, config.converter_options(snapshot.name())).unwrap();

    expect![[r#"
        Project geometry
          Interface Point [exported]
            Property x: number
            Property y: number
          Function norm [exported]
            CallSignature norm(p: Point): number
          Variable origin: Point [exported]
    "#]]
    .assert_eq(&docs.render_tree());
    assert!(docs.project.find_by_path("unit").is_none());
}

#[test]
fn test_missing_snapshot_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");
    let error = ProgramSnapshot::from_file(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to read snapshot file"));
}
