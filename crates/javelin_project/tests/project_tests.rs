//! Loading, translating and emitting a small batch of files on disk.

use javelin_ast::builder::TreeBuilder;
use javelin_ast::*;
use javelin_options::{TargetLanguage, TranslationSession};
use javelin_project::{Project, SourceUnit};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

const POINT: &str = "class Point {\n    int x;\n}\n";

fn point_unit() -> CompilationUnit {
    let mut b = TreeBuilder::new(POINT);
    let class_kw = b.word("class");
    let name = b.simple_name("Point");
    let int = b.primitive_type("int");
    let x = b.simple_name("x");
    let fragment = b.fragment(x, None);
    let field = b.field(vec![], int, vec![fragment]);
    let ty = b.type_declaration(vec![], class_kw, TypeDeclarationKind::Class, name, None, vec![], vec![field]);
    b.compilation_unit(None, vec![], vec![ty])
}

const BROKEN: &str = "import static java.lang.Math.max;\nclass Broken {\n}\n";

fn broken_unit() -> CompilationUnit {
    let mut b = TreeBuilder::new(BROKEN);
    let import_kw = b.word("import");
    let name = b.name("java.lang.Math.max");
    let import = b.import(import_kw, name, true, false, None);
    let class_kw = b.word("class");
    let class_name = b.simple_name("Broken");
    let ty = b.type_declaration(vec![], class_kw, TypeDeclarationKind::Class, class_name, None, vec![], vec![]);
    b.compilation_unit(None, vec![import], vec![ty])
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("javelin-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_pair(dir: &PathBuf, file: &str, source: &str, unit: &CompilationUnit) -> PathBuf {
    let path = dir.join(file);
    fs::write(&path, source).unwrap();
    fs::write(SourceUnit::tree_path(&path), serde_json::to_string(unit).unwrap()).unwrap();
    path
}

#[test]
fn test_load_translate_and_emit() {
    let dir = scratch_dir("emit");
    let path = write_pair(&dir, "Point.java", POINT, &point_unit());

    let mut project = Project::new(Arc::new(TranslationSession::for_target(TargetLanguage::Swift)));
    project.load_file(&path).unwrap();
    assert_eq!(project.units().len(), 1);
    assert_eq!(project.units()[0].tree, point_unit());

    let output = project.translate_all();
    assert!(!output.has_errors());
    let out_dir = dir.join("out");
    let written = project.emit(&output, Some(&out_dir)).unwrap();
    assert_eq!(written, vec![out_dir.join("Point.swift")]);
    assert_eq!(
        fs::read_to_string(&written[0]).unwrap(),
        "class Point {\n    var x: Int32\n}\n"
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_failed_file_does_not_stop_others() {
    let mut project = Project::new(Arc::new(TranslationSession::for_target(TargetLanguage::CSharp)));
    project.add_source("Broken.java", BROKEN, broken_unit());
    project.add_source("Point.java", POINT, point_unit());

    let output = project.translate_all();
    assert!(output.has_errors());
    assert_eq!(output.files.len(), 1);
    assert_eq!(output.file("Point.java").map(|f| f.output.as_str()), Some(POINT));

    let diagnostics = output.diagnostics.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, 3002);
    assert_eq!(diagnostics[0].file.as_deref(), Some("Broken.java"));
}

#[test]
fn test_malformed_tree_is_reported() {
    let dir = scratch_dir("malformed");
    let path = dir.join("Bad.java");
    fs::write(&path, POINT).unwrap();
    fs::write(SourceUnit::tree_path(&path), "{\"types\": 5}").unwrap();

    let mut project = Project::new(Arc::new(TranslationSession::default()));
    let err = project.load_file(&path).unwrap_err();
    assert!(matches!(err, javelin_project::ProjectError::Tree { .. }));

    let _ = fs::remove_dir_all(&dir);
}
