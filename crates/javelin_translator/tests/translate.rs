//! Whole-file translation through the public `Translator` API.
//!
//! Each fixture pairs a Java source with the tree a front end would produce
//! for it, built with `TreeBuilder` so node ranges match the text exactly.

use indexmap::IndexMap;
use javelin_ast::builder::TreeBuilder;
use javelin_ast::*;
use javelin_options::{TargetLanguage, TranslationSession, TranslatorOptions};
use javelin_translator::{TranslateError, Translator};
use std::sync::Arc;

fn translator(options: TranslatorOptions) -> Translator {
    Translator::new(Arc::new(TranslationSession::new(&options).unwrap()))
}

fn for_target(target: TargetLanguage) -> Translator {
    Translator::new(Arc::new(TranslationSession::for_target(target)))
}

// ============================================================================
// Fixtures
// ============================================================================

const REGISTRY: &str = "// Header
package com.acme;

import java.util.List;
import java.util.Map;

public class Registry {
    private int count;
}
";

fn registry_unit() -> CompilationUnit {
    let mut b = TreeBuilder::new(REGISTRY);
    let package_kw = b.word("package");
    let package_name = b.name("com.acme");
    let package = b.package(package_kw, package_name);
    let list = b.single_import("java.util.List", Some(TypeBinding::new("java.util.List").generic()));
    let map = b.single_import("java.util.Map", Some(TypeBinding::new("java.util.Map").generic()));

    let public = b.modifier(ModifierKeyword::Public);
    let class_kw = b.word("class");
    let name = b.simple_name("Registry");
    let private = b.modifier(ModifierKeyword::Private);
    let int = b.primitive_type("int");
    let count = b.simple_name("count");
    let fragment = b.fragment(count, None);
    let field = b.field(vec![private], int, vec![fragment]);
    let ty = b.type_declaration(
        vec![public],
        class_kw,
        TypeDeclarationKind::Class,
        name,
        None,
        vec![],
        vec![field],
    );
    b.compilation_unit(Some(package), vec![list, map], vec![ty])
}

const BITS: &str = "public class Bits {
    public static int shift(int x, int y) {
        return x >>> /* bits */ y;
    }
}
";

fn bits_unit() -> CompilationUnit {
    let mut b = TreeBuilder::new(BITS);
    let public = b.modifier(ModifierKeyword::Public);
    let class_kw = b.word("class");
    let name = b.simple_name("Bits");

    let m_public = b.modifier(ModifierKeyword::Public);
    let m_static = b.modifier(ModifierKeyword::Static);
    let ret = b.primitive_type("int");
    let method_name = b.simple_name("shift");
    let x_type = b.primitive_type("int");
    let x_name = b.simple_name("x");
    let x = b.parameter(vec![], x_type, false, x_name);
    let y_type = b.primitive_type("int");
    let y_name = b.simple_name("y");
    let y = b.parameter(vec![], y_type, false, y_name);

    let open = b.token("{");
    let return_kw = b.word("return");
    let left = b.name_expr("x");
    let right = b.name_expr("y");
    let shift = b.infix(left, InfixOperator::RightShiftUnsigned, right);
    let statement = b.return_statement(return_kw, Some(shift));
    let body = b.block(open, vec![statement]);
    let method = b.method(vec![m_public, m_static], ret, method_name, vec![x, y], vec![], Some(body));

    let ty = b.type_declaration(
        vec![public],
        class_kw,
        TypeDeclarationKind::Class,
        name,
        None,
        vec![],
        vec![method],
    );
    b.compilation_unit(None, vec![], vec![ty])
}

/// `class <name> {\n}` declarations, one per name, in order.
fn empty_classes(b: &mut TreeBuilder<'_>, names: &[&str]) -> Vec<TypeDeclaration> {
    names
        .iter()
        .map(|name| {
            let class_kw = b.word("class");
            let name = b.simple_name(name);
            b.type_declaration(vec![], class_kw, TypeDeclarationKind::Class, name, None, vec![], vec![])
        })
        .collect()
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_csharp_wraps_package_and_merges_generic_imports() {
    let mut namespaces = IndexMap::new();
    namespaces.insert("java.util".to_string(), "System.Collections.Generic".to_string());
    let translator = translator(TranslatorOptions {
        generic_namespaces: Some(namespaces),
        ..Default::default()
    });

    let out = translator
        .translate_to_string("Registry.java", REGISTRY, &registry_unit())
        .unwrap();
    assert_eq!(
        out,
        "// Header

using System.Collections.Generic;

namespace com.acme {
    public class Registry {
        private int count;
    }
}
"
    );
}

#[test]
fn test_generic_imports_default_to_their_package() {
    let out = for_target(TargetLanguage::CSharp)
        .translate_to_string("Registry.java", REGISTRY, &registry_unit())
        .unwrap();
    assert!(out.contains("using java.util;\n"));
    assert_eq!(out.matches("using ").count(), 1);
}

#[test]
fn test_csharp_keeps_source_that_needs_no_rewrite() {
    let out = for_target(TargetLanguage::CSharp)
        .translate_to_string("Bits.java", BITS, &bits_unit())
        .unwrap();
    assert_eq!(out, BITS);
}

#[test]
fn test_swift_method_with_unsigned_shift() {
    let out = for_target(TargetLanguage::Swift)
        .translate_to_string("Bits.java", BITS, &bits_unit())
        .unwrap();
    assert_eq!(
        out,
        "public class Bits {
    public static func shift(_ x: Int32, _ y: Int32) -> Int32 {
        return rightShiftUnsigned(x, /* bits */ y)
    }
}
"
    );
}

#[test]
fn test_leading_comment_without_package_is_written_once() {
    let source = "/* A. */\n\nclass A {\n}\n";
    let mut b = TreeBuilder::new(source);
    let types = empty_classes(&mut b, &["A"]);
    assert_eq!(types[0].range.pos, 10);
    let unit = b.compilation_unit(None, vec![], types);

    for target in [TargetLanguage::CSharp, TargetLanguage::Swift] {
        let out = for_target(target).translate_to_string("A.java", source, &unit).unwrap();
        assert_eq!(out, source);
    }
}

#[test]
fn test_extra_and_implicit_imports_are_added() {
    let source = "class A {\n    String name;\n}\n";
    let mut b = TreeBuilder::new(source);
    let class_kw = b.word("class");
    let class_name = b.simple_name("A");
    let string = b.simple_type("String", Some(TypeBinding::new("java.lang.String")));
    let field_name = b.simple_name("name");
    let fragment = b.fragment(field_name, None);
    let field = b.field(vec![], string, vec![fragment]);
    let ty = b.type_declaration(vec![], class_kw, TypeDeclarationKind::Class, class_name, None, vec![], vec![field]);
    let unit = b.compilation_unit(None, vec![], vec![ty]);

    let mut implicit = IndexMap::new();
    implicit.insert("java.lang.String".to_string(), "System.Text".to_string());
    let translator = translator(TranslatorOptions {
        extra_imports: Some(vec!["System".to_string(), "System.Text".to_string()]),
        implicit_imports: Some(implicit),
        ..Default::default()
    });

    let out = translator.translate_to_string("A.java", source, &unit).unwrap();
    assert_eq!(
        out,
        "using System;\nusing System.Text;\nclass A {\n    string name;\n}\n"
    );
}

const IO_IMPORTS: &str = "import java.io.*;
import java.io.File;
import org.jetbrains.annotations.Nullable;

class A {
}
";

#[test]
fn test_wildcard_alias_and_annotation_imports() {
    let mut b = TreeBuilder::new(IO_IMPORTS);
    let import_kw = b.word("import");
    let package = b.name("java.io");
    let wildcard = b.import(import_kw, package, false, true, None);
    let file = b.single_import("java.io.File", None);
    let nullable = b.single_import("org.jetbrains.annotations.Nullable", None);
    let types = empty_classes(&mut b, &["A"]);
    let unit = b.compilation_unit(None, vec![wildcard, file, nullable], types);

    let out = for_target(TargetLanguage::CSharp)
        .translate_to_string("A.java", IO_IMPORTS, &unit)
        .unwrap();
    assert_eq!(out, "using java.io;\nusing File = java.io.File;\n\nclass A {\n}\n");
}

#[test]
fn test_translator_is_reusable_across_files() {
    let translator = for_target(TargetLanguage::Swift);
    let first = translator.translate_to_string("Bits.java", BITS, &bits_unit()).unwrap();
    let second = translator.translate_to_string("Bits.java", BITS, &bits_unit()).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_static_import_is_unsupported() {
    let source = "import static java.lang.Math.max;\n\nclass A {\n}\n";
    let mut b = TreeBuilder::new(source);
    let import_kw = b.word("import");
    let name = b.name("java.lang.Math.max");
    let import = b.import(import_kw, name, true, false, None);
    let types = empty_classes(&mut b, &["A"]);
    let unit = b.compilation_unit(None, vec![import], types);

    let err = for_target(TargetLanguage::CSharp)
        .translate_to_string("A.java", source, &unit)
        .unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.code(), 3002);
}

#[test]
fn test_unqualified_import_is_unsupported() {
    let source = "import Foo;\n\nclass A {\n}\n";
    let mut b = TreeBuilder::new(source);
    let import = b.single_import("Foo", None);
    let types = empty_classes(&mut b, &["A"]);
    let unit = b.compilation_unit(None, vec![import], types);

    let err = for_target(TargetLanguage::CSharp)
        .translate_to_string("A.java", source, &unit)
        .unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.code(), 3003);
    assert_eq!(err.span().map(|span| span.start), Some(0));
}

#[test]
fn test_one_type_per_file() {
    let source = "class A {\n}\nclass B {\n}\n";
    let mut b = TreeBuilder::new(source);
    let types = empty_classes(&mut b, &["A", "B"]);
    let unit = b.compilation_unit(None, vec![], types);

    let err = for_target(TargetLanguage::CSharp)
        .translate_to_string("A.java", source, &unit)
        .unwrap_err();
    assert_eq!(err.code(), 3016);
    assert_eq!(err.span().map(|span| span.start), Some(12));
}

#[test]
fn test_file_without_type_is_rejected() {
    let source = "package a;\n";
    let mut b = TreeBuilder::new(source);
    let package_kw = b.word("package");
    let name = b.name("a");
    let package = b.package(package_kw, name);
    let unit = b.compilation_unit(Some(package), vec![], vec![]);

    let err = for_target(TargetLanguage::Swift)
        .translate_to_string("a.java", source, &unit)
        .unwrap_err();
    assert_eq!(err.code(), 3018);
}

#[test]
fn test_missing_binding_aborts_with_diagnostic() {
    let source = "class A {\n    void run() {\n        list.clear();\n    }\n}\n";
    let mut b = TreeBuilder::new(source);
    let class_kw = b.word("class");
    let class_name = b.simple_name("A");
    let void = b.primitive_type("void");
    let method_name = b.simple_name("run");
    let open = b.token("{");
    let list = b.name_expr("list");
    let clear = b.simple_name("clear");
    let call = b.invocation(Some(list), clear, vec![], None);
    let statement = b.expression_statement(call);
    let body = b.block(open, vec![statement]);
    let method = b.method(vec![], void, method_name, vec![], vec![], Some(body));
    let ty = b.type_declaration(vec![], class_kw, TypeDeclarationKind::Class, class_name, None, vec![], vec![method]);
    let unit = b.compilation_unit(None, vec![], vec![ty]);

    let err = for_target(TargetLanguage::Swift)
        .translate_to_string("A.java", source, &unit)
        .unwrap_err();
    match &err {
        TranslateError::MissingBinding { name, .. } => assert_eq!(name, "clear"),
        other => panic!("unexpected {:?}", other),
    }
    let diagnostic = err.to_diagnostic("A.java");
    assert_eq!(diagnostic.code, 4002);
    assert_eq!(diagnostic.file.as_deref(), Some("A.java"));
    assert!(diagnostic.span.is_some());
}

#[test]
fn test_cpp_rejects_compilation_units() {
    let source = "class A {\n}\n";
    let mut b = TreeBuilder::new(source);
    let types = empty_classes(&mut b, &["A"]);
    let unit = b.compilation_unit(None, vec![], types);

    let err = for_target(TargetLanguage::Cpp)
        .translate_to_string("A.java", source, &unit)
        .unwrap_err();
    assert_eq!(err.code(), 3001);
}
