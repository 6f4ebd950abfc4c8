use criterion::{black_box, criterion_group, criterion_main, Criterion};
use javelin_ast::builder::TreeBuilder;
use javelin_ast::*;
use javelin_options::{TargetLanguage, TranslationSession};
use javelin_translator::Translator;
use std::sync::Arc;

const METHODS: usize = 200;

fn source() -> String {
    let mut source = String::from("package com.acme.bench;\n\n/** Generated. */\npublic class Shifts {\n");
    for i in 0..METHODS {
        source.push_str(&format!(
            "    // method {i}\n    public static int shift{i}(int x, int y) {{\n        return x >>> y + {i};\n    }}\n\n"
        ));
    }
    source.push_str("}\n");
    source
}

fn unit(source: &str) -> CompilationUnit {
    let mut b = TreeBuilder::new(source);
    let package_kw = b.word("package");
    let package_name = b.name("com.acme.bench");
    let package = b.package(package_kw, package_name);

    let public = b.modifier(ModifierKeyword::Public);
    let class_kw = b.word("class");
    let name = b.simple_name("Shifts");

    let mut methods = Vec::with_capacity(METHODS);
    for i in 0..METHODS {
        let m_public = b.modifier(ModifierKeyword::Public);
        let m_static = b.modifier(ModifierKeyword::Static);
        let ret = b.primitive_type("int");
        let method_name = b.simple_name(&format!("shift{i}"));
        let x_type = b.primitive_type("int");
        let x_name = b.simple_name("x");
        let x = b.parameter(vec![], x_type, false, x_name);
        let y_type = b.primitive_type("int");
        let y_name = b.simple_name("y");
        let y = b.parameter(vec![], y_type, false, y_name);

        let open = b.token("{");
        let return_kw = b.word("return");
        let left = b.name_expr("x");
        let y_ref = b.name_expr("y");
        let offset = b.number(&i.to_string());
        let sum = b.infix(y_ref, InfixOperator::Plus, offset);
        let shift = b.infix(left, InfixOperator::RightShiftUnsigned, sum);
        let statement = b.return_statement(return_kw, Some(shift));
        let body = b.block(open, vec![statement]);
        methods.push(b.method(vec![m_public, m_static], ret, method_name, vec![x, y], vec![], Some(body)));
    }

    let ty = b.type_declaration(
        vec![public],
        class_kw,
        TypeDeclarationKind::Class,
        name,
        None,
        vec![],
        methods,
    );
    b.compilation_unit(Some(package), vec![], vec![ty])
}

fn bench_translate(c: &mut Criterion) {
    let source = source();
    let unit = unit(&source);

    for target in [TargetLanguage::CSharp, TargetLanguage::Swift] {
        let translator = Translator::new(Arc::new(TranslationSession::for_target(target)));
        c.bench_function(&format!("translate_{}", target.extension()), |b| {
            b.iter(|| {
                let out = translator
                    .translate_to_string("Shifts.java", black_box(&source), black_box(&unit))
                    .unwrap();
                black_box(out);
            })
        });
    }
}

criterion_group!(benches, bench_translate);
criterion_main!(benches);
