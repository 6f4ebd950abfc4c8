//! Per-target translation tables.
//!
//! Everything that differs between target languages only by spelling lives
//! here, so the construct writers can stay target-neutral wherever the
//! grammar allows it.

pub mod keywords;
pub mod literals;
pub mod modifiers;
pub mod operators;
pub mod types;

use javelin_ast::NodeKind;
use javelin_options::TargetLanguage;

/// Spellings and gaps of one target language.
#[derive(Debug)]
pub struct TargetProfile {
    pub language: TargetLanguage,
    /// Member access on a type, e.g. `Math.max`.
    pub static_access: &'static str,
    /// Member access on an instance, e.g. `list.add`.
    pub instance_access: &'static str,
    pub super_keyword: Option<&'static str>,
    pub this_keyword: &'static str,
    pub null_literal: &'static str,
    pub instanceof_keyword: Option<&'static str>,
    /// Function called in place of `>>>` where the target has no such operator.
    pub unsigned_shift_function: &'static str,
    /// Whether statements end with `;`.
    pub statement_terminator: bool,
    /// Node kinds that have no translation for this target.
    pub unsupported_kinds: &'static [NodeKind],
}

impl TargetProfile {
    pub fn member_access(&self, is_static: bool) -> &'static str {
        if is_static {
            self.static_access
        } else {
            self.instance_access
        }
    }

    pub fn supports(&self, kind: NodeKind) -> bool {
        !self.unsupported_kinds.contains(&kind)
    }
}

pub static CSHARP: TargetProfile = TargetProfile {
    language: TargetLanguage::CSharp,
    static_access: ".",
    instance_access: ".",
    super_keyword: Some("base"),
    this_keyword: "this",
    null_literal: "null",
    instanceof_keyword: Some("is"),
    unsigned_shift_function: "rightShiftUnsigned",
    statement_terminator: true,
    unsupported_kinds: &[],
};

pub static SWIFT: TargetProfile = TargetProfile {
    language: TargetLanguage::Swift,
    static_access: ".",
    instance_access: ".",
    super_keyword: Some("super"),
    this_keyword: "self",
    null_literal: "nil",
    instanceof_keyword: Some("is"),
    unsigned_shift_function: "rightShiftUnsigned",
    statement_terminator: false,
    unsupported_kinds: &[NodeKind::CastExpression],
};

pub static CPP: TargetProfile = TargetProfile {
    language: TargetLanguage::Cpp,
    static_access: "::",
    instance_access: "->",
    super_keyword: None,
    this_keyword: "this",
    null_literal: "nullptr",
    instanceof_keyword: None,
    unsigned_shift_function: "rightShiftUnsigned",
    statement_terminator: true,
    unsupported_kinds: &[
        NodeKind::CompilationUnit,
        NodeKind::PackageDeclaration,
        NodeKind::ImportDeclaration,
        NodeKind::TypeDeclaration,
        NodeKind::FieldDeclaration,
        NodeKind::MethodDeclaration,
        NodeKind::SingleVariableDeclaration,
        NodeKind::MarkerAnnotation,
        NodeKind::ArrayType,
        NodeKind::SuperMethodInvocation,
        NodeKind::SuperFieldAccess,
        NodeKind::InstanceofExpression,
    ],
};

pub fn profile(target: TargetLanguage) -> &'static TargetProfile {
    match target {
        TargetLanguage::CSharp => &CSHARP,
        TargetLanguage::Swift => &SWIFT,
        TargetLanguage::Cpp => &CPP,
    }
}
