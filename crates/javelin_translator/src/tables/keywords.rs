//! Reserved words of each target, and escaping of Java identifiers that
//! collide with them.

use javelin_options::TargetLanguage;
use std::borrow::Cow;

/// C# keywords that are not also Java keywords.
const CSHARP_KEYWORDS: &[&str] = &[
    "as", "base", "bool", "checked", "decimal", "delegate", "event", "explicit", "extern",
    "fixed", "foreach", "implicit", "in", "internal", "is", "lock", "namespace", "object",
    "operator", "out", "override", "params", "readonly", "ref", "sbyte", "sealed", "sizeof",
    "stackalloc", "string", "struct", "typeof", "uint", "ulong", "unchecked", "unsafe",
    "ushort", "using", "virtual",
];

/// Swift keywords that are not also Java keywords.
const SWIFT_KEYWORDS: &[&str] = &[
    "as", "associatedtype", "deinit", "defer", "extension", "fallthrough", "fileprivate", "func",
    "guard", "in", "init", "inout", "internal", "is", "let", "nil", "operator", "precedencegroup",
    "protocol", "repeat", "rethrows", "self", "Self", "struct", "subscript", "typealias", "var",
    "where", "Any",
];

/// C++ keywords that are not also Java keywords.
const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bitand", "bitor", "compl", "const_cast",
    "constexpr", "decltype", "delete", "dynamic_cast", "explicit", "export", "extern", "friend",
    "inline", "mutable", "namespace", "noexcept", "not", "nullptr", "operator", "or",
    "register", "reinterpret_cast", "signed", "sizeof", "static_assert", "static_cast",
    "struct", "template", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "xor",
];

pub fn is_reserved(target: TargetLanguage, identifier: &str) -> bool {
    let keywords = match target {
        TargetLanguage::CSharp => CSHARP_KEYWORDS,
        TargetLanguage::Swift => SWIFT_KEYWORDS,
        TargetLanguage::Cpp => CPP_KEYWORDS,
    };
    keywords.contains(&identifier)
}

/// `identifier`, escaped when it is reserved in the target.
pub fn escape_identifier(target: TargetLanguage, identifier: &str) -> Cow<'_, str> {
    if !is_reserved(target, identifier) {
        return Cow::Borrowed(identifier);
    }
    Cow::Owned(match target {
        TargetLanguage::CSharp => format!("@{}", identifier),
        TargetLanguage::Swift => format!("`{}`", identifier),
        TargetLanguage::Cpp => format!("{}_", identifier),
    })
}
