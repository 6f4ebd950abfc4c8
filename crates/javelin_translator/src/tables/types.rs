//! Type spellings per target.

use javelin_ast::PrimitiveKind;
use javelin_options::TargetLanguage;

pub fn primitive_type(target: TargetLanguage, primitive: PrimitiveKind) -> &'static str {
    match target {
        TargetLanguage::CSharp => match primitive {
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Byte => "sbyte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        },
        TargetLanguage::Swift => match primitive {
            PrimitiveKind::Boolean => "Bool",
            PrimitiveKind::Byte => "Int8",
            PrimitiveKind::Char => "Character",
            PrimitiveKind::Short => "Int16",
            PrimitiveKind::Int => "Int32",
            PrimitiveKind::Long => "Int64",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Void => "Void",
        },
        TargetLanguage::Cpp => match primitive {
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Byte => "int8_t",
            PrimitiveKind::Char => "char16_t",
            PrimitiveKind::Short => "int16_t",
            PrimitiveKind::Int => "int32_t",
            PrimitiveKind::Long => "int64_t",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        },
    }
}

/// Built-in target type that stands in for a `java.lang` type.
pub fn well_known_type(target: TargetLanguage, qualified_name: &str) -> Option<&'static str> {
    match (target, qualified_name) {
        (TargetLanguage::CSharp, "java.lang.String") => Some("string"),
        (TargetLanguage::CSharp, "java.lang.Object") => Some("object"),
        (TargetLanguage::Swift, "java.lang.String") => Some("String"),
        (TargetLanguage::Swift, "java.lang.Object") => Some("AnyObject"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_spellings() {
        assert_eq!(primitive_type(TargetLanguage::CSharp, PrimitiveKind::Boolean), "bool");
        assert_eq!(primitive_type(TargetLanguage::CSharp, PrimitiveKind::Byte), "sbyte");
        assert_eq!(primitive_type(TargetLanguage::Swift, PrimitiveKind::Int), "Int32");
        assert_eq!(primitive_type(TargetLanguage::Cpp, PrimitiveKind::Char), "char16_t");
    }

    #[test]
    fn test_well_known_types() {
        assert_eq!(well_known_type(TargetLanguage::CSharp, "java.lang.String"), Some("string"));
        assert_eq!(well_known_type(TargetLanguage::Swift, "java.lang.Object"), Some("AnyObject"));
        assert_eq!(well_known_type(TargetLanguage::Cpp, "java.lang.String"), None);
        assert_eq!(well_known_type(TargetLanguage::CSharp, "java.util.List"), None);
    }
}
