//! Operators, keywords, flag types and resolved bindings.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Bindings
// ============================================================================

/// Resolved information about a type reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeBinding {
    /// Fully qualified name, e.g. `java.util.List`.
    pub qualified_name: String,
    /// Whether the type declares type parameters.
    #[serde(default)]
    pub is_generic: bool,
}

impl TypeBinding {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            is_generic: false,
        }
    }

    pub fn generic(mut self) -> Self {
        self.is_generic = true;
        self
    }

    /// The package part of the qualified name, if any.
    pub fn package_name(&self) -> Option<&str> {
        self.qualified_name
            .rfind('.')
            .map(|dot| &self.qualified_name[..dot])
    }
}

/// Resolved information about a method or field reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBinding {
    #[serde(default)]
    pub is_static: bool,
}

impl MemberBinding {
    pub fn instance() -> Self {
        Self { is_static: false }
    }

    pub fn static_member() -> Self {
        Self { is_static: true }
    }
}

// ============================================================================
// Operators
// ============================================================================

/// Binary operators of an infix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfixOperator {
    #[serde(rename = "*")]
    Times,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "%")]
    Remainder,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "<<")]
    LeftShift,
    #[serde(rename = ">>")]
    RightShiftSigned,
    #[serde(rename = ">>>")]
    RightShiftUnsigned,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<=")]
    LessEquals,
    #[serde(rename = ">=")]
    GreaterEquals,
    #[serde(rename = "==")]
    Equals,
    #[serde(rename = "!=")]
    NotEquals,
    #[serde(rename = "&")]
    And,
    #[serde(rename = "^")]
    Xor,
    #[serde(rename = "|")]
    Or,
    #[serde(rename = "&&")]
    ConditionalAnd,
    #[serde(rename = "||")]
    ConditionalOr,
}

impl InfixOperator {
    /// The Java source token.
    pub fn token(self) -> &'static str {
        match self {
            InfixOperator::Times => "*",
            InfixOperator::Divide => "/",
            InfixOperator::Remainder => "%",
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::LeftShift => "<<",
            InfixOperator::RightShiftSigned => ">>",
            InfixOperator::RightShiftUnsigned => ">>>",
            InfixOperator::Less => "<",
            InfixOperator::Greater => ">",
            InfixOperator::LessEquals => "<=",
            InfixOperator::GreaterEquals => ">=",
            InfixOperator::Equals => "==",
            InfixOperator::NotEquals => "!=",
            InfixOperator::And => "&",
            InfixOperator::Xor => "^",
            InfixOperator::Or => "|",
            InfixOperator::ConditionalAnd => "&&",
            InfixOperator::ConditionalOr => "||",
        }
    }

    /// Java binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            InfixOperator::Times | InfixOperator::Divide | InfixOperator::Remainder => 10,
            InfixOperator::Plus | InfixOperator::Minus => 9,
            InfixOperator::LeftShift
            | InfixOperator::RightShiftSigned
            | InfixOperator::RightShiftUnsigned => 8,
            InfixOperator::Less
            | InfixOperator::Greater
            | InfixOperator::LessEquals
            | InfixOperator::GreaterEquals => 7,
            InfixOperator::Equals | InfixOperator::NotEquals => 6,
            InfixOperator::And => 5,
            InfixOperator::Xor => 4,
            InfixOperator::Or => 3,
            InfixOperator::ConditionalAnd => 2,
            InfixOperator::ConditionalOr => 1,
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    PlusAssign,
    #[serde(rename = "-=")]
    MinusAssign,
    #[serde(rename = "*=")]
    TimesAssign,
    #[serde(rename = "/=")]
    DivideAssign,
    #[serde(rename = "%=")]
    RemainderAssign,
    #[serde(rename = "&=")]
    BitAndAssign,
    #[serde(rename = "|=")]
    BitOrAssign,
    #[serde(rename = "^=")]
    BitXorAssign,
    #[serde(rename = "<<=")]
    LeftShiftAssign,
    #[serde(rename = ">>=")]
    RightShiftSignedAssign,
    #[serde(rename = ">>>=")]
    RightShiftUnsignedAssign,
}

impl AssignmentOperator {
    pub fn token(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::PlusAssign => "+=",
            AssignmentOperator::MinusAssign => "-=",
            AssignmentOperator::TimesAssign => "*=",
            AssignmentOperator::DivideAssign => "/=",
            AssignmentOperator::RemainderAssign => "%=",
            AssignmentOperator::BitAndAssign => "&=",
            AssignmentOperator::BitOrAssign => "|=",
            AssignmentOperator::BitXorAssign => "^=",
            AssignmentOperator::LeftShiftAssign => "<<=",
            AssignmentOperator::RightShiftSignedAssign => ">>=",
            AssignmentOperator::RightShiftUnsignedAssign => ">>>=",
        }
    }
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefixOperator {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "~")]
    Complement,
    #[serde(rename = "!")]
    Not,
}

impl PrefixOperator {
    pub fn token(self) -> &'static str {
        match self {
            PrefixOperator::Increment => "++",
            PrefixOperator::Decrement => "--",
            PrefixOperator::Plus => "+",
            PrefixOperator::Minus => "-",
            PrefixOperator::Complement => "~",
            PrefixOperator::Not => "!",
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostfixOperator {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

impl PostfixOperator {
    pub fn token(self) -> &'static str {
        match self {
            PostfixOperator::Increment => "++",
            PostfixOperator::Decrement => "--",
        }
    }
}

impl fmt::Display for PostfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ============================================================================
// Keywords
// ============================================================================

/// Java primitive type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "boolean" => PrimitiveKind::Boolean,
            "byte" => PrimitiveKind::Byte,
            "char" => PrimitiveKind::Char,
            "short" => PrimitiveKind::Short,
            "int" => PrimitiveKind::Int,
            "long" => PrimitiveKind::Long,
            "float" => PrimitiveKind::Float,
            "double" => PrimitiveKind::Double,
            "void" => PrimitiveKind::Void,
            _ => return None,
        })
    }
}

/// Java modifier keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKeyword {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    Default,
}

impl ModifierKeyword {
    pub fn token(self) -> &'static str {
        match self {
            ModifierKeyword::Public => "public",
            ModifierKeyword::Protected => "protected",
            ModifierKeyword::Private => "private",
            ModifierKeyword::Static => "static",
            ModifierKeyword::Abstract => "abstract",
            ModifierKeyword::Final => "final",
            ModifierKeyword::Native => "native",
            ModifierKeyword::Synchronized => "synchronized",
            ModifierKeyword::Transient => "transient",
            ModifierKeyword::Volatile => "volatile",
            ModifierKeyword::Strictfp => "strictfp",
            ModifierKeyword::Default => "default",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "public" => ModifierKeyword::Public,
            "protected" => ModifierKeyword::Protected,
            "private" => ModifierKeyword::Private,
            "static" => ModifierKeyword::Static,
            "abstract" => ModifierKeyword::Abstract,
            "final" => ModifierKeyword::Final,
            "native" => ModifierKeyword::Native,
            "synchronized" => ModifierKeyword::Synchronized,
            "transient" => ModifierKeyword::Transient,
            "volatile" => ModifierKeyword::Volatile,
            "strictfp" => ModifierKeyword::Strictfp,
            "default" => ModifierKeyword::Default,
            _ => return None,
        })
    }

    pub fn flag(self) -> ModifierFlags {
        match self {
            ModifierKeyword::Public => ModifierFlags::PUBLIC,
            ModifierKeyword::Protected => ModifierFlags::PROTECTED,
            ModifierKeyword::Private => ModifierFlags::PRIVATE,
            ModifierKeyword::Static => ModifierFlags::STATIC,
            ModifierKeyword::Abstract => ModifierFlags::ABSTRACT,
            ModifierKeyword::Final => ModifierFlags::FINAL,
            ModifierKeyword::Native => ModifierFlags::NATIVE,
            ModifierKeyword::Synchronized => ModifierFlags::SYNCHRONIZED,
            ModifierKeyword::Transient => ModifierFlags::TRANSIENT,
            ModifierKeyword::Volatile => ModifierFlags::VOLATILE,
            ModifierKeyword::Strictfp => ModifierFlags::STRICTFP,
            ModifierKeyword::Default => ModifierFlags::DEFAULT,
        }
    }
}

impl fmt::Display for ModifierKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

bitflags::bitflags! {
    /// Modifier flags of a declaration, collected from its modifier list.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const NONE         = 0;
        const PUBLIC       = 1 << 0;
        const PROTECTED    = 1 << 1;
        const PRIVATE      = 1 << 2;
        const STATIC       = 1 << 3;
        const ABSTRACT     = 1 << 4;
        const FINAL        = 1 << 5;
        const NATIVE       = 1 << 6;
        const SYNCHRONIZED = 1 << 7;
        const TRANSIENT    = 1 << 8;
        const VOLATILE     = 1 << 9;
        const STRICTFP     = 1 << 10;
        const DEFAULT      = 1 << 11;

        const ACCESSIBILITY = Self::PUBLIC.bits() | Self::PROTECTED.bits() | Self::PRIVATE.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tokens_round_trip_through_serde() {
        let json = serde_json::to_string(&InfixOperator::RightShiftUnsigned).unwrap();
        assert_eq!(json, "\">>>\"");
        let op: InfixOperator = serde_json::from_str("\"&&\"").unwrap();
        assert_eq!(op, InfixOperator::ConditionalAnd);
    }

    #[test]
    fn test_precedence_ordering() {
        assert!(InfixOperator::Times.precedence() > InfixOperator::Plus.precedence());
        assert!(InfixOperator::Plus.precedence() > InfixOperator::RightShiftUnsigned.precedence());
        assert!(InfixOperator::And.precedence() > InfixOperator::ConditionalOr.precedence());
    }

    #[test]
    fn test_modifier_keyword_lookup() {
        assert_eq!(ModifierKeyword::from_token("final"), Some(ModifierKeyword::Final));
        assert_eq!(ModifierKeyword::from_token("const"), None);
        assert_eq!(ModifierKeyword::Static.flag(), ModifierFlags::STATIC);
        assert!(ModifierFlags::ACCESSIBILITY.contains(ModifierFlags::PRIVATE));
    }

    #[test]
    fn test_primitive_keyword_lookup() {
        for kind in [PrimitiveKind::Boolean, PrimitiveKind::Long, PrimitiveKind::Void] {
            assert_eq!(PrimitiveKind::from_keyword(kind.keyword()), Some(kind));
        }
    }

    #[test]
    fn test_type_binding_package_name() {
        let binding = TypeBinding::new("java.util.List").generic();
        assert!(binding.is_generic);
        assert_eq!(binding.package_name(), Some("java.util"));
        assert_eq!(TypeBinding::new("Foo").package_name(), None);
    }
}
