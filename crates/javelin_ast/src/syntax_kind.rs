//! The closed set of syntax node kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the kind of a syntax node. Used for dispatch diagnostics and
/// for per-target lists of constructs that have no translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    // Declarations
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,
    TypeDeclaration,
    EnumDeclaration,
    AnnotationTypeDeclaration,
    FieldDeclaration,
    MethodDeclaration,
    Initializer,
    SingleVariableDeclaration,
    VariableDeclarationFragment,
    Modifier,
    MarkerAnnotation,
    SingleMemberAnnotation,
    NormalAnnotation,
    TypeParameter,
    AnonymousClassDeclaration,
    // Types
    PrimitiveType,
    SimpleType,
    ArrayType,
    ParameterizedType,
    WildcardType,
    // Names & literals
    SimpleName,
    QualifiedName,
    NumberLiteral,
    StringLiteral,
    CharacterLiteral,
    BooleanLiteral,
    NullLiteral,
    // Expressions
    ThisExpression,
    ParenthesizedExpression,
    InfixExpression,
    PrefixExpression,
    PostfixExpression,
    Assignment,
    ConditionalExpression,
    MethodInvocation,
    SuperMethodInvocation,
    FieldAccess,
    SuperFieldAccess,
    ArrayAccess,
    ClassInstanceCreation,
    CastExpression,
    InstanceofExpression,
    ArrayCreation,
    ArrayInitializer,
    LambdaExpression,
    MethodReference,
    TypeLiteral,
    // Statements
    Block,
    ExpressionStatement,
    VariableDeclarationStatement,
    ReturnStatement,
    IfStatement,
    WhileStatement,
    DoStatement,
    EmptyStatement,
    BreakStatement,
    ContinueStatement,
    ThrowStatement,
    ForStatement,
    EnhancedForStatement,
    SwitchStatement,
    TryStatement,
    SynchronizedStatement,
    LabeledStatement,
    AssertStatement,
    ConstructorInvocation,
    SuperConstructorInvocation,
    TypeDeclarationStatement,
}

impl NodeKind {
    /// The kind's name as the front end spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::CompilationUnit => "CompilationUnit",
            NodeKind::PackageDeclaration => "PackageDeclaration",
            NodeKind::ImportDeclaration => "ImportDeclaration",
            NodeKind::TypeDeclaration => "TypeDeclaration",
            NodeKind::EnumDeclaration => "EnumDeclaration",
            NodeKind::AnnotationTypeDeclaration => "AnnotationTypeDeclaration",
            NodeKind::FieldDeclaration => "FieldDeclaration",
            NodeKind::MethodDeclaration => "MethodDeclaration",
            NodeKind::Initializer => "Initializer",
            NodeKind::SingleVariableDeclaration => "SingleVariableDeclaration",
            NodeKind::VariableDeclarationFragment => "VariableDeclarationFragment",
            NodeKind::Modifier => "Modifier",
            NodeKind::MarkerAnnotation => "MarkerAnnotation",
            NodeKind::SingleMemberAnnotation => "SingleMemberAnnotation",
            NodeKind::NormalAnnotation => "NormalAnnotation",
            NodeKind::TypeParameter => "TypeParameter",
            NodeKind::AnonymousClassDeclaration => "AnonymousClassDeclaration",
            NodeKind::PrimitiveType => "PrimitiveType",
            NodeKind::SimpleType => "SimpleType",
            NodeKind::ArrayType => "ArrayType",
            NodeKind::ParameterizedType => "ParameterizedType",
            NodeKind::WildcardType => "WildcardType",
            NodeKind::SimpleName => "SimpleName",
            NodeKind::QualifiedName => "QualifiedName",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::CharacterLiteral => "CharacterLiteral",
            NodeKind::BooleanLiteral => "BooleanLiteral",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::ThisExpression => "ThisExpression",
            NodeKind::ParenthesizedExpression => "ParenthesizedExpression",
            NodeKind::InfixExpression => "InfixExpression",
            NodeKind::PrefixExpression => "PrefixExpression",
            NodeKind::PostfixExpression => "PostfixExpression",
            NodeKind::Assignment => "Assignment",
            NodeKind::ConditionalExpression => "ConditionalExpression",
            NodeKind::MethodInvocation => "MethodInvocation",
            NodeKind::SuperMethodInvocation => "SuperMethodInvocation",
            NodeKind::FieldAccess => "FieldAccess",
            NodeKind::SuperFieldAccess => "SuperFieldAccess",
            NodeKind::ArrayAccess => "ArrayAccess",
            NodeKind::ClassInstanceCreation => "ClassInstanceCreation",
            NodeKind::CastExpression => "CastExpression",
            NodeKind::InstanceofExpression => "InstanceofExpression",
            NodeKind::ArrayCreation => "ArrayCreation",
            NodeKind::ArrayInitializer => "ArrayInitializer",
            NodeKind::LambdaExpression => "LambdaExpression",
            NodeKind::MethodReference => "MethodReference",
            NodeKind::TypeLiteral => "TypeLiteral",
            NodeKind::Block => "Block",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::VariableDeclarationStatement => "VariableDeclarationStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::WhileStatement => "WhileStatement",
            NodeKind::DoStatement => "DoStatement",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::BreakStatement => "BreakStatement",
            NodeKind::ContinueStatement => "ContinueStatement",
            NodeKind::ThrowStatement => "ThrowStatement",
            NodeKind::ForStatement => "ForStatement",
            NodeKind::EnhancedForStatement => "EnhancedForStatement",
            NodeKind::SwitchStatement => "SwitchStatement",
            NodeKind::TryStatement => "TryStatement",
            NodeKind::SynchronizedStatement => "SynchronizedStatement",
            NodeKind::LabeledStatement => "LabeledStatement",
            NodeKind::AssertStatement => "AssertStatement",
            NodeKind::ConstructorInvocation => "ConstructorInvocation",
            NodeKind::SuperConstructorInvocation => "SuperConstructorInvocation",
            NodeKind::TypeDeclarationStatement => "TypeDeclarationStatement",
        }
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::Block
                | NodeKind::ExpressionStatement
                | NodeKind::VariableDeclarationStatement
                | NodeKind::ReturnStatement
                | NodeKind::IfStatement
                | NodeKind::WhileStatement
                | NodeKind::DoStatement
                | NodeKind::EmptyStatement
                | NodeKind::BreakStatement
                | NodeKind::ContinueStatement
                | NodeKind::ThrowStatement
                | NodeKind::ForStatement
                | NodeKind::EnhancedForStatement
                | NodeKind::SwitchStatement
                | NodeKind::TryStatement
                | NodeKind::SynchronizedStatement
                | NodeKind::LabeledStatement
                | NodeKind::AssertStatement
                | NodeKind::ConstructorInvocation
                | NodeKind::SuperConstructorInvocation
                | NodeKind::TypeDeclarationStatement
        )
    }

    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            NodeKind::CompilationUnit
                | NodeKind::PackageDeclaration
                | NodeKind::ImportDeclaration
                | NodeKind::TypeDeclaration
                | NodeKind::EnumDeclaration
                | NodeKind::AnnotationTypeDeclaration
                | NodeKind::FieldDeclaration
                | NodeKind::MethodDeclaration
                | NodeKind::Initializer
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
