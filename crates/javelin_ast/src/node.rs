//! Syntax tree node definitions.
//!
//! The node set follows the Java grammar as delivered by the front end:
//! declarations, statements, expressions, types and names. Constructs the
//! translator has no rule for are still represented, as [`OpaqueNode`]s, so
//! that they can be reported precisely instead of silently dropped.

use crate::syntax_kind::NodeKind;
use crate::types::*;
use javelin_core::text::TextRange;
use serde::{Deserialize, Serialize};

/// A node whose children are not modelled; only its extent is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpaqueNode {
    pub range: TextRange,
}

// ============================================================================
// Names
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleName {
    pub range: TextRange,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifiedName {
    pub range: TextRange,
    pub qualifier: Box<Name>,
    pub name: SimpleName,
    /// Present when the name denotes a field in an expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<MemberBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Name {
    #[serde(rename = "SimpleName")]
    Simple(SimpleName),
    #[serde(rename = "QualifiedName")]
    Qualified(QualifiedName),
}

impl Name {
    pub fn range(&self) -> TextRange {
        match self {
            Name::Simple(n) => n.range,
            Name::Qualified(n) => n.range,
        }
    }

    /// The dotted name, e.g. `java.util.List`.
    pub fn fully_qualified_name(&self) -> String {
        match self {
            Name::Simple(n) => n.identifier.clone(),
            Name::Qualified(n) => {
                format!("{}.{}", n.qualifier.fully_qualified_name(), n.name.identifier)
            }
        }
    }

    /// The last identifier of the name.
    pub fn last_identifier(&self) -> &SimpleName {
        match self {
            Name::Simple(n) => n,
            Name::Qualified(n) => &n.name,
        }
    }

    pub fn is_qualified(&self) -> bool {
        matches!(self, Name::Qualified(_))
    }
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveType {
    pub range: TextRange,
    pub primitive: PrimitiveKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleType {
    pub range: TextRange,
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<TypeBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayType {
    pub range: TextRange,
    pub element_type: Box<Type>,
    pub dimensions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterizedType {
    pub range: TextRange,
    #[serde(rename = "type")]
    pub base_type: Box<Type>,
    #[serde(default)]
    pub type_arguments: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Type {
    #[serde(rename = "PrimitiveType")]
    Primitive(PrimitiveType),
    #[serde(rename = "SimpleType")]
    Simple(SimpleType),
    #[serde(rename = "ArrayType")]
    Array(ArrayType),
    #[serde(rename = "ParameterizedType")]
    Parameterized(ParameterizedType),
    #[serde(rename = "WildcardType")]
    Wildcard(OpaqueNode),
}

impl Type {
    pub fn range(&self) -> TextRange {
        match self {
            Type::Primitive(t) => t.range,
            Type::Simple(t) => t.range,
            Type::Array(t) => t.range,
            Type::Parameterized(t) => t.range,
            Type::Wildcard(t) => t.range,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Primitive(p) if p.primitive == PrimitiveKind::Void)
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// A literal whose source token is kept as written, e.g. `0x1FL` or `"a\n"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub range: TextRange,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub range: TextRange,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullLiteral {
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThisExpression {
    pub range: TextRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedExpression {
    pub range: TextRange,
    pub expression: Box<Expression>,
}

/// `left op right op extended...`; a chain of the same operator is one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfixExpression {
    pub range: TextRange,
    pub left: Box<Expression>,
    pub operator: InfixOperator,
    pub right: Box<Expression>,
    #[serde(default)]
    pub extended_operands: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixExpression {
    pub range: TextRange,
    pub operator: PrefixOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostfixExpression {
    pub range: TextRange,
    pub operand: Box<Expression>,
    pub operator: PostfixOperator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub range: TextRange,
    pub left: Box<Expression>,
    pub operator: AssignmentOperator,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalExpression {
    pub range: TextRange,
    pub condition: Box<Expression>,
    pub then_expression: Box<Expression>,
    pub else_expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInvocation {
    pub range: TextRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Box<Expression>>,
    #[serde(default)]
    pub type_arguments: Vec<Type>,
    pub name: SimpleName,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<MemberBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperMethodInvocation {
    pub range: TextRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<Name>,
    #[serde(default)]
    pub type_arguments: Vec<Type>,
    pub name: SimpleName,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<MemberBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldAccess {
    pub range: TextRange,
    pub expression: Box<Expression>,
    pub name: SimpleName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<MemberBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperFieldAccess {
    pub range: TextRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<Name>,
    pub name: SimpleName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<MemberBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayAccess {
    pub range: TextRange,
    pub array: Box<Expression>,
    pub index: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInstanceCreation {
    pub range: TextRange,
    /// Outer instance for `outer.new Inner()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Box<Expression>>,
    #[serde(default)]
    pub type_arguments: Vec<Type>,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous_class_declaration: Option<OpaqueNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastExpression {
    pub range: TextRange,
    #[serde(rename = "type")]
    pub ty: Type,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceofExpression {
    pub range: TextRange,
    pub left: Box<Expression>,
    pub right_operand: Type,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    SimpleName(SimpleName),
    QualifiedName(QualifiedName),
    NumberLiteral(Literal),
    StringLiteral(Literal),
    CharacterLiteral(Literal),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(NullLiteral),
    #[serde(rename = "ThisExpression")]
    This(ThisExpression),
    #[serde(rename = "ParenthesizedExpression")]
    Parenthesized(ParenthesizedExpression),
    #[serde(rename = "InfixExpression")]
    Infix(InfixExpression),
    #[serde(rename = "PrefixExpression")]
    Prefix(PrefixExpression),
    #[serde(rename = "PostfixExpression")]
    Postfix(PostfixExpression),
    Assignment(Assignment),
    #[serde(rename = "ConditionalExpression")]
    Conditional(ConditionalExpression),
    MethodInvocation(MethodInvocation),
    SuperMethodInvocation(SuperMethodInvocation),
    FieldAccess(FieldAccess),
    SuperFieldAccess(SuperFieldAccess),
    ArrayAccess(ArrayAccess),
    ClassInstanceCreation(ClassInstanceCreation),
    #[serde(rename = "CastExpression")]
    Cast(CastExpression),
    #[serde(rename = "InstanceofExpression")]
    Instanceof(InstanceofExpression),
    ArrayCreation(OpaqueNode),
    ArrayInitializer(OpaqueNode),
    #[serde(rename = "LambdaExpression")]
    Lambda(OpaqueNode),
    MethodReference(OpaqueNode),
    TypeLiteral(OpaqueNode),
}

impl Expression {
    pub fn range(&self) -> TextRange {
        Node::from(self).range()
    }

    pub fn kind(&self) -> NodeKind {
        Node::from(self).kind()
    }
}

impl From<Name> for Expression {
    fn from(name: Name) -> Self {
        match name {
            Name::Simple(n) => Expression::SimpleName(n),
            Name::Qualified(n) => Expression::QualifiedName(n),
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub range: TextRange,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub range: TextRange,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclarationFragment {
    pub range: TextRange,
    pub name: SimpleName,
    #[serde(default)]
    pub extra_dimensions: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarationStatement {
    pub range: TextRange,
    #[serde(default)]
    pub modifiers: Vec<ExtendedModifier>,
    #[serde(rename = "type")]
    pub ty: Type,
    pub fragments: Vec<VariableDeclarationFragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub range: TextRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfStatement {
    pub range: TextRange,
    pub expression: Expression,
    pub then_statement: Box<Statement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub else_statement: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub range: TextRange,
    pub expression: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoStatement {
    pub range: TextRange,
    pub body: Box<Statement>,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyStatement {
    pub range: TextRange,
}

/// `break` or `continue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpStatement {
    pub range: TextRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<SimpleName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowStatement {
    pub range: TextRange,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Statement {
    Block(Block),
    #[serde(rename = "ExpressionStatement")]
    Expression(ExpressionStatement),
    #[serde(rename = "VariableDeclarationStatement")]
    VariableDeclaration(VariableDeclarationStatement),
    #[serde(rename = "ReturnStatement")]
    Return(ReturnStatement),
    #[serde(rename = "IfStatement")]
    If(IfStatement),
    #[serde(rename = "WhileStatement")]
    While(WhileStatement),
    #[serde(rename = "DoStatement")]
    Do(DoStatement),
    #[serde(rename = "EmptyStatement")]
    Empty(EmptyStatement),
    #[serde(rename = "BreakStatement")]
    Break(JumpStatement),
    #[serde(rename = "ContinueStatement")]
    Continue(JumpStatement),
    #[serde(rename = "ThrowStatement")]
    Throw(ThrowStatement),
    #[serde(rename = "ForStatement")]
    For(OpaqueNode),
    #[serde(rename = "EnhancedForStatement")]
    EnhancedFor(OpaqueNode),
    #[serde(rename = "SwitchStatement")]
    Switch(OpaqueNode),
    #[serde(rename = "TryStatement")]
    Try(OpaqueNode),
    #[serde(rename = "SynchronizedStatement")]
    Synchronized(OpaqueNode),
    #[serde(rename = "LabeledStatement")]
    Labeled(OpaqueNode),
    #[serde(rename = "AssertStatement")]
    Assert(OpaqueNode),
    ConstructorInvocation(OpaqueNode),
    SuperConstructorInvocation(OpaqueNode),
    TypeDeclarationStatement(OpaqueNode),
}

impl Statement {
    pub fn range(&self) -> TextRange {
        Node::from(self).range()
    }

    pub fn kind(&self) -> NodeKind {
        Node::from(self).kind()
    }
}

// ============================================================================
// Modifiers & Annotations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub range: TextRange,
    pub keyword: ModifierKeyword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// `@Name`
    Marker,
    /// `@Name(value)`
    SingleMember,
    /// `@Name(key = value, ...)`
    Normal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub range: TextRange,
    pub annotation_kind: AnnotationKind,
    pub type_name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<TypeBinding>,
}

impl Annotation {
    /// The annotation type's qualified name, from its binding when resolved.
    pub fn qualified_name(&self) -> String {
        match &self.binding {
            Some(binding) => binding.qualified_name.clone(),
            None => self.type_name.fully_qualified_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ExtendedModifier {
    Modifier(Modifier),
    Annotation(Annotation),
}

impl ExtendedModifier {
    pub fn range(&self) -> TextRange {
        match self {
            ExtendedModifier::Modifier(m) => m.range,
            ExtendedModifier::Annotation(a) => a.range,
        }
    }
}

/// Collect the keyword modifiers of a modifier list into flags.
pub fn modifier_flags(modifiers: &[ExtendedModifier]) -> ModifierFlags {
    modifiers.iter().fold(ModifierFlags::NONE, |flags, m| match m {
        ExtendedModifier::Modifier(m) => flags | m.keyword.flag(),
        ExtendedModifier::Annotation(_) => flags,
    })
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleVariableDeclaration {
    pub range: TextRange,
    #[serde(default)]
    pub modifiers: Vec<ExtendedModifier>,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub is_varargs: bool,
    pub name: SimpleName,
    #[serde(default)]
    pub extra_dimensions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub range: TextRange,
    #[serde(default)]
    pub modifiers: Vec<ExtendedModifier>,
    #[serde(rename = "type")]
    pub ty: Type,
    pub fragments: Vec<VariableDeclarationFragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDeclaration {
    pub range: TextRange,
    #[serde(default)]
    pub modifiers: Vec<ExtendedModifier>,
    #[serde(default)]
    pub type_parameters: Vec<OpaqueNode>,
    /// Absent for constructors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Type>,
    #[serde(default)]
    pub is_constructor: bool,
    pub name: SimpleName,
    #[serde(default)]
    pub parameters: Vec<SingleVariableDeclaration>,
    #[serde(default)]
    pub extra_dimensions: u32,
    #[serde(default)]
    pub thrown_exceptions: Vec<Type>,
    /// Absent for abstract and interface methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeDeclarationKind {
    Class,
    Interface,
    Enum,
    AnnotationType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDeclaration {
    pub range: TextRange,
    pub declaration_kind: TypeDeclarationKind,
    #[serde(default)]
    pub modifiers: Vec<ExtendedModifier>,
    pub name: SimpleName,
    #[serde(default)]
    pub type_parameters: Vec<OpaqueNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass_type: Option<Type>,
    #[serde(default)]
    pub super_interface_types: Vec<Type>,
    #[serde(default)]
    pub body_declarations: Vec<BodyDeclaration>,
}

impl TypeDeclaration {
    pub fn is_interface(&self) -> bool {
        self.declaration_kind == TypeDeclarationKind::Interface
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BodyDeclaration {
    #[serde(rename = "FieldDeclaration")]
    Field(FieldDeclaration),
    #[serde(rename = "MethodDeclaration")]
    Method(MethodDeclaration),
    #[serde(rename = "TypeDeclaration")]
    Type(TypeDeclaration),
    Initializer(OpaqueNode),
}

impl BodyDeclaration {
    pub fn range(&self) -> TextRange {
        Node::from(self).range()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDeclaration {
    pub range: TextRange,
    pub name: Name,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDeclaration {
    pub range: TextRange,
    pub name: Name,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_on_demand: bool,
    /// The imported type, for single-type imports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<TypeBinding>,
}

impl ImportDeclaration {
    /// Whether this imports a single generic type.
    pub fn is_generic_import(&self) -> bool {
        !self.is_on_demand && self.binding.as_ref().is_some_and(|b| b.is_generic)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub range: TextRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageDeclaration>,
    #[serde(default)]
    pub imports: Vec<ImportDeclaration>,
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
}

// ============================================================================
// Borrowed node view
// ============================================================================

/// A borrowed reference to any node in the tree; the unit of dispatch.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    CompilationUnit(&'a CompilationUnit),
    PackageDeclaration(&'a PackageDeclaration),
    ImportDeclaration(&'a ImportDeclaration),
    TypeDeclaration(&'a TypeDeclaration),
    FieldDeclaration(&'a FieldDeclaration),
    MethodDeclaration(&'a MethodDeclaration),
    SingleVariableDeclaration(&'a SingleVariableDeclaration),
    VariableDeclarationFragment(&'a VariableDeclarationFragment),
    Modifier(&'a Modifier),
    Annotation(&'a Annotation),
    PrimitiveType(&'a PrimitiveType),
    SimpleType(&'a SimpleType),
    ArrayType(&'a ArrayType),
    ParameterizedType(&'a ParameterizedType),
    SimpleName(&'a SimpleName),
    QualifiedName(&'a QualifiedName),
    NumberLiteral(&'a Literal),
    StringLiteral(&'a Literal),
    CharacterLiteral(&'a Literal),
    BooleanLiteral(&'a BooleanLiteral),
    NullLiteral(&'a NullLiteral),
    ThisExpression(&'a ThisExpression),
    ParenthesizedExpression(&'a ParenthesizedExpression),
    InfixExpression(&'a InfixExpression),
    PrefixExpression(&'a PrefixExpression),
    PostfixExpression(&'a PostfixExpression),
    Assignment(&'a Assignment),
    ConditionalExpression(&'a ConditionalExpression),
    MethodInvocation(&'a MethodInvocation),
    SuperMethodInvocation(&'a SuperMethodInvocation),
    FieldAccess(&'a FieldAccess),
    SuperFieldAccess(&'a SuperFieldAccess),
    ArrayAccess(&'a ArrayAccess),
    ClassInstanceCreation(&'a ClassInstanceCreation),
    CastExpression(&'a CastExpression),
    InstanceofExpression(&'a InstanceofExpression),
    Block(&'a Block),
    ExpressionStatement(&'a ExpressionStatement),
    VariableDeclarationStatement(&'a VariableDeclarationStatement),
    ReturnStatement(&'a ReturnStatement),
    IfStatement(&'a IfStatement),
    WhileStatement(&'a WhileStatement),
    DoStatement(&'a DoStatement),
    EmptyStatement(&'a EmptyStatement),
    BreakStatement(&'a JumpStatement),
    ContinueStatement(&'a JumpStatement),
    ThrowStatement(&'a ThrowStatement),
    /// A construct with no modelled children.
    Opaque(NodeKind, &'a OpaqueNode),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::CompilationUnit(_) => NodeKind::CompilationUnit,
            Node::PackageDeclaration(_) => NodeKind::PackageDeclaration,
            Node::ImportDeclaration(_) => NodeKind::ImportDeclaration,
            Node::TypeDeclaration(t) => match t.declaration_kind {
                TypeDeclarationKind::Class | TypeDeclarationKind::Interface => {
                    NodeKind::TypeDeclaration
                }
                TypeDeclarationKind::Enum => NodeKind::EnumDeclaration,
                TypeDeclarationKind::AnnotationType => NodeKind::AnnotationTypeDeclaration,
            },
            Node::FieldDeclaration(_) => NodeKind::FieldDeclaration,
            Node::MethodDeclaration(_) => NodeKind::MethodDeclaration,
            Node::SingleVariableDeclaration(_) => NodeKind::SingleVariableDeclaration,
            Node::VariableDeclarationFragment(_) => NodeKind::VariableDeclarationFragment,
            Node::Modifier(_) => NodeKind::Modifier,
            Node::Annotation(a) => match a.annotation_kind {
                AnnotationKind::Marker => NodeKind::MarkerAnnotation,
                AnnotationKind::SingleMember => NodeKind::SingleMemberAnnotation,
                AnnotationKind::Normal => NodeKind::NormalAnnotation,
            },
            Node::PrimitiveType(_) => NodeKind::PrimitiveType,
            Node::SimpleType(_) => NodeKind::SimpleType,
            Node::ArrayType(_) => NodeKind::ArrayType,
            Node::ParameterizedType(_) => NodeKind::ParameterizedType,
            Node::SimpleName(_) => NodeKind::SimpleName,
            Node::QualifiedName(_) => NodeKind::QualifiedName,
            Node::NumberLiteral(_) => NodeKind::NumberLiteral,
            Node::StringLiteral(_) => NodeKind::StringLiteral,
            Node::CharacterLiteral(_) => NodeKind::CharacterLiteral,
            Node::BooleanLiteral(_) => NodeKind::BooleanLiteral,
            Node::NullLiteral(_) => NodeKind::NullLiteral,
            Node::ThisExpression(_) => NodeKind::ThisExpression,
            Node::ParenthesizedExpression(_) => NodeKind::ParenthesizedExpression,
            Node::InfixExpression(_) => NodeKind::InfixExpression,
            Node::PrefixExpression(_) => NodeKind::PrefixExpression,
            Node::PostfixExpression(_) => NodeKind::PostfixExpression,
            Node::Assignment(_) => NodeKind::Assignment,
            Node::ConditionalExpression(_) => NodeKind::ConditionalExpression,
            Node::MethodInvocation(_) => NodeKind::MethodInvocation,
            Node::SuperMethodInvocation(_) => NodeKind::SuperMethodInvocation,
            Node::FieldAccess(_) => NodeKind::FieldAccess,
            Node::SuperFieldAccess(_) => NodeKind::SuperFieldAccess,
            Node::ArrayAccess(_) => NodeKind::ArrayAccess,
            Node::ClassInstanceCreation(_) => NodeKind::ClassInstanceCreation,
            Node::CastExpression(_) => NodeKind::CastExpression,
            Node::InstanceofExpression(_) => NodeKind::InstanceofExpression,
            Node::Block(_) => NodeKind::Block,
            Node::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Node::VariableDeclarationStatement(_) => NodeKind::VariableDeclarationStatement,
            Node::ReturnStatement(_) => NodeKind::ReturnStatement,
            Node::IfStatement(_) => NodeKind::IfStatement,
            Node::WhileStatement(_) => NodeKind::WhileStatement,
            Node::DoStatement(_) => NodeKind::DoStatement,
            Node::EmptyStatement(_) => NodeKind::EmptyStatement,
            Node::BreakStatement(_) => NodeKind::BreakStatement,
            Node::ContinueStatement(_) => NodeKind::ContinueStatement,
            Node::ThrowStatement(_) => NodeKind::ThrowStatement,
            Node::Opaque(kind, _) => *kind,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Node::CompilationUnit(n) => n.range,
            Node::PackageDeclaration(n) => n.range,
            Node::ImportDeclaration(n) => n.range,
            Node::TypeDeclaration(n) => n.range,
            Node::FieldDeclaration(n) => n.range,
            Node::MethodDeclaration(n) => n.range,
            Node::SingleVariableDeclaration(n) => n.range,
            Node::VariableDeclarationFragment(n) => n.range,
            Node::Modifier(n) => n.range,
            Node::Annotation(n) => n.range,
            Node::PrimitiveType(n) => n.range,
            Node::SimpleType(n) => n.range,
            Node::ArrayType(n) => n.range,
            Node::ParameterizedType(n) => n.range,
            Node::SimpleName(n) => n.range,
            Node::QualifiedName(n) => n.range,
            Node::NumberLiteral(n) | Node::StringLiteral(n) | Node::CharacterLiteral(n) => n.range,
            Node::BooleanLiteral(n) => n.range,
            Node::NullLiteral(n) => n.range,
            Node::ThisExpression(n) => n.range,
            Node::ParenthesizedExpression(n) => n.range,
            Node::InfixExpression(n) => n.range,
            Node::PrefixExpression(n) => n.range,
            Node::PostfixExpression(n) => n.range,
            Node::Assignment(n) => n.range,
            Node::ConditionalExpression(n) => n.range,
            Node::MethodInvocation(n) => n.range,
            Node::SuperMethodInvocation(n) => n.range,
            Node::FieldAccess(n) => n.range,
            Node::SuperFieldAccess(n) => n.range,
            Node::ArrayAccess(n) => n.range,
            Node::ClassInstanceCreation(n) => n.range,
            Node::CastExpression(n) => n.range,
            Node::InstanceofExpression(n) => n.range,
            Node::Block(n) => n.range,
            Node::ExpressionStatement(n) => n.range,
            Node::VariableDeclarationStatement(n) => n.range,
            Node::ReturnStatement(n) => n.range,
            Node::IfStatement(n) => n.range,
            Node::WhileStatement(n) => n.range,
            Node::DoStatement(n) => n.range,
            Node::EmptyStatement(n) => n.range,
            Node::BreakStatement(n) | Node::ContinueStatement(n) => n.range,
            Node::ThrowStatement(n) => n.range,
            Node::Opaque(_, n) => n.range,
        }
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        match expression {
            Expression::SimpleName(n) => Node::SimpleName(n),
            Expression::QualifiedName(n) => Node::QualifiedName(n),
            Expression::NumberLiteral(n) => Node::NumberLiteral(n),
            Expression::StringLiteral(n) => Node::StringLiteral(n),
            Expression::CharacterLiteral(n) => Node::CharacterLiteral(n),
            Expression::BooleanLiteral(n) => Node::BooleanLiteral(n),
            Expression::NullLiteral(n) => Node::NullLiteral(n),
            Expression::This(n) => Node::ThisExpression(n),
            Expression::Parenthesized(n) => Node::ParenthesizedExpression(n),
            Expression::Infix(n) => Node::InfixExpression(n),
            Expression::Prefix(n) => Node::PrefixExpression(n),
            Expression::Postfix(n) => Node::PostfixExpression(n),
            Expression::Assignment(n) => Node::Assignment(n),
            Expression::Conditional(n) => Node::ConditionalExpression(n),
            Expression::MethodInvocation(n) => Node::MethodInvocation(n),
            Expression::SuperMethodInvocation(n) => Node::SuperMethodInvocation(n),
            Expression::FieldAccess(n) => Node::FieldAccess(n),
            Expression::SuperFieldAccess(n) => Node::SuperFieldAccess(n),
            Expression::ArrayAccess(n) => Node::ArrayAccess(n),
            Expression::ClassInstanceCreation(n) => Node::ClassInstanceCreation(n),
            Expression::Cast(n) => Node::CastExpression(n),
            Expression::Instanceof(n) => Node::InstanceofExpression(n),
            Expression::ArrayCreation(n) => Node::Opaque(NodeKind::ArrayCreation, n),
            Expression::ArrayInitializer(n) => Node::Opaque(NodeKind::ArrayInitializer, n),
            Expression::Lambda(n) => Node::Opaque(NodeKind::LambdaExpression, n),
            Expression::MethodReference(n) => Node::Opaque(NodeKind::MethodReference, n),
            Expression::TypeLiteral(n) => Node::Opaque(NodeKind::TypeLiteral, n),
        }
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        match statement {
            Statement::Block(n) => Node::Block(n),
            Statement::Expression(n) => Node::ExpressionStatement(n),
            Statement::VariableDeclaration(n) => Node::VariableDeclarationStatement(n),
            Statement::Return(n) => Node::ReturnStatement(n),
            Statement::If(n) => Node::IfStatement(n),
            Statement::While(n) => Node::WhileStatement(n),
            Statement::Do(n) => Node::DoStatement(n),
            Statement::Empty(n) => Node::EmptyStatement(n),
            Statement::Break(n) => Node::BreakStatement(n),
            Statement::Continue(n) => Node::ContinueStatement(n),
            Statement::Throw(n) => Node::ThrowStatement(n),
            Statement::For(n) => Node::Opaque(NodeKind::ForStatement, n),
            Statement::EnhancedFor(n) => Node::Opaque(NodeKind::EnhancedForStatement, n),
            Statement::Switch(n) => Node::Opaque(NodeKind::SwitchStatement, n),
            Statement::Try(n) => Node::Opaque(NodeKind::TryStatement, n),
            Statement::Synchronized(n) => Node::Opaque(NodeKind::SynchronizedStatement, n),
            Statement::Labeled(n) => Node::Opaque(NodeKind::LabeledStatement, n),
            Statement::Assert(n) => Node::Opaque(NodeKind::AssertStatement, n),
            Statement::ConstructorInvocation(n) => {
                Node::Opaque(NodeKind::ConstructorInvocation, n)
            }
            Statement::SuperConstructorInvocation(n) => {
                Node::Opaque(NodeKind::SuperConstructorInvocation, n)
            }
            Statement::TypeDeclarationStatement(n) => {
                Node::Opaque(NodeKind::TypeDeclarationStatement, n)
            }
        }
    }
}

impl<'a> From<&'a BodyDeclaration> for Node<'a> {
    fn from(declaration: &'a BodyDeclaration) -> Self {
        match declaration {
            BodyDeclaration::Field(n) => Node::FieldDeclaration(n),
            BodyDeclaration::Method(n) => Node::MethodDeclaration(n),
            BodyDeclaration::Type(n) => Node::TypeDeclaration(n),
            BodyDeclaration::Initializer(n) => Node::Opaque(NodeKind::Initializer, n),
        }
    }
}

impl<'a> From<&'a Type> for Node<'a> {
    fn from(ty: &'a Type) -> Self {
        match ty {
            Type::Primitive(n) => Node::PrimitiveType(n),
            Type::Simple(n) => Node::SimpleType(n),
            Type::Array(n) => Node::ArrayType(n),
            Type::Parameterized(n) => Node::ParameterizedType(n),
            Type::Wildcard(n) => Node::Opaque(NodeKind::WildcardType, n),
        }
    }
}

impl<'a> From<&'a Name> for Node<'a> {
    fn from(name: &'a Name) -> Self {
        match name {
            Name::Simple(n) => Node::SimpleName(n),
            Name::Qualified(n) => Node::QualifiedName(n),
        }
    }
}

impl<'a> From<&'a ExtendedModifier> for Node<'a> {
    fn from(modifier: &'a ExtendedModifier) -> Self {
        match modifier {
            ExtendedModifier::Modifier(n) => Node::Modifier(n),
            ExtendedModifier::Annotation(n) => Node::Annotation(n),
        }
    }
}
