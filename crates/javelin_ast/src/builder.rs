//! Building trees by hand against a piece of source text.
//!
//! `TreeBuilder` plays the part of the front end in tests and benchmarks: it
//! walks the source left to right, locating each token as nodes are created
//! in source order, so every node gets the exact range a parser would give
//! it. Composite nodes find their closing token (`)`, `;`, `}`) after the
//! last child that was built.
//!
//! Methods panic when a token cannot be found, since a fixture that does not
//! match its source text is a bug in the fixture.

use crate::node::*;
use crate::types::*;
use javelin_core::chars::is_identifier_part;
use javelin_core::text::{TextPos, TextRange};

pub struct TreeBuilder<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> TreeBuilder<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// The offset the next search starts at.
    pub fn position(&self) -> TextPos {
        self.pos as TextPos
    }

    /// Locate the next occurrence of `token` and move past it.
    pub fn token(&mut self, token: &str) -> TextRange {
        let start = match self.source[self.pos..].find(token) {
            Some(offset) => self.pos + offset,
            None => panic!(
                "token `{}` not found after offset {} in {:?}",
                token, self.pos, self.source
            ),
        };
        self.pos = start + token.len();
        TextRange::new(start as TextPos, self.pos as TextPos)
    }

    /// Locate the next occurrence of `word` that is not part of a longer identifier.
    pub fn word(&mut self, word: &str) -> TextRange {
        let mut from = self.pos;
        loop {
            let start = match self.source[from..].find(word) {
                Some(offset) => from + offset,
                None => panic!(
                    "word `{}` not found after offset {} in {:?}",
                    word, self.pos, self.source
                ),
            };
            let end = start + word.len();
            let before_ok = self.source[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !is_identifier_part(c));
            let after_ok = self.source[end..]
                .chars()
                .next()
                .map_or(true, |c| !is_identifier_part(c));
            if before_ok && after_ok {
                self.pos = end;
                return TextRange::new(start as TextPos, end as TextPos);
            }
            from = end;
        }
    }

    fn close(&mut self, token: &str) -> TextPos {
        self.token(token).end
    }

    // ========================================================================
    // Names
    // ========================================================================

    pub fn simple_name(&mut self, identifier: &str) -> SimpleName {
        SimpleName {
            range: self.word(identifier),
            identifier: identifier.to_string(),
        }
    }

    /// A simple or qualified name from dotted text, e.g. `java.util.List`.
    pub fn name(&mut self, dotted: &str) -> Name {
        let mut parts = dotted.split('.');
        let first = parts.next().unwrap_or_default();
        let mut name = Name::Simple(self.simple_name(first));
        for part in parts {
            let simple = self.simple_name(part);
            name = Name::Qualified(QualifiedName {
                range: TextRange::new(name.range().pos, simple.range.end),
                qualifier: Box::new(name),
                name: simple,
                binding: None,
            });
        }
        name
    }

    pub fn name_expr(&mut self, dotted: &str) -> Expression {
        Expression::from(self.name(dotted))
    }

    /// A qualified name that denotes a field, e.g. `Math.PI`.
    pub fn field_name(&mut self, dotted: &str, binding: MemberBinding) -> Expression {
        match self.name(dotted) {
            Name::Qualified(mut qualified) => {
                qualified.binding = Some(binding);
                Expression::QualifiedName(qualified)
            }
            Name::Simple(simple) => Expression::SimpleName(simple),
        }
    }

    // ========================================================================
    // Literals & keyword expressions
    // ========================================================================

    pub fn number(&mut self, token: &str) -> Expression {
        Expression::NumberLiteral(self.literal(token))
    }

    /// `token` includes the quotes.
    pub fn string(&mut self, token: &str) -> Expression {
        Expression::StringLiteral(self.literal(token))
    }

    /// `token` includes the quotes.
    pub fn character(&mut self, token: &str) -> Expression {
        Expression::CharacterLiteral(self.literal(token))
    }

    fn literal(&mut self, token: &str) -> Literal {
        Literal {
            range: self.token(token),
            token: token.to_string(),
        }
    }

    pub fn boolean(&mut self, value: bool) -> Expression {
        let range = self.word(if value { "true" } else { "false" });
        Expression::BooleanLiteral(BooleanLiteral { range, value })
    }

    pub fn null(&mut self) -> Expression {
        Expression::NullLiteral(NullLiteral {
            range: self.word("null"),
        })
    }

    pub fn this(&mut self) -> Expression {
        Expression::This(ThisExpression {
            range: self.word("this"),
            qualifier: None,
        })
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn parenthesized(&mut self, open: TextRange, expression: Expression) -> Expression {
        let end = self.close(")");
        Expression::Parenthesized(ParenthesizedExpression {
            range: TextRange::new(open.pos, end),
            expression: Box::new(expression),
        })
    }

    pub fn infix(&mut self, left: Expression, operator: InfixOperator, right: Expression) -> Expression {
        self.infix_chain(operator, vec![left, right])
    }

    /// `a op b op c ...` as one node with extended operands.
    pub fn infix_chain(&mut self, operator: InfixOperator, operands: Vec<Expression>) -> Expression {
        assert!(operands.len() >= 2, "an infix expression needs two operands");
        let mut operands = operands.into_iter();
        let left = operands.next().map(Box::new);
        let right = operands.next().map(Box::new);
        let extended_operands: Vec<Expression> = operands.collect();
        match (left, right) {
            (Some(left), Some(right)) => {
                let end = extended_operands
                    .last()
                    .map_or(right.range().end, |e| e.range().end);
                Expression::Infix(InfixExpression {
                    range: TextRange::new(left.range().pos, end),
                    left,
                    operator,
                    right,
                    extended_operands,
                })
            }
            _ => unreachable!(),
        }
    }

    pub fn prefix(&mut self, operator_range: TextRange, operator: PrefixOperator, operand: Expression) -> Expression {
        Expression::Prefix(PrefixExpression {
            range: TextRange::new(operator_range.pos, operand.range().end),
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn postfix(&mut self, operand: Expression, operator: PostfixOperator) -> Expression {
        let end = self.close(operator.token());
        Expression::Postfix(PostfixExpression {
            range: TextRange::new(operand.range().pos, end),
            operand: Box::new(operand),
            operator,
        })
    }

    pub fn assignment(&mut self, left: Expression, operator: AssignmentOperator, right: Expression) -> Expression {
        Expression::Assignment(Assignment {
            range: TextRange::new(left.range().pos, right.range().end),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn conditional(&mut self, condition: Expression, then_expression: Expression, else_expression: Expression) -> Expression {
        Expression::Conditional(ConditionalExpression {
            range: TextRange::new(condition.range().pos, else_expression.range().end),
            condition: Box::new(condition),
            then_expression: Box::new(then_expression),
            else_expression: Box::new(else_expression),
        })
    }

    /// `expression.name(arguments)` or `name(arguments)`.
    pub fn invocation(
        &mut self,
        expression: Option<Expression>,
        name: SimpleName,
        arguments: Vec<Expression>,
        binding: Option<MemberBinding>,
    ) -> Expression {
        let start = expression.as_ref().map_or(name.range.pos, |e| e.range().pos);
        let end = self.close(")");
        Expression::MethodInvocation(MethodInvocation {
            range: TextRange::new(start, end),
            expression: expression.map(Box::new),
            type_arguments: Vec::new(),
            name,
            arguments,
            binding,
        })
    }

    /// `super.name(arguments)`; `super_keyword` is the range of `super`.
    pub fn super_invocation(
        &mut self,
        super_keyword: TextRange,
        name: SimpleName,
        arguments: Vec<Expression>,
        binding: Option<MemberBinding>,
    ) -> Expression {
        let end = self.close(")");
        Expression::SuperMethodInvocation(SuperMethodInvocation {
            range: TextRange::new(super_keyword.pos, end),
            qualifier: None,
            type_arguments: Vec::new(),
            name,
            arguments,
            binding,
        })
    }

    pub fn field_access(&mut self, expression: Expression, name: SimpleName, binding: Option<MemberBinding>) -> Expression {
        Expression::FieldAccess(FieldAccess {
            range: TextRange::new(expression.range().pos, name.range.end),
            expression: Box::new(expression),
            name,
            binding,
        })
    }

    pub fn super_field_access(&mut self, super_keyword: TextRange, name: SimpleName, binding: Option<MemberBinding>) -> Expression {
        Expression::SuperFieldAccess(SuperFieldAccess {
            range: TextRange::new(super_keyword.pos, name.range.end),
            qualifier: None,
            name,
            binding,
        })
    }

    pub fn array_access(&mut self, array: Expression, index: Expression) -> Expression {
        let end = self.close("]");
        Expression::ArrayAccess(ArrayAccess {
            range: TextRange::new(array.range().pos, end),
            array: Box::new(array),
            index: Box::new(index),
        })
    }

    /// `new T(arguments)`; `new_keyword` is the range of `new`.
    pub fn new_instance(&mut self, new_keyword: TextRange, ty: Type, arguments: Vec<Expression>) -> Expression {
        let end = self.close(")");
        Expression::ClassInstanceCreation(ClassInstanceCreation {
            range: TextRange::new(new_keyword.pos, end),
            expression: None,
            type_arguments: Vec::new(),
            ty,
            arguments,
            anonymous_class_declaration: None,
        })
    }

    /// `(T) expression`; `open` is the range of the opening parenthesis.
    pub fn cast(&mut self, open: TextRange, ty: Type, expression: Expression) -> Expression {
        Expression::Cast(CastExpression {
            range: TextRange::new(open.pos, expression.range().end),
            ty,
            expression: Box::new(expression),
        })
    }

    pub fn instanceof(&mut self, left: Expression, right_operand: Type) -> Expression {
        Expression::Instanceof(InstanceofExpression {
            range: TextRange::new(left.range().pos, right_operand.range().end),
            left: Box::new(left),
            right_operand,
        })
    }

    /// A node spanning from the next `start` token to the following `end` token.
    pub fn opaque(&mut self, start: &str, end: &str) -> OpaqueNode {
        let pos = self.token(start).pos;
        let end = self.close(end);
        OpaqueNode {
            range: TextRange::new(pos, end),
        }
    }

    // ========================================================================
    // Types
    // ========================================================================

    pub fn primitive_type(&mut self, keyword: &str) -> Type {
        let primitive = match PrimitiveKind::from_keyword(keyword) {
            Some(primitive) => primitive,
            None => panic!("`{}` is not a primitive type", keyword),
        };
        Type::Primitive(PrimitiveType {
            range: self.word(keyword),
            primitive,
        })
    }

    pub fn simple_type(&mut self, dotted: &str, binding: Option<TypeBinding>) -> Type {
        let name = self.name(dotted);
        Type::Simple(SimpleType {
            range: name.range(),
            name,
            binding,
        })
    }

    /// Wrap `element_type` in `dimensions` pairs of brackets found after it.
    pub fn array_type(&mut self, element_type: Type, dimensions: u32) -> Type {
        let mut end = element_type.range().end;
        for _ in 0..dimensions {
            end = self.close("]");
        }
        Type::Array(ArrayType {
            range: TextRange::new(element_type.range().pos, end),
            element_type: Box::new(element_type),
            dimensions,
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn expression_statement(&mut self, expression: Expression) -> Statement {
        let end = self.close(";");
        Statement::Expression(ExpressionStatement {
            range: TextRange::new(expression.range().pos, end),
            expression,
        })
    }

    /// `open` is the range of the opening brace.
    pub fn block(&mut self, open: TextRange, statements: Vec<Statement>) -> Block {
        let end = self.close("}");
        Block {
            range: TextRange::new(open.pos, end),
            statements,
        }
    }

    pub fn block_statement(&mut self, open: TextRange, statements: Vec<Statement>) -> Statement {
        Statement::Block(self.block(open, statements))
    }

    pub fn return_statement(&mut self, keyword: TextRange, expression: Option<Expression>) -> Statement {
        let end = self.close(";");
        Statement::Return(ReturnStatement {
            range: TextRange::new(keyword.pos, end),
            expression,
        })
    }

    pub fn if_statement(
        &mut self,
        keyword: TextRange,
        expression: Expression,
        then_statement: Statement,
        else_statement: Option<Statement>,
    ) -> Statement {
        let end = else_statement
            .as_ref()
            .map_or(then_statement.range().end, |s| s.range().end);
        Statement::If(IfStatement {
            range: TextRange::new(keyword.pos, end),
            expression,
            then_statement: Box::new(then_statement),
            else_statement: else_statement.map(Box::new),
        })
    }

    pub fn while_statement(&mut self, keyword: TextRange, expression: Expression, body: Statement) -> Statement {
        Statement::While(WhileStatement {
            range: TextRange::new(keyword.pos, body.range().end),
            expression,
            body: Box::new(body),
        })
    }

    pub fn do_statement(&mut self, keyword: TextRange, body: Statement, expression: Expression) -> Statement {
        let end = self.close(";");
        Statement::Do(DoStatement {
            range: TextRange::new(keyword.pos, end),
            body: Box::new(body),
            expression,
        })
    }

    pub fn empty_statement(&mut self) -> Statement {
        Statement::Empty(EmptyStatement {
            range: self.token(";"),
        })
    }

    pub fn break_statement(&mut self, label: Option<&str>) -> Statement {
        let (range, label) = self.jump("break", label);
        Statement::Break(JumpStatement { range, label })
    }

    pub fn continue_statement(&mut self, label: Option<&str>) -> Statement {
        let (range, label) = self.jump("continue", label);
        Statement::Continue(JumpStatement { range, label })
    }

    fn jump(&mut self, keyword: &str, label: Option<&str>) -> (TextRange, Option<SimpleName>) {
        let start = self.word(keyword).pos;
        let label = label.map(|l| self.simple_name(l));
        let end = self.close(";");
        (TextRange::new(start, end), label)
    }

    pub fn throw_statement(&mut self, keyword: TextRange, expression: Expression) -> Statement {
        let end = self.close(";");
        Statement::Throw(ThrowStatement {
            range: TextRange::new(keyword.pos, end),
            expression,
        })
    }

    pub fn fragment(&mut self, name: SimpleName, initializer: Option<Expression>) -> VariableDeclarationFragment {
        let end = initializer.as_ref().map_or(name.range.end, |i| i.range().end);
        VariableDeclarationFragment {
            range: TextRange::new(name.range.pos, end),
            name,
            extra_dimensions: 0,
            initializer,
        }
    }

    pub fn variable_statement(
        &mut self,
        modifiers: Vec<ExtendedModifier>,
        ty: Type,
        fragments: Vec<VariableDeclarationFragment>,
    ) -> Statement {
        let start = modifiers.first().map_or(ty.range().pos, |m| m.range().pos);
        let end = self.close(";");
        Statement::VariableDeclaration(VariableDeclarationStatement {
            range: TextRange::new(start, end),
            modifiers,
            ty,
            fragments,
        })
    }

    // ========================================================================
    // Modifiers
    // ========================================================================

    pub fn modifier(&mut self, keyword: ModifierKeyword) -> ExtendedModifier {
        ExtendedModifier::Modifier(Modifier {
            range: self.word(keyword.token()),
            keyword,
        })
    }

    /// `@Name` with an optional resolved binding.
    pub fn marker_annotation(&mut self, dotted: &str, binding: Option<TypeBinding>) -> ExtendedModifier {
        let at = self.token("@");
        let type_name = self.name(dotted);
        ExtendedModifier::Annotation(Annotation {
            range: TextRange::new(at.pos, type_name.range().end),
            annotation_kind: AnnotationKind::Marker,
            type_name,
            binding,
        })
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub fn parameter(
        &mut self,
        modifiers: Vec<ExtendedModifier>,
        ty: Type,
        is_varargs: bool,
        name: SimpleName,
    ) -> SingleVariableDeclaration {
        let start = modifiers.first().map_or(ty.range().pos, |m| m.range().pos);
        SingleVariableDeclaration {
            range: TextRange::new(start, name.range.end),
            modifiers,
            ty,
            is_varargs,
            name,
            extra_dimensions: 0,
        }
    }

    pub fn field(
        &mut self,
        modifiers: Vec<ExtendedModifier>,
        ty: Type,
        fragments: Vec<VariableDeclarationFragment>,
    ) -> BodyDeclaration {
        let start = modifiers.first().map_or(ty.range().pos, |m| m.range().pos);
        let end = self.close(";");
        BodyDeclaration::Field(FieldDeclaration {
            range: TextRange::new(start, end),
            modifiers,
            ty,
            fragments,
        })
    }

    /// A method; without a body the declaration ends at the next `;`.
    pub fn method(
        &mut self,
        modifiers: Vec<ExtendedModifier>,
        return_type: Type,
        name: SimpleName,
        parameters: Vec<SingleVariableDeclaration>,
        thrown_exceptions: Vec<Type>,
        body: Option<Block>,
    ) -> BodyDeclaration {
        let start = modifiers
            .first()
            .map_or(return_type.range().pos, |m| m.range().pos);
        self.method_declaration(start, modifiers, Some(return_type), name, parameters, thrown_exceptions, body)
    }

    pub fn constructor(
        &mut self,
        modifiers: Vec<ExtendedModifier>,
        name: SimpleName,
        parameters: Vec<SingleVariableDeclaration>,
        thrown_exceptions: Vec<Type>,
        body: Block,
    ) -> BodyDeclaration {
        let start = modifiers.first().map_or(name.range.pos, |m| m.range().pos);
        self.method_declaration(start, modifiers, None, name, parameters, thrown_exceptions, Some(body))
    }

    #[allow(clippy::too_many_arguments)]
    fn method_declaration(
        &mut self,
        start: TextPos,
        modifiers: Vec<ExtendedModifier>,
        return_type: Option<Type>,
        name: SimpleName,
        parameters: Vec<SingleVariableDeclaration>,
        thrown_exceptions: Vec<Type>,
        body: Option<Block>,
    ) -> BodyDeclaration {
        let end = match &body {
            Some(block) => block.range.end,
            None => self.close(";"),
        };
        BodyDeclaration::Method(MethodDeclaration {
            range: TextRange::new(start, end),
            modifiers,
            type_parameters: Vec::new(),
            is_constructor: return_type.is_none(),
            return_type,
            name,
            parameters,
            extra_dimensions: 0,
            thrown_exceptions,
            body,
        })
    }

    /// A class or interface; `keyword` is the range of `class`/`interface`.
    #[allow(clippy::too_many_arguments)]
    pub fn type_declaration(
        &mut self,
        modifiers: Vec<ExtendedModifier>,
        keyword: TextRange,
        declaration_kind: TypeDeclarationKind,
        name: SimpleName,
        superclass_type: Option<Type>,
        super_interface_types: Vec<Type>,
        body_declarations: Vec<BodyDeclaration>,
    ) -> TypeDeclaration {
        let start = modifiers.first().map_or(keyword.pos, |m| m.range().pos);
        let end = self.close("}");
        TypeDeclaration {
            range: TextRange::new(start, end),
            declaration_kind,
            modifiers,
            name,
            type_parameters: Vec::new(),
            superclass_type,
            super_interface_types,
            body_declarations,
        }
    }

    pub fn package(&mut self, keyword: TextRange, name: Name) -> PackageDeclaration {
        let end = self.close(";");
        PackageDeclaration {
            range: TextRange::new(keyword.pos, end),
            name,
        }
    }

    /// `keyword` is the range of `import`; on-demand imports end after `.*;`.
    pub fn import(
        &mut self,
        keyword: TextRange,
        name: Name,
        is_static: bool,
        is_on_demand: bool,
        binding: Option<TypeBinding>,
    ) -> ImportDeclaration {
        let end = self.close(";");
        ImportDeclaration {
            range: TextRange::new(keyword.pos, end),
            name,
            is_static,
            is_on_demand,
            binding,
        }
    }

    /// Single-type import of `dotted`, located from the next `import` keyword.
    pub fn single_import(&mut self, dotted: &str, binding: Option<TypeBinding>) -> ImportDeclaration {
        let keyword = self.word("import");
        let name = self.name(dotted);
        self.import(keyword, name, false, false, binding)
    }

    pub fn compilation_unit(
        &mut self,
        package: Option<PackageDeclaration>,
        imports: Vec<ImportDeclaration>,
        types: Vec<TypeDeclaration>,
    ) -> CompilationUnit {
        CompilationUnit {
            range: TextRange::new(0, self.source.len() as TextPos),
            package,
            imports,
            types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_skips_longer_identifiers() {
        let mut b = TreeBuilder::new("xs + x");
        assert_eq!(b.word("x"), TextRange::new(5, 6));
    }

    #[test]
    fn test_qualified_name_ranges() {
        let mut b = TreeBuilder::new("import java.util.List;");
        let import = b.single_import("java.util.List", Some(TypeBinding::new("java.util.List").generic()));
        assert_eq!(import.range, TextRange::new(0, 22));
        assert_eq!(import.name.range(), TextRange::new(7, 21));
        match &import.name {
            Name::Qualified(q) => {
                assert_eq!(q.qualifier.range(), TextRange::new(7, 16));
                assert_eq!(q.name.range, TextRange::new(17, 21));
            }
            Name::Simple(_) => panic!("expected a qualified name"),
        }
    }

    #[test]
    fn test_invocation_range_ends_at_closing_paren() {
        let source = "list.add(f(1))";
        let mut b = TreeBuilder::new(source);
        let target = b.name_expr("list");
        let name = b.simple_name("add");
        let inner_name = b.simple_name("f");
        let one = b.number("1");
        let inner = b.invocation(None, inner_name, vec![one], Some(MemberBinding::static_member()));
        let outer = b.invocation(Some(target), name, vec![inner], Some(MemberBinding::instance()));
        assert_eq!(outer.range(), TextRange::new(0, 14));
        match outer {
            Expression::MethodInvocation(m) => assert_eq!(m.arguments[0].range(), TextRange::new(9, 13)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_infix_chain_covers_all_operands() {
        let mut b = TreeBuilder::new("a + b + c");
        let a = b.name_expr("a");
        let bb = b.name_expr("b");
        let c = b.name_expr("c");
        let expr = b.infix_chain(InfixOperator::Plus, vec![a, bb, c]);
        assert_eq!(expr.range(), TextRange::new(0, 9));
    }
}
