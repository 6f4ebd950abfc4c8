//! Operator tokens and precedence per target.
//!
//! A `None` token means the target has no operator with the same meaning;
//! the writer then either applies a rewrite rule or reports the construct.

use javelin_ast::{AssignmentOperator, InfixOperator, PostfixOperator, PrefixOperator};
use javelin_options::TargetLanguage;

/// Precedence given to operators that are written as function calls.
const CALL_PRECEDENCE: u8 = u8::MAX;

pub fn infix_token(target: TargetLanguage, operator: InfixOperator) -> Option<&'static str> {
    match (target, operator) {
        (TargetLanguage::Swift | TargetLanguage::Cpp, InfixOperator::RightShiftUnsigned) => None,
        _ => Some(operator.token()),
    }
}

pub fn assignment_token(target: TargetLanguage, operator: AssignmentOperator) -> Option<&'static str> {
    match (target, operator) {
        (
            TargetLanguage::Swift | TargetLanguage::Cpp,
            AssignmentOperator::RightShiftUnsignedAssign,
        ) => None,
        _ => Some(operator.token()),
    }
}

pub fn prefix_token(target: TargetLanguage, operator: PrefixOperator) -> Option<&'static str> {
    match (target, operator) {
        (TargetLanguage::Swift, PrefixOperator::Increment | PrefixOperator::Decrement) => None,
        _ => Some(operator.token()),
    }
}

pub fn postfix_token(target: TargetLanguage, operator: PostfixOperator) -> Option<&'static str> {
    match target {
        TargetLanguage::Swift => None,
        _ => Some(operator.token()),
    }
}

/// The operator's binding strength in the target grammar; higher binds tighter.
pub fn target_precedence(target: TargetLanguage, operator: InfixOperator) -> u8 {
    if infix_token(target, operator).is_none() {
        return CALL_PRECEDENCE;
    }
    match target {
        TargetLanguage::CSharp | TargetLanguage::Cpp => operator.precedence(),
        TargetLanguage::Swift => match operator {
            InfixOperator::LeftShift
            | InfixOperator::RightShiftSigned
            | InfixOperator::RightShiftUnsigned => 160,
            InfixOperator::Times
            | InfixOperator::Divide
            | InfixOperator::Remainder
            | InfixOperator::And => 150,
            InfixOperator::Plus | InfixOperator::Minus | InfixOperator::Or | InfixOperator::Xor => 140,
            InfixOperator::Less
            | InfixOperator::Greater
            | InfixOperator::LessEquals
            | InfixOperator::GreaterEquals
            | InfixOperator::Equals
            | InfixOperator::NotEquals => 130,
            InfixOperator::ConditionalAnd => 120,
            InfixOperator::ConditionalOr => 110,
        },
    }
}

/// Operators the target refuses to chain without parentheses.
pub fn is_non_associative(target: TargetLanguage, operator: InfixOperator) -> bool {
    target == TargetLanguage::Swift
        && matches!(
            operator,
            InfixOperator::Less
                | InfixOperator::Greater
                | InfixOperator::LessEquals
                | InfixOperator::GreaterEquals
                | InfixOperator::Equals
                | InfixOperator::NotEquals
        )
}

/// Whether an unparenthesized infix operand would be regrouped by the target
/// grammar, so that it has to be wrapped in parentheses to keep its meaning.
///
/// `child` is an operand of `parent` in the tree, which means Java binds it
/// tighter (or equally tight on the left, as Java infix operators are
/// left-associative).
pub fn needs_parentheses(
    target: TargetLanguage,
    parent: InfixOperator,
    child: InfixOperator,
    is_left_operand: bool,
) -> bool {
    if infix_token(target, parent).is_none() {
        return false;
    }
    let parent_precedence = target_precedence(target, parent);
    let child_precedence = target_precedence(target, child);
    if child_precedence != parent_precedence {
        return child_precedence < parent_precedence;
    }
    !is_left_operand || is_non_associative(target, parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_shift_has_no_token_outside_csharp() {
        assert_eq!(
            infix_token(TargetLanguage::CSharp, InfixOperator::RightShiftUnsigned),
            Some(">>>")
        );
        assert_eq!(infix_token(TargetLanguage::Swift, InfixOperator::RightShiftUnsigned), None);
        assert_eq!(infix_token(TargetLanguage::Cpp, InfixOperator::RightShiftUnsigned), None);
        assert_eq!(infix_token(TargetLanguage::Swift, InfixOperator::ConditionalAnd), Some("&&"));
    }

    #[test]
    fn test_swift_has_no_increment() {
        assert_eq!(prefix_token(TargetLanguage::Swift, PrefixOperator::Increment), None);
        assert_eq!(prefix_token(TargetLanguage::Swift, PrefixOperator::Not), Some("!"));
        assert_eq!(postfix_token(TargetLanguage::Swift, PostfixOperator::Decrement), None);
        assert_eq!(postfix_token(TargetLanguage::CSharp, PostfixOperator::Decrement), Some("--"));
    }

    #[test]
    fn test_assignment_tokens() {
        assert_eq!(
            assignment_token(TargetLanguage::Cpp, AssignmentOperator::RightShiftUnsignedAssign),
            None
        );
        assert_eq!(
            assignment_token(TargetLanguage::Swift, AssignmentOperator::PlusAssign),
            Some("+=")
        );
    }

    #[test]
    fn test_c_family_never_needs_parentheses() {
        // `a + b << 2` is `(a + b) << 2` in Java, C# and C++ alike.
        assert!(!needs_parentheses(
            TargetLanguage::CSharp,
            InfixOperator::LeftShift,
            InfixOperator::Plus,
            true
        ));
    }

    #[test]
    fn test_swift_regroups_shift_and_bitwise() {
        // Swift binds `<<` tighter than `+`.
        assert!(needs_parentheses(
            TargetLanguage::Swift,
            InfixOperator::LeftShift,
            InfixOperator::Plus,
            true
        ));
        // Java `a & b == c` is `a & (b == c)`; Swift binds `&` tighter.
        assert!(needs_parentheses(
            TargetLanguage::Swift,
            InfixOperator::And,
            InfixOperator::Equals,
            false
        ));
        // `a * b + c` keeps its grouping.
        assert!(!needs_parentheses(
            TargetLanguage::Swift,
            InfixOperator::Plus,
            InfixOperator::Times,
            true
        ));
    }

    #[test]
    fn test_swift_comparisons_do_not_chain() {
        assert!(needs_parentheses(
            TargetLanguage::Swift,
            InfixOperator::Equals,
            InfixOperator::Less,
            true
        ));
    }

    #[test]
    fn test_rewritten_operators_never_need_parentheses() {
        assert!(!needs_parentheses(
            TargetLanguage::Swift,
            InfixOperator::Plus,
            InfixOperator::RightShiftUnsigned,
            true
        ));
        assert!(!needs_parentheses(
            TargetLanguage::Swift,
            InfixOperator::RightShiftUnsigned,
            InfixOperator::Plus,
            true
        ));
    }
}
