//! Modifier keyword rules per target and declaration context.

use javelin_ast::ModifierKeyword;
use javelin_options::TargetLanguage;

/// The kind of declaration a modifier list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationContext {
    Type,
    Field,
    Method,
    Local,
    Parameter,
}

impl DeclarationContext {
    pub fn is_variable(self) -> bool {
        matches!(
            self,
            DeclarationContext::Field | DeclarationContext::Local | DeclarationContext::Parameter
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierRule {
    Keep,
    Replace(&'static str),
    Drop,
    Unsupported,
}

pub fn modifier_rule(
    target: TargetLanguage,
    keyword: ModifierKeyword,
    context: DeclarationContext,
) -> ModifierRule {
    use DeclarationContext as Ctx;
    use ModifierKeyword as Kw;

    match target {
        TargetLanguage::CSharp => match (keyword, context) {
            (Kw::Public | Kw::Protected | Kw::Private | Kw::Abstract | Kw::Volatile, _) => {
                ModifierRule::Keep
            }
            // A static nested class in Java is a plain nested class in C#.
            (Kw::Static, Ctx::Type) => ModifierRule::Drop,
            (Kw::Static, _) => ModifierRule::Keep,
            (Kw::Final, Ctx::Type) => ModifierRule::Replace("sealed"),
            (Kw::Final, Ctx::Field) => ModifierRule::Replace("readonly"),
            (Kw::Final, _) => ModifierRule::Drop,
            (
                Kw::Native | Kw::Synchronized | Kw::Transient | Kw::Strictfp | Kw::Default,
                _,
            ) => ModifierRule::Unsupported,
        },
        TargetLanguage::Swift => match (keyword, context) {
            (Kw::Public | Kw::Private, _) => ModifierRule::Keep,
            (Kw::Protected, _) => ModifierRule::Replace("internal"),
            (Kw::Static, Ctx::Type) => ModifierRule::Drop,
            (Kw::Static, _) => ModifierRule::Keep,
            (Kw::Final, Ctx::Type | Ctx::Method) => ModifierRule::Keep,
            // Final variables are written as `let` instead.
            (Kw::Final, _) => ModifierRule::Drop,
            (
                Kw::Abstract
                | Kw::Volatile
                | Kw::Native
                | Kw::Synchronized
                | Kw::Transient
                | Kw::Strictfp
                | Kw::Default,
                _,
            ) => ModifierRule::Unsupported,
        },
        TargetLanguage::Cpp => match (keyword, context) {
            (Kw::Final, Ctx::Local | Ctx::Parameter) => ModifierRule::Replace("const"),
            _ => ModifierRule::Unsupported,
        },
    }
}
