//! Translation failures.

use javelin_ast::{Node, NodeKind};
use javelin_core::text::TextSpan;
use javelin_diagnostics::{messages, Diagnostic, DiagnosticMessage};
use javelin_scanner::CursorError;
use std::fmt;
use thiserror::Error;

pub type TranslateResult<T = ()> = Result<T, TranslateError>;

/// Why a file could not be translated. Every variant aborts the file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A construct with no translation rule for the active target.
    #[error("{message}")]
    Unsupported {
        message: String,
        code: u32,
        kind: NodeKind,
        span: TextSpan,
    },

    /// The tree and the source text disagree.
    #[error("expected `{expected}` but found `{found}`")]
    Desync {
        expected: String,
        found: String,
        span: TextSpan,
    },

    #[error("no binding found for '{name}'")]
    MissingBinding { name: String, span: TextSpan },

    #[error("writing to the output failed")]
    Output(#[from] fmt::Error),
}

impl TranslateError {
    /// An `Unsupported` error at `node`, with text from the message table.
    pub fn unsupported(message: &DiagnosticMessage, args: &[&str], node: Node<'_>) -> Self {
        TranslateError::Unsupported {
            message: message.format(args),
            code: message.code,
            kind: node.kind(),
            span: node.range().to_span(),
        }
    }

    pub fn missing_binding(name: impl Into<String>, node: Node<'_>) -> Self {
        TranslateError::MissingBinding {
            name: name.into(),
            span: node.range().to_span(),
        }
    }

    pub fn span(&self) -> Option<TextSpan> {
        match self {
            TranslateError::Unsupported { span, .. }
            | TranslateError::Desync { span, .. }
            | TranslateError::MissingBinding { span, .. } => Some(*span),
            TranslateError::Output(_) => None,
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            TranslateError::Unsupported { code, .. } => *code,
            TranslateError::Desync { .. } => messages::EXPECTED_0_BUT_FOUND_1.code,
            TranslateError::MissingBinding { .. } => messages::NO_BINDING_FOUND_FOR_0.code,
            TranslateError::Output(_) => messages::OUTPUT_SINK_FAILED.code,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, TranslateError::Unsupported { .. })
    }

    /// The error as a diagnostic located in `file`.
    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        let diagnostic = match self {
            TranslateError::Unsupported { message, code, .. } => Diagnostic::from_text(
                *code,
                javelin_diagnostics::DiagnosticCategory::Error,
                message.clone(),
            ),
            TranslateError::Desync {
                expected, found, ..
            } => Diagnostic::new(&messages::EXPECTED_0_BUT_FOUND_1, &[expected.as_str(), found.as_str()]),
            TranslateError::MissingBinding { name, .. } => {
                Diagnostic::new(&messages::NO_BINDING_FOUND_FOR_0, &[name.as_str()])
            }
            TranslateError::Output(_) => Diagnostic::new(&messages::OUTPUT_SINK_FAILED, &[]),
        };
        let diagnostic = diagnostic.in_file(file);
        match self.span() {
            Some(span) => diagnostic.at(span),
            None => diagnostic,
        }
    }
}

impl From<CursorError> for TranslateError {
    fn from(error: CursorError) -> Self {
        match error {
            CursorError::Mismatch {
                expected,
                found,
                pos,
            } => {
                let span = TextSpan::new(pos, found.len() as u32);
                TranslateError::Desync {
                    expected,
                    found,
                    span,
                }
            }
            CursorError::UnterminatedComment { pos } => TranslateError::Desync {
                expected: "*/".to_string(),
                found: "<end of file>".to_string(),
                span: TextSpan::empty(pos),
            },
            CursorError::OutOfBounds { pos, len } => TranslateError::Desync {
                expected: format!("offset {}", pos),
                found: format!("text of length {}", len),
                span: TextSpan::empty(pos.min(len)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_ast::SimpleName;
    use javelin_core::text::TextRange;

    #[test]
    fn test_unsupported_carries_kind_and_span() {
        let name = SimpleName {
            range: TextRange::new(4, 9),
            identifier: "inner".into(),
        };
        let err = TranslateError::unsupported(
            &messages::_0_HAS_NO_EQUIVALENT_IN_1,
            &["inner", "Swift"],
            Node::SimpleName(&name),
        );
        assert_eq!(err.to_string(), "'inner' has no equivalent in Swift.");
        assert_eq!(err.span(), Some(TextSpan::new(4, 5)));
        assert_eq!(err.code(), 3017);
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_cursor_mismatch_becomes_desync() {
        let err: TranslateError = CursorError::Mismatch {
            expected: ";".into(),
            found: ")".into(),
            pos: 12,
        }
        .into();
        assert_eq!(
            err,
            TranslateError::Desync {
                expected: ";".into(),
                found: ")".into(),
                span: TextSpan::new(12, 1),
            }
        );
    }

    #[test]
    fn test_to_diagnostic() {
        let err = TranslateError::MissingBinding {
            name: "add".into(),
            span: TextSpan::new(3, 3),
        };
        let diagnostic = err.to_diagnostic("A.java");
        assert_eq!(diagnostic.code, 4002);
        assert_eq!(diagnostic.file.as_deref(), Some("A.java"));
        assert_eq!(diagnostic.span, Some(TextSpan::new(3, 3)));
        assert!(diagnostic.is_error());
    }
}
