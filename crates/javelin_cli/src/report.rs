//! Rendering translation failures as miette reports with a source snippet.

use javelin_diagnostics::{Diagnostic, DiagnosticCategory};
use miette::{LabeledSpan, NamedSource, Severity, SourceCode, SourceSpan};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TranslationReport {
    code: u32,
    category: DiagnosticCategory,
    message: String,
    source_code: NamedSource<String>,
    span: Option<SourceSpan>,
}

impl TranslationReport {
    pub fn new(diagnostic: &Diagnostic, source_text: &str) -> Self {
        let file = diagnostic.file.clone().unwrap_or_default();
        let span = diagnostic
            .span
            .map(|span| SourceSpan::from((span.start as usize, span.length as usize)));
        Self {
            code: diagnostic.code,
            category: diagnostic.category,
            message: diagnostic.message_text.clone(),
            source_code: NamedSource::new(file, source_text.to_string()),
            span,
        }
    }
}

impl miette::Diagnostic for TranslationReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("JV{}", self.code)))
    }

    fn severity(&self) -> Option<Severity> {
        Some(match self.category {
            DiagnosticCategory::Error => Severity::Error,
            DiagnosticCategory::Warning => Severity::Warning,
            DiagnosticCategory::Message => Severity::Advice,
        })
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.source_code)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some("here".to_string()),
            span,
        ))))
    }
}
