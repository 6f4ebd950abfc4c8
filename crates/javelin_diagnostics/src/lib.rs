//! javelin_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Every condition the translator can report has an entry in [`messages`]
//! with a stable code. Diagnostics carry the resolved message together with
//! the file and source span the condition was detected at.

use javelin_core::text::TextSpan;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 3002, 4001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

impl DiagnosticMessage {
    /// Resolve the template against its arguments.
    pub fn format(&self, args: &[&str]) -> String {
        format_message(self.message, args)
    }
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source text span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a diagnostic from already-resolved text.
    pub fn from_text(code: u32, category: DiagnosticCategory, message_text: String) -> Self {
        Self {
            file: None,
            span: None,
            message_text,
            code,
            category,
        }
    }

    /// Attach the file this diagnostic belongs to.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attach a source span.
    pub fn at(mut self, span: TextSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        }
        write!(
            f,
            "{} JV{}: {}",
            self.category, self.code, self.message_text
        )
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated while translating a batch of files.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Sort diagnostics by file and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            let file_cmp = a.file.cmp(&b.file);
            if file_cmp != std::cmp::Ordering::Equal {
                return file_cmp;
            }
            let a_pos = a.span.map(|s| s.start).unwrap_or(0);
            let b_pos = b.span.map(|s| s.start).unwrap_or(0);
            a_pos.cmp(&b_pos)
        });
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
        ($code:expr, Message, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Message, message: $msg }
        };
    }

    // ========================================================================
    // Unsupported constructs (3000-3099)
    // ========================================================================
    pub const _0_IS_NOT_SUPPORTED_WHEN_TRANSLATING_TO_1: DiagnosticMessage = diag!(3001, Error, "{0} is not supported when translating to {1}.");
    pub const STATIC_IMPORTS_ARE_NOT_SUPPORTED: DiagnosticMessage = diag!(3002, Error, "Static imports aren't currently supported.");
    pub const IMPORT_0_IS_NOT_FULLY_QUALIFIED: DiagnosticMessage = diag!(3003, Error, "Import '{0}' is unexpectedly not a fully qualified name (with a '.' in it).");
    pub const QUALIFIED_SUPER_INVOCATIONS_ARE_NOT_SUPPORTED: DiagnosticMessage = diag!(3004, Error, "Super method invocations with qualifiers before 'super' aren't currently supported.");
    pub const TYPE_ARGUMENTS_ON_INVOCATIONS_ARE_NOT_SUPPORTED: DiagnosticMessage = diag!(3005, Error, "Type arguments aren't currently supported on a method invocation.");
    pub const OPERATOR_0_HAS_NO_EQUIVALENT_IN_1: DiagnosticMessage = diag!(3006, Error, "Operator '{0}' has no equivalent in {1}.");
    pub const MODIFIER_0_IS_NOT_SUPPORTED_IN_1: DiagnosticMessage = diag!(3007, Error, "The '{0}' modifier isn't supported on this declaration in {1}.");
    pub const ANNOTATION_0_HAS_NO_TRANSLATION: DiagnosticMessage = diag!(3008, Error, "Annotation '{0}' has no translation; add it to the annotation map.");
    pub const ANNOTATIONS_WITH_ARGUMENTS_ARE_NOT_SUPPORTED: DiagnosticMessage = diag!(3009, Error, "Annotations with arguments aren't currently supported.");
    pub const TYPE_PARAMETERS_ARE_NOT_SUPPORTED: DiagnosticMessage = diag!(3010, Error, "Generic type parameters aren't currently supported.");
    pub const EXTRA_DIMENSIONS_ARE_NOT_SUPPORTED: DiagnosticMessage = diag!(3011, Error, "Array dimensions after a variable name aren't supported; declare them on the type.");
    pub const LABELED_JUMPS_ARE_NOT_SUPPORTED: DiagnosticMessage = diag!(3012, Error, "Labeled break and continue statements aren't currently supported.");
    pub const _0_BODY_MUST_BE_A_BLOCK_IN_1: DiagnosticMessage = diag!(3013, Error, "The body of this {0} statement must be a block when translating to {1}.");
    pub const ANONYMOUS_CLASSES_ARE_NOT_SUPPORTED: DiagnosticMessage = diag!(3014, Error, "Anonymous class bodies aren't currently supported.");
    pub const QUALIFIED_THIS_IS_NOT_SUPPORTED: DiagnosticMessage = diag!(3015, Error, "Qualified 'this' expressions aren't currently supported.");
    pub const ONLY_ONE_TYPE_DECLARATION_IS_SUPPORTED: DiagnosticMessage = diag!(3016, Error, "Only one top-level type declaration per file is currently supported.");
    pub const _0_HAS_NO_EQUIVALENT_IN_1: DiagnosticMessage = diag!(3017, Error, "'{0}' has no equivalent in {1}.");
    pub const COMPILATION_UNIT_DECLARES_NO_TYPE: DiagnosticMessage = diag!(3018, Error, "The compilation unit doesn't declare a type.");

    // ========================================================================
    // Fatal translation failures (4000-4099)
    // ========================================================================
    pub const EXPECTED_0_BUT_FOUND_1: DiagnosticMessage = diag!(4001, Error, "Expected '{0}' but found '{1}'; the syntax tree does not match the source text.");
    pub const NO_BINDING_FOUND_FOR_0: DiagnosticMessage = diag!(4002, Error, "No binding found for '{0}'; ensure the input source has no compile errors.");
    pub const OUTPUT_SINK_FAILED: DiagnosticMessage = diag!(4003, Error, "Writing to the output failed.");

    // ========================================================================
    // Driver (5000-5099)
    // ========================================================================
    pub const NO_INPUT_FILES_FOUND: DiagnosticMessage = diag!(5003, Error, "No input files found.");
    pub const TRANSLATED_0_FILES: DiagnosticMessage = diag!(5005, Message, "Translated {0} file(s).");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message("Operator '{0}' has no equivalent in {1}.", &[">>>", "Swift"]);
        assert_eq!(msg, "Operator '>>>' has no equivalent in Swift.");
    }

    #[test]
    fn test_format_message_no_args() {
        let msg = format_message("Static imports aren't currently supported.", &[]);
        assert_eq!(msg, "Static imports aren't currently supported.");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(&messages::IMPORT_0_IS_NOT_FULLY_QUALIFIED, &["List"])
            .in_file("Foo.java")
            .at(TextSpan::new(10, 5));
        let display = format!("{}", diag);
        assert!(display.starts_with("Foo.java(10): "));
        assert!(display.contains("JV3003"));
        assert!(display.contains("'List'"));
    }

    #[test]
    fn test_diagnostic_without_location() {
        let diag = Diagnostic::new(&messages::STATIC_IMPORTS_ARE_NOT_SUPPORTED, &[]);
        assert!(diag.file.is_none());
        assert!(diag.span.is_none());
        assert_eq!(diag.code, 3002);
        assert!(diag.is_error());
    }

    #[test]
    fn test_builder_style_location() {
        let diag = Diagnostic::new(&messages::NO_BINDING_FOUND_FOR_0, &["run"])
            .in_file("A.java")
            .at(TextSpan::new(4, 3));
        assert_eq!(diag.file.as_deref(), Some("A.java"));
        assert_eq!(diag.span, Some(TextSpan::new(4, 3)));
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());

        collection.add(Diagnostic::new(&messages::TRANSLATED_0_FILES, &["3"]));
        assert!(!collection.has_errors());

        collection.add(Diagnostic::new(&messages::STATIC_IMPORTS_ARE_NOT_SUPPORTED, &[]));
        assert!(collection.has_errors());
        assert_eq!(collection.error_count(), 1);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_diagnostic_collection_sort() {
        let mut collection = DiagnosticCollection::new();
        collection.add(
            Diagnostic::new(&messages::STATIC_IMPORTS_ARE_NOT_SUPPORTED, &[])
                .in_file("B.java")
                .at(TextSpan::new(10, 1)),
        );
        collection.add(
            Diagnostic::new(&messages::TYPE_PARAMETERS_ARE_NOT_SUPPORTED, &[])
                .in_file("A.java")
                .at(TextSpan::new(5, 1)),
        );
        collection.sort();
        assert_eq!(collection.diagnostics()[0].file.as_deref(), Some("A.java"));
        assert_eq!(collection.diagnostics()[1].file.as_deref(), Some("B.java"));
    }
}
