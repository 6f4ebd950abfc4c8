//! javelin_options: javelin.json parsing and the translation session.
//!
//! `TranslatorOptions` mirrors the configuration file: every key is optional
//! so that a file, the command line and the built-in defaults can be layered.
//! A `TranslationSession` is the resolved, validated and immutable form that
//! the translator consults while writing; it is built once and shared.

use indexmap::IndexMap;
use javelin_core::chars::is_identifier;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Annotation types that are dropped unless the configuration says otherwise.
pub const DEFAULT_SUPPRESSED_ANNOTATIONS: &[&str] =
    &["org.jetbrains.annotations.Nullable", "java.lang.Override"];

pub const DEFAULT_INDENT_WIDTH: usize = 4;
const MAX_INDENT_WIDTH: usize = 16;

/// The language translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    CSharp,
    Swift,
    Cpp,
}

impl TargetLanguage {
    /// File extension of translated output, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "cs",
            TargetLanguage::Swift => "swift",
            TargetLanguage::Cpp => "cpp",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "C#",
            TargetLanguage::Swift => "Swift",
            TargetLanguage::Cpp => "C++",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TargetLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(TargetLanguage::CSharp),
            "swift" => Ok(TargetLanguage::Swift),
            "cpp" | "c++" | "cxx" => Ok(TargetLanguage::Cpp),
            _ => Err(ConfigError::Invalid(format!(
                "unknown target '{}'; expected one of csharp, swift, cpp",
                s
            ))),
        }
    }
}

/// The javelin.json file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorOptions {
    pub target: Option<TargetLanguage>,
    /// Columns added for blocks that have no counterpart in the source.
    pub indent_width: Option<usize>,
    /// Annotation type → `null` to drop it, or the target attribute name.
    pub annotations: Option<IndexMap<String, Option<String>>>,
    /// Target imports written into every file.
    pub extra_imports: Option<Vec<String>>,
    /// Java package → target namespace for imports of generic types.
    pub generic_namespaces: Option<IndexMap<String, String>>,
    /// Java type → target namespace to import whenever the type is used.
    pub implicit_imports: Option<IndexMap<String, String>>,
    pub out_dir: Option<String>,
    pub files: Option<Vec<String>>,
}

impl TranslatorOptions {
    /// Layer `overrides` on top of these options; set keys win, maps merge.
    pub fn merge(&mut self, overrides: TranslatorOptions) {
        if overrides.target.is_some() {
            self.target = overrides.target;
        }
        if overrides.indent_width.is_some() {
            self.indent_width = overrides.indent_width;
        }
        if let Some(annotations) = overrides.annotations {
            self.annotations.get_or_insert_with(IndexMap::new).extend(annotations);
        }
        if let Some(imports) = overrides.extra_imports {
            self.extra_imports.get_or_insert_with(Vec::new).extend(imports);
        }
        if let Some(namespaces) = overrides.generic_namespaces {
            self.generic_namespaces
                .get_or_insert_with(IndexMap::new)
                .extend(namespaces);
        }
        if let Some(imports) = overrides.implicit_imports {
            self.implicit_imports.get_or_insert_with(IndexMap::new).extend(imports);
        }
        if overrides.out_dir.is_some() {
            self.out_dir = overrides.out_dir;
        }
        if overrides.files.is_some() {
            self.files = overrides.files;
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Parse a javelin.json file from a string.
pub fn parse_config(content: &str) -> Result<TranslatorOptions, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a javelin.json file from a path.
pub fn parse_config_file(path: &Path) -> Result<TranslatorOptions, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

// ============================================================================
// Translation Session
// ============================================================================

/// What happens to an annotation type listed in the annotation map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationTranslation {
    /// Drop the annotation and its import.
    Suppress,
    /// Write the annotation as this target attribute; drop its import.
    Attribute(String),
}

/// Resolved, read-only configuration shared by every file of a batch.
#[derive(Debug, Clone)]
pub struct TranslationSession {
    target: TargetLanguage,
    indent_width: usize,
    annotations: IndexMap<String, AnnotationTranslation>,
    extra_imports: Vec<String>,
    generic_namespaces: FxHashMap<String, String>,
    implicit_imports: FxHashMap<String, String>,
}

impl Default for TranslationSession {
    fn default() -> Self {
        Self::for_target(TargetLanguage::default())
    }
}

impl TranslationSession {
    /// A session with default settings for `target`.
    pub fn for_target(target: TargetLanguage) -> Self {
        let annotations = DEFAULT_SUPPRESSED_ANNOTATIONS
            .iter()
            .map(|name| (name.to_string(), AnnotationTranslation::Suppress))
            .collect();
        Self {
            target,
            indent_width: DEFAULT_INDENT_WIDTH,
            annotations,
            extra_imports: Vec::new(),
            generic_namespaces: FxHashMap::default(),
            implicit_imports: FxHashMap::default(),
        }
    }

    /// Validate `options` and resolve them against the defaults.
    pub fn new(options: &TranslatorOptions) -> Result<Self, ConfigError> {
        let mut session = Self::for_target(options.target.unwrap_or_default());

        if let Some(width) = options.indent_width {
            if width > MAX_INDENT_WIDTH {
                return Err(ConfigError::Invalid(format!(
                    "indentWidth must be at most {}, got {}",
                    MAX_INDENT_WIDTH, width
                )));
            }
            session.indent_width = width;
        }

        if let Some(annotations) = &options.annotations {
            for (name, translation) in annotations {
                check_dotted_name("annotations", name)?;
                let translation = match translation {
                    None => AnnotationTranslation::Suppress,
                    Some(attribute) => {
                        check_dotted_name("annotations", attribute)?;
                        AnnotationTranslation::Attribute(attribute.clone())
                    }
                };
                session.annotations.insert(name.clone(), translation);
            }
        }

        if let Some(imports) = &options.extra_imports {
            for import in imports {
                check_dotted_name("extraImports", import)?;
                if !session.extra_imports.contains(import) {
                    session.extra_imports.push(import.clone());
                }
            }
        }

        if let Some(namespaces) = &options.generic_namespaces {
            for (package, namespace) in namespaces {
                check_dotted_name("genericNamespaces", package)?;
                check_dotted_name("genericNamespaces", namespace)?;
                session
                    .generic_namespaces
                    .insert(package.clone(), namespace.clone());
            }
        }

        if let Some(imports) = &options.implicit_imports {
            for (type_name, namespace) in imports {
                check_dotted_name("implicitImports", type_name)?;
                check_dotted_name("implicitImports", namespace)?;
                session
                    .implicit_imports
                    .insert(type_name.clone(), namespace.clone());
            }
        }

        debug!(
            language = %session.target,
            annotations = session.annotations.len(),
            extra_imports = session.extra_imports.len(),
            "translation session ready"
        );
        Ok(session)
    }

    pub fn target(&self) -> TargetLanguage {
        self.target
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// How an annotation type is translated, if it is mapped.
    pub fn annotation(&self, qualified_name: &str) -> Option<&AnnotationTranslation> {
        self.annotations.get(qualified_name)
    }

    pub fn is_mapped_annotation(&self, qualified_name: &str) -> bool {
        self.annotations.contains_key(qualified_name)
    }

    pub fn extra_imports(&self) -> &[String] {
        &self.extra_imports
    }

    /// The namespace imported in place of a generic type from `package`.
    pub fn generic_namespace<'a>(&'a self, package: &'a str) -> &'a str {
        self.generic_namespaces
            .get(package)
            .map_or(package, String::as_str)
    }

    /// The namespace a use of `qualified_type` requires, if any.
    pub fn implicit_import(&self, qualified_type: &str) -> Option<&str> {
        self.implicit_imports.get(qualified_type).map(String::as_str)
    }
}

fn check_dotted_name(key: &str, name: &str) -> Result<(), ConfigError> {
    if !name.is_empty() && name.split('.').all(is_identifier) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "'{}' in {} is not a valid dotted name",
            name, key
        )))
    }
}
