//! javelin_project: Batch translation.
//!
//! A project is a set of Java files, each paired with the syntax tree the
//! front end saved next to it (`Foo.java.ast.json`). Files are translated
//! independently and in parallel. A file that fails is reported as a
//! diagnostic and does not stop the others.

use javelin_ast::CompilationUnit;
use javelin_diagnostics::{Diagnostic, DiagnosticCollection};
use javelin_options::TranslationSession;
use javelin_translator::Translator;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, debug_span, info, warn};

/// Suffix appended to a source path to find its serialized tree.
pub const TREE_SUFFIX: &str = ".ast.json";

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid syntax tree in '{}': {source}", path.display())]
    Tree {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read(path: &Path) -> Result<String, ProjectError> {
    fs::read_to_string(path).map_err(|source| ProjectError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// One Java file: its name, its text and the tree parsed from that text.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub file_name: String,
    pub source_text: String,
    pub tree: CompilationUnit,
}

impl SourceUnit {
    /// `Foo.java` → `Foo.java.ast.json`.
    pub fn tree_path(source: &Path) -> PathBuf {
        let mut path = source.as_os_str().to_owned();
        path.push(TREE_SUFFIX);
        PathBuf::from(path)
    }

    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let source_text = read(path)?;
        let tree_path = Self::tree_path(path);
        let tree_text = read(&tree_path)?;
        let tree = serde_json::from_str(&tree_text).map_err(|source| ProjectError::Tree {
            path: tree_path,
            source,
        })?;
        Ok(Self {
            file_name: path.to_string_lossy().into_owned(),
            source_text,
            tree,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedFile {
    /// Name of the Java file this was translated from.
    pub file_name: String,
    pub output: String,
}

/// Everything a batch produced: the files that translated and one
/// diagnostic per file that did not.
#[derive(Debug, Default)]
pub struct TranslationOutput {
    pub files: Vec<TranslatedFile>,
    pub diagnostics: DiagnosticCollection,
}

impl TranslationOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn file(&self, file_name: &str) -> Option<&TranslatedFile> {
        self.files.iter().find(|file| file.file_name == file_name)
    }
}

pub struct Project {
    session: Arc<TranslationSession>,
    units: Vec<SourceUnit>,
}

impl Project {
    pub fn new(session: Arc<TranslationSession>) -> Self {
        Self {
            session,
            units: Vec::new(),
        }
    }

    pub fn session(&self) -> &TranslationSession {
        &self.session
    }

    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    pub fn add_unit(&mut self, unit: SourceUnit) {
        self.units.push(unit);
    }

    pub fn add_source(&mut self, file_name: impl Into<String>, source_text: impl Into<String>, tree: CompilationUnit) {
        self.add_unit(SourceUnit {
            file_name: file_name.into(),
            source_text: source_text.into(),
            tree,
        });
    }

    /// Load `path` and the tree saved next to it.
    pub fn load_file(&mut self, path: &Path) -> Result<(), ProjectError> {
        let span = debug_span!("load", file = %path.display());
        let _enter = span.enter();
        let unit = SourceUnit::load(path)?;
        debug!(bytes = unit.source_text.len(), "loaded source and tree");
        self.add_unit(unit);
        Ok(())
    }

    pub fn load_files<P: AsRef<Path>>(&mut self, paths: impl IntoIterator<Item = P>) -> Result<(), ProjectError> {
        for path in paths {
            self.load_file(path.as_ref())?;
        }
        Ok(())
    }

    /// Translate every unit. Outputs keep the order the units were added in.
    pub fn translate_all(&self) -> TranslationOutput {
        let translator = Translator::new(Arc::clone(&self.session));
        let results: Vec<Result<TranslatedFile, Diagnostic>> = self
            .units
            .par_iter()
            .map(|unit| {
                translator
                    .translate_to_string(&unit.file_name, &unit.source_text, &unit.tree)
                    .map(|output| TranslatedFile {
                        file_name: unit.file_name.clone(),
                        output,
                    })
                    .map_err(|err| {
                        warn!(file = unit.file_name.as_str(), code = err.code(), "{}", err);
                        err.to_diagnostic(&unit.file_name)
                    })
            })
            .collect();

        let mut output = TranslationOutput::default();
        for result in results {
            match result {
                Ok(file) => output.files.push(file),
                Err(diagnostic) => output.diagnostics.add(diagnostic),
            }
        }
        output.diagnostics.sort();
        info!(
            translated = output.files.len(),
            failed = output.diagnostics.error_count(),
            "translation finished"
        );
        output
    }

    /// Where the translation of `file_name` is written: next to the source,
    /// or directly inside `out_dir`, with the target's extension.
    pub fn output_path(&self, file_name: &str, out_dir: Option<&Path>) -> PathBuf {
        let renamed = Path::new(file_name).with_extension(self.session.target().extension());
        match (out_dir, renamed.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => renamed,
        }
    }

    /// Write every translated file and return the paths written.
    pub fn emit(&self, output: &TranslationOutput, out_dir: Option<&Path>) -> Result<Vec<PathBuf>, ProjectError> {
        if let Some(dir) = out_dir {
            fs::create_dir_all(dir).map_err(|source| ProjectError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let mut written = Vec::with_capacity(output.files.len());
        for file in &output.files {
            let path = self.output_path(&file.file_name, out_dir);
            fs::write(&path, &file.output).map_err(|source| ProjectError::Write {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "emitted");
            written.push(path);
        }
        Ok(written)
    }
}
