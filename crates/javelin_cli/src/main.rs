//! jvt: The javelin Java translator CLI.
//!
//! Usage:
//!   jvt [options] [file...]
//!
//! Each `X.java` argument needs the front end's `X.java.ast.json` next to it.

mod logging;
mod report;

use clap::Parser as ClapParser;
use javelin_core::text::LineMap;
use javelin_diagnostics::{messages, Diagnostic};
use javelin_options::{parse_config_file, TargetLanguage, TranslationSession, TranslatorOptions};
use javelin_project::{Project, TranslationOutput};
use report::TranslationReport;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

const CONFIG_FILE: &str = "javelin.json";

/// Exit code when one or more files could not be translated.
const EXIT_TRANSLATION_FAILED: i32 = 2;
/// Exit code for unreadable input, bad configuration or failed writes.
const EXIT_ERROR: i32 = 1;

#[derive(ClapParser, Debug)]
#[command(name = "jvt", about = "javelin - translate Java source to C#, Swift or C++", disable_version_flag = true)]
struct Cli {
    /// Java files to translate.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Path to javelin.json.
    #[arg(short = 'p', long = "project")]
    project: Option<String>,

    /// Target language: csharp, swift or cpp.
    #[arg(long)]
    target: Option<String>,

    /// Write outputs into this directory instead of next to the sources.
    #[arg(long = "outDir")]
    out_dir: Option<String>,

    /// Translate and report errors without writing outputs.
    #[arg(long = "noEmit")]
    no_emit: bool,

    /// Print translations to stdout instead of writing files.
    #[arg(long)]
    stdout: bool,

    /// Pretty-print diagnostics; `--pretty=false` forces plain lines.
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pretty: bool,

    /// Print the translator version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("jvt Version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    logging::init_tracing();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let start = Instant::now();

    let (options, config_dir) = match resolve_options(cli) {
        Ok(resolved) => resolved,
        Err(message) => {
            print_error(&message);
            return EXIT_ERROR;
        }
    };

    let files = input_files(cli, &options, config_dir.as_deref());
    if files.is_empty() {
        print_error(&messages::NO_INPUT_FILES_FOUND.format(&[]));
        return EXIT_ERROR;
    }

    let session = match TranslationSession::new(&options) {
        Ok(session) => Arc::new(session),
        Err(e) => {
            print_error(&format!("Invalid configuration: {}", e));
            return EXIT_ERROR;
        }
    };

    let mut project = Project::new(session);
    if let Err(e) = project.load_files(&files) {
        print_error(&format!("Failed to load source files: {}", e));
        return EXIT_ERROR;
    }

    let output = project.translate_all();

    let use_color = cli.pretty && is_terminal();
    for diagnostic in output.diagnostics.diagnostics() {
        print_diagnostic(&project, diagnostic, use_color);
    }

    if cli.stdout {
        print_outputs(&output);
    } else if !cli.no_emit {
        let out_dir = options.out_dir.as_deref().map(Path::new);
        match project.emit(&output, out_dir) {
            Ok(written) => debug!(files = written.len(), "outputs written"),
            Err(e) => {
                print_error(&format!("Failed to write output: {}", e));
                return EXIT_ERROR;
            }
        }
    }

    let elapsed = start.elapsed();

    if output.has_errors() {
        let count = output.diagnostics.error_count();
        let summary = format!(
            "Failed to translate {} file{}.",
            count,
            if count == 1 { "" } else { "s" }
        );
        if use_color {
            eprintln!("\n{}{}{}", RED, summary, RESET);
        } else {
            eprintln!("\n{}", summary);
        }
        return EXIT_TRANSLATION_FAILED;
    }

    if use_color {
        let translated = output.files.len().to_string();
        eprintln!(
            "{}{} ({:.2}s){}",
            GRAY,
            messages::TRANSLATED_0_FILES.format(&[translated.as_str()]),
            elapsed.as_secs_f64(),
            RESET
        );
    }

    0
}

/// Options from `-p`, or from `javelin.json` in the working directory when
/// no files are given, with command-line flags layered on top. Also returns
/// the directory the config file lives in.
fn resolve_options(cli: &Cli) -> Result<(TranslatorOptions, Option<PathBuf>), String> {
    let config_path = match &cli.project {
        Some(project) => Some(PathBuf::from(project)),
        None if cli.files.is_empty() && Path::new(CONFIG_FILE).exists() => Some(PathBuf::from(CONFIG_FILE)),
        None => None,
    };

    let mut options = match &config_path {
        Some(path) => parse_config_file(path)
            .map_err(|e| format!("Failed to read project '{}': {}", path.display(), e))?,
        None => TranslatorOptions::default(),
    };

    let mut overrides = TranslatorOptions::default();
    if let Some(target) = &cli.target {
        overrides.target = Some(TargetLanguage::from_str(target).map_err(|e| e.to_string())?);
    }
    overrides.out_dir = cli.out_dir.clone();
    options.merge(overrides);

    let config_dir = config_path.map(|path| match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    });
    Ok((options, config_dir))
}

/// Files named on the command line, else the config's `files` relative to
/// the config file.
fn input_files(cli: &Cli, options: &TranslatorOptions, config_dir: Option<&Path>) -> Vec<PathBuf> {
    if !cli.files.is_empty() {
        return cli.files.iter().map(PathBuf::from).collect();
    }
    let root = config_dir.unwrap_or_else(|| Path::new("."));
    options
        .files
        .iter()
        .flatten()
        .map(|file| root.join(file))
        .collect()
}

fn print_outputs(output: &TranslationOutput) {
    let many = output.files.len() > 1;
    for file in &output.files {
        if many {
            println!("// {}", file.file_name);
        }
        print!("{}", file.output);
    }
}

fn print_diagnostic(project: &Project, diagnostic: &Diagnostic, use_color: bool) {
    let source = diagnostic.file.as_deref().and_then(|file| {
        project
            .units()
            .iter()
            .find(|unit| unit.file_name == file)
            .map(|unit| unit.source_text.as_str())
    });
    match source {
        Some(source) if use_color => {
            let report = miette::Report::new(TranslationReport::new(diagnostic, source));
            eprintln!("{:?}", report);
        }
        Some(source) => eprintln!("{}", located(diagnostic, source)),
        None => eprintln!("{}", diagnostic),
    }
}

/// `file:line:column: error JV3002: message`.
fn located(diagnostic: &Diagnostic, source: &str) -> String {
    let (Some(file), Some(span)) = (&diagnostic.file, diagnostic.span) else {
        return diagnostic.to_string();
    };
    let position = LineMap::new(source).line_and_column_of(span.start);
    format!(
        "{}:{}: {} JV{}: {}",
        file, position, diagnostic.category, diagnostic.code, diagnostic.message_text
    )
}

fn print_error(msg: &str) {
    if is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
