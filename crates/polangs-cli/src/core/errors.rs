//! CLI error types using miette for Rust-style diagnostics.

// Fields in these structs are read by miette's Diagnostic derive macro
#![allow(unused)]

use crate::l10n::{ResolveError, StatsError};
use crate::sink::MergeError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error when the configuration file cannot be used.
#[derive(Debug, Diagnostic, Error)]
#[error("invalid configuration")]
#[diagnostic(code(polangs::config::invalid))]
pub struct ConfigError {
    /// The underlying error message.
    #[help]
    pub help: String,
}

/// Error when the po directory does not exist.
#[derive(Debug, Diagnostic, Error)]
#[error("po directory not found: {path}")]
#[diagnostic(
    code(polangs::po_directory::not_found),
    help("Pass --po-directory or set po_directory in polangs.toml")
)]
pub struct PoDirectoryNotFoundError {
    /// The directory that was expected.
    pub path: PathBuf,
}

/// Error when the territory map is missing.
#[derive(Debug, Diagnostic, Error)]
#[error("territory map not found: {path}")]
#[diagnostic(
    code(polangs::territories::not_found),
    help(
        "Pass --territories or create a JSON object mapping each language to its default territory, e.g.\n\n  \
          {{ \"ja\": \"jp\", \"pt\": \"br\" }}\n"
    )
)]
pub struct TerritoryMapNotFoundError {
    /// The path that was expected.
    pub path: PathBuf,
}

/// Error when the territory map is not a JSON object of strings.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to parse territory map")]
#[diagnostic(code(polangs::territories::parse_error))]
pub struct TerritoryMapParseError {
    /// The source content of the territory map.
    #[source_code]
    pub src: NamedSource<String>,

    /// The span where the error occurred.
    #[label("error occurred here")]
    pub span: Option<SourceSpan>,

    /// The underlying parse error message.
    #[help]
    pub help: String,
}

/// Error when the manifest to update is missing.
#[derive(Debug, Diagnostic, Error)]
#[error("manifest file not found: {path}")]
#[diagnostic(
    code(polangs::manifest::not_found),
    help("update-manifest rewrites an existing file; create it with at least `{{}}`")
)]
pub struct ManifestNotFoundError {
    /// The path that was given.
    pub path: PathBuf,
}

/// Error when the manifest is not valid JSON or not an object.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to parse manifest")]
#[diagnostic(code(polangs::manifest::parse_error))]
pub struct ManifestParseError {
    /// The source content of the manifest.
    #[source_code]
    pub src: NamedSource<String>,

    /// The span where the error occurred.
    #[label("error occurred here")]
    pub span: Option<SourceSpan>,

    /// The underlying parse error message.
    #[help]
    pub help: String,
}

/// Error when the statistics program cannot be started.
#[derive(Debug, Diagnostic, Error)]
#[error("cannot run statistics program '{program}'")]
#[diagnostic(
    code(polangs::stats::not_found),
    help("Install gettext or point --msgfmt to a msgfmt compatible program ({reason})")
)]
pub struct StatsToolNotFoundError {
    /// The program that was run.
    pub program: String,

    /// The operating system error.
    pub reason: String,
}

/// Error when an accepted locale has no display name.
#[derive(Debug, Diagnostic, Error)]
#[error("no display name for locale '{code}'")]
#[diagnostic(code(polangs::names::lookup))]
pub struct NameLookupError {
    /// The locale code.
    pub code: String,

    /// The lookup failure.
    #[help]
    pub help: String,
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    PoDirectoryNotFound(#[from] PoDirectoryNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    TerritoryMapNotFound(#[from] TerritoryMapNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    TerritoryMapParse(#[from] TerritoryMapParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestNotFound(#[from] ManifestNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParse(#[from] ManifestParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    StatsToolNotFound(#[from] StatsToolNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    NameLookup(#[from] NameLookupError),

    #[error("IO error: {0}")]
    #[diagnostic(code(polangs::io))]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    #[diagnostic(code(polangs::other))]
    Other(String),
}

impl From<polangs_toml::LangsConfigError> for CliError {
    fn from(err: polangs_toml::LangsConfigError) -> Self {
        CliError::Config(ConfigError {
            help: err.to_string(),
        })
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Stats(StatsError::Spawn { program, source }) => {
                CliError::StatsToolNotFound(StatsToolNotFoundError {
                    program,
                    reason: source.to_string(),
                })
            },
            ResolveError::Stats(err) => CliError::Other(err.to_string()),
            ResolveError::Name { code, source } => CliError::NameLookup(NameLookupError {
                code,
                help: source.to_string(),
            }),
        }
    }
}

impl From<walkdir::Error> for CliError {
    fn from(err: walkdir::Error) -> Self {
        CliError::Io(err.into())
    }
}

impl TerritoryMapParseError {
    pub fn new(path: &Path, content: String, err: &serde_json::Error) -> Self {
        let span = json_error_span(&content, err);
        Self {
            src: NamedSource::new(path.display().to_string(), content),
            span,
            help: err.to_string(),
        }
    }
}

impl ManifestParseError {
    pub fn new(path: &Path, content: String, err: &MergeError) -> Self {
        let span = match err {
            MergeError::Json(err) => json_error_span(&content, err),
            MergeError::NotAnObject => None,
        };
        Self {
            src: NamedSource::new(path.display().to_string(), content),
            span,
            help: err.to_string(),
        }
    }
}

/// Span of a serde_json error, when it points into the document.
fn json_error_span(source: &str, err: &serde_json::Error) -> Option<SourceSpan> {
    if err.line() == 0 {
        return None;
    }
    Some(span_from_line_col(source, err.line(), err.column(), 1))
}

/// Calculate SourceSpan from line and column in source text.
pub fn span_from_line_col(source: &str, line: usize, col: usize, len: usize) -> SourceSpan {
    let mut offset = 0;
    for (i, line_content) in source.lines().enumerate() {
        if i + 1 == line {
            offset += col.saturating_sub(1);
            break;
        }
        offset += line_content.len() + 1; // +1 for newline
    }
    let offset = offset.min(source.len().saturating_sub(1));
    SourceSpan::new(offset.into(), len.min(source.len() - offset))
}
