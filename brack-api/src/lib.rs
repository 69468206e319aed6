//! Brack API - Validation orchestration layer
//!
//! Provides the unified validation interface, including:
//! - Text and file entry points (`validate_text`, `validate_file`)
//! - Configuration abstraction (CheckConfig)
//! - Unified error handling (BrackError), keeping grammar and I/O failures apart
//!
//! Configuration is always passed explicitly: `check_source(source, &config)`.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod config;
pub use config::CheckConfig;

pub mod error;
pub mod source;
pub mod types;
pub use error::{BrackError, ErrorReport, IoErrorKind, ParseError, ParseErrorKind};
pub use source::{MemoryLoader, NativeLoader, SourceLoader};
pub use types::FileOutcome;

// Re-export core types
pub use brack_config;
pub use brack_core::{CheckOptions, CheckSummary, Position};

/// Validate a complete Brack document held in memory.
pub fn validate_text(text: &str) -> Result<(), ParseError> {
    brack_core::validate_text(text)
}

/// Read `path` from the OS file system and validate its contents.
///
/// I/O and decoding failures come back as [`BrackError::Io`], grammar
/// violations as [`BrackError::Parse`].
pub fn validate_file(path: impl AsRef<Path>) -> Result<(), BrackError> {
    let source = read_source(&NativeLoader, path.as_ref())?;
    validate_text(&source)?;
    Ok(())
}

/// Validate with explicit configuration
///
/// This is the recommended API for library users.
pub fn check_source(source: &str, config: &CheckConfig) -> Result<CheckSummary, BrackError> {
    let summary = brack_core::check_text(source, config.options())?;
    debug!(
        target: "brack::api",
        values = summary.top_level_values,
        depth = summary.max_depth,
        bytes = summary.bytes,
        "source validated"
    );
    Ok(summary)
}

/// Read a whole file through `loader` and decode it as UTF-8.
pub fn read_source(loader: &dyn SourceLoader, path: &Path) -> Result<String, BrackError> {
    let bytes = loader
        .read_file(path)
        .map_err(|e| BrackError::io(path, &e))?;
    String::from_utf8(bytes).map_err(|e| BrackError::invalid_utf8(path, &e))
}

/// Validate one file through `loader`, keeping the source for diagnostics.
pub fn check_file(loader: &dyn SourceLoader, path: &Path, config: &CheckConfig) -> FileOutcome {
    debug!(target: "brack::api", path = %path.display(), "checking file");
    match read_source(loader, path) {
        Ok(source) => FileOutcome {
            path: path.to_path_buf(),
            result: check_source(&source, config),
            source: Some(source),
        },
        Err(error) => FileOutcome {
            path: path.to_path_buf(),
            result: Err(error),
            source: None,
        },
    }
}

/// Validate every path independently; one failure never stops the rest.
pub fn check_paths<I, P>(loader: &dyn SourceLoader, paths: I, config: &CheckConfig) -> Vec<FileOutcome>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let outcomes: Vec<FileOutcome> = paths
        .into_iter()
        .map(|path| check_file(loader, &path.into(), config))
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!(
        target: "brack::api",
        files = outcomes.len(),
        failed,
        "validation finished"
    );
    outcomes
}
