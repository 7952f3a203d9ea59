pub mod error;
pub mod parse;
pub mod report;

use std::collections::BTreeSet;
use std::path::PathBuf;

use walkdir::WalkDir;

// Re-export commonly used types
pub use error::{Result, VerifyError};
pub use parse::{flatten_keys, unflatten_keys, LocaleLoader, DEFAULT_SEPARATOR};
pub use report::{LocaleDiff, Report};

/// Default directory holding one JSON file per locale
pub const DEFAULT_LOCALES_DIR: &str = "src/i18n/locales";

/// Default reference locale filename
pub const DEFAULT_REFERENCE: &str = "en.json";

/// Query parameters for a verification run
#[derive(Debug, Clone)]
pub struct VerifyQuery {
    pub locales_dir: PathBuf,
    pub reference: String,
    pub separator: String,
}

impl VerifyQuery {
    pub fn new(locales_dir: PathBuf) -> Self {
        Self {
            locales_dir,
            reference: DEFAULT_REFERENCE.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn with_reference(mut self, reference: String) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_separator(mut self, separator: String) -> Self {
        self.separator = separator;
        self
    }
}

impl Default for VerifyQuery {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_LOCALES_DIR))
    }
}

/// A candidate locale that could not be loaded and was excluded from the report
#[derive(Debug)]
pub struct SkippedLocale {
    pub filename: String,
    pub error: VerifyError,
}

/// Result of a verification run
#[derive(Debug)]
pub struct VerifyRun {
    pub report: Report,
    pub skipped: Vec<SkippedLocale>,
    /// Number of candidate locales successfully compared
    pub checked: usize,
}

/// Main orchestrator function that coordinates the entire audit workflow
///
/// This function:
/// 1. Loads and flattens the reference locale once
/// 2. Lists every other `*.json` file in the locales directory
/// 3. Loads and flattens each candidate, diffing its key set against the
///    reference
/// 4. Returns a VerifyRun with the accumulated report
///
/// A failure to load the reference, or to list the directory, is fatal and
/// propagates. A failure to load a candidate is recorded in `skipped` and the
/// run continues with the next file.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_verify(query: VerifyQuery) -> Result<VerifyRun> {
    let reference_path = query.locales_dir.join(&query.reference);
    let reference_doc = LocaleLoader::load(&reference_path)?;
    let reference_keys: BTreeSet<String> = flatten_keys(&reference_doc, &query.separator)
        .into_keys()
        .collect();

    let mut report = Report::new();
    let mut skipped = Vec::new();
    let mut checked = 0;

    for path in list_candidates(&query)? {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let doc = match LocaleLoader::load(&path) {
            Ok(doc) => doc,
            Err(error) => {
                skipped.push(SkippedLocale { filename, error });
                continue;
            }
        };

        let candidate_keys: BTreeSet<String> = flatten_keys(&doc, &query.separator)
            .into_keys()
            .collect();
        report.insert(filename, LocaleDiff::between(&reference_keys, &candidate_keys));
        checked += 1;
    }

    Ok(VerifyRun {
        report,
        skipped,
        checked,
    })
}

/// List candidate locale files: every `*.json` regular file directly in the
/// locales directory except the reference, sorted by file name.
fn list_candidates(query: &VerifyQuery) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(&query.locales_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| VerifyError::ReadDir {
            path: query.locales_dir.clone(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name == query.reference.as_str() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "json") {
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}
