use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{Result, VerifyError};

/// Loader for JSON locale files
pub struct LocaleLoader;

impl LocaleLoader {
    /// Read a locale file and parse it into a JSON value tree.
    ///
    /// One-shot synchronous read; the file is fully read and closed before
    /// this returns. Errors carry the offending path and the underlying
    /// cause, whether the file is missing, unreadable, or malformed.
    pub fn load(path: &Path) -> Result<Value> {
        let content =
            fs::read_to_string(path).map_err(|source| VerifyError::read(path, source))?;

        serde_json::from_str(&content).map_err(|source| VerifyError::parse(path, source))
    }
}
