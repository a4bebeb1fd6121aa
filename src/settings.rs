//! Settings lookups against a director-hosted settings document.
//!
//! The live reader shells out to the director CLI's interpolation command.
//! Absence of a key is a normal outcome and must not abort composition, so
//! it is reported as `Ok(None)`; only transport-level failures are errors.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Read-only access to a key-path-addressable settings document.
pub trait SettingsReader {
    /// Look up `key_path` (slash-delimited, e.g. `/iaas`) in `document`.
    ///
    /// `Ok(None)` means the key is absent. `Err` means the settings store
    /// itself could not be reached and composition must abort.
    fn read(&self, document: &Path, key_path: &str) -> Result<Option<String>>;
}

/// Live reader backed by the director CLI's `int --path` interpolation.
#[derive(Debug, Clone)]
pub struct DirectorCliSettings {
    cli: PathBuf,
}

impl DirectorCliSettings {
    pub fn new(cli: PathBuf) -> Self {
        Self { cli }
    }
}

impl SettingsReader for DirectorCliSettings {
    fn read(&self, document: &Path, key_path: &str) -> Result<Option<String>> {
        let output = Command::new(&self.cli)
            .arg("int")
            .arg(document)
            .arg("--path")
            .arg(key_path)
            .output()
            .with_context(|| {
                format!(
                    "launch director CLI {} for {}",
                    self.cli.display(),
                    key_path
                )
            })?;

        // A clean nonzero exit is the CLI's signal that the path is missing.
        // Dying to a signal is not a clean exit and counts as transport.
        match output.status.code() {
            Some(0) => {}
            Some(code) => {
                tracing::debug!(key_path, code, "setting absent");
                return Ok(None);
            }
            None => {
                return Err(anyhow!(
                    "director CLI terminated by signal while reading {key_path}"
                ));
            }
        }

        let value = String::from_utf8(output.stdout)
            .map_err(|_| anyhow!("director CLI returned non-UTF-8 output for {key_path}"))?;
        Ok(Some(value.trim_end_matches('\n').to_string()))
    }
}
