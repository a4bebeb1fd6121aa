//! Pure guard functions that turn a query result into at most one directive.

use crate::directive::OverlayDirective;
use crate::probe::PathProbe;
use crate::settings::SettingsReader;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Whether a setting guard fires on the key being present or absent.
///
/// Proxy-style rules include an overlay when the setting exists; the GCP
/// service-key rules include one when it does not. Both share this guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Presence,
    Absence,
}

/// Emit `OpsFile(ops_file)` iff the guard on `key_path` fires.
///
/// Any present value satisfies a `Presence` guard, including empty string.
pub fn ops_file_for_setting(
    settings: &dyn SettingsReader,
    document: &Path,
    key_path: &str,
    trigger: Trigger,
    ops_file: PathBuf,
) -> Result<Option<OverlayDirective>> {
    let value = settings.read(document, key_path)?;
    let fires = match trigger {
        Trigger::Presence => value.is_some(),
        Trigger::Absence => value.is_none(),
    };
    Ok(fires.then(|| OverlayDirective::ops_file(ops_file)))
}

/// Emit `OpsFile(path)` iff the file exists, with the path verbatim.
pub fn ops_file_if_exists(probe: &dyn PathProbe, path: PathBuf) -> Option<OverlayDirective> {
    probe
        .exists(&path)
        .then(|| OverlayDirective::ops_file(path))
}

/// Emit `VarsFile(path)` iff the file exists, with the path verbatim.
pub fn vars_file_if_exists(probe: &dyn PathProbe, path: PathBuf) -> Option<OverlayDirective> {
    probe
        .exists(&path)
        .then(|| OverlayDirective::vars_file(path))
}

/// Emit `VarOverride(name, default)` iff `key_path` is absent.
///
/// The settings document is authoritative when it holds an explicit value,
/// even an empty one; the default only fills a genuine gap.
pub fn default_var(
    settings: &dyn SettingsReader,
    document: &Path,
    key_path: &str,
    name: &str,
    default: &str,
) -> Result<Option<OverlayDirective>> {
    let value = settings.read(document, key_path)?;
    Ok(value
        .is_none()
        .then(|| OverlayDirective::var_override(name, default)))
}
