//! Overlay directive model and CLI-argument serialization.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A single overlay applied to the base manifest.
///
/// Order is semantically significant: the director applies ops-files in
/// sequence, so later entries patch earlier ones.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayDirective {
    /// A structural patch applied to the manifest.
    OpsFile { path: PathBuf },
    /// A file providing variable values for interpolation.
    VarsFile { path: PathBuf },
    /// An inline variable override.
    VarOverride { name: String, value: String },
}

impl OverlayDirective {
    pub fn ops_file(path: impl Into<PathBuf>) -> Self {
        OverlayDirective::OpsFile { path: path.into() }
    }

    pub fn vars_file(path: impl Into<PathBuf>) -> Self {
        OverlayDirective::VarsFile { path: path.into() }
    }

    pub fn var_override(name: impl Into<String>, value: impl Into<String>) -> Self {
        OverlayDirective::VarOverride {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Append this directive's CLI tokens to an argument list.
    pub fn push_args(&self, args: &mut Vec<String>) {
        match self {
            OverlayDirective::OpsFile { path } => {
                args.push("--ops-file".to_string());
                args.push(path.display().to_string());
            }
            OverlayDirective::VarsFile { path } => {
                args.push("--vars-file".to_string());
                args.push(path.display().to_string());
            }
            OverlayDirective::VarOverride { name, value } => {
                args.push("--var".to_string());
                args.push(format!("{name}={value}"));
            }
        }
    }
}

/// The full outcome of one composition run, ready to hand to the director.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CompositionResult {
    /// Base manifest; always the initial CLI argument.
    pub manifest_path: PathBuf,
    pub deployment_name: String,
    pub director_uuid: String,
    /// Ordered overlays; order is fixed by rule precedence, not discovery.
    pub directives: Vec<OverlayDirective>,
}

impl CompositionResult {
    /// Serialize into the director CLI argument list: the base manifest
    /// first, then every directive's tokens in directive order.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.manifest_path.display().to_string()];
        for directive in &self.directives {
            directive.push_args(&mut args);
        }
        args
    }

    /// True if any directive references the given path.
    pub fn references(&self, path: &Path) -> bool {
        self.directives.iter().any(|directive| match directive {
            OverlayDirective::OpsFile { path: p } | OverlayDirective::VarsFile { path: p } => {
                p == path
            }
            OverlayDirective::VarOverride { .. } => false,
        })
    }
}
