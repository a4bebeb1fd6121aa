//! Thin collaborator around the director CLI.
//!
//! The engine only composes arguments; this module owns the two process
//! boundaries that consume them: interpolating the composed argument list
//! into a final manifest, and piping that manifest into a deploy.

use crate::cli::DEFAULT_DIRECTOR_CLI;
use crate::directive::CompositionResult;
use crate::layout::EnvironmentLayout;
use crate::settings::{DirectorCliSettings, SettingsReader};
use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Client name the director grants admin access to.
const ADMIN_CLIENT: &str = "bosh_admin";
/// Key path holding the admin client secret inside creds.yml.
const ADMIN_SECRET_KEY: &str = "/bosh_admin_client_secret";

/// Handle to a located director CLI binary.
#[derive(Debug, Clone)]
pub struct Director {
    cli: PathBuf,
}

impl Director {
    /// Use the explicit CLI path or resolve the default from PATH.
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self> {
        let cli = match explicit {
            Some(cli) => cli,
            None => which::which(DEFAULT_DIRECTOR_CLI)
                .with_context(|| format!("locate {DEFAULT_DIRECTOR_CLI} on PATH"))?,
        };
        Ok(Self { cli })
    }

    pub fn cli(&self) -> &Path {
        &self.cli
    }

    /// Settings reader backed by this CLI's interpolation command.
    pub fn settings(&self) -> DirectorCliSettings {
        DirectorCliSettings::new(self.cli.clone())
    }

    /// Render the interpolation invocation for logs and dry runs.
    pub fn render_interpolate(&self, result: &CompositionResult) -> String {
        let mut tokens = vec![self.cli.display().to_string(), "int".to_string()];
        tokens.extend(result.to_args());
        shell_words::join(tokens)
    }

    /// Interpolate the composed argument list into the final manifest text.
    pub fn interpolate(&self, result: &CompositionResult) -> Result<String> {
        let output = Command::new(&self.cli)
            .arg("int")
            .args(result.to_args())
            .output()
            .with_context(|| format!("launch director CLI {}", self.cli.display()))?;
        if !output.status.success() {
            return Err(anyhow!(
                "interpolation failed (exit {:?}): {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        String::from_utf8(output.stdout)
            .map_err(|_| anyhow!("interpolated manifest is not valid UTF-8"))
    }

    /// Read the admin client secret from the environment's creds file.
    ///
    /// Unlike composition guards, a missing secret here is an error: deploy
    /// cannot authenticate without it.
    pub fn admin_client_secret(&self, env: &EnvironmentLayout) -> Result<String> {
        let creds = env.creds_vars_file();
        self.settings()
            .read(&creds, ADMIN_SECRET_KEY)?
            .ok_or_else(|| anyhow!("{ADMIN_SECRET_KEY} not found in {}", creds.display()))
    }

    /// Deploy the interpolated manifest by piping it to the director CLI.
    pub fn deploy(
        &self,
        env: &EnvironmentLayout,
        result: &CompositionResult,
        manifest_text: &str,
    ) -> Result<()> {
        let environment = env
            .environment_name()
            .ok_or_else(|| anyhow!("environment directory has no name: {}", env.root().display()))?;
        let secret = self.admin_client_secret(env)?;

        tracing::info!(
            deployment = result.deployment_name,
            environment,
            "deploying manifest"
        );
        let mut child = Command::new(&self.cli)
            .arg("-e")
            .arg(&environment)
            .arg("-d")
            .arg(&result.deployment_name)
            .arg("-n")
            .arg("deploy")
            .arg("--no-redact")
            .arg("-")
            .env("BOSH_CLIENT", ADMIN_CLIENT)
            .env("BOSH_CLIENT_SECRET", &secret)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("launch director CLI {}", self.cli.display()))?;

        child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("director CLI stdin unavailable"))?
            .write_all(manifest_text.as_bytes())
            .context("write manifest to director CLI stdin")?;

        let status = child.wait().context("wait for director CLI")?;
        if !status.success() {
            return Err(anyhow!("deploy failed (exit {:?})", status.code()));
        }
        Ok(())
    }
}
