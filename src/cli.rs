//! CLI argument parsing for the manifest composition workflow.
//!
//! The CLI is intentionally thin: it wires inputs into the composition
//! pipeline without embedding policy, so the same core can be reused from
//! other front ends.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Director CLI binary resolved from PATH when none is given explicitly.
pub const DEFAULT_DIRECTOR_CLI: &str = "bosh-cli";

/// Root CLI entrypoint for manifest composition.
#[derive(Parser, Debug)]
#[command(
    name = "mcomp",
    version,
    about = "Compose deployment manifests from director settings and overlays",
    after_help = "Examples:\n  mcomp compose --environment ~/envs/kube --deployment snowflake --manifest manifests/cfcr.yml --director-uuid 1234\n  mcomp compose --environment ~/envs/kube --deployment snowflake --manifest manifests/cfcr.yml --director-uuid 1234 --json\n  mcomp deploy --environment ~/envs/kube --deployment snowflake --manifest manifests/cfcr.yml --director-uuid 1234 --dry-run",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Compose(ComposeArgs),
    Deploy(DeployArgs),
}

/// Inputs shared by every composition run.
#[derive(Parser, Debug)]
pub struct ContextArgs {
    /// Environment directory containing director.yml and optional overrides
    #[arg(long, value_name = "DIR")]
    pub environment: PathBuf,

    /// Deployment name
    #[arg(long, value_name = "NAME")]
    pub deployment: String,

    /// Base manifest path; the ops-file tree lives next to it
    #[arg(long, value_name = "PATH")]
    pub manifest: PathBuf,

    /// UUID of the target director
    #[arg(long, value_name = "UUID")]
    pub director_uuid: String,

    /// Director CLI binary (resolved from PATH when omitted)
    #[arg(long, value_name = "PATH")]
    pub director_cli: Option<PathBuf>,
}

/// Compose and print the ordered overlay argument list.
#[derive(Parser, Debug)]
#[command(about = "Compose the ordered overlay argument list")]
pub struct ComposeArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Compose, interpolate, and deploy through the director CLI.
#[derive(Parser, Debug)]
#[command(about = "Compose the manifest and deploy it through the director")]
pub struct DeployArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Print the invocations without executing them
    #[arg(long)]
    pub dry_run: bool,
}
