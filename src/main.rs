use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod composer;
mod directive;
mod director;
mod layout;
mod probe;
mod selector;
mod settings;

use cli::{Command, ComposeArgs, ContextArgs, DeployArgs, RootArgs};
use composer::{compose, EnvironmentContext};
use director::Director;
use layout::EnvironmentLayout;
use probe::LocalFs;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Compose(args) => cmd_compose(args),
        Command::Deploy(args) => cmd_deploy(args),
    }
}

fn environment_context(args: &ContextArgs) -> EnvironmentContext {
    EnvironmentContext {
        environment_dir: args.environment.clone(),
        deployment_name: args.deployment.clone(),
        manifest_path: args.manifest.clone(),
        director_uuid: args.director_uuid.clone(),
    }
}

fn cmd_compose(args: ComposeArgs) -> Result<()> {
    let director = Director::locate(args.context.director_cli.clone())?;
    let ctx = environment_context(&args.context);
    let result = compose(&ctx, &director.settings(), &LocalFs)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", shell_words::join(result.to_args()));
    }
    Ok(())
}

fn cmd_deploy(args: DeployArgs) -> Result<()> {
    let director = Director::locate(args.context.director_cli.clone())?;
    let ctx = environment_context(&args.context);
    let result = compose(&ctx, &director.settings(), &LocalFs)?;
    let env = EnvironmentLayout::new(ctx.environment_dir.clone());

    if args.dry_run {
        println!("{}", director.render_interpolate(&result));
        return Ok(());
    }

    let manifest = director.interpolate(&result)?;
    director.deploy(&env, &result, &manifest)
}
