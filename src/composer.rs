//! The ordered composition pipeline.
//!
//! Directive order is fixed by rule precedence, never by filesystem
//! discovery order. Each step is independent; the only values carried
//! forward are the resolved IaaS name (it selects the cloud-provider
//! overlay path) and the settings document location.

use crate::directive::{CompositionResult, OverlayDirective};
use crate::layout::{EnvironmentLayout, OpsFileLayout};
use crate::probe::PathProbe;
use crate::selector::{
    default_var, ops_file_for_setting, ops_file_if_exists, vars_file_if_exists, Trigger,
};
use crate::settings::SettingsReader;
use anyhow::Result;
use std::path::PathBuf;

/// Routing mode that pulls in the cf-routing overlay.
const ROUTING_MODE_CF: &str = "cf";

/// Default-variable rules applied near the end of the pipeline, in order.
const DEFAULT_VARS: [(&str, &str, &str); 2] = [
    ("/authorization_mode", "authorization_mode", "abac"),
    ("/worker_count", "worker_count", "3"),
];

/// Immutable input to a single composition run.
#[derive(Debug, Clone)]
pub struct EnvironmentContext {
    pub environment_dir: PathBuf,
    pub deployment_name: String,
    pub manifest_path: PathBuf,
    pub director_uuid: String,
}

/// Run the full composition pipeline.
///
/// Only a settings transport failure aborts; unrecognized routing-mode or
/// IaaS values degrade to a logged no-op so unknown future platforms keep
/// deploying with no extra overlay.
pub fn compose(
    ctx: &EnvironmentContext,
    settings: &dyn SettingsReader,
    probe: &dyn PathProbe,
) -> Result<CompositionResult> {
    let env = EnvironmentLayout::new(ctx.environment_dir.clone());
    let ops = OpsFileLayout::for_manifest(&ctx.manifest_path);
    let document = env.settings_document();

    let mut directives = vec![
        OverlayDirective::ops_file(ops.dev()),
        OverlayDirective::ops_file(ops.bootstrap()),
        OverlayDirective::ops_file(ops.dns_runtime_config()),
    ];
    let mut push = |directive: Option<OverlayDirective>| {
        if let Some(directive) = directive {
            directives.push(directive);
        }
    };

    // Proxy overlays, each guarded independently by its settings key.
    for (key_path, ops_file) in [
        ("/http_proxy", ops.http_proxy()),
        ("/https_proxy", ops.https_proxy()),
        ("/no_proxy", ops.no_proxy()),
    ] {
        push(ops_file_for_setting(
            settings,
            &document,
            key_path,
            Trigger::Presence,
            ops_file,
        )?);
    }

    match settings.read(&document, "/routing_mode")?.as_deref() {
        Some(ROUTING_MODE_CF) => push(Some(OverlayDirective::ops_file(ops.cf_routing()))),
        Some(other) => tracing::info!(routing_mode = other, "unrecognized routing mode, skipping"),
        None => tracing::debug!("routing mode not set"),
    }

    let iaas = settings.read(&document, "/iaas")?;
    match iaas.as_deref() {
        Some("aws") => push(ops_file_if_exists(probe, ops.aws_lb())),
        Some("gcp") => {
            // Missing service-account keys pull in the overlays that
            // provision them; an explicit key suppresses its overlay.
            push(ops_file_for_setting(
                settings,
                &document,
                "/service_account_worker",
                Trigger::Absence,
                ops.gcp_service_key_worker(),
            )?);
            push(ops_file_for_setting(
                settings,
                &document,
                "/service_account_master",
                Trigger::Absence,
                ops.gcp_service_key_master(),
            )?);
        }
        Some(other) => tracing::debug!(iaas = other, "no extra overlay for this IaaS"),
        None => tracing::debug!("iaas not set"),
    }

    if let Some(addons_spec) = settings.read(&document, "/addons_spec_path")? {
        push(Some(OverlayDirective::ops_file(ops.addons_spec())));
        push(Some(OverlayDirective::vars_file(addons_spec)));
    }

    if let Some(iaas) = iaas.as_deref() {
        push(ops_file_if_exists(probe, ops.cloud_provider(iaas)));
    }
    push(ops_file_if_exists(
        probe,
        env.deployment_ops_file(&ctx.deployment_name),
    ));
    push(vars_file_if_exists(
        probe,
        env.deployment_vars_file(&ctx.deployment_name),
    ));
    push(vars_file_if_exists(probe, env.creds_vars_file()));
    push(vars_file_if_exists(probe, env.director_secrets_vars_file()));

    for (key_path, name, default) in DEFAULT_VARS {
        push(default_var(settings, &document, key_path, name, default)?);
    }

    push(Some(OverlayDirective::var_override(
        "deployment_name",
        &ctx.deployment_name,
    )));
    push(Some(OverlayDirective::var_override(
        "director_uuid",
        &ctx.director_uuid,
    )));

    Ok(CompositionResult {
        manifest_path: ctx.manifest_path.clone(),
        deployment_name: ctx.deployment_name.clone(),
        director_uuid: ctx.director_uuid.clone(),
        directives,
    })
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
