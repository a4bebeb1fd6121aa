//! Typed paths into an environment directory and the ops-file tree.
//!
//! Centralizing path construction keeps the composition pipeline free of
//! string concatenation and prevents drift when the layout evolves.

use std::path::{Path, PathBuf};

/// Well-known files inside a single environment directory.
#[derive(Debug, Clone)]
pub struct EnvironmentLayout {
    root: PathBuf,
}

impl EnvironmentLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The director-hosted settings document for this environment.
    pub fn settings_document(&self) -> PathBuf {
        self.root.join("director.yml")
    }

    /// Per-deployment ops-file override, `<deployment>.yml`.
    pub fn deployment_ops_file(&self, deployment: &str) -> PathBuf {
        self.root.join(format!("{deployment}.yml"))
    }

    /// Per-deployment vars-file override, `<deployment>-vars.yml`.
    pub fn deployment_vars_file(&self, deployment: &str) -> PathBuf {
        self.root.join(format!("{deployment}-vars.yml"))
    }

    /// Generated credentials vars-file.
    pub fn creds_vars_file(&self) -> PathBuf {
        self.root.join("creds.yml")
    }

    /// Director secrets vars-file.
    pub fn director_secrets_vars_file(&self) -> PathBuf {
        self.root.join("director-secrets.yml")
    }

    /// The director alias for this environment is its directory name.
    pub fn environment_name(&self) -> Option<String> {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
    }
}

/// Well-known ops-files in the tree next to the base manifest.
///
/// The tree lives at `<manifest parent>/ops-files`.
#[derive(Debug, Clone)]
pub struct OpsFileLayout {
    root: PathBuf,
}

impl OpsFileLayout {
    /// Derive the ops-file tree root from the base manifest path.
    pub fn for_manifest(manifest_path: &Path) -> Self {
        let parent = manifest_path.parent().unwrap_or_else(|| Path::new(""));
        Self {
            root: parent.join("ops-files"),
        }
    }

    pub fn dev(&self) -> PathBuf {
        self.root.join("misc").join("dev.yml")
    }

    pub fn bootstrap(&self) -> PathBuf {
        self.root.join("misc").join("bootstrap.yml")
    }

    pub fn dns_runtime_config(&self) -> PathBuf {
        self.root.join("use-runtime-config-bosh-dns.yml")
    }

    pub fn http_proxy(&self) -> PathBuf {
        self.root.join("add-http-proxy.yml")
    }

    pub fn https_proxy(&self) -> PathBuf {
        self.root.join("add-https-proxy.yml")
    }

    pub fn no_proxy(&self) -> PathBuf {
        self.root.join("add-no-proxy.yml")
    }

    pub fn cf_routing(&self) -> PathBuf {
        self.root.join("cf-routing.yml")
    }

    pub fn addons_spec(&self) -> PathBuf {
        self.root.join("addons-spec.yml")
    }

    /// AWS load-balancer overlay.
    pub fn aws_lb(&self) -> PathBuf {
        self.root.join("iaas").join("aws").join("lb.yml")
    }

    pub fn gcp_service_key_worker(&self) -> PathBuf {
        self.root
            .join("iaas")
            .join("gcp")
            .join("add-service-key-worker.yml")
    }

    pub fn gcp_service_key_master(&self) -> PathBuf {
        self.root
            .join("iaas")
            .join("gcp")
            .join("add-service-key-master.yml")
    }

    /// Provider-specific cloud-provider overlay for the resolved IaaS.
    pub fn cloud_provider(&self, iaas: &str) -> PathBuf {
        self.root.join("iaas").join(iaas).join("cloud-provider.yml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_layout_derives_well_known_files() {
        let layout = EnvironmentLayout::new(PathBuf::from("/envs/prod"));
        assert_eq!(
            layout.settings_document(),
            PathBuf::from("/envs/prod/director.yml")
        );
        assert_eq!(
            layout.deployment_vars_file("snowflake"),
            PathBuf::from("/envs/prod/snowflake-vars.yml")
        );
        assert_eq!(layout.environment_name().as_deref(), Some("prod"));
    }

    #[test]
    fn ops_file_tree_is_rooted_next_to_the_manifest() {
        let layout = OpsFileLayout::for_manifest(Path::new("/repo/manifests/cfcr.yml"));
        assert_eq!(
            layout.dev(),
            PathBuf::from("/repo/manifests/ops-files/misc/dev.yml")
        );
        assert_eq!(
            layout.cloud_provider("vsphere"),
            PathBuf::from("/repo/manifests/ops-files/iaas/vsphere/cloud-provider.yml")
        );
    }
}
