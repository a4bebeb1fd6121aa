//! Filesystem existence probing behind a trait seam.
//!
//! Guards in the composition pipeline only ever ask "does this path exist";
//! lookup errors are indistinguishable from absence on purpose, matching the
//! permissive file-not-found-means-no-overlay policy.

use std::path::Path;

/// Pure existence predicate over the local filesystem.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl PathProbe for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    /// In-memory probe double holding the set of paths that exist.
    #[derive(Debug, Default)]
    pub struct FakeFs {
        present: BTreeSet<PathBuf>,
    }

    impl FakeFs {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, path: impl Into<PathBuf>) -> Self {
            self.present.insert(path.into());
            self
        }
    }

    impl PathProbe for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            self.present.contains(path)
        }
    }

    #[test]
    fn fake_only_reports_registered_paths() {
        let fs = FakeFs::new().with("env/creds.yml");
        assert!(fs.exists(Path::new("env/creds.yml")));
        assert!(!fs.exists(Path::new("env/director-secrets.yml")));
    }
}
