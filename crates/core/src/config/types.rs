use std::path::PathBuf;

use serde::Serialize;

use crate::arm::Arm;

/// Subdirectory of every repository that receives the distributed notes.
pub const DOCS_DIR: &str = "docs";

/// A destination MkDocs repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoTarget {
    pub arm: Arm,
    /// Repository root.
    pub path: PathBuf,
}

impl RepoTarget {
    pub fn new(arm: Arm, path: PathBuf) -> Self {
        Self { arm, path }
    }

    /// Directory notes and assets are written into.
    pub fn docs_path(&self) -> PathBuf {
        self.path.join(DOCS_DIR)
    }
}

/// One repository per arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destinations {
    public: RepoTarget,
    research: RepoTarget,
    private: RepoTarget,
}

impl Destinations {
    pub fn new(public: PathBuf, research: PathBuf, private: PathBuf) -> Self {
        Self {
            public: RepoTarget::new(Arm::Public, public),
            research: RepoTarget::new(Arm::Research, research),
            private: RepoTarget::new(Arm::Private, private),
        }
    }

    pub fn get(&self, arm: Arm) -> &RepoTarget {
        match arm {
            Arm::Public => &self.public,
            Arm::Research => &self.research,
            Arm::Private => &self.private,
        }
    }

    /// Iterate repositories in public, research, private order.
    pub fn iter(&self) -> impl Iterator<Item = &RepoTarget> {
        Arm::ALL.into_iter().map(|arm| self.get(arm))
    }
}

/// Values supplied on the command line, taking precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub vault_root: Option<PathBuf>,
    pub public: Option<PathBuf>,
    pub research: Option<PathBuf>,
    pub private: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn repo(&self, arm: Arm) -> Option<&PathBuf> {
        match arm {
            Arm::Public => self.public.as_ref(),
            Arm::Research => self.research.as_ref(),
            Arm::Private => self.private.as_ref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Canonical vault root notes are read from.
    pub vault_root: PathBuf,
    pub destinations: Destinations,
}
