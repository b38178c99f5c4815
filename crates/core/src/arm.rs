//! Document classification: which repository ("arm") a note belongs to.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::types::{Destinations, RepoTarget};
use crate::frontmatter::Frontmatter;

/// Frontmatter key holding the arm of a note.
pub const ARM_KEY: &str = "arm";

/// The destination a note is published to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    Public,
    #[default]
    Research,
    Private,
}

impl Arm {
    /// Arm used for notes without a recognized `arm` value.
    pub const DEFAULT: Arm = Arm::Research;

    /// All arms, in reporting order.
    pub const ALL: [Arm; 3] = [Arm::Public, Arm::Research, Arm::Private];

    pub fn as_str(&self) -> &'static str {
        match self {
            Arm::Public => "public",
            Arm::Research => "research",
            Arm::Private => "private",
        }
    }

    /// Classify a note from its frontmatter.
    ///
    /// The value is trimmed and lowercased before matching. Missing, non-string
    /// and unrecognized values all fall back to [`Arm::DEFAULT`].
    pub fn from_frontmatter(fm: &Frontmatter) -> Arm {
        fm.get_str(ARM_KEY).and_then(|s| s.parse().ok()).unwrap_or(Arm::DEFAULT)
    }
}

impl fmt::Display for Arm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known arm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown arm: {0}")]
pub struct UnknownArm(pub String);

impl FromStr for Arm {
    type Err = UnknownArm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Arm::Public),
            "research" => Ok(Arm::Research),
            "private" => Ok(Arm::Private),
            _ => Err(UnknownArm(s.to_string())),
        }
    }
}

/// Pick the repository a note should be copied into.
pub fn resolve<'a>(fm: &Frontmatter, destinations: &'a Destinations) -> &'a RepoTarget {
    destinations.get(Arm::from_frontmatter(fm))
}
