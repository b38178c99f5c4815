#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Split an Obsidian-style vault into per-audience MkDocs repositories.
//!
//! Every markdown note declares an `arm` (`public`, `research` or `private`)
//! in its frontmatter and is copied into the `docs/` directory of the matching
//! repository. Shared asset directories are mirrored into all of them.

pub mod arm;
pub mod config;
pub mod distribute;
pub mod frontmatter;
pub mod paths;
pub mod vault;

pub use arm::Arm;
pub use distribute::{DistributeError, DistributionReport, Distributor};
