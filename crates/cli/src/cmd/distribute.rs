//! Distribute command implementation.

use tracing::error;
use vaultdist_core::Distributor;
use vaultdist_core::config::{ConfigLoader, ConfigOverrides};

use super::output;
use crate::RepoArgs;
use crate::logging;

/// Run a full distribution and print where notes went.
pub fn run(repos: &RepoArgs, json: bool) {
    let overrides = ConfigOverrides {
        vault_root: repos.vault.clone(),
        public: repos.public.clone(),
        research: repos.research.clone(),
        private: repos.private.clone(),
    };

    let rc = match ConfigLoader::load(&overrides) {
        Ok(rc) => rc,
        Err(e) => fail(&format!("Error loading config: {e}")),
    };

    // Checked before any directory is created or walked
    let distributor = match Distributor::from_config(&rc) {
        Ok(d) => d,
        Err(e) => fail(&e.to_string()),
    };

    match distributor.distribute() {
        Ok(report) => {
            if json {
                output::print_report_json(&report);
            } else {
                output::print_report(&report);
            }
        }
        Err(e) => fail(&format!("Error during distribution: {e}")),
    }
}

fn fail(msg: &str) -> ! {
    error!("{msg}");
    eprintln!("{msg}");
    logging::flush();
    std::process::exit(1);
}
