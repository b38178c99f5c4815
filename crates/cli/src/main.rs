mod cmd;
mod logging;

use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "vdist",
    version,
    about = "Distribute Obsidian notes into public, research and private MkDocs repos",
    long_about = "Distribute Obsidian notes into public, research and private MkDocs repos.\n\n\
        Each note is routed by the `arm` field of its YAML frontmatter (public, research or \
        private; anything else means research). Repository locations come from the flags \
        below, then PUB_REPO / RES_REPO / PRI_REPO, then ../mkdocs-<arm> next to the vault."
)]
struct Cli {
    #[command(flatten)]
    repos: RepoArgs,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(Debug, Args)]
pub struct RepoArgs {
    /// Vault to read notes from [default: current directory]
    #[arg(long)]
    pub vault: Option<PathBuf>,

    /// Public repository root (overrides PUB_REPO)
    #[arg(long)]
    pub public: Option<PathBuf>,

    /// Research repository root (overrides RES_REPO)
    #[arg(long)]
    pub research: Option<PathBuf>,

    /// Private repository root (overrides PRI_REPO)
    #[arg(long)]
    pub private: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit stderr log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    logging::init(&cli.log);

    cmd::distribute::run(&cli.repos, cli.json);

    logging::flush();
}
