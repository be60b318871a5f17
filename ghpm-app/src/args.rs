use clap::{Args as ClapArgs, Parser, Subcommand};
use ghpm_lib::{DEFAULT_API_URL, STARS_THRESHOLD};

const THANOS_SNAP_LONG_ABOUT: &str = "Switch all your non-starred and non-fork public repositories to private.

By default, starred repositories with 1 stars and forks are not turned private.";

const THANOS_SNAP_EXAMPLE: &str = "Examples:
  # request all your non-starred and non-fork public repositories to turn private
  $ ghpm thanos_snap";

#[derive(Debug, Parser)]
#[clap(name = "ghpm", about = "Bulk-switch your public GitHub repositories to private")]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(
        name = "thanos_snap",
        about = "Switch all your non-starred and non-fork public repositories to private",
        long_about = THANOS_SNAP_LONG_ABOUT,
        after_help = THANOS_SNAP_EXAMPLE
    )]
    ThanosSnap(ThanosSnapArgs),

    #[clap(name = "version", about = "Show the version number of ghpm, then exit")]
    Version,
}

#[derive(Debug, ClapArgs)]
pub struct ThanosSnapArgs {
    #[clap(
        short = 't',
        long = "token",
        help = "GitHub REST API token",
        env = "GH_TOKEN",
        hide_env_values = true
    )]
    pub github_token: String,

    #[clap(
        long = "api-url",
        help = "GitHub REST API base URL",
        env = "GH_API_URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: String,

    #[clap(
        short = 's',
        long = "stars-threshold",
        help = "Keep repositories with at least this many stars public",
        default_value_t = STARS_THRESHOLD
    )]
    pub stars_threshold: u32,

    #[clap(
        long = "include-forks",
        help = "Also switch forks to private",
        default_value = "false"
    )]
    pub include_forks: bool,
}
