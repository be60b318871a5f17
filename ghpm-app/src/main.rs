mod args;
mod thanos_snap;
mod version;

use crate::args::{Args, Command};
use anyhow::Result;
use clap::Parser;
use env_logger::Env;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match &args.command {
        Command::ThanosSnap(snap_args) => thanos_snap::run(snap_args).await?,
        Command::Version => version::run(),
    }

    Ok(())
}
