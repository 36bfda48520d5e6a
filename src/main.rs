//! capture-cli entry point

use clap::Parser;
use env_logger::Env;

use audio_capture::cli::{run, Cli};
use audio_capture::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    run(&cli)
}
