//! Prepare an image for an e-paper panel and show it.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use show_image_lib::cli::CliArgs;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = CliArgs::parse();
    show_image_lib::run(args)
}
