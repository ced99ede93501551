//! CLI entry point for joining two images along a minimum-error seam

use clap::Parser;
use seamcut::io::cli::{Cli, JoinProcessor};
use seamcut::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> seamcut::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let processor = JoinProcessor::new(cli);
    processor.process()
}
