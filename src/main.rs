use clap::Parser;

mod cli;
mod config;
mod error;
mod forge;
mod pruner;

use crate::error::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("prunosaurus")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let config = config::Config::resolve(&cli_args)?;

    let remote = forge::config::RemoteConfig {
        owner: config.owner.clone(),
        token: config.token.clone(),
        ..forge::config::RemoteConfig::default()
    };

    let github = forge::github::Github::new(remote)?;
    let pruner = pruner::Pruner::new(config, Box::new(github));

    pruner.run().await
}
