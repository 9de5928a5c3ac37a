use clap::Parser;
use genesis::{
    cli::{Cli, Commands},
    replay::{load_payloads, replay},
};
use genesis_deposit::config::LedgerConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Set the default log level to `info` if not set
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Root(cmd) => {
            println!("{}", cmd.deposit_data_root()?);
        }
        Commands::Replay(cmd) => {
            info!("Replaying deposits from {}", cmd.payloads.display());
            let config = LedgerConfig::from_path(&cmd.config)?;
            replay(&config, &load_payloads(&cmd.payloads)?)?;
        }
    }

    Ok(())
}
