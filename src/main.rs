use clap::Parser;
use groupcolor::cli::{self, Cli};
use groupcolor::config::Config;
use groupcolor::errors::Result;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(Some(cli.overrides()));

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    cli::run(&cli, &config)
}
