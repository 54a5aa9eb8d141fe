mod app;
mod cache;
mod cli;
mod config;
mod consts;
mod error;
mod output;
mod session;
mod transcript;
mod utils;

use clap::Parser;
use tracing::debug;

use app::CommandContext;
use cli::Cli;
use config::Config;
use output::IconTable;
use utils::init_logging;

fn main() {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());
    let cli = cli.with_config(&config);

    init_logging(cli.debug);
    if let Some(path) = &config.source {
        debug!("Loaded config from {}", path.display());
    }

    let icons = IconTable::with_overrides(&config.icons);
    let ctx = CommandContext {
        cli: &cli,
        icons: &icons,
    };
    std::process::exit(app::run(&ctx));
}
