//! Conveyor CLI entry point.

use clap::Parser;

use conveyor::cli::{self, Cli, Commands};
use conveyor::infrastructure::config::ConfigLoader;
use conveyor::infrastructure::logging::Logging;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let config = match args.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => cli::handle_error(&err, args.json),
    };

    let _logging = match Logging::init(&config.logging) {
        Ok(logging) => logging,
        Err(err) => cli::handle_error(&err, args.json),
    };

    let result = match args.command {
        Commands::CheckConfig => cli::commands::check_config::execute(&config, args.json),
        Commands::Poll => cli::commands::poll::execute(&config, args.json).await,
        Commands::Notify(ref notify_args) => {
            cli::commands::notify::execute(notify_args, &config, args.json).await
        }
        Commands::Run => cli::commands::run::execute(&config).await,
    };

    if let Err(err) = result {
        cli::handle_error(&err, args.json);
    }
}
