use clap::Parser;
use tracing::error;

use codefolio::app::App;
use codefolio::cli::{self, Cli, Commands};
use codefolio::config::Config;
use codefolio::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    config.init_logging();

    if let Err(e) = dispatch(&cli, &config).await {
        error!(error = %e, "command failed");
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(cli: &Cli, config: &Config) -> Result<()> {
    let app = App::new(config)?;

    match &cli.command {
        Commands::Login(args) => cli::auth::login(&app, args).await,
        Commands::Logout => cli::auth::logout(&app).await,
        Commands::Status => cli::status::execute(&app, config),
        Commands::Portfolio => cli::portfolio::execute(&app).await,
        Commands::Profile(command) => cli::profile::execute(&app, command).await,
        Commands::Projects(command) => cli::projects::execute(&app, command).await,
        Commands::Skills(command) => cli::skills::execute(&app, command).await,
        Commands::Experiences(command) => cli::experiences::execute(&app, command).await,
    }
}
