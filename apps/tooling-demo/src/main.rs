use anyhow::Result;
use clap::{Parser, Subcommand};
use runtime::{AppConfig, CliArgs};
use std::io::Write;
use std::path::PathBuf;
use users_info::{config::UsersInfoConfig, UsersInfo};

mod demo;

/// Tooling Demo - typed user model, aggregation helpers and idiom catalog
#[derive(Parser)]
#[command(name = "tooling-demo")]
#[command(about = "Tooling Demo - typed user model, aggregation helpers and idiom catalog")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print current configuration and exit
    #[arg(long, global = true)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Greet sample users, show their account age and summary counts
    Users,
    /// Arithmetic, text and settings helpers
    Utils,
    /// Idiomatic replacements for common code smells
    Idioms,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, &config.resolved_home_dir()?);
    tracing::info!(config = ?args.config, "Tooling demo starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Users) {
        Commands::Users => {
            let module = UsersInfo::init(users_info_config(&config)?);
            demo::users(&mut out, module.api().as_ref())?;
        }
        Commands::Utils => demo::utils(&mut out)?,
        Commands::Idioms => demo::idioms(&mut out)?,
    }

    out.flush()?;
    Ok(())
}

/// A present but malformed `users_info` section is an error; an absent one means defaults.
fn users_info_config(config: &AppConfig) -> Result<UsersInfoConfig> {
    if config.modules.contains_key(UsersInfo::NAME) {
        config.module_config_required(UsersInfo::NAME)
    } else {
        Ok(UsersInfoConfig::default())
    }
}
