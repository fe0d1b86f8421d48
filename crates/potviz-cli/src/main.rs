mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands, GalleryArgs};
use crate::config::{DefaultsConfig, render_style};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 potviz CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let defaults = DefaultsConfig::default();
    let style = render_style(&cli.style, &defaults)?;

    let command_result = match cli.command {
        Some(Commands::Gallery(args)) => {
            info!("Dispatching to 'gallery' command.");
            commands::gallery::run(args, &style, &defaults).map(|_| ())
        }
        Some(Commands::Potential(args)) => {
            info!("Dispatching to 'potential' command.");
            commands::potential::run(args, &style).map(|_| ())
        }
        Some(Commands::Spring(args)) => {
            info!("Dispatching to 'spring' command.");
            commands::spring::run(args, &style, &defaults).map(|_| ())
        }
        None => {
            info!("No subcommand given, rendering the full gallery.");
            commands::gallery::run(GalleryArgs::default(), &style, &defaults).map(|_| ())
        }
    };

    match &command_result {
        Ok(()) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
