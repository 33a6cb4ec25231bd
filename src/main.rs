use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use envault::backend::LocalBackend;
use envault::config::Config;
use envault::logger::Logger;
use envault::storage::{FileStore, LocalStorage};
use envault::ui::{self, AppServices};

enum Command {
    Run { config_path: Option<PathBuf> },
    GenerateConfig { path: Option<PathBuf> },
    Help,
}

fn parse_args() -> Result<Command> {
    let mut args = std::env::args().skip(1);
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--generate-config" => {
                return Ok(Command::GenerateConfig {
                    path: args.next().map(PathBuf::from),
                })
            }
            "--config" | "-c" => {
                let path = args.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(Command::Run { config_path })
}

fn print_help() {
    println!("envault - manage per-project .env files");
    println!();
    println!("Usage: envault [--config <path>]");
    println!("       envault --generate-config [path]");
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = match parse_args()? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::GenerateConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)?;
            return Ok(());
        }
        Command::Run { config_path } => config_path,
    };

    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    let database_path = config.database_path()?;
    logger.log(format!("Opening database at {}", database_path.display()));

    let storage = LocalStorage::new(&database_path).await?;
    let store = FileStore::from_default_location()?;

    let services = AppServices {
        backend: Arc::new(LocalBackend::new(storage)),
        store: Arc::new(store),
        logger,
    };

    ui::run_app(config, services).await
}
