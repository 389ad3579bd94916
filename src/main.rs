use std::{io, path::PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{menu::Menu, storage::sqlite::SqliteProjectRepository};

mod menu;
mod models;
mod services;
mod storage;
mod ui;

#[derive(Parser)]
#[command(
    name = "projects",
    about = "Keep track of your DIY projects from the terminal"
)]
struct Cli {
    /// SQLite database file (defaults to the platform data directory)
    #[arg(long, env = "PROJECTS_DATABASE")]
    database: Option<PathBuf>,

    /// Log more to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("projects")
        .join("projects.db")
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let database_path = cli.database.unwrap_or_else(default_database_path);

    // Create parent directory if it doesn't exist
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent).unwrap_or_else(|e| {
            eprintln!("Error: Failed to create data directory: {}", e);
            std::process::exit(1);
        });
    }

    let repository = match SqliteProjectRepository::open(&database_path) {
        Ok(repository) => repository,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut menu = Menu::new(repository, io::stdin().lock(), io::stdout().lock());
    if let Err(e) = menu.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
