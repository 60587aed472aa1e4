use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use recipes_core::RecipeError;
use recipes_infrastructure::AppConfig;

mod commands;
mod logging;

use commands::recipe::RecipeArgs;

#[derive(Parser)]
#[command(name = "recipes")]
#[command(about = "Recipes - a personal recipe catalog kept on this machine", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding stored recipes and the session
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remember your name as the local user
    Login {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Forget the local user
    Logout,
    /// Show the local user
    Whoami,
    /// Add a recipe
    Add {
        #[command(flatten)]
        args: RecipeArgs,
    },
    /// Edit a recipe; unspecified fields keep their current values
    Edit {
        id: String,
        #[command(flatten)]
        args: RecipeArgs,
    },
    /// Delete a recipe
    Delete { id: String },
    /// List all recipes, most recent first
    List,
    /// Find recipes by title, category or ingredient
    Search { query: String },
    /// Show one recipe in full
    Show { id: String },
    /// Show your profile and catalog statistics
    Profile,
    /// List the recommended categories
    Categories,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if report(&err) => ExitCode::FAILURE,
        Err(_) => ExitCode::SUCCESS,
    }
}

/// Prints a failed command's error. Returns whether the command failed.
///
/// Lookup misses are notices, like the store's silent no-op; validation
/// failures are notices that fail the command; everything else is an error.
fn report(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<RecipeError>() {
        Some(e) if e.is_not_found() => {
            eprintln!("{}", format!("⚠ {}", e).yellow());
            false
        }
        Some(e) if e.is_validation() => {
            eprintln!("{}", format!("⚠ {}", e).yellow());
            true
        }
        _ => {
            eprintln!("{}", format!("Error: {:#}", err).red());
            true
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }

    let _guard = logging::init(&config.logging, cli.verbose)?;
    let app = commands::App::open(config)?;

    match cli.command {
        Commands::Login { name } => commands::session::login(&app, &name.join(" "))?,
        Commands::Logout => commands::session::logout(&app)?,
        Commands::Whoami => commands::session::whoami(&app),
        Commands::Add { args } => commands::recipe::add(app, args)?,
        Commands::Edit { id, args } => commands::recipe::edit(app, &id, args)?,
        Commands::Delete { id } => commands::recipe::delete(app, &id)?,
        Commands::List => commands::recipe::list(&app),
        Commands::Search { query } => commands::recipe::search(&app, &query),
        Commands::Show { id } => commands::recipe::show(&app, &id)?,
        Commands::Profile => commands::profile::show(&app)?,
        Commands::Categories => commands::recipe::categories(),
    }

    Ok(())
}
