//! Juiceyum CLI - the personal package manager

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod context;
mod error;
mod exit_codes;
mod logging;
mod progress;
mod suggest;

#[derive(Parser)]
#[command(name = "juiceyum")]
#[command(version)]
#[command(about = "Personal package manager for third-party apps", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Download directory for installer binaries
    #[arg(long = "path", global = true, default_value = "downloads")]
    path: PathBuf,

    /// Use silent install arguments when the catalog entry defines them
    #[arg(long, global = true)]
    silent: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage manifest repositories
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },

    /// Browse, install and upgrade apps
    Apps {
        #[command(subcommand)]
        command: AppsCommands,
    },
}

#[derive(Subcommand)]
enum RepoCommands {
    /// Register a manifest URL (the repo name is derived from the URL)
    Add { url: String },

    /// Remove a repository by name
    Remove { name: String },

    /// List registered repositories
    List,
}

#[derive(Subcommand)]
enum AppsCommands {
    /// List every app in the catalog
    List,

    /// Search apps by name or description
    Search { term: String },

    /// Show everything the catalog knows about an app
    Info { name: String },

    /// Install one or more apps
    Install {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Uninstall one or more apps
    Uninstall {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Rebuild the catalog from all registered repositories
    Update,

    /// Reinstall every app whose catalog version changed
    Upgrade,
}

#[tokio::main]
async fn main() {
    miette::set_panic_hook();

    let cli = Cli::parse();
    logging::init(cli.debug);

    let result = match cli.command {
        Commands::Repo { command } => match command {
            RepoCommands::Add { url } => commands::repo::add(&url),
            RepoCommands::Remove { name } => commands::repo::remove(&name),
            RepoCommands::List => commands::repo::list(),
        },
        Commands::Apps { command } => match command {
            AppsCommands::List => commands::list::run().await,
            AppsCommands::Search { term } => commands::search::run(&term).await,
            AppsCommands::Info { name } => commands::info::run(&name).await,
            AppsCommands::Install { names } => {
                commands::install::run(&names, &cli.path, cli.silent).await
            }
            AppsCommands::Uninstall { names } => commands::uninstall::run(&names).await,
            AppsCommands::Update => commands::update::run().await,
            AppsCommands::Upgrade => commands::upgrade::run(&cli.path, cli.silent).await,
        },
    };

    if let Err(err) = result {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_structure_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
