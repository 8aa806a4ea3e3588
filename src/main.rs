mod cli;
mod config;
mod display;
mod error;
mod ollama;
mod store;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prio")]
#[command(about = "Manage your priorities with optional Ollama summary", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new priority
    Add {
        /// Priority level (lower is more important)
        #[arg(allow_negative_numbers = true)]
        priority: i64,

        /// Title of the priority item
        title: String,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List all priorities, sorted by priority level
    List {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Remove a priority by index
    Remove {
        /// 1-based index in stored (insertion) order; may differ from the sorted ranks shown by 'list'
        #[arg(allow_negative_numbers = true)]
        index: i64,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Summarize priorities using Ollama
    Summarize {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize prio.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Add {
            priority,
            title,
            config,
        }) => cli::add::run(config, priority, title),
        Some(Commands::List { config }) => cli::list::run(config),
        Some(Commands::Remove { index, config }) => cli::remove::run(config, index),
        Some(Commands::Summarize { config }) => cli::summarize::run(config),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        None => {
            let _ = Cli::command().print_help();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
