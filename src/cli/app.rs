//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use gridfacts::config::GlobalConfig;
use gridfacts::output::OutputMode;

use super::commands;

/// gridfacts - Facts about urban power dependencies and clean alternatives
#[derive(Parser, Debug)]
#[command(
    name = "gridfacts",
    version,
    about = "Facts about urban fossil-fuel power dependencies and clean alternatives",
    long_about = "Explain why cities face power cuts and what replaces fossil fuels.\n\n\
                  Each subcommand renders one section: the dependencies cities run on\n\
                  today, what outages cost, the clean alternatives, and a starter\n\
                  blueprint. 'search' narrows the dependency list by city or keyword."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable terminal colors in human output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize the problem and the datasets
    Overview,

    /// List the fossil-fuel dependencies cities run on today
    List,

    /// Filter the dependency list by a city or keyword
    Search {
        /// Free-text query (e.g., "Lagos", "coal", "diesel")
        query: String,
    },

    /// List the clean, affordable alternatives
    Solutions,

    /// List what power cuts cost cities
    Impacts,

    /// Show the starter blueprint for a school or small business
    Blueprint,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = GlobalConfig::load();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        match config.format.parse() {
            Ok(mode) => mode,
            Err(e) => {
                log::warn!("{e}");
                OutputMode::default()
            },
        }
    };

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Command::Overview) => commands::overview(output_mode),
        Some(Command::List) => commands::list(output_mode),
        Some(Command::Search { query }) => commands::search(&query, output_mode),
        Some(Command::Solutions) => commands::solutions(output_mode),
        Some(Command::Impacts) => commands::impacts(output_mode),
        Some(Command::Blueprint) => commands::blueprint(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("gridfacts v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("gridfacts v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'gridfacts --help' for usage");
                println!("Run 'gridfacts overview' to get started");
            }
            Ok(())
        },
    }
}
