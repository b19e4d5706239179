mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quiztex", about = "Study two-column CSV flashcards with LaTeX support", version)]
struct Cli {
    /// Use a specific config file (default: <config dir>/quiztex/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Seed for reproducible shuffles (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Study a deck in the interactive TUI
    #[cfg(feature = "tui")]
    Study {
        /// CSV file to open right away
        file: Option<PathBuf>,
    },

    /// Validate a deck file and report how many cards it holds
    Check {
        /// CSV file (question,answer per line)
        file: PathBuf,
    },

    /// Print the cards of a deck file
    Show {
        /// CSV file (question,answer per line)
        file: PathBuf,
    },

    /// Write the sample deck
    Sample {
        /// Destination path
        #[arg(long, short, default_value = quiztex_lib::sample::SAMPLE_FILE_NAME)]
        output: PathBuf,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let app = app::App::new(cli.config.as_deref(), cli.seed)?;

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(app, None)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        #[cfg(feature = "tui")]
        Some(Command::Study { file }) => {
            tui::run(app, file)?;
        }
        Some(Command::Check { file }) => {
            let valid = commands::check::run(&file, &cli.format, use_color)?;
            if !valid {
                std::process::exit(1);
            }
        }
        Some(Command::Show { file }) => {
            commands::show::run(&app, &file, &cli.format, use_color)?;
        }
        Some(Command::Sample { output, force }) => {
            commands::sample::run(&output, force, &cli.format)?;
        }
    }

    Ok(())
}
