//! Sourdough Calculator
//!
//! Computes ingredient weights and fermentation times for a sourdough loaf.

mod calculator;
mod input;
mod models;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::input::Command;
use crate::models::InputConfiguration;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "sourdough-calculator")]
#[command(about = "Sourdough ratio and fermentation timing calculator")]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a recipe from the given inputs
    Calc {
        /// Flour amount in grams
        #[arg(long, default_value = "1000", allow_hyphen_values = true)]
        flour: String,

        /// Flour protein percentage (informational)
        #[arg(long, default_value = "12.5", allow_hyphen_values = true)]
        protein: String,

        /// Starter amount as a percentage of flour
        #[arg(long, default_value = "20", allow_hyphen_values = true)]
        starter: String,

        /// Room temperature in degrees Celsius
        #[arg(long, default_value = "22", allow_hyphen_values = true)]
        temp: String,

        /// Hydration as a percentage of flour
        #[arg(long, default_value = "75", allow_hyphen_values = true)]
        hydration: String,

        /// Proof in the fridge
        #[arg(long)]
        fridge: bool,

        /// Also show unrounded values
        #[arg(short, long)]
        verbose: bool,
    },

    /// Edit inputs line by line and see the recipe update after each change
    Interactive,

    /// Show the default inputs
    Defaults,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    match cli.command {
        Commands::Calc {
            flour,
            protein,
            starter,
            temp,
            hydration,
            fridge,
            verbose,
        } => {
            let config = InputConfiguration {
                flour_amount: input::coerce_number(&flour),
                flour_protein: input::coerce_number(&protein),
                starter_amount: input::coerce_number(&starter),
                room_temp: input::coerce_number(&temp),
                hydration: input::coerce_number(&hydration),
                fridge_proof: fridge,
            };
            let session = Session::new(config);

            println!("{}", session.card());
            if verbose {
                print!("{}", calculator::format_raw_recipe(session.recipe()));
            }
        }

        Commands::Interactive => {
            let stdin = io::stdin();
            run_interactive(stdin.lock(), io::stdout().lock())?;
        }

        Commands::Defaults => {
            print!("{}", InputConfiguration::default());
        }
    }

    Ok(())
}

/// Read commands until EOF or `quit`, re-rendering the recipe after each edit
fn run_interactive<R: BufRead, W: Write>(reader: R, mut out: W) -> Result<()> {
    let mut session = Session::default();

    writeln!(out, "Sourdough calculator. Type 'help' for commands.\n")?;
    writeln!(out, "{}", session.card())?;

    for line in reader.lines() {
        let line = line?;

        match input::parse_command(&line) {
            Ok(Command::Edit(edit)) => {
                session.apply(edit);
                render(&mut out, &session)?;
            }
            Ok(Command::ToggleFridge) => {
                session.toggle_fridge_proof();
                render(&mut out, &session)?;
            }
            Ok(Command::Show) => {
                writeln!(out, "{}", session.config())?;
                writeln!(out, "{}", session.card())?;
            }
            Ok(Command::Reset) => {
                session.reset();
                render(&mut out, &session)?;
            }
            Ok(Command::Help) => write!(out, "{}", input::help_text())?,
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => {}
            Err(e) => {
                warn!(line = %line.trim(), "rejected input");
                eprintln!("  {}", e);
            }
        }
        out.flush()?;
    }

    Ok(())
}

fn render<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    debug!(recomputes = session.recomputes(), "recipe re-rendered");
    writeln!(out, "{}", session.card())?;
    Ok(())
}
