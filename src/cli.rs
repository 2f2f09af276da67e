use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use countdown_numbers::resolver::check_guess;
use countdown_numbers::solver::solve;
use countdown_numbers::utils::validate_selection;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// countdown-numbers - Solve and check Countdown numbers rounds
#[derive(Parser, Debug)]
#[command(name = "countdown-numbers")]
#[command(about = "Solve Countdown numbers rounds and check free-text guesses")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the closest reachable values to a target
    Solve {
        /// Target value to reach
        target: u64,
        /// Selection of numbers, each usable at most once
        #[arg(required = true)]
        numbers: Vec<u64>,
    },
    /// Validate and evaluate a guess against a selection
    Check {
        /// Guess expression, e.g. "(100+6)*3"
        expression: String,
        /// Selection of numbers available to the guess
        #[arg(required = true)]
        numbers: Vec<u64>,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Solve { target, numbers } => {
            validate_selection(&numbers).context("Invalid selection")?;

            info!("Solving for {} from {:?}", target, numbers);
            let solutions = solve(target, &numbers);

            if solutions.is_exact() {
                println!("{} is reachable exactly:\n", solutions.target);
            } else {
                println!(
                    "Closest results differ from {} by {}:\n",
                    solutions.target, solutions.difference
                );
            }
            for solution in &solutions.results {
                println!("{} = {}", solution.value, solution.expression);
            }
            Ok(())
        }
        Command::Check { expression, numbers } => {
            validate_selection(&numbers).context("Invalid selection")?;

            match check_guess(&expression, &numbers) {
                Ok((value, expanded)) => {
                    println!("{} = {}", value, expanded);
                    Ok(())
                }
                Err(err) => {
                    info!("Guess rejected: {}", err);
                    println!("Invalid.");
                    Ok(())
                }
            }
        }
    }
}
