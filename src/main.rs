#![forbid(unsafe_code)]
//! Primos Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use primos::commands::{
    execute_check, execute_first, execute_init, execute_run, execute_up_to, CheckOptions,
    FirstOptions, InitOptions, RunOptions, UpToOptions,
};
use primos::config::DEFAULT_CONFIG_PATH;
use primos::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "primos")]
#[command(about = "Find prime numbers by incremental trial division")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Do not print the timestamp trailer
    #[arg(long, global = true)]
    no_trailer: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every prime up to LIMIT
    UpTo {
        /// Inclusive upper bound
        #[arg(allow_negative_numbers = true)]
        limit: i64,
    },

    /// Print the first COUNT primes
    First {
        /// Number of primes to find
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Give up after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Run both modes in sequence, prompting for missing values
    Run {
        /// Inclusive upper bound for the first listing
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Number of primes for the second listing
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Skip interactive prompts (use config values)
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check whether a single number is prime
    Check {
        /// Number to test
        number: u64,
    },

    /// Write a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format argument
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    List,
    Json,
    Lines,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "primos=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load_or_default(&cli.config)?;
    config.validate()?;

    if let Some(format) = cli.format {
        config.format = match format {
            FormatArg::List => OutputFormat::List,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Lines => OutputFormat::Lines,
        };
    }
    if cli.no_trailer {
        config.trailer.enabled = false;
    }
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // init must work even when the existing file is unreadable
    if let Commands::Init { force } = cli.command {
        return execute_init(InitOptions {
            path: cli.config,
            force,
        });
    }

    let config = load_config(&cli)?;

    match cli.command {
        Commands::UpTo { limit } => {
            execute_up_to(UpToOptions { limit }, &config)?;
        }

        Commands::First { count, timeout_ms } => {
            execute_first(FirstOptions { count, timeout_ms }, &config)?;
        }

        Commands::Run { limit, count, yes } => {
            execute_run(RunOptions { limit, count, yes }, &config)?;
        }

        Commands::Check { number } => {
            execute_check(CheckOptions { number })?;
        }

        Commands::Init { .. } => unreachable!("handled before config loading"),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), err);
        std::process::exit(1);
    }
}
