//! Secret Santa binary.
//!
//! # Usage
//!
//! ```bash
//! # Dry run: draw, save, and list the pairings
//! secret-santa pair --people config/names.json --constraints config/constraints.json
//!
//! # Reproduce an earlier draw without revealing it
//! secret-santa pair --people config/names.json --seed 4242 --secret
//!
//! # Verify saved pairings
//! secret-santa check --people config/names.json
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use santa_cli::{
    CliError, DEFAULT_OUTPUT_DIR, PairOptions, SystemSeed, check_pairings, create_pairings,
    write_report,
};
use santa_core::{HatConfig, NeverPolicy};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Secret Santa pairing tool
#[derive(Parser, Debug)]
#[command(name = "secret-santa")]
#[command(about = "Draw Secret Santa pairings")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw pairings and save them
    Pair(PairArgs),

    /// Check saved pairings against the participants file
    Check {
        /// JSON file with participant names and contact info
        #[arg(short, long)]
        people: PathBuf,

        /// Directory holding the saved pairings
        #[arg(short = 'D', long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
}

#[derive(ClapArgs, Debug)]
struct PairArgs {
    /// JSON file with participant names and contact info
    #[arg(short, long)]
    people: PathBuf,

    /// JSON file with always/never constraints
    #[arg(short, long)]
    constraints: Option<PathBuf>,

    /// Random seed to use to generate repeatable pairings
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory where to store the pairings
    #[arg(short = 'D', long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Attempts before giving up on never-constraints
    #[arg(long, default_value_t = HatConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Where never-constraints are enforced
    #[arg(long, value_enum, default_value_t = NeverPolicyArg::Everywhere)]
    never_policy: NeverPolicyArg,

    /// Do not list the pairings (the organiser is taking part)
    #[arg(long)]
    secret: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum NeverPolicyArg {
    /// Always enforce never-constraints
    Everywhere,
    /// Only enforce them alongside always-constraints
    WithAlwaysOnly,
}

impl From<NeverPolicyArg> for NeverPolicy {
    fn from(arg: NeverPolicyArg) -> Self {
        match arg {
            NeverPolicyArg::Everywhere => Self::Everywhere,
            NeverPolicyArg::WithAlwaysOnly => Self::WithAlwaysOnly,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { args.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        },
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Pair(args) => {
            let options = PairOptions {
                people_path: args.people,
                constraints_path: args.constraints,
                seed: args.seed,
                output_dir: args.output_dir,
                hat: HatConfig {
                    max_attempts: args.max_attempts,
                    never_policy: args.never_policy.into(),
                    ..HatConfig::default()
                },
            };

            let outcome = create_pairings(&options, &SystemSeed::new())?;

            if args.secret {
                tracing::info!("Pairings not listed (--secret)");
            } else {
                tracing::warn!("Dry run: pairings are listed below and nothing is sent");
                write_report(&mut std::io::stdout().lock(), &outcome.assignment)?;
            }
            Ok(())
        },

        Command::Check { people, output_dir } => {
            check_pairings(&people, &output_dir)?;
            Ok(())
        },
    }
}
