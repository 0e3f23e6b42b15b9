//! CLI frontend for the gacha pull simulator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::draw::CustomArgs;

#[derive(Parser)]
#[command(
    name = "gacha",
    about = "Gacha pull simulator with pity, soft pity and pickup rules",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Load profiles from a JSON file instead of the built-in catalog
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available game profiles
    List {
        /// Print the catalog as a profile file instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the rules of one profile and any configuration issues
    Show {
        /// Profile id (e.g. game_b)
        id: String,
    },

    /// Print the effective SSR rate for each pity count
    Rate {
        /// Profile id
        id: String,

        /// First pity count (default: 1)
        #[arg(long)]
        from: Option<u32>,

        /// Last pity count (default: hard pity, or 100)
        #[arg(long)]
        to: Option<u32>,
    },

    /// Draw from a profile and print each pull
    Draw {
        /// Profile id
        id: String,

        /// Draws per pull
        #[arg(short = 'n', long, default_value = "10")]
        count: u32,

        /// Number of pulls
        #[arg(short, long, default_value = "1")]
        batches: u32,

        /// RNG seed for reproducible draws
        #[arg(short, long, default_value = "42")]
        seed: u64,

        #[command(flatten)]
        custom: CustomArgs,

        /// Print the session as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run many draws and report aggregate statistics
    Simulate {
        /// Profile id
        id: String,

        /// Total number of draws
        #[arg(short, long, default_value = "10000")]
        draws: u64,

        /// RNG seed for reproducible runs
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Draws per pull
        #[arg(long, default_value = "10")]
        batch: u32,
    },

    /// Validate a profile file
    Check {
        /// Path to a JSON profile file
        file: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let profiles = cli.profiles.as_deref();

    let result = match cli.command {
        Commands::List { json } => commands::list::run(profiles, json),
        Commands::Show { id } => commands::show::run(profiles, &id),
        Commands::Rate { id, from, to } => commands::rate::run(profiles, &id, from, to),
        Commands::Draw {
            id,
            count,
            batches,
            seed,
            custom,
            json,
        } => commands::draw::run(profiles, &id, count, batches, seed, &custom, json),
        Commands::Simulate {
            id,
            draws,
            seed,
            batch,
        } => commands::simulate::run(profiles, &id, draws, seed, batch),
        Commands::Check { file } => commands::check::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
