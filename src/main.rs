#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use subnet_quiz::{
    init_logging, parse_cidr, print_answer_sheet, CliGame, FileStore, NullStore, ScoreStore,
    Session, HIGH_SCORE_KEY,
};

/// Environment variable overriding the default score directory.
#[cfg(feature = "std")]
const HOME_ENV: &str = "SUBNET_QUIZ_HOME";
#[cfg(feature = "std")]
const DEFAULT_STORE_DIR: &str = ".subnet-quiz";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play the timed subnetting quiz in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Directory holding the saved high score")]
        store: Option<PathBuf>,
        #[arg(long, help = "Keep the high score in memory only")]
        no_save: bool,
    },
    /// Print the special-use category and boundaries of ADDRESS/PREFIX.
    Solve {
        #[arg(value_name = "ADDRESS/PREFIX")]
        cidr: String,
    },
    /// Show or reset the saved high score.
    Score {
        #[arg(long, help = "Directory holding the saved high score")]
        store: Option<PathBuf>,
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(feature = "std")]
fn store_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(HOME_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR))
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, store, no_save } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let store: Box<dyn ScoreStore> = if no_save {
                Box::new(NullStore)
            } else {
                Box::new(FileStore::new(store_dir(store)))
            };
            let mut session = Session::new(rng, store);
            session.begin();
            println!("Subnet quiz: stop the counter, then classify or calculate. Type q to quit.");
            CliGame::new(&mut session).run().await?;
        }
        Commands::Solve { cidr } => {
            let (addr, prefix) =
                parse_cidr(&cidr).with_context(|| format!("cannot read {:?}", cidr))?;
            print_answer_sheet(addr, prefix)?;
        }
        Commands::Score { store, reset } => {
            let mut store = FileStore::new(store_dir(store));
            if reset {
                store.set(HIGH_SCORE_KEY, "0")?;
                println!("High score reset.");
            } else {
                let score = store
                    .get(HIGH_SCORE_KEY)?
                    .and_then(|s| s.trim().parse::<u32>().ok())
                    .unwrap_or(0);
                println!("High score: {}", score);
            }
        }
    }
    Ok(())
}
