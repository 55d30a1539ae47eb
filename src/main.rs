use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use euroscout::pipeline::{self, LiveOptions};
use euroscout::store;

#[derive(Parser)]
#[command(
    name = "euroscout",
    about = "Euroscout — harvest basketball teams, players, and defensive stats into one dataset",
    version,
    after_help = "Run 'euroscout <command> --help' for details on each command."
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the dataset from a previously captured raw JSON file
    Replay {
        /// Raw input path (defaults to the primary/fallback locations)
        #[arg(long)]
        raw: Option<PathBuf>,
        /// Output path for the processed dataset
        #[arg(long, default_value = store::DEFAULT_OUTPUT_PATH)]
        out: PathBuf,
    },
    /// Harvest live pages from the source site
    Live {
        /// Output path for the processed dataset
        #[arg(long, default_value = store::DEFAULT_OUTPUT_PATH)]
        out: PathBuf,
        /// Stop after discovering this many teams
        #[arg(long)]
        max_teams: Option<usize>,
        /// Stop after collecting this many player pages
        #[arg(long)]
        max_players: Option<usize>,
        /// Per-request timeout in milliseconds
        #[arg(long, default_value = "15000")]
        timeout: u64,
        /// Bounded concurrency for player-page fetches
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },
    /// Print the standings rows embedded in the raw input
    Standings {
        /// Raw input path (defaults to the primary/fallback locations)
        #[arg(long)]
        raw: Option<PathBuf>,
    },
    /// Print the player-stats rows embedded in the raw input
    PlayerStats {
        /// Raw input path (defaults to the primary/fallback locations)
        #[arg(long)]
        raw: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "euroscout=debug"
    } else if cli.quiet {
        "euroscout=error"
    } else {
        "euroscout=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let result = run(cli.command).await;

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }

    result
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Replay { raw, out } => {
            let dataset = pipeline::run_replay(raw.as_deref())?;
            store::write_dataset(&out, &dataset)?;
            println!("wrote {}", out.display());
            Ok(())
        }
        Commands::Live {
            out,
            max_teams,
            max_players,
            timeout,
            concurrency,
        } => {
            let opts = LiveOptions {
                max_teams,
                max_players,
                timeout_ms: timeout,
                concurrency,
                ..Default::default()
            };
            let dataset = pipeline::run_live(&opts).await?;
            store::write_dataset(&out, &dataset)?;
            println!("wrote {}", out.display());
            Ok(())
        }
        Commands::Standings { raw } => {
            let path = store::resolve_raw_path(raw.as_deref())?;
            let rows = store::get_standings(&store::load_raw(&path)?);
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok(())
        }
        Commands::PlayerStats { raw } => {
            let path = store::resolve_raw_path(raw.as_deref())?;
            let rows = store::get_player_stats(&store::load_raw(&path)?);
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "euroscout", &mut std::io::stdout());
            Ok(())
        }
    }
}
