use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mapsketch::script::{self, ReplaySummary};
use mapsketch::{init_logging, Config, DrawSession, RecordingRenderer, BUILD_DATE, VERSION};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "mapsketch", about = "Draw non-overlapping shapes on a map")]
struct Cli {
    /// Settings file (JSON or TOML). Defaults to the user config location.
    #[arg(long, env = "MAPSKETCH_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scripted input session and export the result.
    Replay {
        script: PathBuf,
        /// Output file or directory. Prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show the toolbar state for an empty session.
    Limits,
    Version,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let path = match path {
        Some(p) => p.clone(),
        None => match Config::default_path() {
            Ok(p) => p,
            Err(_) => return Ok(Config::default()),
        },
    };
    Config::load_or_default(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}

fn print_summary(summary: &ReplaySummary) {
    eprintln!(
        "accepted: {}, rejected: {}, refused: {}",
        summary.accepted.len(),
        summary.rejected.len(),
        summary.refused.len()
    );
    for reason in summary.rejected.iter().chain(&summary.refused) {
        eprintln!("  {reason}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;

    match cli.command {
        Command::Replay { script, out } => {
            let config = load_config(cli.config.as_ref())?;
            let steps = script::load_script(&script)?;
            info!("Replaying {} step(s) from {}", steps.len(), script.display());

            let mut session = DrawSession::with_config(config, RecordingRenderer::new());
            let summary = script::replay(&mut session, &steps, chrono::Utc::now());
            print_summary(&summary);

            match out {
                Some(path) => {
                    let written = session.export_to_file(&path)?;
                    println!("{}", written.display());
                }
                None => println!("{}", session.export_json()?),
            }
        }
        Command::Limits => {
            let config = load_config(cli.config.as_ref())?;
            let session = DrawSession::with_config(config, RecordingRenderer::new());
            for entry in session.toolbar() {
                let state = if entry.disabled { entry.tooltip.as_str() } else { "" };
                println!("{:<20} {}", entry.display(), state);
            }
            println!("{}", session.status_hint());
        }
        Command::Version => {
            println!("mapsketch {VERSION} (built {BUILD_DATE})");
        }
    }

    Ok(())
}
