use clap::{Parser, Subcommand, ValueEnum};
use levelsave_history::{LevelHistory, UndoOutcome};
use levelsave_level::{FieldCopy, GameLevel, SerdeCopy};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "levelsave-cli", about = "Save and undo game level state")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the save/modify/undo walkthrough
    Demo {
        /// How snapshots are captured
        #[arg(short, long, value_enum, default_value_t = Strategy::Field)]
        strategy: Strategy,
        /// Undos to attempt after the history is used up
        #[arg(short, long, default_value = "1")]
        extra_undos: usize,
    },
    /// Build a level from flags and print it as JSON
    Show {
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        x: i32,
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        y: i32,
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        score: i32,
        /// Inventory item, repeatable
        #[arg(short, long = "item")]
        items: Vec<String>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Field-by-field copy
    Field,
    /// Serialize/deserialize round trip
    Serde,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("levelsave-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("level: {}", levelsave_level::crate_info());
            println!("history: {}", levelsave_history::crate_info());
        }
        Commands::Demo {
            strategy,
            extra_undos,
        } => {
            let (level, history) = run_demo(strategy, extra_undos)?;
            println!(
                "Final: x={}, y={}, items={}, score={}, history depth={}",
                level.player_position_x(),
                level.player_position_y(),
                level.inventory().len(),
                level.score(),
                history.len()
            );
        }
        Commands::Show {
            x,
            y,
            score,
            items,
            pretty,
        } => {
            let level = GameLevel::new(x, y, items, score);
            let json = if pretty {
                serde_json::to_string_pretty(&level)?
            } else {
                serde_json::to_string(&level)?
            };
            println!("{json}");
        }
    }

    Ok(())
}

/// Walk a level through two saves, a further change, and undos back to the
/// start. Returns the final level and what is left of its history.
fn run_demo(
    strategy: Strategy,
    extra_undos: usize,
) -> anyhow::Result<(GameLevel, LevelHistory)> {
    let mut level = GameLevel::new(0, 0, vec!["Sword".into(), "Shield".into()], 0);
    let mut history = LevelHistory::new();

    save(&mut history, &level, strategy)?;
    log_state("Initial game state:", &level);

    level.move_to(5, 10);
    level.add_item("Bow");
    level.set_score(50);

    save(&mut history, &level, strategy)?;
    log_state("Modified game state:", &level);

    level.move_to(15, 20);
    level.add_item("Healing Potion");
    level.set_score(100);
    log_state("Further modified game state:", &level);

    let outcome = history.undo(&mut level);
    debug_assert!(outcome.is_restored());
    log_state("Game state after the first undo:", &level);

    let outcome = history.undo(&mut level);
    debug_assert!(outcome.is_restored());
    log_state("Game state after the second undo (initial state):", &level);

    // The history logs "cannot undo further" itself on each exhausted undo.
    for _ in 0..extra_undos {
        let outcome = history.undo(&mut level);
        debug_assert_eq!(outcome, UndoOutcome::HistoryExhausted);
    }

    Ok((level, history))
}

fn save(
    history: &mut LevelHistory,
    level: &GameLevel,
    strategy: Strategy,
) -> anyhow::Result<()> {
    match strategy {
        Strategy::Field => history.save_with(level, &FieldCopy)?,
        Strategy::Serde => history.save_with(level, &SerdeCopy)?,
    }
    Ok(())
}

fn log_state(message: &str, level: &GameLevel) {
    match serde_json::to_string(level) {
        Ok(json) => tracing::info!("{message} {json}"),
        Err(e) => tracing::error!(error = %e, "error serializing game state"),
    }
}
