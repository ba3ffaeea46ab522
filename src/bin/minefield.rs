//! minefield CLI - play minesweeper boards with the knowledge engine
//!
//! Plays one game (printing a move-by-move summary) or a batch of games
//! (printing aggregate statistics). Logs go to stderr, controlled by
//! `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;

use minefield_kb::{run_batch, GameConfig, GameReport, GameSession, MoveKind, MoveOrder};

#[derive(Parser)]
#[command(name = "minefield")]
#[command(version, about = "Deduce safe cells on a minesweeper board", long_about = None)]
struct Cli {
    /// Number of rows
    #[arg(long, default_value_t = 8)]
    height: usize,

    /// Number of columns
    #[arg(long, default_value_t = 8)]
    width: usize,

    /// Number of hazards
    #[arg(long, default_value_t = 8)]
    hazards: usize,

    /// Random seed for hazard placement and random move order
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Tie-break among candidate moves
    #[arg(long, value_enum, default_value_t = MoveOrder::Lowest)]
    order: MoveOrder,

    /// Stop instead of guessing when no safe move is known
    #[arg(long)]
    no_blind: bool,

    /// Maximum moves per game
    #[arg(long)]
    max_moves: Option<usize>,

    /// Play this many games and print aggregate statistics
    #[arg(long)]
    games: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::new(self.height, self.width, self.hazards)
            .with_seed(self.seed)
            .with_move_order(self.order)
            .with_blind_moves(!self.no_blind);
        if let Some(max) = self.max_moves {
            config = config.with_max_moves(max);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config();
    config.validate().context("invalid game configuration")?;

    match cli.games {
        Some(games) => {
            let summary = run_batch(&config, games).context("batch run failed")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("games:        {}", summary.games);
                println!("cleared:      {}", summary.cleared);
                println!("detonated:    {}", summary.detonated);
                println!("no safe move: {}", summary.no_safe_move);
                println!("move limit:   {}", summary.move_limit);
                println!("win rate:     {:.1}%", summary.win_rate() * 100.0);
                println!("avg moves:    {:.1}", summary.average_moves());
                println!("blind moves:  {}", summary.blind_moves);
            }
        }
        None => {
            let report = GameSession::new(config)
                .and_then(GameSession::play)
                .context("game failed")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    // Default to warnings only so stdout stays readable.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &GameReport) {
    let config = &report.config;
    println!(
        "{}x{} board, {} hazards, seed {}, order {}",
        config.height, config.width, config.hazards, config.seed, config.move_order
    );
    for (i, record) in report.moves.iter().enumerate() {
        let kind = match record.kind {
            MoveKind::Safe => "safe ",
            MoveKind::Blind => "blind",
        };
        match record.count {
            Some(count) => println!("{:>4}  {}  {} -> {}", i + 1, kind, record.cell, count),
            None => println!("{:>4}  {}  {} -> hazard", i + 1, kind, record.cell),
        }
    }
    println!("outcome:           {}", report.outcome);
    println!(
        "moves:             {} ({} safe, {} blind)",
        report.move_count(),
        report.safe_moves,
        report.blind_moves
    );
    println!("hazards confirmed: {}", report.hazards_confirmed);
    println!("all flagged:       {}", report.won);
    println!(
        "inference:         {} passes, {} derived, {} facts",
        report.stats.passes, report.stats.derived, report.stats.facts_learned
    );
}
