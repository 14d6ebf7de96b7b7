//! Chess CLI - inspect pseudo-legal move generation from the terminal.
//!
//! Lists the moves of a position, runs perft, or replays a sequence of
//! coordinate moves with undo.

mod config;

use anyhow::{bail, Context};
use chess_core::{Move, Square};
use chess_engine::movegen::perft::{perft, perft_divide};
use chess_engine::GameState;
use clap::{Parser, Subcommand};
use config::CliConfig;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Token in a `play` sequence that undoes the previous move.
const UNDO: &str = "undo";

#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Inspect pseudo-legal chess move generation")]
struct Cli {
    /// Path to a TOML config file (defaults to ./chess.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every pseudo-legal move of a position
    Moves {
        /// Position in FEN (placement and side to move)
        #[arg(long)]
        fen: Option<String>,
    },
    /// Count leaf nodes of the move tree
    Perft {
        /// Position in FEN (placement and side to move)
        #[arg(long)]
        fen: Option<String>,
        /// Search depth in plies
        #[arg(short, long)]
        depth: Option<u32>,
        /// Print the node count below each root move
        #[arg(long)]
        divide: bool,
    },
    /// Apply coordinate moves such as e2e4; the token "undo" takes one back
    Play {
        /// Position in FEN (placement and side to move)
        #[arg(long)]
        fen: Option<String>,
        /// Moves to apply in order
        moves: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    init_tracing(&config.log_level);

    match cli.command {
        Commands::Moves { fen } => {
            let game = load_game(fen.as_deref().unwrap_or(&config.fen))?;
            print_moves(&game);
        }
        Commands::Perft { fen, depth, divide } => {
            let mut game = load_game(fen.as_deref().unwrap_or(&config.fen))?;
            let depth = depth.unwrap_or(config.perft_depth);
            run_perft(&mut game, depth, divide);
        }
        Commands::Play { fen, moves } => {
            let mut game = load_game(fen.as_deref().unwrap_or(&config.fen))?;
            play(&mut game, &moves)?;
            println!("{}", game.board());
            println!();
            let log: Vec<String> = game.move_log().iter().map(|m| m.notation()).collect();
            println!("Moves: {}", log.join(" "));
            println!("{} to move", game.side_to_move());
        }
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_game(fen: &str) -> anyhow::Result<GameState> {
    let game = GameState::from_fen(fen).with_context(|| format!("Invalid FEN: {}", fen))?;
    tracing::debug!("Loaded position {}", game.to_fen());
    Ok(game)
}

fn print_moves(game: &GameState) {
    println!("{}", game.board());
    println!();

    let moves = game.valid_moves();
    for m in &moves {
        let piece = m.piece_moved();
        match m.piece_captured() {
            Some(captured) => println!("{}  {} x {}", m, piece.kind, captured.kind),
            None => println!("{}  {}", m, piece.kind),
        }
    }
    println!();
    println!("{} moves for {}", moves.len(), game.side_to_move());
}

fn run_perft(game: &mut GameState, depth: u32, divide: bool) {
    tracing::info!("Running perft at depth {}", depth);
    let start = Instant::now();

    let nodes = if divide {
        let results = perft_divide(game, depth);
        for (notation, count) in &results {
            println!("{}: {}", notation, count);
        }
        results.iter().map(|(_, count)| count).sum::<u64>()
    } else {
        perft(game, depth)
    };

    println!("Nodes: {}", nodes);
    tracing::info!("Perft finished in {:?}", start.elapsed());
}

/// Applies each token to `game`, stopping at the first illegal move.
fn play(game: &mut GameState, tokens: &[String]) -> anyhow::Result<()> {
    for token in tokens {
        if token.eq_ignore_ascii_case(UNDO) {
            match game.undo_move() {
                Some(m) => tracing::info!("Undid {}", m),
                None => tracing::warn!("Nothing to undo"),
            }
            continue;
        }

        let m = parse_move(game, token)?;
        let Some(generated) = game.valid_moves().find(&m) else {
            bail!("Illegal move for {}: {}", game.side_to_move(), token);
        };
        game.make_move(generated);
        tracing::info!("Played {}", generated);
    }
    Ok(())
}

/// Builds a move from "e2e4"-style notation against the current board.
fn parse_move(game: &GameState, token: &str) -> anyhow::Result<Move> {
    let from = token.get(0..2).and_then(Square::from_algebraic);
    let to = token.get(2..4).and_then(Square::from_algebraic);
    let (Some(from), Some(to)) = (from, to) else {
        bail!("Invalid move notation: {}", token);
    };
    if token.len() != 4 {
        bail!("Invalid move notation: {}", token);
    }
    Move::new(from, to, game.board()).with_context(|| format!("Cannot play {}", token))
}
