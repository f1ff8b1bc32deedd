//! pref-solver - Double-dummy solver for three-handed deals
//!
//! Reads a JSON deal (hands, turn, trump, misère), works out how many tricks
//! South takes with perfect play on all sides and prints one optimal line.
//!
//! Usage: pref-solver [--input <deal.json>] [--trump <suit|none>] [--misere]

mod deal;
mod render;

use clap::{ArgAction, Parser};
use deal::Deal;
use log::{info, LevelFilter};
use pref_solver::{Analyzer, Suit};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::fs;
use std::io::{self, Read, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pref-solver")]
#[command(about = "Double-dummy solver for three-handed deals")]
#[command(version)]
struct Args {
    /// Input JSON deal (if not specified, reads stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Trump override: a suit (♠ S, ♣ C, ♦ D, ♥ H) or "none"
    #[arg(long = "trump")]
    trump: Option<String>,

    /// Solve for misère even if the deal does not ask for it
    #[arg(long = "misere")]
    misere: bool,

    /// Search every legal card instead of one card per run
    #[arg(long = "no-compression")]
    no_compression: bool,

    /// Print search statistics to stderr
    #[arg(long = "stats")]
    stats: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let text = match read_input(args.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    let deal = match Deal::from_json(&text) {
        Ok(deal) => deal,
        Err(e) => {
            eprintln!("Error loading deal: {}", e);
            std::process::exit(1);
        }
    };

    let trump = match args.trump.as_deref() {
        None => deal.trump,
        Some(token) if token.eq_ignore_ascii_case("none") => None,
        Some(token) => match Suit::from_token(token) {
            Ok(suit) => Some(suit),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    };
    let misere = args.misere || deal.misere;
    info!(
        "{} cards per hand, {} to play, trump {}, misere {}",
        deal.position.card_count() / pref_solver::NUM_SEATS,
        deal.position.turn(),
        trump.map_or("none".to_string(), |s| s.to_string()),
        misere
    );

    let mut analyzer = Analyzer::new(trump, misere).with_run_compression(!args.no_compression);
    let start = Instant::now();
    let result = match analyzer.analyze(&deal.position) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if args.stats {
        let stats = analyzer.stats();
        eprintln!(
            "[PERF] nodes={}, positions={}, cache_hits={}, time={:.3}s",
            stats.nodes,
            stats.positions_solved,
            stats.cache_hits,
            start.elapsed().as_secs_f64()
        );
    }

    let output = match render::render_result(&deal.position, &result) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("Warning: logger already initialized");
    }
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
