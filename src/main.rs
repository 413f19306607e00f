use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bitboard_perft::errors::PerftError;
use bitboard_perft::move_generation::perft::{perft, perft_divide, perft_parallel};
use bitboard_perft::utils::render_game_state::render_game_state;
use bitboard_perft::utils::run_config::{PerftArgs, PerftRunConfig};

fn main() -> Result<(), PerftError> {
    let config = PerftRunConfig::from_args(PerftArgs::parse())?;
    init_logging(&config.log_level);

    let mut game = config.game_state()?;
    println!("{}", render_game_state(&game));

    let started_at = chrono::Local::now();
    info!(
        position = config.position.name,
        depth = config.depth,
        threads = config.threads,
        "perft run started"
    );

    let start = Instant::now();
    let nodes = if config.divide {
        perft_divide(&mut game, config.depth, |mv, nodes| println!("{mv}: {nodes}"))
    } else if config.threads > 1 {
        perft_parallel(&game, config.depth, config.threads)
    } else {
        perft(&mut game, config.depth)
    };
    let elapsed = start.elapsed();

    let seconds = elapsed.as_secs_f64();
    let nps = if seconds > 0.0 {
        nodes as f64 / seconds
    } else {
        0.0
    };

    println!();
    println!("position : {}", config.position.name);
    println!("started  : {}", started_at.format("%Y-%m-%d %H:%M:%S"));
    println!("perft({}) = {nodes}", config.depth);
    println!("time     : {:.3} s", seconds);
    println!("nps      : {:.0}", nps);

    if let Some(expected) = config.position.expected_at(config.depth) {
        if expected != nodes {
            warn!(expected, nodes, "node count differs from the published value");
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over `--log-level` when it is set.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
