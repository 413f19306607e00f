//! Command-line configuration for a perft run.
//!
//! `PerftArgs` is the raw clap surface; `PerftRunConfig` is the validated form
//! the binary actually runs.

use clap::Parser;

use crate::errors::{PerftError, PerftResult};
use crate::game_state::game_state::GameState;
use crate::utils::reference_positions::{reference_position, ReferencePosition};

pub const DEFAULT_DEPTH: u8 = 6;
pub const DEFAULT_POSITION: &str = "startpos";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Bitboard legal move generator perft runner", long_about = None)]
pub struct PerftArgs {
    /// Plies to enumerate below the root.
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u8,

    /// Reference position: startpos, kiwipete, position3, position4, position5.
    #[arg(short, long, default_value_t = String::from(DEFAULT_POSITION))]
    pub position: String,

    /// Print the node count below each root move.
    #[arg(long)]
    pub divide: bool,

    /// Worker threads for root-split perft.
    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value_t = String::from("info"))]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct PerftRunConfig {
    pub depth: u8,
    pub position: &'static ReferencePosition,
    pub divide: bool,
    pub threads: usize,
    pub log_level: String,
}

impl PerftRunConfig {
    pub fn from_args(args: PerftArgs) -> PerftResult<Self> {
        if args.depth == 0 {
            return Err(PerftError::InvalidDepth(args.depth));
        }
        if args.threads == 0 {
            return Err(PerftError::InvalidThreadCount);
        }

        Ok(Self {
            depth: args.depth,
            position: reference_position(&args.position)?,
            divide: args.divide,
            threads: args.threads,
            log_level: args.log_level,
        })
    }

    pub fn game_state(&self) -> PerftResult<GameState> {
        self.position.game_state()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{PerftArgs, PerftRunConfig, DEFAULT_DEPTH};
    use crate::errors::PerftError;

    fn parse(argv: &[&str]) -> Result<PerftRunConfig, PerftError> {
        let args = PerftArgs::try_parse_from(argv).expect("arguments should parse");
        PerftRunConfig::from_args(args)
    }

    #[test]
    fn defaults_run_startpos_single_threaded() {
        let config = parse(&["perft"]).expect("defaults are valid");
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert_eq!(config.position.name, "startpos");
        assert_eq!(config.threads, 1);
        assert!(!config.divide);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn explicit_flags_are_carried_through() {
        let config = parse(&[
            "perft", "--depth", "3", "--position", "kiwipete", "--divide", "--threads", "4",
        ])
        .expect("flags are valid");
        assert_eq!(config.depth, 3);
        assert_eq!(config.position.name, "kiwipete");
        assert!(config.divide);
        assert_eq!(config.threads, 4);
        assert_eq!(
            config.game_state().map(|game| game.occupancy_all().count_ones()),
            Ok(32)
        );
    }

    #[test]
    fn rejects_zero_depth_zero_threads_and_unknown_positions() {
        assert_eq!(parse(&["perft", "-d", "0"]).map(|_| ()), Err(PerftError::InvalidDepth(0)));
        assert_eq!(
            parse(&["perft", "-t", "0"]).map(|_| ()),
            Err(PerftError::InvalidThreadCount)
        );
        assert_eq!(
            parse(&["perft", "-p", "mystery"]).map(|_| ()),
            Err(PerftError::UnknownPosition("mystery".to_owned()))
        );
    }
}
