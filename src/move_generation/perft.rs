//! Perft: exhaustive legal-move tree counting.
//!
//! The board is mutated in place with apply/undo and restored exactly on
//! return. Each call allocates one move buffer per ply up front and hands the
//! remaining slice down the recursion, so the hot path never allocates.

use std::thread;

use tracing::{debug, info};

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::analyze_king_state;
use crate::move_generation::legal_move_shared::MAX_LEGAL_MOVES;
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};
use crate::moves::move_descriptions::{Move, MoveTag};

/// Leaf statistics in the layout of the published perft tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    /// Includes en-passant captures.
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    pub fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

fn move_layers(plies: usize) -> Vec<Vec<Move>> {
    (0..plies)
        .map(|_| Vec::with_capacity(MAX_LEGAL_MOVES))
        .collect()
}

/// Number of leaf nodes exactly `depth` plies below `game_state`.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    perft_with(&LegalMoveGenerator, game_state, depth)
}

pub fn perft_with<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> u64 {
    let mut layers = move_layers(depth as usize);
    count_nodes(generator, game_state, &mut layers)
}

/// The remaining depth is the number of buffers left in `layers`.
fn count_nodes<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    layers: &mut [Vec<Move>],
) -> u64 {
    let Some((moves, rest)) = layers.split_first_mut() else {
        return 1;
    };

    generator.generate_legal_moves_into(game_state, moves);
    if rest.is_empty() {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in moves.iter() {
        let undo = apply_move(game_state, mv);
        nodes += count_nodes(generator, game_state, rest);
        undo_move(game_state, mv, undo);
    }
    nodes
}

/// Perft split by root move. `report` receives each root move with its
/// subtree count, in generation order; the return value is the total.
pub fn perft_divide<F>(game_state: &mut GameState, depth: u8, report: F) -> u64
where
    F: FnMut(Move, u64),
{
    perft_divide_with(&LegalMoveGenerator, game_state, depth, report)
}

pub fn perft_divide_with<G, F>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    mut report: F,
) -> u64
where
    G: MoveGenerator,
    F: FnMut(Move, u64),
{
    if depth == 0 {
        return 1;
    }

    let root_moves = generator.generate_legal_moves(game_state);
    let mut layers = move_layers(depth as usize - 1);
    let mut total = 0u64;

    for mv in root_moves {
        let undo = apply_move(game_state, mv);
        let nodes = count_nodes(generator, game_state, &mut layers);
        undo_move(game_state, mv, undo);

        debug!(%mv, nodes, "perft divide");
        report(mv, nodes);
        total += nodes;
    }

    info!(depth, nodes = total, "perft divide finished");
    total
}

/// Root-split perft across `threads` scoped workers. Each worker owns a clone
/// of the board, so the caller's state is only read.
pub fn perft_parallel(game_state: &GameState, depth: u8, threads: usize) -> u64 {
    let threads = threads.max(1);
    if depth <= 1 || threads == 1 {
        let mut local = game_state.clone();
        return perft(&mut local, depth);
    }

    let root_moves = LegalMoveGenerator.generate_legal_moves(game_state);
    if root_moves.is_empty() {
        return 0;
    }
    let chunk_size = root_moves.len().div_ceil(threads);

    let total = thread::scope(|scope| {
        let workers: Vec<_> = root_moves
            .chunks(chunk_size)
            .enumerate()
            .map(|(worker, chunk)| {
                let mut local = game_state.clone();
                scope.spawn(move || {
                    debug!(worker, root_moves = chunk.len(), "perft worker started");
                    let mut layers = move_layers(depth as usize - 1);
                    let mut nodes = 0u64;
                    for &mv in chunk {
                        let undo = apply_move(&mut local, mv);
                        nodes += count_nodes(&LegalMoveGenerator, &mut local, &mut layers);
                        undo_move(&mut local, mv, undo);
                    }
                    nodes
                })
            })
            .collect();

        workers
            .into_iter()
            .map(|worker| {
                worker
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .sum::<u64>()
    });

    info!(depth, threads, nodes = total, "parallel perft finished");
    total
}

/// Perft with per-leaf classification of the final move.
pub fn perft_counts(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    let mut layers = move_layers(depth as usize);
    let mut replies = Vec::with_capacity(MAX_LEGAL_MOVES);
    collect_counts(game_state, &mut layers, &mut replies, &mut counts);
    counts
}

fn collect_counts(
    game_state: &mut GameState,
    layers: &mut [Vec<Move>],
    replies: &mut Vec<Move>,
    counts: &mut PerftCounts,
) {
    let Some((moves, rest)) = layers.split_first_mut() else {
        return;
    };
    LegalMoveGenerator.generate_legal_moves_into(game_state, moves);

    for &mv in moves.iter() {
        let undo = apply_move(game_state, mv);
        if rest.is_empty() {
            classify_leaf(game_state, mv, replies, counts);
        } else {
            collect_counts(game_state, rest, replies, counts);
        }
        undo_move(game_state, mv, undo);
    }
}

/// `game_state` is the position right after `mv`.
fn classify_leaf(
    game_state: &GameState,
    mv: Move,
    replies: &mut Vec<Move>,
    counts: &mut PerftCounts,
) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    match mv.tag {
        MoveTag::EnPassant => counts.en_passant += 1,
        MoveTag::Castle(_) => counts.castles += 1,
        MoveTag::Promotion(_) | MoveTag::CapturePromotion(_) => counts.promotions += 1,
        _ => {}
    }

    if analyze_king_state(game_state, game_state.side_to_move).is_in_check() {
        counts.checks += 1;
        LegalMoveGenerator.generate_legal_moves_into(game_state, replies);
        if replies.is_empty() {
            counts.checkmates += 1;
        }
    }
}
