use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position};

use bitboard_perft::game_state::game_state::GameState;
use bitboard_perft::move_generation::legal_move_apply::apply_move;
use bitboard_perft::move_generation::legal_move_generator::generate_legal_moves;
use bitboard_perft::move_generation::perft::{perft, perft_parallel};
use bitboard_perft::utils::reference_positions::reference_position;

const ORACLE_POSITIONS: &[(&str, &str)] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("position3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    (
        "position4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    ),
    (
        "position5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ),
];

fn ours(name: &str) -> GameState {
    reference_position(name)
        .and_then(|position| position.game_state())
        .expect("reference position should build")
}

fn oracle(fen: &str) -> Chess {
    let fen: Fen = fen.parse().expect("oracle FEN should parse");
    fen.into_position(CastlingMode::Standard)
        .expect("oracle FEN should be a legal position")
}

fn our_moves(game: &GameState) -> BTreeSet<String> {
    generate_legal_moves(game)
        .iter()
        .map(|mv| mv.to_string())
        .collect()
}

fn oracle_moves(pos: &Chess) -> BTreeSet<String> {
    pos.legal_moves()
        .iter()
        .map(|m| m.to_uci(CastlingMode::Standard).to_string())
        .collect()
}

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}

#[test]
fn move_sets_match_shakmaty_along_random_walks() {
    let mut rng = StdRng::seed_from_u64(0x0_5EED);

    for &(name, fen) in ORACLE_POSITIONS {
        for walk in 0..12 {
            let mut game = ours(name);
            let mut pos = oracle(fen);

            for ply in 0..120 {
                let mine = our_moves(&game);
                let theirs = oracle_moves(&pos);
                assert_eq!(
                    mine, theirs,
                    "{name} walk {walk} ply {ply}: move sets differ"
                );

                let choices: Vec<&String> = mine.iter().collect();
                let Some(text) = choices.choose(&mut rng).map(|text| (*text).clone()) else {
                    break;
                };

                let mv = generate_legal_moves(&game)
                    .into_iter()
                    .find(|mv| mv.to_string() == text)
                    .expect("chosen move was generated");
                apply_move(&mut game, mv);

                let m = pos
                    .legal_moves()
                    .into_iter()
                    .find(|m| m.to_uci(CastlingMode::Standard).to_string() == text)
                    .expect("chosen move is legal for the oracle");
                pos.play_unchecked(&m);
            }
        }
    }
}

#[test]
fn shallow_perft_matches_shakmaty() {
    for &(name, fen) in ORACLE_POSITIONS {
        let pos = oracle(fen);
        let mut game = ours(name);
        for depth in 1..=3 {
            assert_eq!(
                perft(&mut game, depth),
                perft_shakmaty(&pos, depth),
                "{name} depth {depth}"
            );
        }
    }
}

#[test]
fn parallel_perft_agrees_with_the_oracle() {
    let pos = oracle(ORACLE_POSITIONS[3].1);
    let game = ours(ORACLE_POSITIONS[3].0);
    assert_eq!(perft_parallel(&game, 3, 3), perft_shakmaty(&pos, 3));
}
