//! End-to-end rules scenarios on the standard 5x5 lattice
//!
//! Covers:
//! - Placement bookkeeping and occupied-cell rejection
//! - The jump capture along a diagonal
//! - The Placement -> Movement transition
//! - Piece conservation over random playouts

use baghchal_core::{
    Board, CapturePolicy, Game, GameConfig, Move, MoveError, Phase, PieceKind, Position, Topology,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_place_then_occupied() {
    let mut board = Board::new(Topology::default(), 4, 20);

    assert_eq!(board.place(p(0, 0), PieceKind::Prey), Ok(()));
    assert_eq!(board.supply(PieceKind::Prey), 19);
    assert_eq!(board.piece_at(p(0, 0)), Some(PieceKind::Prey));

    let before = board.clone();
    assert_eq!(
        board.place(p(0, 0), PieceKind::Prey),
        Err(MoveError::CellOccupied(p(0, 0)))
    );
    assert_eq!(board, before, "a rejected placement must not change the board");
}

#[test]
fn test_twenty_placements_flip_phase_on_the_last() {
    // A lone predator shuffles between two cells the prey never fill
    let config = GameConfig {
        predator_start: vec![(4, 4)],
        ..GameConfig::default()
    };
    let mut game = Game::new(config).unwrap();

    let shuffle = [p(4, 3), p(4, 4)];
    let targets: Vec<Position> = game
        .board()
        .positions()
        .filter(|q| !shuffle.contains(q))
        .take(20)
        .collect();
    let mut predator_at = p(4, 4);

    for (i, &cell) in targets.iter().enumerate() {
        assert_eq!(game.phase(), Phase::Placement, "flipped early at placement {}", i);
        let outcome = game.propose_move(Move::place(cell), PieceKind::Prey).unwrap();
        assert_eq!(outcome.phase_changed(), i == 19);
        if i == 19 {
            break;
        }

        let to = shuffle[i % 2];
        let outcome = game
            .propose_move(Move::new(predator_at, to), PieceKind::Predator)
            .unwrap();
        assert!(!outcome.phase_changed(), "predator moves never change phase");
        predator_at = to;
    }
    assert_eq!(game.phase(), Phase::Movement);
    assert_eq!(game.board().supply(PieceKind::Prey), 0);
}

// =============================================================================
// Capture
// =============================================================================

#[test]
fn test_diagonal_capture_scenario() {
    let mut board = Board::new(Topology::default(), 1, 20);
    board.place(p(1, 1), PieceKind::Predator).unwrap();
    board.place(p(2, 2), PieceKind::Prey).unwrap();
    assert!(board.is_empty(p(3, 3)));

    let config = GameConfig::default();
    let mut game = Game::with_board(config, board, Phase::Movement);
    let outcome = game
        .propose_move(Move::new(p(1, 1), p(3, 3)), PieceKind::Predator)
        .unwrap();

    assert_eq!(outcome.captured(), Some(p(2, 2)));
    assert!(game.board().is_empty(p(1, 1)));
    assert!(game.board().is_empty(p(2, 2)));
    assert_eq!(game.board().piece_at(p(3, 3)), Some(PieceKind::Predator));
    assert_eq!(game.captures(), 1);
}

#[test]
fn test_noop_move_leaves_board_alone() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    let before = game.board().clone();
    let outcome = game
        .propose_move(Move::new(p(4, 0), p(4, 0)), PieceKind::Predator)
        .unwrap();
    assert!(outcome.is_noop());
    assert_eq!(game.board(), &before);
}

// =============================================================================
// Topology
// =============================================================================

#[test]
fn test_neighbor_symmetry() {
    let topology = Topology::default();
    for a in topology.positions() {
        for b in topology.neighbors(a) {
            assert!(
                topology.neighbors(b).contains(&a),
                "{} lists {} but not the reverse",
                a,
                b
            );
        }
    }
}

// =============================================================================
// Level lifecycle and random playouts
// =============================================================================

#[test]
fn test_reset_restores_supplies() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    game.propose_move(Move::place(p(2, 2)), PieceKind::Prey).unwrap();
    game.propose_move(Move::new(p(0, 0), p(1, 0)), PieceKind::Predator)
        .unwrap();
    game.reset().unwrap();

    let board = game.board();
    assert_eq!(board.supply(PieceKind::Prey), 20);
    assert_eq!(board.count(PieceKind::Prey), 0);
    assert_eq!(board.captured(PieceKind::Prey), 0);
    assert_eq!(board.count(PieceKind::Predator), 4);
    assert_eq!(game.phase(), Phase::Placement);
}

fn random_playout(seed: u64, policy: CapturePolicy) {
    let config = GameConfig {
        capture_policy: policy,
        ..GameConfig::default()
    };
    let mut game = Game::new(config).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut side = PieceKind::Prey;
    let mut phase_changes = 0;

    for _ in 0..200 {
        let moves = game.legal_moves(side);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        let outcome = game.propose_move(mv, side).unwrap();
        if outcome.phase_changed() {
            phase_changes += 1;
        }

        let board = game.board();
        for kind in PieceKind::ALL {
            assert_eq!(
                board.count(kind) + board.supply(kind) + board.captured(kind),
                board.starting_supply(kind),
                "{} pieces not conserved (seed {})",
                kind,
                seed
            );
        }
        side = side.other();
    }
    assert!(phase_changes <= 1);
}

#[test]
fn test_random_playouts_conserve_pieces() {
    for seed in 0..20 {
        random_playout(seed, CapturePolicy::Optional);
        random_playout(seed, CapturePolicy::Mandatory);
    }
}
