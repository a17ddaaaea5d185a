use super::*;
use baghchal_core::{Board, CapturePolicy, Game, GameConfig, Phase, Topology};

fn opening() -> GameView {
    Game::new(GameConfig::default()).unwrap().view()
}

#[test]
fn random_player_returns_legal_move() {
    let mut player = RandomPlayer::new();
    let view = opening();

    for side in PieceKind::ALL {
        let mv = player.propose(&view, side);
        assert!(mv.is_some());
        assert!(view.legal_moves(side).contains(&mv.unwrap()));
    }
}

#[test]
fn random_player_is_reproducible_when_seeded() {
    let view = opening();
    let mut a = RandomPlayer::seeded(7);
    let mut b = RandomPlayer::seeded(7);

    for _ in 0..10 {
        assert_eq!(
            a.propose(&view, PieceKind::Prey),
            b.propose(&view, PieceKind::Prey)
        );
    }
}

#[test]
fn random_player_handles_trapped_predator() {
    let board =
        Board::from_diagram(Topology::default(), 1, 20, "TGG../GG.../G.G../...../.....").unwrap();
    let view = GameView {
        board,
        phase: Phase::Movement,
        policy: CapturePolicy::Optional,
    };
    let mut player = RandomPlayer::seeded(1);

    assert!(player.propose(&view, PieceKind::Predator).is_none());
}
