use super::*;
use std::cell::RefCell;
use std::rc::Rc;

struct Recorder(Rc<RefCell<Vec<GameEvent>>>);

impl GameObserver for Recorder {
    fn on_event(&mut self, event: &GameEvent) {
        self.0.borrow_mut().push(*event);
    }
}

fn recorded_game() -> (Game, Rc<RefCell<Vec<GameEvent>>>) {
    let mut game = Game::new(GameConfig::default()).unwrap();
    let events = Rc::new(RefCell::new(Vec::new()));
    game.add_observer(Box::new(Recorder(events.clone())));
    (game, events)
}

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

#[test]
fn test_new_game_starts_in_placement() {
    let game = Game::new(GameConfig::default()).unwrap();
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.captures(), 0);
    assert_eq!(
        game.board().to_diagram(),
        "T...T\n.....\n.....\n.....\nT...T\n"
    );
}

#[test]
fn test_events_for_placement_and_capture() {
    let (mut game, events) = recorded_game();
    game.propose_move(Move::place(p(1, 1)), PieceKind::Prey).unwrap();
    game.propose_move(Move::new(p(0, 0), p(0, 1)), PieceKind::Predator).unwrap();
    game.propose_move(Move::place(p(1, 0)), PieceKind::Prey).unwrap();
    game.propose_move(Move::new(p(0, 1), p(0, 2)), PieceKind::Predator).unwrap();
    game.propose_move(Move::place(p(2, 2)), PieceKind::Prey).unwrap();
    // Landing on an occupied point
    let outcome = game
        .propose_move(Move::new(p(4, 4), p(2, 2)), PieceKind::Predator)
        .unwrap_err();
    assert!(matches!(outcome, MoveError::CaptureBlocked { .. }));

    let capture = game
        .propose_move(Move::new(p(0, 2), p(2, 0)), PieceKind::Predator)
        .unwrap();
    assert_eq!(capture.captured(), Some(p(1, 1)));
    assert_eq!(game.captures(), 1);

    let events = events.borrow();
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::MoveApplied { .. }))
            .count(),
        6
    );
    assert_eq!(
        events.last(),
        Some(&GameEvent::CaptureOccurred {
            by: p(2, 0),
            at: p(1, 1)
        })
    );
}

#[test]
fn test_rejected_move_emits_nothing() {
    let (mut game, events) = recorded_game();
    let before = game.view();
    let err = game.propose_move(Move::place(p(0, 0)), PieceKind::Prey);
    assert_eq!(err, Err(MoveError::CellOccupied(p(0, 0))));
    assert_eq!(game.view(), before);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_noop_emits_nothing() {
    let (mut game, events) = recorded_game();
    let outcome = game
        .propose_move(Move::new(p(0, 0), p(0, 0)), PieceKind::Predator)
        .unwrap();
    assert!(outcome.is_noop());
    assert!(events.borrow().is_empty());
}

#[test]
fn test_phase_change_event_fires_once() {
    let config = GameConfig {
        prey: 2,
        ..GameConfig::default()
    };
    let mut game = Game::new(config).unwrap();
    let events = Rc::new(RefCell::new(Vec::new()));
    game.add_observer(Box::new(Recorder(events.clone())));

    game.propose_move(Move::place(p(2, 2)), PieceKind::Prey).unwrap();
    game.propose_move(Move::new(p(0, 0), p(1, 0)), PieceKind::Predator).unwrap();
    game.propose_move(Move::place(p(2, 3)), PieceKind::Prey).unwrap();
    game.propose_move(Move::new(p(1, 0), p(0, 0)), PieceKind::Predator).unwrap();

    let changes: Vec<GameEvent> = events
        .borrow()
        .iter()
        .filter(|e| matches!(e, GameEvent::PhaseChanged { .. }))
        .copied()
        .collect();
    assert_eq!(
        changes,
        vec![GameEvent::PhaseChanged {
            from: Phase::Placement,
            to: Phase::Movement
        }]
    );
    assert_eq!(game.phase(), Phase::Movement);
}

#[test]
fn test_lift_never_mutates() {
    let (mut game, events) = recorded_game();
    let before = game.view();

    let mut pending = game.lift(PieceKind::Predator, Some(p(4, 0))).unwrap();
    pending.hover(p(3, 0));
    assert_eq!(pending.preview(), Some(p(3, 0)));
    assert_eq!(game.view(), before);
    drop(pending);
    assert_eq!(game.view(), before);

    assert_eq!(
        events.borrow().as_slice(),
        &[GameEvent::PieceLifted {
            side: PieceKind::Predator,
            from: Some(p(4, 0))
        }]
    );
}

#[test]
fn test_lift_and_commit() {
    let (mut game, _) = recorded_game();

    // Prey come from supply while placing; a board origin is ignored
    let pending = game.lift(PieceKind::Prey, Some(p(2, 2))).unwrap();
    assert_eq!(pending.from(), None);
    game.commit(pending, p(2, 2)).unwrap();
    assert_eq!(game.board().piece_at(p(2, 2)), Some(PieceKind::Prey));

    // Predators can only lift their own pieces
    assert_eq!(
        game.lift(PieceKind::Predator, Some(p(2, 2))),
        Err(MoveError::NotMoversPiece {
            at: p(2, 2),
            kind: PieceKind::Predator
        })
    );
    assert_eq!(
        game.lift(PieceKind::Predator, None),
        Err(MoveError::NoSupplyRemaining(PieceKind::Predator))
    );

    // A bad drop leaves the piece where it was
    let pending = game.lift(PieceKind::Predator, Some(p(0, 0))).unwrap();
    let before = game.view();
    assert!(game.commit(pending, p(3, 0)).is_err());
    assert_eq!(game.view(), before);
}

#[test]
fn test_reset_restores_level() {
    let (mut game, events) = recorded_game();
    game.propose_move(Move::place(p(2, 2)), PieceKind::Prey).unwrap();
    game.reset().unwrap();
    assert_eq!(game.view(), Game::new(GameConfig::default()).unwrap().view());
    assert_eq!(events.borrow().last(), Some(&GameEvent::LevelReset));
}

#[test]
fn test_view_after_does_not_touch_game() {
    let game = Game::new(GameConfig::default()).unwrap();
    let view = game.view();
    let (next, outcome) = view.after(Move::place(p(2, 2)), PieceKind::Prey).unwrap();
    assert_eq!(next.board.supply(PieceKind::Prey), 19);
    assert_eq!(outcome.plan, crate::rules::Plan::Place { at: p(2, 2) });
    assert_eq!(game.board().supply(PieceKind::Prey), 20);
    assert!(view.is_legal(Move::new(p(0, 0), p(1, 1)), PieceKind::Predator));
    assert!(!view.is_legal(Move::new(p(0, 0), p(2, 2)), PieceKind::Predator));
}
