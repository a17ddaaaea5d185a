use super::*;
use crate::game::Game;

#[test]
fn test_default_config_sets_up_corners() {
    let config = GameConfig::default();
    config.validate().unwrap();
    let board = config.setup_board().unwrap();
    assert_eq!(board.count(PieceKind::Predator), 4);
    assert_eq!(board.supply(PieceKind::Predator), 0);
    assert_eq!(board.supply(PieceKind::Prey), STANDARD_PREY);
    assert_eq!(board.piece_at(Position::new(4, 4)), Some(PieceKind::Predator));
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = GameConfig::from_toml_str("prey = 12\ncapture_policy = \"mandatory\"\n").unwrap();
    assert_eq!(config.prey, 12);
    assert_eq!(config.capture_policy, CapturePolicy::Mandatory);
    assert_eq!(config.width, STANDARD_SIZE);
    assert_eq!(config.predator_start.len(), 4);
}

#[test]
fn test_custom_board() {
    let toml = r#"
        width = 7
        height = 7
        prey = 30
        predator_start = [[3, 3]]
    "#;
    let config = GameConfig::from_toml_str(toml).unwrap();
    let board = config.setup_board().unwrap();
    assert_eq!(board.topology().cell_count(), 49);
    assert_eq!(board.piece_at(Position::new(3, 3)), Some(PieceKind::Predator));
}

#[test]
fn test_invalid_configs() {
    let off_board = "predator_start = [[0, 0], [5, 5]]";
    assert!(matches!(
        GameConfig::from_toml_str(off_board),
        Err(ConfigError::Invalid(_))
    ));

    let duplicate = "predator_start = [[1, 1], [1, 1]]";
    assert!(matches!(
        GameConfig::from_toml_str(duplicate),
        Err(ConfigError::Invalid(_))
    ));

    let crowded = "prey = 22";
    assert!(matches!(
        GameConfig::from_toml_str(crowded),
        Err(ConfigError::Invalid(_))
    ));

    for oversized in ["width = 65536\nheight = 65537\n", "width = 65\n", "height = 100000\n"] {
        assert!(matches!(
            GameConfig::from_toml_str(oversized),
            Err(ConfigError::Invalid(_))
        ));
    }

    assert!(matches!(
        GameConfig::from_toml_str("width = 1"),
        Err(ConfigError::Invalid(_))
    ));

    assert!(matches!(
        GameConfig::from_toml_str("width = \"five\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_empty_prey_supply_rejected() {
    assert!(matches!(
        GameConfig::from_toml_str("prey = 0"),
        Err(ConfigError::Invalid(_))
    ));

    // Game::new goes through the same checks
    let config = GameConfig {
        prey: 0,
        ..GameConfig::default()
    };
    assert!(matches!(Game::new(config), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_largest_board_accepted() {
    let config = GameConfig {
        width: MAX_SIZE,
        height: MAX_SIZE,
        predator_start: vec![(0, 0)],
        ..GameConfig::default()
    };
    let board = config.setup_board().unwrap();
    assert_eq!(board.topology().cell_count(), (MAX_SIZE * MAX_SIZE) as usize);
}
