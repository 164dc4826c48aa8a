use space_blaster::entities::*;

fn make_state() -> GameState {
    GameState {
        ship: Ship::new(),
        bullets: Vec::new(),
        blocks: vec![Block { x: 5, y: 500, size: 20 }],
        hearts: Vec::new(),
        arrows: Vec::new(),
        power_ups: Vec::new(),
        stars: Vec::new(),
        score: 0,
        lives: 3,
        level: Some(Level::Easy),
        lost_all_lives: false,
        cleared_all_blocks: false,
        frame: 0,
    }
}

#[test]
fn status_follows_level_and_flags() {
    let mut s = make_state();
    assert_eq!(s.status(), GameStatus::Playing);
    assert!(s.is_playing());

    s.lost_all_lives = true;
    assert_eq!(s.status(), GameStatus::Lost);
    assert!(s.is_over());

    s.cleared_all_blocks = true;
    assert_eq!(s.status(), GameStatus::Won);

    s.level = None;
    assert_eq!(s.status(), GameStatus::SelectingDifficulty);
    assert!(!s.is_playing() && !s.is_over());
}

#[test]
fn ship_starts_centred_near_floor() {
    let ship = Ship::default();
    assert_eq!((ship.x, ship.y), (SHIP_START_X, SHIP_START_Y));
    assert_eq!(ship.center(), (SHIP_START_X + 20, SHIP_START_Y + 15));
    assert!(!ship.has(Buff::Shield));
    assert!(!ship.has(Buff::TripleShot));
}

#[test]
fn ship_buff_flags_are_independent() {
    let ship = Ship {
        shield: Some(3),
        ..Ship::new()
    };
    assert!(ship.has(Buff::Shield));
    assert!(!ship.has(Buff::TripleShot));
}

#[test]
fn game_state_clone_is_independent() {
    let original = make_state();
    let mut cloned = original.clone();

    cloned.ship.x = 99;
    cloned.score = 999;
    cloned.arrows.push(FallingItem { x: 5, y: 5 });

    assert_eq!(original.ship.x, SHIP_START_X);
    assert_eq!(original.score, 0);
    assert!(original.arrows.is_empty());
}
