//! Game-logic functions.
//!
//! Every public function takes the current `GameState` by value (and, where
//! needed, an RNG handle) and returns the updated state.  Side effects are
//! limited to the injected RNG and log records.

use log::{debug, info, warn};
use rand::Rng;

use crate::collision::resolve_collisions;
use crate::entities::{
    Block, Bullet, DifficultyProfile, FallingItem, GameState, GameStatus, Level, PowerUp, Ship,
    Star, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, SHIP_HEIGHT, SHIP_SPEED, SHIP_WIDTH,
};

// ── Tunables ──────────────────────────────────────────────────────────────────

pub const START_LIVES: i32 = 3;

pub const BULLET_SPEED: f32 = 15.0;
/// Fan angles (degrees from vertical) fired while triple-shot is active.
pub const TRIPLE_SHOT_ANGLES: [f32; 3] = [0.0, -15.0, 15.0];

pub const POWER_UP_SPEED: i32 = 5;
pub const POWER_UP_SPAWN_RATE: f64 = 0.003;

pub const STAR_COUNT: usize = 130;
pub const STAR_SPEED: i32 = 2;

pub const BLOCK_COUNT: usize = 20;
pub const BLOCK_SIZES: [i32; 3] = [20, 30, 40];
/// Minimum gap kept between any two blocks.
pub const BLOCK_CLEARANCE: i32 = 50;
/// Band at the top of the playfield kept free for the HUD.
pub const HUD_BAND: i32 = 40;
/// Rejected candidates tolerated for one block before it is skipped.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Ticks per time unit; the front-end steps at this rate.
pub const TICKS_PER_SECOND: u64 = 30;
/// Buff lifetime in ticks (10 time units).
pub const BUFF_DURATION_TICKS: u64 = 10 * TICKS_PER_SECOND;

// ── Difficulty tables ────────────────────────────────────────────────────────

pub fn difficulty_profile(level: Level) -> DifficultyProfile {
    match level {
        Level::Easy => DifficultyProfile {
            heart_speed: 3,
            heart_spawn_rate: 0.003,
            arrow_speed: 3,
            arrow_spawn_rate: 0.03,
        },
        Level::Medium => DifficultyProfile {
            heart_speed: 5,
            heart_spawn_rate: 0.002,
            arrow_speed: 5,
            arrow_spawn_rate: 0.07,
        },
        Level::Hard => DifficultyProfile {
            heart_speed: 6,
            heart_spawn_rate: 0.001,
            arrow_speed: 7,
            arrow_spawn_rate: 0.1,
        },
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh session waiting on the difficulty menu.
pub fn new_state() -> GameState {
    GameState {
        ship: Ship::new(),
        bullets: Vec::new(),
        blocks: Vec::new(),
        hearts: Vec::new(),
        arrows: Vec::new(),
        power_ups: Vec::new(),
        stars: Vec::new(),
        score: 0,
        lives: START_LIVES,
        level: None,
        lost_all_lives: false,
        cleared_all_blocks: false,
        frame: 0,
    }
}

/// Lock in the difficulty and lay out the field.  A second selection is
/// ignored.
pub fn select_difficulty(state: GameState, level: Level, rng: &mut impl Rng) -> GameState {
    if state.level.is_some() {
        return state;
    }
    info!("difficulty selected: {:?}", level);
    init_game(
        GameState {
            level: Some(level),
            ..state
        },
        rng,
    )
}

/// Drop every falling entity and regenerate the blocks and the star field.
pub fn init_game(state: GameState, rng: &mut impl Rng) -> GameState {
    let blocks = place_blocks(rng);
    debug!("placed {} blocks", blocks.len());
    GameState {
        blocks,
        hearts: Vec::new(),
        arrows: Vec::new(),
        power_ups: Vec::new(),
        stars: init_stars(rng),
        ..state
    }
}

/// Start over after a win or a loss.  Ignored while the session is live.
pub fn restart_game(state: GameState, rng: &mut impl Rng) -> GameState {
    if !state.is_over() {
        return state;
    }
    info!("restarting session (previous score {})", state.score);
    init_game(
        GameState {
            ship: Ship {
                triple_shot: None,
                shield: None,
                ..state.ship
            },
            bullets: Vec::new(),
            score: 0,
            lives: START_LIVES,
            lost_all_lives: false,
            cleared_all_blocks: false,
            ..state
        },
        rng,
    )
}

pub fn init_stars(rng: &mut impl Rng) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            x: rng.gen_range(0..=PLAYFIELD_WIDTH),
            y: rng.gen_range(0..=PLAYFIELD_HEIGHT),
        })
        .collect()
}

/// True when the boxes of `a` and `b`, separated by at least
/// `BLOCK_CLEARANCE` on one axis, do not touch.
pub fn blocks_clear(a: &Block, b: &Block) -> bool {
    a.x + a.size + BLOCK_CLEARANCE <= b.x
        || b.x + b.size + BLOCK_CLEARANCE <= a.x
        || a.y + a.size + BLOCK_CLEARANCE <= b.y
        || b.y + b.size + BLOCK_CLEARANCE <= a.y
}

/// Scatter up to `BLOCK_COUNT` blocks over the upper half of the playfield
/// by rejection sampling.
pub fn place_blocks(rng: &mut impl Rng) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::with_capacity(BLOCK_COUNT);

    for _ in 0..BLOCK_COUNT {
        let size = BLOCK_SIZES[rng.gen_range(0..BLOCK_SIZES.len())];
        let mut placed = false;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Block {
                x: rng.gen_range(0..=PLAYFIELD_WIDTH - size),
                y: rng.gen_range(PLAYFIELD_HEIGHT / 2..=PLAYFIELD_HEIGHT - HUD_BAND - size),
                size,
            };
            if blocks.iter().all(|b| blocks_clear(b, &candidate)) {
                blocks.push(candidate);
                placed = true;
                break;
            }
        }

        if !placed {
            warn!(
                "no room for block {} (size {}) after {} attempts",
                blocks.len() + 1,
                size,
                MAX_PLACEMENT_ATTEMPTS
            );
        }
    }

    blocks
}

// ── Input-driven state transitions ───────────────────────────────────────────

pub fn move_ship_left(state: GameState) -> GameState {
    if !state.is_playing() {
        return state;
    }
    let x = (state.ship.x - SHIP_SPEED).max(0);
    GameState {
        ship: Ship { x, ..state.ship },
        ..state
    }
}

pub fn move_ship_right(state: GameState) -> GameState {
    if !state.is_playing() {
        return state;
    }
    let x = (state.ship.x + SHIP_SPEED).min(PLAYFIELD_WIDTH - SHIP_WIDTH);
    GameState {
        ship: Ship { x, ..state.ship },
        ..state
    }
}

/// Fire from the ship's nose: one bullet, or a three-way fan while
/// triple-shot is active.
pub fn fire(state: GameState) -> GameState {
    if !state.is_playing() {
        return state;
    }
    let x = (state.ship.x + SHIP_WIDTH / 2) as f32;
    let y = (state.ship.y + SHIP_HEIGHT) as f32;
    let angles: &[f32] = if state.ship.triple_shot.is_some() {
        &TRIPLE_SHOT_ANGLES
    } else {
        &TRIPLE_SHOT_ANGLES[..1]
    };

    let mut bullets = state.bullets;
    bullets.extend(angles.iter().map(|&angle| Bullet { x, y, angle }));
    GameState { bullets, ..state }
}

// ── Simulation step (RNG is injected) ────────────────────────────────────────

/// Advance every entity by one tick, cull what left the playfield, expire
/// buffs and roll the spawn checks.  Does nothing before a level is chosen.
pub fn simulate(state: GameState, rng: &mut impl Rng) -> GameState {
    let Some(level) = state.level else {
        return state;
    };
    let profile = difficulty_profile(level);
    let frame = state.frame + 1;

    // ── 1. Scroll stars, wrapping to the top ─────────────────────────────────
    let stars: Vec<Star> = state
        .stars
        .into_iter()
        .map(|s| {
            let y = s.y - STAR_SPEED;
            if y < 0 {
                Star {
                    x: rng.gen_range(0..=PLAYFIELD_WIDTH),
                    y: PLAYFIELD_HEIGHT,
                }
            } else {
                Star { y, ..s }
            }
        })
        .collect();

    // ── 2-5. Move and cull ───────────────────────────────────────────────────
    let bullets: Vec<Bullet> = state
        .bullets
        .into_iter()
        .map(|b| {
            let rad = b.angle.to_radians();
            Bullet {
                x: b.x + rad.sin() * BULLET_SPEED,
                y: b.y + rad.cos() * BULLET_SPEED,
                ..b
            }
        })
        .filter(|b| b.y < PLAYFIELD_HEIGHT as f32)
        .collect();

    let hearts = fall(state.hearts, profile.heart_speed);
    let arrows = fall(state.arrows, profile.arrow_speed);
    let mut power_ups: Vec<PowerUp> = state
        .power_ups
        .into_iter()
        .map(|p| PowerUp {
            y: p.y - POWER_UP_SPEED,
            ..p
        })
        .filter(|p| p.y > 0)
        .collect();

    // ── 6. Expire buffs ──────────────────────────────────────────────────────
    let expired = |started: Option<u64>| {
        started.filter(|&t| frame.saturating_sub(t) <= BUFF_DURATION_TICKS)
    };
    let ship = Ship {
        triple_shot: expired(state.ship.triple_shot),
        shield: expired(state.ship.shield),
        ..state.ship
    };

    // ── 7. Spawns ────────────────────────────────────────────────────────────
    let mut hearts = hearts;
    if rng.gen::<f64>() < profile.heart_spawn_rate {
        hearts.push(FallingItem {
            x: rng.gen_range(0..=PLAYFIELD_WIDTH),
            y: PLAYFIELD_HEIGHT,
        });
    }
    let mut arrows = arrows;
    if rng.gen::<f64>() < profile.arrow_spawn_rate {
        arrows.push(FallingItem {
            x: rng.gen_range(0..=PLAYFIELD_WIDTH),
            y: PLAYFIELD_HEIGHT,
        });
    }
    if rng.gen::<f64>() < POWER_UP_SPAWN_RATE {
        power_ups.push(PowerUp {
            x: rng.gen_range(0..=PLAYFIELD_WIDTH),
            y: PLAYFIELD_HEIGHT,
        });
    }

    GameState {
        ship,
        bullets,
        hearts,
        arrows,
        power_ups,
        stars,
        frame,
        ..state
    }
}

fn fall(items: Vec<FallingItem>, speed: i32) -> Vec<FallingItem> {
    items
        .into_iter()
        .map(|i| FallingItem {
            y: i.y - speed,
            ..i
        })
        .filter(|i| i.y > 0)
        .collect()
}

/// Set the terminal flags from the current lives and block count.
pub fn check_game_over(state: GameState) -> GameState {
    GameState {
        lost_all_lives: state.lost_all_lives || state.lives <= 0,
        cleared_all_blocks: state.cleared_all_blocks || state.blocks.is_empty(),
        ..state
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// One frame of play: simulation step, collision pass, terminal check.
/// Outside of play the state is returned untouched.
pub fn tick(state: GameState, rng: &mut impl Rng) -> GameState {
    if !state.is_playing() {
        return state;
    }
    let state = simulate(state, rng);
    let state = resolve_collisions(state, rng);
    let state = check_game_over(state);

    match state.status() {
        GameStatus::Won => info!("all blocks cleared, final score {}", state.score),
        GameStatus::Lost => info!("all lives lost, final score {}", state.score),
        _ => {}
    }
    state
}
