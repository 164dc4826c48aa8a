//! Collision resolution between entity collections and the ship.
//!
//! Each pass works against the post-movement positions, records what was hit
//! in a removal mask, and compacts the affected collections once at the end,
//! so nothing is removed while it is being iterated.

use log::debug;
use rand::Rng;

use crate::entities::{Buff, GameState, Ship, SHIP_HEIGHT, SHIP_WIDTH};

/// Strict point-in-box test: points on the edge are outside.
pub fn point_in_box(px: f32, py: f32, bx: i32, by: i32, w: i32, h: i32) -> bool {
    (bx as f32) < px && px < (bx + w) as f32 && (by as f32) < py && py < (by + h) as f32
}

fn hits_ship(ship: &Ship, x: i32, y: i32) -> bool {
    point_in_box(x as f32, y as f32, ship.x, ship.y, SHIP_WIDTH, SHIP_HEIGHT)
}

/// Shield reach: strictly closer to the ship's centre than one ship width.
pub fn within_shield(ship: &Ship, x: i32, y: i32) -> bool {
    let (cx, cy) = ship.center();
    let dx = (x - cx) as f64;
    let dy = (y - cy) as f64;
    (dx * dx + dy * dy).sqrt() < SHIP_WIDTH as f64
}

/// Keep the elements whose mask entry is `false`.
fn compact<T>(items: Vec<T>, removed: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(removed)
        .filter(|(_, &gone)| !gone)
        .map(|(item, _)| item)
        .collect()
}

/// Restart the timer for `buff` on `frame`; the other buff keeps running.
pub fn activate_buff(ship: Ship, buff: Buff, frame: u64) -> Ship {
    debug!("buff {:?} activated on frame {}", buff, frame);
    match buff {
        Buff::TripleShot => Ship {
            triple_shot: Some(frame),
            ..ship
        },
        Buff::Shield => Ship {
            shield: Some(frame),
            ..ship
        },
    }
}

// ── Passes ────────────────────────────────────────────────────────────────────

/// Each bullet destroys at most the first live block it sits inside.
pub fn bullets_vs_blocks(state: GameState) -> GameState {
    let mut used_bullets = vec![false; state.bullets.len()];
    let mut killed_blocks = vec![false; state.blocks.len()];
    let mut hits = 0;

    for (bi, bullet) in state.bullets.iter().enumerate() {
        let target = state.blocks.iter().enumerate().position(|(ki, block)| {
            !killed_blocks[ki]
                && point_in_box(bullet.x, bullet.y, block.x, block.y, block.size, block.size)
        });
        if let Some(ki) = target {
            used_bullets[bi] = true;
            killed_blocks[ki] = true;
            hits += 1;
        }
    }

    if hits == 0 {
        return state;
    }

    let blocks = compact(state.blocks, &killed_blocks);
    GameState {
        bullets: compact(state.bullets, &used_bullets),
        cleared_all_blocks: state.cleared_all_blocks || blocks.is_empty(),
        blocks,
        score: state.score + hits,
        ..state
    }
}

/// Every heart caught by the ship is worth one life, uncapped.
pub fn ship_vs_hearts(state: GameState) -> GameState {
    let caught: Vec<bool> = state
        .hearts
        .iter()
        .map(|h| hits_ship(&state.ship, h.x, h.y))
        .collect();
    let gained = caught.iter().filter(|&&c| c).count() as i32;

    GameState {
        hearts: compact(state.hearts, &caught),
        lives: state.lives + gained,
        ..state
    }
}

/// Each power-up caught grants one of the two buffs by coin flip.
pub fn ship_vs_power_ups(state: GameState, rng: &mut impl Rng) -> GameState {
    let caught: Vec<bool> = state
        .power_ups
        .iter()
        .map(|p| hits_ship(&state.ship, p.x, p.y))
        .collect();

    let mut ship = state.ship;
    for _ in caught.iter().filter(|&&c| c) {
        let buff = if rng.gen_bool(0.5) {
            Buff::TripleShot
        } else {
            Buff::Shield
        };
        ship = activate_buff(ship, buff, state.frame);
    }

    GameState {
        power_ups: compact(state.power_ups, &caught),
        ship,
        ..state
    }
}

/// Shielded: arrows inside the shield radius are absorbed.  Unshielded:
/// arrows inside the hull cost a life each.
pub fn ship_vs_arrows(state: GameState) -> GameState {
    let shielded = state.ship.shield.is_some();
    let struck: Vec<bool> = state
        .arrows
        .iter()
        .map(|a| {
            if shielded {
                within_shield(&state.ship, a.x, a.y)
            } else {
                hits_ship(&state.ship, a.x, a.y)
            }
        })
        .collect();

    let damage = if shielded {
        0
    } else {
        struck.iter().filter(|&&s| s).count() as i32
    };
    let lives = state.lives - damage;

    GameState {
        arrows: compact(state.arrows, &struck),
        lives,
        lost_all_lives: state.lost_all_lives || (damage > 0 && lives <= 0),
        ..state
    }
}

/// Run every pass in order: bullets × blocks, hearts, power-ups, arrows.
pub fn resolve_collisions(state: GameState, rng: &mut impl Rng) -> GameState {
    let state = bullets_vs_blocks(state);
    let state = ship_vs_hearts(state);
    let state = ship_vs_power_ups(state, rng);
    ship_vs_arrows(state)
}
