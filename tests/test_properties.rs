use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_blaster::compute::*;
use space_blaster::entities::*;
use space_blaster::raster::{circle, line, Point};

#[derive(Clone, Copy, Debug)]
enum Action {
    Idle,
    Left,
    Right,
    Fire,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Idle),
        Just(Action::Left),
        Just(Action::Right),
        Just(Action::Fire),
    ]
}

fn level() -> impl Strategy<Value = Level> {
    prop_oneof![Just(Level::Easy), Just(Level::Medium), Just(Level::Hard)]
}

proptest! {
    // ── lines ────────────────────────────────────────────────────────────────

    #[test]
    fn line_hits_both_endpoints(x1 in -50..50i32, y1 in -50..50i32, x2 in -50..50i32, y2 in -50..50i32) {
        let pts: Vec<Point> = line(x1, y1, x2, y2).collect();
        prop_assert_eq!(pts.first().copied(), Some(Point::new(x1, y1)));
        prop_assert_eq!(pts.last().copied(), Some(Point::new(x2, y2)));
        prop_assert_eq!(pts.len() as i32, (x2 - x1).abs().max((y2 - y1).abs()) + 1);
    }

    #[test]
    fn line_is_eight_connected(x1 in -50..50i32, y1 in -50..50i32, x2 in -50..50i32, y2 in -50..50i32) {
        let pts: Vec<Point> = line(x1, y1, x2, y2).collect();
        for w in pts.windows(2) {
            let (dx, dy) = ((w[1].x - w[0].x).abs(), (w[1].y - w[0].y).abs());
            prop_assert!(dx <= 1 && dy <= 1 && dx + dy > 0);
        }
    }

    #[test]
    fn line_is_reversible(x1 in -50..50i32, y1 in -50..50i32, x2 in -50..50i32, y2 in -50..50i32) {
        let fwd: HashSet<Point> = line(x1, y1, x2, y2).collect();
        let back: HashSet<Point> = line(x2, y2, x1, y1).collect();
        prop_assert_eq!(fwd, back);
    }

    // ── circles ──────────────────────────────────────────────────────────────

    #[test]
    fn circle_points_round_to_radius(cx in -100..100i32, cy in -100..100i32, r in 0..60i32) {
        for p in circle(cx, cy, r) {
            let (dx, dy) = ((p.x - cx) as f64, (p.y - cy) as f64);
            prop_assert_eq!(dx.hypot(dy).round() as i32, r);
        }
    }

    #[test]
    fn circle_has_eightfold_symmetry(r in 0..60i32) {
        let pts: HashSet<Point> = circle(0, 0, r).collect();
        for p in &pts {
            for q in [
                Point::new(-p.x, p.y),
                Point::new(p.x, -p.y),
                Point::new(p.y, p.x),
                Point::new(-p.y, -p.x),
            ] {
                prop_assert!(pts.contains(&q));
            }
        }
    }

    // ── block layout ─────────────────────────────────────────────────────────

    #[test]
    fn placed_blocks_keep_their_distance(seed in any::<u64>()) {
        let blocks = place_blocks(&mut StdRng::seed_from_u64(seed));
        prop_assert!(!blocks.is_empty() && blocks.len() <= BLOCK_COUNT);
        for (i, a) in blocks.iter().enumerate() {
            prop_assert!(a.x >= 0 && a.x + a.size <= PLAYFIELD_WIDTH);
            prop_assert!(a.y >= PLAYFIELD_HEIGHT / 2 && a.y + a.size <= PLAYFIELD_HEIGHT - HUD_BAND);
            for b in &blocks[i + 1..] {
                prop_assert!(blocks_clear(a, b));
            }
        }
    }

    // ── sessions ─────────────────────────────────────────────────────────────

    #[test]
    fn sessions_keep_their_invariants(
        seed in any::<u64>(),
        lvl in level(),
        actions in proptest::collection::vec(action(), 200),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = select_difficulty(new_state(), lvl, &mut rng);

        for a in actions {
            let score = state.score;
            let was_over = state.is_over();

            state = match a {
                Action::Idle => state,
                Action::Left => move_ship_left(state),
                Action::Right => move_ship_right(state),
                Action::Fire => fire(state),
            };
            state = tick(state, &mut rng);

            prop_assert!(state.score >= score);
            prop_assert!(state.ship.x >= 0 && state.ship.x <= PLAYFIELD_WIDTH - SHIP_WIDTH);
            prop_assert!(state.bullets.iter().all(|b| b.y < PLAYFIELD_HEIGHT as f32));
            if state.lives <= 0 {
                prop_assert!(state.lost_all_lives);
            }
            if state.blocks.is_empty() {
                prop_assert!(state.cleared_all_blocks);
            }
            if was_over {
                prop_assert!(state.is_over());
                prop_assert_eq!(state.score, score);
            }
        }
    }
}
