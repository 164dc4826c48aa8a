//! Sprite recipes.
//!
//! Each sprite is a fixed list of raster calls whose offsets are fractions of
//! an anchor point and a size.  Colours belong to the recipe, not the caller.

use crate::entities::{Block, Bullet, Ship, SHIP_HEIGHT, SHIP_WIDTH};
use crate::raster::{draw_circle, draw_line, PixelSink, Rgb};

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_WHITE: Rgb = Rgb(255, 255, 255);
pub const C_RED: Rgb = Rgb(255, 0, 0);
pub const C_GREEN: Rgb = Rgb(0, 255, 0);
pub const C_ORANGE: Rgb = Rgb(255, 128, 0);
pub const C_YELLOW: Rgb = Rgb(255, 255, 0);
pub const C_CYAN: Rgb = Rgb(0, 255, 255);

const C_HULL: Rgb = Rgb(179, 179, 179);
const C_HULL_DARK: Rgb = Rgb(77, 77, 77);
const C_BRICK: Rgb = Rgb(204, 77, 26);
const C_ORB_OUTER: Rgb = Rgb(255, 102, 179);
const C_ORB_MIDDLE: Rgb = Rgb(255, 153, 204);
const C_ORB_INNER: Rgb = Rgb(255, 204, 230);

pub const BULLET_LENGTH: i32 = 5;

// ── Player ────────────────────────────────────────────────────────────────────

/// Hull, cockpit, wings with dark accents, two thrusters and a three-tier
/// flame below the hull.
pub fn draw_ship<S: PixelSink + ?Sized>(sink: &mut S, ship: &Ship) {
    let (x, y) = (ship.x, ship.y);
    let (w, h) = (SHIP_WIDTH, SHIP_HEIGHT);

    draw_line(sink, C_HULL, x + w / 2, y + h, x + w / 2, y);
    draw_circle(sink, C_WHITE, x + w / 2, y + 3 * h / 4, 5);

    draw_line(sink, C_HULL, x, y + h / 2, x + w / 4, y);
    draw_line(sink, C_HULL, x + w, y + h / 2, x + 3 * w / 4, y);
    draw_line(sink, C_HULL_DARK, x, y + h / 2, x + w / 4, y + h / 4);
    draw_line(sink, C_HULL_DARK, x + w, y + h / 2, x + 3 * w / 4, y + h / 4);

    for tx in [x + w / 3, x + 2 * w / 3] {
        draw_circle(sink, C_HULL_DARK, tx, y - 5, 3);
        draw_circle(sink, C_RED, tx, y - 10, 2);
        draw_circle(sink, C_ORANGE, tx, y - 12, 1);
        sink.plot(tx, y - 14, C_YELLOW);
    }
}

/// Shield bubble: radius of one ship width around the ship's centre.
pub fn draw_shield<S: PixelSink + ?Sized>(sink: &mut S, ship: &Ship) {
    let (cx, cy) = ship.center();
    draw_circle(sink, C_CYAN, cx, cy, SHIP_WIDTH);
}

pub fn draw_bullet<S: PixelSink + ?Sized>(sink: &mut S, bullet: &Bullet) {
    let (x, y) = (bullet.x as i32, bullet.y as i32);
    draw_line(sink, C_YELLOW, x, y, x, y + BULLET_LENGTH);
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// Solid square, one horizontal run per row (both edges included).
pub fn draw_block<S: PixelSink + ?Sized>(sink: &mut S, block: &Block) {
    for row in block.y..=block.y + block.size {
        draw_line(sink, C_BRICK, block.x, row, block.x + block.size, row);
    }
}

/// Two round lobes over a V whose point sits half a size below the anchor.
pub fn draw_heart<S: PixelSink + ?Sized>(sink: &mut S, x: i32, y: i32, size: i32) {
    draw_circle(sink, C_RED, x - size / 4, y, size / 4);
    draw_circle(sink, C_RED, x + size / 4, y, size / 4);
    draw_line(sink, C_RED, x - size / 2, y, x, y - size / 2);
    draw_line(sink, C_RED, x + size / 2, y, x, y - size / 2);
}

/// A small nose-down craft: diamond body, cockpit, thrusters and flames
/// trailing upward.
pub fn draw_arrow<S: PixelSink + ?Sized>(sink: &mut S, x: i32, y: i32, size: i32) {
    let half = size / 2;
    draw_line(sink, C_YELLOW, x, y, x - half, y - half);
    draw_line(sink, C_YELLOW, x, y, x + half, y - half);
    draw_line(sink, C_YELLOW, x - half, y - half, x, y - size);
    draw_line(sink, C_YELLOW, x + half, y - half, x, y - size);

    draw_circle(sink, C_CYAN, x, y - size / 3, size / 6);

    for side in [-1, 1] {
        let tx = x + side * size / 4;
        draw_circle(sink, C_RED, tx, y + size / 6, size / 8);
        draw_line(sink, C_ORANGE, tx, y + size / 6, tx, y + size / 4);
        draw_line(sink, C_YELLOW, x + side * size / 5, y + size / 4, tx, y + size / 6);
    }
}

/// Glowing orb: three concentric rings from deep to pale pink plus an
/// off-centre white glint.
pub fn draw_power_up<S: PixelSink + ?Sized>(sink: &mut S, x: i32, y: i32, size: i32) {
    draw_circle(sink, C_ORB_OUTER, x, y, size / 2);
    draw_circle(sink, C_ORB_MIDDLE, x, y, size / 3);
    draw_circle(sink, C_ORB_INNER, x, y, size / 4);
    draw_circle(sink, C_WHITE, x - size / 8, y + size / 8, size / 8);
}

// ── HUD ───────────────────────────────────────────────────────────────────────

pub const HEALTH_ICON_SIZE: i32 = 15;
pub const HEALTH_SEGMENT_WIDTH: i32 = 30;
pub const HEALTH_SEGMENT_HEIGHT: i32 = 10;
pub const HEALTH_SEGMENT_GAP: i32 = 5;

/// Heart icon at `(x, y)` followed by one solid segment per remaining life.
pub fn draw_health_bar<S: PixelSink + ?Sized>(sink: &mut S, x: i32, y: i32, lives: i32) {
    draw_heart(sink, x, y, HEALTH_ICON_SIZE);

    let start_x = x + 13;
    for i in 0..lives.max(0) {
        let seg_x = start_x + i * (HEALTH_SEGMENT_WIDTH + HEALTH_SEGMENT_GAP);
        for py in y - HEALTH_SEGMENT_HEIGHT / 2..y + HEALTH_SEGMENT_HEIGHT / 2 {
            for px in seg_x..seg_x + HEALTH_SEGMENT_WIDTH {
                sink.plot(px, py, C_RED);
            }
        }
    }
}
