//! Per-frame composition.
//!
//! `draw_frame` plots every sprite for the current state into a sink and
//! returns the text the front-end has to print.  Glyph rendering is left to
//! the front-end; this module only supplies strings, anchors and colours.

use crate::entities::{
    GameState, GameStatus, ARROW_SIZE, HEART_SIZE, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH,
    POWER_UP_SIZE,
};
use crate::raster::{PixelSink, Rgb};
use crate::shapes::{
    draw_arrow, draw_block, draw_bullet, draw_health_bar, draw_heart, draw_power_up,
    draw_shield, draw_ship, C_GREEN, C_RED, C_WHITE,
};

/// A string to print with its lower-left anchor in playfield units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLabel {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}

impl TextLabel {
    fn new(text: impl Into<String>, x: i32, y: i32, color: Rgb) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
        }
    }
}

pub const MENU_ITEMS: [&str; 6] = [
    "    Space Shooter Game",
    "Select Difficulty:",
    "1. Easy",
    "2. Medium",
    "3. Hard",
    "Press 1, 2, or 3 to start",
];

const TEXT_X: i32 = PLAYFIELD_WIDTH / 2 - 100;

pub fn draw_frame<S: PixelSink + ?Sized>(state: &GameState, sink: &mut S) -> Vec<TextLabel> {
    match state.status() {
        GameStatus::SelectingDifficulty => menu_labels(),
        GameStatus::Playing => {
            draw_field(state, sink);
            hud_labels(state)
        }
        GameStatus::Won | GameStatus::Lost => game_over_labels(state),
    }
}

fn menu_labels() -> Vec<TextLabel> {
    MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            TextLabel::new(*item, TEXT_X, PLAYFIELD_HEIGHT / 2 + 100 - i as i32 * 30, C_WHITE)
        })
        .collect()
}

fn draw_field<S: PixelSink + ?Sized>(state: &GameState, sink: &mut S) {
    for star in &state.stars {
        sink.plot(star.x, star.y, C_WHITE);
    }

    draw_ship(sink, &state.ship);
    if state.ship.shield.is_some() {
        draw_shield(sink, &state.ship);
    }

    for bullet in &state.bullets {
        draw_bullet(sink, bullet);
    }
    for block in &state.blocks {
        draw_block(sink, block);
    }
    for heart in &state.hearts {
        draw_heart(sink, heart.x, heart.y, HEART_SIZE);
    }
    for arrow in &state.arrows {
        draw_arrow(sink, arrow.x, arrow.y, ARROW_SIZE);
    }
    for p in &state.power_ups {
        draw_power_up(sink, p.x, p.y, POWER_UP_SIZE);
    }

    draw_health_bar(sink, 10, PLAYFIELD_HEIGHT - 20, state.lives);
}

/// Label for the active buff; the shield is named first when both run.
pub fn buff_label(state: &GameState) -> &'static str {
    if state.ship.shield.is_some() {
        "Power-Up: Invincible"
    } else if state.ship.triple_shot.is_some() {
        "Power-Up: Bullet Spread"
    } else {
        "Power-Up: None"
    }
}

fn hud_labels(state: &GameState) -> Vec<TextLabel> {
    let score_x = PLAYFIELD_WIDTH - 150;
    vec![
        TextLabel::new(
            format!("Score: {}", state.score),
            score_x,
            PLAYFIELD_HEIGHT - 25,
            C_WHITE,
        ),
        TextLabel::new(buff_label(state), score_x - 100, 15, C_WHITE),
    ]
}

fn game_over_labels(state: &GameState) -> Vec<TextLabel> {
    let cy = PLAYFIELD_HEIGHT / 2;
    let headline = match state.status() {
        GameStatus::Won => TextLabel::new("You Win!", TEXT_X, cy, C_GREEN),
        _ => TextLabel::new("Game Over", TEXT_X, cy, C_RED),
    };
    vec![
        headline,
        TextLabel::new(format!("Final Score: {}", state.score), TEXT_X, cy - 30, C_WHITE),
        TextLabel::new("Press 'R' to restart", TEXT_X, cy - 60, C_WHITE),
    ]
}
