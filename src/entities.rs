//! Game entities and the session aggregate.  Plain data; behaviour lives in
//! `compute` and `collision`.
//!
//! Coordinates are logical playfield units with the origin in the
//! bottom-left corner: y grows upward, falling things move toward y = 0.

// ── Playfield & ship geometry ─────────────────────────────────────────────────

pub const PLAYFIELD_WIDTH: i32 = 900;
pub const PLAYFIELD_HEIGHT: i32 = 700;

pub const SHIP_WIDTH: i32 = 40;
pub const SHIP_HEIGHT: i32 = 30;
/// Pixels per move intent.
pub const SHIP_SPEED: i32 = 13;
pub const SHIP_START_X: i32 = PLAYFIELD_WIDTH / 2;
pub const SHIP_START_Y: i32 = 50;

pub const HEART_SIZE: i32 = 17;
pub const ARROW_SIZE: i32 = 18;
pub const POWER_UP_SIZE: i32 = 18;

// ── Enums ─────────────────────────────────────────────────────────────────────

/// The three difficulty presets offered by the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    SelectingDifficulty,
    Playing,
    Won,
    Lost,
}

/// Timed ship modifiers granted by power-ups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Buff {
    /// Fire three bullets in a fan instead of one.
    TripleShot,
    /// Absorb arrows within a ship-width radius.
    Shield,
}

/// Speeds and per-tick spawn probabilities for one `Level`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyProfile {
    pub heart_speed: i32,
    pub heart_spawn_rate: f64,
    pub arrow_speed: i32,
    pub arrow_spawn_rate: f64,
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    /// Anchor corner (smallest x and y) of the ship's bounding box.
    pub x: i32,
    pub y: i32,
    /// Tick on which triple-shot was activated, if active.
    pub triple_shot: Option<u64>,
    /// Tick on which the shield was activated, if active.
    pub shield: Option<u64>,
}

impl Ship {
    pub fn new() -> Self {
        Ship {
            x: SHIP_START_X,
            y: SHIP_START_Y,
            triple_shot: None,
            shield: None,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + SHIP_WIDTH / 2, self.y + SHIP_HEIGHT / 2)
    }

    pub fn has(&self, buff: Buff) -> bool {
        match buff {
            Buff::TripleShot => self.triple_shot.is_some(),
            Buff::Shield => self.shield.is_some(),
        }
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

/// A player bullet.  Positions are floats so angled shots stay smooth.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    /// Degrees from vertical; 0 is straight up, positive leans right.
    pub angle: f32,
}

/// A destructible square target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

/// A heart (reward) or arrow (hazard) dropping through the playfield.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallingItem {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerUp {
    pub x: i32,
    pub y: i32,
}

/// Background decoration; never collides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Simulation functions take it by value and hand
/// back the updated copy.
#[derive(Clone, Debug)]
pub struct GameState {
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub blocks: Vec<Block>,
    pub hearts: Vec<FallingItem>,
    pub arrows: Vec<FallingItem>,
    pub power_ups: Vec<PowerUp>,
    pub stars: Vec<Star>,
    pub score: u32,
    /// May dip to zero or below on the tick that ends the session.
    pub lives: i32,
    /// Chosen once from the menu; `None` until then.
    pub level: Option<Level>,
    pub lost_all_lives: bool,
    pub cleared_all_blocks: bool,
    /// Simulation tick counter; the clock for buff timers.
    pub frame: u64,
}

impl GameState {
    /// Clearing the field wins even when the last life went on the same tick.
    pub fn status(&self) -> GameStatus {
        if self.level.is_none() {
            GameStatus::SelectingDifficulty
        } else if self.cleared_all_blocks {
            GameStatus::Won
        } else if self.lost_all_lives {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status() == GameStatus::Playing
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status(), GameStatus::Won | GameStatus::Lost)
    }
}
