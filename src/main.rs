mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use space_blaster::compute::{
    fire, move_ship_left, move_ship_right, new_state, restart_game, select_difficulty, tick,
    TICKS_PER_SECOND,
};
use space_blaster::entities::{GameState, GameStatus, Level};

const FRAME: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND);

// ── Held keys ─────────────────────────────────────────────────────────────────

/// Frames a press or repeat event keeps its key "down".  Terminals without
/// release events rely on this to let go of a key.
const HOLD_WINDOW: u64 = 4;

/// Frames between ship steps while a direction is held.
const MOVE_COOLDOWN: u32 = 1;
/// Frames between shots while Space is held.
const SHOOT_COOLDOWN: u32 = 6;

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const FIRE_KEYS: [KeyCode; 1] = [KeyCode::Char(' ')];

/// Last frame each key was seen pressed, so several keys can be down at once.
#[derive(Default)]
struct HeldKeys {
    seen: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    fn press(&mut self, code: KeyCode, frame: u64) {
        self.seen.insert(code, frame);
    }

    fn release(&mut self, code: &KeyCode) {
        self.seen.remove(code);
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| {
            self.seen
                .get(k)
                .is_some_and(|&at| frame.saturating_sub(at) <= HOLD_WINDOW)
        })
    }
}

/// Frame countdown gating a repeatable action.
struct Cooldown {
    period: u32,
    left: u32,
}

impl Cooldown {
    fn new(period: u32) -> Self {
        Self { period, left: 0 }
    }

    /// True when the action may run now; restarts the countdown if so.
    fn trigger(&mut self, wanted: bool) -> bool {
        let fired = wanted && self.left == 0;
        if fired {
            self.left = self.period;
        }
        fired
    }

    fn tick(&mut self) {
        self.left = self.left.saturating_sub(1);
    }
}

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LevelArg {
    Easy,
    Medium,
    Hard,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Easy => Level::Easy,
            LevelArg::Medium => Level::Medium,
            LevelArg::Hard => Level::Hard,
        }
    }
}

/// Terminal block shooter
#[derive(Parser, Debug)]
#[command(name = "space_blaster")]
#[command(about = "Shoot the blocks, dodge the arrows, catch the hearts")]
struct Args {
    /// Random seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the difficulty menu
    #[arg(long, value_enum)]
    level: Option<LevelArg>,

    /// Write log records to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Terminal ──────────────────────────────────────────────────────────────────

/// Raw mode plus the alternate screen; dropping it puts the terminal back.
struct TerminalGuard {
    out: BufWriter<Stdout>,
    enhanced_keys: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("cannot enable raw mode")?;
        let mut guard = Self {
            out: BufWriter::new(io::stdout()),
            enhanced_keys: false,
        };
        guard.out.execute(terminal::EnterAlternateScreen)?;
        guard.out.execute(cursor::Hide)?;

        // Release events need the kitty keyboard protocol; without it the
        // hold window takes over.
        guard.enhanced_keys = guard
            .out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        debug!("keyboard enhancement: {}", guard.enhanced_keys);

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.enhanced_keys {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Blocking reads happen on their own thread; the loop polls the channel.
fn spawn_input_thread() -> Receiver<Event> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });
    rx
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Feed the state through a by-value transition in place.
fn apply(state: &mut GameState, f: impl FnOnce(GameState) -> GameState) {
    let current = std::mem::replace(state, new_state());
    *state = f(current);
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn menu_level(code: KeyCode) -> Option<Level> {
    match code {
        KeyCode::Char('1') => Some(Level::Easy),
        KeyCode::Char('2') => Some(Level::Medium),
        KeyCode::Char('3') => Some(Level::Hard),
        _ => None,
    }
}

/// Runs until the player quits.  Menu, restart and quit keys act on the
/// press itself; movement and firing act on every frame their key is held.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rng: &mut StdRng,
    events: &Receiver<Event>,
) -> Result<()> {
    let mut held = HeldKeys::default();
    let mut move_gate = Cooldown::new(MOVE_COOLDOWN);
    let mut fire_gate = Cooldown::new(SHOOT_COOLDOWN);
    let mut frame: u64 = 0;

    loop {
        let started = Instant::now();
        frame += 1;

        for ev in events.try_iter() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Release => held.release(&code),
                KeyEventKind::Repeat => held.press(code, frame),
                KeyEventKind::Press => {
                    held.press(code, frame);
                    if is_quit(code, modifiers) {
                        return Ok(());
                    }
                    match state.status() {
                        GameStatus::SelectingDifficulty => {
                            if let Some(level) = menu_level(code) {
                                apply(state, |s| select_difficulty(s, level, rng));
                            }
                        }
                        GameStatus::Won | GameStatus::Lost => {
                            if matches!(code, KeyCode::Char('r') | KeyCode::Char('R')) {
                                apply(state, |s| restart_game(s, rng));
                            }
                        }
                        GameStatus::Playing => {}
                    }
                }
            }
        }

        if state.is_playing() {
            let left = held.any_held(&LEFT_KEYS, frame);
            let right = held.any_held(&RIGHT_KEYS, frame);
            if move_gate.trigger(left || right) {
                apply(state, if left { move_ship_left } else { move_ship_right });
            }
            if fire_gate.trigger(held.any_held(&FIRE_KEYS, frame)) {
                apply(state, fire);
            }
        }
        move_gate.tick();
        fire_gate.tick();

        apply(state, |s| tick(s, rng));
        display::render(out, state)?;

        if let Some(rest) = FRAME.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("session seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut state = new_state();
    if let Some(level) = args.level {
        state = select_difficulty(state, level.into(), &mut rng);
    }

    let result = {
        let mut term = TerminalGuard::enter()?;
        let events = spawn_input_thread();
        game_loop(&mut term.out, &mut state, &mut rng, &events)
    };

    info!("exiting with score {}", state.score);
    result
}
