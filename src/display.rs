//! Terminal output: a Braille pixel canvas and the per-frame flush.
//!
//! The playfield is rasterized into a braille canvas (2 × 4 dots per
//! terminal cell, y flipped so the playfield floor is the last row), then
//! the scene's text labels are printed on top.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use space_blaster::entities::{GameState, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use space_blaster::raster::{PixelSink, Rgb};
use space_blaster::scene::{draw_frame, TextLabel};

const DOTS_X: usize = 2;
const DOTS_Y: usize = 4;
const BRAILLE_BASE: u32 = 0x2800;

/// Braille sub-cell bit for a dot at `(sub_x, sub_y)` inside one cell.
fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

// ── Braille canvas ────────────────────────────────────────────────────────────

/// Pixel sink that folds the 900 × 700 playfield down onto terminal cells.
/// The last colour plotted into a cell wins.
pub struct BrailleCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<(u8, Rgb)>,
}

impl BrailleCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let (cols, rows) = (cols.max(1) as usize, rows.max(1) as usize);
        Self {
            cols,
            rows,
            cells: vec![(0, Rgb(0, 0, 0)); cols * rows],
        }
    }

    /// Terminal cell under a playfield point, y flipped.
    fn cell_of(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if !(0..PLAYFIELD_WIDTH).contains(&x) || !(0..PLAYFIELD_HEIGHT).contains(&y) {
            return None;
        }
        let col = x as usize * self.cols / PLAYFIELD_WIDTH as usize;
        let row = (PLAYFIELD_HEIGHT - 1 - y) as usize * self.rows / PLAYFIELD_HEIGHT as usize;
        Some((col as u16, row as u16))
    }

    fn flush<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let (bits, color) = self.cells[row * self.cols + col];
                if bits == 0 {
                    continue;
                }
                let glyph = char::from_u32(BRAILLE_BASE + bits as u32).unwrap_or('⣿');
                out.queue(cursor::MoveTo(col as u16, row as u16))?;
                out.queue(style::SetForegroundColor(to_color(color)))?;
                out.queue(Print(glyph))?;
            }
        }
        Ok(())
    }
}

impl PixelSink for BrailleCanvas {
    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        if !(0..PLAYFIELD_WIDTH).contains(&x) || !(0..PLAYFIELD_HEIGHT).contains(&y) {
            return;
        }
        let dot_w = self.cols * DOTS_X;
        let dot_h = self.rows * DOTS_Y;
        let dx = x as usize * dot_w / PLAYFIELD_WIDTH as usize;
        let dy = (PLAYFIELD_HEIGHT - 1 - y) as usize * dot_h / PLAYFIELD_HEIGHT as usize;

        let cell = &mut self.cells[(dy / DOTS_Y) * self.cols + dx / DOTS_X];
        cell.0 |= braille_bit(dx % DOTS_X, dy % DOTS_Y);
        cell.1 = color;
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut canvas = BrailleCanvas::new(cols, rows);
    let labels = draw_frame(state, &mut canvas);

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    canvas.flush(out)?;
    for label in &labels {
        draw_label(out, &canvas, label)?;
    }

    // Leave the cursor on the bottom row
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_label<W: Write>(
    out: &mut W,
    canvas: &BrailleCanvas,
    label: &TextLabel,
) -> std::io::Result<()> {
    let x = label.x.clamp(0, PLAYFIELD_WIDTH - 1);
    let y = label.y.clamp(0, PLAYFIELD_HEIGHT - 1);
    if let Some((col, row)) = canvas.cell_of(x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(to_color(label.color)))?;
        out.queue(Print(&label.text))?;
    }
    Ok(())
}
