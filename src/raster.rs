//! Pixel generators for the two drawing primitives.
//!
//! Both generators are lazy iterators over integer `Point`s and know nothing
//! about game state.  Callers stream them into a `PixelSink`.

/// Integer pixel coordinate on the playfield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Anything that can receive plotted pixels.
pub trait PixelSink {
    fn plot(&mut self, x: i32, y: i32, color: Rgb);
}

/// Collects every plotted pixel in order; handy for capturing a frame.
impl PixelSink for Vec<(Point, Rgb)> {
    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        self.push((Point::new(x, y), color));
    }
}

// ── Lines ─────────────────────────────────────────────────────────────────────

/// Pixels of the segment `(x1, y1) → (x2, y2)`, both ends included.
///
/// Steps one pixel along the major axis per iteration and accumulates the
/// minor-axis error in units of half a pixel.  An exact half-pixel tie always
/// resolves toward +x / +y, so a segment and its reverse cover the same pixels.
pub fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Line {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let steep = dy > dx;
    let major = if steep { dy } else { dx };
    Line {
        x: x1,
        y: y1,
        dx,
        dy,
        sx: if x1 < x2 { 1 } else { -1 },
        sy: if y1 < y2 { 1 } else { -1 },
        steep,
        err: 0,
        remaining: major as usize + 1,
    }
}

#[derive(Clone, Debug)]
pub struct Line {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    steep: bool,
    err: i32,
    remaining: usize,
}

impl Line {
    fn step(&mut self) {
        let (major, minor, minor_dir) = if self.steep {
            (self.dy, self.dx, self.sx)
        } else {
            (self.dx, self.dy, self.sy)
        };

        self.err += 2 * minor;
        let advance = if minor_dir > 0 {
            self.err >= major
        } else {
            self.err > major
        };
        if advance {
            self.err -= 2 * major;
            if self.steep {
                self.x += self.sx;
            } else {
                self.y += self.sy;
            }
        }

        if self.steep {
            self.y += self.sy;
        } else {
            self.x += self.sx;
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let p = Point::new(self.x, self.y);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.step();
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Line {}

// ── Circles ───────────────────────────────────────────────────────────────────

/// Outline of the circle of radius `r` around `(cx, cy)`.
///
/// Midpoint algorithm over the first octant; each generated offset is
/// emitted as all eight reflections, so some points repeat on the axes and
/// diagonals.  A negative radius yields nothing.
pub fn circle(cx: i32, cy: i32, r: i32) -> Circle {
    Circle {
        cx,
        cy,
        x: 0,
        y: r,
        d: 1 - r,
        reflection: 0,
        done: r < 0,
    }
}

#[derive(Clone, Debug)]
pub struct Circle {
    cx: i32,
    cy: i32,
    x: i32,
    y: i32,
    d: i32,
    reflection: u8,
    done: bool,
}

impl Iterator for Circle {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done || self.x > self.y {
            return None;
        }

        let (x, y) = (self.x, self.y);
        let (ox, oy) = match self.reflection {
            0 => (x, y),
            1 => (-x, y),
            2 => (x, -y),
            3 => (-x, -y),
            4 => (y, x),
            5 => (-y, x),
            6 => (y, -x),
            _ => (-y, -x),
        };

        self.reflection += 1;
        if self.reflection == 8 {
            self.reflection = 0;
            if self.d < 0 {
                self.d += 2 * self.x + 3;
            } else {
                self.d += 2 * (self.x - self.y) + 5;
                self.y -= 1;
            }
            self.x += 1;
        }

        Some(Point::new(self.cx + ox, self.cy + oy))
    }
}

// ── Sink helpers ──────────────────────────────────────────────────────────────

pub fn draw_line<S: PixelSink + ?Sized>(sink: &mut S, color: Rgb, x1: i32, y1: i32, x2: i32, y2: i32) {
    for p in line(x1, y1, x2, y2) {
        sink.plot(p.x, p.y, color);
    }
}

pub fn draw_circle<S: PixelSink + ?Sized>(sink: &mut S, color: Rgb, cx: i32, cy: i32, r: i32) {
    for p in circle(cx, cy, r) {
        sink.plot(p.x, p.y, color);
    }
}
