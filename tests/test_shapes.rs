use std::collections::HashSet;

use space_blaster::entities::*;
use space_blaster::raster::{Point, Rgb};
use space_blaster::shapes::*;

type Sink = Vec<(Point, Rgb)>;

fn points(sink: &Sink) -> HashSet<Point> {
    sink.iter().map(|&(p, _)| p).collect()
}

fn colours(sink: &Sink) -> HashSet<Rgb> {
    sink.iter().map(|&(_, c)| c).collect()
}

#[test]
fn block_fills_its_square() {
    let mut sink = Sink::new();
    let block = Block { x: 100, y: 400, size: 20 };
    draw_block(&mut sink, &block);

    let p = points(&sink);
    assert_eq!(p.len(), 21 * 21);
    assert!(p.iter().all(|q| (100..=120).contains(&q.x) && (400..=420).contains(&q.y)));
    assert_eq!(colours(&sink).len(), 1);
}

#[test]
fn recipes_are_deterministic() {
    let mut a = Sink::new();
    let mut b = Sink::new();
    draw_arrow(&mut a, 300, 300, ARROW_SIZE);
    draw_arrow(&mut b, 300, 300, ARROW_SIZE);
    assert_eq!(a, b);
}

#[test]
fn recipes_translate_with_anchor() {
    let mut a = Sink::new();
    let mut b = Sink::new();
    draw_heart(&mut a, 0, 0, HEART_SIZE);
    draw_heart(&mut b, 50, 70, HEART_SIZE);
    let shifted: Vec<_> = b
        .iter()
        .map(|&(p, c)| (Point::new(p.x - 50, p.y - 70), c))
        .collect();
    assert_eq!(a, shifted);
}

#[test]
fn heart_has_lobes_and_point() {
    let mut sink = Sink::new();
    draw_heart(&mut sink, 100, 100, 16);
    let p = points(&sink);
    // lobe tops, outer corners, and the tip
    assert!(p.contains(&Point::new(96, 104)));
    assert!(p.contains(&Point::new(104, 104)));
    assert!(p.contains(&Point::new(92, 100)));
    assert!(p.contains(&Point::new(108, 100)));
    assert!(p.contains(&Point::new(100, 92)));
    assert_eq!(colours(&sink), HashSet::from([C_RED]));
}

#[test]
fn arrow_points_down() {
    let mut sink = Sink::new();
    draw_arrow(&mut sink, 200, 200, 18);
    let lowest = points(&sink).iter().map(|q| q.y).min();
    assert_eq!(lowest, Some(200 - 18));
    assert!(colours(&sink).contains(&C_CYAN));
}

#[test]
fn power_up_uses_four_colours() {
    let mut sink = Sink::new();
    draw_power_up(&mut sink, 50, 50, POWER_UP_SIZE);
    assert_eq!(colours(&sink).len(), 4);
    assert!(colours(&sink).contains(&C_WHITE));
    let widest = points(&sink).iter().map(|q| q.x).max();
    assert_eq!(widest, Some(50 + POWER_UP_SIZE / 2));
}

#[test]
fn ship_stays_inside_its_footprint() {
    let mut sink = Sink::new();
    let ship = Ship::new();
    draw_ship(&mut sink, &ship);
    for q in points(&sink) {
        assert!(q.x >= ship.x && q.x <= ship.x + SHIP_WIDTH);
        assert!(q.y >= ship.y - 14 && q.y <= ship.y + SHIP_HEIGHT);
    }
    assert!(colours(&sink).contains(&C_YELLOW));
}

#[test]
fn shield_rings_the_ship() {
    let mut sink = Sink::new();
    let ship = Ship::new();
    draw_shield(&mut sink, &ship);
    let (cx, cy) = ship.center();
    let p = points(&sink);
    assert!(p.contains(&Point::new(cx + SHIP_WIDTH, cy)));
    assert!(p.contains(&Point::new(cx, cy - SHIP_WIDTH)));
    assert_eq!(colours(&sink), HashSet::from([C_CYAN]));
}

#[test]
fn bullet_is_a_short_stroke() {
    let mut sink = Sink::new();
    draw_bullet(&mut sink, &Bullet { x: 10.7, y: 20.2, angle: 0.0 });
    let expected: HashSet<_> = (20..=25).map(|y| Point::new(10, y)).collect();
    assert_eq!(points(&sink), expected);
}

#[test]
fn health_bar_has_one_segment_per_life() {
    let mut sink = Sink::new();
    draw_health_bar(&mut sink, 10, 680, 3);
    let p = points(&sink);
    let seg = |i: i32| Point::new(23 + i * (HEALTH_SEGMENT_WIDTH + HEALTH_SEGMENT_GAP) + 1, 680);
    assert!(p.contains(&seg(0)));
    assert!(p.contains(&seg(2)));
    assert!(!p.contains(&seg(3)));
}

#[test]
fn health_bar_without_lives_is_just_the_icon() {
    let mut with_none = Sink::new();
    let mut icon = Sink::new();
    draw_health_bar(&mut with_none, 10, 680, -1);
    draw_heart(&mut icon, 10, 680, HEALTH_ICON_SIZE);
    assert_eq!(with_none, icon);
}
