use curse_screen::scrollbar::TrackCell;
use curse_screen::{CellPos, HeadlessTerminal, Screen, ScreenConfig, ScrollbarGeometry};
use proptest::prelude::*;

fn compute(start: usize, end: usize, length: usize, rows: u16) -> ScrollbarGeometry {
    ScrollbarGeometry::compute(CellPos::new(1, 0), start..end, length, rows)
}

#[test]
fn whole_list_visible_fills_the_track() {
    let g = compute(0, 100, 100, 20);
    assert_eq!(g.start_space, 0);
    assert_eq!(g.end_space, 0);
    assert_eq!(g.thumb_len(), 20);
}

#[test]
fn middle_window_matches_proportions() {
    let g = compute(50, 60, 100, 20);
    assert_eq!(g.start_space, 10);
    assert_eq!(g.end_space, 8);
    assert_eq!(g.thumb_len(), 2);
}

#[test]
fn empty_list_draws_a_full_thumb() {
    let backend = HeadlessTerminal::headless(30, 10).unwrap();
    let mut screen = Screen::initialize(backend, &ScreenConfig::default()).unwrap();

    let g = screen
        .scroll_bar(CellPos::new(1, 9), 0..0, 0, Some(20))
        .expect("empty list must not fault");
    assert_eq!(g.thumb_len(), 20);
    assert!(g.cells().all(|(_, cell)| cell == TrackCell::Thumb));
}

proptest! {
    #[test]
    fn track_is_partitioned(
        length in 0usize..10_000,
        a in 0usize..12_000,
        b in 0usize..12_000,
        rows in 0u16..200,
    ) {
        let (start, end) = (a.min(b), a.max(b));
        let g = compute(start, end, length, rows);

        prop_assert!(g.start_space + g.end_space <= rows);
        prop_assert_eq!(g.start_space + g.thumb_len() + g.end_space, rows);
        prop_assert_eq!(g.cells().count(), usize::from(rows));

        let mut seen: Vec<u16> = g.cells().map(|(row, _)| row).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), usize::from(rows));
    }

    #[test]
    fn scrolled_content_always_shows_above(
        length in 1usize..10_000,
        start in 1usize..10_000,
        rows in 1u16..200,
    ) {
        prop_assume!(start <= length);
        let g = compute(start, length, length, rows);
        prop_assert!(g.start_space >= 1);
        prop_assert_eq!(g.end_space, 0);
    }

    #[test]
    fn spaces_follow_rounding_rules(
        length in 1usize..5_000,
        a in 0usize..5_000,
        b in 0usize..5_000,
        rows in 1u16..100,
    ) {
        let (start, end) = (a.min(b).min(length), a.max(b).min(length));
        let g = compute(start, end, length, rows);
        let rows_f = f64::from(rows);
        let len_f = length as f64;

        let ceil = (start as f64 * rows_f / len_f).ceil() as u16;
        let floor = ((length - end) as f64 * rows_f / len_f).floor() as u16;
        prop_assert_eq!(g.start_space, ceil);
        prop_assert_eq!(g.end_space, floor);
    }
}
