use super::*;
use crate::foundation::math::Rng64;

fn contains(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && outer.x1 >= inner.x1 && outer.y1 >= inner.y1
}

#[test]
fn default_story_geometry_matches_reference_numbers() {
    let cfg = StoryConfig::default();
    assert_eq!(base_line_y(&cfg), 1190.0);

    let layout = compose_story_layout(&cfg, Size::new(410.0, 151.0), Size::new(200.0, 45.0));
    assert_eq!(layout.verse, Rect::new(335.0, 1039.0, 745.0, 1190.0));
    assert_eq!(layout.citation, Rect::new(440.0, 1220.0, 640.0, 1265.0));
    assert_eq!(layout.backdrop, Rect::new(275.0, 989.0, 805.0, 1315.0));
    assert_eq!(layout.backdrop_radius, 40.0);
    assert_eq!(layout.verse_origin(), Point::new(335.0, 1039.0));
}

#[test]
fn odd_widths_floor_toward_the_left() {
    let cfg = StoryConfig::default();
    let layout = compose_story_layout(&cfg, Size::new(101.0, 10.0), Size::new(1.0, 10.0));
    assert_eq!(layout.verse.x0, 489.0);
    assert_eq!(layout.citation.x0, 539.0);
}

#[test]
fn wide_citation_drives_backdrop_width() {
    let cfg = StoryConfig::default();
    let layout = compose_story_layout(&cfg, Size::new(100.0, 60.0), Size::new(600.0, 40.0));
    assert_eq!(layout.backdrop.x0, layout.citation.x0 - cfg.box_padding_x);
    assert_eq!(layout.backdrop.x1, layout.citation.x1 + cfg.box_padding_x);
}

#[test]
fn layout_is_deterministic() {
    let cfg = StoryConfig::default();
    let a = compose_story_layout(&cfg, Size::new(377.0, 243.0), Size::new(188.0, 41.0));
    let b = compose_story_layout(&cfg, Size::new(377.0, 243.0), Size::new(188.0, 41.0));
    assert_eq!(a, b);
}

#[test]
fn backdrop_contains_padded_text_rects_for_random_extents() {
    let cfg = StoryConfig::default();
    let mut rng = Rng64::new(5);
    // Up to the wrap width at the verse size and a generous number of lines.
    let max_w = cfg.wrap_width * cfg.font_size as usize;
    for _ in 0..1_000 {
        let verse = Size::new(
            rng.next_index(max_w + 1) as f64,
            rng.next_index(900) as f64,
        );
        let citation = Size::new(rng.next_index(700) as f64, 1.0 + rng.next_index(60) as f64);
        let layout = compose_story_layout(&cfg, verse, citation);

        let pad = |r: Rect| r.inflate(cfg.box_padding_x, cfg.box_padding_y);
        assert!(contains(layout.backdrop, pad(layout.verse)));
        assert!(contains(layout.backdrop, pad(layout.citation)));
        assert_eq!(layout.verse.y1, base_line_y(&cfg));
        assert_eq!(layout.citation.y0, base_line_y(&cfg) + cfg.citation_gap);
    }
}
