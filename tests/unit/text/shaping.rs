use super::*;

const WHITE: TextBrushRgba8 = TextBrushRgba8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

fn fixture_face(engine: &mut TextLayoutEngine) -> FontFace {
    let font_bytes = std::fs::read("tests/data/fonts/DejaVuSansMono.ttf").unwrap();
    engine.load_font(font_bytes).unwrap()
}

#[test]
fn empty_font_bytes_are_rejected() {
    let mut engine = TextLayoutEngine::new();
    let err = engine.load_font(Vec::new()).unwrap_err();
    assert!(matches!(err, StoryError::Font(_)));
}

#[test]
fn garbage_font_bytes_are_rejected() {
    let mut engine = TextLayoutEngine::new();
    let err = engine.load_font(b"<html>not a font</html>".to_vec()).unwrap_err();
    assert!(matches!(err, StoryError::Font(_)));
}

#[test]
fn registered_face_exposes_family_name() {
    let mut engine = TextLayoutEngine::new();
    let face = fixture_face(&mut engine);
    assert!(face.family().contains("DejaVu"), "{}", face.family());
}

#[test]
fn block_stacks_lines_with_spacing() {
    let mut engine = TextLayoutEngine::new();
    let face = fixture_face(&mut engine);

    let block = engine
        .shape_block(&["The Lord is", "my shepherd"], &face, 52.0, 31.0, WHITE)
        .unwrap();
    let sizes = block.metrics().line_sizes().to_vec();
    assert_eq!(block.lines.len(), 2);
    // Monospace: equal char counts give equal widths.
    assert_eq!(sizes[0].width, sizes[1].width);
    assert!(sizes[0].width > 52.0 * 0.5 * 10.0);

    let size = block.metrics().size();
    assert_eq!(size.height, sizes[0].height + 31.0 + sizes[1].height);

    let again = engine
        .shape_block(&["The Lord is", "my shepherd"], &face, 52.0, 31.0, WHITE)
        .unwrap();
    assert_eq!(again.metrics(), block.metrics());
}

#[test]
fn glyph_runs_carry_the_shaping_brush() {
    let mut engine = TextLayoutEngine::new();
    let face = fixture_face(&mut engine);
    let gray = Rgba8::opaque(230, 230, 230);

    let line = engine.shape_line("Psalm 23 1", &face, 40.0, gray.into()).unwrap();
    let mut runs = 0;
    for layout_line in line.layout.lines() {
        for item in layout_line.items() {
            if let parley::layout::PositionedLayoutItem::GlyphRun(run) = item {
                assert_eq!(Rgba8::from(run.style().brush), gray);
                runs += 1;
            }
        }
    }
    assert!(runs > 0);
}

#[test]
fn non_positive_size_is_rejected() {
    let mut engine = TextLayoutEngine::new();
    let face = fixture_face(&mut engine);
    assert!(engine.shape_line("x", &face, 0.0, WHITE).is_err());
    assert!(engine.shape_line("x", &face, f32::NAN, WHITE).is_err());
}
