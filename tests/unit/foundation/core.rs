use super::*;

#[test]
fn canvas_rejects_zero_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    assert_eq!(Canvas::new(1080, 1920).unwrap(), Canvas::STORY);
}

#[test]
fn canvas_byte_len_is_rgba8() {
    let c = Canvas::new(3, 2).unwrap();
    assert_eq!(c.byte_len_rgba8(), 24);
    assert_eq!(c.size(), Size::new(3.0, 2.0));
}

#[test]
fn rgba8_array_order() {
    assert_eq!(Rgba8::new(1, 2, 3, 4).to_array(), [1, 2, 3, 4]);
    assert_eq!(Rgba8::opaque(9, 9, 9).a, 255);
}
